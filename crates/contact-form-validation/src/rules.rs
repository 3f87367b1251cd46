//! Per-field rule chains
//!
//! Each field has an ordered list of rules checked against the trimmed value.
//! The first rule that fails decides the message.

use crate::field::FieldName;
use crate::result::ValidationResult;
use crate::string::{has_max_length, has_min_length, is_present, is_username_charset, js_trim};

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// Validate a raw field value
///
/// Pure and deterministic: the same input always yields the same result.
///
/// # Example
/// ```
/// use contact_form_validation::{validate, FieldName};
///
/// let result = validate(FieldName::Username, "ab");
/// assert!(!result.valid);
/// assert_eq!(result.message, "Username must be at least 3 characters");
/// ```
pub fn validate(field: FieldName, raw: &str) -> ValidationResult {
    let value = js_trim(raw);
    let outcome = match field {
        FieldName::Username => validate_username(value),
        FieldName::Password => validate_password(value),
        FieldName::Message => validate_message(value),
    };
    ValidationResult::from_result(outcome)
}

fn validate_username(value: &str) -> Result<(), &'static str> {
    first_failure(&[
        (is_present(value), "Username is required"),
        (
            has_min_length(value, USERNAME_MIN_LENGTH),
            "Username must be at least 3 characters",
        ),
        (
            is_username_charset(value),
            "Username can only contain letters, numbers, hyphens, and underscores",
        ),
    ])
}

fn validate_password(value: &str) -> Result<(), &'static str> {
    first_failure(&[
        (is_present(value), "Password is required"),
        (
            has_min_length(value, PASSWORD_MIN_LENGTH),
            "Password must be at least 6 characters",
        ),
    ])
}

fn validate_message(value: &str) -> Result<(), &'static str> {
    first_failure(&[
        (is_present(value), "Message is required"),
        (
            has_min_length(value, MESSAGE_MIN_LENGTH),
            "Message must be at least 10 characters",
        ),
        (
            has_max_length(value, MESSAGE_MAX_LENGTH),
            "Message must be less than 1000 characters",
        ),
    ])
}

fn first_failure(checks: &[(bool, &'static str)]) -> Result<(), &'static str> {
    checks
        .iter()
        .find(|(valid, _)| !valid)
        .map(|(_, msg)| Err(*msg))
        .unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "Username is required")]
    #[case("   ", "Username is required")]
    #[case("ab", "Username must be at least 3 characters")]
    #[case(" ab ", "Username must be at least 3 characters")]
    #[case("bob smith", "Username can only contain letters, numbers, hyphens, and underscores")]
    #[case("b!b", "Username can only contain letters, numbers, hyphens, and underscores")]
    fn test_invalid_username(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate(FieldName::Username, input), ValidationResult::failure(expected));
    }

    #[rstest]
    #[case("bob")]
    #[case("bob_1")]
    #[case("  jane-doe  ")]
    fn test_valid_username(#[case] input: &str) {
        assert_eq!(validate(FieldName::Username, input), ValidationResult::success());
    }

    #[rstest]
    #[case("", "Password is required")]
    #[case("\t\n", "Password is required")]
    #[case("12345", "Password must be at least 6 characters")]
    #[case("  abc  ", "Password must be at least 6 characters")]
    fn test_invalid_password(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate(FieldName::Password, input), ValidationResult::failure(expected));
    }

    #[test]
    fn test_password_has_no_charset_rule() {
        assert!(validate(FieldName::Password, "p@ss w0rd!").valid);
        assert!(validate(FieldName::Password, "secret").valid);
    }

    #[rstest]
    #[case("", "Message is required")]
    #[case("too short", "Message must be at least 10 characters")]
    #[case("    short      ", "Message must be at least 10 characters")]
    fn test_invalid_message(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate(FieldName::Message, input), ValidationResult::failure(expected));
    }

    #[test]
    fn test_message_length_bounds() {
        assert!(validate(FieldName::Message, &"a".repeat(10)).valid);
        assert!(validate(FieldName::Message, &"a".repeat(1000)).valid);

        let long = validate(FieldName::Message, &"a".repeat(1001));
        assert_eq!(long.message, "Message must be less than 1000 characters");
    }

    #[rstest]
    #[case("😀😀", false)]
    #[case("😀😀😀", true)]
    #[case("ab😀", false)]
    #[case("abcd😀", true)]
    fn test_password_length_counts_utf16_units(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(validate(FieldName::Password, input).valid, valid);
    }

    #[rstest]
    #[case(994, true)]
    #[case(995, false)]
    fn test_message_upper_bound_with_emoji(#[case] ascii: usize, #[case] valid: bool) {
        // Three emoji add six units
        let message = format!("{}😀😀😀", "a".repeat(ascii));
        let result = validate(FieldName::Message, &message);
        assert_eq!(result.valid, valid);
        if !valid {
            assert_eq!(result.message, "Message must be less than 1000 characters");
        }
    }

    #[rstest]
    #[case("\u{FEFF}bob")]
    #[case("bob\u{FEFF}")]
    #[case("\u{00A0}bob\u{3000}")]
    fn test_username_trims_js_whitespace(#[case] input: &str) {
        assert_eq!(validate(FieldName::Username, input), ValidationResult::success());
    }

    #[test]
    fn test_next_line_is_not_trimmed() {
        let result = validate(FieldName::Username, "bob\u{0085}");
        assert_eq!(
            result.message,
            "Username can only contain letters, numbers, hyphens, and underscores"
        );
    }

    #[test]
    fn test_message_bound_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "a".repeat(1000));
        assert!(validate(FieldName::Message, &padded).valid);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Both too short and outside the charset: the length rule reports
        let result = validate(FieldName::Username, "a!");
        assert_eq!(result.message, "Username must be at least 3 characters");
    }

    #[test]
    fn test_message_empty_iff_valid() {
        let long = "x".repeat(2000);
        let inputs = ["", "ab", "bob_1", "bad name", "secret", long.as_str()];
        for field in FieldName::ALL {
            for input in inputs {
                let result = validate(field, input);
                assert_eq!(result.valid, result.message.is_empty(), "{field}: {input:?}");
            }
        }
    }
}
