//! String validation functions
//!
//! Lengths are counted in UTF-16 code units and trimming strips the
//! ECMAScript whitespace set, so results agree with `value.length` and
//! `value.trim()` in the browser.

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("username pattern is valid"));

/// ECMAScript `WhiteSpace` and `LineTerminator` code points
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trim the way `String.prototype.trim` does
///
/// Unlike `str::trim` this strips U+FEFF and keeps U+0085.
pub fn js_trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Length as JavaScript reports it (UTF-16 code units)
pub fn js_length(s: &str) -> usize {
    s.encode_utf16().count()
}

pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

pub fn has_min_length(s: &str, min: usize) -> bool {
    js_length(s) >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    js_length(s) <= max
}

/// Letters, digits, hyphens and underscores only
pub fn is_username_charset(s: &str) -> bool {
    USERNAME_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(has_min_length("hello", 3));
        assert!(!has_min_length("hi", 3));

        assert!(has_max_length("hello", 10));
        assert!(!has_max_length("verylongstring", 5));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 3 units, 6 bytes
        assert!(has_min_length("äöü", 3));
        assert!(has_max_length("äöü", 3));

        // Astral characters take two units each
        assert_eq!(js_length("😀😀😀"), 6);
        assert!(has_min_length("😀😀😀", 6));
        assert!(!has_max_length("😀😀😀", 5));
    }

    #[test]
    fn test_js_trim() {
        assert_eq!(js_trim("  bob \t\n"), "bob");
        assert_eq!(js_trim("\u{FEFF}bob\u{FEFF}"), "bob");
        assert_eq!(js_trim("\u{00A0}\u{3000}bob\u{2028}"), "bob");
        // NEL is not whitespace in JavaScript
        assert_eq!(js_trim("\u{0085}bob\u{0085}"), "\u{0085}bob\u{0085}");
        assert_eq!(js_trim(" \r\n "), "");
    }

    #[test]
    fn test_username_charset() {
        assert!(is_username_charset("bob_1"));
        assert!(is_username_charset("a-b-c"));
        assert!(is_username_charset("ABC123"));

        assert!(!is_username_charset(""));
        assert!(!is_username_charset("bob smith"));
        assert!(!is_username_charset("bob@home"));
        assert!(!is_username_charset("jösé"));
    }
}
