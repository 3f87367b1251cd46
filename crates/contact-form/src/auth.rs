use base64::{engine::general_purpose::STANDARD, Engine};

/// Build an HTTP Basic `Authorization` header value
///
/// The credentials are encoded exactly as given, as UTF-8; callers decide
/// what to trim.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let credentials = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encoding() {
        // base64("bob_1:secret")
        assert_eq!(basic_auth_header("bob_1", "secret"), "Basic Ym9iXzE6c2VjcmV0");
    }

    #[test]
    fn test_password_whitespace_is_kept() {
        let header = basic_auth_header("bob", " secret ");
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(decoded, b"bob: secret ");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(basic_auth_header("bob", "ä"), "Basic Ym9iOsOk");
    }

    #[test]
    fn test_colon_in_password() {
        let header = basic_auth_header("bob", "a:b:c");
        let decoded = STANDARD.decode(&header["Basic ".len()..]).unwrap();
        assert_eq!(decoded, b"bob:a:b:c");
    }
}
