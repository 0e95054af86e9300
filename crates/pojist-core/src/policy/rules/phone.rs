//! Czech phone number normalization.

/// Normalize a raw phone match to the 9-digit national number.
///
/// All non-digits are dropped, then a leading `420` or `00420` country code.
/// Anything that is not exactly 9 digits afterwards yields an empty string.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let national = if let Some(rest) = digits.strip_prefix("420") {
        rest
    } else if let Some(rest) = digits.strip_prefix("00420") {
        rest
    } else {
        digits.as_str()
    };

    if national.len() == 9 {
        national.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_prefix() {
        assert_eq!(normalize_phone("+420 123 456 789"), "123456789");
        assert_eq!(normalize_phone("00420123456789"), "123456789");
        assert_eq!(normalize_phone("420 603 111 222"), "603111222");
    }

    #[test]
    fn test_national_number() {
        assert_eq!(normalize_phone("603 111 222"), "603111222");
        assert_eq!(normalize_phone("603-111-222"), "603111222");
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(normalize_phone("12345"), "");
        assert_eq!(normalize_phone("+420 1234"), "");
        assert_eq!(normalize_phone("1234567890"), "");
        assert_eq!(normalize_phone(""), "");
    }
}
