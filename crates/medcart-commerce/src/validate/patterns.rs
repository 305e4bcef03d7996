//! Shared field patterns, compiled once.

use regex::Regex;
use std::sync::OnceLock;

/// Exactly 10 digits.
pub fn phone() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{10}$").expect("phone pattern"))
}

/// Exactly 6 digits.
pub fn pincode() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{6}$").expect("pincode pattern"))
}

/// Simple local@domain.tld shape.
pub fn email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_pattern() {
        assert!(phone().is_match("1234567890"));
        assert!(!phone().is_match("123456789"));
        assert!(!phone().is_match("12345678901"));
        assert!(!phone().is_match("12345abcde"));
    }

    #[test]
    fn test_pincode_pattern() {
        assert!(pincode().is_match("123456"));
        assert!(!pincode().is_match("12345"));
        assert!(!pincode().is_match("1234567"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(email().is_match("user@example.com"));
        assert!(!email().is_match("user@example"));
        assert!(!email().is_match("user example@x.com"));
        assert!(!email().is_match("@example.com"));
    }
}
