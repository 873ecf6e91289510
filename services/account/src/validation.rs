//! Input validation utilities
//!
//! Every validator checks one raw field value and reports a human-readable
//! reason on failure. None of them panic or touch anything outside their
//! arguments.

use regex::Regex;
use std::sync::OnceLock;

/// Outcome of validating a single field: `Err` carries the reason shown to the user.
pub type FieldValidation = Result<(), String>;

/// Characters accepted as the required "special" character of a password
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Minimum password length, in Unicode scalar values (not UTF-16 units)
pub const PASSWORD_MIN_LENGTH: usize = 8;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX
        .get_or_init(|| Regex::new(r"^[0-9+\-()\s]{7,20}$").expect("Failed to compile phone regex"))
}

/// Validate email
pub fn validate_email(email: &str) -> FieldValidation {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if !email_regex().is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str) -> FieldValidation {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err("Password must be at least 8 characters".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Password must contain an uppercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain a number".to_string());
    }

    if !password.contains(PASSWORD_SPECIAL_CHARS) {
        return Err("Password must contain a special character".to_string());
    }

    Ok(())
}

/// Validate that the confirmation matches the password exactly
pub fn validate_password_match(password: &str, confirm: &str) -> FieldValidation {
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}

/// Validate full name
pub fn validate_name(name: &str) -> FieldValidation {
    if name.is_empty() {
        return Err("Name is required".to_string());
    }

    if name.chars().count() < 2 {
        return Err("Name is too short".to_string());
    }

    Ok(())
}

/// Validate phone number. Absent or empty is valid.
pub fn validate_phone(phone: Option<&str>) -> FieldValidation {
    let Some(phone) = phone.filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    if !phone_regex().is_match(phone) {
        return Err("Invalid phone number".to_string());
    }

    Ok(())
}

/// Validate postal address. Absent or empty is valid.
pub fn validate_address(address: Option<&str>) -> FieldValidation {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return Ok(());
    };

    if address.chars().count() < 5 {
        return Err("Address is too short".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_required() {
        assert_eq!(validate_email(""), Err("Email is required".to_string()));
    }

    #[test]
    fn test_email_format() {
        for email in ["plainaddress", "user@", "user@domain", "@domain.com", "a b@c.d", "a@b c.d"] {
            assert_eq!(
                validate_email(email),
                Err("Invalid email format".to_string()),
                "{email:?} should be rejected"
            );
        }

        for email in ["a@b.c", "jane.doe@example.co.uk", "x+tag@sub.domain.org"] {
            assert!(validate_email(email).is_ok(), "{email:?} should be accepted");
        }
    }

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password(""), Err("Password is required".to_string()));
        // Length is checked before content, even for otherwise strong input
        assert_eq!(
            validate_password("A1!a"),
            Err("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            validate_password("lowercase1!"),
            Err("Password must contain an uppercase letter".to_string())
        );
        assert_eq!(
            validate_password("Uppercase!"),
            Err("Password must contain a number".to_string())
        );
        assert_eq!(
            validate_password("Uppercase1"),
            Err("Password must contain a special character".to_string())
        );
        assert_eq!(
            validate_password("Uppercase1?"),
            Err("Password must contain a special character".to_string())
        );
    }

    #[test]
    fn test_short_passwords_always_invalid() {
        for password in ["A", "Ab1!", "ABC123!", "!!!!!!!", "Aa1!Aa1"] {
            assert!(validate_password(password).is_err(), "{password:?} is too short");
        }
    }

    #[test]
    fn test_strong_passwords_valid() {
        for special in PASSWORD_SPECIAL_CHARS {
            let password = format!("Abcdefg1{special}");
            assert!(validate_password(&password).is_ok(), "{password:?} should pass");
        }
        assert!(validate_password("P4ssword!").is_ok());
        assert!(validate_password("12345678A#").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 characters, more than 8 bytes
        assert!(validate_password("Ünïcö1!A").is_ok());
        assert!(validate_password("Ü1!Aéé").is_err());
    }

    #[test]
    fn test_password_match_is_exact() {
        assert!(validate_password_match("Secret1!", "Secret1!").is_ok());
        assert!(validate_password_match("", "").is_ok());
        assert_eq!(
            validate_password_match("Secret1!", "secret1!"),
            Err("Passwords do not match".to_string())
        );
        assert!(validate_password_match("Secret1!", "Secret1! ").is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(validate_name(""), Err("Name is required".to_string()));
        assert_eq!(validate_name("A"), Err("Name is too short".to_string()));
        assert!(validate_name("Al").is_ok());
        assert!(validate_name("李雷").is_ok());
        assert_eq!(validate_name("é"), Err("Name is too short".to_string()));
    }

    #[test]
    fn test_phone_optional() {
        assert!(validate_phone(None).is_ok());
        assert!(validate_phone(Some("")).is_ok());
    }

    #[test]
    fn test_phone_format() {
        for phone in ["+1 (555) 123-4567", "5551234", "00 44 20 7946 0958"] {
            assert!(validate_phone(Some(phone)).is_ok(), "{phone:?} should be accepted");
        }
        for phone in ["123456", "555-CALL-NOW", "123456789012345678901", "555.123.4567"] {
            assert_eq!(
                validate_phone(Some(phone)),
                Err("Invalid phone number".to_string()),
                "{phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_phone_length_bounds() {
        let longest = "+44 (0) 20 7946 0958";
        assert_eq!(longest.len(), 20);
        assert!(validate_phone(Some(longest)).is_ok());
        assert!(validate_phone(Some("5551234")).is_ok());
        assert!(validate_phone(Some("555123")).is_err());
    }

    #[test]
    fn test_address_optional_with_minimum_length() {
        assert!(validate_address(None).is_ok());
        assert!(validate_address(Some("")).is_ok());
        assert_eq!(
            validate_address(Some("Rd 1")),
            Err("Address is too short".to_string())
        );
        assert!(validate_address(Some("1 Elm")).is_ok());
        assert!(validate_address(Some("1 Main St")).is_ok());
    }
}
