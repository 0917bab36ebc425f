//! Contact field validators: e-mail, phone (telefone) and postal code (CEP).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

// Minimal syntactic check: local@domain.tld without whitespace or extra '@'.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Keeps only ASCII digits, dropping masks like `(11) 91234-5678`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::MalformedEmail)
    }
}

/// Accepts landlines (10 digits) and mobiles (11 digits), with or without mask.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = digits_only(value).len();
    if (10..=11).contains(&digits) {
        Ok(())
    } else {
        Err(ValidationError::MalformedPhoneLength { digits })
    }
}

pub fn validate_postal_code(value: &str) -> Result<(), ValidationError> {
    let digits = digits_only(value).len();
    if digits == 8 {
        Ok(())
    } else {
        Err(ValidationError::MalformedPostalCodeLength { digits })
    }
}
