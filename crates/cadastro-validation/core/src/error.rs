//! Validation failures.
//!
//! `Display` is meant for logs. The text shown to the user comes from
//! [`MessageCatalog`](crate::MessageCatalog).

use thiserror::Error;

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field left empty or whitespace only.
    #[error("required value is missing")]
    MissingRequiredValue,

    /// CPF does not have 11 digits, or repeats a single digit.
    #[error("CPF must have 11 digits that are not all identical")]
    MalformedCpf,

    /// CPF check digits do not match.
    #[error("CPF check digits do not match")]
    InvalidChecksum,

    /// Applicant is younger than the configured minimum age.
    #[error("applicant is younger than {minimum} years")]
    UnderageApplicant { minimum: u32 },

    /// Birth date could not be parsed.
    #[error("birth date is not a valid calendar date")]
    MalformedDate,

    #[error("e-mail address is malformed")]
    MalformedEmail,

    #[error("phone number has {digits} digits, expected 10 or 11")]
    MalformedPhoneLength { digits: usize },

    #[error("postal code has {digits} digits, expected 8")]
    MalformedPostalCodeLength { digits: usize },
}

/// Fieldless discriminant of [`ValidationError`], used as a catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingRequiredValue,
    MalformedCpf,
    InvalidChecksum,
    UnderageApplicant,
    MalformedDate,
    MalformedEmail,
    MalformedPhoneLength,
    MalformedPostalCodeLength,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRequiredValue => ErrorKind::MissingRequiredValue,
            Self::MalformedCpf => ErrorKind::MalformedCpf,
            Self::InvalidChecksum => ErrorKind::InvalidChecksum,
            Self::UnderageApplicant { .. } => ErrorKind::UnderageApplicant,
            Self::MalformedDate => ErrorKind::MalformedDate,
            Self::MalformedEmail => ErrorKind::MalformedEmail,
            Self::MalformedPhoneLength { .. } => ErrorKind::MalformedPhoneLength,
            Self::MalformedPostalCodeLength { .. } => ErrorKind::MalformedPostalCodeLength,
        }
    }
}
