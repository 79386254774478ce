use regex::Regex;

use crate::domain::contact::Field;
use crate::errors::AppError;

pub fn validate_name(name: &str) -> Result<(), AppError> {
    // Non-empty, letters only. Digits, punctuation and spaces are rejected.
    let re = Regex::new(r"^\p{Alphabetic}+$")?;

    if re.is_match(name.trim()) {
        Ok(())
    } else {
        Err(AppError::Validation {
            field: Field::Name,
            reason: "must contain only letters".to_string(),
        })
    }
}

pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    // Exactly 10 ASCII digits, unformatted.
    let re = Regex::new(r"^[0-9]{10}$")?;

    if re.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(AppError::Validation {
            field: Field::Phone,
            reason: "must be exactly 10 digits".to_string(),
        })
    }
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    // Must contain at least one '@' and one '.'.
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(AppError::Validation {
            field: Field::Email,
            reason: "must contain '@' and '.'".to_string(),
        })
    }
}

pub fn validate_address(address: &str) -> Result<(), AppError> {
    if address.trim().is_empty() {
        Err(AppError::Validation {
            field: Field::Address,
            reason: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}

/// Format 10 validated digits as DDD-DDD-DDDD.
pub fn format_phone(digits: &str) -> String {
    format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
}
