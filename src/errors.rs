use core::fmt;

use crate::domain::contact::Field;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    NotFound(String),
    ParseCommand(String),
    ParseInt(std::num::ParseIntError),
    Regex(regex::Error),
    Validation { field: Field, reason: String },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ParseInt(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing the contact book: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::ParseCommand(choice) => {
                write!(f, "Unrecognized choice: '{}'", choice)
            }
            AppError::ParseInt(e) => {
                write!(f, "Invalid number format: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
            AppError::Validation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<u32>().unwrap_err();
        let err = AppError::ParseInt(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
    }

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation {
            field: Field::Phone,
            reason: "must be exactly 10 digits".to_string(),
        };

        assert_eq!(
            format!("{}", err),
            "Invalid phone: must be exactly 10 digits"
        );
    }

    #[test]
    fn confirm_not_found_message() {
        let err = AppError::NotFound("Contact with ID 42".to_string());

        assert_eq!(format!("{}", err), "Contact with ID 42 not found");
    }
}
