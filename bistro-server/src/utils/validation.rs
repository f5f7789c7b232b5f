//! Input validation helpers
//!
//! Presence checks only; field contents are stored as the client sent them.

use crate::utils::AppError;

/// Reject a required string that is empty or only whitespace.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_blank_is_rejected() {
        let err = validate_required_text("   ", "name").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_long_value_is_accepted() {
        let long = "x".repeat(10_000);
        assert!(validate_required_text(&long, "name").is_ok());
    }

    #[test]
    fn test_email_ok() {
        assert!(validate_required_text("chef@bistro.test", "email").is_ok());
    }
}
