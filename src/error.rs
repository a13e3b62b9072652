//! Custom error types for better error handling and user feedback.
//!
//! This module defines application-specific error types that provide
//! clear, actionable error messages to the frontend.

use thiserror::Error;

/// Main application error type with specific variants for different failure scenarios.
#[derive(Error, Debug)]
pub enum AppError {
    /// Date formatting errors
    #[error("Invalid date input: '{0}'")]
    InvalidDate(String),

    /// Payload decoding errors
    #[error("Failed to decode base64 payload: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert AppError to a user-friendly error message string.
    /// This is used at the invoke boundary where commands return Result<T, String>.
    pub fn to_display_message(&self) -> String {
        match self {
            AppError::InvalidDate(input) => {
                format!("Could not interpret '{}' as a date", input)
            }
            AppError::Base64Decode(_) => {
                "File content could not be decoded. The payload may be corrupted.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_invalid_date_message_names_input() {
        let err = AppError::InvalidDate("garbage".to_string());
        assert!(err.to_display_message().contains("garbage"));
    }

    #[test]
    fn test_decode_error_message_is_presentable() {
        let source = STANDARD.decode("not-valid-base64!@#").unwrap_err();
        let err = AppError::from(source);
        assert!(err.to_display_message().contains("decoded"));
    }
}
