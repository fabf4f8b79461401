//! Error types for the catalog engine

use serde::Serialize;
use thiserror::Error;

/// Numeric error codes carried in every error response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchData = 2,
    BadValue = 3,
    MissingArgument = 4,
    CorruptData = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    /// Error code reported to the caller
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidArgument(_) => ErrorCode::MissingArgument,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::DataIntegrity(_) => ErrorCode::CorruptData,
            AppError::Io(_) | AppError::Json(_) | AppError::Config(_) | AppError::Internal(_) => {
                ErrorCode::Failure
            }
        }
    }

    /// Build the response body. Internal failures are logged and masked.
    pub fn to_response(&self) -> ErrorResponse {
        let code = self.code();
        let message = match self {
            AppError::InvalidArgument(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::DataIntegrity(msg) => {
                tracing::error!("Data integrity error: {}", msg);
                msg.clone()
            }
            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "Internal error".to_string()
            }
            AppError::Json(e) => {
                tracing::error!("JSON error: {:?}", e);
                "Internal error".to_string()
            }
            AppError::Config(e) => {
                tracing::error!("Configuration error: {:?}", e);
                "Internal error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_response() {
        let body = AppError::InvalidArgument("keyword is required".into()).to_response();
        assert_eq!(body.code, 4);
        assert_eq!(body.error, "MissingArgument");
        assert_eq!(body.message, "keyword is required");
    }

    #[test]
    fn test_internal_message_is_masked() {
        let body = AppError::Internal("lock poisoned".into()).to_response();
        assert_eq!(body.code, ErrorCode::Failure as u32);
        assert_eq!(body.message, "Internal error");
    }
}
