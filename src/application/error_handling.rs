// src/application/error_handling.rs
//
// Error reporting for external callers (CLI, test harness, a future
// network layer).
//
// - Maps AppError → a stable, serializable response
// - Keeps the underlying kind visible after façade wrapping
// - Internal failures are logged here, not shown in detail

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind, Resource};

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Item lookup failed (404)
    ItemNotFound,

    /// User lookup failed (404)
    UserNotFound,

    /// Invalid input, invalid genre or duplicate id (400)
    Validation,

    /// Reserved (403)
    Unauthorized,

    /// Lock poisoning, I/O or configuration (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: &AppError) -> Self {
        match error.kind() {
            ErrorKind::NotFound(Resource::Item) => Self::failure(
                ErrorType::ItemNotFound,
                "Item not found",
                Some(error.to_string()),
            ),
            ErrorKind::NotFound(Resource::User) => Self::failure(
                ErrorType::UserNotFound,
                "User not found",
                Some(error.to_string()),
            ),
            ErrorKind::InvalidInput => Self::failure(
                ErrorType::Validation,
                "Invalid input data",
                Some(error.to_string()),
            ),
            ErrorKind::Unauthorized => {
                Self::failure(ErrorType::Unauthorized, "Unauthorized access", None)
            }
            ErrorKind::Internal => {
                error!("internal error: {:?}", error);
                Self::failure(
                    ErrorType::Internal,
                    "Internal error",
                    Some("Check logs for details".to_string()),
                )
            }
        }
    }

    fn failure(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }
}

/// Helper trait to convert Results into a JSON error payload
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(&e);
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::{AppResult, AppResultExt};

    #[test]
    fn test_item_not_found_error() {
        let error = ErrorResponse::from_app_error(&AppError::item_not_found("stream-999"));
        assert_eq!(error.error_type, ErrorType::ItemNotFound);
        assert_eq!(error.message, "Item not found");
        assert_eq!(error.details.as_deref(), Some("Item not found: stream-999"));
    }

    #[test]
    fn test_wrapped_error_keeps_category() {
        let result: AppResult<()> = Err(DomainError::UnknownGenre("Fantasy".to_string()).into());
        let wrapped = result.context("failed to add content").unwrap_err();

        let error = ErrorResponse::from_app_error(&wrapped);
        assert_eq!(error.error_type, ErrorType::Validation);
        assert!(error.details.unwrap().contains("Fantasy"));
    }

    #[test]
    fn test_internal_error_hides_details() {
        let error = ErrorResponse::from_app_error(&AppError::LockPoisoned("user write"));
        assert_eq!(error.error_type, ErrorType::Internal);
        assert_eq!(error.details.as_deref(), Some("Check logs for details"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: AppResult<()> = Err(AppError::user_not_found("user-999"));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("user_not_found"));
        assert!(json.contains("user-999"));
    }
}
