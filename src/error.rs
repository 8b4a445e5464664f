//! Error types for Biblion server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes carried in every error response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchBook = 2,
    NoSuchLoan = 3,
    DuplicateBook = 4,
    NoCopiesAvailable = 5,
    BadValue = 6,
}

/// Main application error type
///
/// Every failed precondition is an expected, recoverable-by-caller value;
/// the core never panics and never retries on these.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No matching loan: {0}")]
    LoanNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not available: {0}")]
    Unavailable(String),

    #[error("Invalid operation: {0}")]
    Invalid(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchBook, msg.clone())
            }
            AppError::LoanNotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchLoan, msg.clone())
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::DuplicateBook, msg.clone())
            }
            AppError::Unavailable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NoCopiesAvailable, msg.clone())
            }
            AppError::Invalid(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
