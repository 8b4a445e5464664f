//! API handlers for Biblion REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod stats;

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform response envelope.
///
/// Every successful endpoint wraps its payload in this shape; error responses
/// carry the same `success`/`message` pair (see [`crate::error::ErrorResponse`]).
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable outcome description
    pub message: String,
    /// Operation payload
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Build a success envelope
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
