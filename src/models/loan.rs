//! Loan (borrow) model and request types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An outstanding claim by a user on one copy of a book.
///
/// `book_title` is a snapshot taken at borrow time, so the record stays
/// meaningful if the catalog entry is later renamed or deleted. The same
/// (book_id, user_id) pair may appear more than once; returns remove the
/// oldest matching record first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BorrowRecord {
    /// Borrowed book
    pub book_id: i32,
    /// Borrowing user
    pub user_id: String,
    /// Title snapshot at borrow time
    pub book_title: String,
    /// When the copy was borrowed
    pub borrowed_at: DateTime<Utc>,
}

/// Request body shared by the borrow and return endpoints
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BorrowRequest {
    /// Book ID
    pub book_id: i32,
    /// User ID
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,
}
