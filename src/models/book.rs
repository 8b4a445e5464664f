//! Book (catalog entry) model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog entry with its available-copy counter.
///
/// `available_copies` is unsigned so the non-negativity invariant is carried
/// by the type; every mutation goes through checked arithmetic in the
/// repository layer. The id is caller-assigned and unique within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Book {
    /// Caller-assigned identifier, unique within the catalog
    pub id: i32,
    /// Title
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Author
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    /// Copies not currently loaned out
    pub available_copies: u32,
}
