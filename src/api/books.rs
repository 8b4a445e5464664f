//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::book::Book};

use super::ApiResponse;

/// Payload wrapper for a single book
#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

/// Payload wrapper for the full catalog
#[derive(Serialize, ToSchema)]
pub struct BooksData {
    pub books: Vec<Book>,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All catalog books in insertion order", body = ApiResponse<BooksData>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<BooksData>>> {
    let books = state.services.catalog.list_books()?;
    Ok(Json(ApiResponse::ok(
        "Books retrieved successfully",
        BooksData { books },
    )))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = ApiResponse<BookData>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(ApiResponse::ok(
        "Book retrieved successfully",
        BookData { book },
    )))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book added", body = ApiResponse<BookData>),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 409, description = "A book with this ID already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookData>>)> {
    let created = state.services.catalog.create_book(book)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(
            "Book added successfully",
            BookData { book: created },
        )),
    ))
}

/// Update an existing book.
///
/// Full-record replace; the stored id always follows the path id. The copy
/// counter is replaced as-is, independent of outstanding loans.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = ApiResponse<BookData>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(book): Json<Book>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let updated = state.services.catalog.update_book(id, book)?;
    Ok(Json(ApiResponse::ok(
        "Book updated successfully",
        BookData { book: updated },
    )))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = ApiResponse<BookData>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let deleted = state.services.catalog.delete_book(id)?;
    Ok(Json(ApiResponse::ok(
        "Book deleted",
        BookData { book: deleted },
    )))
}
