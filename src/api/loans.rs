//! Loan (borrow/return) endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::loan::{BorrowRecord, BorrowRequest},
};

use super::ApiResponse;

/// Borrow outcome payload
#[derive(Serialize, ToSchema)]
pub struct BorrowReceiptData {
    /// Copies still available after the borrow
    pub available_copies: u32,
}

/// Return outcome payload
#[derive(Serialize, ToSchema)]
pub struct ReturnReceiptData {
    /// Copies available after the return
    pub available_copies: u32,
    /// Title of the returned book (snapshot from borrow time)
    pub book_title: String,
}

/// Payload wrapper for the outstanding-loan ledger
#[derive(Serialize, ToSchema)]
pub struct LoansData {
    pub loans: Vec<BorrowRecord>,
}

/// Borrow one copy of a book
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "loans",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Copy borrowed", body = ApiResponse<BorrowReceiptData>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "No copies available", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<ApiResponse<BorrowReceiptData>>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = state
        .services
        .lending
        .borrow(request.book_id, &request.user_id)?;

    Ok(Json(ApiResponse::ok(
        format!("Book '{}' borrowed successfully", receipt.book_title),
        BorrowReceiptData {
            available_copies: receipt.available_copies,
        },
    )))
}

/// Return a borrowed copy
#[utoipa::path(
    post,
    path = "/return",
    tag = "loans",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Copy returned", body = ApiResponse<ReturnReceiptData>),
        (status = 404, description = "No matching loan, or book gone from the catalog", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<ApiResponse<ReturnReceiptData>>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let receipt = state
        .services
        .lending
        .return_book(request.book_id, &request.user_id)?;

    Ok(Json(ApiResponse::ok(
        format!("Book '{}' returned successfully", receipt.book_title),
        ReturnReceiptData {
            available_copies: receipt.available_copies,
            book_title: receipt.book_title,
        },
    )))
}

/// List outstanding loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "All outstanding loans in insertion order", body = ApiResponse<LoansData>)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<LoansData>>> {
    let loans = state.services.lending.outstanding()?;
    Ok(Json(ApiResponse::ok(
        "Loans retrieved successfully",
        LoansData { loans },
    )))
}
