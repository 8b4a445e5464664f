//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::ApiResponse;

/// Statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Catalog statistics
    pub books: BookStats,
    /// Loan statistics
    pub loans: LoanStats,
}

#[derive(Serialize, ToSchema)]
pub struct BookStats {
    /// Number of titles in the catalog
    pub titles: u64,
    /// Copies known to the catalog (available + on loan)
    pub total_copies: u64,
    /// Copies currently available for borrowing
    pub copies_available: u64,
}

#[derive(Serialize, ToSchema)]
pub struct LoanStats {
    /// Outstanding loans
    pub active: u64,
}

/// Get library statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Catalog and loan counters", body = ApiResponse<StatsResponse>)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<StatsResponse>>> {
    let stats = state.services.stats.get_stats()?;
    Ok(Json(ApiResponse::ok(
        "Statistics retrieved successfully",
        stats,
    )))
}
