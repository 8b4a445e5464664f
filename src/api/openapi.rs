//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblion API",
        version = "1.0.0",
        description = "Lending Catalog Service REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Loans
        loans::borrow_book,
        loans::return_book,
        loans::list_loans,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Models
            crate::models::book::Book,
            crate::models::loan::BorrowRecord,
            crate::models::loan::BorrowRequest,
            // Books
            books::BookData,
            books::BooksData,
            // Loans
            loans::BorrowReceiptData,
            loans::ReturnReceiptData,
            loans::LoansData,
            // Stats
            stats::StatsResponse,
            stats::BookStats,
            stats::LoanStats,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog book management"),
        (name = "loans", description = "Borrow and return operations"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
