//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, statistics_handler};
use axum::{Router, routing::get};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Landing page with the URL form
/// - `GET /statistics` - Link statistics
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/statistics", get(statistics_handler))
}
