//! Fallback page for unknown routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, http::Uri, response::IntoResponse};

/// Template for the 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

/// Renders the 404 page for any unmatched route.
pub async fn not_found_handler(uri: Uri) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "Route not found");

    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            path: uri.path().to_string(),
        },
    )
}
