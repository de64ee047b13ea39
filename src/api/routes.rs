//! API route configuration.

use crate::api::handlers::{
    create_session_handler, destroy_session_handler, link_stats_handler, session_links_handler,
    session_stats_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /sessions`              - Start a session
/// - `DELETE /sessions/{id}`         - End a session
/// - `GET    /sessions/{id}/links`   - Links created in the session
/// - `POST   /sessions/{id}/links`   - Submit a URL for shortening
/// - `GET    /sessions/{id}/stats`   - Summary metrics over the session's links
/// - `GET    /stats`                 - Tracked links with summary metrics
/// - `GET    /stats/{code}`          - A single tracked link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session_handler))
        .route("/sessions/{id}", delete(destroy_session_handler))
        .route(
            "/sessions/{id}/links",
            get(session_links_handler).post(shorten_handler),
        )
        .route("/sessions/{id}/stats", get(session_stats_handler))
        .route("/stats", get(stats_handler))
        .route("/stats/{code}", get(link_stats_handler))
}
