//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::registry::MAX_LINKS;

/// Template for the landing page.
///
/// Renders `templates/index.html` with the URL form. The form talks to the
/// session API from `static/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_links: usize,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        max_links: MAX_LINKS,
    }
}
