//! Handler for link submission endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::LinkDto;
use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::submission::Outcome;
use crate::error::AppError;
use crate::state::AppState;

/// Submits one URL to a session's registry.
///
/// # Endpoint
///
/// `POST /api/sessions/{id}/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// **201 Created** when accepted:
///
/// ```json
/// {
///   "status": "accepted",
///   "link": {
///     "id": 1,
///     "originalUrl": "https://example.com/page",
///     "shortUrl": "https://short.ly/Ab3dE9",
///     "shortCode": "Ab3dE9",
///     "clicks": 0,
///     "createdAt": "2024-01-15T10:30:00Z"
///   }
/// }
/// ```
///
/// **422 Unprocessable Entity** when rejected:
///
/// ```json
/// { "status": "rejected", "code": "empty_input", "reason": "Please enter a URL" }
/// ```
///
/// # Processing
///
/// The submission runs on its own task, so it settles even if the client
/// disconnects while it is pending.
///
/// # Errors
///
/// - 400 Bad Request if the body fails validation
/// - 404 Not Found for unknown sessions
/// - 409 Conflict while another submission on the session is pending
pub async fn shorten_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let session = state.session_service.get(&id).await?;

    let outcome = tokio::spawn(async move { session.submit(&payload.url).await })
        .await
        .map_err(|e| {
            AppError::internal("Submission task failed", json!({ "reason": e.to_string() }))
        })??;

    let (status, body) = match outcome {
        Outcome::Accepted(record) => (
            StatusCode::CREATED,
            ShortenResponse::Accepted {
                link: LinkDto::from_record(&record, &state.short_base_url),
            },
        ),
        Outcome::Rejected(reason) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ShortenResponse::Rejected {
                code: reason.code(),
                reason: reason.to_string(),
            },
        ),
    };

    Ok((status, Json(body)))
}
