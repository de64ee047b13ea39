//! Handlers for session lifecycle and per-session link listing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::link::LinkDto;
use crate::api::dto::session::{CreateSessionResponse, SessionLinksResponse};
use crate::api::dto::stats::StatsResponse;
use crate::application::services::{StatsReport, SubmissionState};
use crate::error::AppError;
use crate::state::AppState;

/// Starts a new session with an empty link registry.
///
/// # Endpoint
///
/// `POST /api/sessions`
///
/// # Response
///
/// ```json
/// {
///   "session_id": "h3Kq...",
///   "created_at": "2024-01-15T10:30:00Z",
///   "capacity": 5
/// }
/// ```
///
/// # Errors
///
/// Returns 409 Conflict when the session limit is reached.
pub async fn create_session_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), AppError> {
    let session = state.session_service.create().await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session.id().to_string(),
            created_at: session.created_at(),
            capacity: session.capacity().await,
        }),
    ))
}

/// Ends a session and discards its links.
///
/// # Endpoint
///
/// `DELETE /api/sessions/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown sessions.
pub async fn destroy_session_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.session_service.destroy(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the links of a session in the order they were created.
///
/// # Endpoint
///
/// `GET /api/sessions/{id}/links`
///
/// # Errors
///
/// Returns 404 Not Found for unknown sessions.
pub async fn session_links_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionLinksResponse>, AppError> {
    let session = state.session_service.get(&id).await?;
    let records = session.links().await;

    let items = records
        .iter()
        .map(|record| LinkDto::from_record(record, &state.short_base_url))
        .collect();

    Ok(Json(SessionLinksResponse {
        size: records.len(),
        capacity: session.capacity().await,
        pending: session.state() == SubmissionState::Pending,
        items,
    }))
}

/// Summary metrics computed over a session's own links.
///
/// # Endpoint
///
/// `GET /api/sessions/{id}/stats`
///
/// # Errors
///
/// Returns 404 Not Found for unknown sessions.
pub async fn session_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let session = state.session_service.get(&id).await?;
    let report = StatsReport::from_records(session.links().await);

    let items = report
        .items
        .iter()
        .map(|record| LinkDto::from_record(record, &state.short_base_url))
        .collect();

    Ok(Json(StatsResponse {
        summary: report.summary,
        items,
    }))
}
