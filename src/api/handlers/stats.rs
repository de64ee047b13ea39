//! Handlers for statistics endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::link::LinkDto;
use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves all tracked links with summary metrics.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "summary": {
///     "total_urls": 3,
///     "total_clicks": 226,
///     "average_clicks": 75,
///     "active_links": 3
///   },
///   "items": [ { "shortCode": "abc123", "clicks": 47, ... } ]
/// }
/// ```
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let report = state.stats_service.get_report().await?;

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

/// Retrieves a single tracked link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has the code.
pub async fn link_stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkDto>, AppError> {
    let record = state.stats_service.get_link(&code).await?;
    Ok(Json(LinkDto::from_record(&record, &state.short_base_url)))
}
