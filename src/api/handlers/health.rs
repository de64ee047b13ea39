//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Sessions**: Live session count against the configured limit
/// 2. **Stats**: The statistics repository answers
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let sessions_check = check_sessions(&state).await;
    let stats_check = check_stats(&state).await;

    let all_healthy = sessions_check.status == "ok" && stats_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            sessions: sessions_check,
            stats: stats_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reports session usage; a full session table is degraded.
async fn check_sessions(state: &AppState) -> CheckStatus {
    let active = state.session_service.count().await;
    let limit = state.session_service.max_sessions();

    CheckStatus {
        status: if active < limit { "ok" } else { "full" }.to_string(),
        message: Some(format!("Active: {active} / {limit}")),
    }
}

/// Checks that the statistics repository answers.
async fn check_stats(state: &AppState) -> CheckStatus {
    match state.stats_service.get_report().await {
        Ok(report) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Tracked links: {}", report.items.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Stats error: {}", e)),
        },
    }
}
