#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use quicklink::application::services::{SessionService, StatsService};
use quicklink::domain::entities::LinkRecord;
use quicklink::infrastructure::sample::SampleStatsRepository;
use quicklink::routes::app_router;
use quicklink::state::AppState;
use quicklink::utils::code_generator::RandomCodeGenerator;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "https://short.ly/";

pub const IDLE_TIMEOUT: Duration = Duration::from_secs(1800);

pub fn create_test_state() -> AppState {
    create_test_state_with(Duration::ZERO, 100, SampleStatsRepository::new())
}

pub fn create_test_state_with(
    latency: Duration,
    max_sessions: usize,
    stats_repository: SampleStatsRepository,
) -> AppState {
    create_test_state_with_idle(latency, max_sessions, IDLE_TIMEOUT, stats_repository)
}

pub fn create_test_state_with_idle(
    latency: Duration,
    max_sessions: usize,
    idle_timeout: Duration,
    stats_repository: SampleStatsRepository,
) -> AppState {
    let session_service = Arc::new(SessionService::new(
        Arc::new(RandomCodeGenerator),
        latency,
        max_sessions,
        idle_timeout,
    ));
    let stats_service = Arc::new(StatsService::new(Arc::new(stats_repository)));

    AppState::new(session_service, stats_service, BASE_URL)
}

/// Serves the full application, path normalization included.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = Router::new().fallback_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub fn stats_repository(records: Vec<LinkRecord>) -> SampleStatsRepository {
    SampleStatsRepository::with_records(records)
}

/// Starts a session and returns its id.
pub async fn create_session(server: &TestServer) -> String {
    let response = server.post("/api/sessions").await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    json["session_id"].as_str().unwrap().to_string()
}
