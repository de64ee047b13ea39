mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["sessions"]["status"], "ok");
    assert_eq!(json["checks"]["stats"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded_when_sessions_full() {
    let state = common::create_test_state_with(
        std::time::Duration::ZERO,
        1,
        quicklink::infrastructure::sample::SampleStatsRepository::new(),
    );
    let server = common::create_test_server(state);

    common::create_session(&server).await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["sessions"]["status"], "full");
}
