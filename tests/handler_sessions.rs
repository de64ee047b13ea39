mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_session() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.post("/api/sessions").await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["session_id"].as_str().unwrap().len(), 32);
    assert_eq!(json["capacity"], 5);
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_new_session_has_no_links() {
    let server = common::create_test_server(common::create_test_state());
    let id = common::create_session(&server).await;

    let response = server.get(&format!("/api/sessions/{id}/links")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["size"], 0);
    assert_eq!(json["capacity"], 5);
    assert_eq!(json["pending"], false);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_destroy_session() {
    let server = common::create_test_server(common::create_test_state());
    let id = common::create_session(&server).await;

    server
        .delete(&format!("/api/sessions/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/sessions/{id}/links"))
        .await
        .assert_status_not_found();

    server
        .delete(&format!("/api/sessions/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_session() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/api/sessions/does-not-exist/links").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Session not found");
}

#[tokio::test]
async fn test_session_limit() {
    let state = common::create_test_state_with(
        std::time::Duration::ZERO,
        1,
        quicklink::infrastructure::sample::SampleStatsRepository::new(),
    );
    let server = common::create_test_server(state);

    common::create_session(&server).await;

    let response = server.post("/api/sessions").await;

    response.assert_status(StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Too many active sessions");
    assert_eq!(json["error"]["details"]["limit"], 1);
}

#[tokio::test]
async fn test_session_stats() {
    let server = common::create_test_server(common::create_test_state());
    let id = common::create_session(&server).await;

    server
        .post(&format!("/api/sessions/{id}/links"))
        .json(&serde_json::json!({ "url": "https://example.com" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.get(&format!("/api/sessions/{id}/stats")).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total_urls"], 1);
    assert_eq!(json["summary"]["total_clicks"], 0);
    assert_eq!(json["summary"]["average_clicks"], 0);
    assert_eq!(json["summary"]["active_links"], 1);
}

#[tokio::test]
async fn test_idle_sessions_make_room_for_new_visitors() {
    let state = common::create_test_state_with_idle(
        std::time::Duration::ZERO,
        3,
        std::time::Duration::from_millis(100),
        quicklink::infrastructure::sample::SampleStatsRepository::new(),
    );
    let server = common::create_test_server(state);

    for _ in 0..3 {
        common::create_session(&server).await;
    }
    server
        .post("/api/sessions")
        .await
        .assert_status(StatusCode::CONFLICT);

    tokio::time::sleep(std::time::Duration::from_millis(250)).await;

    server
        .post("/api/sessions")
        .await
        .assert_status(StatusCode::CREATED);

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(
        health.json::<serde_json::Value>()["checks"]["sessions"]["message"],
        "Active: 1 / 3"
    );
}
