//! Probe-endpoint tests for quiz-service.

mod common;

use common::spawn_app;
use quiz_service::services::providers::mock::MockTextProvider;
use std::sync::Arc;

#[tokio::test]
async fn health_check_returns_ok() {
    let app = spawn_app(Arc::new(MockTextProvider::new(""))).await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "quiz-service");
}

#[tokio::test]
async fn readiness_check_returns_ok() {
    let app = spawn_app(Arc::new(MockTextProvider::new(""))).await;

    let response = app.get("/ready").await;

    assert!(response.status().is_success());
}
