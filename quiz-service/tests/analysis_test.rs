//! Integration tests for the analysis endpoint.

mod common;

use common::{spawn_app, spawn_app_without_api_key};
use quiz_service::services::providers::mock::MockTextProvider;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn analysis_returns_generated_text() {
    let provider = Arc::new(MockTextProvider::new(""));
    provider.push_text("Kategori Keuangan kuat, Operasional perlu latihan.");
    let app = spawn_app(provider.clone()).await;

    let answers = json!([
        { "topik": "Keuangan", "benar": true },
        { "topik": "Operasional", "benar": false }
    ]);
    let response = app
        .post("/api/generateAnalysis", &json!({ "answers": answers }))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["text"],
        "Kategori Keuangan kuat, Operasional perlu latihan."
    );

    // The serialized answer structure must be embedded in the query.
    let prompts = app.provider.prompts();
    assert!(prompts[0].user_query.starts_with("Analisis hasil ini:\n"));
    assert!(prompts[0].user_query.contains("\"topik\": \"Keuangan\""));
}

#[tokio::test]
async fn upstream_failure_surfaces_as_api_error() {
    let provider = Arc::new(MockTextProvider::new(""));
    provider.push_api_failure("quota exceeded");
    let app = spawn_app(provider.clone()).await;

    let response = app
        .post("/api/generateAnalysis", &json!({ "answers": [] }))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "API Error: quota exceeded");
}

#[tokio::test]
async fn non_post_method_is_rejected_without_provider_call() {
    let provider = Arc::new(MockTextProvider::new(""));
    let app = spawn_app(provider.clone()).await;

    let response = app.get("/api/generateAnalysis").await;

    assert_eq!(response.status(), 405);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Method Not Allowed");
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn missing_api_key_is_rejected_without_provider_call() {
    let provider = Arc::new(MockTextProvider::new(""));
    let app = spawn_app_without_api_key(provider.clone()).await;

    let response = app
        .post("/api/generateAnalysis", &json!({ "answers": [] }))
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "API Key not configured");
    assert_eq!(app.provider.call_count(), 0);
}

#[tokio::test]
async fn null_answers_are_rejected() {
    let provider = Arc::new(MockTextProvider::new(""));
    let app = spawn_app(provider.clone()).await;

    let response = app
        .post("/api/generateAnalysis", &json!({ "answers": null }))
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().expect("error message").contains("answers"));
    assert_eq!(app.provider.call_count(), 0);
}
