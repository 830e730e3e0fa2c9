//! Test helper module for quiz-service integration tests.
//!
//! Spawns the application on a random port with a scripted mock
//! provider injected, then talks to it over real HTTP.

#![allow(dead_code)]

use quiz_service::config::{GoogleConfig, ModelConfig, QuizConfig};
use quiz_service::services::providers::mock::MockTextProvider;
use quiz_service::startup::Application;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-api-key";

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send request")
    }
}

pub fn test_config(api_key: &str) -> QuizConfig {
    QuizConfig {
        common: service_core::config::Config { port: 0 },
        models: ModelConfig {
            text_model: "gemini-1.5-flash-latest".to_string(),
        },
        google: GoogleConfig {
            api_key: api_key.to_string(),
        },
    }
}

async fn spawn_with_config(config: QuizConfig, provider: Arc<MockTextProvider>) -> TestApp {
    let app = Application::build_with_provider(config, provider.clone())
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    TestApp {
        address: format!("http://localhost:{}", port),
        client: reqwest::Client::new(),
        provider,
    }
}

/// Spawn the application with a configured API key.
pub async fn spawn_app(provider: Arc<MockTextProvider>) -> TestApp {
    spawn_with_config(test_config(TEST_API_KEY), provider).await
}

/// Spawn the application with the API key left unconfigured.
pub async fn spawn_app_without_api_key(provider: Arc<MockTextProvider>) -> TestApp {
    spawn_with_config(test_config(""), provider).await
}

/// A schema-conformant generated question, as the model would return it.
pub fn sample_question(topic: &str, idx: usize) -> Value {
    json!({
        "q": format!("Soal nomor {} tentang penerapan konsep {}?", idx + 1, topic),
        "o": [
            "Pilihan A dengan uraian yang cukup panjang",
            "Pilihan B dengan uraian yang cukup panjang",
            "Pilihan C dengan uraian yang cukup panjang",
            "Pilihan D dengan uraian yang cukup panjang",
            "Pilihan E dengan uraian yang cukup panjang",
        ],
        "a": 1,
        "e": "Penjelasan singkat yang menguraikan konsep di balik jawaban benar.",
        "t": topic
    })
}

/// A schema-conformant question set with `count` questions.
pub fn sample_question_set(count: usize, topic: &str) -> Value {
    let questions: Vec<Value> = (0..count).map(|idx| sample_question(topic, idx)).collect();
    json!({ "questions": questions })
}
