//! Generative-text provider abstraction.
//!
//! A trait-based seam between the HTTP handlers and the upstream
//! generative API, allowing the real Gemini backend to be swapped for a
//! mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(_) => {
                AppError::ConfigError(anyhow::anyhow!("API Key not configured"))
            }
            // The "API Error:" prefix is part of the client-facing
            // contract for upstream failures.
            ProviderError::Api(msg) => AppError::Upstream(format!("API Error: {msg}")),
            ProviderError::InvalidResponse(msg) => AppError::Upstream(msg),
            ProviderError::Network(msg) => AppError::Upstream(msg),
        }
    }
}

/// A prompt bundle: behavioral rules plus the task-specific query.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_query: String,
}

/// Generation parameters for a single request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// JSON schema for structured output. When set, the provider asks
    /// the upstream API for schema-conformant JSON text.
    pub response_schema: Option<serde_json::Value>,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Issue one generation request and return the generated text.
    async fn generate(
        &self,
        prompt: &Prompt,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;
}
