//! HTTP handlers for the quiz service.

pub mod analysis;
pub mod explanation;
pub mod health;
pub mod questions;

use service_core::error::AppError;

/// Per-route fallback so rejected verbs still get a JSON body.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
