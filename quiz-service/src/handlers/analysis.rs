use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::explanation::TextResponse;
use crate::services::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct GenerateAnalysisRequest {
    /// Serialized quiz results; opaque to this service.
    pub answers: serde_json::Value,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_analysis(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<GenerateAnalysisRequest>, AppError>,
) -> Result<(StatusCode, Json<TextResponse>), AppError> {
    if request.answers.is_null() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Field \"answers\" must be provided"
        )));
    }
    state.require_api_key()?;

    let answers_json = serde_json::to_string_pretty(&request.answers)
        .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;
    let prompt = prompts::analysis_prompt(&answers_json);

    let text = state
        .text_provider
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Analysis generation failed");
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(TextResponse { text })))
}
