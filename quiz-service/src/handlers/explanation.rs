use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateExplanationRequest {
    #[validate(length(min = 1, message = "Question cannot be empty"))]
    pub question: String,

    #[serde(rename = "baseExplanation")]
    #[validate(length(min = 1, message = "Base explanation cannot be empty"))]
    pub base_explanation: String,
}

#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_explanation(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<GenerateExplanationRequest>, AppError>,
) -> Result<(StatusCode, Json<TextResponse>), AppError> {
    request.validate()?;
    state.require_api_key()?;

    let prompt = prompts::explanation_prompt(&request.question, &request.base_explanation);

    let text = state
        .text_provider
        .generate(&prompt, &GenerationParams::default())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Explanation generation failed");
            AppError::from(e)
        })?;

    Ok((StatusCode::OK, Json(TextResponse { text })))
}
