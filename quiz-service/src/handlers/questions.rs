use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use validator::Validate;

use crate::models::question::{self, QuestionSet};
use crate::services::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    /// Topic key; unrecognized keys fall back to the mixed topic.
    #[serde(rename = "type")]
    pub topic: String,

    #[validate(range(min = 1, max = 20, message = "num must be between 1 and 20"))]
    pub num: u32,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_questions(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<GenerateQuestionsRequest>, AppError>,
) -> Result<(StatusCode, Json<QuestionSet>), AppError> {
    request.validate()?;
    state.require_api_key()?;

    let prompt = prompts::question_prompt(&request.topic, request.num);
    let params = GenerationParams {
        response_schema: Some(question::response_schema()),
    };

    let text = state
        .text_provider
        .generate(&prompt, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, topic = %request.topic, "Question generation failed");
            AppError::from(e)
        })?;

    let set: QuestionSet = serde_json::from_str(&text).map_err(|e| {
        tracing::error!(error = %e, "Generated question payload was not valid JSON");
        AppError::Upstream(format!("Failed to decode generated questions: {e}"))
    })?;

    question::validate_question_set(&set).map_err(|e| {
        tracing::error!(error = %e, "Generated questions violated the output schema");
        AppError::Upstream(format!("Generated questions failed validation: {e}"))
    })?;

    Ok((StatusCode::OK, Json(set)))
}
