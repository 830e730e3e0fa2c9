//! Generated-question wire types and their output schema.
//!
//! The schema constants below are the single source of truth: the
//! outbound `generationConfig.responseSchema` sent to Gemini and the
//! post-call validator both derive from them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Every question carries exactly this many answer options (A-E).
pub const OPTION_COUNT: usize = 5;

/// Minimum character length per answer option.
pub const MIN_OPTION_LEN: usize = 15;

/// Minimum character length for the short explanation.
pub const MIN_EXPLANATION_LEN: usize = 30;

/// A single generated multiple-choice question.
///
/// Field names on the wire stay in the compact `q/o/a/e/t` form the
/// front-end consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "q")]
    pub prompt: String,

    #[serde(rename = "o")]
    pub options: Vec<String>,

    /// Zero-based index of the correct option.
    #[serde(rename = "a")]
    pub answer_index: u32,

    #[serde(rename = "e")]
    pub explanation: String,

    /// Topic tag, e.g. "Keuangan" or "SDM".
    #[serde(rename = "t")]
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<QuizQuestion>,
}

/// Structured-output schema passed to the generative API.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "q": { "type": "STRING" },
                        "o": {
                            "type": "ARRAY",
                            "items": { "type": "STRING", "minLength": MIN_OPTION_LEN }
                        },
                        "a": { "type": "INTEGER" },
                        "e": { "type": "STRING", "minLength": MIN_EXPLANATION_LEN },
                        "t": { "type": "STRING" }
                    },
                    "required": ["q", "o", "a", "e", "t"]
                }
            }
        },
        "required": ["questions"]
    })
}

/// Validate a decoded question set against the same constraints the
/// outbound schema declares. The model is asked for schema-conformant
/// output, but its word is not trusted.
pub fn validate_question_set(set: &QuestionSet) -> anyhow::Result<()> {
    for (idx, question) in set.questions.iter().enumerate() {
        if question.prompt.trim().is_empty() {
            anyhow::bail!("question {idx} has an empty prompt");
        }
        if question.options.len() != OPTION_COUNT {
            anyhow::bail!(
                "question {idx} has {} options, expected {OPTION_COUNT}",
                question.options.len()
            );
        }
        if let Some(short) = question
            .options
            .iter()
            .find(|o| o.chars().count() < MIN_OPTION_LEN)
        {
            anyhow::bail!("question {idx} has an option shorter than {MIN_OPTION_LEN} chars: {short:?}");
        }
        if question.answer_index as usize >= OPTION_COUNT {
            anyhow::bail!(
                "question {idx} answer index {} is out of range",
                question.answer_index
            );
        }
        if question.explanation.chars().count() < MIN_EXPLANATION_LEN {
            anyhow::bail!("question {idx} explanation is shorter than {MIN_EXPLANATION_LEN} chars");
        }
        if question.topic.trim().is_empty() {
            anyhow::bail!("question {idx} has an empty topic tag");
        }
    }

    Ok(())
}
