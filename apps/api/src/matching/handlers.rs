//! Axum route handlers for the Match API.

use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, MISSING_TEXT_MESSAGE};
use crate::matching::frequency::extract_keywords;
use crate::matching::scoring::MatchReport;
use crate::matching::text::tokenize;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Text fields are loose JSON values so that a missing, null, empty or
/// non-string field surfaces as the validation error rather than a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub jd_text: Option<Value>,
    #[serde(default)]
    pub resume_text: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub text: Option<Value>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub token_count: usize,
    pub keywords: Vec<String>,
}

/// Only a non-empty JSON string counts as provided.
fn required_text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores a resume against a job description. The scoring pipeline is CPU-only
/// and runs on the blocking pool; a failure there becomes an internal error.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let (Some(jd_text), Some(resume_text)) = (
        required_text(request.jd_text),
        required_text(request.resume_text),
    ) else {
        return Err(AppError::Validation(MISSING_TEXT_MESSAGE.to_string()));
    };

    let scorer = state.scorer.clone();
    let report = tokio::task::spawn_blocking(move || scorer.score(&jd_text, &resume_text))
        .await
        .map_err(|e| AppError::Internal(anyhow!("Match scoring failed: {e}")))?;

    info!(
        match_score = report.match_score,
        jd_skill_count = report.jd_skill_count,
        resume_skill_count = report.resume_skill_count,
        missing = report.missing_skills.len(),
        "Scored match request"
    );

    Ok(Json(report))
}

/// POST /api/v1/keywords
///
/// Returns the top-K keyword list extracted from a single document.
/// Useful for previewing what the scorer will compare before submitting a pair.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let text = required_text(request.text)
        .ok_or_else(|| AppError::Validation("text is required.".to_string()))?;

    let options = state.config.scoring;
    let top_k = match request.top_k {
        Some(0) => return Err(AppError::Validation("top_k must be at least 1.".to_string())),
        Some(k) => k,
        None => options.jd_top_k,
    };

    let tokens = tokenize(&text, options.tokenizer());
    let keywords = extract_keywords(&tokens, top_k);

    Ok(Json(KeywordsResponse {
        token_count: tokens.len(),
        keywords,
    }))
}
