//! Sentence analysis endpoints

use axum::{extract::State, Json};
use sentence_core::analyze_sentence;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    validate(&state.config, &payload)?;

    let result = analyze_sentence(&payload.user_input, &payload.target_sentence);
    tracing::debug!(
        score = result.score,
        tokens = result.feedback.len(),
        general_errors = result.general_errors.len(),
        "Analyzed sentence"
    );

    Ok(Json(result.into()))
}

/// POST /api/analyze/batch
pub async fn analyze_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchAnalyzeRequest>,
) -> Result<Json<BatchAnalyzeResponse>> {
    if payload.items.is_empty() {
        return Err(ApiError::BadRequest("items must not be empty".to_string()));
    }
    if payload.items.len() > state.config.max_batch_items {
        return Err(ApiError::BadRequest(format!(
            "too many items: {} (max {})",
            payload.items.len(),
            state.config.max_batch_items
        )));
    }
    for (idx, item) in payload.items.iter().enumerate() {
        validate(&state.config, item).map_err(|e| match e {
            ApiError::BadRequest(msg) => ApiError::BadRequest(format!("item {}: {}", idx, msg)),
            other => other,
        })?;
    }

    let count = payload.items.len();
    let results = tokio::task::spawn_blocking(move || {
        payload
            .items
            .iter()
            .map(|item| AnalyzeResponse::from(analyze_sentence(&item.user_input, &item.target_sentence)))
            .collect::<Vec<_>>()
    })
    .await
    .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))?;

    tracing::debug!(count, "Analyzed batch");

    Ok(Json(BatchAnalyzeResponse { results }))
}

/// Reject sentences longer than the configured character limit.
fn validate(config: &Config, request: &AnalyzeRequest) -> Result<()> {
    check_length("user_input", &request.user_input, config.max_input_chars)?;
    check_length("target_sentence", &request.target_sentence, config.max_input_chars)
}

pub(crate) fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ApiError::BadRequest(format!(
            "{} is too long: {} characters (max {})",
            field, len, max
        )));
    }
    Ok(())
}
