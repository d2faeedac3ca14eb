//! Ruby annotation endpoints

use axum::{extract::State, Json};
use sentence_core::parse_segments;

use crate::error::Result;
use crate::routes::analysis::check_length;
use crate::models::*;
use crate::AppState;

/// POST /api/ruby/segments
pub async fn segments(
    State(state): State<AppState>,
    Json(payload): Json<RubySegmentsRequest>,
) -> Result<Json<RubySegmentsResponse>> {
    check_length("text", &payload.text, state.config.max_input_chars)?;

    Ok(Json(RubySegmentsResponse {
        segments: parse_segments(&payload.text),
    }))
}
