//! API request/response types

use serde::{Deserialize, Serialize};

// Re-export shared types from sentence-core
pub use sentence_core::{ComparisonResult, FeedbackItem, RubySegment, ScoreBand};

// === API Request/Response Types ===

/// Request to check a sentence attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub user_input: String,
    #[serde(default)]
    pub target_sentence: String,
}

/// Result of a sentence check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub score: u8,
    pub band: ScoreBand,
    pub feedback: Vec<FeedbackItem>,
    pub general_errors: Vec<String>,
}

impl From<ComparisonResult> for AnalyzeResponse {
    fn from(result: ComparisonResult) -> Self {
        Self {
            band: result.band(),
            score: result.score,
            feedback: result.feedback,
            general_errors: result.general_errors,
        }
    }
}

/// Several sentence attempts submitted together
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub items: Vec<AnalyzeRequest>,
}

/// Results in request order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchAnalyzeResponse {
    pub results: Vec<AnalyzeResponse>,
}

/// Request to split annotated text for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubySegmentsRequest {
    pub text: String,
}

/// Segments of annotated text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubySegmentsResponse {
    pub segments: Vec<RubySegment>,
}
