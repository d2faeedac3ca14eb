//! Result types handed back to the quiz UI.

use serde::{Deserialize, Serialize};

/// Granularity used to split both sentences into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenMode {
    /// Whitespace-separated words.
    Word,
    /// Single characters, for scripts without spaces between words.
    Char,
}

impl Default for TokenMode {
    fn default() -> Self {
        Self::Word
    }
}

/// Classification of a single token in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    /// User token matches the target token.
    Correct,
    /// User token replaces a different target token.
    Incorrect,
    /// Target token absent from the user's attempt.
    Missing,
    /// User token with no counterpart in the target.
    Extra,
}

/// One entry of the token-by-token diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Surface form for display (user's token, or target's for `Missing`).
    pub word: String,
    pub status: FeedbackStatus,
    /// Target surface form, only set for `Incorrect`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl FeedbackItem {
    pub fn correct(word: impl Into<String>) -> Self {
        Self::plain(word, FeedbackStatus::Correct)
    }

    pub fn missing(word: impl Into<String>) -> Self {
        Self::plain(word, FeedbackStatus::Missing)
    }

    pub fn extra(word: impl Into<String>) -> Self {
        Self::plain(word, FeedbackStatus::Extra)
    }

    pub fn incorrect(word: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            status: FeedbackStatus::Incorrect,
            expected: Some(expected.into()),
        }
    }

    fn plain(word: impl Into<String>, status: FeedbackStatus) -> Self {
        Self {
            word: word.into(),
            status,
            expected: None,
        }
    }
}

/// Outcome of comparing an attempt against the example sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Match score, 0 to 100.
    pub score: u8,
    pub feedback: Vec<FeedbackItem>,
    pub general_errors: Vec<String>,
}

impl ComparisonResult {
    /// Band used for the score badge.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Number of feedback items with the given status.
    pub fn count(&self, status: FeedbackStatus) -> usize {
        self.feedback.iter().filter(|f| f.status == status).count()
    }
}

/// Coarse grading of a score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Exactly 100.
    Perfect,
    /// Above 70 but not perfect.
    Close,
    /// 70 or below.
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 100 => Self::Perfect,
            s if s > 70 => Self::Close,
            _ => Self::NeedsWork,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Close => "close",
            Self::NeedsWork => "needs_work",
        }
    }
}
