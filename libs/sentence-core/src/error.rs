//! General (non-token) findings reported alongside a comparison.

use thiserror::Error;

/// Advisory issues surfaced through `ComparisonResult::general_errors`.
///
/// None of these are fatal; the `Display` text is what the learner sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneralError {
    /// The target sentence was empty after stripping annotations.
    #[error("Target sentence is missing.")]
    MissingTarget,

    #[error("Sentences should start with a capital letter.")]
    Capitalization,

    #[error("Missing or incorrect punctuation. Expected: \"{expected}\"")]
    TerminalPunctuation { expected: char },
}
