//! Sentence reconstruction checking for the flashcard quiz mode.
//!
//! Provides:
//! - Ruby annotation handling (`base[reading]` glosses)
//! - Script detection and word/character tokenization
//! - Greedy one-token-lookahead alignment of an attempt against the example sentence
//! - Scoring and mechanical style checks (capitalization, terminal punctuation)

pub mod align;
pub mod analysis;
pub mod error;
pub mod ruby;
pub mod rules;
pub mod script;
pub mod tokenize;
pub mod types;

pub use align::{align, Alignment};
pub use analysis::{analyze_sentence, score};
pub use error::GeneralError;
pub use ruby::{parse_segments, strip_annotations, RubySegment};
pub use script::{contains_cjk, detect_mode, is_cjk};
pub use tokenize::{normalize, tokenize, Token};
pub use types::{ComparisonResult, FeedbackItem, FeedbackStatus, ScoreBand, TokenMode};
