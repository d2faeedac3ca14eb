//! Sentence reconstruction analysis for quiz mode.

use crate::align::align;
use crate::error::GeneralError;
use crate::ruby::strip_annotations;
use crate::rules::check_mechanics;
use crate::script::detect_mode;
use crate::tokenize::tokenize;
use crate::types::{ComparisonResult, TokenMode};

/// Compare a learner's attempt against the example sentence.
///
/// Total over all inputs: an empty target yields a zero score with an
/// explanatory general error instead of failing.
pub fn analyze_sentence(user_input: &str, target_sentence: &str) -> ComparisonResult {
    let target = strip_annotations(target_sentence);
    let user = strip_annotations(user_input);

    if target.is_empty() {
        return ComparisonResult {
            score: 0,
            feedback: Vec::new(),
            general_errors: vec![GeneralError::MissingTarget.to_string()],
        };
    }

    let mode = detect_mode(&target);
    let target_tokens = tokenize(&target, mode);
    let user_tokens = tokenize(&user, mode);

    let general_errors = match mode {
        TokenMode::Word => check_mechanics(&user, &target)
            .iter()
            .map(ToString::to_string)
            .collect(),
        TokenMode::Char => Vec::new(),
    };

    let alignment = align(&target_tokens, &user_tokens);

    ComparisonResult {
        score: score(
            alignment.correct,
            target_tokens.len().max(user_tokens.len()),
        ),
        feedback: alignment.feedback,
        general_errors,
    }
}

/// Percentage of correct tokens out of `total`, rounded half up.
///
/// Returns 0 when there are no tokens at all.
pub fn score(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    ((correct * 200 + total) / (total * 2)) as u8
}
