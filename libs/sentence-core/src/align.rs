//! Greedy token alignment of a user attempt against the target sentence.
//!
//! A single forward pass over both token lists with one token of lookahead.
//! This is not a minimum edit distance alignment: longer insertions or
//! deletions can be classified as substitutions.

use crate::tokenize::Token;
use crate::types::FeedbackItem;

/// Token-by-token diff and the number of correct matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub feedback: Vec<FeedbackItem>,
    pub correct: usize,
}

/// Align user tokens against target tokens.
///
/// Every target token ends up exactly once as correct, incorrect or missing,
/// and every user token exactly once as correct, incorrect or extra.
pub fn align(target: &[Token], user: &[Token]) -> Alignment {
    let mut feedback = Vec::with_capacity(target.len().max(user.len()));
    let mut correct = 0;
    let mut ti = 0;
    let mut ui = 0;

    while ti < target.len() {
        let t = &target[ti];

        let Some(u) = user.get(ui) else {
            feedback.push(FeedbackItem::missing(&t.surface));
            ti += 1;
            continue;
        };

        if u.normalized == t.normalized {
            feedback.push(FeedbackItem::correct(&u.surface));
            correct += 1;
            ti += 1;
            ui += 1;
            continue;
        }

        let next_user_matches = user
            .get(ui + 1)
            .is_some_and(|next| next.normalized == t.normalized);
        let next_target_matches = target
            .get(ti + 1)
            .is_some_and(|next| next.normalized == u.normalized);

        // Extra wins over missing when both lookaheads match.
        if next_user_matches {
            feedback.push(FeedbackItem::extra(&u.surface));
            ui += 1;
        } else if next_target_matches {
            feedback.push(FeedbackItem::missing(&t.surface));
            ti += 1;
        } else {
            feedback.push(FeedbackItem::incorrect(&u.surface, &t.surface));
            ti += 1;
            ui += 1;
        }
    }

    feedback.extend(user[ui..].iter().map(|u| FeedbackItem::extra(&u.surface)));

    Alignment { feedback, correct }
}
