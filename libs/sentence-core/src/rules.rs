//! Mechanical style checks for word-mode sentences.

use crate::error::GeneralError;

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Run capitalization and terminal punctuation checks.
///
/// Both inputs must already have annotations stripped. These checks only
/// make sense for cased, space-delimited scripts; callers gate them on
/// `TokenMode::Word`.
pub fn check_mechanics(user: &str, target: &str) -> Vec<GeneralError> {
    let mut errors = Vec::new();

    if let Some(first) = user.chars().next() {
        if !first.to_uppercase().eq(std::iter::once(first)) {
            errors.push(GeneralError::Capitalization);
        }
    }

    if let Some(expected) = target.trim().chars().last() {
        if TERMINAL_PUNCTUATION.contains(&expected) && user.trim().chars().last() != Some(expected)
        {
            errors.push(GeneralError::TerminalPunctuation { expected });
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_sentence() {
        assert!(check_mechanics("Hello there.", "Hello there.").is_empty());
    }

    #[test]
    fn test_lowercase_start() {
        assert_eq!(
            check_mechanics("hello there.", "Hello there."),
            vec![GeneralError::Capitalization]
        );
    }

    #[test]
    fn test_uncased_first_character_passes() {
        assert!(check_mechanics("42 cats.", "42 cats.").is_empty());
        assert!(check_mechanics(" Hello.", "Hello.").is_empty());
    }

    #[test]
    fn test_missing_punctuation() {
        assert_eq!(
            check_mechanics("Hello there", "Hello there."),
            vec![GeneralError::TerminalPunctuation { expected: '.' }]
        );
    }

    #[test]
    fn test_wrong_punctuation() {
        assert_eq!(
            check_mechanics("Is it raining.", "Is it raining?"),
            vec![GeneralError::TerminalPunctuation { expected: '?' }]
        );
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        assert!(check_mechanics("Stop!  ", "Stop! ").is_empty());
    }

    #[test]
    fn test_target_without_terminal_punctuation() {
        assert!(check_mechanics("Hello there.", "Hello there").is_empty());
    }

    #[test]
    fn test_both_rules_fire() {
        assert_eq!(
            check_mechanics("hello there", "Hello there!"),
            vec![
                GeneralError::Capitalization,
                GeneralError::TerminalPunctuation { expected: '!' },
            ]
        );
    }

    #[test]
    fn test_empty_user() {
        assert_eq!(
            check_mechanics("", "Hello."),
            vec![GeneralError::TerminalPunctuation { expected: '.' }]
        );
    }
}
