//! Tokenization and comparison normalization.

use crate::types::TokenMode;

/// Punctuation removed before tokens are compared.
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// A token with its display form and its comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
}

impl Token {
    pub fn new(surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            normalized: normalize(surface),
        }
    }
}

/// Normalize a token for equality testing: trim, drop punctuation, lowercase.
pub fn normalize(token: &str) -> String {
    token
        .trim()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Split text into tokens.
///
/// Word mode splits on runs of whitespace. Char mode yields every character,
/// whitespace and punctuation included.
pub fn tokenize(text: &str, mode: TokenMode) -> Vec<Token> {
    match mode {
        TokenMode::Word => text.split_whitespace().map(Token::new).collect(),
        TokenMode::Char => text.chars().map(|c| Token::new(&c.to_string())).collect(),
    }
}
