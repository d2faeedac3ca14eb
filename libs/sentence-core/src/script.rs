//! Script detection for choosing the tokenization granularity.

use crate::types::TokenMode;

/// Check if a character belongs to the CJK/kana/fullwidth blocks.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3000}'..='\u{303F}' |   // CJK Symbols and Punctuation
        '\u{3040}'..='\u{309F}' |   // Hiragana
        '\u{30A0}'..='\u{30FF}' |   // Katakana
        '\u{FF00}'..='\u{FF9F}' |   // Fullwidth forms, halfwidth katakana
        '\u{4E00}'..='\u{9FAF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}'     // CJK Extension A
    )
}

/// Check if any character of the text is CJK.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Pick the token mode for a comparison from the target sentence alone.
pub fn detect_mode(target: &str) -> TokenMode {
    if contains_cjk(target) {
        TokenMode::Char
    } else {
        TokenMode::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cjk() {
        assert!(is_cjk('猫'));
        assert!(is_cjk('が'));
        assert!(is_cjk('カ'));
        assert!(is_cjk('。'));
        assert!(is_cjk('！'));
        assert!(is_cjk('ｶ'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('é'));
        assert!(!is_cjk(' '));
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode("I like cats."), TokenMode::Word);
        assert_eq!(detect_mode("猫がいる"), TokenMode::Char);
        assert_eq!(detect_mode("Tokyo is 東京"), TokenMode::Char);
        assert_eq!(detect_mode(""), TokenMode::Word);
    }
}
