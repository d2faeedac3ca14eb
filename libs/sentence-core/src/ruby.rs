//! Ruby annotation handling.
//!
//! # Format
//! ```text
//! 猫[ねこ]がいる
//! 日本語[にほんご]を勉強[べんきょう]する
//! ```
//!
//! The bracketed reading is a phonetic gloss attached to the preceding base
//! text. Comparison only ever sees the base text.

use serde::{Deserialize, Serialize};

/// A piece of annotated text, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RubySegment {
    Plain { text: String },
    Annotated { base: String, reading: String },
}

/// Remove every `[reading]` gloss, keeping the base text.
///
/// Only ASCII brackets with non-empty contents are treated as glosses;
/// unterminated or empty brackets are left alone.
pub fn strip_annotations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(']') {
            Some(close) if close > 0 => rest = &after[close + 1..],
            _ => {
                out.push('[');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_open(c: char) -> bool {
    c == '[' || c == '［'
}

fn is_close(c: char) -> bool {
    c == ']' || c == '］'
}

fn is_ideograph(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FAF}')
}

/// Parse annotated text into plain and annotated segments.
///
/// Accepts both ASCII and fullwidth brackets. When a kana particle is stuck
/// to the front of a kanji base (`で勉[べん]`), only the kanji run carries
/// the reading.
pub fn parse_segments(text: &str) -> Vec<RubySegment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let base_end = chars[i..]
            .iter()
            .position(|&c| c.is_whitespace() || is_open(c))
            .map_or(chars.len(), |p| i + p);

        let close = if base_end > i && base_end < chars.len() && is_open(chars[base_end]) {
            chars[base_end + 1..]
                .iter()
                .position(|&c| is_close(c))
                .map(|p| base_end + 1 + p)
        } else {
            None
        };

        let Some(close) = close else {
            plain.push(chars[i]);
            i += 1;
            continue;
        };

        let base: String = chars[i..base_end].iter().collect();
        let reading: String = chars[base_end + 1..close].iter().collect();
        i = close + 1;

        if reading.is_empty() {
            plain.push_str(&base);
            continue;
        }

        let (prefix, kanji) = split_sticky_prefix(&base);
        plain.push_str(prefix);
        flush_plain(&mut plain, &mut segments);
        segments.push(RubySegment::Annotated {
            base: kanji.to_string(),
            reading,
        });
    }

    flush_plain(&mut plain, &mut segments);
    segments
}

/// Split `base` into a non-ideograph prefix and a trailing ideograph run.
///
/// Returns an empty prefix unless the base ends in ideographs preceded by at
/// least one other character.
fn split_sticky_prefix(base: &str) -> (&str, &str) {
    let split = base
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_ideograph(c))
        .map(|(idx, c)| idx + c.len_utf8());

    match split {
        Some(at) if at < base.len() => base.split_at(at),
        _ => ("", base),
    }
}

fn flush_plain(plain: &mut String, segments: &mut Vec<RubySegment>) {
    if !plain.is_empty() {
        segments.push(RubySegment::Plain {
            text: std::mem::take(plain),
        });
    }
}
