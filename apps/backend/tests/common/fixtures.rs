//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Create an analyze request body.
pub fn analyze_request(user_input: &str, target_sentence: &str) -> serde_json::Value {
    json!({
        "user_input": user_input,
        "target_sentence": target_sentence,
    })
}

/// Create a batch analyze request body from (user_input, target_sentence) pairs.
pub fn batch_request(pairs: &[(&str, &str)]) -> serde_json::Value {
    let items: Vec<_> = pairs
        .iter()
        .map(|(user, target)| analyze_request(user, target))
        .collect();
    json!({ "items": items })
}

/// Create a ruby segments request body.
pub fn ruby_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Generate a sentence with the given number of characters.
pub fn long_sentence(chars: usize) -> String {
    "a".repeat(chars)
}
