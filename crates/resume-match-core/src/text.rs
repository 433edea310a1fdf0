//! Text normalization and tokenization.
//!
//! Every similarity computation runs over the output of
//! [`normalize`] → [`tokenize`] → [`remove_stop_words`]. Skill extraction
//! deliberately does not: it scans a lowercased copy of the raw text.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::STOP_WORDS;

/// Shortest token kept by [`tokenize`].
pub const MIN_TOKEN_LEN: usize = 3;

/// Default number of keywords returned by [`extract_keywords`].
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// A keyword and how often it occurs in the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Keyword {
    /// The normalized token.
    pub term: String,
    /// Occurrences after stop-word removal.
    pub count: usize,
}

/// ASCII letters, digits and `_`. Shared by normalization and the
/// whole-word skill boundary.
pub(crate) const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase, replace punctuation with spaces, drop digits and collapse
/// whitespace.
///
/// Word characters are ASCII letters, digits and `_`; everything else that
/// is not whitespace becomes a space.
pub fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_digit() {
            continue;
        }
        if is_word_char(ch) || ch.is_whitespace() {
            cleaned.push(ch);
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split on whitespace and keep tokens of at least [`MIN_TOKEN_LEN`] characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// Drop stop words, preserving order.
pub fn remove_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(t.as_str()))
        .collect()
}

/// Normalize, tokenize and remove stop words in one step.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn content_tokens(text: &str) -> Vec<String> {
    remove_stop_words(tokenize(&normalize(text)))
}

/// The `top_n` most frequent content tokens.
///
/// Sorted by count, descending; ties keep the order of first occurrence.
#[tracing::instrument(skip_all, fields(text_len = text.len(), top_n))]
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<Keyword> {
    let tokens = content_tokens(text);

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    let mut keywords: Vec<Keyword> = order
        .into_iter()
        .map(|term| Keyword {
            term: term.to_string(),
            count: counts[term],
        })
        .collect();
    // Stable sort keeps first-occurrence order among equal counts.
    keywords.sort_by(|a, b| b.count.cmp(&a.count));
    keywords.truncate(top_n);
    keywords
}

/// Whitespace-delimited word count of the raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
