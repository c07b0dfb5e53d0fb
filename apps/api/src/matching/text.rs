//! Text normalization and tokenization.
//!
//! Both steps are total: any input string (including the empty one) yields a
//! result, never an error.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Fixed English stopword list. Built once into [`STOPWORDS`] and never mutated.
const STOPWORD_LIST: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "must", "my", "myself", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shall", "she", "should", "so", "some", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "us", "very", "was", "we", "well", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "within",
    "would", "you", "your", "yours", "yourself", "yourselves",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORD_LIST.iter().copied().collect());

/// Returns true if `word` (already lower-cased) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Tokenizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Fragments with fewer characters than this are dropped. Always ≥ 1.
    pub min_len: usize,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self { min_len: 2 }
    }
}

/// Canonicalizes raw text: lower-case, curly quotes folded to `'`, and every
/// character outside `[a-z0-9 + # - _]` and whitespace replaced by a space.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' => '\'',
            other => other,
        })
        .map(|c| if is_kept_char(c) { c } else { ' ' })
        .collect()
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '#' | '-' | '_')
}

/// Normalizes `raw` and splits it into the ordered token sequence.
///
/// Dropped: fragments shorter than `options.min_len`, stopwords, and purely
/// numeric fragments. Order and duplicates are preserved.
pub fn tokenize(raw: &str, options: TokenizerOptions) -> Vec<String> {
    let min_len = options.min_len.max(1);

    normalize(raw)
        .split_whitespace()
        .filter(|fragment| fragment.chars().count() >= min_len)
        .filter(|fragment| !is_stopword(fragment))
        .filter(|fragment| !fragment.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}

/// A document as seen by the engine: the raw text plus its token sequence.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub raw_text: &'a str,
    pub tokens: Vec<String>,
}

impl<'a> Document<'a> {
    pub fn new(raw_text: &'a str, options: TokenizerOptions) -> Self {
        Self {
            raw_text,
            tokens: tokenize(raw_text, options),
        }
    }
}
