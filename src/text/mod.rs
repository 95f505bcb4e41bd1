//! Text normalization for token-based similarity scoring.
//!
//! Every token-level comparison in the crate goes through [`normalize`]:
//! lowercase, whitespace split, then keep only alphabetic tokens longer
//! than two characters that are not stopwords. The stopword list is a
//! fixed, closed set of English function words; there is no stemming and
//! no internationalized folding.

mod cache;

pub use cache::Normalizer;

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Closed stopword set: articles, conjunctions, prepositions, and common
/// auxiliary verbs and pronouns. Entries of one or two characters are
/// already excluded by the length filter but are kept here so the list
/// reads as the natural word class.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "nor", "if", "then", "else", "when", "while", "at",
        "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "from", "up", "down", "in", "out", "on", "off", "over", "under",
        "again", "once", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "doing", "will", "would", "should", "could", "may", "might",
        "must", "can", "shall", "this", "that", "these", "those", "i", "you", "he", "she", "it",
        "we", "they", "him", "his", "her", "its", "their", "them", "our", "your", "my",
    ]
    .into_iter()
    .collect()
});

/// True when `token` (already lowercased) is in the fixed stopword set.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Normalize free text into comparison tokens.
///
/// Deterministic: the same input always yields the same token sequence.
/// Empty or whitespace-only input yields an empty vector. Tokens carrying
/// punctuation or digits are dropped entirely rather than trimmed.
pub fn normalize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|t| t.chars().count() > 2)
        .filter(|t| t.chars().all(char::is_alphabetic))
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect()
}
