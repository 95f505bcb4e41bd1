//! Text similarity primitives: set-overlap, vector-space, and edit-distance.
//!
//! Each scoring function returns a value in the closed interval [0, 1] and
//! defines an explicit fallback for degenerate input instead of failing;
//! division by zero is always guarded. Jaccard and cosine operate on
//! normalized tokens (see [`crate::text::normalize`]); Levenshtein operates
//! on the raw, case-folded strings.

use std::collections::{BTreeMap, HashSet};

use crate::text::normalize;

/// Weights for the combined text score. Cosine dominates so that shared
/// vocabulary counts for more than character-level edits; the three
/// weights sum to 1.
pub const COMBINED_COSINE_WEIGHT: f64 = 0.6;
pub const COMBINED_JACCARD_WEIGHT: f64 = 0.3;
pub const COMBINED_LEVENSHTEIN_WEIGHT: f64 = 0.1;

/// Closed set of text-scoring strategies selectable per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlgo {
    /// Token-set overlap
    Jaccard,
    /// Term-frequency vector similarity
    Cosine,
    /// Normalized edit-distance similarity
    Levenshtein,
    /// Weighted blend of the three primitives
    #[default]
    Combined,
}

/// Compute a similarity score in [0.0, 1.0] (higher is more similar).
pub fn score(algo: TextAlgo, a: &str, b: &str) -> f64 {
    use TextAlgo::*;
    match algo {
        Jaccard => jaccard(a, b),
        Cosine => cosine(a, b),
        Levenshtein => levenshtein_similarity(a, b),
        Combined => combined_text_similarity(a, b),
    }
}

/// Jaccard similarity of the normalized token sets of two texts.
///
/// Returns 0 when either normalized set is empty, which also covers the
/// empty-union case.
pub fn jaccard(a: &str, b: &str) -> f64 {
    jaccard_tokens(&normalize(a), &normalize(b))
}

/// Jaccard similarity over pre-normalized tokens.
pub fn jaccard_tokens(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of term-frequency vectors built from the normalized
/// token multisets of two texts. Returns 0 when either magnitude is 0.
pub fn cosine(a: &str, b: &str) -> f64 {
    cosine_tokens(&normalize(a), &normalize(b))
}

/// Cosine similarity over pre-normalized tokens.
pub fn cosine_tokens(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let freq_a = term_frequencies(a);
    let freq_b = term_frequencies(b);

    let dot: f64 = freq_a
        .iter()
        .filter_map(|(term, fa)| freq_b.get(term).map(|fb| fa * fb))
        .sum();
    let mag_a = magnitude(&freq_a);
    let mag_b = magnitude(&freq_b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

// Ordered maps keep the floating-point accumulation order deterministic,
// which makes cosine exactly symmetric and repeatable across runs.
fn term_frequencies(tokens: &[String]) -> BTreeMap<&str, f64> {
    let mut freq: BTreeMap<&str, f64> = BTreeMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    freq
}

fn magnitude(freq: &BTreeMap<&str, f64>) -> f64 {
    freq.values().map(|f| f * f).sum::<f64>().sqrt()
}

/// Case-insensitive Levenshtein distance in unit-cost edits, measured in
/// `char`s over the raw (non-stopword-filtered) strings.
///
/// When the lengths differ by more than half the longer length, the longer
/// length is returned as a worst-case approximation instead of running the
/// matrix; in that regime the result is deliberately not an exact distance.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let chars_a: Vec<char> = a.to_lowercase().chars().collect();
    let chars_b: Vec<char> = b.to_lowercase().chars().collect();
    levenshtein_chars(&chars_a, &chars_b)
}

fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    let (len_a, len_b) = (a.len(), b.len());
    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }
    let max_len = len_a.max(len_b);
    if len_a.abs_diff(len_b) > max_len / 2 {
        return max_len;
    }

    // Two-row rolling computation; identical result to the full matrix.
    let mut prev: Vec<usize> = (0..=len_b).collect();
    let mut cur: Vec<usize> = vec![0; len_b + 1];
    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[len_b]
}

/// Edit-distance similarity: `1 - distance / max(len)`, computed over the
/// case-folded strings so the result is non-negative by construction.
/// Two empty strings are identical, hence 1.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.to_lowercase().chars().collect();
    let chars_b: Vec<char> = b.to_lowercase().chars().collect();
    let max_len = chars_a.len().max(chars_b.len());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_chars(&chars_a, &chars_b);
    1.0 - distance as f64 / max_len as f64
}

/// Weighted blend of cosine, Jaccard, and Levenshtein similarity.
pub fn combined_text_similarity(a: &str, b: &str) -> f64 {
    combined_with_tokens(a, b, &normalize(a), &normalize(b))
}

/// Combined score for callers that already hold normalized tokens for both
/// texts; the raw strings are still needed for the edit-distance term.
pub fn combined_with_tokens(a: &str, b: &str, tokens_a: &[String], tokens_b: &[String]) -> f64 {
    COMBINED_COSINE_WEIGHT * cosine_tokens(tokens_a, tokens_b)
        + COMBINED_JACCARD_WEIGHT * jaccard_tokens(tokens_a, tokens_b)
        + COMBINED_LEVENSHTEIN_WEIGHT * levenshtein_similarity(a, b)
}
