//! Comparators over structured movie fields.
//!
//! Each returns a score in [0, 1]. Absent data scores 0: "unknown" is
//! neutral, not an error.

use std::collections::HashSet;

/// Jaccard overlap of case-normalized genre label sets.
/// Returns 0 when either list is empty.
pub fn genre_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let set_a: HashSet<String> = a.iter().map(|g| g.trim().to_lowercase()).collect();
    let set_b: HashSet<String> = b.iter().map(|g| g.trim().to_lowercase()).collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Closeness of two ratings on the 0-10 scale: `1 - |r1 - r2| / 10`.
///
/// Only well-defined for ratings inside the contract domain [0, 10];
/// out-of-range input is a caller contract violation and is not clamped.
pub fn rating_similarity(r1: f64, r2: f64) -> f64 {
    1.0 - (r1 - r2).abs() / 10.0
}

/// Case-insensitive exact match on director name; 0 when either side is
/// missing or empty.
pub fn director_similarity(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (Some(x), Some(y)) if !x.trim().is_empty() && !y.trim().is_empty() => {
            if x.trim().to_lowercase() == y.trim().to_lowercase() {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn genre_similarity_overlap() {
        let a = genres(&["Action", "Sci-Fi"]);
        let b = genres(&["sci-fi", "Drama"]);
        // {"action","sci-fi"} vs {"sci-fi","drama"}: 1 shared of 3
        assert!((genre_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn genre_similarity_empty_lists_score_zero() {
        let a = genres(&["Action"]);
        assert_eq!(genre_similarity(&a, &[]), 0.0);
        assert_eq!(genre_similarity(&[], &a), 0.0);
        assert_eq!(genre_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn genre_similarity_identical_sets() {
        let a = genres(&["Horror", "Thriller"]);
        let b = genres(&["thriller", "HORROR"]);
        assert!((genre_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rating_similarity_examples() {
        assert!((rating_similarity(8.0, 8.0) - 1.0).abs() < 1e-9);
        assert!((rating_similarity(9.0, 4.0) - 0.5).abs() < 1e-9);
        assert!((rating_similarity(0.0, 10.0) - 0.0).abs() < 1e-9);
        // Symmetric
        assert_eq!(rating_similarity(3.2, 7.9), rating_similarity(7.9, 3.2));
    }

    #[test]
    fn director_similarity_exact_match_only() {
        assert_eq!(
            director_similarity(Some("Ridley Scott"), Some("ridley scott")),
            1.0
        );
        assert_eq!(
            director_similarity(Some("Ridley Scott"), Some("Tony Scott")),
            0.0
        );
        assert_eq!(director_similarity(Some("Ridley Scott"), None), 0.0);
        assert_eq!(director_similarity(None, None), 0.0);
        assert_eq!(director_similarity(Some(""), Some("")), 0.0);
    }
}
