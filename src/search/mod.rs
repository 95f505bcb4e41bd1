//! Fuzzy title resolution and catalog search.
//!
//! The resolver scores each catalog title against a free-text query with a
//! strategy cascade (exact, substring containment, token overlap, edit
//! distance) and returns the single best match with a confidence score.
//! Full search blends that title score with a content score over the
//! description and genres, filters weak hits, and returns a bounded,
//! descending-sorted result list.

use std::collections::HashSet;

use tracing::debug;

use crate::core::{Movie, SearchHit, TitleMatch};
use crate::similarity;
use crate::text::Normalizer;

/// Conventional caller-side policy: confidence below this means the query
/// matched nothing worth showing. The resolver itself does not enforce it.
pub const MIN_MATCH_CONFIDENCE: f64 = 0.3;

/// Search hits at or below this overall score are dropped.
const MIN_SEARCH_SCORE: f64 = 0.1;

const TITLE_WEIGHT: f64 = 0.8;
const CONTENT_WEIGHT: f64 = 0.2;

// Cascade scores for the containment strategies.
const CONTAINS_BASE: f64 = 0.85;
const CONTAINS_COVERAGE_SPAN: f64 = 0.15;
const CONTAINED_IN_QUERY: f64 = 0.80;

// Blend for the token-overlap fallback.
const WORD_OVERLAP_WEIGHT: f64 = 0.7;
const EDIT_WEIGHT: f64 = 0.3;

/// Title-match score for a single title, in [0, 1].
///
/// Strategies are tried in priority order; the first that applies wins:
/// 1. exact case-insensitive equality: 1.0;
/// 2. title contains the query: 0.85 plus up to 0.15 for coverage, so a
///    query spanning most of the title approaches 1.0;
/// 3. query contains the title: 0.80;
/// 4. word overlap blended with edit-distance similarity; when either
///    side has no usable words, edit distance alone.
pub fn title_match_score(title: &str, query: &str) -> f64 {
    let title_lc = title.trim().to_lowercase();
    let query_lc = query.trim().to_lowercase();

    if title_lc == query_lc {
        return 1.0;
    }
    if !query_lc.is_empty() && title_lc.contains(&query_lc) {
        let coverage = query_lc.chars().count() as f64 / title_lc.chars().count().max(1) as f64;
        return CONTAINS_BASE + coverage * CONTAINS_COVERAGE_SPAN;
    }
    if !title_lc.is_empty() && query_lc.contains(&title_lc) {
        return CONTAINED_IN_QUERY;
    }

    let title_words = match_words(&title_lc);
    let query_words = match_words(&query_lc);
    if title_words.is_empty() || query_words.is_empty() {
        return similarity::levenshtein_similarity(&title_lc, &query_lc);
    }
    let matching = query_words.intersection(&title_words).count();
    let overlap = matching as f64 / query_words.len().max(title_words.len()) as f64;
    WORD_OVERLAP_WEIGHT * overlap
        + EDIT_WEIGHT * similarity::levenshtein_similarity(&title_lc, &query_lc)
}

/// Words used by the overlap strategy: whitespace split, longer than two
/// characters. Unlike full normalization there is no stopword filter.
fn match_words(text: &str) -> HashSet<&str> {
    text.split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .collect()
}

/// Best fuzzy title match across the catalog.
///
/// Returns `None` on an empty catalog; ties keep the first movie in
/// catalog order. Absence of a good match is an expected outcome, never
/// an error; callers typically treat confidence below
/// [`MIN_MATCH_CONFIDENCE`] as "no match".
pub fn find_closest_match(catalog: &[Movie], query: &str) -> Option<TitleMatch> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, movie) in catalog.iter().enumerate() {
        let score = title_match_score(&movie.title, query);
        match best {
            None => best = Some((idx, score)),
            Some((_, top)) if score > top => best = Some((idx, score)),
            _ => {}
        }
    }
    best.map(|(idx, confidence)| {
        debug!(
            query,
            title = %catalog[idx].title,
            confidence,
            "resolved closest title match"
        );
        TitleMatch {
            movie: catalog[idx].clone(),
            confidence,
        }
    })
}

/// Search the catalog by title and content.
///
/// Per movie: the title cascade gives `title_score`; combined text
/// similarity of the query against description plus genres gives
/// `content_score`; the overall score is `0.8 * title + 0.2 * content`.
/// Hits scoring at or below 0.1 are dropped, the rest sorted descending
/// (ties keep catalog order) and truncated to `max_results`.
pub fn search_movies(catalog: &[Movie], query: &str, max_results: usize) -> Vec<SearchHit> {
    let normalizer = Normalizer::new();
    let query_tokens = normalizer.tokens(query);

    let mut hits: Vec<SearchHit> = Vec::new();
    for movie in catalog {
        let title_score = title_match_score(&movie.title, query);

        let mut content = String::with_capacity(movie.description.len() + 32);
        content.push_str(&movie.description);
        for genre in &movie.genres {
            content.push(' ');
            content.push_str(genre);
        }
        let content_score = similarity::combined_with_tokens(
            query,
            &content,
            &query_tokens,
            &normalizer.tokens(&content),
        );

        let search_score = TITLE_WEIGHT * title_score + CONTENT_WEIGHT * content_score;
        if search_score > MIN_SEARCH_SCORE {
            hits.push(SearchHit {
                movie: movie.clone(),
                search_score,
                title_score,
                content_score,
            });
        }
    }

    // Stable sort keeps catalog order for equal scores.
    hits.sort_by(|a, b| {
        b.search_score
            .partial_cmp(&a.search_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    hits.truncate(max_results);
    debug!(query, returned = hits.len(), "catalog search complete");
    hits
}
