//! Candidate filtering and top-N recommendation ranking.
//!
//! Given a selected movie, the ranker excludes it from the catalog, prefers
//! candidates sharing at least one genre when enough of them exist, scores
//! every candidate against the selection, adds a franchise bonus for shared
//! significant title tokens, and returns the top N by final score.

use std::cmp::Ordering;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::core::{Movie, ScoredMovie};
use crate::score::ScoreEngine;
use crate::similarity::TextAlgo;

/// Scale of the additive franchise bonus. Final scores are not capped at
/// 1.0: an exact franchise match may outscore the attribute ceiling.
pub const FRANCHISE_BONUS_WEIGHT: f64 = 0.25;

/// The genre-overlap pool is only used when it holds at least this many
/// times `top_n` candidates.
const GENRE_POOL_FACTOR: usize = 2;

/// Below this many candidates the scoring loop stays sequential.
const PAR_THRESHOLD: usize = 128;

/// Title tokens are split on whitespace and colons ("Mad Max: Fury Road").
static RE_TITLE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s:]+").expect("valid title split regex"));

/// Connective title words that say nothing about franchise identity.
const FRANCHISE_STOPLIST: [&str; 5] = ["the", "and", "part", "vol", "volume"];

/// Per-call ranking options. Weights are compile-time constants; only the
/// text algorithm and result count are selectable.
#[derive(Debug, Clone, Copy)]
pub struct RecommendOptions {
    pub top_n: usize,
    pub algo: TextAlgo,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            algo: TextAlgo::Combined,
        }
    }
}

/// Recommendation ranker over an in-memory catalog.
///
/// Stateless with respect to the catalog: every call receives the full
/// candidate list and produces fresh scored copies.
#[derive(Debug, Default)]
pub struct Recommender {
    engine: ScoreEngine,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            engine: ScoreEngine::new(),
        }
    }

    /// Rank `catalog` by similarity to `selected` and return the top
    /// `options.top_n` scored candidates, sorted descending.
    ///
    /// The selected movie itself is always excluded by identifier
    /// equality. Ordering is deterministic: equal scores keep catalog
    /// order even when scoring runs in parallel.
    pub fn recommend(
        &self,
        catalog: &[Movie],
        selected: &Movie,
        options: RecommendOptions,
    ) -> Vec<ScoredMovie> {
        let candidates: Vec<&Movie> = catalog.iter().filter(|m| m.id != selected.id).collect();

        let selected_genres: HashSet<String> = selected
            .genres
            .iter()
            .map(|g| g.trim().to_lowercase())
            .collect();
        let genre_pool: Vec<&Movie> = if selected_genres.is_empty() {
            Vec::new()
        } else {
            candidates
                .iter()
                .copied()
                .filter(|m| {
                    m.genres
                        .iter()
                        .any(|g| selected_genres.contains(&g.trim().to_lowercase()))
                })
                .collect()
        };
        // Soft genre preference: only restrict to the overlap pool when it
        // can fill the result list with room to spare.
        let pool = if genre_pool.len() >= GENRE_POOL_FACTOR * options.top_n {
            genre_pool
        } else {
            candidates
        };

        let franchise = franchise_tokens(&selected.title);
        let mut reference_text = String::with_capacity(selected.description.len() + 32);
        reference_text.push_str(&selected.description);
        for genre in &selected.genres {
            reference_text.push(' ');
            reference_text.push_str(genre);
        }

        let pool_size = pool.len();
        let score_one = |movie: &Movie| -> ScoredMovie {
            let base =
                self.engine
                    .movie_similarity(movie, &reference_text, options.algo, Some(selected));
            let bonus = franchise_bonus(&franchise, &movie.title);
            ScoredMovie {
                movie: movie.clone(),
                similarity_score: base + bonus,
            }
        };
        let mut scored: Vec<ScoredMovie> = if pool.len() >= PAR_THRESHOLD {
            pool.par_iter().map(|m| score_one(m)).collect()
        } else {
            pool.iter().map(|m| score_one(m)).collect()
        };

        // Stable sort keeps catalog order for equal scores.
        scored.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(options.top_n);
        debug!(
            selected = %selected.id,
            pool = pool_size,
            returned = scored.len(),
            "ranked recommendations"
        );
        scored
    }
}

/// Convenience wrapper constructing a fresh [`Recommender`] per call.
pub fn get_recommendations(
    catalog: &[Movie],
    selected: &Movie,
    algo: TextAlgo,
    top_n: usize,
) -> Vec<ScoredMovie> {
    Recommender::new().recommend(catalog, selected, RecommendOptions { top_n, algo })
}

/// Significant tokens of a title, used for franchise detection: split on
/// whitespace and colons, keep tokens of three or more characters that are
/// not pure digits and not connective words.
fn franchise_tokens(title: &str) -> Vec<String> {
    RE_TITLE_SPLIT
        .split(&title.to_lowercase())
        .filter(|t| t.chars().count() >= 3)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !FRANCHISE_STOPLIST.contains(t))
        .map(str::to_string)
        .collect()
}

/// Fraction of franchise tokens appearing as substrings of the candidate
/// title, scaled by [`FRANCHISE_BONUS_WEIGHT`]. Zero when the reference
/// title yields no tokens.
fn franchise_bonus(tokens: &[String], candidate_title: &str) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let title_lc = candidate_title.to_lowercase();
    let matching = tokens.iter().filter(|t| title_lc.contains(t.as_str())).count();
    matching as f64 / tokens.len() as f64 * FRANCHISE_BONUS_WEIGHT
}
