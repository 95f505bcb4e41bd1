//! reelrank: a movie similarity scoring and ranking engine.
//!
//! Given an in-memory catalog of movies, this crate ranks candidates by
//! similarity to a selected reference movie or a free-text query. The
//! pipeline combines token-based text similarity (Jaccard, cosine),
//! character-level edit distance (Levenshtein), and structured attribute
//! comparisons (genres, rating, director) under fixed weights, with a
//! typo-tolerant fuzzy title resolver and franchise-aware re-ranking.
//!
//! All scoring is synchronous, pure, and stateless with respect to the
//! catalog; the only shared mutable state is a bounded normalization
//! cache that never changes observable results.
//!
//! ```
//! use reelrank::{Movie, RecommendOptions, Recommender};
//!
//! let catalog = vec![
//!     Movie::new(1u64, "Star Wars", 1977, 8.6)
//!         .with_genres(["Action", "Adventure"])
//!         .with_description("A farm boy joins a rebellion against a galactic empire"),
//!     Movie::new(2u64, "The Empire Strikes Back", 1980, 8.7)
//!         .with_genres(["Action", "Adventure"])
//!         .with_description("The rebellion is scattered after a crushing imperial assault"),
//!     Movie::new(3u64, "Casablanca", 1942, 8.5)
//!         .with_genres(["Drama", "Romance"])
//!         .with_description("A cafe owner shelters refugees in wartime Morocco"),
//! ];
//!
//! let ranked = Recommender::new().recommend(&catalog, &catalog[0], RecommendOptions::default());
//! assert!(ranked.iter().all(|r| r.movie.id != catalog[0].id));
//! assert_eq!(ranked[0].movie.title, "The Empire Strikes Back");
//! ```

/// Catalog loading and validation boundary
pub mod catalog;
/// Core data types (movies, identifiers, scored results)
pub mod core;
/// Error types
pub mod error;
/// Logging and tracing setup
pub mod logging;
/// Candidate filtering and top-N ranking
pub mod recommend;
/// Attribute comparators and weighted score combination
pub mod score;
/// Fuzzy title resolution and catalog search
pub mod search;
/// Text similarity primitives
pub mod similarity;
/// Text normalization and token caching
pub mod text;

pub use crate::core::{Movie, MovieId, ScoredMovie, SearchHit, TitleMatch};
pub use crate::error::{ReelrankError, Result};
pub use crate::recommend::{get_recommendations, RecommendOptions, Recommender};
pub use crate::score::ScoreEngine;
pub use crate::search::{find_closest_match, search_movies, MIN_MATCH_CONFIDENCE};
pub use crate::similarity::TextAlgo;
