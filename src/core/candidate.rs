//! Scored result types produced by the ranking and search pipelines.
//!
//! These are derived, per-query values: each holds a clone of the catalog
//! entry plus the scores computed for that query. They are never persisted.

use serde::{Deserialize, Serialize};

use crate::core::movie::Movie;

/// A candidate movie with its overall similarity to the reference movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMovie {
    pub movie: Movie,
    /// Combined similarity plus franchise bonus; may exceed 1.0 for
    /// strong franchise matches.
    pub similarity_score: f64,
}

/// A search result with its component scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    pub movie: Movie,
    /// Overall score: weighted blend of title and content scores
    pub search_score: f64,
    /// Title-cascade score against the query
    pub title_score: f64,
    /// Combined text similarity of the query to description and genres
    pub content_score: f64,
}

/// Best fuzzy title match for a free-text query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleMatch {
    pub movie: Movie,
    /// Match confidence in [0, 1]; 1.0 is an exact title match
    pub confidence: f64,
}
