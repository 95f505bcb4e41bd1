//! Catalog loading and validation boundary.
//!
//! The engine itself holds no catalog state; callers pass a fully
//! materialized movie list to every query. This module is the thin
//! boundary that turns adapter-produced JSON into that list, normalizing
//! identifiers on the way in (see [`crate::core::MovieId`]) and checking
//! the catalog contract.
//!
//! Contract violations split two ways: an empty title is a hard error,
//! while out-of-range ratings and duplicate identifiers are logged and
//! passed through, since the scoring pipeline tolerates both.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::core::Movie;
use crate::error::{ReelrankError, Result};

/// Parse a catalog from a JSON array of movie records.
pub fn from_json_str(data: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_str(data).map_err(|e| ReelrankError::Serialization(e.to_string()))?;
    validate(&movies)?;
    Ok(movies)
}

/// Parse a catalog from a reader producing a JSON array.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_reader(reader).map_err(|e| ReelrankError::Serialization(e.to_string()))?;
    validate(&movies)?;
    Ok(movies)
}

/// Load a catalog from a JSON file on disk.
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Vec<Movie>> {
    let data = fs::read_to_string(path)?;
    from_json_str(&data)
}

fn validate(movies: &[Movie]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, movie) in movies.iter().enumerate() {
        if movie.title.trim().is_empty() {
            return Err(ReelrankError::InvalidCatalog(format!(
                "movie at index {index} has an empty title"
            )));
        }
        if !(0.0..=10.0).contains(&movie.rating) {
            warn!(id = %movie.id, rating = movie.rating, "rating outside the 0-10 contract range");
        }
        if !seen.insert(&movie.id) {
            warn!(id = %movie.id, "duplicate movie identifier in catalog");
        }
    }
    Ok(())
}
