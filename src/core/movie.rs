//! Movie record and identifier types.
//!
//! `Movie` is the immutable input record for every scoring operation. The
//! engine never mutates a catalog entry; ranked and searched results carry
//! derived scored copies instead.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque movie identifier, compared by exact equality.
///
/// Upstream catalogs are inconsistent about numeric vs string identifiers
/// (`42` and `"42"` both occur in the wild). Both forms are normalized to a
/// canonical string at the deserialization boundary so that equality checks
/// downstream never depend on the JSON representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => MovieId(n.to_string()),
            RawId::Text(s) => MovieId(s),
        })
    }
}

/// A catalog entry with the fields used for similarity scoring plus
/// passthrough metadata the engine ignores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier within a catalog
    pub id: MovieId,
    /// Display title (non-empty by catalog contract)
    pub title: String,
    /// Release year
    #[serde(default)]
    pub year: i32,
    /// Aggregate rating, contract domain 0-10 inclusive
    #[serde(default)]
    pub rating: f64,
    /// Genre labels, may be empty
    #[serde(default)]
    pub genres: Vec<String>,
    /// Free-text plot description, may be empty
    #[serde(default)]
    pub description: String,
    /// Director name when known
    #[serde(default)]
    pub director: Option<String>,
    /// Runtime in minutes (not scored)
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Principal cast (not scored)
    #[serde(default)]
    pub actors: Vec<String>,
    /// Awards summary (not scored)
    #[serde(default)]
    pub awards: Option<String>,
    /// Poster image reference (not scored)
    #[serde(default)]
    pub poster: Option<String>,
}

impl Movie {
    /// Create a movie with the scored scalar fields; list and optional
    /// fields start empty and can be filled with the `with_*` builders.
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            rating,
            genres: Vec::new(),
            description: String::new(),
            director: None,
            runtime: None,
            actors: Vec::new(),
            awards: None,
            poster: None,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }
}
