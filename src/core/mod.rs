//! Core data types for the reelrank engine.
//!
//! This module contains the immutable `Movie` input record, its normalized
//! identifier type, and the derived scored-output types produced by the
//! search and recommendation pipelines.

pub mod candidate;
pub mod movie;

pub use candidate::{ScoredMovie, SearchHit, TitleMatch};
pub use movie::{Movie, MovieId};
