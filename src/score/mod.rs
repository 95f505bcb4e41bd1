//! Score combination: attribute comparators and the weighted blend that
//! turns text and attribute similarity into one overall value.

pub mod attributes;
pub mod combine;

pub use attributes::{director_similarity, genre_similarity, rating_similarity};
pub use combine::ScoreEngine;
