//! Fixed-weight combination of text and attribute similarity.
//!
//! The weights are compile-time constants; the only per-call choice is
//! the text algorithm.

use tracing::trace;

use crate::core::Movie;
use crate::score::attributes::{director_similarity, genre_similarity, rating_similarity};
use crate::similarity::{self, TextAlgo};
use crate::text::Normalizer;

pub const TEXT_WEIGHT: f64 = 0.365;
pub const GENRE_WEIGHT: f64 = 0.25;
pub const RATING_WEIGHT: f64 = 0.35;
pub const DIRECTOR_WEIGHT: f64 = 0.035;

/// Scoring engine combining text similarity with attribute comparators.
///
/// Owns a memoizing [`Normalizer`] so that ranking a catalog against one
/// reference text normalizes that text once, not once per candidate.
#[derive(Debug, Default)]
pub struct ScoreEngine {
    normalizer: Normalizer,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
        }
    }

    /// Engine without token caching; results are identical.
    pub fn uncached() -> Self {
        Self {
            normalizer: Normalizer::uncached(),
        }
    }

    /// Comparison text for a movie: the description twice, then the genre
    /// labels. The doubled description weights its terms double in the
    /// frequency vectors.
    pub fn comparison_text(movie: &Movie) -> String {
        let mut text = String::with_capacity(movie.description.len() * 2 + 32);
        text.push_str(&movie.description);
        text.push(' ');
        text.push_str(&movie.description);
        for genre in &movie.genres {
            text.push(' ');
            text.push_str(genre);
        }
        text
    }

    /// Text similarity via the selected algorithm, using cached tokens for
    /// the token-based strategies.
    pub fn text_similarity(&self, algo: TextAlgo, a: &str, b: &str) -> f64 {
        match algo {
            TextAlgo::Levenshtein => similarity::levenshtein_similarity(a, b),
            TextAlgo::Jaccard => {
                similarity::jaccard_tokens(&self.normalizer.tokens(a), &self.normalizer.tokens(b))
            }
            TextAlgo::Cosine => {
                similarity::cosine_tokens(&self.normalizer.tokens(a), &self.normalizer.tokens(b))
            }
            TextAlgo::Combined => similarity::combined_with_tokens(
                a,
                b,
                &self.normalizer.tokens(a),
                &self.normalizer.tokens(b),
            ),
        }
    }

    /// Overall similarity of `movie` to a query text.
    ///
    /// Without a reference movie the text similarity is returned as-is.
    /// With one, the result is the fixed weighted sum of text, genre,
    /// rating, and director similarity.
    pub fn movie_similarity(
        &self,
        movie: &Movie,
        query_text: &str,
        algo: TextAlgo,
        reference: Option<&Movie>,
    ) -> f64 {
        let comparison = Self::comparison_text(movie);
        let text_score = self.text_similarity(algo, query_text, &comparison);

        let Some(reference) = reference else {
            return text_score;
        };

        let genre_score = genre_similarity(&movie.genres, &reference.genres);
        let rating_score = rating_similarity(movie.rating, reference.rating);
        let director_score =
            director_similarity(movie.director.as_deref(), reference.director.as_deref());

        let overall = TEXT_WEIGHT * text_score
            + GENRE_WEIGHT * genre_score
            + RATING_WEIGHT * rating_score
            + DIRECTOR_WEIGHT * director_score;
        trace!(
            id = %movie.id,
            text_score,
            genre_score,
            rating_score,
            director_score,
            overall,
            "scored candidate against reference"
        );
        overall
    }
}
