//! End-to-end recommendation ranking tests over the JSON catalog fixture
//! and a larger synthetic catalog that exercises the parallel scoring path.

use anyhow::Result;
use reelrank::{
    catalog, get_recommendations, Movie, MovieId, RecommendOptions, Recommender, TextAlgo,
};

fn fixture_catalog() -> Result<Vec<Movie>> {
    Ok(catalog::from_json_file("tests/fixtures/movies.json")?)
}

fn movie_by_title<'a>(movies: &'a [Movie], title: &str) -> &'a Movie {
    movies
        .iter()
        .find(|m| m.title == title)
        .unwrap_or_else(|| panic!("fixture is missing {title:?}"))
}

#[test]
fn never_recommends_the_selection_itself() -> Result<()> {
    let movies = fixture_catalog()?;
    for selected in &movies {
        let ranked = get_recommendations(&movies, selected, TextAlgo::Combined, 5);
        assert!(ranked.iter().all(|r| r.movie.id != selected.id));
        assert!(ranked.len() <= 5);
    }
    Ok(())
}

#[test]
fn output_is_sorted_descending() -> Result<()> {
    let movies = fixture_catalog()?;
    let selected = movie_by_title(&movies, "Alien");
    let ranked = get_recommendations(&movies, selected, TextAlgo::Combined, 10);
    for pair in ranked.windows(2) {
        assert!(pair[0].similarity_score >= pair[1].similarity_score);
    }
    Ok(())
}

#[test]
fn franchise_titles_rank_at_the_top() -> Result<()> {
    let movies = fixture_catalog()?;
    let selected = movie_by_title(&movies, "Star Wars");
    let ranked = get_recommendations(&movies, selected, TextAlgo::Combined, 10);
    let top_titles: Vec<&str> = ranked[..2].iter().map(|r| r.movie.title.as_str()).collect();
    assert!(top_titles.contains(&"Star Wars: The Empire Strikes Back"));
    assert!(top_titles.contains(&"Star Wars: Return of the Jedi"));
    Ok(())
}

#[test]
fn sequel_of_selected_godfather_ranks_first() -> Result<()> {
    let movies = fixture_catalog()?;
    let selected = movie_by_title(&movies, "The Godfather");
    let ranked = get_recommendations(&movies, selected, TextAlgo::Combined, 10);
    assert_eq!(ranked[0].movie.title, "The Godfather Part II");
    Ok(())
}

#[test]
fn all_text_algorithms_produce_valid_rankings() -> Result<()> {
    let movies = fixture_catalog()?;
    let selected = movie_by_title(&movies, "The Matrix");
    for algo in [
        TextAlgo::Jaccard,
        TextAlgo::Cosine,
        TextAlgo::Levenshtein,
        TextAlgo::Combined,
    ] {
        let ranked = get_recommendations(&movies, selected, algo, 4);
        assert_eq!(ranked.len(), 4, "algo {algo:?}");
        assert!(ranked.iter().all(|r| r.movie.id != selected.id));
        for pair in ranked.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
    }
    Ok(())
}

/// Large synthetic catalog: enough candidates to cross the parallel
/// scoring threshold, with duplicated scores to check the catalog-order
/// tie-break stays deterministic.
fn synthetic_catalog(size: usize) -> Vec<Movie> {
    let genres = [
        ["Action", "Thriller"],
        ["Drama", "Romance"],
        ["Horror", "Mystery"],
        ["Comedy", "Family"],
    ];
    let descriptions = [
        "a relentless agent races against time to stop a conspiracy",
        "two strangers fall in love against the odds in a small town",
        "an isolated house hides a secret that wakes after midnight",
        "a chaotic family holiday goes from bad to hilariously worse",
    ];
    (0..size)
        .map(|i| {
            let bucket = i % genres.len();
            Movie::new(i as u64, format!("Synthetic Feature {i}"), 1980 + (i % 40) as i32, 5.0 + (bucket as f64))
                .with_genres(genres[bucket])
                .with_description(descriptions[bucket])
        })
        .collect()
}

#[test]
fn parallel_and_repeated_runs_are_deterministic() {
    let movies = synthetic_catalog(600);
    let recommender = Recommender::new();
    let options = RecommendOptions {
        top_n: 25,
        algo: TextAlgo::Combined,
    };
    let first = recommender.recommend(&movies, &movies[0], options);
    let second = recommender.recommend(&movies, &movies[0], options);
    assert_eq!(first.len(), 25);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.movie.id, b.movie.id);
        assert!((a.similarity_score - b.similarity_score).abs() < 1e-12);
    }
}

#[test]
fn equal_scores_keep_catalog_order() {
    let movies = synthetic_catalog(600);
    let ranked = get_recommendations(&movies, &movies[0], TextAlgo::Combined, 50);
    // Same-bucket candidates are textually identical, so scores repeat;
    // within a run of equal scores the ids must ascend in catalog order.
    for pair in ranked.windows(2) {
        if (pair[0].similarity_score - pair[1].similarity_score).abs() < 1e-12 {
            let a: u64 = pair[0].movie.id.as_str().parse().unwrap();
            let b: u64 = pair[1].movie.id.as_str().parse().unwrap();
            assert!(a < b, "tie broken out of catalog order: {a} before {b}");
        }
    }
}

#[test]
fn duplicate_identifiers_are_all_excluded() {
    // If the same id appears twice, neither copy may be recommended when
    // that id is selected.
    let mut movies = fixture_catalog().unwrap();
    let mut clone = movies[0].clone();
    clone.description = "a duplicate record with a different description".into();
    movies.push(clone);
    let selected = movies[0].clone();
    let ranked = get_recommendations(&movies, &selected, TextAlgo::Combined, 20);
    assert!(ranked.iter().all(|r| r.movie.id != selected.id));
}

#[test]
fn id_equality_ignores_source_representation() -> Result<()> {
    let movies = fixture_catalog()?;
    // Fixture id 1891 is a JSON string; selecting via a numeric id must
    // still exclude it.
    let selected = movie_by_title(&movies, "Star Wars: The Empire Strikes Back");
    assert_eq!(selected.id, MovieId::from(1891u64));
    let ranked = get_recommendations(&movies, selected, TextAlgo::Combined, 20);
    assert!(ranked.iter().all(|r| r.movie.id != MovieId::from("1891")));
    Ok(())
}
