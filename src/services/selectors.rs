//! Pure derivations over an already-fetched movie collection.
//!
//! Callers holding an optional collection pass
//! `movies.into_iter().flatten()`, so a missing collection is treated as empty.

use crate::models::Movie;

/// Seed for [`highest_rated`]
pub const HIGHEST_SEED: f64 = 0.0;

/// Seed for [`lowest_rated`]
pub const LOWEST_SEED: f64 = 100.0;

/// Movie with the greatest `average_rating`
///
/// Ties go to the last equal movie. A collection with nothing rated at or
/// above [`HIGHEST_SEED`] yields the placeholder sentinel.
pub fn highest_rated<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Movie {
    extremal(movies, HIGHEST_SEED, |candidate, current| candidate >= current)
}

/// Movie with the smallest `average_rating`
///
/// Ties go to the last equal movie. A collection with nothing rated at or
/// below [`LOWEST_SEED`] yields the placeholder sentinel.
pub fn lowest_rated<'a>(movies: impl IntoIterator<Item = &'a Movie>) -> Movie {
    extremal(movies, LOWEST_SEED, |candidate, current| candidate <= current)
}

fn extremal<'a>(
    movies: impl IntoIterator<Item = &'a Movie>,
    seed: f64,
    replaces: impl Fn(f64, f64) -> bool,
) -> Movie {
    let mut best: Option<&Movie> = None;
    let mut best_rating = seed;

    for movie in movies {
        if replaces(movie.average_rating, best_rating) {
            best = Some(movie);
            best_rating = movie.average_rating;
        }
    }

    best.cloned().unwrap_or_else(|| Movie::sentinel(seed))
}

/// First movie whose title equals `title` exactly
pub fn find_by_title<'a>(
    movies: impl IntoIterator<Item = &'a Movie>,
    title: &str,
) -> Option<&'a Movie> {
    movies.into_iter().find(|movie| movie.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(title: &str, average_rating: f64) -> Movie {
        Movie {
            average_rating,
            ..Movie::new(title, Vec::new())
        }
    }

    fn sample() -> Vec<Movie> {
        vec![rated("Low", 10.0), rated("High", 90.0), rated("Mid", 50.0)]
    }

    #[test]
    fn test_highest_rated_picks_maximum() {
        let movie = highest_rated(&sample());
        assert_eq!(movie.title, "High");
        assert_eq!(movie.average_rating, 90.0);
    }

    #[test]
    fn test_lowest_rated_picks_minimum() {
        let movie = lowest_rated(&sample());
        assert_eq!(movie.title, "Low");
        assert_eq!(movie.average_rating, 10.0);
    }

    #[test]
    fn test_empty_collection_yields_sentinels() {
        let empty: Vec<Movie> = Vec::new();

        let highest = highest_rated(&empty);
        assert!(highest.is_placeholder());
        assert_eq!(highest.average_rating, HIGHEST_SEED);

        let lowest = lowest_rated(&empty);
        assert!(lowest.is_placeholder());
        assert_eq!(lowest.average_rating, LOWEST_SEED);
    }

    #[test]
    fn test_missing_collection_yields_sentinels() {
        let missing: Option<&Vec<Movie>> = None;

        assert!(highest_rated(missing.into_iter().flatten()).is_placeholder());
        assert!(lowest_rated(missing.into_iter().flatten()).is_placeholder());
    }

    #[test]
    fn test_ties_go_to_last_equal_movie() {
        let movies = vec![
            rated("First best", 90.0),
            rated("Worst", 20.0),
            rated("Second best", 90.0),
            rated("Second worst", 20.0),
        ];

        assert_eq!(highest_rated(&movies).title, "Second best");
        assert_eq!(lowest_rated(&movies).title, "Second worst");
    }

    #[test]
    fn test_seed_values_are_inclusive() {
        let zero = vec![rated("Unrated", 0.0)];
        assert_eq!(highest_rated(&zero).title, "Unrated");

        let perfect = vec![rated("Perfect", 100.0)];
        assert_eq!(lowest_rated(&perfect).title, "Perfect");
    }

    #[test]
    fn test_out_of_range_ratings_keep_sentinel() {
        let above = vec![rated("Overflow", 120.0)];
        assert!(lowest_rated(&above).is_placeholder());

        let below = vec![rated("Negative", -5.0)];
        assert!(highest_rated(&below).is_placeholder());
    }

    #[test]
    fn test_find_by_title_exact_match() {
        let movies = sample();
        let found = find_by_title(&movies, "Mid").unwrap();
        assert_eq!(found.average_rating, 50.0);
    }

    #[test]
    fn test_find_by_title_absent_or_inexact() {
        let movies = sample();
        assert!(find_by_title(&movies, "Missing").is_none());
        assert!(find_by_title(&movies, "mid").is_none());
        assert!(find_by_title(&movies, "Mid ").is_none());
    }

    #[test]
    fn test_find_by_title_returns_first_duplicate() {
        let movies = vec![rated("Dune", 60.0), rated("Dune", 80.0)];
        assert_eq!(find_by_title(&movies, "Dune").unwrap().average_rating, 60.0);
    }
}
