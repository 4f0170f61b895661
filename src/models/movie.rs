use serde::{Deserialize, Deserializer, Serialize};

/// A single score given to a movie by one rating provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Rating provider name (e.g., "Rotten Tomatoes")
    pub source: String,
    /// Numeric score; the API sends integers on a 0-100 scale
    pub value: f64,
}

/// A movie as returned by the rating API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Display title, also used for navigation and lookup
    pub title: String,
    /// The backend sends `null` for a movie with no ratings
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ratings: Vec<Rating>,
    /// Mean of `ratings`, recomputed client-side by the movie query
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default, rename = "Plot", skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, rename = "Genre", skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Arithmetic mean of the rating values, `0.0` when there are none
pub fn average_score(ratings: &[Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let total: f64 = ratings.iter().map(|r| r.value).sum();
    total / ratings.len() as f64
}

impl Movie {
    /// Creates a movie with no descriptive metadata
    pub fn new(title: impl Into<String>, ratings: Vec<Rating>) -> Self {
        Self {
            title: title.into(),
            ratings,
            average_rating: 0.0,
            plot: None,
            genre: None,
        }
    }

    /// Placeholder used to seed the extremal selectors
    pub fn sentinel(average_rating: f64) -> Self {
        Self {
            average_rating,
            ..Self::new(String::new(), Vec::new())
        }
    }

    /// True for the selector seed, i.e. no real movie was chosen
    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty() && self.ratings.is_empty()
    }

    /// Replaces `average_rating` with the mean of this movie's ratings
    pub fn with_average_rating(mut self) -> Self {
        self.average_rating = average_score(&self.ratings);
        self
    }
}

impl Rating {
    pub fn new(source: impl Into<String>, value: f64) -> Self {
        Self {
            source: source.into(),
            value,
        }
    }
}
