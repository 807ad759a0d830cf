use serde::{Deserialize, Serialize};

/// External identifier used to look up poster artwork (TMDB movie id)
pub type MovieId = u64;

/// A single catalog row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
    pub movie_id: MovieId,
}

impl Movie {
    pub fn new(title: impl Into<String>, movie_id: MovieId) -> Self {
        Self {
            title: title.into(),
            movie_id,
        }
    }
}

/// A ranked neighbour of the selected movie, before poster resolution
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie {
    /// Row position in the catalog
    pub index: usize,
    pub score: f64,
}

/// A recommended movie returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub movie_id: MovieId,
    pub score: f64,
    pub poster_url: String,
}

/// Ordered recommendations for one selected title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendations {
    pub selected: String,
    pub movies: Vec<Recommendation>,
}

impl Recommendations {
    /// Splits into parallel lists of titles and poster URLs, in rank order
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        self.movies
            .into_iter()
            .map(|movie| (movie.title, movie.poster_url))
            .unzip()
    }
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Subset of the TMDB `GET /movie/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// Relative image path, e.g. "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
    #[serde(default)]
    pub poster_path: Option<String>,
}
