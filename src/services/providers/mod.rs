/// Poster artwork provider abstraction
///
/// The recommender only needs one thing from the outside world: an image URL
/// for a catalog `movie_id`. Keeping it behind a trait lets the HTTP client be
/// swapped for a stub in tests or for another metadata service.
use crate::{error::AppResult, models::MovieId};

pub mod tmdb;

pub use tmdb::TmdbPosterProvider;

/// Trait for poster artwork providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve the full poster image URL for a movie
    ///
    /// Fails when the provider is unreachable, answers with a non-success
    /// status, or has no artwork for the movie.
    async fn fetch_poster(&self, movie_id: MovieId) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
