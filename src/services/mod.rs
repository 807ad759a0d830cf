pub mod providers;
pub mod recommender;

pub use providers::{PosterProvider, TmdbPosterProvider};
pub use recommender::{rank_similar, Recommender};
