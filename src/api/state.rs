use std::sync::Arc;

use crate::{
    catalog::Catalog,
    config::Config,
    services::{PosterProvider, Recommender, TmdbPosterProvider},
};

/// Shared application state
///
/// Built once at startup and handed to every handler. Everything inside is
/// read-only, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Creates state from an already loaded catalog and a poster provider
    pub fn new(
        catalog: Arc<Catalog>,
        posters: Arc<dyn PosterProvider>,
        placeholder_poster_url: String,
        recommendation_count: usize,
    ) -> Self {
        let recommender = Recommender::new(catalog, posters, placeholder_poster_url)
            .with_limit(recommendation_count);

        Self {
            recommender: Arc::new(recommender),
        }
    }

    /// Loads the artifacts named in `config` and wires the TMDB provider
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let catalog = Catalog::load(&config.catalog_path, &config.similarity_path)?;
        let posters = TmdbPosterProvider::from_config(config);

        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(posters),
            config.placeholder_poster_url.clone(),
            config.recommendation_count,
        ))
    }

    pub fn catalog(&self) -> &Catalog {
        self.recommender.catalog()
    }
}
