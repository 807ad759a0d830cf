use std::{cmp::Ordering, sync::Arc};

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::{RankedMovie, Recommendation, Recommendations},
    services::providers::PosterProvider,
};

/// Default number of similar movies returned per request
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Ranks the catalog by similarity to `selected_title`
///
/// The first catalog row carrying the title is the reference row. Every
/// movie is scored from that row, sorted by descending score (the sort is
/// stable, so equal scores keep catalog order), the selected movie and any
/// duplicates of its title are removed, and the top `limit` are kept.
pub fn rank_similar(
    catalog: &Catalog,
    selected_title: &str,
    limit: usize,
) -> AppResult<Vec<RankedMovie>> {
    if selected_title.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Movie title cannot be empty".to_string(),
        ));
    }

    let selected = catalog
        .position_of(selected_title)
        .ok_or_else(|| AppError::NotFound(selected_title.to_string()))?;

    let row = catalog.similarity_row(selected).ok_or_else(|| {
        AppError::Internal(format!("missing similarity row {}", selected))
    })?;

    let mut scored: Vec<RankedMovie> = row
        .iter()
        .enumerate()
        .map(|(index, &score)| RankedMovie { index, score })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let ranked = scored
        .into_iter()
        .filter(|candidate| {
            candidate.index != selected
                && catalog
                    .movie(candidate.index)
                    .is_some_and(|movie| movie.title != selected_title)
        })
        .take(limit)
        .collect();

    Ok(ranked)
}

/// Turns a selected title into ranked recommendations with poster URLs
pub struct Recommender {
    catalog: Arc<Catalog>,
    posters: Arc<dyn PosterProvider>,
    limit: usize,
    placeholder_poster_url: String,
}

impl Recommender {
    pub fn new(
        catalog: Arc<Catalog>,
        posters: Arc<dyn PosterProvider>,
        placeholder_poster_url: String,
    ) -> Self {
        Self {
            catalog,
            posters,
            limit: DEFAULT_RECOMMENDATION_COUNT,
            placeholder_poster_url,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend similar movies for `selected_title`
    ///
    /// Posters are fetched one after another. A failed fetch falls back to
    /// the placeholder image for that movie only.
    pub async fn recommend(&self, selected_title: &str) -> AppResult<Recommendations> {
        let ranked = rank_similar(&self.catalog, selected_title, self.limit)?;

        let mut movies = Vec::with_capacity(ranked.len());
        for candidate in ranked {
            let movie = self.catalog.movie(candidate.index).ok_or_else(|| {
                AppError::Internal(format!("missing catalog row {}", candidate.index))
            })?;

            let poster_url = match self.posters.fetch_poster(movie.movie_id).await {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(
                        movie_id = movie.movie_id,
                        title = %movie.title,
                        provider = self.posters.name(),
                        error = %e,
                        "Poster fetch failed, using placeholder"
                    );
                    self.placeholder_poster_url.clone()
                }
            };

            movies.push(Recommendation {
                title: movie.title.clone(),
                movie_id: movie.movie_id,
                score: candidate.score,
                poster_url,
            });
        }

        tracing::info!(
            selected = %selected_title,
            results = movies.len(),
            "Recommendations computed"
        );

        Ok(Recommendations {
            selected: selected_title.to_string(),
            movies,
        })
    }
}
