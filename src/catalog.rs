/// Catalog store
///
/// Holds the fixed movie list and the precomputed pairwise similarity matrix,
/// aligned by row position. Both are produced offline and loaded once at
/// startup from JSON artifacts:
///
/// - catalog: `[{"title": "Avatar", "movie_id": 19995}, ...]`
/// - similarity: `[[1.0, 0.12, ...], [0.12, 1.0, ...], ...]`
use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    similarity: Vec<Vec<f64>>,
}

impl Catalog {
    /// Builds a catalog, checking that the matrix is square, finite and
    /// aligned with the movie list
    pub fn new(movies: Vec<Movie>, similarity: Vec<Vec<f64>>) -> AppResult<Self> {
        if movies.is_empty() {
            return Err(AppError::Artifact(
                "catalog contains no movies".to_string(),
            ));
        }

        if similarity.len() != movies.len() {
            return Err(AppError::Artifact(format!(
                "similarity matrix has {} rows but catalog has {} movies",
                similarity.len(),
                movies.len()
            )));
        }

        for (i, row) in similarity.iter().enumerate() {
            if row.len() != movies.len() {
                return Err(AppError::Artifact(format!(
                    "similarity row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    movies.len()
                )));
            }

            if let Some(j) = row.iter().position(|score| !score.is_finite()) {
                return Err(AppError::Artifact(format!(
                    "similarity entry ({}, {}) is not a finite number",
                    i, j
                )));
            }
        }

        Ok(Self { movies, similarity })
    }

    /// Parses both artifacts from JSON readers
    pub fn from_readers<C, S>(catalog: C, similarity: S) -> AppResult<Self>
    where
        C: Read,
        S: Read,
    {
        let movies: Vec<Movie> = serde_json::from_reader(catalog)
            .map_err(|e| AppError::Artifact(format!("invalid catalog artifact: {}", e)))?;
        let similarity: Vec<Vec<f64>> = serde_json::from_reader(similarity)
            .map_err(|e| AppError::Artifact(format!("invalid similarity artifact: {}", e)))?;

        Self::new(movies, similarity)
    }

    /// Loads both artifacts from disk
    pub fn load(catalog_path: impl AsRef<Path>, similarity_path: impl AsRef<Path>) -> AppResult<Self> {
        let catalog_path = catalog_path.as_ref();
        let similarity_path = similarity_path.as_ref();

        let catalog = tracing::info_span!("load_catalog", path = %catalog_path.display())
            .in_scope(|| open_artifact(catalog_path))?;
        let similarity = tracing::info_span!("load_similarity", path = %similarity_path.display())
            .in_scope(|| open_artifact(similarity_path))?;

        let loaded = Self::from_readers(catalog, similarity).map_err(|e| match e {
            AppError::Artifact(msg) => AppError::Artifact(format!(
                "{} (catalog: {}, similarity: {})",
                msg,
                catalog_path.display(),
                similarity_path.display()
            )),
            other => other,
        })?;

        tracing::info!(movies = loaded.len(), "Catalog loaded");

        Ok(loaded)
    }

    /// Position of the first movie whose title matches exactly
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.movies.iter().position(|movie| movie.title == title)
    }

    pub fn movie(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// All titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }

    pub fn similarity_row(&self, index: usize) -> Option<&[f64]> {
        self.similarity.get(index).map(|row| row.as_slice())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

fn open_artifact(path: &Path) -> AppResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| AppError::Artifact(format!("cannot open {}: {}", path.display(), e)))
}
