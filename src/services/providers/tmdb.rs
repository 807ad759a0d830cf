/// TMDB poster provider
///
/// API Flow:
/// 1. Details: /movie/{movie_id}?api_key=...&language=en-US → JSON with `poster_path`
/// 2. Image URL: `{image_base_url}{poster_path}`
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieId, TmdbMovieDetails},
    services::providers::PosterProvider,
};
use reqwest::Client as HttpClient;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbPosterProvider {
    pub fn new(api_key: String, api_url: String, image_base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.poster_base_url.clone(),
        )
    }

    /// Build the full image URL from a details response, if it carries a poster
    pub fn poster_url(&self, details: &TmdbMovieDetails) -> Option<String> {
        let path = details.poster_path.as_deref()?.trim();
        if path.is_empty() {
            return None;
        }

        if path.starts_with('/') {
            Some(format!("{}{}", self.image_base_url, path))
        } else {
            Some(format!("{}/{}", self.image_base_url, path))
        }
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn fetch_poster(&self, movie_id: MovieId) -> AppResult<String> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(movie_id, response = %response_text, "Raw TMDB API response");

        let details: TmdbMovieDetails = serde_json::from_str(&response_text).map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        let poster_url = self.poster_url(&details).ok_or_else(|| {
            AppError::ExternalApi(format!("No poster_path for movie {}", movie_id))
        })?;

        tracing::debug!(movie_id, poster_url = %poster_url, provider = "tmdb", "Poster resolved");

        Ok(poster_url)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TmdbPosterProvider {
        TmdbPosterProvider::new(
            "test_key".to_string(),
            "http://test.local/3/".to_string(),
            "https://image.tmdb.org/t/p/w500".to_string(),
        )
    }

    fn details(poster_path: Option<&str>) -> TmdbMovieDetails {
        TmdbMovieDetails {
            poster_path: poster_path.map(str::to_string),
        }
    }

    #[test]
    fn test_poster_url_concatenates_base_and_path() {
        let provider = create_test_provider();
        assert_eq!(
            provider.poster_url(&details(Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"))),
            Some("https://image.tmdb.org/t/p/w500/kyeqWdyUXW608qlYkRqosgbbJyK.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_adds_missing_slash() {
        let provider = create_test_provider();
        assert_eq!(
            provider.poster_url(&details(Some("abc.jpg"))),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_missing_path() {
        let provider = create_test_provider();
        assert_eq!(provider.poster_url(&details(None)), None);
        assert_eq!(provider.poster_url(&details(Some("  "))), None);
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let provider = create_test_provider();
        assert_eq!(provider.api_url, "http://test.local/3");
        assert_eq!(provider.name(), "tmdb");
    }
}
