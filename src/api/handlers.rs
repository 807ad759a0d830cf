use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
};

use super::{page, AppState};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub titles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub selected: String,
    /// Recommended titles in rank order
    pub titles: Vec<String>,
    /// Poster URLs aligned with `titles`
    pub posters: Vec<String>,
    pub movies: Vec<Recommendation>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Single-page UI
pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

/// All catalog titles in catalog order, for the selection dropdown
pub async fn list_movies(State(state): State<AppState>) -> Json<MoviesResponse> {
    let titles = state.catalog().titles().map(str::to_string).collect();
    Json(MoviesResponse { titles })
}

/// Similar movies for the selected title
pub async fn recommend(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    let title = query
        .title
        .ok_or_else(|| AppError::InvalidInput("Missing `title` query parameter".to_string()))?;

    tracing::info!(title = %title, "Processing recommendation request");

    let recommendations = state.recommender.recommend(&title).await?;

    let titles = recommendations
        .movies
        .iter()
        .map(|movie| movie.title.clone())
        .collect();
    let posters = recommendations
        .movies
        .iter()
        .map(|movie| movie.poster_url.clone())
        .collect();

    Ok(Json(RecommendationResponse {
        selected: recommendations.selected,
        titles,
        posters,
        movies: recommendations.movies,
    }))
}
