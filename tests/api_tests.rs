use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;

use movie_recommender::{
    api::{create_router, AppState},
    catalog::Catalog,
    error::{AppError, AppResult},
    models::MovieId,
    services::PosterProvider,
};

const PLACEHOLDER: &str = "https://placehold.co/500x750?text=No+Poster";

/// Serves a poster for every movie except the ids listed in `missing`
struct StubPosterProvider {
    missing: Vec<MovieId>,
}

#[async_trait::async_trait]
impl PosterProvider for StubPosterProvider {
    async fn fetch_poster(&self, movie_id: MovieId) -> AppResult<String> {
        if self.missing.contains(&movie_id) {
            return Err(AppError::ExternalApi(format!(
                "No poster_path for movie {}",
                movie_id
            )));
        }
        Ok(format!("https://image.tmdb.org/t/p/w500/{}.jpg", movie_id))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn demo_catalog() -> Catalog {
    let root = env!("CARGO_MANIFEST_DIR");
    Catalog::load(
        format!("{}/data/movie_list.json", root),
        format!("{}/data/similarity.json", root),
    )
    .unwrap()
}

fn create_test_server_with(missing: Vec<MovieId>) -> TestServer {
    let state = AppState::new(
        Arc::new(demo_catalog()),
        Arc::new(StubPosterProvider { missing }),
        PLACEHOLDER.to_string(),
        5,
    );
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn create_test_server() -> TestServer {
    create_test_server_with(vec![])
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_index_page_served() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("Show Recommendation"));
}

#[tokio::test]
async fn test_list_movies_in_catalog_order() {
    let server = create_test_server();
    let response = server.get("/api/v1/movies").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let titles = body["titles"].as_array().unwrap();
    assert_eq!(titles.len(), 8);
    assert_eq!(titles[0], "Avatar");
    assert_eq!(titles[7], "Avengers: Age of Ultron");
}

#[tokio::test]
async fn test_recommend_returns_five_ranked_movies() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Avatar")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["selected"], "Avatar");
    assert_eq!(
        body["titles"],
        serde_json::json!([
            "John Carter",
            "Avengers: Age of Ultron",
            "Pirates of the Caribbean: At World's End",
            "Spider-Man 3",
            "The Dark Knight Rises"
        ])
    );
    assert_eq!(body["posters"][0], "https://image.tmdb.org/t/p/w500/49529.jpg");
    assert_eq!(body["movies"][0]["movie_id"], 49529);
    assert_eq!(body["movies"][0]["score"], 0.31);
}

#[tokio::test]
async fn test_every_title_gets_five_recommendations_without_itself() {
    let server = create_test_server();
    let movies: serde_json::Value = server.get("/api/v1/movies").await.json();

    for title in movies["titles"].as_array().unwrap() {
        let title = title.as_str().unwrap();
        let response = server
            .get("/api/v1/recommendations")
            .add_query_param("title", title)
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        let recommended = body["titles"].as_array().unwrap();
        assert_eq!(recommended.len(), 5);
        assert!(recommended.iter().all(|t| t != title));

        let scores: Vec<f64> = body["movies"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["score"].as_f64().unwrap())
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[tokio::test]
async fn test_recommend_is_idempotent() {
    let server = create_test_server();
    let first: serde_json::Value = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Spectre")
        .await
        .json();
    let second: serde_json::Value = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Spectre")
        .await
        .json();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_recommend_unknown_title_is_not_found() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Plan 9 from Outer Space")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Movie not found: Plan 9 from Outer Space");
}

#[tokio::test]
async fn test_recommend_empty_title_is_bad_request() {
    let server = create_test_server();
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_poster_degrades_to_placeholder() {
    // John Carter has no artwork
    let server = create_test_server_with(vec![49529]);
    let response = server
        .get("/api/v1/recommendations")
        .add_query_param("title", "Avatar")
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["titles"][0], "John Carter");
    assert_eq!(body["posters"][0], PLACEHOLDER);
    assert_eq!(body["posters"][1], "https://image.tmdb.org/t/p/w500/99861.jpg");
}

#[tokio::test]
async fn test_recommend_missing_title_is_json_bad_request() {
    let server = create_test_server();
    let response = server.get("/api/v1/recommendations").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid input: Missing `title` query parameter");
}
