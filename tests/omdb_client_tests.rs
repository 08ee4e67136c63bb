use std::collections::HashMap;
use std::time::Duration;

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use movie_discovery_api::{
    models::TitleLookup,
    services::catalog::{CatalogClient, CatalogError, OmdbClient},
};

const API_KEY: &str = "test-key";

/// Minimal stand-in for the OMDb endpoint
async fn omdb_stub(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    if params.get("apikey").map(String::as_str) != Some(API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"Response": "False", "Error": "Invalid API key!"})),
        )
            .into_response();
    }

    if let Some(term) = params.get("s") {
        let page = params.get("page").map(String::as_str).unwrap_or("1");
        if term == "matrix" && page == "1" {
            return Json(json!({
                "Search": [
                    {"Title": "The Matrix", "Year": "1999", "imdbID": "tt0133093", "Type": "movie"},
                    {"Title": "The Matrix Reloaded", "Year": "2003", "imdbID": "tt0234215", "Type": "movie"}
                ],
                "totalResults": "2",
                "Response": "True"
            }))
            .into_response();
        }
        return Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response();
    }

    if params.get("t").map(String::as_str) == Some("slow") {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    if params.get("t").map(String::as_str) == Some("garbage") {
        return "<html>Service Unavailable</html>".into_response();
    }

    if let (Some(series), Some(season), Some(episode)) =
        (params.get("t"), params.get("Season"), params.get("Episode"))
    {
        if series == "Breaking Bad" && season == "1" && episode == "1" {
            return Json(json!({
                "Title": "Pilot",
                "Year": "2008",
                "Season": "1",
                "Episode": "1",
                "imdbRating": "9.0",
                "imdbID": "tt0959621",
                "Response": "True"
            }))
            .into_response();
        }
        return Json(json!({"Response": "False", "Error": "Series or episode not found!"}))
            .into_response();
    }

    let is_matrix = params.get("t").map(String::as_str) == Some("The Matrix")
        || params.get("i").map(String::as_str) == Some("tt0133093");
    if is_matrix {
        return Json(json!({
            "Title": "The Matrix",
            "Year": "1999",
            "Genre": "Action, Sci-Fi",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
            "Plot": "A computer hacker learns the truth about his reality.",
            "Country": "United States, Australia",
            "Awards": "Won 4 Oscars",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.7/10"}],
            "imdbRating": "8.7",
            "imdbID": "tt0133093",
            "Response": "True"
        }))
        .into_response();
    }

    Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response()
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/", get(omdb_stub));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn client_with_key(api_key: &str) -> OmdbClient {
    let url = spawn_stub().await;
    OmdbClient::new(api_key.to_string(), url, Duration::from_millis(500)).unwrap()
}

#[tokio::test]
async fn test_fetch_by_title() {
    let client = client_with_key(API_KEY).await;

    let record = client
        .fetch_details(&TitleLookup::title("The Matrix"))
        .await
        .unwrap();

    assert_eq!(record.id, "tt0133093");
    assert_eq!(record.genres(), vec!["Action", "Sci-Fi"]);
    assert_eq!(record.rating(), Some(8.7));
    assert_eq!(record.ratings[0].value, "8.7/10");
}

#[tokio::test]
async fn test_fetch_by_id() {
    let client = client_with_key(API_KEY).await;

    let record = client
        .fetch_details(&TitleLookup::id("tt0133093"))
        .await
        .unwrap();

    assert_eq!(record.title, "The Matrix");
}

#[tokio::test]
async fn test_fetch_episode() {
    let client = client_with_key(API_KEY).await;

    let record = client
        .fetch_details(&TitleLookup::Episode {
            series_title: "Breaking Bad".to_string(),
            season: 1,
            episode: 1,
        })
        .await
        .unwrap();

    assert_eq!(record.title, "Pilot");
    assert_eq!(record.season.as_deref(), Some("1"));
    assert_eq!(record.episode.as_deref(), Some("1"));
}

#[tokio::test]
async fn test_unknown_title_is_not_found() {
    let client = client_with_key(API_KEY).await;

    let err = client
        .fetch_details(&TitleLookup::title("Nonexistent Film"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NotFound(ref msg) if msg == "Movie not found!"));
}

#[tokio::test]
async fn test_rejected_api_key_is_upstream_error() {
    let client = client_with_key("wrong-key").await;

    let err = client
        .fetch_details(&TitleLookup::title("The Matrix"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Upstream(_)));
}

#[tokio::test]
async fn test_malformed_body_is_upstream_error() {
    let client = client_with_key(API_KEY).await;

    let err = client
        .fetch_details(&TitleLookup::title("garbage"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Upstream(_)));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let client = client_with_key(API_KEY).await;

    let err = client
        .fetch_details(&TitleLookup::title("slow"))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Transport(ref e) if e.is_timeout()));
}

#[tokio::test]
async fn test_search_pages() {
    let client = client_with_key(API_KEY).await;

    let hits = client.search("matrix", 1).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, "tt0133093");
    assert_eq!(hits[1].title, "The Matrix Reloaded");

    let err = client.search("matrix", 2).await.unwrap_err();
    assert!(err.is_not_found());
}
