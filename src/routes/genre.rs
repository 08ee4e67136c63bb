use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::GenreMoviesResponse,
    routes::AppState,
    services::genre_listing,
};

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    genre: Option<String>,
}

/// Handler for GET /api/movies/genre?genre=
pub async fn movies_by_genre(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<GenreQuery>,
) -> AppResult<Json<GenreMoviesResponse>> {
    tracing::info!(request_id = %request_id, genre = ?params.genre, "Processing genre listing request");

    let genre = params.genre.unwrap_or_default();
    let response = state
        .within_deadline(genre_listing::movies_by_genre(
            Arc::clone(&state.catalog),
            &genre,
            state.genre_listing_limit,
        ))
        .await?;

    tracing::info!(request_id = %request_id, count = response.count, "Genre listing completed");

    Ok(Json(response))
}
