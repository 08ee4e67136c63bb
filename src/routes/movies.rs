use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{EpisodeDetailsResponse, MovieDetailsResponse},
    routes::AppState,
    services::lookup,
};

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    series_title: Option<String>,
    season: Option<String>,
    episode_number: Option<String>,
}

/// Handler for GET /api/movie?title=
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<MovieQuery>,
) -> AppResult<Json<MovieDetailsResponse>> {
    tracing::info!(request_id = %request_id, title = ?params.title, "Processing movie details request");

    let title = params.title.unwrap_or_default();
    let details = state
        .within_deadline(lookup::movie_details(state.catalog.as_ref(), &title))
        .await?;

    Ok(Json(details))
}

/// Handler for GET /api/episode?series_title=&season=&episode_number=
pub async fn episode_details(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<EpisodeQuery>,
) -> AppResult<Json<EpisodeDetailsResponse>> {
    tracing::info!(
        request_id = %request_id,
        series_title = ?params.series_title,
        season = ?params.season,
        episode = ?params.episode_number,
        "Processing episode details request"
    );

    let series_title = params.series_title.unwrap_or_default();
    let season = params.season.unwrap_or_default();
    let episode = params.episode_number.unwrap_or_default();
    let details = state
        .within_deadline(lookup::episode_details(
            state.catalog.as_ref(),
            &series_title,
            &season,
            &episode,
        ))
        .await?;

    Ok(Json(details))
}
