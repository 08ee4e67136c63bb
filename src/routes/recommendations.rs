use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult, middleware::request_id::RequestId, models::RecommendationsResponse,
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    favorite_movie: Option<String>,
}

/// Handler for GET /api/recommendations?favorite_movie=
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    tracing::info!(
        request_id = %request_id,
        favorite_movie = ?params.favorite_movie,
        "Processing recommendation request"
    );

    let favorite_movie = params.favorite_movie.unwrap_or_default();
    let set = state
        .within_deadline(state.recommender.recommend(&favorite_movie))
        .await?;

    tracing::info!(request_id = %request_id, "Recommendations completed");

    Ok(Json(RecommendationsResponse::from(set)))
}
