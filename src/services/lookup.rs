use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{EpisodeDetailsResponse, MovieDetailsResponse, TitleLookup},
    services::catalog::{CatalogClient, CatalogError},
};

/// Fetches the details of a single movie by title
#[instrument(skip(catalog))]
pub async fn movie_details(
    catalog: &dyn CatalogClient,
    title: &str,
) -> AppResult<MovieDetailsResponse> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::InvalidInput(
            "Title query parameter is required".to_string(),
        ));
    }

    let record = catalog
        .fetch_details(&TitleLookup::title(title))
        .await
        .map_err(|e| match e {
            CatalogError::NotFound(_) => AppError::NotFound(format!("Movie not found: {}", title)),
            other => AppError::from(other),
        })?;

    Ok(MovieDetailsResponse::from(record))
}

/// Fetches the details of one episode of a series
///
/// Season and episode arrive as raw query strings and are validated before
/// the catalog is contacted.
#[instrument(skip(catalog))]
pub async fn episode_details(
    catalog: &dyn CatalogClient,
    series_title: &str,
    season: &str,
    episode: &str,
) -> AppResult<EpisodeDetailsResponse> {
    let series_title = series_title.trim();
    if series_title.is_empty() || season.trim().is_empty() || episode.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "series_title, season, and episode_number query parameters are required".to_string(),
        ));
    }

    let season: u32 = season
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidInput("Season must be a valid integer".to_string()))?;
    let episode: u32 = episode.trim().parse().map_err(|_| {
        AppError::InvalidInput("Episode number must be a valid integer".to_string())
    })?;

    let lookup = TitleLookup::Episode {
        series_title: series_title.to_string(),
        season,
        episode,
    };

    let record = catalog.fetch_details(&lookup).await.map_err(|e| match e {
        CatalogError::NotFound(_) => {
            AppError::NotFound("Episode not found for the given parameters".to_string())
        }
        other => AppError::from(other),
    })?;

    Ok(EpisodeDetailsResponse::new(series_title.to_string(), record))
}
