use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{GenreMoviesResponse, MovieBrief},
    services::{
        catalog::CatalogClient,
        collector::{CandidateCollector, Facet, FacetFilter, LISTING_PAGES},
        ranker::rank,
        terms,
    },
};

/// Lists the best-rated movies found for a genre
///
/// Collects up to twice `limit` genre matches from the expanded search terms,
/// then keeps the `limit` best-rated. Collection stops at the first `2 * limit`
/// matches, so titles only reachable through later terms or pages can be
/// missed even when they are rated higher.
#[instrument(skip(catalog))]
pub async fn movies_by_genre(
    catalog: Arc<dyn CatalogClient>,
    genre: &str,
    limit: usize,
) -> AppResult<GenreMoviesResponse> {
    let genre = genre.trim();
    if genre.is_empty() {
        return Err(AppError::InvalidInput(
            "Genre query parameter is required".to_string(),
        ));
    }

    let search_terms = terms::expand(genre);
    let collector = CandidateCollector::new(catalog, LISTING_PAGES);
    let candidates = collector
        .collect(
            &search_terms,
            &FacetFilter::new(Facet::Genre, genre),
            None,
            limit.saturating_mul(2),
        )
        .await;

    let movies: Vec<MovieBrief> = rank(candidates)
        .into_iter()
        .take(limit)
        .map(MovieBrief::from)
        .collect();

    tracing::info!(
        genre = %genre,
        terms = ?search_terms,
        count = movies.len(),
        "Genre listing generated"
    );

    Ok(GenreMoviesResponse::new(genre.to_string(), movies))
}
