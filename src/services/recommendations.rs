use std::sync::Arc;

use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogRecord, MovieBrief, RecommendationSet, TitleLookup},
    services::{
        catalog::{CatalogClient, CatalogError},
        collector::{CandidateCollector, CandidatePool, Facet, FacetFilter, FACET_PAGES},
        ranker::rank,
        terms,
    },
};

/// Only the top-billed actors of the seed are searched
pub const MAX_SEED_ACTORS: usize = 3;

/// Generates "more like this" recommendations from a favorite movie
///
/// The seed's genres, directors and leading actors each drive an independent
/// facet. A facet collects into one capped pool across all of its values, so
/// titles never repeat within a facet but may appear in several facets. The
/// seed itself is excluded everywhere.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<dyn CatalogClient>,
    collector: CandidateCollector,
    cap: usize,
}

impl Recommender {
    pub fn new(catalog: Arc<dyn CatalogClient>, cap: usize) -> Self {
        Self {
            collector: CandidateCollector::new(Arc::clone(&catalog), FACET_PAGES),
            catalog,
            cap,
        }
    }

    /// Builds the three ranked facet lists for `favorite_movie`
    ///
    /// Failing to resolve the favorite itself is the only fatal error; an
    /// empty or failing facet just yields an empty list.
    #[instrument(skip(self))]
    pub async fn recommend(&self, favorite_movie: &str) -> AppResult<RecommendationSet> {
        let favorite_movie = favorite_movie.trim();
        if favorite_movie.is_empty() {
            return Err(AppError::InvalidInput(
                "favorite_movie query parameter is required".to_string(),
            ));
        }

        let seed = self
            .catalog
            .fetch_details(&TitleLookup::title(favorite_movie))
            .await
            .map_err(|e| match e {
                CatalogError::NotFound(_) => {
                    AppError::NotFound(format!("Favorite movie not found: {}", favorite_movie))
                }
                other => AppError::from(other),
            })?;

        tracing::info!(
            seed = %seed.title,
            imdb_id = %seed.id,
            genre = %seed.genre,
            director = %seed.director,
            "Seed title resolved"
        );

        let genres = seed.genres();
        let directors = seed.directors();
        let actors: Vec<&str> = seed
            .actor_names()
            .into_iter()
            .take(MAX_SEED_ACTORS)
            .collect();

        let (genre_based, director_based, actor_based) = tokio::join!(
            self.facet(&seed, Facet::Genre, &genres),
            self.facet(&seed, Facet::Director, &directors),
            self.facet(&seed, Facet::Actor, &actors),
        );

        tracing::info!(
            seed = %seed.title,
            genre_based = genre_based.len(),
            director_based = director_based.len(),
            actor_based = actor_based.len(),
            "Recommendations generated"
        );

        Ok(RecommendationSet {
            seed_title: seed.title,
            genre_based,
            director_based,
            actor_based,
        })
    }

    async fn facet(&self, seed: &CatalogRecord, facet: Facet, values: &[&str]) -> Vec<MovieBrief> {
        let mut pool = CandidatePool::new(self.cap);
        pool.exclude_id(&seed.id);

        for value in values {
            if pool.is_full() {
                break;
            }

            let search_terms = match facet {
                Facet::Genre => terms::expand(value),
                Facet::Director | Facet::Actor => vec![value.to_string()],
            };

            self.collector
                .collect_into(
                    &mut pool,
                    &search_terms,
                    &FacetFilter::new(facet, value),
                    Some(&seed.title),
                )
                .await;
        }

        rank(pool.into_candidates())
            .into_iter()
            .map(MovieBrief::from)
            .collect()
    }
}
