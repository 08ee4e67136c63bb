use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::{CatalogClient, Recommender},
};

/// Shared application state
///
/// Holds only the catalog client and settings; every request builds its own
/// dedup sets and result buffers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogClient>,
    pub recommender: Recommender,
    pub genre_listing_limit: usize,
    pub request_deadline: Duration,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogClient>, config: &Config) -> Self {
        Self::with_settings(
            catalog,
            config.genre_listing_limit,
            config.recommendation_cap,
            config.request_deadline(),
        )
    }

    pub fn with_settings(
        catalog: Arc<dyn CatalogClient>,
        genre_listing_limit: usize,
        recommendation_cap: usize,
        request_deadline: Duration,
    ) -> Self {
        Self {
            recommender: Recommender::new(Arc::clone(&catalog), recommendation_cap),
            catalog,
            genre_listing_limit,
            request_deadline,
        }
    }

    /// Runs `operation`, failing it once the request deadline has passed
    pub async fn within_deadline<T, F>(&self, operation: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        tokio::time::timeout(self.request_deadline, operation)
            .await
            .map_err(|_| AppError::DeadlineExceeded(self.request_deadline.as_secs()))?
    }
}
