/// Upstream catalog abstraction
///
/// The discovery engine only ever talks to the catalog through [`CatalogClient`]:
/// a paginated title search and a single-title detail lookup. OMDb is the
/// production implementation; tests substitute a mock.
use crate::models::{CatalogRecord, SearchHit, TitleLookup};

pub mod omdb;

pub use omdb::OmdbClient;

/// Outcome of a catalog call that did not produce data
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog answered, but has no entry for the request
    #[error("{0}")]
    NotFound(String),

    /// The request never produced a usable HTTP response
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with an error status or an unreadable body
    #[error("Catalog API error: {0}")]
    Upstream(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Trait for title catalogs
///
/// Implementations perform no retries: a failed call is reported immediately
/// and callers decide whether it is fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page (1-based) of title search results
    ///
    /// A term with no matches, or a page past the last one, is `NotFound`.
    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<SearchHit>>;

    /// Fetch the full record for a title, an id, or a series episode
    async fn fetch_details(&self, lookup: &TitleLookup) -> CatalogResult<CatalogRecord>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
