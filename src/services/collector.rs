use std::collections::HashSet;
use std::fmt::Display;
use std::sync::Arc;

use tokio_util::task::AbortOnDropHandle;

use crate::{
    models::{Candidate, CatalogRecord, SearchHit, TitleLookup},
    services::catalog::{CatalogClient, CatalogResult},
};

/// Search pages walked per term when building a recommendation facet
pub const FACET_PAGES: u32 = 2;

/// Search pages walked per term when listing a genre
pub const LISTING_PAGES: u32 = 3;

/// Recommendation dimension a candidate is matched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Genre,
    Director,
    Actor,
}

impl Facet {
    fn field<'a>(&self, record: &'a CatalogRecord) -> &'a str {
        match self {
            Facet::Genre => &record.genre,
            Facet::Director => &record.director,
            Facet::Actor => &record.actors,
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Facet::Genre => "genre",
            Facet::Director => "director",
            Facet::Actor => "actor",
        };
        write!(f, "{}", name)
    }
}

/// Case-insensitive containment test of one value against a record's facet field
#[derive(Debug, Clone)]
pub struct FacetFilter {
    facet: Facet,
    needle: String,
}

impl FacetFilter {
    pub fn new(facet: Facet, value: &str) -> Self {
        Self {
            facet,
            needle: value.trim().to_lowercase(),
        }
    }

    pub fn matches(&self, record: &CatalogRecord) -> bool {
        self.facet
            .field(record)
            .to_lowercase()
            .contains(&self.needle)
    }
}

/// Capped, deduplicated buffer of candidates in discovery order
///
/// One pool may be filled by several collector calls; ids accepted by any of
/// them are never accepted again.
#[derive(Debug)]
pub struct CandidatePool {
    limit: usize,
    accepted: HashSet<String>,
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            accepted: HashSet::new(),
            candidates: Vec::new(),
        }
    }

    /// Keeps `id` out of the pool without taking a slot
    pub fn exclude_id(&mut self, id: &str) {
        self.accepted.insert(id.to_string());
    }

    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.accepted.contains(id)
    }

    fn offer(&mut self, candidate: Candidate) -> bool {
        if self.is_full() || !self.accepted.insert(candidate.id().to_string()) {
            return false;
        }
        self.candidates.push(candidate);
        true
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        self.candidates
    }
}

fn is_excluded(title: &str, exclude_title: Option<&str>) -> bool {
    exclude_title
        .is_some_and(|excluded| title.trim().to_lowercase() == excluded.trim().to_lowercase())
}

// Dropping the handle aborts the fetch, so abandoning a collection cancels it
type PendingFetch = (SearchHit, AbortOnDropHandle<CatalogResult<CatalogRecord>>);

/// Turns title searches into facet-matching, rated candidates
///
/// ## Algorithm
/// For each term in order, for pages 1..=max_pages:
/// 1. Search the catalog; a failed or empty page is skipped
/// 2. Fetch details of every new hit concurrently (one task per hit)
/// 3. Consume the fetches in hit order, dropping failures, the excluded
///    title, non-matching records and records without a positive rating
/// 4. Stop as soon as the pool is full, aborting fetches still in flight
///
/// Fetch tasks are aborted whenever the collection future is dropped, e.g.
/// when the request deadline fires.
///
/// Collection is greedy: the first `limit` qualifying titles win, not the
/// best-rated ones across every term.
#[derive(Clone)]
pub struct CandidateCollector {
    catalog: Arc<dyn CatalogClient>,
    max_pages: u32,
}

impl CandidateCollector {
    pub fn new(catalog: Arc<dyn CatalogClient>, max_pages: u32) -> Self {
        Self { catalog, max_pages }
    }

    /// Collects at most `limit` candidates from a fresh pool
    pub async fn collect(
        &self,
        terms: &[String],
        filter: &FacetFilter,
        exclude_title: Option<&str>,
        limit: usize,
    ) -> Vec<Candidate> {
        let mut pool = CandidatePool::new(limit);
        self.collect_into(&mut pool, terms, filter, exclude_title)
            .await;
        pool.into_candidates()
    }

    /// Adds candidates to `pool` until it is full or the terms are exhausted
    ///
    /// Never fails: per-page and per-title errors are logged and skipped.
    pub async fn collect_into(
        &self,
        pool: &mut CandidatePool,
        terms: &[String],
        filter: &FacetFilter,
        exclude_title: Option<&str>,
    ) {
        // Ids fetched under this filter; a rejected title would be rejected again
        let mut visited: HashSet<String> = HashSet::new();
        let before = pool.len();

        'terms: for term in terms {
            for page in 1..=self.max_pages {
                if pool.is_full() {
                    break 'terms;
                }

                let hits = match self.catalog.search(term, page).await {
                    Ok(hits) => hits,
                    Err(e) if e.is_not_found() => {
                        tracing::debug!(term = %term, page, reason = %e, "No search results on page");
                        continue;
                    }
                    Err(e) => {
                        tracing::warn!(term = %term, page, error = %e, "Search page failed, skipping");
                        continue;
                    }
                };

                let pending: Vec<PendingFetch> = hits
                    .into_iter()
                    .filter(|hit| {
                        !hit.id.is_empty()
                            && !is_excluded(&hit.title, exclude_title)
                            && !pool.contains(&hit.id)
                            && visited.insert(hit.id.clone())
                    })
                    .map(|hit| {
                        let catalog = Arc::clone(&self.catalog);
                        let lookup = TitleLookup::id(hit.id.clone());
                        let task = AbortOnDropHandle::new(tokio::spawn(async move {
                            catalog.fetch_details(&lookup).await
                        }));
                        (hit, task)
                    })
                    .collect();

                Self::absorb(pool, pending, filter, exclude_title).await;
            }
        }

        tracing::debug!(
            facet = %filter.facet,
            value = %filter.needle,
            terms = terms.len(),
            added = pool.len() - before,
            total = pool.len(),
            provider = self.catalog.name(),
            "Candidate collection finished"
        );
    }

    async fn absorb(
        pool: &mut CandidatePool,
        pending: Vec<PendingFetch>,
        filter: &FacetFilter,
        exclude_title: Option<&str>,
    ) {
        for (hit, task) in pending {
            if pool.is_full() {
                // Remaining handles are dropped, and so aborted, with the iterator
                break;
            }

            let record = match task.await {
                Ok(Ok(record)) => record,
                Ok(Err(e)) if e.is_not_found() => {
                    tracing::debug!(imdb_id = %hit.id, title = %hit.title, "Search hit has no details");
                    continue;
                }
                Ok(Err(e)) => {
                    tracing::warn!(imdb_id = %hit.id, error = %e, "Detail fetch failed, skipping");
                    continue;
                }
                Err(e) => {
                    tracing::error!(imdb_id = %hit.id, error = %e, "Detail fetch task failed");
                    continue;
                }
            };

            if is_excluded(&record.title, exclude_title) || !filter.matches(&record) {
                continue;
            }

            match Candidate::from_record(record) {
                Some(candidate) => {
                    pool.offer(candidate);
                }
                None => {
                    tracing::debug!(imdb_id = %hit.id, "Skipping title without a usable rating");
                }
            }
        }
    }
}
