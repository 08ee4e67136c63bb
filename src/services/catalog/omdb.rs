/// OMDb catalog client
///
/// OMDb exposes a single endpoint whose query parameters select the operation:
/// 1. Title search: `?s=<term>&type=movie&page=<n>` → ten hits per page
/// 2. Details: `?t=<title>` or `?i=<imdb id>` → full record
/// 3. Episodes: `?t=<series>&Season=<n>&Episode=<n>`
///
/// A lookup that matches nothing still returns 200, with `"Response": "False"`.
use crate::{
    models::{
        omdb::is_false_response, ApiSearchResponse, ApiTitleDetails, CatalogRecord, SearchHit,
        TitleLookup,
    },
    services::catalog::{CatalogClient, CatalogError, CatalogResult},
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct OmdbClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbClient {
    /// Creates a client whose every request is bounded by `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> CatalogResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    fn lookup_params(lookup: &TitleLookup) -> Vec<(&'static str, String)> {
        match lookup {
            TitleLookup::Title(title) => vec![("t", title.clone()), ("plot", "full".to_string())],
            TitleLookup::Id(id) => vec![("i", id.clone()), ("plot", "full".to_string())],
            TitleLookup::Episode {
                series_title,
                season,
                episode,
            } => vec![
                ("t", series_title.clone()),
                ("Season", season.to_string()),
                ("Episode", episode.to_string()),
            ],
        }
    }

    /// Issues one GET and decodes the body, without interpreting `Response`
    async fn get<T: DeserializeOwned>(&self, params: &[(&'static str, String)]) -> CatalogResult<T> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        decode_body(status, &body)
    }
}

/// Classifies an OMDb reply by status first, then by whether the body parses
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> CatalogResult<T> {
    if !status.is_success() {
        return Err(CatalogError::Upstream(format!(
            "OMDb API returned status {}: {}",
            status, body
        )));
    }

    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, response = %body, "Failed to deserialize OMDb response");
        CatalogError::Upstream(format!("Failed to parse OMDb response: {}", e))
    })
}

fn details_to_record(details: ApiTitleDetails) -> CatalogResult<CatalogRecord> {
    if is_false_response(&details.response) {
        return Err(CatalogError::NotFound(
            details.error.unwrap_or_else(|| "Title not found".to_string()),
        ));
    }
    Ok(CatalogRecord::from(details))
}

fn search_to_hits(response: ApiSearchResponse) -> CatalogResult<Vec<SearchHit>> {
    if is_false_response(&response.response) {
        return Err(CatalogError::NotFound(
            response.error.unwrap_or_else(|| "No search results".to_string()),
        ));
    }
    Ok(response.search.into_iter().map(SearchHit::from).collect())
}

#[async_trait::async_trait]
impl CatalogClient for OmdbClient {
    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<SearchHit>> {
        let params = [
            ("s", term.to_string()),
            ("type", "movie".to_string()),
            ("page", page.to_string()),
        ];

        let response: ApiSearchResponse = self.get(&params).await?;
        let hits = search_to_hits(response)?;

        tracing::debug!(
            term = %term,
            page,
            results = hits.len(),
            provider = "omdb",
            "Title search completed"
        );

        Ok(hits)
    }

    async fn fetch_details(&self, lookup: &TitleLookup) -> CatalogResult<CatalogRecord> {
        let details: ApiTitleDetails = self.get(&Self::lookup_params(lookup)).await?;
        let record = details_to_record(details)?;

        tracing::debug!(
            lookup = %lookup,
            imdb_id = %record.id,
            provider = "omdb",
            "Title details fetched"
        );

        Ok(record)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
