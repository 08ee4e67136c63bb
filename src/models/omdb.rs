// ============================================================================
// OMDb API Types
// ============================================================================

use serde::Deserialize;

use super::{CatalogRecord, SearchHit, SourceRating};

/// Value OMDb uses for every missing field
const NOT_AVAILABLE: &str = "N/A";

/// API response from `?t=` / `?i=` lookups
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiTitleDetails {
    pub title: String,
    pub year: String,
    pub genre: String,
    pub director: String,
    pub actors: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<ApiRating>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub season: Option<String>,
    pub episode: Option<String>,
    /// "True" or "False"
    pub response: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiRating {
    pub source: String,
    pub value: String,
}

/// API response from `?s=` searches
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ApiSearchResponse {
    pub search: Vec<ApiSearchHit>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    pub response: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiSearchHit {
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
}

/// OMDb signals "no such title" with a 200 and `"Response": "False"`
pub fn is_false_response(response: &str) -> bool {
    response.eq_ignore_ascii_case("false")
}

fn present(value: String) -> Option<String> {
    if value.is_empty() || value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

impl From<ApiTitleDetails> for CatalogRecord {
    fn from(details: ApiTitleDetails) -> Self {
        Self {
            id: details.imdb_id,
            title: details.title,
            year: details.year,
            genre: details.genre,
            director: details.director,
            actors: details.actors,
            plot: details.plot,
            country: details.country,
            awards: details.awards,
            ratings: details
                .ratings
                .into_iter()
                .map(|r| SourceRating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
            imdb_rating: present(details.imdb_rating),
            season: details.season.and_then(present),
            episode: details.episode.and_then(present),
        }
    }
}

impl From<ApiSearchHit> for SearchHit {
    fn from(hit: ApiSearchHit) -> Self {
        Self {
            id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
        }
    }
}
