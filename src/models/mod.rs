use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod omdb;
pub mod responses;

pub use omdb::{ApiSearchHit, ApiSearchResponse, ApiTitleDetails};
pub use responses::{
    EpisodeDetailsResponse, ErrorResponse, GenreMoviesResponse, MovieDetailsResponse,
    RecommendationsByCategory, RecommendationsResponse,
};

/// What a detail fetch asks the catalog for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleLookup {
    /// Lookup by exact title (e.g., "The Matrix")
    Title(String),
    /// Lookup by catalog identifier (e.g., "tt0133093")
    Id(String),
    /// A single episode of a series
    Episode {
        series_title: String,
        season: u32,
        episode: u32,
    },
}

impl TitleLookup {
    pub fn title(title: impl Into<String>) -> Self {
        TitleLookup::Title(title.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        TitleLookup::Id(id.into())
    }
}

impl Display for TitleLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TitleLookup::Title(title) => write!(f, "{}", title),
            TitleLookup::Id(id) => write!(f, "{}", id),
            TitleLookup::Episode {
                series_title,
                season,
                episode,
            } => write!(f, "{} S{:02}E{:02}", series_title, season, episode),
        }
    }
}

/// Rating reported by one source (IMDb, Rotten Tomatoes, Metacritic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRating {
    pub source: String,
    pub value: String,
}

/// Full catalog entry for one title, as fetched from the upstream API
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    /// Comma-separated genre names, e.g. "Action, Sci-Fi"
    pub genre: String,
    pub director: String,
    /// Top-billed cast, comma-separated
    pub actors: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub ratings: Vec<SourceRating>,
    /// Raw IMDb rating; `None` when the catalog reports "N/A"
    pub imdb_rating: Option<String>,
    pub season: Option<String>,
    pub episode: Option<String>,
}

impl CatalogRecord {
    /// Parses the IMDb rating, accepting only finite values above zero
    pub fn rating(&self) -> Option<f64> {
        self.imdb_rating
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|rating| rating.is_finite() && *rating > 0.0)
    }

    pub fn genres(&self) -> Vec<&str> {
        split_names(&self.genre)
    }

    pub fn directors(&self) -> Vec<&str> {
        split_names(&self.director)
    }

    pub fn actor_names(&self) -> Vec<&str> {
        split_names(&self.actors)
    }
}

/// Splits a comma-separated catalog field into its names, dropping blanks and "N/A"
pub fn split_names(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case("N/A"))
        .collect()
}

/// Lightweight reference returned by one page of a title search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub year: String,
}

/// A record that matched a facet and carries a usable rating
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub record: CatalogRecord,
    pub rating: f64,
}

impl Candidate {
    /// Returns `None` when the record has no positive, parseable rating
    pub fn from_record(record: CatalogRecord) -> Option<Self> {
        let rating = record.rating()?;
        Some(Self { record, rating })
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Public projection of a ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieBrief {
    pub title: String,
    pub year: String,
    pub imdb_rating: String,
    pub genre: String,
    pub director: String,
    pub plot: String,
}

impl From<Candidate> for MovieBrief {
    fn from(candidate: Candidate) -> Self {
        let record = candidate.record;
        Self {
            title: record.title,
            year: record.year,
            imdb_rating: record.imdb_rating.unwrap_or_default(),
            genre: record.genre,
            director: record.director,
            plot: record.plot,
        }
    }
}

/// Three independently ranked facet lists derived from one seed title
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationSet {
    pub seed_title: String,
    pub genre_based: Vec<MovieBrief>,
    pub director_based: Vec<MovieBrief>,
    pub actor_based: Vec<MovieBrief>,
}
