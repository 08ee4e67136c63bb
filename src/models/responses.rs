use serde::{Deserialize, Serialize};

use super::{CatalogRecord, MovieBrief, RecommendationSet, SourceRating};

/// Response for GET /api/movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetailsResponse {
    pub title: String,
    pub year: String,
    pub plot: String,
    pub country: String,
    pub awards: String,
    pub director: String,
    pub ratings: Vec<SourceRating>,
}

impl From<CatalogRecord> for MovieDetailsResponse {
    fn from(record: CatalogRecord) -> Self {
        Self {
            title: record.title,
            year: record.year,
            plot: record.plot,
            country: record.country,
            awards: record.awards,
            director: record.director,
            ratings: record.ratings,
        }
    }
}

/// Response for GET /api/episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeDetailsResponse {
    pub title: String,
    pub series_title: String,
    pub season: String,
    pub episode: String,
    pub year: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub ratings: Vec<SourceRating>,
    pub imdb_rating: String,
}

impl EpisodeDetailsResponse {
    /// The series title is echoed back as the caller supplied it
    pub fn new(series_title: String, record: CatalogRecord) -> Self {
        Self {
            title: record.title,
            series_title,
            season: record.season.unwrap_or_default(),
            episode: record.episode.unwrap_or_default(),
            year: record.year,
            plot: record.plot,
            director: record.director,
            actors: record.actors,
            ratings: record.ratings,
            imdb_rating: record.imdb_rating.unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// Response for GET /api/movies/genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreMoviesResponse {
    pub genre: String,
    pub movies: Vec<MovieBrief>,
    pub count: usize,
}

impl GenreMoviesResponse {
    pub fn new(genre: String, movies: Vec<MovieBrief>) -> Self {
        Self {
            genre,
            count: movies.len(),
            movies,
        }
    }
}

/// Response for GET /api/recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub favorite_movie: String,
    pub recommendations: RecommendationsByCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsByCategory {
    pub genre_based: Vec<MovieBrief>,
    pub director_based: Vec<MovieBrief>,
    pub actor_based: Vec<MovieBrief>,
}

impl From<RecommendationSet> for RecommendationsResponse {
    fn from(set: RecommendationSet) -> Self {
        Self {
            favorite_movie: set.seed_title,
            recommendations: RecommendationsByCategory {
                genre_based: set.genre_based,
                director_based: set.director_based,
                actor_based: set.actor_based,
            },
        }
    }
}

/// Body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_response_shape() {
        let set = RecommendationSet {
            seed_title: "The Matrix".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(RecommendationsResponse::from(set)).unwrap();
        assert_eq!(json["favorite_movie"], "The Matrix");
        assert!(json["recommendations"]["genre_based"].as_array().unwrap().is_empty());
        assert!(json["recommendations"]["director_based"].is_array());
        assert!(json["recommendations"]["actor_based"].is_array());
    }

    #[test]
    fn test_episode_response_defaults_missing_rating() {
        let record = CatalogRecord {
            title: "Pilot".to_string(),
            season: Some("1".to_string()),
            episode: Some("1".to_string()),
            ..Default::default()
        };

        let response = EpisodeDetailsResponse::new("Breaking Bad".to_string(), record);
        assert_eq!(response.series_title, "Breaking Bad");
        assert_eq!(response.season, "1");
        assert_eq!(response.imdb_rating, "N/A");
    }
}
