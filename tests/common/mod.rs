use std::sync::Arc;
use std::time::Duration;

use movie_discovery_api::{
    models::{CatalogRecord, SearchHit, TitleLookup},
    routes::{create_router, AppState},
    services::catalog::{CatalogClient, CatalogError, CatalogResult},
};

const PAGE_SIZE: usize = 10;

/// In-memory catalog whose search, like OMDb, only matches title text
pub struct FakeCatalog {
    records: Vec<CatalogRecord>,
    episodes: Vec<((String, u32, u32), CatalogRecord)>,
}

fn movie(
    id: &str,
    title: &str,
    genre: &str,
    director: &str,
    actors: &str,
    rating: &str,
) -> CatalogRecord {
    CatalogRecord {
        id: id.to_string(),
        title: title.to_string(),
        year: "1990".to_string(),
        genre: genre.to_string(),
        director: director.to_string(),
        actors: actors.to_string(),
        plot: format!("{} plot", title),
        imdb_rating: Some(rating.to_string()).filter(|r| r != "N/A"),
        ..Default::default()
    }
}

impl FakeCatalog {
    pub fn seeded() -> Self {
        let records = vec![
            movie(
                "tt0133093",
                "The Matrix",
                "Action, Sci-Fi",
                "Lana Wachowski, Lilly Wachowski",
                "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
                "8.7",
            ),
            movie(
                "tt0094612",
                "Action Jackson",
                "Action, Comedy, Crime",
                "Craig R. Baxley",
                "Carl Weathers, Craig T. Nelson",
                "5.4",
            ),
            movie(
                "tt0107362",
                "Last Action Hero",
                "Action, Adventure, Comedy",
                "John McTiernan",
                "Arnold Schwarzenegger, F. Murray Abraham",
                "6.4",
            ),
            movie(
                "tt0117705",
                "Space Jam",
                "Animation, Comedy, Family",
                "Joe Pytka",
                "Michael Jordan, Wayne Knight",
                "6.5",
            ),
            movie(
                "tt0266987",
                "Spy Game",
                "Action, Crime, Thriller",
                "Tony Scott",
                "Robert Redford, Brad Pitt",
                "N/A",
            ),
            movie(
                "tt0078748",
                "Alien",
                "Horror, Sci-Fi",
                "Ridley Scott",
                "Sigourney Weaver, Tom Skerritt",
                "8.5",
            ),
            movie(
                "tt0090605",
                "Aliens",
                "Action, Adventure, Sci-Fi",
                "James Cameron",
                "Sigourney Weaver, Michael Biehn",
                "8.4",
            ),
        ];

        let pilot = CatalogRecord {
            id: "tt0959621".to_string(),
            title: "Pilot".to_string(),
            year: "2008".to_string(),
            director: "Vince Gilligan".to_string(),
            actors: "Bryan Cranston, Anna Gunn, Aaron Paul".to_string(),
            imdb_rating: Some("9.0".to_string()),
            season: Some("1".to_string()),
            episode: Some("1".to_string()),
            ..Default::default()
        };

        Self {
            records,
            episodes: vec![(("breaking bad".to_string(), 1, 1), pilot)],
        }
    }
}

fn not_found() -> CatalogError {
    CatalogError::NotFound("Movie not found!".to_string())
}

#[async_trait::async_trait]
impl CatalogClient for FakeCatalog {
    async fn search(&self, term: &str, page: u32) -> CatalogResult<Vec<SearchHit>> {
        let term = term.to_lowercase();
        let hits: Vec<SearchHit> = self
            .records
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&term))
            .skip((page.saturating_sub(1) as usize) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|r| SearchHit {
                id: r.id.clone(),
                title: r.title.clone(),
                year: r.year.clone(),
            })
            .collect();

        if hits.is_empty() {
            return Err(not_found());
        }
        Ok(hits)
    }

    async fn fetch_details(&self, lookup: &TitleLookup) -> CatalogResult<CatalogRecord> {
        let found = match lookup {
            TitleLookup::Id(id) => self.records.iter().find(|r| &r.id == id),
            TitleLookup::Title(title) => self
                .records
                .iter()
                .find(|r| r.title.eq_ignore_ascii_case(title)),
            TitleLookup::Episode {
                series_title,
                season,
                episode,
            } => self
                .episodes
                .iter()
                .find(|((series, s, e), _)| {
                    series.eq_ignore_ascii_case(series_title) && s == season && e == episode
                })
                .map(|(_, record)| record),
        };

        found.cloned().ok_or_else(not_found)
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

pub fn create_test_app() -> axum::Router {
    let catalog: Arc<dyn CatalogClient> = Arc::new(FakeCatalog::seeded());
    create_router(AppState::with_settings(
        catalog,
        15,
        20,
        Duration::from_secs(30),
    ))
}
