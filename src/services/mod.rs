pub mod catalog;
pub mod collector;
pub mod genre_listing;
pub mod lookup;
pub mod ranker;
pub mod recommendations;
pub mod terms;

pub use catalog::{CatalogClient, CatalogError, OmdbClient};
pub use recommendations::Recommender;
