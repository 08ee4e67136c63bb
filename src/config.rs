use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout for a single upstream call
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Overall deadline for one API request, covering every upstream call it makes
    #[serde(default = "default_request_deadline_secs")]
    pub request_deadline_secs: u64,

    /// Number of movies returned by the genre listing
    #[serde(default = "default_genre_listing_limit")]
    pub genre_listing_limit: usize,

    /// Maximum entries per recommendation facet
    #[serde(default = "default_recommendation_cap")]
    pub recommendation_cap: usize,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_upstream_timeout_secs() -> u64 {
    10
}

fn default_request_deadline_secs() -> u64 {
    120
}

fn default_genre_listing_limit() -> usize {
    15
}

fn default_recommendation_cap() -> usize {
    20
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.omdb_api_key.trim().is_empty() {
            anyhow::bail!("OMDB_API_KEY must not be empty");
        }
        if self.genre_listing_limit == 0 || self.recommendation_cap == 0 {
            anyhow::bail!("GENRE_LISTING_LIMIT and RECOMMENDATION_CAP must be positive");
        }
        if self.upstream_timeout_secs == 0 || self.request_deadline_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS and REQUEST_DEADLINE_SECS must be positive");
        }
        Ok(())
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn request_deadline(&self) -> Duration {
        Duration::from_secs(self.request_deadline_secs)
    }
}
