use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use movie_discovery_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{CatalogClient, OmdbClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_discovery_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog: Arc<dyn CatalogClient> = Arc::new(
        OmdbClient::new(
            config.omdb_api_key.clone(),
            config.omdb_api_url.clone(),
            config.upstream_timeout(),
        )
        .context("Failed to build OMDb client")?,
    );

    let app = create_router(AppState::new(catalog, &config));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        address = %addr,
        catalog = %config.omdb_api_url,
        genre_listing_limit = config.genre_listing_limit,
        recommendation_cap = config.recommendation_cap,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
