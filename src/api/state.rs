use std::sync::Arc;
use std::time::Duration;

use crate::{
    cache::{QueryCache, QueryKey},
    config::Config,
    error::AppResult,
    services::{
        providers::{CatalogClient, HttpCatalog},
        HealthQuery, MovieQuery,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub movies: MovieQuery,
    pub health: HealthQuery,
    /// How long a page waits for its query before showing the loading state
    pub render_wait: Duration,
}

impl AppState {
    /// Creates state backed by the HTTP rating API named in `config`
    pub fn new(config: &Config) -> AppResult<Self> {
        let client: Arc<dyn CatalogClient> = Arc::new(HttpCatalog::new(config)?);
        Ok(Self::with_client(client, config))
    }

    /// Creates state around an arbitrary catalog backend
    pub fn with_client(client: Arc<dyn CatalogClient>, config: &Config) -> Self {
        tracing::info!(
            backend = client.name(),
            cache_key = %config.movies_cache_key,
            ttl_secs = config.cache_ttl_secs,
            "Initializing movie queries"
        );

        Self {
            movies: MovieQuery::new(
                Arc::clone(&client),
                QueryCache::new(config.cache_ttl()),
                QueryKey::new(config.movies_cache_key.clone()),
            ),
            health: HealthQuery::new(client),
            render_wait: config.render_wait(),
        }
    }
}
