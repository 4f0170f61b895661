use std::sync::Arc;
use std::time::Duration;

use crate::{
    cache::{QueryCache, QueryKey},
    error::AppResult,
    models::QueryState,
    services::{providers::CatalogClient, settle},
};

/// Query for the backend health payload
///
/// Health is never served from cache; concurrent page loads still share
/// one request.
#[derive(Clone)]
pub struct HealthQuery {
    client: Arc<dyn CatalogClient>,
    cache: QueryCache<serde_json::Value>,
    key: QueryKey,
}

impl HealthQuery {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self {
            client,
            cache: QueryCache::new(Duration::ZERO),
            key: QueryKey::new("health"),
        }
    }

    pub async fn fetch(&self) -> AppResult<Arc<serde_json::Value>> {
        let client = Arc::clone(&self.client);
        self.cache
            .fetch(&self.key, move || async move { client.fetch_health().await })
            .await
    }

    pub async fn state(&self, wait: Duration) -> QueryState<Arc<serde_json::Value>> {
        settle(self.fetch(), wait, &self.key).await
    }
}
