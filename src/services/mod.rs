use std::future::Future;
use std::time::Duration;

use crate::{cache::QueryKey, error::AppResult, models::QueryState};

pub mod health;
pub mod movies;
pub mod providers;
pub mod selectors;

pub use health::HealthQuery;
pub use movies::MovieQuery;

/// Resolves a query into the state a view renders
///
/// Gives the query `wait` to finish. Past that the view shows its loading
/// state; the underlying fetch keeps running and fills the cache.
pub(crate) async fn settle<T>(
    query: impl Future<Output = AppResult<T>>,
    wait: Duration,
    key: &QueryKey,
) -> QueryState<T> {
    match tokio::time::timeout(wait, query).await {
        Ok(Ok(data)) => QueryState::Success(data),
        Ok(Err(e)) => {
            tracing::warn!(key = %key, error = %e, "Query resolved to error state");
            QueryState::Error
        }
        Err(_) => {
            tracing::debug!(key = %key, wait_ms = wait.as_millis() as u64, "Query still loading");
            QueryState::Loading
        }
    }
}
