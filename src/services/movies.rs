use std::sync::Arc;
use std::time::Duration;

use crate::{
    cache::{QueryCache, QueryKey},
    error::{AppError, AppResult},
    models::{Movie, QueryState},
    services::{providers::CatalogClient, settle},
};

/// Query for the full movie collection
///
/// Every movie handed out has its `average_rating` recomputed from its
/// ratings. Views mounted at the same time share a single backend request.
#[derive(Clone)]
pub struct MovieQuery {
    client: Arc<dyn CatalogClient>,
    cache: QueryCache<Vec<Movie>>,
    key: QueryKey,
}

impl MovieQuery {
    pub fn new(client: Arc<dyn CatalogClient>, cache: QueryCache<Vec<Movie>>, key: QueryKey) -> Self {
        Self { client, cache, key }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Fetches (or joins the fetch of) the scored collection
    pub async fn fetch(&self) -> AppResult<Arc<Vec<Movie>>> {
        let client = Arc::clone(&self.client);
        self.cache
            .fetch(&self.key, move || async move {
                let movies = client.fetch_movies().await?;
                let scored: Vec<Movie> = movies
                    .into_iter()
                    .map(Movie::with_average_rating)
                    .collect();
                Ok::<_, AppError>(scored)
            })
            .await
    }

    /// Waits up to `wait` for the collection and reports the view state
    pub async fn state(&self, wait: Duration) -> QueryState<Arc<Vec<Movie>>> {
        settle(self.fetch(), wait, &self.key).await
    }

    /// Drops the cached collection so the next fetch goes to the backend
    pub async fn invalidate(&self) -> bool {
        self.cache.invalidate(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use crate::services::providers::MockCatalogClient;

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new(
                "Life of Brian",
                vec![Rating::new("IMDb", 80.0), Rating::new("Rotten Tomatoes", 95.0)],
            ),
            Movie::new("Unrated", vec![]),
        ]
    }

    fn query(mock: MockCatalogClient, ttl: Duration) -> MovieQuery {
        MovieQuery::new(
            Arc::new(mock),
            QueryCache::new(ttl),
            QueryKey::new("movies"),
        )
    }

    #[tokio::test]
    async fn test_fetch_scores_every_movie() {
        let mut mock = MockCatalogClient::new();
        mock.expect_fetch_movies().times(1).returning(|| Ok(movies()));

        let movies = query(mock, Duration::from_secs(60)).fetch().await.unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].average_rating, 87.5);
        assert_eq!(movies[1].average_rating, 0.0);
    }

    #[tokio::test]
    async fn test_simultaneous_views_share_one_request() {
        let mut mock = MockCatalogClient::new();
        mock.expect_fetch_movies().times(1).returning(|| Ok(movies()));
        let query = query(mock, Duration::from_secs(60));

        let (movies_view, trending_view) = tokio::join!(query.fetch(), query.fetch());

        assert!(Arc::ptr_eq(&movies_view.unwrap(), &trending_view.unwrap()));
    }

    #[tokio::test]
    async fn test_fetch_error_surfaces_as_error_state() {
        let mut mock = MockCatalogClient::new();
        mock.expect_fetch_movies()
            .times(1)
            .returning(|| Err(AppError::ExternalApi("status 503".to_string())));

        let state = query(mock, Duration::from_secs(60))
            .state(Duration::from_secs(1))
            .await;

        assert!(state.is_error());
    }

    #[tokio::test]
    async fn test_state_success_carries_data() {
        let mut mock = MockCatalogClient::new();
        mock.expect_fetch_movies().times(1).returning(|| Ok(movies()));

        let state = query(mock, Duration::from_secs(60))
            .state(Duration::from_secs(1))
            .await;

        match state {
            QueryState::Success(movies) => assert_eq!(movies[0].title, "Life of Brian"),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalidate_refetches() {
        let mut mock = MockCatalogClient::new();
        mock.expect_fetch_movies().times(2).returning(|| Ok(movies()));
        let query = query(mock, Duration::from_secs(60));

        query.fetch().await.unwrap();
        query.fetch().await.unwrap();
        assert!(query.invalidate().await);
        query.fetch().await.unwrap();
    }

    #[tokio::test]
    async fn test_uses_configured_key() {
        let query = MovieQuery::new(
            Arc::new(MockCatalogClient::new()),
            QueryCache::new(Duration::ZERO),
            QueryKey::new("catalog"),
        );
        assert_eq!(query.key().as_str(), "catalog");
    }
}
