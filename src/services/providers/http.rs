//! Rating API client over HTTP
//!
//! Issues plain GET requests against the configured base URL. Transport
//! failures, non-2xx statuses and undecodable bodies each map to their own
//! `AppError` variant, though views collapse them into one error state.

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::Movie,
    services::providers::CatalogClient,
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct HttpCatalog {
    http_client: HttpClient,
    movies_url: String,
    health_url: String,
}

impl HttpCatalog {
    /// Creates a client for the endpoints named in `config`
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http_client,
            movies_url: config.endpoint(&config.movies_path),
            health_url: config.endpoint(&config.health_path),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "GET {} returned status {}: {}",
                url, status, body
            )));
        }

        let body = response.text().await?;
        decode_body(&body)
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    Ok(serde_json::from_str(body)?)
}

#[async_trait::async_trait]
impl CatalogClient for HttpCatalog {
    async fn fetch_movies(&self) -> AppResult<Vec<Movie>> {
        // An empty collection comes back as `null`.
        let movies: Vec<Movie> = self
            .get_json::<Option<Vec<Movie>>>(&self.movies_url)
            .await?
            .unwrap_or_default();
        tracing::info!(
            url = %self.movies_url,
            count = movies.len(),
            "Fetched movie collection"
        );
        Ok(movies)
    }

    async fn fetch_health(&self) -> AppResult<serde_json::Value> {
        let health = self.get_json(&self.health_url).await?;
        tracing::debug!(url = %self.health_url, "Fetched backend health");
        Ok(health)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
