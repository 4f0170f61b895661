//! Movie catalog backend abstraction
//!
//! Read-only access to the movie rating API.

use crate::{error::AppResult, models::Movie};

pub mod http;

pub use http::HttpCatalog;

/// Trait for movie catalog backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full movie collection, as sent by the backend
    async fn fetch_movies(&self) -> AppResult<Vec<Movie>>;

    /// Fetch the backend health payload; its shape is not interpreted
    async fn fetch_health(&self) -> AppResult<serde_json::Value>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
