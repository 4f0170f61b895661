use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::views;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// An error produced once and shared with every waiter of a coalesced query
    #[error(transparent)]
    Query(Arc<AppError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Status code reported to the browser
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::ExternalApi(_) | AppError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Query(inner) => inner.status(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(error = %self, status = status.as_u16(), "Request failed");

        // Users only ever see the static error page.
        let page = match self {
            AppError::NotFound(_) => views::not_found(),
            _ => views::error_page(),
        };

        (status, page).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
