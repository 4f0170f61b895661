use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the frontend router with all pages
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/movies", get(handlers::movies))
        .route("/trending", get(handlers::trending))
        .route("/leaving", get(handlers::leaving))
        .route("/soon", get(handlers::soon))
        .route("/health", get(handlers::health))
        .route("/movie/:name", get(handlers::movie))
        .fallback(handlers::fallback)
        // Request IDs are assigned before the trace span is built.
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
        .with_state(state)
}
