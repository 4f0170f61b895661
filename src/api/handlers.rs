use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension,
};
use maud::{html, Markup};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::QueryState,
    services::selectors::{find_by_title, highest_rated, lowest_rated},
    views::{self, pages},
};

use super::AppState;

/// Dashboard shell with no page selected
pub async fn dashboard() -> Markup {
    views::layout(pages::dashboard(), false)
}

/// Every movie in the catalog
pub async fn movies(State(state): State<AppState>) -> Response {
    let query = state.movies.state(state.render_wait).await;
    views::render(query, |movies| pages::movie_list(&movies))
}

/// Highest-rated movie
pub async fn trending(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    let query = state
        .movies
        .state(state.render_wait)
        .await
        .map(|movies| highest_rated(movies.iter()));

    if let QueryState::Success(movie) = &query {
        tracing::info!(
            request_id = %request_id,
            title = %movie.title,
            average_rating = movie.average_rating,
            "Selected trending movie"
        );
    }

    views::render(query, |movie| pages::trending(&movie))
}

/// Lowest-rated movie
pub async fn leaving(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> Response {
    let query = state
        .movies
        .state(state.render_wait)
        .await
        .map(|movies| lowest_rated(movies.iter()));

    if let QueryState::Success(movie) = &query {
        tracing::info!(
            request_id = %request_id,
            title = %movie.title,
            average_rating = movie.average_rating,
            "Selected leaving movie"
        );
    }

    views::render(query, |movie| pages::leaving(&movie))
}

/// Single movie looked up by exact title
pub async fn movie(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let lookup = state
        .movies
        .state(state.render_wait)
        .await
        .map(|movies| find_by_title(movies.iter(), &name).cloned());

    match lookup.transpose() {
        Some(found) => Ok(views::render(found, |movie| pages::movie_detail(&movie))),
        None => {
            tracing::info!(request_id = %request_id, title = %name, "Movie not in catalog");
            Err(AppError::NotFound(name))
        }
    }
}

/// Placeholder for the upcoming-releases list
pub async fn soon() -> Markup {
    views::layout(pages::coming_soon(), false)
}

/// Backend health payload
pub async fn health(State(state): State<AppState>) -> Response {
    let query = state.health.state(state.render_wait).await;
    views::render(query, |payload| pages::health(&payload))
}

/// Unknown route
pub async fn fallback() -> Response {
    let page = views::layout(html! { div.NotFound { "Page not found" } }, false);
    (StatusCode::NOT_FOUND, page).into_response()
}
