//! Server-rendered pages.
//!
//! Every page is a pure function of a [`QueryState`]: a loading notice while
//! the data is pending, a static error message when the query failed, and
//! the composed data otherwise. All pages render inside the dashboard shell.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::QueryState;

pub mod movie_card;
pub mod pages;

pub use movie_card::{movie_card, movie_href};

pub const SITE_TITLE: &str = "The Home Movie Depot";

/// Seconds before a loading page asks the browser to try again
const LOADING_REFRESH_SECS: u32 = 1;

const STYLE: &str = "\
body { margin: 0; font-family: sans-serif; }
.Background { min-height: 100vh; padding: 1rem 2rem; background: #1d1f27; color: #e8e8e8; }
.Button-layout { display: flex; gap: 0.5rem; }
.Header { text-align: center; }
a { color: #8ecbff; }
.Card { margin-bottom: 1.5rem; }
.Rating { display: flex; gap: 1rem; }
";

/// Navigation buttons shown on every page, as (path, label)
const NAV: &[(&str, &str)] = &[
    ("/movies", "Movies"),
    ("/soon", "Coming soon!"),
    ("/trending", "Trending"),
    ("/leaving", "Leaving Soon"),
    ("/health", "Health"),
];

/// Dashboard shell wrapping a page body
pub fn layout(body: Markup, refresh: bool) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                @if refresh {
                    meta http-equiv="refresh" content=(LOADING_REFRESH_SECS);
                }
                title { (SITE_TITLE) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                section.Background {
                    header {
                        nav.Button-layout {
                            @for (path, label) in NAV {
                                a href=(path) { button { (label) } }
                            }
                        }
                        h1.Header { (SITE_TITLE) }
                    }
                    main { (body) }
                }
            }
        }
    }
}

pub fn loading() -> Markup {
    html! { div.Loading { "Loading..." } }
}

/// Static error page; no diagnostic detail is ever shown
pub fn error_page() -> Markup {
    layout(html! { div.Error { "Error!!" } }, false)
}

pub fn not_found() -> Markup {
    layout(html! { div.NotFound { "Movie not found" } }, false)
}

/// HTTP status for a page rendered from `state`
pub fn status_for<T>(state: &QueryState<T>) -> StatusCode {
    match state {
        QueryState::Error => StatusCode::BAD_GATEWAY,
        QueryState::Loading | QueryState::Success(_) => StatusCode::OK,
    }
}

/// Renders `state` inside the shell, delegating data to `body`
pub fn render<T>(state: QueryState<T>, body: impl FnOnce(T) -> Markup) -> Response {
    let status = status_for(&state);
    let page = match state {
        QueryState::Loading => layout(loading(), true),
        QueryState::Error => error_page(),
        QueryState::Success(data) => layout(body(data), false),
    };
    (status, page).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_navigation_and_header() {
        let page = layout(html! { p { "body" } }, false).into_string();
        assert!(page.contains(SITE_TITLE));
        for (path, label) in NAV {
            assert!(page.contains(&format!("href=\"{}\"", path)));
            assert!(page.contains(label));
        }
        assert!(!page.contains("http-equiv"));
    }

    #[test]
    fn test_loading_page_refreshes() {
        let page = layout(loading(), true).into_string();
        assert!(page.contains("Loading..."));
        assert!(page.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_status_for_states() {
        assert_eq!(status_for(&QueryState::<()>::Loading), StatusCode::OK);
        assert_eq!(status_for(&QueryState::<()>::Error), StatusCode::BAD_GATEWAY);
        assert_eq!(status_for(&QueryState::Success(())), StatusCode::OK);
    }
}
