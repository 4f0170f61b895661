use maud::{html, Markup};

use crate::models::Movie;
use crate::views::movie_card;

/// Landing page: just the shell
pub fn dashboard() -> Markup {
    html! {}
}

pub fn movie_list(movies: &[Movie]) -> Markup {
    html! {
        div.Movies {
            @for movie in movies {
                (movie_card(movie))
            }
        }
    }
}

pub fn trending(movie: &Movie) -> Markup {
    html! {
        h1 { "TRENDING!!" }
        (movie_card(movie))
    }
}

pub fn leaving(movie: &Movie) -> Markup {
    movie_card(movie)
}

pub fn movie_detail(movie: &Movie) -> Markup {
    movie_card(movie)
}

pub fn coming_soon() -> Markup {
    html! { h1 { "Coming soon!" } }
}

/// Backend health payload, shown verbatim as JSON
pub fn health(payload: &serde_json::Value) -> Markup {
    html! { h1.Health { (payload.to_string()) } }
}
