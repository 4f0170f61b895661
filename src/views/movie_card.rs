use maud::{html, Markup};

use crate::models::Movie;

/// Detail route for a movie title
pub fn movie_href(title: &str) -> String {
    format!("/movie/{}", urlencoding::encode(title))
}

/// Card with the title link, per-source ratings and the average
pub fn movie_card(movie: &Movie) -> Markup {
    if movie.is_placeholder() {
        return html! { div.Card.Empty { "No movies yet" } };
    }

    html! {
        article.Card {
            a href=(movie_href(&movie.title)) { h3 { (movie.title) } }
            @if let Some(genre) = &movie.genre {
                div.Genre { (genre) }
            }
            @for rating in &movie.ratings {
                div.Rating {
                    div.Source { (rating.source) }
                    div.Value { (rating.value) }
                }
            }
            div.Average { "Average: " (format!("{:.1}", movie.average_rating)) }
            @if let Some(plot) = &movie.plot {
                p.Plot { (plot) }
            }
        }
    }
}
