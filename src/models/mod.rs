pub mod movie;

pub use movie::{average_score, Movie, Rating};

/// Three-valued state of a query as seen by a view
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// The fetch has not completed yet
    Loading,
    /// The fetch failed; views only branch on this flag
    Error,
    Success(T),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QueryState::Error)
    }

    /// Applies `f` to the data of a successful query
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> QueryState<U> {
        match self {
            QueryState::Loading => QueryState::Loading,
            QueryState::Error => QueryState::Error,
            QueryState::Success(data) => QueryState::Success(f(data)),
        }
    }
}

impl<T> QueryState<Option<T>> {
    /// `None` when the query succeeded but found nothing
    pub fn transpose(self) -> Option<QueryState<T>> {
        match self {
            QueryState::Loading => Some(QueryState::Loading),
            QueryState::Error => Some(QueryState::Error),
            QueryState::Success(found) => found.map(QueryState::Success),
        }
    }
}
