pub mod query;

pub use query::QueryCache;
pub use query::QueryKey;
