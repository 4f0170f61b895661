//! Home Movie Depot frontend.
//!
//! Server-rendered pages for a movie catalog backed by the movie rating API:
//! the full listing, a trending pick, a leaving-soon pick, per-movie detail
//! and a backend health view. Collection fetches go through an in-process
//! query cache that coalesces concurrent requests.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

pub use config::Config;
pub use error::{AppError, AppResult};
