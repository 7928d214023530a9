//! Caching gateway in front of the FavQs quotes API.
//!
//! Serves quotes over HTTP, caching results for a fixed TTL and falling back
//! to ten built-in sample quotes when no API key is configured or FavQs
//! can't be reached.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod routes;
pub mod sample;
pub mod service;
pub mod state;
pub mod upstream;

pub use models::Quote;
pub use routes::build_router;
pub use service::QuoteService;
pub use state::AppState;
