use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, QUOTES_ERROR, panic_message};
use crate::handlers::{
    debug_handler, health_handler, metrics_handler, quotes_by_tag_handler, quotes_handler,
};
use crate::state::AppState;

// creating the router with routes
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/debug", get(debug_handler))
        .route("/api/quotes", get(quotes_handler))
        .route("/api/quotes/tag/{tag}", get(quotes_by_tag_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

// Panics outside the quote routes' own tasks: answer 500 {error, message}
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    ApiError::internal(QUOTES_ERROR, panic_message(err.as_ref())).into_response()
}
