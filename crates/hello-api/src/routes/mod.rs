//! Route definitions and router builder.

pub mod health;
pub mod root;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware.
///
/// Unknown paths and unsupported methods fall through to Axum's default
/// 404 and 405 responses.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
