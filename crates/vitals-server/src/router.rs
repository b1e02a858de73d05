use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Create the main application router with all routes.
pub fn create_router() -> Router {
    Router::new()
        // Liveness probe. POST only; axum answers other methods with 405
        // and unknown paths with 404.
        .route("/health", post(handlers::health))
        .layer(TraceLayer::new_for_http())
}
