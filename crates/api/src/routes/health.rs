//! Liveness endpoints.

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// Plain-text banner at the root.
pub async fn index() -> &'static str {
    "Record Shop API is running"
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. The store is in memory, so there
/// is nothing else to check.
pub async fn health() -> &'static str {
    "ok"
}
