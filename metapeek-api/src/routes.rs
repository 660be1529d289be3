//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // The single extraction endpoint
        .route("/", get(handlers::peek))
        // Health check
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
