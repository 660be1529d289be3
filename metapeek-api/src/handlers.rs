//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use metapeek_core::types::PageMetadata;

use crate::dto::{HealthResponse, PeekQuery};
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /
///
/// Renders the page named by the `link` query parameter (or serves the
/// memoized result) and returns its title and meta tags. A missing `link` is
/// handed to the delegate as the empty key, which rejects it; the rejection
/// surfaces as 400.
pub async fn peek(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PeekQuery>,
) -> Result<Json<PageMetadata>> {
    let link = query.link.unwrap_or_default();
    debug!(link = %link, "peek request");

    let metadata = state.cache.get_data(&link).await?;
    Ok(Json(metadata))
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cached_entries: state.cache.len(),
    })
}
