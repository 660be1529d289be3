//! DTOs for API requests and responses.
//!
//! The extraction response body is `metapeek_core::PageMetadata` itself; only
//! the query parameters and the health payload need dedicated shapes.

use serde::{Deserialize, Serialize};

/// Query parameters of `GET /`.
#[derive(Debug, Deserialize)]
pub struct PeekQuery {
    /// URL to render; used verbatim as the cache key.
    pub link: Option<String>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// Entries currently memoized (fresh and stale).
    pub cached_entries: usize,
}
