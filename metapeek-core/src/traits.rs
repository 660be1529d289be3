//! Common traits for metapeek.
//!
//! These traits define the interfaces that different implementations can
//! satisfy, enabling modularity and testing.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::PageMetadata;

/// Interface for the expensive rendering/extraction step (the fetch
/// delegate the memoizing cache wraps).
///
/// Implementations might use:
/// - A headless browser over the DevTools protocol (production)
/// - A canned in-memory map (tests)
///
/// The delegate owns its own failure modes: an empty key is rejected here,
/// not by the cache, and a delegate that never resolves leaves the caller
/// pending — no timeout is imposed at this seam.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Renders the page at `url` and extracts its title and meta tags.
    ///
    /// The key is used verbatim; no normalization is applied before or after
    /// this call.
    async fn fetch(&self, url: &str) -> Result<PageMetadata>;
}
