//! TTL memoizing cache for metapeek page metadata.
//!
//! Sits between the HTTP endpoint and the rendering/extraction delegate:
//! repeated lookups for one URL within the TTL window are served from memory
//! instead of re-rendering the page.

mod cache;

pub use cache::{CacheConfig, CacheStats, MetadataCache};
