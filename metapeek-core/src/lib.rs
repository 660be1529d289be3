//! # Metapeek Core
//!
//! Core types, errors, and traits for the metapeek metadata-extraction service.
//!
//! This crate provides the foundational building blocks used by all other
//! metapeek crates:
//!
//! - **Types**: [`PageMetadata`], the title + meta-tag attributes of a page
//! - **Errors**: [`PeekError`], the error hierarchy with context
//! - **Traits**: [`PageFetcher`], the seam between the cache and the renderer
//!
//! ## Example
//!
//! ```rust
//! use metapeek_core::PageMetadata;
//!
//! // Types are serializable and match the wire shape of the service
//! let page = PageMetadata::default();
//! let json = serde_json::to_string(&page).unwrap();
//! assert_eq!(json, r#"{"title":"","metas":[]}"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PeekError, Result};
pub use traits::*;
pub use types::*;
