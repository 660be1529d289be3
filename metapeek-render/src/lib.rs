//! # Metapeek Render
//!
//! The expensive half of the service: drives a headless Chromium over the
//! DevTools protocol, waits for navigation to settle, and extracts the
//! `<title>` and `<meta>` attribute sets from the rendered DOM.
//!
//! [`ChromeFetcher`] implements [`metapeek_core::PageFetcher`], so the
//! memoizing cache (and tests, with a stub) can treat rendering as an opaque
//! asynchronous fetch.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod browser;
mod extract;

pub use browser::{ChromeFetcher, RenderConfig};
pub use extract::extract_metadata;
