//! # Metapeek API Server
//!
//! REST API for the metapeek metadata-extraction service.
//!
//! ## Endpoints
//!
//! - `GET /?link=<url>` - Render the page and return `{title, metas}` JSON
//! - `GET /health` - Liveness plus cache entry count
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use metapeek_api::{ApiConfig, ApiServer};
//! use metapeek_render::ChromeFetcher;
//!
//! let fetcher = Arc::new(ChromeFetcher::launch().await?);
//! let server = ApiServer::new(ApiConfig::from_env(), fetcher);
//! server.run(([0, 0, 0, 0], 5000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use metapeek_core::traits::PageFetcher;

/// API server for metapeek.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server around an already-launched fetch delegate.
    pub fn new(config: ApiConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            state: Arc::new(AppState::new(config, fetcher)),
        }
    }

    /// Creates the router with all routes and middleware configured.
    pub fn router(&self) -> Router {
        // The reference service allowed any origin.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("metapeek API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
