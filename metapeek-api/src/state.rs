//! App state: the memoizing cache and its configuration.

use std::sync::Arc;

use metapeek_cache::{CacheConfig, MetadataCache};
use metapeek_core::traits::PageFetcher;

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Listening port.
    pub port: u16,
    /// Entry TTL in seconds.
    pub cache_ttl_seconds: u64,
    /// Optional user-agent override for the renderer.
    pub user_agent: Option<String>,
    /// Run Chromium with `--no-sandbox`.
    pub no_sandbox: bool,
}

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TTL_SECONDS: u64 = 900;

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cache_ttl_seconds: DEFAULT_TTL_SECONDS,
            user_agent: None,
            no_sandbox: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the environment (and a `.env` file if present).
    ///
    /// `PORT`, `CACHE_TTL_SECONDS`, `USER_AGENT`, `NO_SANDBOX`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cache_ttl_seconds: std::env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            user_agent: std::env::var("USER_AGENT").ok(),
            no_sandbox: std::env::var("NO_SANDBOX")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(false),
        }
    }
}

/// Shared state handed to every handler.
///
/// Constructed once at startup; the cache (and through it the browser) is an
/// explicit object passed by handle, never a lazily-materialized global.
pub struct AppState {
    /// Environment-derived configuration.
    pub config: ApiConfig,
    /// Memoizing cache wrapping the fetch delegate.
    pub cache: MetadataCache,
}

impl AppState {
    /// Builds the state around an already-launched fetch delegate.
    pub fn new(config: ApiConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let cache_config = CacheConfig {
            ttl_seconds: config.cache_ttl_seconds,
        };
        Self {
            cache: MetadataCache::with_config(fetcher, cache_config),
            config,
        }
    }
}
