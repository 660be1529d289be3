//! Error types for metapeek.
//!
//! One error hierarchy using `thiserror`, shared by the cache, the renderer,
//! and the API. Fetch failures are tagged errors, never values: the cache
//! propagates them untouched and never stores them.

use thiserror::Error;

/// Result type alias using `PeekError`.
pub type Result<T> = std::result::Result<T, PeekError>;

/// Main error type for all metapeek operations.
#[derive(Debug, Error)]
pub enum PeekError {
    /// No lookup key was supplied to the fetch delegate.
    #[error("please specify a link in the query 'link'")]
    MissingKey,

    /// The fetch target could not be rendered (unreachable, bad DNS,
    /// navigation failure).
    #[error("failed to load '{url}': {reason}")]
    Navigation {
        /// The URL that was requested.
        url: String,
        /// Underlying browser/protocol failure.
        reason: String,
    },

    /// The headless browser could not be launched.
    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    /// A DevTools protocol call failed outside of navigation.
    #[error("browser protocol error: {0}")]
    Browser(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal invariant violation (should never happen).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl PeekError {
    /// Returns true if the caller supplied bad input (as opposed to the
    /// fetch target or the browser failing).
    pub fn is_client_error(&self) -> bool {
        matches!(self, PeekError::MissingKey)
    }

    /// Returns true if retrying the same request could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PeekError::Navigation { .. } | PeekError::Browser(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PeekError::Navigation {
            url: "http://nope.invalid".into(),
            reason: "net::ERR_NAME_NOT_RESOLVED".into(),
        };
        assert!(err.to_string().contains("http://nope.invalid"));
        assert!(err.to_string().contains("ERR_NAME_NOT_RESOLVED"));
    }

    #[test]
    fn test_missing_key_message() {
        // The reference service's exact message; the API surfaces it verbatim.
        assert_eq!(
            PeekError::MissingKey.to_string(),
            "please specify a link in the query 'link'"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(PeekError::MissingKey.is_client_error());
        assert!(!PeekError::MissingKey.is_recoverable());

        let nav = PeekError::Navigation {
            url: "x".into(),
            reason: "y".into(),
        };
        assert!(nav.is_recoverable());
        assert!(!nav.is_client_error());

        assert!(!PeekError::BrowserLaunch("no chrome".into()).is_recoverable());
    }
}
