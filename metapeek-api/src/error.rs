//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use metapeek_core::error::PeekError;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: code.into(),
        }
    }

    /// Bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    /// Upstream fetch target could not be reached.
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message, "UNREACHABLE")
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_ERROR")
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<PeekError> for ApiError {
    fn from(err: PeekError) -> Self {
        match &err {
            PeekError::MissingKey => {
                ApiError::new(StatusCode::BAD_REQUEST, err.to_string(), "MISSING_LINK")
            }
            PeekError::Navigation { .. } => ApiError::bad_gateway(err.to_string()),
            _ => {
                tracing::error!(error = %err, "Internal error");
                ApiError::internal("An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_400() {
        let api: ApiError = PeekError::MissingKey.into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.code, "MISSING_LINK");
        assert_eq!(api.message, "please specify a link in the query 'link'");
    }

    #[test]
    fn test_navigation_maps_to_502() {
        let api: ApiError = PeekError::Navigation {
            url: "http://nope.invalid".into(),
            reason: "dns".into(),
        }
        .into();
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_other_errors_map_to_500_without_detail() {
        let api: ApiError = PeekError::BrowserLaunch("no chrome binary".into()).into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        // Internal detail stays in the logs, not the response.
        assert!(!api.message.contains("chrome"));
    }
}
