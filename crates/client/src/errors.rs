//! API error taxonomy
//!
//! Statuses are classified for diagnostics and caller-side branching; only
//! 401 has pipeline-level behaviour (the refresh-retry path).

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Coarse error categories for logging and caller branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication failures (401) - recoverable via token refresh
    Authentication,
    /// Authorization failures (403) - non-recoverable, surfaced as-is
    Forbidden,
    /// Validation failures (422) - surfaced for caller-side field mapping
    Validation,
    /// Rate limiting (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Remaining client errors (4xx)
    Client,
    /// Transport failures and timeouts
    Network,
    /// Configuration and request-construction errors
    Config,
}

/// API operation errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("permission denied: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("server error: {0}")]
    Server(String),

    #[error("client error: {0}")]
    Client(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("credential storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// The error's category.
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Forbidden(_) => ApiErrorCategory::Forbidden,
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::NotFound(_) | Self::Client(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Config(_) | Self::Storage(_) => ApiErrorCategory::Config,
        }
    }

    /// Classify a non-success HTTP status into an error carrying the
    /// response body (or a placeholder when the body is empty).
    #[must_use]
    pub fn from_status(status: StatusCode, url: &str, body: String) -> Self {
        let message = if body.is_empty() {
            format!("{url} returned status {status}")
        } else {
            format!("{url} returned status {status}: {body}")
        };

        match status {
            StatusCode::UNAUTHORIZED => Self::Auth(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit(message),
            status if status.is_server_error() => Self::Server(message),
            _ => Self::Client(message),
        }
    }
}
