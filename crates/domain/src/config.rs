//! Client configuration structures
//!
//! Pure configuration data; loading (environment probing, file fallback)
//! lives in `lectern-client`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Base URL used when no configuration source provides one.
///
/// Points at a local development instance of the Lectern backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Per-request timeout applied by the HTTP layer when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// API connection configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the Lectern admin API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// Build a configuration for the given base URL with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: normalize_base_url(base_url.into()), timeout_seconds: DEFAULT_TIMEOUT_SECS }
    }

    /// Override the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Strip trailing slashes so paths can be appended verbatim.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_development() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("https://api.lectern.app/v1//");
        assert_eq!(config.base_url, "https://api.lectern.app/v1");
    }
}
