//! Refresh-endpoint port and its HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use super::types::AuthTokens;

/// Errors from a token refresh attempt.
///
/// Callers of [`crate::TokenStore::refresh_tokens`] never see these; the
/// store folds every failure into a `false` outcome after clearing
/// credentials.
#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("refresh endpoint returned status {0}")]
    Status(u16),

    #[error("refresh response could not be parsed: {0}")]
    Parse(String),
}

/// Port for minting new tokens from a refresh token.
///
/// Abstracts the authentication backend so the token store can be tested
/// with scripted outcomes.
#[async_trait]
pub trait RefreshApi: Send + Sync {
    /// Exchange the refresh token for a new token set.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, RefreshError>;
}

/// Reqwest-backed implementation of the refresh port.
#[derive(Debug, Clone)]
pub struct HttpRefreshApi {
    client: Client,
    refresh_url: String,
}

impl HttpRefreshApi {
    /// Create a refresh client for the given API base URL
    /// (`{base}/auth/refresh`).
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base = base_url.as_ref().trim_end_matches('/');
        Self { client, refresh_url: format!("{base}/auth/refresh") }
    }
}

#[async_trait]
impl RefreshApi for HttpRefreshApi {
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, RefreshError> {
        debug!(url = %self.refresh_url, "requesting token refresh");

        let response = self
            .client
            .post(&self.refresh_url)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RefreshError::Status(status.as_u16()));
        }

        response.json::<AuthTokens>().await.map_err(|err| RefreshError::Parse(err.to_string()))
    }
}
