//! Test doubles for the auth and storage layers.
//!
//! Available to downstream crates' tests as regular exports; nothing here
//! is compiled into release paths unless explicitly constructed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::auth::refresh::{RefreshApi, RefreshError};
use crate::auth::token_store::TokenStore;
use crate::auth::types::AuthTokens;
use crate::store::MemoryStore;

/// Scripted [`RefreshApi`] with a call counter.
///
/// The default double fails every refresh, which is the safe behaviour for
/// tests that never expect a refresh to happen.
#[derive(Debug, Clone)]
pub struct MockRefreshApi {
    tokens: Option<AuthTokens>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl Default for MockRefreshApi {
    fn default() -> Self {
        Self::failing()
    }
}

impl MockRefreshApi {
    /// A double whose every refresh yields the given tokens.
    #[must_use]
    pub fn succeeding(tokens: AuthTokens) -> Self {
        Self { tokens: Some(tokens), delay: None, calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// A double whose every refresh fails.
    #[must_use]
    pub fn failing() -> Self {
        Self { tokens: None, delay: None, calls: Arc::new(AtomicUsize::new(0)) }
    }

    /// Delay each refresh, giving concurrent callers a window to overlap.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared counter of refresh invocations.
    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl RefreshApi for MockRefreshApi {
    async fn refresh(&self, _refresh_token: &str) -> Result<AuthTokens, RefreshError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.tokens {
            Some(tokens) => Ok(tokens.clone()),
            None => Err(RefreshError::Status(401)),
        }
    }
}

/// A token store over fresh in-memory tiers and the given refresh double.
#[must_use]
pub fn memory_token_store(refresh_api: MockRefreshApi) -> TokenStore {
    TokenStore::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()), Arc::new(refresh_api))
}
