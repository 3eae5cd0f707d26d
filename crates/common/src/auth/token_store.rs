//! Credential lifecycle over the storage tiers
//!
//! Single source of truth for token and session persistence:
//! - Access token mirrored across a durable and a session-scoped tier
//! - Refresh token and session record in the durable tier only
//! - Refresh-and-clear-on-failure semantics with singleflight coalescing

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::refresh::RefreshApi;
use super::types::{now_millis, AuthTokens, UserSession};
use crate::store::{SecretStore, StoreError};

/// Storage key for the access token (present in both tiers).
pub const ACCESS_TOKEN_KEY: &str = "auth-token";
/// Storage key for the refresh token (durable tier only).
pub const REFRESH_TOKEN_KEY: &str = "refresh-token";
/// Storage key for the serialized session record (durable tier only).
pub const USER_SESSION_KEY: &str = "user-session";

/// Credential store over two [`SecretStore`] tiers and a refresh port.
///
/// Reads are synchronous; only [`TokenStore::refresh_tokens`] awaits. The
/// store is shared behind an [`Arc`] between the HTTP pipeline and session
/// utilities.
pub struct TokenStore {
    durable: Arc<dyn SecretStore>,
    session_scoped: Arc<dyn SecretStore>,
    refresh_api: Arc<dyn RefreshApi>,
    refresh_gate: Mutex<()>,
    refresh_generation: AtomicU64,
}

impl TokenStore {
    /// Create a store over the given tiers and refresh port.
    #[must_use]
    pub fn new(
        durable: Arc<dyn SecretStore>,
        session_scoped: Arc<dyn SecretStore>,
        refresh_api: Arc<dyn RefreshApi>,
    ) -> Self {
        Self {
            durable,
            session_scoped,
            refresh_api,
            refresh_gate: Mutex::new(()),
            refresh_generation: AtomicU64::new(0),
        }
    }

    /// Store the access token in both tiers.
    ///
    /// If the session-scoped write fails after the durable one succeeded,
    /// the durable entry is rolled back so readers never observe the tiers
    /// disagreeing.
    pub fn set_access_token(&self, token: &str) -> Result<(), StoreError> {
        self.durable.set(ACCESS_TOKEN_KEY, token)?;
        if let Err(err) = self.session_scoped.set(ACCESS_TOKEN_KEY, token) {
            let _ = self.durable.remove(ACCESS_TOKEN_KEY);
            return Err(err);
        }
        Ok(())
    }

    /// Current access token: durable tier first, then session-scoped.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        read_optional(self.durable.as_ref(), ACCESS_TOKEN_KEY)
            .or_else(|| read_optional(self.session_scoped.as_ref(), ACCESS_TOKEN_KEY))
    }

    /// Store the refresh token (durable tier only).
    pub fn set_refresh_token(&self, token: &str) -> Result<(), StoreError> {
        self.durable.set(REFRESH_TOKEN_KEY, token)
    }

    /// Current refresh token, if any.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        read_optional(self.durable.as_ref(), REFRESH_TOKEN_KEY)
    }

    /// Persist the session record.
    pub fn set_session(&self, session: &UserSession) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(session)?;
        self.durable.set(USER_SESSION_KEY, &serialized)
    }

    /// Current session record. A corrupt stored value reads as no session.
    #[must_use]
    pub fn session(&self) -> Option<UserSession> {
        let raw = read_optional(self.durable.as_ref(), USER_SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                debug!(error = %err, "stored session record is corrupt, treating as absent");
                None
            }
        }
    }

    /// Whether the session is missing or past its expiry.
    #[must_use]
    pub fn is_token_expired(&self) -> bool {
        match self.session() {
            Some(session) => session.is_expired(),
            None => true,
        }
    }

    /// Whether a usable credential is present: a non-empty access token and
    /// an unexpired session.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        match self.access_token() {
            Some(token) if !token.is_empty() => !self.is_token_expired(),
            _ => false,
        }
    }

    /// Remove every persisted credential. Idempotent; individual removal
    /// failures are logged and do not stop the remaining removals.
    pub fn clear_auth(&self) {
        for (store, key) in [
            (self.durable.as_ref(), ACCESS_TOKEN_KEY),
            (self.durable.as_ref(), REFRESH_TOKEN_KEY),
            (self.durable.as_ref(), USER_SESSION_KEY),
            (self.session_scoped.as_ref(), ACCESS_TOKEN_KEY),
        ] {
            if let Err(err) = store.remove(key) {
                debug!(key, error = %err, "failed to remove credential entry");
            }
        }
    }

    /// Refresh the access token using the stored refresh token.
    ///
    /// Returns `false` without a network call when no refresh token is
    /// stored. On any refresh failure the store is cleared and `false` is
    /// returned; errors never propagate past this boundary.
    ///
    /// Concurrent callers coalesce onto one in-flight refresh: the first
    /// caller executes it, the rest observe its outcome.
    pub async fn refresh_tokens(&self) -> bool {
        let observed = self.refresh_generation.load(Ordering::Acquire);
        let _gate = self.refresh_gate.lock().await;
        if self.refresh_generation.load(Ordering::Acquire) != observed {
            debug!("token refresh already completed by a concurrent caller");
            return self.is_authenticated();
        }

        let outcome = self.do_refresh().await;
        self.refresh_generation.fetch_add(1, Ordering::AcqRel);
        outcome
    }

    async fn do_refresh(&self) -> bool {
        let Some(refresh_token) = self.refresh_token() else {
            debug!("no refresh token stored, skipping refresh");
            return false;
        };

        match self.refresh_api.refresh(&refresh_token).await {
            Ok(tokens) => self.apply_refreshed_tokens(&tokens),
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing credentials");
                self.clear_auth();
                false
            }
        }
    }

    /// Store the refreshed tokens and extend the session expiry by the
    /// server-provided TTL.
    fn apply_refreshed_tokens(&self, tokens: &AuthTokens) -> bool {
        if let Err(err) = self.set_access_token(&tokens.access_token) {
            warn!(error = %err, "failed to store refreshed access token");
            self.clear_auth();
            return false;
        }

        if let Some(refresh_token) = &tokens.refresh_token {
            if let Err(err) = self.set_refresh_token(refresh_token) {
                warn!(error = %err, "failed to store rotated refresh token");
                self.clear_auth();
                return false;
            }
        }

        if let Some(expires_in) = tokens.expires_in {
            if let Some(mut session) = self.session() {
                session.expires_at = now_millis() + expires_in * 1000;
                if let Err(err) = self.set_session(&session) {
                    warn!(error = %err, "failed to extend session expiry");
                    self.clear_auth();
                    return false;
                }
            }
        }

        info!("access token refreshed");
        true
    }
}

/// Read a key, folding storage errors into absence (logged at debug).
fn read_optional(store: &dyn SecretStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            debug!(key, error = %err, "storage read failed, treating as absent");
            None
        }
    }
}
