//! Key-value storage port for credentials and session records.
//!
//! Auth state never reaches for ambient global storage; every consumer is
//! handed a [`SecretStore`] handle. Adapters:
//!
//! - [`MemoryStore`]: process-local map; the session-scoped tier and the
//!   default test double
//! - [`FileStore`]: durable single-file JSON store with atomic writes
//! - [`KeyringStore`]: OS keychain (macOS Keychain, Windows Credential
//!   Manager, Linux Secret Service) via the `keyring` crate
//!
//! Atomicity is promised at single-key granularity only; callers must not
//! assume cross-key transactions.

mod file;
mod keyring;
mod memory;

pub use self::file::FileStore;
pub use self::keyring::KeyringStore;
pub use self::memory::MemoryStore;

use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Synchronous single-key secret storage.
///
/// Reads must not block on I/O longer than a local file or keychain probe;
/// interceptors rely on `get` being cheap enough to run on every request.
pub trait SecretStore: Send + Sync {
    /// Fetch a value. Absence is `Ok(None)`, never an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Whether a value exists for the key.
    fn contains(&self, key: &str) -> bool {
        matches!(self.get(key), Ok(Some(_)))
    }
}
