//! OS keychain storage adapter

use keyring::Entry;

use super::{SecretStore, StoreError};

/// Keychain-backed store using the platform credential service.
///
/// Keys map to keychain accounts under a fixed service name. Tests use
/// [`super::MemoryStore`] instead of this adapter; keychain access needs a
/// logged-in desktop session.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    /// Create a store namespaced by the given keychain service name
    /// (e.g. `"Lectern"`).
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self { service: service.into() }
    }

    fn entry(&self, key: &str) -> Result<Entry, StoreError> {
        Entry::new(&self.service, key).map_err(|err| StoreError::Backend(err.to_string()))
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entry(key)?.set_password(value).map_err(|err| StoreError::Backend(err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(StoreError::Backend(err.to_string())),
        }
    }
}
