//! Credential and session utilities shared across Lectern crates.
//!
//! # Modules
//!
//! - [`store`]: key-value storage port with in-memory, file-backed, and
//!   OS-keychain adapters
//! - [`auth`]: token persistence, session/permission logic, and the
//!   refresh-endpoint port
//! - [`testing`]: test doubles for the above

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod store;
pub mod testing;

// Re-export commonly used types for convenience
pub use auth::{
    AuthTokens, HttpRefreshApi, NewSession, RefreshApi, RefreshError, SessionManager,
    SessionPatch, TokenStore, UserSession,
};
pub use store::{FileStore, KeyringStore, MemoryStore, SecretStore, StoreError};
