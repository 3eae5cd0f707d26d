//! Token persistence and session/permission logic.
//!
//! The flow mirrors what the platform's admin tooling needs:
//!
//! ```text
//! ┌──────────────────┐
//! │  SessionManager  │  permission checks, session create/merge
//! └────────┬─────────┘
//!          │
//!          └──► TokenStore          (credential lifecycle + refresh)
//!                    │
//!                    ├──► SecretStore ×2   (durable + session-scoped tiers)
//!                    └──► RefreshApi       (POST /auth/refresh port)
//! ```
//!
//! The [`TokenStore`] is an injected service object; nothing in this module
//! touches ambient global state.

pub mod refresh;
pub mod session;
pub mod token_store;
pub mod types;

pub use refresh::{HttpRefreshApi, RefreshApi, RefreshError};
pub use session::{NewSession, SessionManager, SessionPatch, ADMIN_PERMISSION, DEFAULT_ROLE};
pub use token_store::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_SESSION_KEY};
pub use types::{AuthTokens, UserSession};
