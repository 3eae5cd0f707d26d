//! Session creation, merge updates, and permission checks

use std::sync::Arc;

use tracing::debug;

use super::token_store::TokenStore;
use super::types::{now_millis, UserSession};
use crate::store::StoreError;

/// Permission that implicitly grants every other permission.
pub const ADMIN_PERMISSION: &str = "admin";

/// Role assigned when a session is created without one.
pub const DEFAULT_ROLE: &str = "user";

/// Default session lifetime when none is given: 24 hours.
const DEFAULT_SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Fields for creating a session; omitted fields take defaults.
#[derive(Debug, Clone, Default)]
pub struct NewSession {
    pub user_id: String,
    pub school_id: String,
    pub role: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub expires_at: Option<i64>,
}

/// Merge payload for an existing session; unset fields keep their values.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub user_id: Option<String>,
    pub school_id: Option<String>,
    pub role: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub expires_at: Option<i64>,
}

/// Permission and session façade over a shared [`TokenStore`].
#[derive(Clone)]
pub struct SessionManager {
    tokens: Arc<TokenStore>,
}

impl SessionManager {
    /// Create a manager over the given token store.
    #[must_use]
    pub fn new(tokens: Arc<TokenStore>) -> Self {
        Self { tokens }
    }

    /// Build and persist a session, defaulting the role to
    /// [`DEFAULT_ROLE`], permissions to empty, and expiry to 24 hours from
    /// now.
    pub fn create_session(&self, fields: NewSession) -> Result<UserSession, StoreError> {
        let session = UserSession {
            user_id: fields.user_id,
            school_id: fields.school_id,
            role: fields.role.unwrap_or_else(|| DEFAULT_ROLE.to_owned()),
            permissions: fields.permissions.unwrap_or_default(),
            expires_at: fields.expires_at.unwrap_or_else(|| now_millis() + DEFAULT_SESSION_TTL_MS),
        };

        self.tokens.set_session(&session)?;
        debug!(user_id = %session.user_id, role = %session.role, "session created");
        Ok(session)
    }

    /// Merge the patch over the current session and persist the result.
    ///
    /// Returns `Ok(None)` without touching storage when no session exists.
    pub fn update_session(&self, patch: SessionPatch) -> Result<Option<UserSession>, StoreError> {
        let Some(mut session) = self.tokens.session() else {
            return Ok(None);
        };

        if let Some(user_id) = patch.user_id {
            session.user_id = user_id;
        }
        if let Some(school_id) = patch.school_id {
            session.school_id = school_id;
        }
        if let Some(role) = patch.role {
            session.role = role;
        }
        if let Some(permissions) = patch.permissions {
            session.permissions = permissions;
        }
        if let Some(expires_at) = patch.expires_at {
            session.expires_at = expires_at;
        }

        self.tokens.set_session(&session)?;
        Ok(Some(session))
    }

    /// Whether the current session grants the permission. The
    /// [`ADMIN_PERMISSION`] sentinel grants everything; no session grants
    /// nothing.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        match self.tokens.session() {
            Some(session) => session
                .permissions
                .iter()
                .any(|granted| granted == permission || granted == ADMIN_PERMISSION),
            None => false,
        }
    }

    /// Whether any of the permissions is granted.
    #[must_use]
    pub fn has_any_permission(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|permission| self.has_permission(permission))
    }

    /// Whether every one of the permissions is granted.
    #[must_use]
    pub fn has_all_permissions(&self, permissions: &[&str]) -> bool {
        permissions.iter().all(|permission| self.has_permission(permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::testing::MockRefreshApi;

    fn manager() -> SessionManager {
        let tokens = Arc::new(TokenStore::new(
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
            Arc::new(MockRefreshApi::default()),
        ));
        SessionManager::new(tokens)
    }

    #[test]
    fn create_session_applies_defaults() {
        let manager = manager();
        let before = now_millis();

        let session = manager
            .create_session(NewSession {
                user_id: "u1".to_owned(),
                school_id: "s1".to_owned(),
                ..NewSession::default()
            })
            .unwrap();

        assert_eq!(session.role, DEFAULT_ROLE);
        assert!(session.permissions.is_empty());
        assert!(session.expires_at >= before + DEFAULT_SESSION_TTL_MS);
        assert!(session.expires_at <= now_millis() + DEFAULT_SESSION_TTL_MS);
    }

    #[test]
    fn update_without_session_is_a_noop() {
        let manager = manager();
        let updated = manager
            .update_session(SessionPatch { role: Some("editor".to_owned()), ..SessionPatch::default() })
            .unwrap();
        assert!(updated.is_none());
        assert!(!manager.has_permission("anything"));
    }

    #[test]
    fn update_merges_over_existing_fields() {
        let manager = manager();
        manager
            .create_session(NewSession {
                user_id: "u1".to_owned(),
                school_id: "s1".to_owned(),
                role: Some("school_manager".to_owned()),
                permissions: Some(vec!["schools.read".to_owned()]),
                ..NewSession::default()
            })
            .unwrap();

        let updated = manager
            .update_session(SessionPatch { role: Some("editor".to_owned()), ..SessionPatch::default() })
            .unwrap()
            .unwrap();

        assert_eq!(updated.role, "editor");
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.permissions, vec!["schools.read".to_owned()]);
    }

    #[test]
    fn admin_permission_grants_everything() {
        let manager = manager();
        manager
            .create_session(NewSession {
                user_id: "u1".to_owned(),
                school_id: "s1".to_owned(),
                permissions: Some(vec![ADMIN_PERMISSION.to_owned()]),
                ..NewSession::default()
            })
            .unwrap();

        assert!(manager.has_permission("schools.delete"));
        assert!(manager.has_permission("never.granted.explicitly"));
        assert!(manager.has_all_permissions(&["a", "b", "c"]));
    }

    #[test]
    fn quantified_combinators() {
        let manager = manager();
        manager
            .create_session(NewSession {
                user_id: "u1".to_owned(),
                school_id: "s1".to_owned(),
                permissions: Some(vec!["schools.read".to_owned(), "students.read".to_owned()]),
                ..NewSession::default()
            })
            .unwrap();

        assert!(manager.has_any_permission(&["schools.write", "students.read"]));
        assert!(!manager.has_any_permission(&["schools.write", "admins.write"]));
        assert!(manager.has_all_permissions(&["schools.read", "students.read"]));
        assert!(!manager.has_all_permissions(&["schools.read", "schools.write"]));
    }

    #[test]
    fn no_session_grants_nothing() {
        let manager = manager();
        assert!(!manager.has_permission(ADMIN_PERMISSION));
        assert!(!manager.has_any_permission(&["a"]));
        // Vacuous truth over the empty list, matching the quantifier
        assert!(manager.has_all_permissions(&[]));
    }
}
