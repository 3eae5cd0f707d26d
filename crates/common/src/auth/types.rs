//! Token and session data structures

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall-clock time as epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Token payload returned by the authentication backend.
///
/// `POST /auth/refresh` responds with this shape; `refresh_token` is only
/// present when the backend rotates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Locally cached record of the authenticated subject.
///
/// `expires_at` is an absolute epoch-millisecond timestamp. A missing
/// record is treated as an expired session everywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub user_id: String,
    pub school_id: String,
    pub role: String,
    pub permissions: Vec<String>,
    pub expires_at: i64,
}

impl UserSession {
    /// Whether the session has reached its expiry.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        now_millis() >= self.expires_at
    }

    /// Milliseconds until expiry (negative once expired).
    #[must_use]
    pub fn millis_until_expiry(&self) -> i64 {
        self.expires_at - now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expiry_is_absolute() {
        let live = UserSession {
            user_id: "u1".to_owned(),
            school_id: "s1".to_owned(),
            role: "admin".to_owned(),
            permissions: vec!["admin".to_owned()],
            expires_at: now_millis() + 60_000,
        };
        assert!(!live.is_expired());
        assert!(live.millis_until_expiry() > 59_000);

        let stale = UserSession { expires_at: now_millis() - 1, ..live };
        assert!(stale.is_expired());
    }

    #[test]
    fn auth_tokens_parse_with_optional_fields_absent() {
        let tokens: AuthTokens = serde_json::from_str(r#"{"access_token":"T1"}"#).unwrap();
        assert_eq!(tokens.access_token, "T1");
        assert!(tokens.refresh_token.is_none());
        assert!(tokens.expires_in.is_none());
        assert!(tokens.token_type.is_none());
    }
}
