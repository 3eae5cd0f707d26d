//! Sign-in / sign-out endpoints
//!
//! The interactive identity-provider flow is external to this SDK; these
//! wrappers cover the backend's credential endpoints and keep the local
//! token store in step with them.

use lectern_common::auth::types::now_millis;
use lectern_common::{AuthTokens, NewSession, SessionManager, UserSession};
use serde::Deserialize;
use tracing::warn;

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(flatten)]
    tokens: AuthTokens,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: String,
    school_id: String,
    role: String,
    #[serde(default)]
    permissions: Vec<String>,
}

/// `/auth` endpoints.
pub struct AuthApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Sign in with backend credentials, persisting the issued tokens and
    /// the resulting session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserSession, ApiError> {
        let data: LoginData = self
            .api
            .post("/auth/login", &serde_json::json!({ "email": email, "password": password }))
            .await?;

        let tokens = self.api.tokens();
        tokens.set_access_token(&data.tokens.access_token).map_err(storage_error)?;
        if let Some(refresh_token) = &data.tokens.refresh_token {
            tokens.set_refresh_token(refresh_token).map_err(storage_error)?;
        }

        let session = SessionManager::new(tokens.clone())
            .create_session(NewSession {
                user_id: data.user.id,
                school_id: data.user.school_id,
                role: Some(data.user.role),
                permissions: Some(data.user.permissions),
                expires_at: data.tokens.expires_in.map(|secs| now_millis() + secs * 1000),
            })
            .map_err(storage_error)?;

        Ok(session)
    }

    /// Sign out, clearing local credentials even when the backend call
    /// fails.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let result: Result<serde_json::Value, ApiError> =
            self.api.post("/auth/logout", &serde_json::json!({})).await;

        if let Err(err) = result {
            warn!(error = %err, "sign-out request failed, clearing local credentials anyway");
        }

        self.api.tokens().clear_auth();
        Ok(())
    }
}

fn storage_error(err: lectern_common::StoreError) -> ApiError {
    ApiError::Storage(err.to_string())
}
