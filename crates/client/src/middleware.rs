//! Outbound request descriptor and interceptors
//!
//! Interceptors are an ordered list of synchronous hooks run once per
//! logical request, before first transmission. They mutate the descriptor
//! and nothing else; retries re-use the mutated descriptor rather than
//! re-running the list.

use std::sync::Arc;

use lectern_common::TokenStore;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::warn;

/// Per-request descriptor carried through the pipeline.
///
/// `retried` is the request's single retry budget: one retry of either
/// kind (refresh-retry or network-retry), consumed by whichever failure
/// path hits it first.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
    pub retried: bool,
}

impl RequestContext {
    /// A descriptor for the given method and path (path is appended to the
    /// client's base URL and should start with `/`).
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self { method, path: path.into(), query: Vec::new(), headers, body: None, retried: false }
    }

    /// Attach URL query pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set (or overwrite) the bearer authorization header.
    pub fn set_bearer(&mut self, token: &str) {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                self.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                warn!("access token contains non-header-safe bytes, skipping auth header");
            }
        }
    }

    /// The current authorization header value, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
    }
}

/// Hook run over every outbound request before transmission.
pub trait RequestInterceptor: Send + Sync {
    /// Mutate the descriptor. Must not block or perform I/O beyond local
    /// storage reads.
    fn apply(&self, ctx: &mut RequestContext);
}

/// Attaches `Authorization: Bearer <token>` when a token is stored.
///
/// Reads the token store synchronously; a missing token leaves the request
/// untouched.
pub struct AuthInterceptor {
    tokens: Arc<TokenStore>,
}

impl AuthInterceptor {
    /// Create an interceptor over the shared token store.
    #[must_use]
    pub fn new(tokens: Arc<TokenStore>) -> Self {
        Self { tokens }
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn apply(&self, ctx: &mut RequestContext) {
        if let Some(token) = self.tokens.access_token() {
            ctx.set_bearer(&token);
        }
    }
}
