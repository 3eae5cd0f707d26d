//! API client with the request/response interception pipeline
//!
//! Per request the pipeline walks
//! `INITIAL → SENT → {SUCCEEDED | FAILED_SERVER | FAILED_NETWORK}` with at
//! most one `RETRYING` transition, funded by the request's single retry
//! budget:
//!
//! - 401 with budget left: refresh tokens, rewrite the auth header,
//!   re-issue once
//! - transport failure with budget left: re-issue once
//! - everything else: propagate unchanged
//!
//! The pipeline never converts a failure into a success and never reshapes
//! payloads; the typed helpers below decode the backend envelope once a
//! response settles.

use std::sync::Arc;
use std::time::Duration;

use lectern_common::TokenStore;
use lectern_domain::{ApiConfig, ApiEnvelope};
use reqwest::{Method, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::errors::ApiError;
use crate::middleware::{AuthInterceptor, RequestContext, RequestInterceptor};
use crate::resources::{
    AdminsApi, AnalyticsApi, AuthApi, BooksApi, DashboardApi, LeaderboardApi, SchoolsApi,
    StudentsApi,
};

/// HTTP client for the Lectern admin API.
///
/// Cheap to clone via the builder's shared handles; hold one per process
/// and share it.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    tokens: Arc<TokenStore>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClient {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The shared token store this client authenticates with.
    #[must_use]
    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }

    /// Send a request descriptor through the full pipeline and return the
    /// settled response.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] once the retry budget is spent
    /// or for non-retryable failures.
    pub async fn send(&self, mut ctx: RequestContext) -> Result<Response, ApiError> {
        for interceptor in &self.interceptors {
            interceptor.apply(&mut ctx);
        }

        loop {
            let request = self.build_request(&ctx)?;
            let url = request.url().clone();
            debug!(method = %ctx.method, %url, retried = ctx.retried, "sending request");

            match self.http.execute(request).await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if status == StatusCode::UNAUTHORIZED && !ctx.retried {
                        ctx.retried = true;
                        warn!(%url, "401 received, attempting token refresh");

                        if self.tokens.refresh_tokens().await {
                            if let Some(token) = self.tokens.access_token() {
                                ctx.set_bearer(&token);
                                continue;
                            }
                        }
                        warn!(%url, "token refresh failed, surfacing original 401");
                    }

                    let body = response.text().await.unwrap_or_default();
                    return Err(ApiError::from_status(status, url.as_str(), body));
                }
                // Setup errors (unsupported scheme, malformed request) are
                // not transport failures; they propagate without consuming
                // the retry budget.
                Err(err) if err.is_builder() => {
                    return Err(ApiError::Config(format!("request setup failed: {err}")));
                }
                Err(err) => {
                    if !ctx.retried {
                        ctx.retried = true;
                        warn!(%url, error = %err, "transport failure, retrying once");
                        continue;
                    }
                    return Err(self.map_transport_error(&err));
                }
            }
        }
    }

    /// Execute a GET request and decode the envelope payload.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(RequestContext::new(Method::GET, path)).await?;
        decode(response).await
    }

    /// Execute a GET request with query parameters and decode the payload.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, ApiError> {
        let ctx = RequestContext::new(Method::GET, path).with_query(query);
        let response = self.send(ctx).await?;
        decode(response).await
    }

    /// Execute a POST request and decode the payload.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let ctx = RequestContext::new(Method::POST, path).with_body(to_body(body)?);
        let response = self.send(ctx).await?;
        decode(response).await
    }

    /// Execute a PUT request and decode the payload.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let ctx = RequestContext::new(Method::PUT, path).with_body(to_body(body)?);
        let response = self.send(ctx).await?;
        decode(response).await
    }

    /// Execute a PATCH request and decode the payload.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let ctx = RequestContext::new(Method::PATCH, path).with_body(to_body(body)?);
        let response = self.send(ctx).await?;
        decode(response).await
    }

    /// Execute a DELETE request, discarding the envelope payload.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(RequestContext::new(Method::DELETE, path)).await?;
        decode::<serde_json::Value>(response).await.map(|_| ())
    }

    /// Probe the API's health endpoint.
    ///
    /// Returns `Ok(true)` when the API answers with a success status,
    /// `Ok(false)` on a non-success answer.
    ///
    /// # Errors
    ///
    /// Returns an error only when no answer was received at all.
    pub async fn health_check(&self) -> Result<bool, ApiError> {
        let ctx = RequestContext::new(Method::GET, "/admins/health");
        match self.send(ctx).await {
            Ok(_) => Ok(true),
            Err(err) if err.category() == crate::errors::ApiErrorCategory::Network => Err(err),
            Err(_) => Ok(false),
        }
    }

    fn build_request(&self, ctx: &RequestContext) -> Result<Request, ApiError> {
        let url = format!("{}{}", self.base_url, ctx.path);
        let mut builder = self.http.request(ctx.method.clone(), &url).headers(ctx.headers.clone());

        if !ctx.query.is_empty() {
            builder = builder.query(&ctx.query);
        }
        if let Some(body) = &ctx.body {
            builder = builder.json(body);
        }

        builder
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build request for {url}: {err}")))
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Network(err.to_string())
        }
    }

    // --- typed resource accessors ------------------------------------

    /// Administrator accounts.
    #[must_use]
    pub fn admins(&self) -> AdminsApi<'_> {
        AdminsApi::new(self)
    }

    /// Schools.
    #[must_use]
    pub fn schools(&self) -> SchoolsApi<'_> {
        SchoolsApi::new(self)
    }

    /// Student accounts.
    #[must_use]
    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(self)
    }

    /// Ebook catalogue.
    #[must_use]
    pub fn books(&self) -> BooksApi<'_> {
        BooksApi::new(self)
    }

    /// Per-school reading analysis.
    #[must_use]
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    /// Reading leaderboards.
    #[must_use]
    pub fn leaderboard(&self) -> LeaderboardApi<'_> {
        LeaderboardApi::new(self)
    }

    /// Dashboard aggregates.
    #[must_use]
    pub fn dashboard(&self) -> DashboardApi<'_> {
        DashboardApi::new(self)
    }

    /// Sign-in / sign-out.
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }
}

/// Decode a settled response's envelope into its payload.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let url = response.url().clone();
    let envelope: ApiEnvelope<serde_json::Value> = response
        .json()
        .await
        .map_err(|err| ApiError::Client(format!("failed to parse response from {url}: {err}")))?;

    if !envelope.success {
        return Err(ApiError::Client(envelope.failure_message().to_owned()));
    }

    serde_json::from_value(envelope.data)
        .map_err(|err| ApiError::Client(format!("unexpected payload shape from {url}: {err}")))
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::Client(format!("failed to serialize request body: {err}")))
}

/// Builder for [`ApiClient`].
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    tokens: Option<Arc<TokenStore>>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the API configuration.
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the shared token store (required).
    #[must_use]
    pub fn tokens(mut self, tokens: Arc<TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Append a request interceptor; runs after the auth interceptor in
    /// registration order.
    #[must_use]
    pub fn interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` when the token store is missing, the base
    /// URL does not parse, or the underlying HTTP client cannot be built.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let tokens =
            self.tokens.ok_or_else(|| ApiError::Config("token store not set".to_owned()))?;

        Url::parse(&config.base_url)
            .map_err(|err| ApiError::Config(format!("invalid base URL {}: {err}", config.base_url)))?;

        let timeout = config.timeout();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        let mut interceptors: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(AuthInterceptor::new(tokens.clone()))];
        interceptors.extend(self.interceptors);

        Ok(ApiClient { http, base_url: config.base_url, timeout, tokens, interceptors })
    }
}
