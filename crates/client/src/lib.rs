//! HTTP pipeline and typed resource clients for the Lectern admin API.
//!
//! Every outbound request flows through one pipeline:
//!
//! ```text
//! caller ──► RequestContext ──► interceptors (auth header) ──► network
//!                                                               │
//!            caller ◄── envelope decode ◄── retry pipeline ◄────┘
//!                          (401 refresh-retry / network retry, once)
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use lectern_client::{ApiClient, config};
//! use lectern_common::{HttpRefreshApi, MemoryStore, TokenStore};
//! use lectern_domain::ListQuery;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api_config = config::load()?;
//! let tokens = Arc::new(TokenStore::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(HttpRefreshApi::new(&api_config.base_url)),
//! ));
//!
//! let client = ApiClient::builder().config(api_config).tokens(tokens).build()?;
//! let schools = client.schools().list(&ListQuery::page(1, 25)).await?;
//! println!("{} schools", schools.meta.total_count);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod config;
pub mod errors;
pub mod middleware;
pub mod pipeline;
pub mod resources;

pub use errors::{ApiError, ApiErrorCategory};
pub use middleware::{AuthInterceptor, RequestContext, RequestInterceptor};
pub use pipeline::{ApiClient, ApiClientBuilder};
