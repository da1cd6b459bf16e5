//! Search Server Module
//!
//! The HTTP layer of the search service. Each request is handled
//! independently and statelessly: the record store is reloaded fresh per
//! request, so identical requests are idempotent.
//!
//! ## Responsibilities
//! - **Authentication**: Exact-match check of the `AccessToken` header
//!   against the configured token.
//! - **Parsing**: Decoding the query-string parameters into engine input,
//!   with malformed numerics tolerated as zero.
//! - **Processing**: filter → sort → limit → skip via the query engine, with
//!   engine rejections contained as structured 400 responses.
//! - **Timeout fixture**: A sentinel token that delays the response, so
//!   client timeout handling can be exercised end to end.
//!
//! ## Submodules
//! - **`handlers`**: The axum request handler.
//! - **`protocol`**: Wire parameter names, reason codes and payload types.

pub mod handlers;
pub mod protocol;

#[cfg(test)]
mod tests;

use crate::store::loader::RecordStore;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use std::time::Duration;

/// Behavior knobs for one server instance.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The pre-shared credential every request must present.
    pub access_token: String,
    /// Sentinel token that triggers the artificial response delay.
    pub slow_token: String,
    /// How long the slow path withholds its response.
    pub slow_delay: Duration,
}

impl ServerConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            slow_token: "timeout".to_string(),
            slow_delay: Duration::from_secs(2),
        }
    }
}

/// Builds the search router with its injected collaborators.
pub fn router(store: Arc<dyn RecordStore>, config: Arc<ServerConfig>) -> Router {
    Router::new()
        .route(protocol::SEARCH_PATH, get(handlers::handle_search))
        .layer(Extension(store))
        .layer(Extension(config))
}
