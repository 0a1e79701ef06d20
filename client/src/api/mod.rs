//! HTTP client for the storefront API.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-success statuses, and decode failures each get
//! their own `ApiError` variant so callers can name the failing operation
//! precisely. No retries happen at this layer.

pub mod auth;
pub mod products;

use std::sync::Arc;

use reqwest::header::COOKIE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::session::SessionContext;

/// Error returned by API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{operation} returned {status}: {body}")]
    Status {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },
    #[error("{operation} response decode failed: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Storefront API client. Attaches the session cookie from the injected
/// context on every request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<SessionContext>,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig, session: Arc<SessionContext>) -> Self {
        Self { http: reqwest::Client::new(), config, session }
    }

    /// The injected session context, shared with the shell's actions.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.config.endpoint(path));
        if let Some(cookie) = self.session.cookie_header() {
            builder = builder.header(COOKIE, cookie);
        }
        builder
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        resp: Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|source| ApiError::Decode { operation, source })
    }

    async fn error_for_status(operation: &'static str, resp: Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ApiError::Status { operation, status, body }
    }
}
