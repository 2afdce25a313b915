//! HTTP transport seam for the GitHub client.
//!
//! The client only ever issues unauthenticated GETs and needs the status code
//! and body back, so that is all the trait exposes. Tests plug in a canned
//! transport; production uses [`ReqwestTransport`].

use crate::domain::error::{FolioError, Result};
use std::future::Future;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Something that can perform a GET.
pub trait HttpTransport {
    /// Performs `GET url`.
    ///
    /// Any response, whatever its status, is `Ok`; only a request that never
    /// produced a response is an error.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Network`] when the request fails before a
    /// response arrives.
    fn get(&self, url: &str) -> impl Future<Output = Result<HttpResponse>>;
}

/// Transport backed by a `reqwest` async client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client with a user agent; the GitHub API rejects requests without one.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Network`] if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FolioError::Network(format!("client error: {e}")))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| FolioError::Network(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FolioError::Network(format!("failed to read body: {e}")))?;

        tracing::debug!(url = %url, status, body_len = body.len(), "GET completed");
        Ok(HttpResponse { status, body })
    }
}
