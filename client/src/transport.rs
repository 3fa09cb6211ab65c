//! Transport to the refresh endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Successful refresh response: the new access token and its lifetime.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshGrant {
    /// Fresh signed access token
    pub access_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// One refresh round-trip against the server.
///
/// Returns `None` on any failure - network error, non-success status or a
/// malformed body. The manager treats every `None` as "logged out"; there
/// is deliberately no error detail to retry on.
#[async_trait]
pub trait RefreshTransport: Send + Sync + 'static {
    async fn refresh(&self) -> Option<RefreshGrant>;
}

#[async_trait]
impl<T: RefreshTransport> RefreshTransport for Arc<T> {
    async fn refresh(&self) -> Option<RefreshGrant> {
        (**self).refresh().await
    }
}

/// HTTP transport: `POST` to the refresh endpoint with credentials
/// included. The client's cookie store carries the HttpOnly refresh
/// cookie; script-side code never sees it.
pub struct HttpRefreshTransport {
    client: reqwest::Client,
    refresh_url: String,
}

impl HttpRefreshTransport {
    /// Create a transport with its own cookie-keeping client.
    pub fn new(refresh_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            refresh_url: refresh_url.into(),
        })
    }

    /// Create a transport over an existing client (which must keep
    /// cookies, or every refresh will look logged out).
    pub fn with_client(client: reqwest::Client, refresh_url: impl Into<String>) -> Self {
        Self {
            client,
            refresh_url: refresh_url.into(),
        }
    }
}

#[async_trait]
impl RefreshTransport for HttpRefreshTransport {
    async fn refresh(&self) -> Option<RefreshGrant> {
        let response = match self.client.post(&self.refresh_url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "refresh request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "refresh rejected");
            return None;
        }

        match response.json::<RefreshGrant>().await {
            Ok(grant) => Some(grant),
            Err(err) => {
                warn!(error = %err, "refresh response malformed");
                None
            }
        }
    }
}
