//! Retrieval of remote documents over HTTP.

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::document::DocumentState;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reasons a document could not be fetched.
///
/// Messages are shown verbatim in the error card, so they stay on one line.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    /// The request could not be sent or the body could not be read.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Client settings for [`DocumentFetcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub timeout: Duration,
    /// Honor proxies from the environment (`HTTP_PROXY` and friends).
    pub system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            system_proxy: true,
        }
    }
}

/// Issues unauthenticated GET requests for documents.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    /// Builds the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns error if the TLS backend cannot be initialized.
    pub fn new(options: FetchOptions) -> Result<Self> {
        let mut builder = Client::builder().timeout(options.timeout);
        if !options.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-2xx responses and
    /// [`FetchError::Request`] for transport failures.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "Fetching document");

        let response = self.client.get(url).send().await.inspect_err(|e| {
            warn!(%url, error = %e, "Request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Upstream returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        debug!(%url, bytes = text.len(), "Fetched document");

        Ok(text)
    }

    /// Fetches `url` into a fresh [`DocumentState`].
    ///
    /// Blank URLs issue no request and yield an idle state.
    pub async fn load(&self, url: &str) -> DocumentState {
        let mut state = DocumentState::new();

        if let Some(ticket) = state.begin(url) {
            let result = self.fetch(url).await;
            state.resolve(ticket, result);
        }

        state
    }
}
