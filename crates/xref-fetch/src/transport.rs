//! Transport seam for chapter retrieval
//!
//! The store talks to [`ChapterTransport`] rather than to reqwest
//! directly, so tests can swap in a mock and count requests.

use async_trait::async_trait;

/// Transport-level failure, before any JSON interpretation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Server answered with a non-success status
    #[error("status {0}")]
    Status(u16),

    /// Request never produced a usable response
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Fetches raw bytes for a data URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChapterTransport: Send + Sync {
    /// GET the URL, returning the response body on a success status
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

/// Production transport backed by a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a fresh client
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport reusing an existing client
    #[inline]
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChapterTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}
