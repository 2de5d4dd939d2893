//! Error types for chapter fetching
//!
//! Two user-visible failure classes: the chapter file is absent or
//! malformed ([`FetchError::NotFound`]), or the transport itself failed
//! ([`FetchError::Network`]). Both degrade to inline hovercard text at
//! the render boundary; neither is ever fatal to a page.

use crate::document::ChapterKey;

/// Chapter fetch failure
///
/// `Clone` so concurrent waiters on a shared in-flight fetch can each
/// receive the error. Errors are never cached; the caller's next call
/// retries the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Non-success status, invalid JSON, or unrecognized fixture shape
    #[error("chapter not found: {key} ({reason})")]
    NotFound {
        /// The requested chapter
        key: ChapterKey,
        /// What made the response unusable
        reason: String,
    },

    /// Transport-level failure (connection, DNS, timeout)
    #[error("network error fetching {key}: {message}")]
    Network {
        /// The requested chapter
        key: ChapterKey,
        /// Transport diagnostic
        message: String,
    },
}

impl FetchError {
    /// Create a not-found error
    pub fn not_found(key: ChapterKey, reason: impl Into<String>) -> Self {
        Self::NotFound {
            key,
            reason: reason.into(),
        }
    }

    /// Create a network error
    pub fn network(key: ChapterKey, message: impl Into<String>) -> Self {
        Self::Network {
            key,
            message: message.into(),
        }
    }
}
