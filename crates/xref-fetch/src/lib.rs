//! XRef Chapter Fetcher
//!
//! Resolves a `(canon, book-slug, chapter)` triple to a parsed
//! [`ChapterDocument`] over HTTP, behind a process-wide cache.
//!
//! # Architecture
//!
//! ```text
//! ChapterKey → ChapterStore ── cache hit ──────────────→ Arc<ChapterDocument>
//!                  │
//!                  └─ miss → ChapterTransport (HTTP) → shape normalization
//!                              (single-flight: concurrent misses for one
//!                               key share a single request)
//! ```
//!
//! Failed fetches are never cached; a later call after a transient
//! failure retries the network. On-disk chapter fixtures come in several
//! shapes; all are normalized into one canonical document at this
//! boundary so nothing downstream sees the variance.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod document;
pub mod error;
pub mod shape;
pub mod store;
pub mod transport;

pub use document::{BookMeta, ChapterDocument, ChapterKey, Verse};
pub use error::FetchError;
pub use store::ChapterStore;
pub use transport::{ChapterTransport, HttpTransport, TransportError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
