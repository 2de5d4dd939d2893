//! Cached chapter store
//!
//! Process-wide mapping from [`ChapterKey`] to fetched documents. Cache
//! population is single-flight: concurrent requests for one key share a
//! single network fetch, and every waiter observes the same resolved
//! document. Failed fetches are not cached, so a call after a transient
//! failure retries the network.

use crate::document::{BookMeta, ChapterDocument, ChapterKey};
use crate::error::FetchError;
use crate::shape::RawChapter;
use crate::transport::{ChapterTransport, TransportError};
use moka::future::Cache;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::sync::Arc;

/// Characters escaped in URL path segments
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'/');

/// Default cache capacity; chapters are small and page-lifetime
const DEFAULT_CAPACITY: u64 = 1024;

/// Cached, single-flight chapter fetcher
///
/// The transport is injected so tests run against a mock and production
/// runs against [`crate::HttpTransport`]. Cached documents have no TTL;
/// the underlying data is static and versioned by deployment.
#[derive(Clone)]
pub struct ChapterStore {
    transport: Arc<dyn ChapterTransport>,
    data_root: String,
    chapters: Cache<ChapterKey, Arc<ChapterDocument>>,
    metas: Cache<(xref_canon::Canon, xref_canon::BookSlug), Arc<BookMeta>>,
}

impl ChapterStore {
    /// Create a store over a transport and data root URL (no trailing slash)
    #[must_use]
    pub fn new(transport: Arc<dyn ChapterTransport>, data_root: impl Into<String>) -> Self {
        Self {
            transport,
            data_root: data_root.into(),
            chapters: Cache::builder().max_capacity(DEFAULT_CAPACITY).build(),
            metas: Cache::builder().max_capacity(DEFAULT_CAPACITY).build(),
        }
    }

    /// Data URL for a chapter: `{data_root}/{canon}/{slug}/{chapter}.json`
    #[must_use]
    pub fn chapter_url(&self, key: &ChapterKey) -> String {
        format!(
            "{}/{}/{}/{}.json",
            self.data_root,
            key.canon,
            utf8_percent_encode(key.slug.as_str(), SEGMENT),
            key.chapter
        )
    }

    /// Fetch a chapter, cache-first
    ///
    /// At most one network request is ever in flight per key; concurrent
    /// callers await the same fetch. Errors propagate to every waiter but
    /// are not stored.
    pub async fn fetch(&self, key: &ChapterKey) -> Result<Arc<ChapterDocument>, FetchError> {
        self.chapters
            .try_get_with(key.clone(), self.load_chapter(key.clone()))
            .await
            .map_err(|shared: Arc<FetchError>| (*shared).clone())
    }

    async fn load_chapter(&self, key: ChapterKey) -> Result<Arc<ChapterDocument>, FetchError> {
        let url = self.chapter_url(&key);
        tracing::debug!(%key, %url, "fetching chapter");

        let body = self.transport.get(&url).await.map_err(|e| match e {
            TransportError::Status(code) => {
                FetchError::not_found(key.clone(), format!("status {code}"))
            }
            TransportError::Transport(message) => FetchError::network(key.clone(), message),
        })?;

        let raw: RawChapter = serde_json::from_slice(&body)
            .map_err(|e| FetchError::not_found(key.clone(), format!("invalid JSON: {e}")))?;

        let document = raw
            .into_document(&key)
            .map_err(|reason| FetchError::not_found(key.clone(), reason))?;

        tracing::debug!(%key, verses = document.verses.len(), "chapter cached");
        Ok(Arc::new(document))
    }

    /// Fetch per-book metadata (`_meta.json`), cached like chapters
    pub async fn fetch_meta(
        &self,
        canon: xref_canon::Canon,
        slug: &xref_canon::BookSlug,
    ) -> Result<Arc<BookMeta>, FetchError> {
        let cache_key = (canon, slug.clone());
        let url = format!(
            "{}/{}/{}/_meta.json",
            self.data_root,
            canon,
            utf8_percent_encode(slug.as_str(), SEGMENT)
        );
        let key = ChapterKey::new(canon, slug.clone(), 0);

        self.metas
            .try_get_with(cache_key, async {
                tracing::debug!(%url, "fetching book meta");
                let body = self.transport.get(&url).await.map_err(|e| match e {
                    TransportError::Status(code) => {
                        FetchError::not_found(key.clone(), format!("status {code}"))
                    }
                    TransportError::Transport(message) => {
                        FetchError::network(key.clone(), message)
                    }
                })?;
                let meta: BookMeta = serde_json::from_slice(&body).map_err(|e| {
                    FetchError::not_found(key.clone(), format!("invalid JSON: {e}"))
                })?;
                Ok(Arc::new(meta))
            })
            .await
            .map_err(|shared: Arc<FetchError>| (*shared).clone())
    }

    /// Number of cached chapters (for diagnostics)
    #[must_use]
    pub fn cached_chapters(&self) -> u64 {
        self.chapters.entry_count()
    }
}

impl std::fmt::Debug for ChapterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapterStore")
            .field("data_root", &self.data_root)
            .field("cached_chapters", &self.chapters.entry_count())
            .finish_non_exhaustive()
    }
}
