//! The end-to-end citation pipeline
//!
//! Owns explicitly constructed instances of everything that was ambient
//! global state in the source scripts: the chapter store (one cache),
//! the hovercard (one instance), and a registry of bound triggers.

use crate::config::PipelineConfig;
use crate::events::ContentEvents;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::task::JoinHandle;
use xref_cite::{parse_all, ParsedReference};
use xref_fetch::{ChapterKey, ChapterStore, ChapterTransport};
use xref_render::{
    CardSize, Hovercard, HovercardState, Point, RenderResult, Renderer, Viewport,
};

/// Orchestrates parse → resolve → fetch → render for citation triggers
///
/// One instance per page. All state is owned and injected; nothing here
/// reads process-wide globals.
pub struct XrefPipeline {
    config: PipelineConfig,
    store: ChapterStore,
    renderer: Renderer,
    /// data-xref payload → its parsed references
    registry: DashMap<String, Vec<ParsedReference>>,
    hovercard: Mutex<Hovercard>,
}

impl XrefPipeline {
    /// Create a pipeline over an injected transport
    #[must_use]
    pub fn new(config: PipelineConfig, transport: Arc<dyn ChapterTransport>) -> Self {
        let store = ChapterStore::new(transport, config.data_root.clone());
        let renderer = Renderer::new(config.site_root.clone());
        Self {
            config,
            store,
            renderer,
            registry: DashMap::new(),
            hovercard: Mutex::new(Hovercard::new()),
        }
    }

    /// The pipeline's configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The underlying chapter store (shared cache)
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ChapterStore {
        &self.store
    }

    /// Bind a batch of `data-xref` trigger payloads
    ///
    /// Unparseable payloads are skipped silently (their text stays
    /// plain); valid ones enter the registry so hover handling is a
    /// lookup. Returns the number of triggers bound.
    pub fn bind(&self, triggers: &[String]) -> usize {
        let mut bound = 0;
        for trigger in triggers {
            let refs = parse_all(trigger);
            if refs.is_empty() {
                tracing::trace!(%trigger, "skipped non-citation trigger");
                continue;
            }
            self.registry.insert(trigger.clone(), refs);
            bound += 1;
        }
        tracing::debug!(bound, total = self.registry.len(), "triggers bound");
        bound
    }

    /// Scan prose for citations and bind each find as a trigger
    ///
    /// Returns the matched citation texts in order of appearance; the
    /// page glue wraps those spans in `data-xref` trigger elements.
    /// Unresolvable matches are left out, so their text stays plain.
    pub fn scan_and_bind(&self, text: &str) -> Vec<String> {
        xref_cite::scan(text)
            .into_iter()
            .map(|found| {
                self.registry.insert(found.text.clone(), found.references);
                found.text
            })
            .collect()
    }

    /// Number of triggers currently bound
    #[must_use]
    pub fn bound_triggers(&self) -> usize {
        self.registry.len()
    }

    /// References for a trigger: registry hit, or parsed on demand
    fn refs_for(&self, trigger: &str) -> Vec<ParsedReference> {
        if let Some(entry) = self.registry.get(trigger) {
            return entry.clone();
        }
        parse_all(trigger)
    }

    /// Preview the leading reference of a trigger
    ///
    /// `None` means "not a citation": the caller leaves the text
    /// unlinked. Fetch failures come back as the uniform inline error
    /// payload; file-absent and offline are deliberately
    /// indistinguishable to the user.
    pub async fn preview(&self, trigger: &str) -> Option<RenderResult> {
        self.preview_all(trigger).await.into_iter().next()
    }

    /// Preview every disjoint segment of a trigger (`"Rev 20:3,8"`)
    ///
    /// All segments share one chapter, so this costs at most one fetch.
    pub async fn preview_all(&self, trigger: &str) -> Vec<RenderResult> {
        let refs = self.refs_for(trigger);
        let Some(head) = refs.first() else {
            return Vec::new();
        };

        let key = ChapterKey::new(
            head.canonical.canon,
            head.canonical.slug.clone(),
            head.chapter,
        );
        let doc = match self.store.fetch(&key).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(%key, error = %e, "chapter fetch failed");
                return refs.iter().map(|_| RenderResult::not_found()).collect();
            }
        };

        refs.iter()
            .map(|reference| self.renderer.render(reference, &doc))
            .collect()
    }

    /// Full hover flow: fetch, render, and present on the hovercard
    ///
    /// Returns `true` when the card now shows this trigger's content.
    /// A hover superseded by a newer one while its fetch was in flight
    /// presents nothing (its render is discarded; the fetch still
    /// populated the cache for later hovers).
    pub async fn hover(
        &self,
        trigger: &str,
        anchor: Point,
        card: CardSize,
        viewport: Viewport,
    ) -> bool {
        let token = self.hovercard.lock().begin_request();
        let Some(result) = self.preview(trigger).await else {
            return false;
        };
        let html = result.to_html();
        self.hovercard.lock().present(token, html, anchor, card, viewport)
    }

    /// Hide the hovercard (hover leave, scroll, outside click)
    pub fn dismiss(&self) {
        self.hovercard.lock().dismiss();
    }

    /// Current hovercard state
    #[must_use]
    pub fn hovercard_state(&self) -> HovercardState {
        self.hovercard.lock().state()
    }

    /// Current hovercard content, when showing
    #[must_use]
    pub fn hovercard_content(&self) -> Option<String> {
        self.hovercard.lock().content().map(String::from)
    }

    /// Subscribe to content mutations, re-binding on every event
    ///
    /// Spawns the listener task; it ends when the bus is dropped.
    pub fn watch(self: &Arc<Self>, events: &ContentEvents) -> JoinHandle<()> {
        let mut rx = events.subscribe();
        let pipeline = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => {
                        pipeline.bind(&event.triggers);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "content events lagged; continuing");
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl std::fmt::Debug for XrefPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XrefPipeline")
            .field("config", &self.config)
            .field("bound_triggers", &self.registry.len())
            .finish_non_exhaustive()
    }
}
