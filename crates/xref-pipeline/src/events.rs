//! Content-change event bus
//!
//! Replaces the original pattern of optimistically probing window
//! globals (`window.rescanXrefs`, `window.Citations.bind`) after DOM
//! mutation. Here the content-mutating side emits one event carrying the
//! current trigger payloads; the pipeline subscribes once at startup.

use tokio::sync::broadcast;

/// Default buffered event capacity
const DEFAULT_CAPACITY: usize = 32;

/// Payload of a content mutation: the `data-xref` values now present
#[derive(Debug, Clone)]
pub struct ContentChanged {
    /// All citation trigger payloads in the mutated content
    pub triggers: Vec<String>,
}

/// Broadcast bus for content mutations
#[derive(Debug, Clone)]
pub struct ContentEvents {
    tx: broadcast::Sender<ContentChanged>,
}

impl ContentEvents {
    /// Create a bus with the given buffer capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to content mutations
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ContentChanged> {
        self.tx.subscribe()
    }

    /// Emit a mutation; returns the number of live subscribers
    pub fn emit(&self, event: ContentChanged) -> usize {
        // A send error only means nobody is listening yet.
        self.tx.send(event).unwrap_or(0)
    }
}

impl Default for ContentEvents {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
