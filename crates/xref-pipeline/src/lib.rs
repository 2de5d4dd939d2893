//! XRef Pipeline
//!
//! Wires the four stages together behind one orchestrator:
//!
//! ```text
//! data-xref text → parse (xref-cite) → resolve (xref-canon)
//!                → fetch (xref-fetch, cached, single-flight)
//!                → render (xref-render) → hovercard content
//! ```
//!
//! Content mutation is communicated through an explicit event bus
//! ([`ContentEvents`]): the page glue emits "content changed" with the
//! current trigger payloads, and the pipeline re-binds its registry. No
//! ambient globals, no optimistic rescan probes.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use xref_fetch::HttpTransport;
//! use xref_pipeline::{PipelineConfig, XrefPipeline};
//!
//! # async fn example() {
//! let pipeline = XrefPipeline::new(PipelineConfig::default(), Arc::new(HttpTransport::new()));
//! if let Some(result) = pipeline.preview("1 Cor 13:4-7").await {
//!     println!("{}", result.to_html());
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod events;
pub mod pipeline;

pub use config::PipelineConfig;
pub use events::{ContentChanged, ContentEvents};
pub use pipeline::XrefPipeline;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
