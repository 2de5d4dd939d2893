//! XRef Reference Renderer
//!
//! Turns a parsed reference plus its fetched chapter into a hovercard
//! preview: a title, up to four verses, and a deep link into the chapter
//! page. Also owns the single hovercard instance model - a two-state
//! machine (`Hidden` / `Showing`) with stale-response suppression and
//! viewport clamping, kept DOM-free so it is unit-testable.
//!
//! Every failure degrades to an inline error payload; nothing here is
//! ever fatal to a page.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod hovercard;
pub mod html;
pub mod preview;

pub use hovercard::{CardSize, Hovercard, HovercardState, Point, RequestToken, Viewport};
pub use html::escape_html;
pub use preview::{Preview, PreviewVerse, RenderResult, Renderer, PREVIEW_VERSE_CAP};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
