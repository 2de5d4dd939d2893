//! Preview construction and deep links

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use xref_cite::ParsedReference;
use xref_fetch::ChapterDocument;

/// Hover previews show at most this many verses
///
/// A UI constraint, not a data limitation: longer ranges are silently
/// truncated, never errored.
pub const PREVIEW_VERSE_CAP: u32 = 4;

/// Message shown for any unfetchable or empty reference
const NOT_FOUND_MESSAGE: &str = "Reference not found.";

/// Characters escaped in URL query values
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'&')
    .add(b'%');

/// One verse of a preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewVerse {
    /// Verse number
    pub number: u32,
    /// Verse text
    pub text: String,
}

/// A renderable hovercard payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Card title, e.g. `1 Corinthians 13:4–7`
    pub title: String,
    /// Up to [`PREVIEW_VERSE_CAP`] verses, ascending
    pub verses: Vec<PreviewVerse>,
    /// Deep link into the chapter page, anchored at the first verse
    pub deep_link: String,
}

/// Outcome of rendering a reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderResult {
    /// A preview ready for the hovercard
    Preview(Preview),
    /// Human-readable failure, shown inline in the card
    Error {
        /// One-line message
        message: String,
    },
}

impl RenderResult {
    /// The uniform inline failure payload
    #[inline]
    #[must_use]
    pub fn not_found() -> Self {
        Self::Error {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

/// Builds previews and deep links for a site
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    /// Prefix for deep links (empty for root-hosted sites)
    site_root: String,
}

impl Renderer {
    /// Create a renderer with a site root prefix (no trailing slash)
    #[inline]
    #[must_use]
    pub fn new(site_root: impl Into<String>) -> Self {
        Self {
            site_root: site_root.into(),
        }
    }

    /// Deep link: `{site_root}/{canon}/chapter.html?book={slug}&ch={chapter}#v{verse}`
    ///
    /// The `#vN` fragment is the scroll-anchor convention of the
    /// chapter-rendering pages.
    #[must_use]
    pub fn deep_link(&self, reference: &ParsedReference) -> String {
        format!(
            "{}/{}/chapter.html?book={}&ch={}#v{}",
            self.site_root,
            reference.canonical.canon,
            utf8_percent_encode(reference.canonical.slug.as_str(), QUERY),
            reference.chapter,
            reference.verse_start
        )
    }

    /// Card title: display book name, chapter, and the requested range
    /// (en dash), e.g. `1 Corinthians 13:4–7`
    #[must_use]
    pub fn title(&self, reference: &ParsedReference) -> String {
        let mut title = format!(
            "{} {}:{}",
            reference.canonical.slug.display_name(),
            reference.chapter,
            reference.verse_start
        );
        if reference.is_range() {
            title.push('\u{2013}');
            title.push_str(&reference.verse_end.to_string());
        }
        title
    }

    /// Render a reference against its fetched chapter
    ///
    /// Selects verses in `[verse_start, min(verse_end, verse_start + 3)]`.
    /// A selection that matches nothing in the chapter degrades to the
    /// inline not-found payload.
    #[must_use]
    pub fn render(&self, reference: &ParsedReference, doc: &ChapterDocument) -> RenderResult {
        let start = reference.verse_start;
        let end = reference
            .verse_end
            .min(start.saturating_add(PREVIEW_VERSE_CAP - 1));

        let verses: Vec<PreviewVerse> = doc
            .verses_in(start, end)
            .into_iter()
            .take(PREVIEW_VERSE_CAP as usize)
            .map(|v| PreviewVerse {
                number: v.number,
                text: v.text,
            })
            .collect();

        if verses.is_empty() {
            return RenderResult::not_found();
        }

        RenderResult::Preview(Preview {
            title: self.title(reference),
            verses,
            deep_link: self.deep_link(reference),
        })
    }
}
