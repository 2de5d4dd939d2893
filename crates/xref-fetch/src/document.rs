//! Canonical chapter documents and cache keys

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use xref_canon::{BookSlug, Canon};

/// Cache key for one chapter: `canon|slug|chapter`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterKey {
    /// Owning canon (routes the data directory)
    pub canon: Canon,
    /// Canonical book slug
    pub slug: BookSlug,
    /// Chapter number (1-based)
    pub chapter: u32,
}

impl ChapterKey {
    /// Build a key
    #[inline]
    #[must_use]
    pub fn new(canon: Canon, slug: BookSlug, chapter: u32) -> Self {
        Self {
            canon,
            slug,
            chapter,
        }
    }
}

impl Display for ChapterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.canon, self.slug, self.chapter)
    }
}

/// One verse of a chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number, unique within its chapter
    pub number: u32,
    /// Verse text
    pub text: String,
}

/// A fetched, normalized chapter: ordered verse list
///
/// Verses are sorted ascending and de-duplicated by number at the fetch
/// boundary; source fixtures do not guarantee order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDocument {
    /// Owning canon
    pub canon: Canon,
    /// Book slug
    pub slug: BookSlug,
    /// Chapter number
    pub chapter: u32,
    /// Verses, ascending by number
    pub verses: Vec<Verse>,
}

impl ChapterDocument {
    /// Verses with numbers in the inclusive range `[start, end]`
    #[must_use]
    pub fn verses_in(&self, start: u32, end: u32) -> Vec<Verse> {
        self.verses
            .iter()
            .filter(|v| v.number >= start && v.number <= end)
            .cloned()
            .collect()
    }

    /// Look up a single verse by number
    #[must_use]
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number == number)
    }
}

/// Per-book metadata from `_meta.json` (`{"chapters": N, "book": "Display"}`)
///
/// Sizes the chapter selector and bounds prev/next navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMeta {
    /// Number of chapters in the book
    pub chapters: u32,
    /// Display title, when the fixture carries one
    #[serde(default)]
    pub book: Option<String>,
}

impl BookMeta {
    /// Next chapter number, `None` past the last chapter
    #[inline]
    #[must_use]
    pub fn next_chapter(&self, current: u32) -> Option<u32> {
        (current < self.chapters).then(|| current + 1)
    }

    /// Previous chapter number, `None` before chapter 2
    #[inline]
    #[must_use]
    pub fn prev_chapter(&self, current: u32) -> Option<u32> {
        (current > 1).then(|| current - 1)
    }
}
