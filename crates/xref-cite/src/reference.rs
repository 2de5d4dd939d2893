//! Structured citation references

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use xref_canon::CanonicalBook;

/// A parsed citation: book, chapter, and an inclusive verse range
///
/// Constructed fresh per citation occurrence, immutable afterwards.
/// A bare `Book C:V` (no explicit end verse) carries
/// `verse_end == verse_start`.
///
/// # Invariants
/// - `chapter >= 1`
/// - `1 <= verse_start <= verse_end`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedReference {
    /// The book label as it appeared in the source text (`"1 Cor"`)
    pub book: String,
    /// Resolved canonical book (slug + canon)
    pub canonical: CanonicalBook,
    /// Chapter number
    pub chapter: u32,
    /// First verse of the range
    pub verse_start: u32,
    /// Last verse of the range (equal to `verse_start` for single verses)
    pub verse_end: u32,
}

impl ParsedReference {
    /// Whether the reference spans more than one verse
    #[inline]
    #[must_use]
    pub fn is_range(&self) -> bool {
        self.verse_end > self.verse_start
    }
}

impl Display for ParsedReference {
    /// Renders `Book C:V` or `Book C:V-V2`; [`crate::parse`] round-trips it.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse_start)?;
        if self.is_range() {
            write!(f, "-{}", self.verse_end)?;
        }
        Ok(())
    }
}
