//! Canonical book identifiers
//!
//! A [`BookSlug`] is the URL-safe lowercase-hyphenated id a book is known
//! by everywhere downstream of resolution (`1-corinthians`, `song-of-songs`).

use crate::canon::Canon;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Connectives kept lowercase in display names (unless leading)
const LOWERCASE_WORDS: &[&str] = &["of", "and", "the"];

/// Canonical, URL-safe book identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookSlug(String);

impl BookSlug {
    /// Wrap an already-canonical slug string
    #[inline]
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The slug as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable book name: hyphens to spaces, words title-cased
    ///
    /// Connectives stay lowercase after the first word, following
    /// conventional book titling: `1-corinthians` → `1 Corinthians`,
    /// `song-of-songs` → `Song of Songs`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0
            .split('-')
            .enumerate()
            .map(|(i, word)| {
                if i > 0 && LOWERCASE_WORDS.contains(&word) {
                    return word.to_string();
                }
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for BookSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookSlug {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A resolved book: canonical slug plus the canon that owns it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalBook {
    /// Canonical slug
    pub slug: BookSlug,
    /// Owning canon
    pub canon: Canon,
}

impl CanonicalBook {
    /// Build from a slug, classifying the canon by set membership
    #[must_use]
    pub fn from_slug(slug: BookSlug) -> Self {
        let canon = Canon::of_slug(&slug);
        Self { slug, canon }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_name_title_cases_hyphenated_words() {
        assert_eq!(BookSlug::new("1-corinthians").display_name(), "1 Corinthians");
        assert_eq!(BookSlug::new("genesis").display_name(), "Genesis");
    }

    #[test]
    fn display_name_keeps_connectives_lowercase() {
        assert_eq!(BookSlug::new("song-of-songs").display_name(), "Song of Songs");
        assert_eq!(
            BookSlug::new("bel-and-the-dragon").display_name(),
            "Bel and the Dragon"
        );
        assert_eq!(
            BookSlug::new("wisdom-of-solomon").display_name(),
            "Wisdom of Solomon"
        );
    }

    #[test]
    fn from_slug_classifies_canon() {
        let book = CanonicalBook::from_slug(BookSlug::new("tobit"));
        assert_eq!(book.canon, Canon::Apocrypha);
    }
}
