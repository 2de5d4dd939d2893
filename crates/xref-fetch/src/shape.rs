//! Fixture shape normalization
//!
//! Chapter JSON exists on disk in three shapes:
//!
//! - `{"verses": [{"v": 1, "t": "..."}, ...]}`
//! - a bare array `[{"v": 1, "t": "...", "c": [...], "s": [...]}]`
//!   (with optional cross-reference and concordance-code fields)
//! - `{"<TranslationKey>": {"1": "text" | ["tokens"], ...}}`
//!
//! All three normalize into [`ChapterDocument`] here, once, so the rest
//! of the pipeline consumes a single canonical shape.

use crate::document::{ChapterDocument, ChapterKey, Verse};
use serde::Deserialize;
use std::collections::BTreeMap;

/// A verse as it appears in the list-style fixtures
#[derive(Debug, Deserialize)]
pub(crate) struct RawVerse {
    v: u32,
    #[serde(default)]
    t: String,
    // Cross-reference and concordance-code fields present in some
    // fixtures; parsed so the shape matches, not carried forward.
    #[serde(default)]
    #[allow(dead_code)]
    c: Vec<String>,
    #[serde(default)]
    #[allow(dead_code)]
    s: Vec<String>,
}

/// Verse text in keyed fixtures: plain string or token list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawText {
    /// Whole verse as one string
    Text(String),
    /// Verse pre-split into tokens, joined with single spaces
    Tokens(Vec<String>),
}

impl RawText {
    fn into_text(self) -> String {
        match self {
            Self::Text(t) => t,
            Self::Tokens(tokens) => tokens.join(" "),
        }
    }
}

/// The observed on-disk chapter shapes
///
/// Untagged; variants are tried in order, so the explicit `verses` form
/// wins before the keyed-object fallback.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawChapter {
    /// `{"verses": [...]}`
    VerseList {
        /// The verse list
        verses: Vec<RawVerse>,
    },
    /// Bare `[{v, t, c, s}]`
    Bare(Vec<RawVerse>),
    /// `{"<TranslationKey>": {"<verseNum>": text | [tokens]}}`
    Keyed(BTreeMap<String, BTreeMap<String, RawText>>),
}

impl RawChapter {
    /// Normalize into the canonical document: sorted ascending by verse
    /// number, duplicates dropped (first occurrence wins).
    pub(crate) fn into_document(self, key: &ChapterKey) -> Result<ChapterDocument, String> {
        let mut verses: Vec<Verse> = match self {
            Self::VerseList { verses } | Self::Bare(verses) => verses
                .into_iter()
                .map(|raw| Verse {
                    number: raw.v,
                    text: raw.t,
                })
                .collect(),
            Self::Keyed(translations) => {
                let (_, keyed) = translations
                    .into_iter()
                    .next()
                    .ok_or_else(|| "no translation key".to_string())?;
                keyed
                    .into_iter()
                    .filter_map(|(num, text)| {
                        num.trim().parse::<u32>().ok().map(|number| Verse {
                            number,
                            text: text.into_text(),
                        })
                    })
                    .collect()
            }
        };

        verses.retain(|v| v.number >= 1);
        verses.sort_by_key(|v| v.number);
        verses.dedup_by_key(|v| v.number);

        if verses.is_empty() {
            return Err("no verses".to_string());
        }

        Ok(ChapterDocument {
            canon: key.canon,
            slug: key.slug.clone(),
            chapter: key.chapter,
            verses,
        })
    }
}
