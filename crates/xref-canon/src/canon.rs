//! Canon classification
//!
//! The three textual collections partitioning all book slugs. Membership
//! is decided by static set lookup: the Apocrypha set is checked first,
//! then the Old-Testament set, and anything else is New Testament. The
//! smaller, more specific sets win so that naming collisions cannot
//! misroute a slug.

use crate::slug::BookSlug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One of the three textual collections that own every book slug.
///
/// The serialized form doubles as the URL path segment and the
/// data-directory segment (`tanakh`, `newtestament`, `apocrypha`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Canon {
    /// The Hebrew Bible / Old Testament collection
    #[serde(rename = "tanakh")]
    Tanakh,
    /// The New Testament collection
    #[serde(rename = "newtestament")]
    NewTestament,
    /// The Apocrypha / Deuterocanon collection
    #[serde(rename = "apocrypha")]
    Apocrypha,
}

impl Canon {
    /// Path segment used in both deep links and data URLs
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tanakh => "tanakh",
            Self::NewTestament => "newtestament",
            Self::Apocrypha => "apocrypha",
        }
    }

    /// Classify a slug into its owning canon
    ///
    /// Total over all slugs: unknown slugs default to New Testament,
    /// matching the routing behavior of the chapter pages.
    #[must_use]
    pub fn of_slug(slug: &BookSlug) -> Self {
        if APOCRYPHA_SLUGS.contains(slug.as_str()) {
            Self::Apocrypha
        } else if TANAKH_SLUGS.contains(slug.as_str()) {
            Self::Tanakh
        } else {
            Self::NewTestament
        }
    }
}

impl Display for Canon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a canon path segment
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown canon: '{0}'")]
pub struct CanonParseError(pub String);

impl FromStr for Canon {
    type Err = CanonParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tanakh" => Ok(Self::Tanakh),
            "newtestament" => Ok(Self::NewTestament),
            "apocrypha" => Ok(Self::Apocrypha),
            other => Err(CanonParseError(other.to_string())),
        }
    }
}

/// Old-Testament slugs
static TANAKH_SLUGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "genesis",
        "exodus",
        "leviticus",
        "numbers",
        "deuteronomy",
        "joshua",
        "judges",
        "ruth",
        "1-samuel",
        "2-samuel",
        "1-kings",
        "2-kings",
        "1-chronicles",
        "2-chronicles",
        "ezra",
        "nehemiah",
        "esther",
        "job",
        "psalms",
        "proverbs",
        "ecclesiastes",
        "song-of-songs",
        "isaiah",
        "jeremiah",
        "lamentations",
        "ezekiel",
        "daniel",
        "hosea",
        "joel",
        "amos",
        "obadiah",
        "jonah",
        "micah",
        "nahum",
        "habakkuk",
        "zephaniah",
        "haggai",
        "zechariah",
        "malachi",
    ])
});

/// Apocrypha / Deuterocanon slugs
static APOCRYPHA_SLUGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "tobit",
        "judith",
        "wisdom-of-solomon",
        "sirach",
        "baruch",
        "letter-of-jeremiah",
        "1-maccabees",
        "2-maccabees",
        "1-esdras",
        "2-esdras",
        "prayer-of-manasseh",
        "song-of-three",
        "susanna",
        "bel-and-the-dragon",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_path_segments() {
        assert_eq!(Canon::Tanakh.as_str(), "tanakh");
        assert_eq!(Canon::NewTestament.as_str(), "newtestament");
        assert_eq!(Canon::Apocrypha.as_str(), "apocrypha");
    }

    #[test]
    fn canon_round_trips_through_str() {
        for canon in [Canon::Tanakh, Canon::NewTestament, Canon::Apocrypha] {
            assert_eq!(canon.as_str().parse::<Canon>().unwrap(), canon);
        }
        assert!("vulgate".parse::<Canon>().is_err());
    }

    #[test]
    fn classification_checks_apocrypha_first() {
        assert_eq!(
            Canon::of_slug(&BookSlug::new("sirach")),
            Canon::Apocrypha
        );
        assert_eq!(Canon::of_slug(&BookSlug::new("genesis")), Canon::Tanakh);
        assert_eq!(
            Canon::of_slug(&BookSlug::new("revelation")),
            Canon::NewTestament
        );
    }

    #[test]
    fn classification_is_total_and_exclusive() {
        // Every slug lands in exactly one canon; sets must not overlap.
        for slug in TANAKH_SLUGS.iter() {
            assert!(!APOCRYPHA_SLUGS.contains(slug), "overlap: {slug}");
        }
        for slug in APOCRYPHA_SLUGS.iter() {
            assert_eq!(Canon::of_slug(&BookSlug::new(*slug)), Canon::Apocrypha);
        }
    }

    #[test]
    fn canon_serde_uses_path_segment() {
        let json = serde_json::to_string(&Canon::NewTestament).unwrap();
        assert_eq!(json, "\"newtestament\"");
    }
}
