//! Book alias resolution
//!
//! A static table maps every known spelling and abbreviation of a book
//! name to its canonical slug. Lookup is exact-match after normalization;
//! a miss means "not a book name", never an error.

use crate::slug::{BookSlug, CanonicalBook};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Known spellings/abbreviations → canonical slug.
///
/// Keys are pre-normalized: lowercase, periods stripped, single spaces.
/// Many aliases map to one slug.
static BOOK_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Tanakh
        ("genesis", "genesis"),
        ("gen", "genesis"),
        ("exodus", "exodus"),
        ("exod", "exodus"),
        ("ex", "exodus"),
        ("leviticus", "leviticus"),
        ("lev", "leviticus"),
        ("numbers", "numbers"),
        ("num", "numbers"),
        ("deuteronomy", "deuteronomy"),
        ("deut", "deuteronomy"),
        ("joshua", "joshua"),
        ("josh", "joshua"),
        ("judges", "judges"),
        ("judg", "judges"),
        ("ruth", "ruth"),
        ("1 samuel", "1-samuel"),
        ("1 sam", "1-samuel"),
        ("2 samuel", "2-samuel"),
        ("2 sam", "2-samuel"),
        ("1 kings", "1-kings"),
        ("1 kgs", "1-kings"),
        ("2 kings", "2-kings"),
        ("2 kgs", "2-kings"),
        ("1 chronicles", "1-chronicles"),
        ("1 chron", "1-chronicles"),
        ("1 chr", "1-chronicles"),
        ("2 chronicles", "2-chronicles"),
        ("2 chron", "2-chronicles"),
        ("2 chr", "2-chronicles"),
        ("ezra", "ezra"),
        ("nehemiah", "nehemiah"),
        ("neh", "nehemiah"),
        ("esther", "esther"),
        ("esth", "esther"),
        ("job", "job"),
        ("psalm", "psalms"),
        ("psalms", "psalms"),
        ("ps", "psalms"),
        ("pss", "psalms"),
        ("proverbs", "proverbs"),
        ("prov", "proverbs"),
        ("ecclesiastes", "ecclesiastes"),
        ("eccl", "ecclesiastes"),
        ("song of songs", "song-of-songs"),
        ("song of solomon", "song-of-songs"),
        ("canticles", "song-of-songs"),
        ("song", "song-of-songs"),
        ("isaiah", "isaiah"),
        ("isa", "isaiah"),
        ("jeremiah", "jeremiah"),
        ("jer", "jeremiah"),
        ("lamentations", "lamentations"),
        ("lam", "lamentations"),
        ("ezekiel", "ezekiel"),
        ("ezek", "ezekiel"),
        ("daniel", "daniel"),
        ("dan", "daniel"),
        ("hosea", "hosea"),
        ("hos", "hosea"),
        ("joel", "joel"),
        ("amos", "amos"),
        ("obadiah", "obadiah"),
        ("obad", "obadiah"),
        ("jonah", "jonah"),
        ("jon", "jonah"),
        ("micah", "micah"),
        ("mic", "micah"),
        ("nahum", "nahum"),
        ("nah", "nahum"),
        ("habakkuk", "habakkuk"),
        ("hab", "habakkuk"),
        ("zephaniah", "zephaniah"),
        ("zeph", "zephaniah"),
        ("haggai", "haggai"),
        ("hag", "haggai"),
        ("zechariah", "zechariah"),
        ("zech", "zechariah"),
        ("malachi", "malachi"),
        ("mal", "malachi"),
        // New Testament
        ("matthew", "matthew"),
        ("matt", "matthew"),
        ("mt", "matthew"),
        ("mark", "mark"),
        ("mk", "mark"),
        ("luke", "luke"),
        ("lk", "luke"),
        ("john", "john"),
        ("jn", "john"),
        ("acts", "acts"),
        ("romans", "romans"),
        ("rom", "romans"),
        ("1 corinthians", "1-corinthians"),
        ("1 cor", "1-corinthians"),
        ("2 corinthians", "2-corinthians"),
        ("2 cor", "2-corinthians"),
        ("galatians", "galatians"),
        ("gal", "galatians"),
        ("ephesians", "ephesians"),
        ("eph", "ephesians"),
        ("philippians", "philippians"),
        ("phil", "philippians"),
        ("colossians", "colossians"),
        ("col", "colossians"),
        ("1 thessalonians", "1-thessalonians"),
        ("1 thess", "1-thessalonians"),
        ("2 thessalonians", "2-thessalonians"),
        ("2 thess", "2-thessalonians"),
        ("1 timothy", "1-timothy"),
        ("1 tim", "1-timothy"),
        ("2 timothy", "2-timothy"),
        ("2 tim", "2-timothy"),
        ("titus", "titus"),
        ("tit", "titus"),
        ("philemon", "philemon"),
        ("phlm", "philemon"),
        ("hebrews", "hebrews"),
        ("heb", "hebrews"),
        ("james", "james"),
        ("jas", "james"),
        ("1 peter", "1-peter"),
        ("1 pet", "1-peter"),
        ("2 peter", "2-peter"),
        ("2 pet", "2-peter"),
        ("1 john", "1-john"),
        ("1 jn", "1-john"),
        ("2 john", "2-john"),
        ("2 jn", "2-john"),
        ("3 john", "3-john"),
        ("3 jn", "3-john"),
        ("jude", "jude"),
        ("revelation", "revelation"),
        ("rev", "revelation"),
        // Apocrypha / Deuterocanon
        ("tobit", "tobit"),
        ("tob", "tobit"),
        ("judith", "judith"),
        ("jdt", "judith"),
        ("wisdom", "wisdom-of-solomon"),
        ("wisdom of solomon", "wisdom-of-solomon"),
        ("wis", "wisdom-of-solomon"),
        ("sirach", "sirach"),
        ("sir", "sirach"),
        ("ecclesiasticus", "sirach"),
        ("ecclus", "sirach"),
        ("baruch", "baruch"),
        ("bar", "baruch"),
        ("letter of jeremiah", "letter-of-jeremiah"),
        ("1 maccabees", "1-maccabees"),
        ("1 macc", "1-maccabees"),
        ("2 maccabees", "2-maccabees"),
        ("2 macc", "2-maccabees"),
        ("1 esdras", "1-esdras"),
        ("2 esdras", "2-esdras"),
        ("prayer of manasseh", "prayer-of-manasseh"),
        ("pr of manasseh", "prayer-of-manasseh"),
        ("manasseh", "prayer-of-manasseh"),
        ("song of three", "song-of-three"),
        ("song of the three", "song-of-three"),
        ("song of three holy children", "song-of-three"),
        ("susanna", "susanna"),
        ("bel and the dragon", "bel-and-the-dragon"),
    ])
});

/// Normalize raw book-name text for alias lookup
///
/// Lowercases, strips periods and apostrophes, collapses whitespace, and
/// maps Roman-numeral prefixes (`I`/`II`/`III`) and ordinal word prefixes
/// (`First`/`Second`/`Third`) to Arabic digits.
#[must_use]
pub fn normalize_book_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '.' && *c != '\'' && *c != '\u{2019}')
        .collect();
    let mut words: Vec<String> = cleaned
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    // Only a prefix: "I Kings" yes, a bare "I" is left alone.
    let multiword = words.len() > 1;
    if let Some(first) = words.first_mut() {
        let digit = match first.as_str() {
            "i" | "first" | "1st" => Some("1"),
            "ii" | "second" | "2nd" => Some("2"),
            "iii" | "third" | "3rd" => Some("3"),
            _ => None,
        };
        if let Some(d) = digit {
            if multiword {
                *first = d.to_string();
            }
        }
    }

    words.join(" ")
}

/// Resolve free-text book name to its canonical book
///
/// Returns `None` when the text is not a recognized book name; callers
/// treat that as "not a citation" and leave the text unlinked.
#[must_use]
pub fn resolve(raw: &str) -> Option<CanonicalBook> {
    let normalized = normalize_book_name(raw);
    let slug = BOOK_ALIASES.get(normalized.as_str())?;
    Some(CanonicalBook::from_slug(BookSlug::new(*slug)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::Canon;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_full_names_and_abbreviations_identically() {
        let full = resolve("1 Corinthians").unwrap();
        let abbr = resolve("1 Cor").unwrap();
        assert_eq!(full, abbr);
        assert_eq!(full.slug.as_str(), "1-corinthians");
        assert_eq!(full.canon, Canon::NewTestament);
    }

    #[test]
    fn normalization_strips_periods_and_collapses_whitespace() {
        assert_eq!(normalize_book_name("Gen."), "gen");
        assert_eq!(normalize_book_name("1   Cor."), "1 cor");
        assert_eq!(normalize_book_name("SONG  OF  SONGS"), "song of songs");
    }

    #[test]
    fn roman_and_ordinal_prefixes_become_digits() {
        assert_eq!(resolve("II Samuel"), resolve("2 Samuel"));
        assert_eq!(resolve("III John"), resolve("3 John"));
        assert_eq!(resolve("First Corinthians"), resolve("1 Corinthians"));
        assert_eq!(resolve("2nd Kings"), resolve("2 Kings"));
        // A bare Roman numeral is not a prefix.
        assert!(resolve("II").is_none());
    }

    #[test]
    fn apocrypha_aliases_resolve() {
        let sirach = resolve("Ecclus.").unwrap();
        assert_eq!(sirach.slug.as_str(), "sirach");
        assert_eq!(sirach.canon, Canon::Apocrypha);
        assert_eq!(resolve("Wisdom").unwrap().slug.as_str(), "wisdom-of-solomon");
    }

    #[test]
    fn unknown_book_is_none() {
        assert!(resolve("Xyz").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("Johnson").is_none());
    }

    #[test]
    fn every_alias_targets_a_classified_slug() {
        // Each alias agrees with the canonical spelling of its own slug.
        for (alias, slug) in super::BOOK_ALIASES.iter() {
            let resolved = resolve(alias).unwrap_or_else(|| panic!("alias missed: {alias}"));
            assert_eq!(resolved.slug.as_str(), *slug);
        }
    }
}
