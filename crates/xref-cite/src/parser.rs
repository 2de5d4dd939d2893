//! Citation string parsing
//!
//! Recognizes `Book Chapter:Verse[-Verse]` with an optional comma tail of
//! further verses/ranges in the same chapter (`"Rev 20:3,8"`). Hyphen and
//! Unicode figure/en/em dashes all denote ranges and are normalized before
//! matching.

use crate::reference::ParsedReference;
use once_cell::sync::Lazy;
use regex::Regex;
use xref_canon::resolve;

/// Anchored citation pattern, applied after dash normalization.
///
/// Groups: book label, chapter, start verse, optional end verse,
/// optional comma tail of `V[-V]` segments.
static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        ((?:[1-3]\s+)?[A-Za-z][A-Za-z\ .']*?)   # book label
        \s+
        (\d+)                                   # chapter
        :
        (\d+)                                   # start verse
        (?:\s*-\s*(\d+))?                       # optional end verse
        ((?:\s*,\s*\d+(?:\s*-\s*\d+)?)*)        # optional comma segments
        \s*$
    ",
    )
    .unwrap_or_else(|e| unreachable!("citation regex is static: {e}"))
});

/// Unanchored variant of the citation pattern, for scanning prose
static SCAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \b
        ((?:[1-3]\s+)?[A-Za-z][A-Za-z\ .']*?)   # book label
        \s+
        (\d+)                                   # chapter
        :
        (\d+)                                   # start verse
        (?:\s*-\s*(\d+))?                       # optional end verse
        ((?:\s*,\s*\d+(?:\s*-\s*\d+)?)*)        # optional comma segments
    ",
    )
    .unwrap_or_else(|e| unreachable!("scan regex is static: {e}"))
});

/// Replace figure/en/em dashes with an ASCII hyphen
#[must_use]
pub fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2012}', '\u{2013}', '\u{2014}'], "-")
}

/// Parse a verse range segment `V` or `V-V2`
fn parse_span(segment: &str) -> Option<(u32, u32)> {
    let mut parts = segment.splitn(2, '-');
    let start: u32 = parts.next()?.trim().parse().ok()?;
    let end: u32 = match parts.next() {
        Some(e) => e.trim().parse().ok()?,
        None => start,
    };
    if start == 0 || end < start {
        return None;
    }
    Some((start, end))
}

/// Parse a citation string into its leading reference
///
/// Returns `None` when the text is not a citation: pattern mismatch,
/// unrecognized book name, zero chapter/verse, or an inverted range.
/// Pure, no side effects.
#[must_use]
pub fn parse(text: &str) -> Option<ParsedReference> {
    parse_all(text).into_iter().next()
}

/// Parse a citation string including disjoint comma segments
///
/// `"Rev 20:3,8"` yields two references sharing book and chapter. An
/// invalid comma segment invalidates the whole citation, matching the
/// all-or-nothing treatment of the head pattern.
#[must_use]
pub fn parse_all(text: &str) -> Vec<ParsedReference> {
    let normalized = normalize_citation_text(text);
    match CITATION_RE.captures(&normalized) {
        Some(caps) => refs_from_captures(&caps),
        None => Vec::new(),
    }
}

/// Normalize a citation string for matching: NBSP to space, dashes to hyphen
#[must_use]
pub fn normalize_citation_text(text: &str) -> String {
    normalize_dashes(&text.replace('\u{00A0}', " "))
}

/// A citation found while scanning prose
///
/// Offsets index into the normalized text (see
/// [`normalize_citation_text`]); the linkification glue wraps that span
/// in a trigger element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundCitation {
    /// The matched citation text, normalized
    pub text: String,
    /// Byte offset of the match start in the normalized input
    pub start: usize,
    /// Byte offset one past the match end in the normalized input
    pub end: usize,
    /// The references the match denotes (one per comma segment)
    pub references: Vec<ParsedReference>,
}

/// Scan free-running prose for citations
///
/// Matches whose book name does not resolve are skipped entirely; their
/// text is left for the caller untouched. `"see 1 Cor 13:4-7"` yields
/// one citation, `"Xyz 9:9"` yields none.
///
/// The pattern's book label is greedy about preceding words ("and also
/// John 3:16" captures "and also John"), so resolution backs off leading
/// words until the remaining label resolves.
#[must_use]
pub fn scan(text: &str) -> Vec<FoundCitation> {
    let normalized = normalize_citation_text(text);
    let mut found = Vec::new();

    for caps in SCAN_RE.captures_iter(&normalized) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some((offset, canonical)) = resolve_label_suffix(label.as_str()) else {
            continue;
        };
        let book_label = label.as_str()[offset..].trim();
        let references = refs_for_book(book_label, &canonical, &caps);
        if references.is_empty() {
            continue;
        }
        let start = label.start() + offset;
        found.push(FoundCitation {
            text: normalized[start..whole.end()].to_string(),
            start,
            end: whole.end(),
            references,
        });
    }
    found
}

/// Resolve the longest suffix of a label that names a book
///
/// Returns the byte offset where the book name begins, with the
/// resolution. Word-aligned: only whole leading words are dropped.
fn resolve_label_suffix(label: &str) -> Option<(usize, xref_canon::CanonicalBook)> {
    let mut starts = vec![0];
    let mut in_space = false;
    for (i, c) in label.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else {
            if in_space {
                starts.push(i);
            }
            in_space = false;
        }
    }
    starts
        .into_iter()
        .find_map(|offset| resolve(label[offset..].trim()).map(|book| (offset, book)))
}

/// Extract references from a citation match (head + comma segments)
fn refs_from_captures(caps: &regex::Captures<'_>) -> Vec<ParsedReference> {
    let book_label = caps[1].trim().to_string();
    let Some(canonical) = resolve(&book_label) else {
        return Vec::new();
    };
    refs_for_book(&book_label, &canonical, caps)
}

/// Build one reference per verse segment, sharing book and chapter
fn refs_for_book(
    book_label: &str,
    canonical: &xref_canon::CanonicalBook,
    caps: &regex::Captures<'_>,
) -> Vec<ParsedReference> {
    let Ok(chapter) = caps[2].parse::<u32>() else {
        return Vec::new();
    };
    if chapter == 0 {
        return Vec::new();
    }

    let head_segment = match caps.get(4) {
        Some(end) => format!("{}-{}", &caps[3], end.as_str()),
        None => caps[3].to_string(),
    };

    let mut segments = vec![head_segment];
    if let Some(tail) = caps.get(5) {
        segments.extend(
            tail.as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
        );
    }

    let mut refs = Vec::with_capacity(segments.len());
    for segment in &segments {
        let Some((verse_start, verse_end)) = parse_span(segment) else {
            return Vec::new();
        };
        refs.push(ParsedReference {
            book: book_label.to_string(),
            canonical: canonical.clone(),
            chapter,
            verse_start,
            verse_end,
        });
    }
    refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use xref_canon::Canon;

    #[test]
    fn parses_single_verse() {
        let r = parse("John 3:16").unwrap();
        assert_eq!(r.book, "John");
        assert_eq!(r.canonical.slug.as_str(), "john");
        assert_eq!(r.canonical.canon, Canon::NewTestament);
        assert_eq!((r.chapter, r.verse_start, r.verse_end), (3, 16, 16));
    }

    #[test]
    fn parses_verse_range() {
        let r = parse("1 Cor 13:4-7").unwrap();
        assert_eq!(r.canonical.slug.as_str(), "1-corinthians");
        assert_eq!((r.chapter, r.verse_start, r.verse_end), (13, 4, 7));
    }

    #[test]
    fn en_dash_and_hyphen_parse_identically() {
        assert_eq!(parse("John 3:16-18"), parse("John 3:16\u{2013}18"));
        assert_eq!(parse("John 3:16-18"), parse("John 3:16\u{2014}18"));
    }

    #[test]
    fn comma_segments_inherit_book_and_chapter() {
        let refs = parse_all("Rev 20:3,8");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].canonical.slug.as_str(), "revelation");
        assert_eq!((refs[0].verse_start, refs[0].verse_end), (3, 3));
        assert_eq!((refs[1].chapter, refs[1].verse_start), (20, 8));
    }

    #[test]
    fn comma_segment_may_be_a_range() {
        let refs = parse_all("Ps 119:1-4, 9");
        assert_eq!(refs.len(), 2);
        assert_eq!((refs[0].verse_start, refs[0].verse_end), (1, 4));
        assert_eq!((refs[1].verse_start, refs[1].verse_end), (9, 9));
    }

    #[test]
    fn unrecognized_book_fails_the_parse() {
        assert!(parse("Xyz 9:9").is_none());
        assert!(parse("Johnson 3:16").is_none());
    }

    #[test]
    fn zero_and_inverted_values_fail() {
        assert!(parse("John 0:16").is_none());
        assert!(parse("John 3:0").is_none());
        assert!(parse("John 3:18-16").is_none());
    }

    #[test]
    fn non_citation_text_fails() {
        assert!(parse("hello world").is_none());
        assert!(parse("John 3").is_none());
        assert!(parse("3:16").is_none());
        assert!(parse("").is_none());
    }

    #[test]
    fn whitespace_and_nbsp_are_tolerated() {
        let r = parse("  John\u{00A0}3:16  ").unwrap();
        assert_eq!((r.chapter, r.verse_start), (3, 16));
    }

    #[test]
    fn scan_finds_citations_inside_prose() {
        let found = scan("see 1 Cor 13:4-7 and also John 3:16 for love");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "1 Cor 13:4-7");
        assert_eq!(found[0].references[0].canonical.slug.as_str(), "1-corinthians");
        assert_eq!(found[1].text, "John 3:16");
    }

    #[test]
    fn scan_skips_unresolvable_book_names() {
        assert!(scan("compare Xyz 9:9 here").is_empty());
        assert!(scan("meeting at 10:30 tomorrow").is_empty());
    }

    #[test]
    fn scan_offsets_index_the_normalized_text() {
        let text = "per Gen 1:1, creation";
        let found = scan(text);
        assert_eq!(found.len(), 1);
        let span = &text[found[0].start..found[0].end];
        assert_eq!(span, found[0].text);
    }

    #[test]
    fn roman_numeral_book_prefix_parses() {
        let r = parse("II Sam 7:12").unwrap();
        assert_eq!(r.canonical.slug.as_str(), "2-samuel");
        assert_eq!(r.canonical.canon, Canon::Tanakh);
    }
}
