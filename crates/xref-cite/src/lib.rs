//! XRef Reference Parser
//!
//! Turns free-text citation strings (`"1 Cor 13:4-7"`, `"John 3:16"`,
//! `"Rev 20:3,8"`) into structured [`ParsedReference`] values. Book-name
//! text is delegated to the resolver in `xref-canon`; a syntactically
//! valid `Chapter:Verse` pattern with an unrecognized book name is not a
//! citation.
//!
//! # Example
//!
//! ```
//! use xref_cite::parse;
//!
//! let r = parse("1 Cor 13:4-7").unwrap();
//! assert_eq!(r.canonical.slug.as_str(), "1-corinthians");
//! assert_eq!((r.chapter, r.verse_start, r.verse_end), (13, 4, 7));
//!
//! assert!(parse("Xyz 9:9").is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod parser;
pub mod reference;

pub use parser::{
    normalize_citation_text, normalize_dashes, parse, parse_all, scan, FoundCitation,
};
pub use reference::ParsedReference;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
