//! XRef Book Resolver
//!
//! Maps free-text book names ("1 Cor", "II Samuel", "Ecclus.") to canonical
//! slugs and classifies every slug into exactly one canon (Tanakh, New
//! Testament, Apocrypha).
//!
//! # Core Operations
//!
//! - **Resolve**: alias text → [`CanonicalBook`] (slug + canon)
//! - **Classify**: [`BookSlug`] → [`Canon`] (total, mutually exclusive)
//!
//! Resolution is an exact lookup against a static alias table after
//! normalization; there is deliberately no fuzzy or substring fallback,
//! since ambiguous substrings risk false positives across 66+ book names.
//!
//! # Example
//!
//! ```
//! use xref_canon::{resolve, Canon};
//!
//! let book = resolve("1 Cor").unwrap();
//! assert_eq!(book.slug.as_str(), "1-corinthians");
//! assert_eq!(book.canon, Canon::NewTestament);
//!
//! assert!(resolve("Xyz").is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod alias;
pub mod canon;
pub mod slug;

pub use alias::{normalize_book_name, resolve};
pub use canon::Canon;
pub use slug::{BookSlug, CanonicalBook};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
