//! # nordname
//!
//! Fuzzy correction of misspelled personal names against a large reference
//! dataset, with first-class support for Nordic orthography.
//!
//! A query like `"Soren"` is expanded into locale-specific orthographic
//! variants (`"Sören"`, `"Søren"`), candidates are retrieved from a phonetic
//! (Double Metaphone) index unioned with a bounded lexical similarity scan,
//! and each candidate is scored 0–100 from its base similarity plus a set of
//! additive bonuses and penalties (exact match, query variant, Nordic name,
//! country popularity).
//!
//! The engine tolerates three independent kinds of mismatch at once:
//!
//! - **Phonetic drift**: sounds-alike spellings ("Jon" vs "John")
//! - **Lexical drift**: typos and transliteration ("Sorne" vs "Soren")
//! - **Orthographic substitution**: locale diacritic forms ("aa" → "å",
//!   "oe" → "ø"/"ö", leading "t" → "þ" in Icelandic)
//!
//! ## Example
//!
//! ```rust
//! use nordname::prelude::*;
//!
//! let mut dataset = RawDataset::default();
//! dataset.first_names.insert(
//!     "Søren".to_string(),
//!     NameInfo::with_country(&[("DK", 0.8), ("SE", 0.2)]),
//! );
//! dataset.last_names.insert("Hansen".to_string(), NameInfo::default());
//!
//! let matcher = NameMatcher::from_dataset(&dataset);
//! let results = matcher.smart_search(Some("Soren"), None, Some("SE"), 10, 70);
//!
//! assert!(results
//!     .first_name_matches
//!     .iter()
//!     .any(|r| r.name == "Søren"));
//! ```
//!
//! The index is built once (or restored from a versioned snapshot) and is
//! immutable afterwards, so a single [`NameMatcher`](search::NameMatcher) can
//! be shared behind an `Arc` and queried concurrently without locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod country;
pub mod index;
pub mod phonetic;
pub mod search;
pub mod similarity;
pub mod snapshot;
pub mod variant;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::index::{
        DatasetSource, InMemorySource, JsonFileSource, NameIndex, NameInfo, NamePart,
        RawDataset, RecordKind, VariantEntry,
    };
    pub use crate::search::{
        EngineError, MatchKind, MatchOrigin, NameMatcher, ScoredResult, SearchResults,
    };
    pub use crate::snapshot::{SnapshotError, SNAPSHOT_VERSION};
    pub use crate::variant::generate_variants;
}
