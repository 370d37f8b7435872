//! Phonetic name index built once from a raw dataset.
//!
//! The index maps every Double Metaphone code to the set of names that
//! produce it, every name to its records (part type, codes, country
//! distribution, Nordic flag), and keeps the set of Nordic-flagged names
//! for fast bonus lookups. It is read-only after construction and safe to
//! share for concurrent queries.
//!
//! A malformed name that defeats the phonetic encoder is logged, counted
//! and skipped; a bad entry never aborts the build.

mod source;

use serde::{Deserialize, Serialize};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::phonetic::{self, PhoneticCodes};
use crate::variant::NORDIC_COUNTRIES;

pub use source::{DatasetError, DatasetSource, InMemorySource, JsonFileSource};

/// Characters that mark a name as Nordic on sight.
const NORDIC_CHARS: &str = "åäöæøþÅÄÖÆØÞðÐ";

/// Country popularity fraction above which a first name counts as Nordic.
const NORDIC_POPULARITY_THRESHOLD: f64 = 0.1;

/// Which name part a search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamePart {
    /// Given name.
    First,
    /// Family name.
    Last,
}

/// The kind of record an indexed name carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordKind {
    /// Indexed from the first-name collection.
    First,
    /// Indexed from the last-name collection.
    Last,
    /// A curated dataset variant tagged with its country of origin.
    ///
    /// Variant records satisfy either target part; they earn the dataset
    /// variant bonus when the query's country hint matches their origin.
    Variant {
        /// ISO alpha-2 country the variant spelling originates from.
        country: String,
    },
}

impl RecordKind {
    /// Whether a record of this kind is eligible for a search targeting
    /// `part`.
    pub fn matches_part(&self, part: NamePart) -> bool {
        match self {
            RecordKind::First => part == NamePart::First,
            RecordKind::Last => part == NamePart::Last,
            RecordKind::Variant { .. } => true,
        }
    }
}

/// Source metadata attached to a dataset name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameInfo {
    /// ISO alpha-2 country code to popularity fraction in `[0, 1]`.
    ///
    /// Populated mainly for first names; empty when the source carries no
    /// distribution for the name.
    #[serde(default)]
    pub country: FxHashMap<String, f64>,
}

impl NameInfo {
    /// Convenience constructor from `(country, fraction)` pairs.
    pub fn with_country(pairs: &[(&str, f64)]) -> Self {
        Self {
            country: pairs
                .iter()
                .map(|(c, f)| (c.to_string(), *f))
                .collect(),
        }
    }
}

/// One indexed name record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The exact indexed spelling.
    pub name: String,
    /// Record kind (first, last, or curated variant).
    pub kind: RecordKind,
    /// Double Metaphone codes computed once at build time.
    pub phonetic: PhoneticCodes,
    /// Source metadata.
    pub info: NameInfo,
    /// Whether the name is flagged Nordic.
    pub is_nordic: bool,
}

/// A curated variant spelling with its country of origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantEntry {
    /// The variant spelling.
    pub name: String,
    /// ISO alpha-2 country the spelling belongs to.
    pub country: String,
}

/// Raw name collections handed to the index builder.
///
/// How this is acquired (bundled file, download, database dump) is the
/// caller's concern; see [`DatasetSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDataset {
    /// First names with their source metadata.
    #[serde(default)]
    pub first_names: FxHashMap<String, NameInfo>,
    /// Last names with their source metadata.
    #[serde(default)]
    pub last_names: FxHashMap<String, NameInfo>,
    /// Curated variant spellings tagged with a country of origin.
    #[serde(default)]
    pub variant_names: Vec<VariantEntry>,
}

/// The read-only phonetic index.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NameIndex {
    phonetic_to_names: FxHashMap<String, FxHashSet<String>>,
    records: FxHashMap<String, Vec<NameRecord>>,
    nordic_names: FxHashSet<String>,
}

impl NameIndex {
    /// Build the index from a raw dataset.
    ///
    /// Empty names are ignored; names the phonetic encoder rejects are
    /// logged, counted and skipped without failing the build.
    pub fn build(dataset: &RawDataset) -> Self {
        let mut index = NameIndex::default();
        let mut skipped = 0usize;

        log::info!(
            "building name index: {} first names, {} last names, {} variants",
            dataset.first_names.len(),
            dataset.last_names.len(),
            dataset.variant_names.len()
        );

        for (name, info) in &dataset.first_names {
            if !index.insert_name(name, RecordKind::First, info.clone()) {
                skipped += 1;
            }
        }
        for (name, info) in &dataset.last_names {
            if !index.insert_name(name, RecordKind::Last, info.clone()) {
                skipped += 1;
            }
        }
        for entry in &dataset.variant_names {
            let kind = RecordKind::Variant {
                country: entry.country.clone(),
            };
            if !index.insert_name(&entry.name, kind, NameInfo::default()) {
                skipped += 1;
            }
        }

        log::info!(
            "name index ready: {} names indexed, {} skipped",
            index.records.len(),
            skipped
        );
        index
    }

    /// Index a single name. Returns `false` when the name was skipped
    /// because the phonetic encoder rejected it.
    fn insert_name(&mut self, name: &str, kind: RecordKind, info: NameInfo) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return true;
        }
        let Some(codes) = phonetic::encode_name(name) else {
            log::warn!("skipping unencodable name {:?}", name);
            return false;
        };

        let mut is_nordic = name.chars().any(|c| NORDIC_CHARS.contains(c));
        if !is_nordic && kind == RecordKind::First {
            is_nordic = info.country.iter().any(|(country, fraction)| {
                NORDIC_COUNTRIES.contains(&country.as_str())
                    && *fraction > NORDIC_POPULARITY_THRESHOLD
            });
        }

        if !codes.primary.is_empty() {
            self.phonetic_to_names
                .entry(codes.primary.clone())
                .or_default()
                .insert(name.to_string());
        }
        if codes.has_distinct_secondary() {
            self.phonetic_to_names
                .entry(codes.secondary.clone())
                .or_default()
                .insert(name.to_string());
        }
        if is_nordic {
            self.nordic_names.insert(name.to_string());
        }

        let record = NameRecord {
            name: name.to_string(),
            kind,
            phonetic: codes,
            info,
            is_nordic,
        };
        let records = self.records.entry(name.to_string()).or_default();
        // Same name + kind appearing twice keeps the latest record.
        if let Some(existing) = records
            .iter_mut()
            .find(|r| std::mem::discriminant(&r.kind) == std::mem::discriminant(&record.kind))
        {
            *existing = record;
        } else {
            records.push(record);
        }
        true
    }

    /// All records for an exact name, if indexed.
    pub fn records_for(&self, name: &str) -> Option<&[NameRecord]> {
        self.records.get(name).map(Vec::as_slice)
    }

    /// The record backing a search for `part`, preferring an exact part
    /// record over a curated variant record.
    pub fn record_for_part(&self, name: &str, part: NamePart) -> Option<&NameRecord> {
        let records = self.records.get(name)?;
        records
            .iter()
            .find(|r| match (&r.kind, part) {
                (RecordKind::First, NamePart::First) => true,
                (RecordKind::Last, NamePart::Last) => true,
                _ => false,
            })
            .or_else(|| {
                records
                    .iter()
                    .find(|r| matches!(r.kind, RecordKind::Variant { .. }))
            })
    }

    /// Whether the exact name is indexed at all.
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Whether the name carries the Nordic flag.
    pub fn is_nordic(&self, name: &str) -> bool {
        self.nordic_names.contains(name)
    }

    /// The set of names producing a phonetic code.
    pub fn phonetic_bucket(&self, code: &str) -> Option<&FxHashSet<String>> {
        self.phonetic_to_names.get(code)
    }

    /// Iterate over every indexed name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of distinct indexed names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> RawDataset {
        let mut dataset = RawDataset::default();
        dataset.first_names.insert(
            "Søren".to_string(),
            NameInfo::with_country(&[("DK", 0.8)]),
        );
        dataset.first_names.insert(
            "Karin".to_string(),
            NameInfo::with_country(&[("SE", 0.4), ("DE", 0.2)]),
        );
        dataset
            .first_names
            .insert("John".to_string(), NameInfo::with_country(&[("US", 0.9)]));
        dataset
            .last_names
            .insert("Hansen".to_string(), NameInfo::default());
        dataset
            .last_names
            .insert("John".to_string(), NameInfo::default());
        dataset.variant_names.push(VariantEntry {
            name: "Sören".to_string(),
            country: "SE".to_string(),
        });
        dataset
    }

    #[test]
    fn indexes_every_name() {
        let index = NameIndex::build(&small_dataset());
        assert!(index.contains_name("Søren"));
        assert!(index.contains_name("Hansen"));
        assert!(index.contains_name("Sören"));
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn every_encodable_name_is_reachable_from_a_bucket() {
        let index = NameIndex::build(&small_dataset());
        for name in ["Søren", "Karin", "John", "Hansen"] {
            let codes = crate::phonetic::encode_name(name).unwrap();
            if codes.primary.is_empty() {
                continue;
            }
            assert!(
                index.phonetic_bucket(&codes.primary).unwrap().contains(name),
                "{} missing from its primary bucket",
                name
            );
        }
    }

    #[test]
    fn nordic_flag_by_character() {
        let index = NameIndex::build(&small_dataset());
        assert!(index.is_nordic("Søren"));
        assert!(index.is_nordic("Sören"));
        assert!(!index.is_nordic("John"));
    }

    #[test]
    fn nordic_flag_by_popularity() {
        // No Nordic character, but popular enough in Sweden.
        let index = NameIndex::build(&small_dataset());
        assert!(index.is_nordic("Karin"));
    }

    #[test]
    fn popularity_threshold_applies_to_first_names_only() {
        let mut dataset = RawDataset::default();
        dataset
            .last_names
            .insert("Berg".to_string(), NameInfo::with_country(&[("SE", 0.9)]));
        let index = NameIndex::build(&dataset);
        assert!(!index.is_nordic("Berg"));
    }

    #[test]
    fn name_in_both_collections_keeps_both_records() {
        let index = NameIndex::build(&small_dataset());
        let records = index.records_for("John").unwrap();
        assert_eq!(records.len(), 2);
        assert!(index.record_for_part("John", NamePart::First).is_some());
        assert!(index.record_for_part("John", NamePart::Last).is_some());
    }

    #[test]
    fn part_lookup_rejects_the_other_part() {
        let index = NameIndex::build(&small_dataset());
        assert!(index.record_for_part("Hansen", NamePart::First).is_none());
        assert!(index.record_for_part("Hansen", NamePart::Last).is_some());
    }

    #[test]
    fn variant_records_satisfy_either_part() {
        let index = NameIndex::build(&small_dataset());
        let first = index.record_for_part("Sören", NamePart::First).unwrap();
        let last = index.record_for_part("Sören", NamePart::Last).unwrap();
        assert_eq!(first.kind, RecordKind::Variant { country: "SE".to_string() });
        assert_eq!(first, last);
    }

    #[test]
    fn blank_names_are_ignored() {
        let mut dataset = RawDataset::default();
        dataset
            .first_names
            .insert("   ".to_string(), NameInfo::default());
        dataset
            .first_names
            .insert(String::new(), NameInfo::default());
        let index = NameIndex::build(&dataset);
        assert!(index.is_empty());
    }
}
