//! The name matching engine: construction, orchestration and lookup.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::cache::VariantCache;
use crate::country::validate_country_code;
use crate::index::{DatasetError, DatasetSource, NameIndex, NameInfo, NamePart, RawDataset, RecordKind};
use crate::phonetic::{self, PhoneticCodes};
use crate::similarity;
use crate::snapshot;
use crate::variant::{generate_variants, NORDIC_COUNTRIES, VARIANT_TRIGGER_LETTERS};

use super::candidates::get_candidates;
use super::result::{MatchKind, MatchOrigin, ScoredResult, SearchResults};
use super::scoring::{score_candidate, RULE_VARIANT_SCORE};

/// Errors from constructing the engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The dataset source failed and no usable snapshot was available.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Summary of one indexed record, as returned by
/// [`NameMatcher::get_details`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RecordSummary {
    /// Record kind.
    pub kind: RecordKind,
    /// Double Metaphone codes.
    pub phonetic: PhoneticCodes,
    /// Source metadata.
    pub info: NameInfo,
}

/// Details for a directly looked-up name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NameDetails {
    /// The indexed spelling.
    pub name: String,
    /// Whether the name carries the Nordic flag.
    pub is_nordic: bool,
    /// One summary per record kind the name is indexed under.
    pub records: Vec<RecordSummary>,
}

/// The name matching engine.
///
/// Holds the read-only [`NameIndex`] and a bounded variant cache. Build it
/// once at process start and share it (e.g. behind an `Arc`) with every
/// query call site; queries need only `&self`.
pub struct NameMatcher {
    index: NameIndex,
    variant_cache: VariantCache,
}

impl NameMatcher {
    /// Build an engine directly from an in-memory dataset.
    pub fn from_dataset(dataset: &RawDataset) -> Self {
        Self::from_index(NameIndex::build(dataset))
    }

    /// Wrap an already-built (or snapshot-restored) index.
    pub fn from_index(index: NameIndex) -> Self {
        Self {
            index,
            variant_cache: VariantCache::default(),
        }
    }

    /// Construct the engine, optionally restoring from a snapshot.
    ///
    /// With `use_snapshot`, a readable, version-matching snapshot at
    /// `snapshot_path` skips the dataset source entirely. Any snapshot
    /// problem (missing file, corrupt data, version mismatch) is treated
    /// as a cache miss: the dataset is loaded, the index rebuilt, and a
    /// fresh snapshot written back best-effort.
    ///
    /// Fails only when the dataset source itself is unavailable and no
    /// snapshot could be used.
    pub fn new(
        source: &dyn DatasetSource,
        use_snapshot: bool,
        snapshot_path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        let snapshot_path = snapshot_path.as_ref();
        let start = Instant::now();

        if use_snapshot {
            match snapshot::load(snapshot_path) {
                Ok(index) => {
                    log::info!(
                        "engine ready from snapshot ({} names, {:?})",
                        index.len(),
                        start.elapsed()
                    );
                    return Ok(Self::from_index(index));
                }
                Err(err) => {
                    log::warn!("snapshot unusable ({}); rebuilding index", err);
                }
            }
        }

        let dataset = source.load()?;
        let index = NameIndex::build(&dataset);
        if use_snapshot {
            if let Err(err) = snapshot::save(&index, snapshot_path) {
                log::warn!("failed to write snapshot: {}", err);
            }
        }
        log::info!(
            "engine ready ({} names, {:?})",
            index.len(),
            start.elapsed()
        );
        Ok(Self::from_index(index))
    }

    /// The underlying read-only index.
    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    /// Search for corrections of a first and/or last name.
    ///
    /// Both name fields are optional; an empty or absent part yields an
    /// empty result list for that part. The country hint is validated
    /// against the ISO table and silently dropped when unrecognized. `n`
    /// bounds the result count per part; `threshold` (0–100) is the
    /// minimum final score.
    ///
    /// The two parts are searched independently; a fault in one part
    /// degrades that part to an empty list without affecting the other.
    pub fn smart_search(
        &self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        country: Option<&str>,
        n: usize,
        threshold: u32,
    ) -> SearchResults {
        let start = Instant::now();
        let country = country.and_then(|code| {
            let validated = validate_country_code(code);
            if validated.is_none() {
                log::warn!("ignoring invalid country code {:?}", code);
            }
            validated
        });
        let country = country.as_deref();

        let mut results = SearchResults::default();

        if let Some(first) = first_name.map(str::trim).filter(|s| !s.is_empty()) {
            results.first_name_matches =
                self.search_part_guarded(first, NamePart::First, country, n, threshold);
        }
        if let Some(last) = last_name.map(str::trim).filter(|s| !s.is_empty()) {
            results.last_name_matches =
                self.search_part_guarded(last, NamePart::Last, country, n, threshold);
        }

        log::debug!(
            "smart_search(first={:?}, last={:?}, country={:?}) -> {}+{} results in {:?}",
            first_name,
            last_name,
            country,
            results.first_name_matches.len(),
            results.last_name_matches.len(),
            start.elapsed()
        );
        results
    }

    /// Detailed record lookup for an exact indexed spelling.
    pub fn get_details(&self, name: &str) -> Option<NameDetails> {
        let records = self.index.records_for(name)?;
        Some(NameDetails {
            name: name.to_string(),
            is_nordic: self.index.is_nordic(name),
            records: records
                .iter()
                .map(|r| RecordSummary {
                    kind: r.kind.clone(),
                    phonetic: r.phonetic.clone(),
                    info: r.info.clone(),
                })
                .collect(),
        })
    }

    /// Run one part's search, degrading an internal fault to an empty
    /// list so the other part is unaffected.
    fn search_part_guarded(
        &self,
        query: &str,
        part: NamePart,
        country: Option<&str>,
        n: usize,
        threshold: u32,
    ) -> Vec<ScoredResult> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.search_part(query, part, country, n, threshold)
        }))
        .unwrap_or_else(|_| {
            log::error!("search for {:?} ({:?}) failed; returning no results", query, part);
            Vec::new()
        })
    }

    /// Search one name part: variants → candidates → scoring →
    /// rule-variant injection → rank and truncate.
    fn search_part(
        &self,
        query: &str,
        part: NamePart,
        country: Option<&str>,
        n: usize,
        threshold: u32,
    ) -> Vec<ScoredResult> {
        if query.is_empty() {
            return Vec::new();
        }

        // Variant generation only pays off when a substitution can fire.
        let use_rules = country.is_some_and(|c| NORDIC_COUNTRIES.contains(&c))
            || query
                .to_lowercase()
                .chars()
                .any(|c| VARIANT_TRIGGER_LETTERS.contains(c));
        let query_variants = if use_rules {
            self.variant_cache
                .get_or_insert_with(query, country, || generate_variants(query, country))
        } else {
            let mut only_query = FxHashSet::default();
            only_query.insert(query.to_string());
            only_query
        };

        let candidates = get_candidates(&self.index, query);

        let mut results: Vec<ScoredResult> = candidates
            .names
            .iter()
            .filter_map(|candidate| {
                score_candidate(
                    &self.index,
                    candidate,
                    part,
                    &query_variants,
                    query,
                    country,
                    threshold,
                )
            })
            .collect();

        // Variants the rules produced that exist nowhere in the dataset
        // still make useful suggestions; they carry a fixed score and a
        // distinct kind so callers can tell them apart.
        if use_rules && RULE_VARIANT_SCORE >= threshold {
            let matched: FxHashSet<&str> = results.iter().map(|r| r.name.as_str()).collect();
            let mut injected: Vec<ScoredResult> = Vec::new();
            for variant in &query_variants {
                if variant != query
                    && !self.index.contains_name(variant)
                    && !matched.contains(variant.as_str())
                {
                    injected.push(ScoredResult {
                        name: variant.clone(),
                        score: RULE_VARIANT_SCORE,
                        base_similarity: similarity::ratio(
                            &variant.to_lowercase(),
                            &query.to_lowercase(),
                        )
                        .round() as u32,
                        phonetic: phonetic::encode_name(variant).unwrap_or_default(),
                        is_nordic: true,
                        is_query_variant: true,
                        in_dataset: false,
                        kind: MatchKind::RuleGeneratedVariant,
                        origin: MatchOrigin::RuleVariant {
                            source_query: query.to_string(),
                        },
                        reasons: vec![format!("Rule-Generated ({} base)", RULE_VARIANT_SCORE)],
                    });
                }
            }
            results.extend(injected);
        }

        results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        results.truncate(n);
        results
    }
}
