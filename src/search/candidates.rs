//! Candidate retrieval: phonetic buckets unioned with a bounded lexical
//! scan.

use rustc_hash::FxHashSet;

use crate::index::NameIndex;
use crate::phonetic;
use crate::similarity;

use super::scoring::{LEXICAL_CANDIDATE_LIMIT, LEXICAL_SEARCH_THRESHOLD};

/// The candidate pool for one query, with per-channel counts for
/// diagnostics.
#[derive(Debug, Default)]
pub struct CandidateSet {
    /// Union of phonetic and lexical candidates.
    pub names: FxHashSet<String>,
    /// How many candidates the phonetic buckets contributed.
    pub phonetic_count: usize,
    /// How many candidates the lexical scan contributed.
    pub lexical_count: usize,
}

/// Retrieve candidates for a query from the full index.
///
/// Candidates are not yet filtered by name part; the scorer rejects
/// records of the wrong part. The phonetic channel unions the buckets of
/// the query's primary and (distinct) secondary codes; the lexical channel
/// scans every indexed name with the weighted-ratio scorer, keeping
/// matches at or above [`LEXICAL_SEARCH_THRESHOLD`] and the top
/// [`LEXICAL_CANDIDATE_LIMIT`] by score.
pub fn get_candidates(index: &NameIndex, query: &str) -> CandidateSet {
    let mut set = CandidateSet::default();

    if let Some(codes) = phonetic::encode_name(query) {
        if !codes.primary.is_empty() {
            if let Some(bucket) = index.phonetic_bucket(&codes.primary) {
                set.names.extend(bucket.iter().cloned());
            }
        }
        if codes.has_distinct_secondary() {
            if let Some(bucket) = index.phonetic_bucket(&codes.secondary) {
                set.names.extend(bucket.iter().cloned());
            }
        }
    }
    set.phonetic_count = set.names.len();

    let mut lexical: Vec<(&str, f64)> = index
        .names()
        .filter_map(|name| {
            let score = similarity::weighted_ratio(query, name);
            (score >= LEXICAL_SEARCH_THRESHOLD).then_some((name, score))
        })
        .collect();
    lexical.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    lexical.truncate(LEXICAL_CANDIDATE_LIMIT);
    set.lexical_count = lexical.len();
    set.names
        .extend(lexical.into_iter().map(|(name, _)| name.to_string()));

    log::debug!(
        "candidates for {:?}: {} phonetic, {} lexical, {} total",
        query,
        set.phonetic_count,
        set.lexical_count,
        set.names.len()
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{NameInfo, RawDataset};

    fn index_of(first: &[&str], last: &[&str]) -> NameIndex {
        let mut dataset = RawDataset::default();
        for name in first {
            dataset
                .first_names
                .insert(name.to_string(), NameInfo::default());
        }
        for name in last {
            dataset
                .last_names
                .insert(name.to_string(), NameInfo::default());
        }
        NameIndex::build(&dataset)
    }

    #[test]
    fn phonetic_channel_finds_sounds_alike_names() {
        let index = index_of(&["John", "Jon"], &[]);
        let set = get_candidates(&index, "Jon");
        assert!(set.names.contains("John"));
        assert!(set.names.contains("Jon"));
        assert!(set.phonetic_count >= 2);
    }

    #[test]
    fn lexical_channel_finds_typo_neighbours() {
        let index = index_of(&["Søren"], &[]);
        let set = get_candidates(&index, "Soren");
        assert!(set.names.contains("Søren"));
    }

    #[test]
    fn retrieval_is_not_part_filtered() {
        let index = index_of(&["John"], &["Jon"]);
        let set = get_candidates(&index, "Jon");
        assert!(set.names.contains("John"));
        assert!(set.names.contains("Jon"));
    }

    #[test]
    fn dissimilar_names_are_not_retrieved_lexically() {
        let index = index_of(&["Wilhelmina"], &[]);
        let set = get_candidates(&index, "Bo");
        assert_eq!(set.lexical_count, 0);
    }

    #[test]
    fn empty_index_yields_no_candidates() {
        let index = index_of(&[], &[]);
        let set = get_candidates(&index, "Soren");
        assert!(set.names.is_empty());
    }
}
