//! Candidate scoring: base similarity plus additive bonuses and penalties.
//!
//! Every applied bonus or penalty leaves a human-readable reason tag on
//! the result, so a caller can always explain a ranking. A candidate with
//! no bonus at all carries the single tag `"Similarity Only"`.

use rustc_hash::FxHashSet;

use crate::index::{NameIndex, NamePart, RecordKind};
use crate::similarity;

use super::result::{MatchOrigin, ScoredResult};

/// Bonus for a candidate flagged Nordic.
pub const NORDIC_NAME_BONUS: f64 = 5.0;
/// Bonus for a first name popular in the hinted country.
pub const COUNTRY_MATCH_BONUS: f64 = 10.0;
/// Bonus for a curated dataset variant whose origin matches the hint.
pub const VARIANT_MATCH_BONUS: f64 = 15.0;
/// Bonus for a candidate that equals one of the generated query variants.
pub const EXACT_QUERY_VARIANT_BONUS: f64 = 20.0;
/// Penalty for a first name with a distribution that lacks the hinted
/// country entirely.
pub const COUNTRY_MISMATCH_PENALTY: f64 = 10.0;
/// Popularity fraction above which the country bonus applies.
pub const POPULAR_THRESHOLD: f64 = 0.5;
/// Fixed score carried by rule-generated (not-in-dataset) variants.
pub const RULE_VARIANT_SCORE: u32 = 75;
/// Cutoff for the lexical retrieval scan.
pub const LEXICAL_SEARCH_THRESHOLD: f64 = 70.0;
/// Maximum number of lexical candidates retained per query.
pub const LEXICAL_CANDIDATE_LIMIT: usize = 50;
/// Base similarity must reach `threshold ×` this factor before any bonus
/// is computed.
pub const BASE_SIMILARITY_THRESHOLD_FACTOR: f64 = 0.8;

/// Score one candidate against a query for the given name part.
///
/// Returns `None` when the candidate is rejected: not indexed for the
/// target part, base similarity below the proportional floor, or final
/// score below `threshold`.
pub fn score_candidate(
    index: &NameIndex,
    candidate: &str,
    part: NamePart,
    query_variants: &FxHashSet<String>,
    query: &str,
    country: Option<&str>,
    threshold: u32,
) -> Option<ScoredResult> {
    let record = index.record_for_part(candidate, part)?;

    let candidate_lower = candidate.to_lowercase();
    let query_lower = query.to_lowercase();

    let base_similarity = query_variants
        .iter()
        .map(|variant| similarity::ratio(&candidate_lower, &variant.to_lowercase()))
        .fold(0.0f64, f64::max);

    if base_similarity < f64::from(threshold) * BASE_SIMILARITY_THRESHOLD_FACTOR {
        return None;
    }

    let mut final_score = base_similarity;
    let mut reasons: Vec<String> = Vec::new();

    let is_nordic = index.is_nordic(candidate);
    let is_query_variant = candidate != query && query_variants.contains(candidate);

    if candidate_lower == query_lower {
        final_score = final_score.max(100.0);
        reasons.push("Exact Match".to_string());
    }
    if is_query_variant {
        final_score += EXACT_QUERY_VARIANT_BONUS;
        reasons.push(format!("+{} (Query Variant)", EXACT_QUERY_VARIANT_BONUS as u32));
    }
    if is_nordic {
        final_score += NORDIC_NAME_BONUS;
        reasons.push(format!("+{} (Nordic)", NORDIC_NAME_BONUS as u32));
    }

    if let Some(country) = country {
        match &record.kind {
            RecordKind::First => {
                if let Some(fraction) = record.info.country.get(country) {
                    if *fraction > POPULAR_THRESHOLD {
                        final_score += COUNTRY_MATCH_BONUS;
                        reasons.push(format!(
                            "+{} (Popular:{})",
                            COUNTRY_MATCH_BONUS as u32, country
                        ));
                    }
                } else if !record.info.country.is_empty() {
                    final_score -= COUNTRY_MISMATCH_PENALTY;
                    reasons.push(format!(
                        "-{} (Not in {})",
                        COUNTRY_MISMATCH_PENALTY as u32, country
                    ));
                }
            }
            RecordKind::Variant { country: origin } if origin == country => {
                final_score += VARIANT_MATCH_BONUS;
                reasons.push(format!(
                    "+{} (Dataset Variant:{})",
                    VARIANT_MATCH_BONUS as u32, country
                ));
            }
            _ => {}
        }
    }

    final_score = final_score.clamp(0.0, 100.0);
    if final_score < f64::from(threshold) {
        return None;
    }

    if reasons.is_empty() {
        reasons.push("Similarity Only".to_string());
    }

    Some(ScoredResult {
        name: candidate.to_string(),
        score: final_score.round() as u32,
        base_similarity: base_similarity.round() as u32,
        phonetic: record.phonetic.clone(),
        is_nordic,
        is_query_variant,
        in_dataset: true,
        kind: part.into(),
        origin: MatchOrigin::Dataset(record.info.clone()),
        reasons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{NameInfo, RawDataset, VariantEntry};

    fn test_index() -> NameIndex {
        let mut dataset = RawDataset::default();
        dataset.first_names.insert(
            "Søren".to_string(),
            NameInfo::with_country(&[("DK", 0.8), ("SE", 0.2)]),
        );
        dataset
            .first_names
            .insert("John".to_string(), NameInfo::with_country(&[("US", 0.9)]));
        dataset
            .last_names
            .insert("Hansen".to_string(), NameInfo::default());
        dataset.variant_names.push(VariantEntry {
            name: "Mikkel".to_string(),
            country: "DK".to_string(),
        });
        NameIndex::build(&dataset)
    }

    fn variants_of(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wrong_part_is_rejected() {
        let index = test_index();
        let variants = variants_of(&["Hansen"]);
        let scored = score_candidate(
            &index,
            "Hansen",
            NamePart::First,
            &variants,
            "Hansen",
            None,
            70,
        );
        assert!(scored.is_none());
    }

    #[test]
    fn exact_match_scores_100() {
        let index = test_index();
        let variants = variants_of(&["John"]);
        let scored =
            score_candidate(&index, "John", NamePart::First, &variants, "John", None, 70)
                .unwrap();
        assert_eq!(scored.score, 100);
        assert!(scored.reasons.contains(&"Exact Match".to_string()));
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let index = test_index();
        let variants = variants_of(&["john"]);
        let scored =
            score_candidate(&index, "John", NamePart::First, &variants, "john", None, 70)
                .unwrap();
        assert_eq!(scored.score, 100);
    }

    #[test]
    fn base_similarity_uses_the_best_variant() {
        let index = test_index();
        // The raw query scores 80 against Søren, but the generated variant
        // matches exactly.
        let variants = variants_of(&["Soren", "Søren"]);
        let scored = score_candidate(
            &index,
            "Søren",
            NamePart::First,
            &variants,
            "Soren",
            None,
            70,
        )
        .unwrap();
        assert_eq!(scored.base_similarity, 100);
        assert!(scored.is_query_variant);
        assert!(scored
            .reasons
            .iter()
            .any(|r| r.contains("Query Variant")));
    }

    #[test]
    fn nordic_bonus_is_tagged() {
        let index = test_index();
        let variants = variants_of(&["Soren", "Sören"]);
        let scored = score_candidate(
            &index,
            "Søren",
            NamePart::First,
            &variants,
            "Soren",
            None,
            60,
        )
        .unwrap();
        assert!(scored.is_nordic);
        assert!(scored.reasons.iter().any(|r| r.contains("Nordic")));
    }

    #[test]
    fn popular_country_bonus_applies_above_threshold() {
        let index = test_index();
        let variants = variants_of(&["Soren"]);
        let scored = score_candidate(
            &index,
            "Søren",
            NamePart::First,
            &variants,
            "Soren",
            Some("DK"),
            60,
        )
        .unwrap();
        assert!(scored.reasons.iter().any(|r| r.contains("Popular:DK")));
    }

    #[test]
    fn present_but_unpopular_country_gets_no_bonus_or_penalty() {
        let index = test_index();
        let variants = variants_of(&["Soren"]);
        let scored = score_candidate(
            &index,
            "Søren",
            NamePart::First,
            &variants,
            "Soren",
            Some("SE"),
            60,
        )
        .unwrap();
        assert!(!scored.reasons.iter().any(|r| r.contains("Popular")));
        assert!(!scored.reasons.iter().any(|r| r.contains("Not in")));
    }

    #[test]
    fn missing_country_is_penalized() {
        let index = test_index();
        let variants = variants_of(&["John"]);
        let with_hint = score_candidate(
            &index,
            "John",
            NamePart::First,
            &variants,
            "Johny",
            Some("SE"),
            60,
        )
        .unwrap();
        assert!(with_hint.reasons.iter().any(|r| r.contains("Not in SE")));

        let without_hint =
            score_candidate(&index, "John", NamePart::First, &variants, "Johny", None, 60)
                .unwrap();
        assert_eq!(
            with_hint.score + COUNTRY_MISMATCH_PENALTY as u32,
            without_hint.score
        );
    }

    #[test]
    fn dataset_variant_bonus_requires_matching_origin() {
        let index = test_index();
        let variants = variants_of(&["Mikkel"]);
        let matching = score_candidate(
            &index,
            "Mikkel",
            NamePart::First,
            &variants,
            "Mikkel",
            Some("DK"),
            70,
        )
        .unwrap();
        assert!(matching
            .reasons
            .iter()
            .any(|r| r.contains("Dataset Variant:DK")));

        let other = score_candidate(
            &index,
            "Mikkel",
            NamePart::First,
            &variants,
            "Mikkel",
            Some("SE"),
            70,
        )
        .unwrap();
        assert!(!other.reasons.iter().any(|r| r.contains("Dataset Variant")));
    }

    #[test]
    fn low_base_similarity_is_rejected_early() {
        let index = test_index();
        let variants = variants_of(&["Xyz"]);
        let scored =
            score_candidate(&index, "John", NamePart::First, &variants, "Xyz", None, 70);
        assert!(scored.is_none());
    }

    #[test]
    fn score_is_clamped_to_100() {
        let index = test_index();
        // Exact match + query variant + nordic + popular country stacks
        // far beyond 100 before the clamp.
        let variants = variants_of(&["Søren", "Soren"]);
        let scored = score_candidate(
            &index,
            "Søren",
            NamePart::First,
            &variants,
            "Søren",
            Some("DK"),
            70,
        )
        .unwrap();
        assert_eq!(scored.score, 100);
    }

    #[test]
    fn below_threshold_result_is_dropped() {
        let index = test_index();
        let variants = variants_of(&["Johny"]);
        let scored =
            score_candidate(&index, "John", NamePart::First, &variants, "Johny", None, 95);
        assert!(scored.is_none());
    }

    #[test]
    fn similarity_only_tag_when_no_bonus_applies() {
        let index = test_index();
        let variants = variants_of(&["Johny"]);
        let scored =
            score_candidate(&index, "John", NamePart::First, &variants, "Johny", None, 70)
                .unwrap();
        assert_eq!(scored.reasons, vec!["Similarity Only".to_string()]);
    }
}
