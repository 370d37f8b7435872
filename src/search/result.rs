//! Scored search result types.

use serde::{Deserialize, Serialize};

use crate::index::{NameInfo, NamePart};
use crate::phonetic::PhoneticCodes;

/// What kind of match a result represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// Matched against the first-name records.
    #[serde(rename = "first_name")]
    FirstName,
    /// Matched against the last-name records.
    #[serde(rename = "last_name")]
    LastName,
    /// Produced purely by orthographic substitution; not in the dataset.
    #[serde(rename = "rule_generated_variant")]
    RuleGeneratedVariant,
}

impl From<NamePart> for MatchKind {
    fn from(part: NamePart) -> Self {
        match part {
            NamePart::First => MatchKind::FirstName,
            NamePart::Last => MatchKind::LastName,
        }
    }
}

/// Where a result came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchOrigin {
    /// A dataset entry, carrying its source metadata.
    Dataset(NameInfo),
    /// A rule-generated variant of the query, not present in the dataset.
    RuleVariant {
        /// The query the variant was generated from.
        source_query: String,
    },
}

/// One ranked candidate correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// The suggested spelling.
    pub name: String,
    /// Final score, clamped to 0–100.
    pub score: u32,
    /// Base lexical similarity before bonuses, rounded.
    pub base_similarity: u32,
    /// Double Metaphone codes of the suggested spelling.
    pub phonetic: PhoneticCodes,
    /// Whether the name is flagged Nordic.
    pub is_nordic: bool,
    /// Whether the name is one of the generated query variants (and not
    /// the raw query itself).
    pub is_query_variant: bool,
    /// Whether the name exists in the reference dataset.
    pub in_dataset: bool,
    /// Match kind.
    pub kind: MatchKind,
    /// Source metadata or variant provenance.
    pub origin: MatchOrigin,
    /// Human-readable score reason tags, e.g. `"+5 (Nordic)"`.
    pub reasons: Vec<String>,
}

/// Ranked results for both name parts of one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Ranked first-name matches, best first.
    pub first_name_matches: Vec<ScoredResult>,
    /// Ranked last-name matches, best first.
    pub last_name_matches: Vec<ScoredResult>,
}
