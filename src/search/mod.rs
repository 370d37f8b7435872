//! Candidate retrieval, scoring and search orchestration.
//!
//! A query for one name part flows through a linear pipeline:
//!
//! ```text
//! query ── variants ── candidates ── scored results ── ranked, truncated
//!            (cached)   (phonetic ∪ lexical)  (bonuses/penalties)
//! ```
//!
//! First-name and last-name searches run the pipeline independently; they
//! share only the read-only index and the country hint, never each other's
//! ranking.

mod candidates;
mod engine;
mod result;
pub mod scoring;

pub use candidates::{get_candidates, CandidateSet};
pub use engine::{EngineError, NameDetails, NameMatcher, RecordSummary};
pub use result::{MatchKind, MatchOrigin, ScoredResult, SearchResults};
