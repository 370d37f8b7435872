//! Lexical similarity scorers on a 0–100 scale.
//!
//! Two scorers are exposed:
//!
//! - [`ratio`]: plain normalized-Levenshtein similarity, used for base
//!   similarity between a candidate and the query variants. Case-sensitive;
//!   callers lowercase as needed.
//! - [`weighted_ratio`]: a weighted-ratio style scorer for the candidate
//!   retrieval scan. It lowercases and trims its inputs, blends the full
//!   ratio with a discounted best-window partial ratio when lengths diverge,
//!   and with a discounted Jaro-Winkler score to reward shared prefixes.

use smallvec::SmallVec;
use strsim::{jaro_winkler, normalized_levenshtein};

/// Length divergence above which the partial ratio participates.
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
/// Discount applied to the best-window partial ratio.
const PARTIAL_SCALE: f64 = 0.9;
/// Discount applied to the Jaro-Winkler component.
const JARO_SCALE: f64 = 0.95;

/// Normalized Levenshtein similarity between two strings, 0–100.
///
/// Two empty strings score 100 (they are identical).
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best [`ratio`] between the shorter string and any equal-length character
/// window of the longer string, 0–100.
///
/// Used to keep a short query competitive against a long candidate (and
/// vice versa). Returns 0 when exactly one input is empty.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }
    if short.len() == long.len() {
        return ratio(a, b);
    }

    let needle: String = short.iter().collect();
    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let haystack: String = window.iter().collect();
        best = best.max(ratio(&needle, &haystack));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Weighted-ratio style similarity, 0–100.
///
/// Inputs are trimmed and lowercased. The score is the maximum of:
///
/// - the full normalized-Levenshtein [`ratio`],
/// - `0.9 ×` [`partial_ratio`] when the character lengths differ by more
///   than a factor of 1.5,
/// - `0.95 ×` the Jaro-Winkler similarity.
///
/// An empty input (after trimming) scores 0 against anything.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let length_ratio = len_a.max(len_b) / len_a.min(len_b);

    let mut score = ratio(&a, &b);
    if length_ratio > PARTIAL_LENGTH_RATIO {
        score = score.max(partial_ratio(&a, &b) * PARTIAL_SCALE);
    }
    score = score.max(jaro_winkler(&a, &b) * 100.0 * JARO_SCALE);
    score.min(100.0)
}
