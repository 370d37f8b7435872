//! Double Metaphone encoding for name indexing and retrieval.
//!
//! Every indexed name is encoded once into a primary and a secondary
//! phonetic code; ambiguous pronunciations produce two distinct codes, and
//! both are registered in the index so either pronunciation of a query can
//! reach the name.
//!
//! The encoder is wrapped in `catch_unwind`: a name the underlying encoder
//! cannot handle degrades to a skipped record (during indexing) or an empty
//! code pair (during retrieval), never a crash.

use std::panic::{self, AssertUnwindSafe};

use rphonetic::{DoubleMetaphone, Encoder};
use serde::{Deserialize, Serialize};

/// Primary and secondary Double Metaphone codes for a single name.
///
/// Either code may be empty (the encoder produced nothing) and the secondary
/// may equal the primary (no ambiguous pronunciation). Consumers only treat
/// the secondary as an extra lookup key when it differs from the primary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneticCodes {
    /// Primary Double Metaphone code.
    pub primary: String,
    /// Secondary (alternate) Double Metaphone code.
    pub secondary: String,
}

impl PhoneticCodes {
    /// True when both codes are empty.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// True when the secondary code is a distinct, non-empty lookup key.
    pub fn has_distinct_secondary(&self) -> bool {
        !self.secondary.is_empty() && self.secondary != self.primary
    }
}

/// Encode a name into its Double Metaphone code pair.
///
/// Returns `None` if the encoder panics on the input; callers treat that as
/// a malformed name and skip or degrade locally.
pub fn encode_name(name: &str) -> Option<PhoneticCodes> {
    let encoded = panic::catch_unwind(AssertUnwindSafe(|| {
        let encoder = DoubleMetaphone::default();
        PhoneticCodes {
            primary: encoder.encode(name),
            secondary: encoder.encode_alternate(name),
        }
    }));
    match encoded {
        Ok(codes) => Some(codes),
        Err(_) => {
            log::warn!("double metaphone failed on {:?}", name);
            None
        }
    }
}
