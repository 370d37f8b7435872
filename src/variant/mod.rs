//! Orthographic variant generation for Nordic name forms.
//!
//! This module turns a query name into the set of spellings a Nordic
//! speaker might actually have used: `"Soren"` becomes `"Sören"` for a
//! Swedish hint, `"Søren"` for a Danish one, `"Haakon"` becomes `"Håkon"`,
//! a leading `"T"` becomes `"Þ"` for Iceland, and so on.
//!
//! Three rule classes apply in a fixed order over a single pass:
//!
//! 1. **General substitutions** scan every position longest-pattern-first,
//!    marking consumed spans so a shorter pattern cannot re-match inside an
//!    already substituted range.
//! 2. **Pattern substitutions** scan fixed two-character windows
//!    independently; they may overlap general substitutions and only ever
//!    add variants.
//! 3. **Initial substitutions** fire at index 0, and only when that index
//!    was not consumed by a general substitution.
//!
//! Generation is pure and deterministic: the same `(name, country)` pair
//! always yields the same set, variants are never re-substituted, and the
//! original name is always a member of the result.

mod generate;
pub mod rules;
pub mod types;

pub use generate::generate_variants;
pub use rules::{NORDIC_COUNTRIES, VARIANT_TRIGGER_LETTERS};
pub use types::{InitialRule, PatternRule, RuleTarget, SubstitutionRule};
