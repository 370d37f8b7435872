//! Static substitution tables for Nordic orthography.
//!
//! The general table covers sequences a non-Nordic keyboard flattens
//! ("aa" → "å", "oe" → "ø"/"ö"), common transliterations ("ph" → "f",
//! "sch" → "sk") and single letters with diacritic counterparts. The
//! pattern table covers two-letter windows whose vowel shifts per country
//! ("go" → "gö" in Sweden, "gø" in Denmark/Norway). The initial table
//! covers Icelandic thorn at word start.
//!
//! Order inside the general table does not matter; application is driven
//! longest-pattern-first by the generator, and results are sets, so target
//! order within a rule is not observable either.

use super::types::{InitialRule, PatternRule, RuleTarget, SubstitutionRule};

/// The five Nordic country codes that enable variant generation by hint.
pub const NORDIC_COUNTRIES: &[&str] = &["SE", "DK", "NO", "IS", "FI"];

/// Letters whose presence in a query makes variant generation worthwhile.
///
/// A query containing none of these (and carrying no Nordic country hint)
/// has no plausible substitution target, so the engine skips generation
/// entirely for it.
pub const VARIANT_TRIGGER_LETTERS: &str = "acdghklmnoprstuwxyz";

const SE_DK_NO: &[&str] = &["SE", "DK", "NO"];
const DK_NO_IS: &[&str] = &["DK", "NO", "IS"];
const SE_FI: &[&str] = &["SE", "FI"];
const DK_NO: &[&str] = &["DK", "NO"];
const SE_FI_IS: &[&str] = &["SE", "FI", "IS"];
const SE_DK: &[&str] = &["SE", "DK"];
const IS: &[&str] = &["IS"];
const FI: &[&str] = &["FI"];

/// General substitutions, matched at any position.
pub static GENERAL_RULES: &[SubstitutionRule] = &[
    SubstitutionRule {
        pattern: "sch",
        targets: &[RuleTarget::any("sk")],
    },
    SubstitutionRule {
        pattern: "aa",
        targets: &[RuleTarget::only("å", SE_DK_NO)],
    },
    SubstitutionRule {
        pattern: "ae",
        targets: &[
            RuleTarget::only("æ", DK_NO_IS),
            RuleTarget::only("ä", SE_FI),
        ],
    },
    SubstitutionRule {
        pattern: "oe",
        targets: &[
            RuleTarget::only("ø", DK_NO),
            RuleTarget::only("ö", SE_FI_IS),
        ],
    },
    SubstitutionRule {
        pattern: "th",
        targets: &[RuleTarget::only("þ", IS), RuleTarget::any("t")],
    },
    SubstitutionRule {
        pattern: "ph",
        targets: &[RuleTarget::any("f")],
    },
    SubstitutionRule {
        pattern: "ch",
        targets: &[RuleTarget::any("k")],
    },
    SubstitutionRule {
        pattern: "ck",
        targets: &[RuleTarget::any("k")],
    },
    SubstitutionRule {
        pattern: "qu",
        targets: &[RuleTarget::any("kv")],
    },
    SubstitutionRule {
        pattern: "a",
        targets: &[
            RuleTarget::only("å", SE_DK),
            RuleTarget::only("ä", SE_FI),
            RuleTarget::only("á", IS),
        ],
    },
    SubstitutionRule {
        pattern: "o",
        targets: &[
            RuleTarget::only("ö", SE_FI_IS),
            RuleTarget::only("ø", DK_NO),
            RuleTarget::only("ó", IS),
        ],
    },
    SubstitutionRule {
        pattern: "e",
        targets: &[RuleTarget::only("é", IS)],
    },
    SubstitutionRule {
        pattern: "i",
        targets: &[RuleTarget::only("í", IS)],
    },
    SubstitutionRule {
        pattern: "u",
        targets: &[RuleTarget::only("ú", IS)],
    },
    SubstitutionRule {
        pattern: "y",
        targets: &[RuleTarget::only("ý", IS)],
    },
    SubstitutionRule {
        pattern: "d",
        targets: &[RuleTarget::only("ð", IS)],
    },
    SubstitutionRule {
        // Context-free: both hard and soft readings are generated.
        pattern: "c",
        targets: &[RuleTarget::any("k"), RuleTarget::any("s")],
    },
    SubstitutionRule {
        pattern: "w",
        targets: &[RuleTarget::except("v", FI)],
    },
    SubstitutionRule {
        pattern: "x",
        targets: &[RuleTarget::any("ks")],
    },
    SubstitutionRule {
        pattern: "z",
        targets: &[RuleTarget::any("s")],
    },
];

/// Two-character window substitutions, applied independently of the
/// general table.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        pattern: "go",
        targets: &[("SE", "gö"), ("DK", "gø"), ("NO", "gø")],
    },
    PatternRule {
        pattern: "so",
        targets: &[("SE", "sö"), ("DK", "sø"), ("NO", "sø")],
    },
    PatternRule {
        pattern: "mo",
        targets: &[("DK", "mø"), ("NO", "mø")],
    },
];

/// Word-initial substitutions, applied only when index 0 survived the
/// general pass.
pub static INITIAL_RULES: &[InitialRule] = &[InitialRule {
    pattern: 't',
    targets: &[("IS", "þ")],
}];

/// Distinct general-rule pattern lengths, longest first.
pub fn pattern_lengths_desc() -> Vec<usize> {
    let mut lengths: Vec<usize> = GENERAL_RULES
        .iter()
        .map(|r| r.pattern.chars().count())
        .collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths.dedup();
    lengths
}

/// Look up the general rule for a lowercase span, if any.
pub fn general_rule_for(span: &str) -> Option<&'static SubstitutionRule> {
    GENERAL_RULES.iter().find(|r| r.pattern == span)
}

/// Look up the pattern rule for a lowercase two-character window, if any.
pub fn pattern_rule_for(window: &str) -> Option<&'static PatternRule> {
    PATTERN_RULES.iter().find(|r| r.pattern == window)
}

/// Look up the initial rule for a lowercase first character, if any.
pub fn initial_rule_for(first: char) -> Option<&'static InitialRule> {
    INITIAL_RULES.iter().find(|r| r.pattern == first)
}
