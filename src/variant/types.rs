//! Rule types for orthographic substitution.
//!
//! Every rule is a plain static value: a lowercase source pattern plus one
//! or more targets, each optionally gated on the caller-supplied country
//! hint. The tables in [`super::rules`] are normalized at definition time,
//! so rule application never has to interpret mixed shapes.

/// One candidate replacement for a matched pattern, optionally restricted
/// to (or excluded from) a set of countries.
///
/// Country gates only apply when the caller supplied a country hint; with
/// no hint every target is eligible, which deliberately over-generates
/// variants rather than missing a plausible spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTarget {
    /// Replacement text (lowercase; casing is restored per span).
    pub text: &'static str,
    /// Countries the target applies to, or `None` for all.
    pub applicable_countries: Option<&'static [&'static str]>,
    /// Countries the target must not apply to.
    pub excluded_countries: Option<&'static [&'static str]>,
}

impl RuleTarget {
    /// An ungated target, valid for every country.
    pub const fn any(text: &'static str) -> Self {
        Self {
            text,
            applicable_countries: None,
            excluded_countries: None,
        }
    }

    /// A target restricted to the given countries.
    pub const fn only(text: &'static str, countries: &'static [&'static str]) -> Self {
        Self {
            text,
            applicable_countries: Some(countries),
            excluded_countries: None,
        }
    }

    /// A target excluded from the given countries.
    pub const fn except(text: &'static str, countries: &'static [&'static str]) -> Self {
        Self {
            text,
            applicable_countries: None,
            excluded_countries: Some(countries),
        }
    }

    /// Whether this target is eligible under the given country hint.
    pub fn allowed_for(&self, country: Option<&str>) -> bool {
        let Some(country) = country else {
            return true;
        };
        if let Some(applicable) = self.applicable_countries {
            if !applicable.contains(&country) {
                return false;
            }
        }
        if let Some(excluded) = self.excluded_countries {
            if excluded.contains(&country) {
                return false;
            }
        }
        true
    }
}

/// A general substitution: a lowercase pattern of one or more characters
/// that may match at any position.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionRule {
    /// Lowercase source pattern.
    pub pattern: &'static str,
    /// Candidate replacements; each eligible target yields one variant.
    pub targets: &'static [RuleTarget],
}

/// A fixed two-character window substitution, keyed per country.
///
/// Pattern rules scan independently of the general table and may overlap
/// spans the general rules already consumed.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// Lowercase two-character source window.
    pub pattern: &'static str,
    /// `(country, replacement)` pairs; a pair fires when the hint matches
    /// the country, or when no hint was supplied.
    pub targets: &'static [(&'static str, &'static str)],
}

/// A substitution that applies only at index 0, and only when the general
/// table did not consume that index.
#[derive(Debug, Clone, Copy)]
pub struct InitialRule {
    /// Lowercase initial character.
    pub pattern: char,
    /// `(country, replacement)` pairs, same gating as [`PatternRule`].
    pub targets: &'static [(&'static str, &'static str)],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ungated_target_allows_everything() {
        let t = RuleTarget::any("k");
        assert!(t.allowed_for(None));
        assert!(t.allowed_for(Some("SE")));
        assert!(t.allowed_for(Some("US")));
    }

    #[test]
    fn applicable_countries_gate_only_with_a_hint() {
        let t = RuleTarget::only("å", &["SE", "DK", "NO"]);
        assert!(t.allowed_for(None));
        assert!(t.allowed_for(Some("SE")));
        assert!(!t.allowed_for(Some("FI")));
    }

    #[test]
    fn excluded_countries_block_the_hint() {
        let t = RuleTarget::except("v", &["FI"]);
        assert!(t.allowed_for(None));
        assert!(t.allowed_for(Some("SE")));
        assert!(!t.allowed_for(Some("FI")));
    }
}
