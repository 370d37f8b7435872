//! Single-pass variant generation with case preservation.

use rustc_hash::FxHashSet;

use super::rules;

/// Generate the orthographic variant set for a name.
///
/// The result always contains the original name (unless the input is
/// empty). Each eligible rule target yields one variant with exactly one
/// span substituted; variants are never fed back through the rules, so the
/// pass is a single bounded scan over the input.
///
/// Casing of the substituted span is preserved: an all-caps span produces
/// an all-caps replacement, a title-case span a title-case replacement,
/// anything else lowercase.
///
/// # Examples
///
/// ```rust
/// use nordname::variant::generate_variants;
///
/// let variants = generate_variants("Soren", Some("SE"));
/// assert!(variants.contains("Soren"));
/// assert!(variants.contains("Sören"));
///
/// let variants = generate_variants("Soren", Some("DK"));
/// assert!(variants.contains("Søren"));
/// ```
pub fn generate_variants(name: &str, country: Option<&str>) -> FxHashSet<String> {
    let mut results = FxHashSet::default();
    if name.is_empty() {
        return results;
    }
    results.insert(name.to_string());

    let chars: Vec<char> = name.chars().collect();
    let lower: Vec<char> = chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();
    let len = chars.len();
    let mut consumed = vec![false; len];

    // General substitutions: longest pattern first, consumed spans are
    // closed to shorter patterns.
    for pattern_len in rules::pattern_lengths_desc() {
        if pattern_len > len {
            continue;
        }
        for start in 0..=(len - pattern_len) {
            if consumed[start] {
                continue;
            }
            let span: String = lower[start..start + pattern_len].iter().collect();
            let Some(rule) = rules::general_rule_for(&span) else {
                continue;
            };
            let original_span: String = chars[start..start + pattern_len].iter().collect();
            let mut substituted = false;
            for target in rule.targets {
                if !target.allowed_for(country) {
                    continue;
                }
                results.insert(splice(
                    &chars,
                    start,
                    pattern_len,
                    &preserve_case(&original_span, target.text),
                ));
                substituted = true;
            }
            if substituted {
                for slot in &mut consumed[start..start + pattern_len] {
                    *slot = true;
                }
            }
        }
    }

    // Pattern substitutions: independent two-character windows, free to
    // overlap spans the general pass consumed.
    for start in 0..len.saturating_sub(1) {
        let window: String = lower[start..start + 2].iter().collect();
        let Some(rule) = rules::pattern_rule_for(&window) else {
            continue;
        };
        let original_span: String = chars[start..start + 2].iter().collect();
        for (rule_country, replacement) in rule.targets {
            if country.map_or(true, |c| c == *rule_country) {
                results.insert(splice(
                    &chars,
                    start,
                    2,
                    &preserve_case(&original_span, replacement),
                ));
            }
        }
    }

    // Initial substitution: only if position 0 survived the general pass.
    if !consumed[0] {
        if let Some(rule) = rules::initial_rule_for(lower[0]) {
            let original_span: String = chars[..1].iter().collect();
            for (rule_country, replacement) in rule.targets {
                if country.map_or(true, |c| c == *rule_country) {
                    results.insert(splice(
                        &chars,
                        0,
                        1,
                        &preserve_case(&original_span, replacement),
                    ));
                }
            }
        }
    }

    results
}

/// Rebuild the name with `replacement` in place of `chars[start..start+len]`.
fn splice(chars: &[char], start: usize, len: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(chars.len() + replacement.len());
    out.extend(&chars[..start]);
    out.push_str(replacement);
    out.extend(&chars[start + len..]);
    out
}

/// Re-case a replacement to match the span it replaces.
///
/// Title-case spans ("Aa", "A") produce title-case replacements, all-caps
/// spans ("AA") produce uppercase replacements, everything else lowercase.
fn preserve_case(original: &str, replacement: &str) -> String {
    if original.is_empty() || replacement.is_empty() {
        return replacement.to_string();
    }
    let original_chars: Vec<char> = original.chars().collect();
    let first_upper = original_chars[0].is_uppercase();
    let rest_lower = original_chars[1..].iter().all(|c| !c.is_uppercase());
    let all_upper = original_chars.iter().all(|c| !c.is_lowercase());

    if first_upper && rest_lower {
        let mut out = String::with_capacity(replacement.len());
        let mut rest = replacement.chars();
        if let Some(first) = rest.next() {
            out.extend(first.to_uppercase());
        }
        out.push_str(&rest.as_str().to_lowercase());
        out
    } else if first_upper && all_upper {
        replacement.to_uppercase()
    } else {
        replacement.to_lowercase()
    }
}
