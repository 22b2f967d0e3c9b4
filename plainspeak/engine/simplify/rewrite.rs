use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::{self, AffixPosition, TierDictionary, AFFIXES, CONNECTIVES};
use crate::module::ComplexityTier;

/// A compiled substitution: word-boundary, case-insensitive pattern plus its
/// replacement text.
struct CompiledRule {
    pattern: Regex,
    replacement: String,
}

fn compile_dictionary(dictionary: &TierDictionary) -> Vec<CompiledRule> {
    dictionary
        .iter()
        .map(|(phrase, replacement)| CompiledRule {
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap(),
            replacement: (*replacement).to_string(),
        })
        .collect()
}

static SIMPLE_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile_dictionary(lexicon::dictionary_for(ComplexityTier::Simple)));
static STANDARD_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile_dictionary(lexicon::dictionary_for(ComplexityTier::Standard)));
static EDUCATED_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile_dictionary(lexicon::dictionary_for(ComplexityTier::Educated)));

// Affix roots must keep at least three letters so short everyday words are
// never dismembered.
static AFFIX_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    AFFIXES
        .iter()
        .map(|affix| match affix.position {
            AffixPosition::Suffix => CompiledRule {
                pattern: Regex::new(&format!(r"(?i)\b([A-Za-z]{{3,}}){}\b", affix.fragment))
                    .unwrap(),
                replacement: format!("$1 {}", affix.expansion),
            },
            AffixPosition::Prefix => CompiledRule {
                pattern: Regex::new(&format!(r"(?i)\b{}([A-Za-z]{{3,}})\b", affix.fragment))
                    .unwrap(),
                replacement: format!("{} $1", affix.expansion),
            },
        })
        .collect()
});

static CONNECTIVE_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| {
    CONNECTIVES
        .iter()
        .map(|(phrase, replacement)| CompiledRule {
            pattern: Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase))).unwrap(),
            replacement: (*replacement).to_string(),
        })
        .collect()
});

const fn rules_for(tier: ComplexityTier) -> &'static Lazy<Vec<CompiledRule>> {
    match tier {
        ComplexityTier::Simple => &SIMPLE_RULES,
        ComplexityTier::Standard => &STANDARD_RULES,
        ComplexityTier::Educated => &EDUCATED_RULES,
    }
}

fn apply_rules(text: String, rules: &[CompiledRule]) -> String {
    let mut out = text;
    for rule in rules {
        if rule.pattern.is_match(&out) {
            out = rule
                .pattern
                .replace_all(&out, rule.replacement.as_str())
                .into_owned();
        }
    }
    out
}

/// Replaces tier-dictionary jargon and expands morphological affixes.
///
/// Dictionary entries apply in insertion order; a replacement may contain a
/// later key and be rewritten again in the same pass. Affixes apply after
/// the dictionary and uniformly regardless of tier, so a tier-specific gloss
/// always wins over the generic expansion.
#[must_use]
pub fn rewrite(text: &str, tier: ComplexityTier) -> String {
    if text.is_empty() {
        return String::new();
    }
    let after_jargon = apply_rules(text.to_string(), rules_for(tier));
    apply_rules(after_jargon, &AFFIX_RULES)
}

/// Collapses verbose connective phrases, independent of tier.
#[must_use]
pub fn simplify_phrases(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    apply_rules(text.to_string(), &CONNECTIVE_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_whole_words_case_insensitively() {
        let out = rewrite("The Prognosis is good", ComplexityTier::Simple);
        assert_eq!(out, "The likely outcome is good");
    }

    #[test]
    fn does_not_match_inside_larger_words() {
        // "renal" must not fire inside "adrenal".
        let out = rewrite("adrenal function", ComplexityTier::Simple);
        assert_eq!(out, "adrenal function");
    }

    #[test]
    fn tiers_produce_different_replacements() {
        let simple = rewrite("hypertension", ComplexityTier::Simple);
        let educated = rewrite("hypertension", ComplexityTier::Educated);
        assert_eq!(simple, "high blood pressure");
        assert_eq!(educated, "elevated blood pressure");
    }

    #[test]
    fn replacements_cascade_onto_later_keys() {
        let out = rewrite("This drug is contraindicated", ComplexityTier::Simple);
        assert_eq!(out, "This drug is not safe to use");
    }

    #[test]
    fn suffix_expansion_rewrites_unlisted_terms() {
        let out = rewrite("She has tendonitis", ComplexityTier::Standard);
        assert_eq!(out, "She has tendon inflammation");
    }

    #[test]
    fn prefix_expansion_keeps_the_root() {
        let out = rewrite("a pseudoscience claim", ComplexityTier::Standard);
        assert_eq!(out, "a false science claim");
    }

    #[test]
    fn dictionary_gloss_beats_generic_affix() {
        // "gastritis" ends in -itis but the tier dictionary catches the full
        // word before the affix pass can.
        let out = rewrite("gastritis", ComplexityTier::Simple);
        assert_eq!(out, "stomach upset");
    }

    #[test]
    fn connective_phrases_are_tier_independent() {
        let out = simplify_phrases("He paused in order to think");
        assert_eq!(out, "He paused to think");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(rewrite("", ComplexityTier::Simple), "");
        assert_eq!(simplify_phrases(""), "");
    }
}
