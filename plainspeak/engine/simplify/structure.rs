use once_cell::sync::Lazy;
use regex::Regex;

use crate::helper::{find_ignore_ascii_case, split_sentences_keep_terminators, word_count};
use crate::module::ComplexityTier;

/// Maximum words a sentence may carry before the splitter intervenes.
#[must_use]
pub const fn max_sentence_words(tier: ComplexityTier) -> usize {
    match tier {
        ComplexityTier::Simple => 12,
        ComplexityTier::Standard => 18,
        ComplexityTier::Educated => 25,
    }
}

// Ordered break connectors per tier; the first one found wins.
const SIMPLE_CONNECTORS: &[&str] = &[", and", ", but", ", so", ", then"];
const STANDARD_CONNECTORS: &[&str] = &[", and", ", but", ", so", ", then", ", which", ", because"];
const EDUCATED_CONNECTORS: &[&str] = &[
    ", and", ", but", ", so", ", then", ", which", ", because", " which", " that", " while",
    " although",
];

const fn connectors_for(tier: ComplexityTier) -> &'static [&'static str] {
    match tier {
        ComplexityTier::Simple => SIMPLE_CONNECTORS,
        ComplexityTier::Standard => STANDARD_CONNECTORS,
        ComplexityTier::Educated => EDUCATED_CONNECTORS,
    }
}

// Simple-tier transitions announced at the start of the split-off half.
fn transition_for(connector: &str) -> Option<&'static str> {
    match connector {
        ", and" => Some("Also,"),
        ", but" => Some("However,"),
        ", so" => Some("Therefore,"),
        _ => None,
    }
}

/// Breaks sentences exceeding the tier's word threshold at the first
/// matching connector, falling back to the first comma at or past the
/// character midpoint. Sentences with neither are left intact.
#[must_use]
pub fn break_long_sentences(text: &str, tier: ComplexityTier) -> String {
    let limit = max_sentence_words(tier);
    let mut rebuilt = Vec::new();
    for sentence in split_sentences_keep_terminators(text) {
        if word_count(&sentence) > limit {
            rebuilt.push(split_long_sentence(&sentence, tier));
        } else {
            rebuilt.push(sentence);
        }
    }
    rebuilt.join(" ")
}

fn split_long_sentence(sentence: &str, tier: ComplexityTier) -> String {
    for connector in connectors_for(tier) {
        if let Some(idx) = find_ignore_ascii_case(sentence, connector) {
            let first = sentence[..idx].trim_end();
            let rest = sentence[idx + connector.len()..].trim_start();
            if rest.is_empty() {
                continue;
            }
            if tier == ComplexityTier::Simple {
                if let Some(transition) = transition_for(connector) {
                    return format!("{first}. {transition} {rest}");
                }
            }
            return format!("{first}. {rest}");
        }
    }
    split_at_midpoint_comma(sentence, tier)
}

fn split_at_midpoint_comma(sentence: &str, tier: ComplexityTier) -> String {
    let midpoint_chars = sentence.chars().count() / 2;
    let midpoint = sentence
        .char_indices()
        .nth(midpoint_chars)
        .map_or_else(|| sentence.len(), |(idx, _)| idx);
    let Some(relative) = sentence[midpoint..].find(',') else {
        return sentence.to_string();
    };
    let comma = midpoint + relative;
    let first = sentence[..comma].trim_end();
    let mut rest = sentence[comma + 1..].trim_start().to_string();
    if rest.is_empty() {
        return sentence.to_string();
    }
    if tier == ComplexityTier::Simple {
        rest = capitalize_first(&rest);
    }
    format!("{first}. {rest}")
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

static WAS_PASSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\w+) was (\w+ed) by (\w+)\b").unwrap());
// The "is" form captures the verb root so the rewrite can conjugate it.
static IS_PASSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\w+) is (\w+)ed by (\w+)\b").unwrap());

// Simple-tier conditional collapses.
static CONDITIONALS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\bif and only if\b").unwrap(), "only if"),
        (Regex::new(r"(?i)\bprovided that\b").unwrap(), "if"),
        (Regex::new(r"(?i)\bunless and until\b").unwrap(), "until"),
    ]
});

/// Token-level passive-to-active rewriting plus, for the simple tier,
/// conditional collapses. These are exact three-group pattern rewrites and
/// will misfire on sentences that merely resemble the shape; that is the
/// documented trade-off.
#[must_use]
pub fn simplify_structure(text: &str, tier: ComplexityTier) -> String {
    let mut out = WAS_PASSIVE
        .replace_all(text, "${3} ${2} ${1}")
        .into_owned();
    out = IS_PASSIVE.replace_all(&out, "${3} ${2}s ${1}").into_owned();
    if tier == ComplexityTier::Simple {
        for (pattern, replacement) in CONDITIONALS.iter() {
            out = pattern.replace_all(&out, *replacement).into_owned();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sentences_pass_through() {
        let text = "The report is ready. It ships today.";
        assert_eq!(break_long_sentences(text, ComplexityTier::Simple), text);
    }

    #[test]
    fn simple_tier_adds_a_transition_word() {
        let text = "The committee reviewed every single submission in detail, and the final \
                    decision will be announced next week.";
        let out = break_long_sentences(text, ComplexityTier::Simple);
        assert!(out.contains("in detail. Also, the final decision"));
    }

    #[test]
    fn standard_tier_splits_without_transition() {
        let text = "The committee reviewed every single submission in detail and with care, but \
                    the final decision will be announced at some point next week.";
        let out = break_long_sentences(text, ComplexityTier::Standard);
        assert!(out.contains("with care. the final decision"));
        assert!(!out.contains("However,"));
    }

    #[test]
    fn educated_tier_tolerates_longer_sentences() {
        let text = "The committee reviewed every single submission in detail, and the final \
                    decision will be announced next week.";
        let out = break_long_sentences(text, ComplexityTier::Educated);
        assert_eq!(out, text);
    }

    #[test]
    fn falls_back_to_midpoint_comma() {
        let text = "The exhausted panel of judges deliberated well into the evening, reviewing \
                    every single available option.";
        let out = break_long_sentences(text, ComplexityTier::Simple);
        assert!(out.contains("evening. Reviewing every"));
    }

    #[test]
    fn sentence_without_break_point_is_left_intact() {
        let text = "One two three four five six seven eight nine ten eleven twelve thirteen.";
        assert_eq!(break_long_sentences(text, ComplexityTier::Simple), text);
    }

    #[test]
    fn was_passive_swaps_subject_and_agent() {
        let out = simplify_structure("The motion was rejected by parliament.", ComplexityTier::Standard);
        assert_eq!(out, "The parliament rejected motion.");
    }

    #[test]
    fn is_passive_gains_third_person_s() {
        let out = simplify_structure("The fee is collected by treasury.", ComplexityTier::Standard);
        assert_eq!(out, "The treasury collects fee.");
    }

    #[test]
    fn conditionals_collapse_on_simple_only() {
        let text = "Payment stops unless and until work resumes.";
        let simple = simplify_structure(text, ComplexityTier::Simple);
        let standard = simplify_structure(text, ComplexityTier::Standard);
        assert_eq!(simple, "Payment stops until work resumes.");
        assert_eq!(standard, text);
    }
}
