use once_cell::sync::Lazy;
use regex::Regex;

use crate::{helper::split_sentences, module::ReadabilityMetrics};

// Trailing silent-e patterns stripped before vowel-group counting.
static SILENT_TAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static VOWEL_GROUPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

/// Approximates syllables in a single word. Words of three letters or fewer
/// count as one; otherwise the silent tail and a leading `y` are stripped
/// and vowel groups are counted, defaulting to one.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect::<String>()
        .to_lowercase();
    if cleaned.len() <= 3 {
        return 1;
    }
    let stripped = SILENT_TAIL.replace(&cleaned, "");
    let stripped = stripped.as_ref();
    let stripped = stripped.strip_prefix('y').unwrap_or(stripped);
    let groups = VOWEL_GROUPS.find_iter(stripped).count();
    groups.max(1)
}

const fn complexity_label(grade_level: u8) -> &'static str {
    match grade_level {
        0..=3 => "Very Easy",
        4..=6 => "Easy",
        7..=9 => "Standard",
        10..=12 => "High School",
        13..=16 => "College",
        _ => "Very Complex",
    }
}

/// Computes Flesch-Kincaid-style readability metrics for `text`.
///
/// Empty or word-free input reports grade 0, reading age 5, and the
/// "Unknown" label with all counts zeroed.
#[must_use]
pub fn readability(text: &str) -> ReadabilityMetrics {
    let sentence_count = split_sentences(text).len();
    let words: Vec<&str> = text.split_whitespace().collect();
    let word_count = words.len();
    if sentence_count == 0 || word_count == 0 {
        return ReadabilityMetrics {
            grade_level: 0,
            reading_age: 5,
            sentence_count: 0,
            word_count: 0,
            syllable_count: 0,
            avg_sentence_length: 0.0,
            avg_syllables_per_word: 0.0,
            complexity_label: "Unknown".to_string(),
        };
    }
    let syllable_count: usize = words.iter().map(|word| count_syllables(word)).sum();
    let avg_sentence_length = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;
    let raw_grade =
        (0.39 * avg_sentence_length + 11.8 * avg_syllables_per_word - 15.59).round() as i64;
    let grade_level = raw_grade.clamp(1, 18) as u8;
    ReadabilityMetrics {
        grade_level,
        reading_age: grade_level + 5,
        sentence_count,
        word_count,
        syllable_count,
        avg_sentence_length,
        avg_syllables_per_word,
        complexity_label: complexity_label(grade_level).to_string(),
    }
}
