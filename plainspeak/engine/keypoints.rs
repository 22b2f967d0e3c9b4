use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::helper::split_sentences_keep_terminators;

const MAX_POINTS: usize = 5;
const CANDIDATE_POOL: usize = 8;
const MIN_SENTENCE_CHARS: usize = 20;
const SIMILARITY_CEILING: f64 = 0.70;

// All domain marker categories apply to every sentence; the declared domain
// deliberately plays no part in scoring.
static IMPORTANCE_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:shall|must|liable|obligation|agreement|breach|rights|prohibited|diagnosis|treatment|symptoms?|dosage|dose|risk|severe|chronic|error|failure|critical|required|configure|install|security|update|finding|evidence|result|significant|research|study|payment|interest|fee|penalty|deadline|cost|tax|investment)\b",
    )
    .unwrap()
});

static STRUCTURAL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:first|second|third|finally|in conclusion|in summary|importantly|note|warning|key|essential|remember)\b",
    )
    .unwrap()
});

static QUESTION_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:what|why|how|when|where|who|which)\b").unwrap());

static DATE_LIKE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b|\b(?:19|20)\d{2}\b").unwrap());

/// A sentence paired with its importance score and original position.
/// Ephemeral: used only while selecting key points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceScore {
    /// Raw sentence, trimmed, terminator kept.
    pub sentence: String,
    /// Summed heuristic score.
    pub score: i32,
    /// Index among the scored sentences.
    pub position: usize,
}

/// Selects up to five representative sentences from the ORIGINAL text.
///
/// Scoring is additive over marker hits, position bonuses, and shape
/// signals; candidates too similar to an already accepted sentence
/// (word-set Jaccard above 0.70) are skipped.
#[must_use]
pub fn extract_key_points(text: &str) -> Vec<String> {
    let sentences: Vec<String> = split_sentences_keep_terminators(text)
        .into_iter()
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .collect();
    if sentences.is_empty() {
        return Vec::new();
    }

    let last = sentences.len() - 1;
    let mut scored: Vec<SentenceScore> = sentences
        .iter()
        .enumerate()
        .map(|(position, sentence)| SentenceScore {
            sentence: sentence.clone(),
            score: score_sentence(sentence, position, last),
            position,
        })
        .collect();
    // Stable sort: original order is the tiebreak on equal scores.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut selected: Vec<String> = Vec::new();
    let mut selected_words: Vec<HashSet<String>> = Vec::new();
    for candidate in scored.into_iter().take(CANDIDATE_POOL) {
        if selected.len() == MAX_POINTS {
            break;
        }
        let words = word_set(&candidate.sentence);
        let redundant = selected_words
            .iter()
            .any(|accepted| jaccard(&words, accepted) > SIMILARITY_CEILING);
        if redundant {
            continue;
        }
        selected.push(candidate.sentence);
        selected_words.push(words);
    }
    selected
}

fn score_sentence(sentence: &str, position: usize, last: usize) -> i32 {
    let mut score = 0i32;
    score += 3 * IMPORTANCE_MARKERS.find_iter(sentence).count() as i32;
    score += 2 * STRUCTURAL_MARKERS.find_iter(sentence).count() as i32;
    score += QUESTION_MARKERS.find_iter(sentence).count() as i32;

    if position == 0 {
        score += 3;
    }
    if position == last {
        score += 2;
    }
    if position < 3 {
        score += 1;
    }

    let chars = sentence.chars().count();
    if chars > 100 {
        score += 1;
    }
    if chars > 200 {
        score += 1;
    }
    if chars < 50 {
        score -= 1;
    }
    if chars > 300 {
        score -= 1;
    }

    if sentence.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if DATE_LIKE.is_match(sentence) {
        score += 1;
    }
    let capitalized = sentence
        .split_whitespace()
        .filter(|token| token.chars().next().is_some_and(char::is_uppercase))
        .count();
    if capitalized > 3 {
        score += 1;
    }
    if sentence.contains('!') {
        score += 1;
    }
    if sentence.contains(':') {
        score += 1;
    }
    score
}

fn word_set(sentence: &str) -> HashSet<String> {
    sentence
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
