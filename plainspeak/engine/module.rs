use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a tier or domain from a string.
///
/// Enum validation is the caller's responsibility; the engine itself never
/// fails on any well-typed input.
#[derive(Debug, Error)]
#[error("unrecognized {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

/// Target reading level controlling dictionary and sentence-length tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Plainest output, shortest sentences.
    Simple,
    /// Everyday register.
    Standard,
    /// Precise register for practiced readers.
    Educated,
}

impl ComplexityTier {
    /// Returns the lowercase label used in lexicon lookup and telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Standard => "standard",
            Self::Educated => "educated",
        }
    }
}

impl fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplexityTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "standard" => Ok(Self::Standard),
            "educated" => Ok(Self::Educated),
            _ => Err(ParseEnumError {
                kind: "tier",
                value: s.to_string(),
            }),
        }
    }
}

/// Source-text domain. Informational only: every tier dictionary merges all
/// domains, so `Domain` never gates which entries apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Contracts, statutes, filings.
    Legal,
    /// Clinical and patient-facing text.
    Medical,
    /// Software and engineering documentation.
    Technical,
    /// Papers, theses, coursework.
    Academic,
    /// Banking, investment, accounting.
    Financial,
    /// No declared domain.
    Auto,
}

impl Domain {
    /// Returns the lowercase label used in telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Medical => "medical",
            Self::Technical => "technical",
            Self::Academic => "academic",
            Self::Financial => "financial",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legal" => Ok(Self::Legal),
            "medical" => Ok(Self::Medical),
            "technical" => Ok(Self::Technical),
            "academic" => Ok(Self::Academic),
            "financial" => Ok(Self::Financial),
            "auto" => Ok(Self::Auto),
            _ => Err(ParseEnumError {
                kind: "domain",
                value: s.to_string(),
            }),
        }
    }
}

/// Flesch-Kincaid-style readability report, computed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    /// Approximate U.S. school grade, 1-18, or 0 for empty input.
    pub grade_level: u8,
    /// Grade level plus five.
    pub reading_age: u8,
    /// Number of sentences found.
    pub sentence_count: usize,
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Approximate total syllables.
    pub syllable_count: usize,
    /// Words per sentence.
    pub avg_sentence_length: f64,
    /// Syllables per word.
    pub avg_syllables_per_word: f64,
    /// Band label derived from the grade level.
    pub complexity_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parses_case_insensitively() {
        assert_eq!(
            "Educated".parse::<ComplexityTier>().unwrap(),
            ComplexityTier::Educated
        );
        assert!("expert".parse::<ComplexityTier>().is_err());
    }

    #[test]
    fn domain_round_trips_through_label() {
        for domain in [
            Domain::Legal,
            Domain::Medical,
            Domain::Technical,
            Domain::Academic,
            Domain::Financial,
            Domain::Auto,
        ] {
            assert_eq!(domain.label().parse::<Domain>().unwrap(), domain);
        }
    }

    #[test]
    fn tier_serializes_to_lowercase() {
        let json = serde_json::to_string(&ComplexityTier::Simple).unwrap();
        assert_eq!(json, "\"simple\"");
    }
}
