use serde_json::json;

use super::{format, rewrite, structure};
use crate::{
    module::{ComplexityTier, Domain},
    telemetry::EngineTelemetry,
};

/// Fixed-order simplification pipeline: jargon/affix rewriting, connective
/// phrase collapse, long-sentence breaking, passive restructuring, then
/// formatting cleanup.
#[derive(Clone, Default)]
pub struct SimplifyPipeline {
    telemetry: Option<EngineTelemetry>,
}

impl SimplifyPipeline {
    /// Creates a pipeline, optionally wired to telemetry sinks.
    #[must_use]
    pub fn new(telemetry: Option<EngineTelemetry>) -> Self {
        Self { telemetry }
    }

    /// Simplifies `text` toward the tier's reading level.
    ///
    /// `domain` is informational: it is logged but never alters dictionary
    /// selection. Empty input returns empty output; minimum-length gating is
    /// the caller's policy, not the pipeline's.
    #[must_use]
    pub fn simplify(&self, text: &str, domain: Domain, tier: ComplexityTier) -> String {
        if text.is_empty() {
            return String::new();
        }
        let rewritten = rewrite::rewrite(text, tier);
        let condensed = rewrite::simplify_phrases(&rewritten);
        let broken = structure::break_long_sentences(&condensed, tier);
        let restructured = structure::simplify_structure(&broken, tier);
        let cleaned = format::clean_formatting(&restructured);
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(
                shared_logging::LogLevel::Info,
                "engine.simplify.complete",
                json!({
                    "domain": domain.label(),
                    "tier": tier.label(),
                    "input_chars": text.len(),
                    "output_chars": cleaned.len(),
                }),
            );
        }
        cleaned
    }
}

/// One-shot simplification with a detached pipeline and no telemetry.
#[must_use]
pub fn simplify(text: &str, domain: Domain, tier: ComplexityTier) -> String {
    SimplifyPipeline::default().simplify(text, domain, tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_empty_output() {
        for tier in [
            ComplexityTier::Simple,
            ComplexityTier::Standard,
            ComplexityTier::Educated,
        ] {
            assert_eq!(simplify("", Domain::Auto, tier), "");
        }
    }

    #[test]
    fn medical_example_differs_by_tier() {
        let text = "Patient has gastritis and hypertension";
        let simple = simplify(text, Domain::Medical, ComplexityTier::Simple);
        let educated = simplify(text, Domain::Medical, ComplexityTier::Educated);
        assert!(simple.contains("high blood pressure"));
        assert!(educated.contains("elevated blood pressure"));
        assert_ne!(simple, educated);
    }

    #[test]
    fn legal_example_loses_its_jargon() {
        let out = simplify(
            "Pursuant to the aforementioned agreement.",
            Domain::Legal,
            ComplexityTier::Simple,
        );
        assert!(out.contains("based on"));
        assert!(out.contains("this"));
        assert!(!out.to_lowercase().contains("pursuant to"));
        assert!(!out.to_lowercase().contains("aforementioned"));
    }

    #[test]
    fn all_tier_pairs_differ_on_tiered_vocabulary() {
        let text = "The gastritis diagnosis was confirmed.";
        let simple = simplify(text, Domain::Medical, ComplexityTier::Simple);
        let standard = simplify(text, Domain::Medical, ComplexityTier::Standard);
        let educated = simplify(text, Domain::Medical, ComplexityTier::Educated);
        assert_ne!(simple, standard);
        assert_ne!(standard, educated);
        assert_ne!(simple, educated);
    }

    #[test]
    fn domain_does_not_gate_dictionary_entries() {
        let text = "The statute covers hypertension.";
        let as_legal = simplify(text, Domain::Legal, ComplexityTier::Simple);
        let as_auto = simplify(text, Domain::Auto, ComplexityTier::Simple);
        assert_eq!(as_legal, as_auto);
        assert!(as_auto.contains("law"));
        assert!(as_auto.contains("high blood pressure"));
    }

    #[test]
    fn pipeline_output_is_normalized() {
        let out = simplify(
            "The   report was
                finished early.",
            Domain::Auto,
            ComplexityTier::Standard,
        );
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }
}
