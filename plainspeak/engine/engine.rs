use serde_json::json;

use crate::{
    keypoints,
    module::{ComplexityTier, Domain, ReadabilityMetrics},
    readability,
    simplify::SimplifyPipeline,
    telemetry::EngineTelemetry,
};

/// Facade bundling the three public operations behind one handle.
///
/// Every operation is a total, synchronous function of its inputs; the
/// engine holds no mutable state and is safe to share across threads.
#[derive(Clone, Default)]
pub struct SimplifyEngine {
    pipeline: SimplifyPipeline,
    telemetry: Option<EngineTelemetry>,
}

impl SimplifyEngine {
    /// Creates an engine, optionally wired to telemetry sinks.
    #[must_use]
    pub fn new(telemetry: Option<EngineTelemetry>) -> Self {
        Self {
            pipeline: SimplifyPipeline::new(telemetry.clone()),
            telemetry,
        }
    }

    /// Simplifies `text` toward the tier's reading level.
    #[must_use]
    pub fn simplify(&self, text: &str, domain: Domain, tier: ComplexityTier) -> String {
        self.pipeline.simplify(text, domain, tier)
    }

    /// Extracts up to five key sentences from the original text.
    #[must_use]
    pub fn extract_key_points(&self, text: &str) -> Vec<String> {
        let points = keypoints::extract_key_points(text);
        self.event(
            "engine.keypoints.extracted",
            json!({ "selected": points.len() }),
        );
        points
    }

    /// Computes readability metrics for `text`.
    #[must_use]
    pub fn readability(&self, text: &str) -> ReadabilityMetrics {
        readability::readability(text)
    }

    fn event(&self, event_type: &str, payload: serde_json::Value) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.event(event_type, payload);
        }
    }
}
