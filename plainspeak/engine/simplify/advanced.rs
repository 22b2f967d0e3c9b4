use anyhow::Result;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::pipeline::SimplifyPipeline;
use crate::{
    module::{ComplexityTier, Domain, ReadabilityMetrics},
    readability,
    telemetry::EngineTelemetry,
};

/// One simplification request within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifyJob {
    /// Source text.
    pub text: String,
    /// Declared domain (informational).
    pub domain: Domain,
    /// Target tier.
    pub tier: ComplexityTier,
    /// Correlation id for tracing.
    pub correlation_id: String,
}

impl SimplifyJob {
    /// Creates a job with a fresh correlation id.
    #[must_use]
    pub fn new(text: impl Into<String>, domain: Domain, tier: ComplexityTier) -> Self {
        Self {
            text: text.into(),
            domain,
            tier,
            correlation_id: format!("job-{}", Uuid::new_v4()),
        }
    }
}

/// Result of one batch entry: the simplified text plus the readability of
/// the output, so callers can report the achieved level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifyOutcome {
    /// Correlation id copied from the job.
    pub correlation_id: String,
    /// Simplified text.
    pub output: String,
    /// Readability of the simplified text.
    pub metrics: ReadabilityMetrics,
}

/// Controller orchestrating concurrent batch simplification.
pub struct BatchSimplifyController {
    pipeline: SimplifyPipeline,
    telemetry: Option<EngineTelemetry>,
}

impl BatchSimplifyController {
    /// Creates a new controller.
    #[must_use]
    pub fn new(pipeline: SimplifyPipeline, telemetry: Option<EngineTelemetry>) -> Self {
        Self {
            pipeline,
            telemetry,
        }
    }

    /// Processes a batch concurrently, preserving job order in the result.
    pub async fn process_batch(&self, jobs: Vec<SimplifyJob>) -> Result<Vec<SimplifyOutcome>> {
        self.log("engine.batch_start", jobs.len());
        let tasks = jobs.into_iter().map(|job| {
            let pipeline = self.pipeline.clone();
            tokio::task::spawn_blocking(move || {
                let output = pipeline.simplify(&job.text, job.domain, job.tier);
                let metrics = readability::readability(&output);
                SimplifyOutcome {
                    correlation_id: job.correlation_id,
                    output,
                    metrics,
                }
            })
        });
        let outcomes = try_join_all(tasks).await?;
        self.log("engine.batch_complete", outcomes.len());
        Ok(outcomes)
    }

    fn log(&self, message: &str, count: usize) {
        if let Some(tel) = &self.telemetry {
            let _ = tel.log(
                shared_logging::LogLevel::Info,
                message,
                json!({ "count": count }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn batch_preserves_job_order_and_count() {
        let controller = BatchSimplifyController::new(SimplifyPipeline::default(), None);
        let jobs = vec![
            SimplifyJob::new(
                "Patient has hypertension",
                Domain::Medical,
                ComplexityTier::Simple,
            ),
            SimplifyJob::new("", Domain::Auto, ComplexityTier::Standard),
        ];
        let first_id = jobs[0].correlation_id.clone();
        let outcomes = controller.process_batch(jobs).await.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].correlation_id, first_id);
        assert!(outcomes[0].output.contains("high blood pressure"));
        assert_eq!(outcomes[1].output, "");
        assert_eq!(outcomes[1].metrics.grade_level, 0);
    }
}
