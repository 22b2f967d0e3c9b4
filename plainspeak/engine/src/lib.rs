#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms,
    missing_docs
)]

//! Deterministic rule-based text simplification: tiered jargon rewriting,
//! sentence restructuring, key-point extraction, and readability scoring.
//! Built as a generative-model fallback, so every operation is a pure
//! function of its inputs.

/// Telemetry builder/hook for engine components.
#[path = "../telemetry.rs"]
pub mod telemetry;

/// Domain-neutral data structures.
#[path = "../module.rs"]
pub mod module;

/// Sentence splitting and text scanning helpers.
#[path = "../helper.rs"]
pub mod helper;

/// Simplification pipeline: lexicon, rewriting, structure, formatting.
#[path = "../simplify/main.rs"]
pub mod simplify;

/// Key-sentence scoring and selection.
#[path = "../keypoints.rs"]
pub mod keypoints;

/// Flesch-Kincaid-style readability analysis.
#[path = "../readability.rs"]
pub mod readability;

/// Console command ingestion.
#[path = "../console.rs"]
pub mod console;

/// Corpus index and loader for batch runs.
#[path = "../corpus/main.rs"]
pub mod corpus;

/// Engine facade over the three public operations.
#[path = "../engine.rs"]
pub mod engine;

pub use console::{ConsoleCommand, ConsoleCommandReceiver};
pub use corpus::{CorpusDocument, CorpusIndex, CorpusLoader, LoadedDocument};
pub use engine::SimplifyEngine;
pub use keypoints::{extract_key_points, SentenceScore};
pub use module::{ComplexityTier, Domain, ParseEnumError, ReadabilityMetrics};
pub use readability::{count_syllables, readability};
pub use simplify::{
    simplify, BatchSimplifyController, SimplifyJob, SimplifyOutcome, SimplifyPipeline,
};
pub use telemetry::{EngineTelemetry, EngineTelemetryBuilder};
