//! Core simplification pipeline wiring.

/// Async controller orchestrating simplification batches.
pub mod advanced;
/// Formatting normalization, the final pipeline pass.
pub mod format;
/// Tier dictionaries, affix tables, and connective phrases.
pub mod lexicon;
/// Pipeline orchestration and the one-shot entry point.
pub mod pipeline;
/// Jargon, affix, and connective phrase rewriting.
pub mod rewrite;
/// Sentence breaking and passive restructuring.
pub mod structure;

pub use advanced::{BatchSimplifyController, SimplifyJob, SimplifyOutcome};
pub use format::clean_formatting;
pub use lexicon::{AffixPattern, AffixPosition, TierDictionary};
pub use pipeline::{simplify, SimplifyPipeline};
pub use rewrite::{rewrite, simplify_phrases};
pub use structure::{break_long_sentences, simplify_structure};
