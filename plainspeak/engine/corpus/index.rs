use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::module::{ComplexityTier, Domain};

/// Corpus index describing documents queued for batch simplification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusIndex {
    /// Unique corpus id.
    pub corpus_id: Uuid,
    /// Corpus name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Documents, processed in listed order (no sampling; runs must be
    /// reproducible).
    pub documents: Vec<CorpusDocument>,
}

impl CorpusIndex {
    /// Validates index invariants.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.documents.is_empty(),
            "corpus {} has no documents",
            self.name
        );
        Ok(())
    }
}

/// Individual corpus document entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusDocument {
    /// Document id.
    pub id: Uuid,
    /// Relative path to the document body.
    pub path: PathBuf,
    /// Declared domain.
    pub domain: Domain,
    /// Target tier for this document.
    pub tier: ComplexityTier,
}
