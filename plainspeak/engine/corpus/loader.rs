use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CorpusDocument, CorpusIndex};

/// A corpus document with its body read from disk.
#[derive(Debug)]
pub struct LoadedDocument {
    /// Document metadata.
    pub document: CorpusDocument,
    /// Raw text body.
    pub text: String,
}

/// Loader resolving document paths against a base directory.
pub struct CorpusLoader {
    base_path: String,
}

impl CorpusLoader {
    /// Creates a loader rooted at the corpus directory.
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Loads and validates the corpus index from disk.
    pub fn load_index(&self, path: &Path) -> Result<CorpusIndex> {
        let data = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        let index: CorpusIndex = serde_json::from_str(&data)?;
        index.validate()?;
        Ok(index)
    }

    /// Loads every document body in index order.
    pub fn load_documents(&self, index: &CorpusIndex) -> Result<Vec<LoadedDocument>> {
        let mut loaded = Vec::with_capacity(index.documents.len());
        for document in &index.documents {
            let path = Path::new(&self.base_path).join(&document.path);
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading document {:?} (corpus {})", path, index.name))?;
            loaded.push(LoadedDocument {
                document: document.clone(),
                text,
            });
        }
        Ok(loaded)
    }
}
