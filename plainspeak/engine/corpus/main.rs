//! Corpus index and document loading for batch runs.

/// Index schema describing documents queued for simplification.
pub mod index;
/// Filesystem loader resolving index entries.
pub mod loader;

pub use index::{CorpusDocument, CorpusIndex};
pub use loader::{CorpusLoader, LoadedDocument};
