//! Corpus files: documents plus a knowledge graph, loaded into the
//! in-memory backends.
//!
//! ```json
//! {
//!   "documents": [{"id": "caa", "content": "...", "source": "EPA"}],
//!   "entities":  [{"id": "epa", "name": "EPA", "entity_types": ["Agency"]}],
//!   "relations": [{"from": "epa", "to": "caa", "relationship": "regulates"}]
//! }
//! ```

use glonav_core::{Document, Error, Result};
use glonav_fts::SimpleKeywordBackend;
use glonav_graph::{Edge, Entity, SimpleGraphBackend};
use glonav_retrieval::HybridRetriever;
use glonav_vector::{HashingEmbeddingProvider, SimpleVectorBackend};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::config::GlonavConfig;

/// Parsed corpus file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// Documents indexed into the vector and keyword backends.
    #[serde(default)]
    pub documents: Vec<Document>,
    /// Knowledge-graph entities.
    #[serde(default)]
    pub entities: Vec<Entity>,
    /// Directed relationships between entities.
    #[serde(default)]
    pub relations: Vec<Edge>,
}

impl Corpus {
    /// Read and parse a corpus JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::parse(format!("Invalid corpus {}: {e}", path.display())))
    }

    /// Build a retriever over in-memory backends holding this corpus.
    ///
    /// Documents that cannot be embedded (e.g. empty content) are skipped
    /// with a warning; a relation naming an unknown entity is an error.
    pub async fn into_retriever(self, config: &GlonavConfig) -> Result<HybridRetriever> {
        let graph = SimpleGraphBackend::from_parts(self.entities, self.relations)?;

        let retriever = HybridRetriever::new(
            Arc::new(HashingEmbeddingProvider::new(config.embedding.dimension)),
            Arc::new(SimpleVectorBackend::new()),
            Arc::new(SimpleKeywordBackend::new()),
            Arc::new(graph),
        )
        .with_config(config.retrieval.clone());

        let total = self.documents.len();
        let mut indexed = 0usize;
        for document in self.documents {
            let id = document.id.clone();
            match retriever.index_document(document).await {
                Ok(()) => indexed += 1,
                Err(e) => log::warn!("Skipping document '{id}': {e}"),
            }
        }
        log::debug!("Indexed {indexed} of {total} corpus documents");

        Ok(retriever)
    }
}

// ============================================================================
// Tests
// ============================================================================
