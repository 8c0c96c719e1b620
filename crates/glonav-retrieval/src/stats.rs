//! Backend size statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document and graph counts across the retriever's backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalStats {
    /// Documents in the vector backend.
    pub vector_documents: usize,
    /// Documents in the keyword backend.
    pub keyword_documents: usize,
    /// Entities in the knowledge graph.
    pub graph_entities: usize,
    /// Relationships in the knowledge graph.
    pub graph_relationships: usize,
}

impl fmt::Display for RetrievalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector documents:    {}", self.vector_documents)?;
        writeln!(f, "Keyword documents:   {}", self.keyword_documents)?;
        writeln!(f, "Graph entities:      {}", self.graph_entities)?;
        write!(f, "Graph relationships: {}", self.graph_relationships)
    }
}
