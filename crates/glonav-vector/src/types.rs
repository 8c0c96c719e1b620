//! Common types for vector search.

use glonav_core::Document;
use serde::{Deserialize, Serialize};

/// Default number of neighbors requested.
pub const DEFAULT_LIMIT: usize = 10;

/// Parameters for one nearest-neighbor query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSearchParams {
    /// Query embedding.
    pub embedding: Vec<f32>,

    /// Maximum results to return.
    pub limit: usize,

    /// Candidates must have similarity strictly greater than this floor.
    pub similarity_threshold: f32,
}

impl VectorSearchParams {
    /// Create params for `embedding` with default limit and no floor.
    pub fn new(embedding: Vec<f32>) -> Self {
        Self {
            embedding,
            limit: DEFAULT_LIMIT,
            similarity_threshold: 0.0,
        }
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the similarity floor.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}

/// A document paired with its embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedDocument {
    /// The stored document.
    pub document: Document,
    /// Its content embedding.
    pub embedding: Vec<f32>,
}

impl EmbeddedDocument {
    /// Pair a document with an embedding.
    pub fn new(document: Document, embedding: Vec<f32>) -> Self {
        Self {
            document,
            embedding,
        }
    }
}
