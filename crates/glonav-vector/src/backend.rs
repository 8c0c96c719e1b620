//! Vector backend trait and in-memory implementation.
//!
//! This module defines the `VectorBackend` trait that every vector store
//! executor must satisfy. It follows the same pattern as
//! `glonav_fts::KeywordBackend` and `glonav_graph::GraphBackend`.
//!
//! # Failure contract
//!
//! `search` cannot fail. Store outages, malformed queries and timeouts are
//! absorbed inside the executor and reported as an empty candidate list, so
//! one backend's outage never aborts the others.
//!
//! # Backends
//!
//! - `SimpleVectorBackend`: In-memory brute-force cosine search

use async_trait::async_trait;
use glonav_core::{CandidateDocument, Error, Result, RetrievalMethod};
use std::sync::RwLock;

use crate::types::{EmbeddedDocument, VectorSearchParams};

/// Abstract vector search backend trait.
///
/// # Async
///
/// The `search` method is async to support I/O-bound stores (remote
/// databases, index files) without blocking.
#[async_trait]
pub trait VectorBackend: Send + Sync {
    /// Return up to `params.limit` nearest neighbors whose similarity exceeds
    /// `params.similarity_threshold`, highest score first.
    ///
    /// Scores are similarities in [0, 1] (`1 - distance`) tagged
    /// [`RetrievalMethod::Vector`]. Internal errors yield an empty list.
    async fn search(&self, params: VectorSearchParams) -> Vec<CandidateDocument>;

    /// Insert or replace a document (matched by id).
    ///
    /// Read-only backends keep the default, which reports an error.
    async fn upsert(&self, document: EmbeddedDocument) -> Result<()> {
        Err(Error::operation(format!(
            "vector backend '{}' does not accept writes (document '{}')",
            self.name(),
            document.document.id
        )))
    }

    /// Get the backend name for diagnostics.
    fn name(&self) -> &str;

    /// Check if the backend is ready to handle queries.
    fn is_ready(&self) -> bool {
        true
    }

    /// Get the number of indexed documents.
    fn document_count(&self) -> Result<usize>;
}

// ============================================================================
// SimpleVectorBackend
// ============================================================================

/// Brute-force vector search backend.
///
/// Stores documents in memory and computes cosine similarity for each query.
///
/// # Limitations
///
/// - O(n) search time
/// - All documents must fit in memory
/// - Every stored embedding must share the query's dimension
#[derive(Default)]
pub struct SimpleVectorBackend {
    documents: RwLock<Vec<EmbeddedDocument>>,
}

impl SimpleVectorBackend {
    /// Create a new empty simple vector backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-loaded with documents.
    pub fn with_documents(documents: Vec<EmbeddedDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    /// Compute cosine similarity between two vectors.
    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() || a.is_empty() {
            return 0.0;
        }

        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot / (norm_a * norm_b)
    }

    fn poisoned(&self) -> Error {
        Error::backend(self.name(), "document store lock poisoned")
    }

    fn try_search(&self, params: &VectorSearchParams) -> Result<Vec<CandidateDocument>> {
        let documents = self.documents.read().map_err(|_| self.poisoned())?;

        let mut scored: Vec<(usize, f32)> = Vec::new();
        for (i, doc) in documents.iter().enumerate() {
            if doc.embedding.len() != params.embedding.len() {
                return Err(Error::backend(
                    self.name(),
                    format!(
                        "embedding dimension mismatch: query has {}, document '{}' has {}",
                        params.embedding.len(),
                        doc.document.id,
                        doc.embedding.len()
                    ),
                ));
            }

            let distance = 1.0 - Self::cosine_similarity(&params.embedding, &doc.embedding);
            // Scores live in [0, 1]; opposed vectors score zero
            let score = (1.0 - distance).clamp(0.0, 1.0);
            if score > params.similarity_threshold {
                scored.push((i, score));
            }
        }

        // Sort by similarity (highest first); stable, so ties keep store order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(params.limit);

        Ok(scored
            .into_iter()
            .map(|(i, score)| {
                CandidateDocument::new(
                    documents[i].document.clone(),
                    score,
                    RetrievalMethod::Vector,
                )
            })
            .collect())
    }
}

#[async_trait]
impl VectorBackend for SimpleVectorBackend {
    async fn search(&self, params: VectorSearchParams) -> Vec<CandidateDocument> {
        match self.try_search(&params) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Vector search failed: {e}");
                Vec::new()
            }
        }
    }

    async fn upsert(&self, document: EmbeddedDocument) -> Result<()> {
        let mut documents = self.documents.write().map_err(|_| self.poisoned())?;
        match documents
            .iter_mut()
            .find(|d| d.document.id == document.document.id)
        {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "simple-vector"
    }

    fn document_count(&self) -> Result<usize> {
        Ok(self.documents.read().map_err(|_| self.poisoned())?.len())
    }
}

impl std::fmt::Debug for SimpleVectorBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleVectorBackend")
            .field("documents", &self.document_count().unwrap_or(0))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
