//! The hybrid retrieval orchestrator.
//!
//! ```text
//!              query
//!                │
//!        embed (best effort)
//!                │
//!   ┌────────────┼─────────────┐      concurrent, never fail
//!   ▼            ▼             ▼
//! vector      keyword        graph
//!   └────────────┼─────────────┘
//!                ▼
//!              fuse ─► filter ─► budget ─► ranked context
//! ```

use glonav_core::{Document, FusedDocument, Result};
use glonav_fts::{KeywordBackend, KeywordExtractor, KeywordSearchParams};
use glonav_graph::GraphBackend;
use glonav_vector::{EmbeddedDocument, EmbeddingProvider, VectorBackend, VectorSearchParams};
use std::sync::Arc;

use crate::budget::truncate_context;
use crate::config::RetrievalConfig;
use crate::filter::{RetrievalFilters, apply_filters};
use crate::fusion::fuse;
use crate::graph_context::search_graph;
use crate::stats::RetrievalStats;

// ============================================================================
// RetrievalRequest
// ============================================================================

/// One retrieval call. Unset options fall back to the retriever's config.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetrievalRequest {
    /// Natural-language query.
    pub query: String,
    /// Maximum documents returned.
    pub top_k: Option<usize>,
    /// Whether to run graph search.
    pub include_graph_context: Option<bool>,
    /// Predicates applied after fusion.
    pub filters: Option<RetrievalFilters>,
    /// Character budget override.
    pub max_context_length: Option<usize>,
}

impl RetrievalRequest {
    /// Create a request for `query` with config defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_graph_context(mut self, include: bool) -> Self {
        self.include_graph_context = Some(include);
        self
    }

    pub fn with_filters(mut self, filters: RetrievalFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_max_context_length(mut self, max_chars: usize) -> Self {
        self.max_context_length = Some(max_chars);
        self
    }
}

// ============================================================================
// HybridRetriever
// ============================================================================

/// Queries the vector, keyword and graph backends concurrently and merges
/// their results into one ranked, filtered, budgeted context list.
///
/// All collaborators are injected, so several retrievers with different
/// backends can coexist.
pub struct HybridRetriever {
    embedder: Arc<dyn EmbeddingProvider>,
    vector: Arc<dyn VectorBackend>,
    keyword: Arc<dyn KeywordBackend>,
    graph: Arc<dyn GraphBackend>,
    extractor: KeywordExtractor,
    config: RetrievalConfig,
}

impl HybridRetriever {
    /// Create a retriever with the default configuration.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        vector: Arc<dyn VectorBackend>,
        keyword: Arc<dyn KeywordBackend>,
        graph: Arc<dyn GraphBackend>,
    ) -> Self {
        Self {
            embedder,
            vector,
            keyword,
            graph,
            extractor: KeywordExtractor::new(),
            config: RetrievalConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Retrieve ranked context for `query`.
    ///
    /// Never fails: an embedding failure skips vector search, and backend
    /// failures surface as empty contributions. The result holds at most
    /// `top_k` documents whose total content fits the configured budget.
    pub async fn retrieve_context(
        &self,
        query: &str,
        top_k: usize,
        include_graph_context: bool,
        filters: Option<&RetrievalFilters>,
    ) -> Vec<FusedDocument> {
        self.run(
            query,
            top_k,
            include_graph_context,
            filters,
            self.config.max_context_length,
        )
        .await
    }

    /// Retrieve using a [`RetrievalRequest`].
    pub async fn retrieve(&self, request: &RetrievalRequest) -> Vec<FusedDocument> {
        self.run(
            &request.query,
            request.top_k.unwrap_or(self.config.top_k),
            request
                .include_graph_context
                .unwrap_or(self.config.include_graph_context),
            request.filters.as_ref(),
            request
                .max_context_length
                .unwrap_or(self.config.max_context_length),
        )
        .await
    }

    async fn run(
        &self,
        query: &str,
        top_k: usize,
        include_graph_context: bool,
        filters: Option<&RetrievalFilters>,
        max_chars: usize,
    ) -> Vec<FusedDocument> {
        let query_embedding = match self.embedder.embed(query).await {
            Ok(embedding) => Some(embedding),
            Err(e) => {
                log::warn!("Query embedding failed, skipping vector search: {e}");
                None
            }
        };

        let vector_search = async move {
            match query_embedding {
                Some(embedding) => {
                    let params = VectorSearchParams::new(embedding)
                        .with_limit(top_k)
                        .with_threshold(self.config.similarity_threshold);
                    self.vector.search(params).await
                }
                None => Vec::new(),
            }
        };

        let keyword_search = async {
            let keywords = self.extractor.extract(query);
            if keywords.is_empty() {
                log::debug!("No keywords extracted, skipping keyword search");
                return Vec::new();
            }
            self.keyword
                .search(KeywordSearchParams::new(keywords, top_k))
                .await
        };

        let graph_search = async {
            if include_graph_context {
                search_graph(self.graph.as_ref(), query, top_k).await
            } else {
                Vec::new()
            }
        };

        let (vector_results, keyword_results, graph_results) =
            tokio::join!(vector_search, keyword_search, graph_search);

        let (vector_count, keyword_count, graph_count) = (
            vector_results.len(),
            keyword_results.len(),
            graph_results.len(),
        );

        let mut results = fuse(vector_results, keyword_results, graph_results, top_k);

        if let Some(filters) = filters.filter(|f| !f.is_empty()) {
            results = apply_filters(results, filters);
        }

        let results = truncate_context(results, max_chars);

        log::info!(
            "Retrieved context: query_len={}, vector={}, keyword={}, graph={}, final={}",
            query.chars().count(),
            vector_count,
            keyword_count,
            graph_count,
            results.len()
        );

        results
    }

    /// Embed `document` and store it in the vector and keyword backends.
    ///
    /// Re-indexing an id replaces the stored copy.
    pub async fn index_document(&self, document: Document) -> Result<()> {
        let embedding = self.embedder.embed(&document.content).await?;
        self.vector
            .upsert(EmbeddedDocument::new(document.clone(), embedding))
            .await?;
        self.keyword.upsert(document).await?;
        Ok(())
    }

    /// Collect document and graph counts from every backend.
    pub fn stats(&self) -> Result<RetrievalStats> {
        Ok(RetrievalStats {
            vector_documents: self.vector.document_count()?,
            keyword_documents: self.keyword.document_count()?,
            graph_entities: self.graph.entity_count()?,
            graph_relationships: self.graph.relationship_count()?,
        })
    }
}

impl std::fmt::Debug for HybridRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HybridRetriever")
            .field("embedder", &self.embedder.name())
            .field("vector", &self.vector.name())
            .field("keyword", &self.keyword.name())
            .field("graph", &self.graph.name())
            .field("config", &self.config)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
