//! Common test utilities and fake backends for retrieval integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use glonav_core::{CandidateDocument, Document, Error, Result, RetrievalMethod};
use glonav_fts::{KeywordBackend, KeywordSearchParams};
use glonav_graph::{Entity, EntityContext, GraphBackend};
use glonav_retrieval::{HybridRetriever, RetrievalConfig};
use glonav_vector::{EmbeddingProvider, VectorBackend, VectorSearchParams};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

// ============================================================================
// Builders
// ============================================================================

/// A candidate with content `"<id> content"`.
pub fn candidate(id: &str, score: f32, method: RetrievalMethod) -> CandidateDocument {
    CandidateDocument::new(Document::new(id, format!("{id} content")), score, method)
}

/// A candidate with an explicit source label.
pub fn sourced(id: &str, source: &str, score: f32, method: RetrievalMethod) -> CandidateDocument {
    CandidateDocument::new(
        Document::new(id, format!("{id} content")).with_source(source),
        score,
        method,
    )
}

/// A candidate whose content is `len` copies of `fill`.
pub fn sized(id: &str, fill: char, len: usize, score: f32) -> CandidateDocument {
    CandidateDocument::new(
        Document::new(id, fill.to_string().repeat(len)),
        score,
        RetrievalMethod::Vector,
    )
}

// ============================================================================
// Embedding fakes
// ============================================================================

/// Returns the same embedding for every text, or fails when built with
/// [`FakeEmbedder::failing`].
pub struct FakeEmbedder {
    embedding: Option<Vec<f32>>,
    calls: AtomicUsize,
}

impl FakeEmbedder {
    pub fn new() -> Self {
        Self {
            embedding: Some(vec![1.0, 0.0, 0.0]),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            embedding: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.embedding
            .clone()
            .ok_or_else(|| Error::embedding("embedding service unavailable"))
    }

    fn dimension(&self) -> usize {
        3
    }

    fn name(&self) -> &str {
        "fake"
    }
}

// ============================================================================
// Shared call recording
// ============================================================================

/// Counts calls and optionally waits on a barrier or a delay first.
#[derive(Default)]
pub struct CallGate {
    calls: AtomicUsize,
    barrier: Option<Arc<Barrier>>,
    delay: Option<Duration>,
}

impl CallGate {
    async fn enter(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Vector fake
// ============================================================================

/// Returns a fixed result list, truncated to the requested limit.
#[derive(Default)]
pub struct FakeVectorBackend {
    results: Vec<CandidateDocument>,
    pub gate: CallGate,
    pub last_params: Mutex<Option<VectorSearchParams>>,
}

impl FakeVectorBackend {
    pub fn new(results: Vec<CandidateDocument>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.gate.barrier = Some(barrier);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.gate.delay = Some(delay);
        self
    }
}

#[async_trait]
impl VectorBackend for FakeVectorBackend {
    async fn search(&self, params: VectorSearchParams) -> Vec<CandidateDocument> {
        self.gate.enter().await;
        let limit = params.limit;
        if let Ok(mut last) = self.last_params.lock() {
            *last = Some(params);
        }
        self.results.iter().take(limit).cloned().collect()
    }

    fn name(&self) -> &str {
        "fake-vector"
    }

    fn document_count(&self) -> Result<usize> {
        Ok(self.results.len())
    }
}

// ============================================================================
// Keyword fake
// ============================================================================

/// Returns a fixed result list and records the keywords it was asked for.
#[derive(Default)]
pub struct FakeKeywordBackend {
    results: Vec<CandidateDocument>,
    pub gate: CallGate,
    pub last_keywords: Mutex<Option<Vec<String>>>,
}

impl FakeKeywordBackend {
    pub fn new(results: Vec<CandidateDocument>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.gate.barrier = Some(barrier);
        self
    }

    pub fn keywords(&self) -> Option<Vec<String>> {
        self.last_keywords.lock().ok().and_then(|k| k.clone())
    }
}

#[async_trait]
impl KeywordBackend for FakeKeywordBackend {
    async fn search(&self, params: KeywordSearchParams) -> Vec<CandidateDocument> {
        self.gate.enter().await;
        let limit = params.limit;
        if let Ok(mut last) = self.last_keywords.lock() {
            *last = Some(params.keywords);
        }
        self.results.iter().take(limit).cloned().collect()
    }

    fn name(&self) -> &str {
        "fake-keyword"
    }

    fn document_count(&self) -> Result<usize> {
        Ok(self.results.len())
    }
}

// ============================================================================
// Graph fake
// ============================================================================

/// Returns fixed entities; contexts are looked up by entity id.
#[derive(Default)]
pub struct FakeGraphBackend {
    entities: Vec<Entity>,
    contexts: HashMap<String, EntityContext>,
    pub gate: CallGate,
    pub context_calls: AtomicUsize,
}

impl FakeGraphBackend {
    /// Every entity gets a context with no neighbors.
    pub fn new(entities: Vec<Entity>) -> Self {
        let contexts = entities
            .iter()
            .map(|e| {
                (
                    e.id.clone(),
                    EntityContext {
                        entity: e.clone(),
                        connected: Vec::new(),
                    },
                )
            })
            .collect();
        Self {
            entities,
            contexts,
            ..Default::default()
        }
    }

    pub fn without_context(mut self, entity_id: &str) -> Self {
        self.contexts.remove(entity_id);
        self
    }

    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.gate.barrier = Some(barrier);
        self
    }
}

#[async_trait]
impl GraphBackend for FakeGraphBackend {
    async fn search_entities(&self, _query: &str, limit: usize) -> Vec<Entity> {
        self.gate.enter().await;
        self.entities.iter().take(limit).cloned().collect()
    }

    async fn entity_context(&self, entity_id: &str, _depth: usize) -> Option<EntityContext> {
        self.context_calls.fetch_add(1, Ordering::SeqCst);
        self.contexts.get(entity_id).cloned()
    }

    fn name(&self) -> &str {
        "fake-graph"
    }

    fn entity_count(&self) -> Result<usize> {
        Ok(self.entities.len())
    }

    fn relationship_count(&self) -> Result<usize> {
        Ok(0)
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Keeps handles on every fake so tests can inspect calls after retrieval.
pub struct TestHarness {
    pub embedder: Arc<FakeEmbedder>,
    pub vector: Arc<FakeVectorBackend>,
    pub keyword: Arc<FakeKeywordBackend>,
    pub graph: Arc<FakeGraphBackend>,
    pub config: RetrievalConfig,
}

impl TestHarness {
    pub fn new(
        vector: FakeVectorBackend,
        keyword: FakeKeywordBackend,
        graph: FakeGraphBackend,
    ) -> Self {
        Self {
            embedder: Arc::new(FakeEmbedder::new()),
            vector: Arc::new(vector),
            keyword: Arc::new(keyword),
            graph: Arc::new(graph),
            config: RetrievalConfig::default(),
        }
    }

    pub fn with_embedder(mut self, embedder: FakeEmbedder) -> Self {
        self.embedder = Arc::new(embedder);
        self
    }

    pub fn with_config(mut self, config: RetrievalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn retriever(&self) -> HybridRetriever {
        HybridRetriever::new(
            self.embedder.clone(),
            self.vector.clone(),
            self.keyword.clone(),
            self.graph.clone(),
        )
        .with_config(self.config.clone())
    }
}
