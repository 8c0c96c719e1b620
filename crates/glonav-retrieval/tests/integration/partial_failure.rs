//! Degraded-backend behavior: failures shrink the evidence, never the call.

use glonav_core::RetrievalMethod;
use glonav_graph::Entity;

use crate::common::{
    FakeEmbedder, FakeGraphBackend, FakeKeywordBackend, FakeVectorBackend, TestHarness, candidate,
};

#[tokio::test]
async fn test_keyword_outage_still_returns_ranked_results() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![
            candidate("v1", 0.9, RetrievalMethod::Vector),
            candidate("v2", 0.4, RetrievalMethod::Vector),
        ]),
        FakeKeywordBackend::new(vec![]),
        FakeGraphBackend::new(vec![Entity::new("epa", "EPA")]),
    );

    let results = harness
        .retriever()
        .retrieve_context("ozone standards", 10, true, None)
        .await;

    assert_eq!(harness.keyword.gate.calls(), 1);
    // v1 0.45, v2 0.20, entity_epa 0.16
    let ids: Vec<&str> = results.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["v1", "v2", "entity_epa"]);
}

#[tokio::test]
async fn test_embedding_failure_skips_vector_search() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("v", 0.9, RetrievalMethod::Vector)]),
        FakeKeywordBackend::new(vec![candidate("k", 0.5, RetrievalMethod::Keyword)]),
        FakeGraphBackend::default(),
    )
    .with_embedder(FakeEmbedder::failing());

    let results = harness
        .retriever()
        .retrieve_context("ozone standards", 10, false, None)
        .await;

    assert_eq!(harness.embedder.calls(), 1);
    assert_eq!(harness.vector.gate.calls(), 0);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "k");
}

#[tokio::test]
async fn test_all_backends_empty_yields_empty() {
    let harness = TestHarness::new(
        FakeVectorBackend::default(),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    )
    .with_embedder(FakeEmbedder::failing());

    let results = harness
        .retriever()
        .retrieve_context("anything at all", 10, true, None)
        .await;
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_entity_without_context_is_skipped() {
    let harness = TestHarness::new(
        FakeVectorBackend::default(),
        FakeKeywordBackend::default(),
        FakeGraphBackend::new(vec![Entity::new("epa", "EPA"), Entity::new("caa", "CAA")])
            .without_context("epa"),
    );

    let results = harness
        .retriever()
        .retrieve_context("epa caa", 10, true, None)
        .await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "entity_caa");
}

#[tokio::test]
async fn test_real_backends_survive_dimension_mismatch() {
    use glonav_core::Document;
    use glonav_fts::SimpleKeywordBackend;
    use glonav_graph::SimpleGraphBackend;
    use glonav_retrieval::HybridRetriever;
    use glonav_vector::{EmbeddedDocument, HashingEmbeddingProvider, SimpleVectorBackend};
    use std::sync::Arc;

    // stored embeddings are 2-d, queries are 32-d: vector search errors internally
    let vector = SimpleVectorBackend::with_documents(vec![EmbeddedDocument::new(
        Document::new("mismatch", "ozone standards"),
        vec![1.0, 0.0],
    )]);
    let keyword =
        SimpleKeywordBackend::with_documents(vec![Document::new("kw", "ozone standards")]);

    let retriever = HybridRetriever::new(
        Arc::new(HashingEmbeddingProvider::new(32)),
        Arc::new(vector),
        Arc::new(keyword),
        Arc::new(SimpleGraphBackend::new()),
    );

    let results = retriever
        .retrieve_context("ozone standards", 10, true, None)
        .await;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "kw");
}

#[tokio::test]
async fn test_nan_scores_from_store_do_not_abort_retrieval() {
    let vector: Vec<_> = (0..64)
        .map(|i| {
            let score = if i % 3 == 0 { f32::NAN } else { 0.5 };
            candidate(&format!("v{i}"), score, RetrievalMethod::Vector)
        })
        .collect();
    let harness = TestHarness::new(
        FakeVectorBackend::new(vector),
        FakeKeywordBackend::new(vec![candidate("k", 0.9, RetrievalMethod::Keyword)]),
        FakeGraphBackend::default(),
    );

    let results = harness
        .retriever()
        .retrieve_context("ozone standards", 64, false, None)
        .await;

    assert_eq!(results.len(), 64);
    // k 0.27 first, then finite vector hits at 0.25, NaN hits last at 0.0
    assert_eq!(results[0].id(), "k");
    assert_eq!(results[1].id(), "v1");
    assert!(results.iter().all(|r| r.combined_score.is_finite()));
    assert_eq!(results[63].combined_score, 0.0);
}
