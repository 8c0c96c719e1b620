//! End-to-end retrieval scenarios.

use glonav_core::RetrievalMethod;
use glonav_graph::Entity;
use glonav_retrieval::{Predicate, RetrievalConfig, RetrievalFilters, RetrievalRequest};

use crate::common::{
    FakeGraphBackend, FakeKeywordBackend, FakeVectorBackend, TestHarness, candidate, sized,
    sourced,
};

#[tokio::test]
async fn test_vector_and_keyword_agreement_is_summed() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("d1", 0.9, RetrievalMethod::Vector)]),
        FakeKeywordBackend::new(vec![candidate("d1", 0.6, RetrievalMethod::Keyword)]),
        FakeGraphBackend::new(vec![Entity::new("epa", "EPA")]),
    );

    let results = harness
        .retriever()
        .retrieve_context("ozone standards", 10, false, None)
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "d1");
    assert!((results[0].combined_score - 0.63).abs() < 1e-6);
    assert_eq!(
        results[0].retrieval_methods,
        vec![RetrievalMethod::Vector, RetrievalMethod::Keyword]
    );
    assert_eq!(harness.graph.gate.calls(), 0);
}

#[tokio::test]
async fn test_source_filter_keeps_allowed_sources() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![
            sourced("noaa-doc", "NOAA", 0.9, RetrievalMethod::Vector),
            sourced("epa-doc", "EPA", 0.8, RetrievalMethod::Vector),
        ]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    );

    let filters = RetrievalFilters::new().with_sources(["EPA"]);
    let results = harness
        .retriever()
        .retrieve_context("air quality", 10, false, Some(&filters))
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "epa-doc");
}

#[tokio::test]
async fn test_empty_filters_do_not_filter() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![
            sourced("a", "NOAA", 0.9, RetrievalMethod::Vector),
            sourced("b", "EPA", 0.8, RetrievalMethod::Vector),
        ]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    );

    let results = harness
        .retriever()
        .retrieve_context("air quality", 10, false, Some(&RetrievalFilters::new()))
        .await;
    assert_eq!(results.len(), 2);
}

#[tokio::test]
async fn test_document_type_filter_through_request() {
    let report = candidate("report", 0.9, RetrievalMethod::Vector);
    let mut dataset = candidate("dataset", 0.8, RetrievalMethod::Vector);
    dataset.document.document_type = "dataset".to_string();

    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![report, dataset]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    );

    let request = RetrievalRequest::new("emissions data").with_filters(
        RetrievalFilters::new().with_document_type(Predicate::any_of(["dataset"])),
    );
    let results = harness.retriever().retrieve(&request).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "dataset");
}

#[tokio::test]
async fn test_budget_drops_small_remainder() {
    // 150 budget, A=100 and B=100: 50 chars remain, under the partial minimum
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![sized("a", 'a', 100, 0.9), sized("b", 'b', 100, 0.8)]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    )
    .with_config(RetrievalConfig::default().with_max_context_length(150));

    let results = harness
        .retriever()
        .retrieve_context("budget test", 10, false, None)
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id(), "a");
    assert_eq!(results[0].document().content_len(), 100);
}

#[tokio::test]
async fn test_budget_truncates_boundary_document() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![
            sized("a", 'a', 100, 0.9),
            sized("b", 'b', 400, 0.8),
            sized("c", 'c', 10, 0.7),
        ]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    );

    let request = RetrievalRequest::new("budget test")
        .with_graph_context(false)
        .with_max_context_length(300);
    let results = harness.retriever().retrieve(&request).await;

    assert_eq!(results.len(), 2);
    let partial = &results[1].document().content;
    assert_eq!(partial.chars().count(), 200);
    assert!(partial.ends_with("..."));
    let total: usize = results.iter().map(|r| r.document().content_len()).sum();
    assert!(total <= 300);
}

#[tokio::test]
async fn test_stopword_query_skips_keyword_backend() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("v", 0.9, RetrievalMethod::Vector)]),
        FakeKeywordBackend::new(vec![candidate("k", 1.0, RetrievalMethod::Keyword)]),
        FakeGraphBackend::default(),
    );

    let results = harness
        .retriever()
        .retrieve_context("the and of", 10, false, None)
        .await;

    assert_eq!(harness.keyword.gate.calls(), 0);
    assert!(harness.keyword.keywords().is_none());
    assert_eq!(results.len(), 1);
    assert!(
        results
            .iter()
            .all(|r| !r.retrieval_methods.contains(&RetrievalMethod::Keyword))
    );
}

#[tokio::test]
async fn test_keyword_backend_receives_extracted_keywords() {
    let harness = TestHarness::new(
        FakeVectorBackend::default(),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    );

    harness
        .retriever()
        .retrieve_context("What are the EPA ozone standards?", 7, false, None)
        .await;

    assert_eq!(
        harness.keyword.keywords().unwrap(),
        vec!["epa", "ozone", "standards"]
    );
}

#[tokio::test]
async fn test_vector_backend_receives_top_k_and_threshold() {
    let harness = TestHarness::new(
        FakeVectorBackend::default(),
        FakeKeywordBackend::default(),
        FakeGraphBackend::default(),
    )
    .with_config(RetrievalConfig::default().with_similarity_threshold(0.55));

    harness
        .retriever()
        .retrieve_context("ozone", 4, false, None)
        .await;

    let params = harness.vector.last_params.lock().unwrap().clone().unwrap();
    assert_eq!(params.limit, 4);
    assert_eq!(params.similarity_threshold, 0.55);
}

#[tokio::test]
async fn test_graph_records_fused_with_low_weight() {
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("v", 0.5, RetrievalMethod::Vector)]),
        FakeKeywordBackend::default(),
        FakeGraphBackend::new(vec![
            Entity::new("epa", "EPA"),
            Entity::new("caa", "Clean Air Act"),
            Entity::new("aqs", "AQS"),
            Entity::new("noaa", "NOAA"),
        ]),
    );

    let results = harness
        .retriever()
        .retrieve_context("epa air", 10, true, None)
        .await;

    // three expanded entities at 0.8 × 0.2 = 0.16, below v at 0.25
    assert_eq!(results.len(), 4);
    assert_eq!(results[0].id(), "v");
    assert_eq!(results[1].id(), "entity_epa");
    assert!((results[1].combined_score - 0.16).abs() < 1e-6);
    assert_eq!(results[1].document().source, "Knowledge Graph");
    assert_eq!(
        harness
            .graph
            .context_calls
            .load(std::sync::atomic::Ordering::SeqCst),
        3
    );
}

#[tokio::test]
async fn test_top_k_bounds_result_length() {
    let vector = (0..20)
        .map(|i| candidate(&format!("v{i}"), 0.9, RetrievalMethod::Vector))
        .collect();
    let keyword = (0..20)
        .map(|i| candidate(&format!("k{i}"), 0.9, RetrievalMethod::Keyword))
        .collect();
    let harness = TestHarness::new(
        FakeVectorBackend::new(vector),
        FakeKeywordBackend::new(keyword),
        FakeGraphBackend::default(),
    );

    let results = harness
        .retriever()
        .retrieve_context("ozone data", 5, false, None)
        .await;
    assert_eq!(results.len(), 5);
}

#[tokio::test]
async fn test_request_defaults_come_from_config() {
    let vector = (0..20)
        .map(|i| candidate(&format!("v{i}"), 0.9, RetrievalMethod::Vector))
        .collect();
    let harness = TestHarness::new(
        FakeVectorBackend::new(vector),
        FakeKeywordBackend::default(),
        FakeGraphBackend::new(vec![Entity::new("epa", "EPA")]),
    )
    .with_config(
        RetrievalConfig::default()
            .with_top_k(3)
            .with_graph_context(false),
    );

    let results = harness
        .retriever()
        .retrieve(&RetrievalRequest::new("ozone"))
        .await;
    assert_eq!(results.len(), 3);
    assert_eq!(harness.graph.gate.calls(), 0);
}
