//! Concurrency contract: backends run together, fusion ignores arrival order.

use glonav_core::RetrievalMethod;
use glonav_graph::Entity;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Barrier;

use crate::common::{FakeGraphBackend, FakeKeywordBackend, FakeVectorBackend, TestHarness, candidate};

#[tokio::test]
async fn test_backends_are_queried_concurrently() {
    // Each backend blocks until all three have started; a sequential
    // orchestrator would never get past the first one.
    let barrier = Arc::new(Barrier::new(3));
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("v", 0.9, RetrievalMethod::Vector)])
            .with_barrier(barrier.clone()),
        FakeKeywordBackend::new(vec![candidate("k", 0.9, RetrievalMethod::Keyword)])
            .with_barrier(barrier.clone()),
        FakeGraphBackend::new(vec![Entity::new("epa", "EPA")]).with_barrier(barrier),
    );
    let retriever = harness.retriever();

    let results = tokio::time::timeout(
        Duration::from_secs(5),
        retriever.retrieve_context("ozone standards", 10, true, None),
    )
    .await
    .expect("backends should run concurrently");

    assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn test_tie_order_ignores_completion_order() {
    // vector finishes last but still wins the 0.3 tie
    let harness = TestHarness::new(
        FakeVectorBackend::new(vec![candidate("v", 0.6, RetrievalMethod::Vector)])
            .with_delay(Duration::from_millis(30)),
        FakeKeywordBackend::new(vec![candidate("k", 1.0, RetrievalMethod::Keyword)]),
        FakeGraphBackend::default(),
    );

    for _ in 0..3 {
        let results = harness
            .retriever()
            .retrieve_context("ozone standards", 10, false, None)
            .await;
        let ids: Vec<&str> = results.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["v", "k"]);
    }
}
