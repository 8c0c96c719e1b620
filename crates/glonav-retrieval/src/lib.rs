//! Hybrid retrieval for Glonav.
//!
//! Answers a natural-language query with evidence from three independently
//! indexed stores and merges it into one ranked, deduplicated, filtered and
//! length-bounded context list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     glonav-retrieval                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  HybridRetriever (orchestrator)                             │
//! │  ├── glonav-vector  EmbeddingProvider + VectorBackend       │
//! │  ├── glonav-fts     KeywordExtractor + KeywordBackend       │
//! │  └── glonav-graph   GraphBackend → graph_context records    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  fusion  → weighted sum (vector 0.5, keyword 0.3, graph 0.2)│
//! │  filter  → sources / document_type / dataset_id             │
//! │  budget  → character budget with one partial item           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  render_context, RetrievalStats, RetrievalConfig            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use glonav_core::Document;
//! use glonav_fts::SimpleKeywordBackend;
//! use glonav_graph::SimpleGraphBackend;
//! use glonav_retrieval::{HybridRetriever, RetrievalRequest, render_context};
//! use glonav_vector::{HashingEmbeddingProvider, SimpleVectorBackend};
//!
//! # tokio_test::block_on(async {
//! let retriever = HybridRetriever::new(
//!     Arc::new(HashingEmbeddingProvider::new(128)),
//!     Arc::new(SimpleVectorBackend::new()),
//!     Arc::new(SimpleKeywordBackend::new()),
//!     Arc::new(SimpleGraphBackend::new()),
//! );
//!
//! retriever
//!     .index_document(Document::new("o3", "Ozone standards").with_source("EPA"))
//!     .await
//!     .unwrap();
//!
//! let results = retriever.retrieve(&RetrievalRequest::new("ozone standards")).await;
//! assert_eq!(results[0].id(), "o3");
//! assert!(render_context(&results).starts_with("Source: EPA"));
//! # });
//! ```

pub mod budget;
pub mod config;
pub mod context;
pub mod filter;
pub mod fusion;
pub mod graph_context;
pub mod retriever;
pub mod stats;

// Re-exports
pub use budget::{ELLIPSIS, MIN_PARTIAL_CHARS, truncate_context};
pub use config::RetrievalConfig;
pub use context::render_context;
pub use filter::{DateRange, Predicate, RetrievalFilters, apply_filters};
pub use fusion::fuse;
pub use graph_context::{GRAPH_CONTEXT_SCORE, context_record, search_graph};
pub use retriever::{HybridRetriever, RetrievalRequest};
pub use stats::RetrievalStats;
