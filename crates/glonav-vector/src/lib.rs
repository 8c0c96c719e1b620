//! Vector search infrastructure for Glonav.
//!
//! This crate provides the embedding capability and the vector store
//! executor consumed by the hybrid retriever.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      glonav-vector                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider trait                                    │
//! │  └── HashingEmbeddingProvider (deterministic, offline)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VectorBackend trait (never fails a search)                 │
//! │  └── SimpleVectorBackend (brute-force cosine)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VectorSearchParams, EmbeddedDocument                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use glonav_core::Document;
//! use glonav_vector::{EmbeddedDocument, SimpleVectorBackend, VectorBackend, VectorSearchParams};
//!
//! # tokio_test::block_on(async {
//! let backend = SimpleVectorBackend::with_documents(vec![EmbeddedDocument::new(
//!     Document::new("ozone", "Ozone standards"),
//!     vec![1.0, 0.0],
//! )]);
//!
//! let params = VectorSearchParams::new(vec![1.0, 0.0]).with_threshold(0.7);
//! let hits = backend.search(params).await;
//! assert_eq!(hits[0].id(), "ozone");
//! # });
//! ```

pub mod backend;
pub mod embedding;
pub mod types;

// Re-exports
pub use backend::{SimpleVectorBackend, VectorBackend};
pub use embedding::{EmbeddingProvider, HashingEmbeddingProvider};
pub use types::{EmbeddedDocument, VectorSearchParams};
