//! Keyword (full-text) search infrastructure for Glonav.
//!
//! This crate provides the keyword extractor that turns a natural-language
//! query into search terms, and the keyword store executor consumed by the
//! hybrid retriever.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       glonav-fts                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  KeywordExtractor (stopwords, min length, max 10 terms)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  KeywordBackend trait (never fails a search)                │
//! │  └── SimpleKeywordBackend (substring match ratio)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use glonav_core::Document;
//! use glonav_fts::{KeywordBackend, KeywordExtractor, KeywordSearchParams, SimpleKeywordBackend};
//!
//! # tokio_test::block_on(async {
//! let backend = SimpleKeywordBackend::with_documents(vec![
//!     Document::new("o3", "National ozone standards"),
//! ]);
//!
//! let keywords = KeywordExtractor::new().extract("What are the ozone standards?");
//! let hits = backend.search(KeywordSearchParams::new(keywords, 10)).await;
//! assert_eq!(hits[0].score, 1.0);
//! # });
//! ```

pub mod backend;
pub mod keywords;

// Re-exports
pub use backend::{KeywordBackend, KeywordSearchParams, SimpleKeywordBackend};
pub use keywords::{KeywordExtractor, MAX_KEYWORDS, MIN_KEYWORD_LEN};
