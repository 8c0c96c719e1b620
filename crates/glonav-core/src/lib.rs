//! Glonav Core — shared document model, errors, and result alias.
//!
//! This crate has no internal glonav dependencies (dependency level 0).
//! Every backend crate produces [`CandidateDocument`]s; the retrieval crate
//! fuses them into [`FusedDocument`]s.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`document`]: Document, candidate and fused document types

pub mod document;
pub mod error;

// Re-export key types at crate root for convenience
pub use document::{
    CandidateDocument, DATASET_ID_KEY, Document, FusedDocument, Metadata, RetrievalMethod,
};
pub use error::{Error, Result};
