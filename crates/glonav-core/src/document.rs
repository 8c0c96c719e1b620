//! Documents as they flow through the retrieval pipeline.
//!
//! - [`Document`]: the stored record (title, content, source, type, metadata)
//! - [`CandidateDocument`]: one backend's hit, with a backend-local score
//! - [`FusedDocument`]: the cross-backend record with an aggregated score
//!
//! Candidate scores are **not comparable across backends**. Only the fused
//! `combined_score` is meaningful for ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Open key-value bag attached to every document.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Metadata key carrying the dataset a document was ingested from.
pub const DATASET_ID_KEY: &str = "dataset_id";

// ============================================================================
// RetrievalMethod
// ============================================================================

/// The backend that produced a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMethod {
    /// Embedding similarity search.
    Vector,
    /// Keyword match-ratio search.
    Keyword,
    /// Knowledge-graph neighborhood context.
    Graph,
}

impl RetrievalMethod {
    /// All methods in fusion order. Earlier methods win score ties.
    pub const ALL: [RetrievalMethod; 3] = [Self::Vector, Self::Keyword, Self::Graph];

    /// Fusion weight applied to this backend's scores.
    ///
    /// The three weights sum to 1.0.
    pub fn weight(&self) -> f32 {
        match self {
            Self::Vector => 0.5,
            Self::Keyword => 0.3,
            Self::Graph => 0.2,
        }
    }

    /// Returns the method tag as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Keyword => "keyword",
            Self::Graph => "graph",
        }
    }
}

impl fmt::Display for RetrievalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Document
// ============================================================================

/// A stored document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, unique within one store. Mirrors of the same record in
    /// different stores share the id.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Raw text.
    pub content: String,
    /// Human-readable origin label (e.g. "EPA").
    #[serde(default)]
    pub source: String,
    /// Free-form type tag.
    #[serde(default)]
    pub document_type: String,
    /// Open key-value bag; may carry `dataset_id`.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Creates a document with the given id and content.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the document type.
    pub fn with_document_type(mut self, document_type: impl Into<String>) -> Self {
        self.document_type = document_type.into();
        self
    }

    /// Adds a metadata key-value pair.
    pub fn with_metadata(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The `dataset_id` metadata value rendered as a string, if present.
    ///
    /// String values are returned verbatim; other JSON values use their JSON
    /// text (so a numeric id `42` reads as `"42"`). `null` counts as absent.
    pub fn dataset_id(&self) -> Option<String> {
        match self.metadata.get(DATASET_ID_KEY)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Content length in characters.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}

// ============================================================================
// CandidateDocument
// ============================================================================

/// One result from a single backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    /// The retrieved record.
    #[serde(flatten)]
    pub document: Document,
    /// Backend-local relevance in [0, 1].
    pub score: f32,
    /// Backend that produced this candidate.
    pub retrieval_method: RetrievalMethod,
}

impl CandidateDocument {
    /// Wraps a document as a candidate from `method` with `score`.
    pub fn new(document: Document, score: f32, retrieval_method: RetrievalMethod) -> Self {
        Self {
            document,
            score,
            retrieval_method,
        }
    }

    /// Candidate identifier.
    pub fn id(&self) -> &str {
        &self.document.id
    }

    /// Score after applying the producing backend's fusion weight.
    ///
    /// A non-finite backend score contributes nothing.
    pub fn weighted_score(&self) -> f32 {
        if self.score.is_finite() {
            self.score * self.retrieval_method.weight()
        } else {
            0.0
        }
    }
}

// ============================================================================
// FusedDocument
// ============================================================================

/// A candidate merged across backends.
///
/// Content fields come from the first backend that produced the id; later
/// backends only add to `combined_score` and `retrieval_methods`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FusedDocument {
    /// First-seen candidate for this id.
    #[serde(flatten)]
    pub candidate: CandidateDocument,
    /// Sum of `score * weight` over every backend that produced the id.
    pub combined_score: f32,
    /// Every backend that produced the id, in fusion order.
    pub retrieval_methods: Vec<RetrievalMethod>,
}

impl FusedDocument {
    /// Starts a fused record from its first candidate.
    pub fn from_candidate(candidate: CandidateDocument) -> Self {
        let combined_score = candidate.weighted_score();
        let retrieval_methods = vec![candidate.retrieval_method];
        Self {
            candidate,
            combined_score,
            retrieval_methods,
        }
    }

    /// Adds another backend's agreement on this id.
    pub fn absorb(&mut self, candidate: &CandidateDocument) {
        self.combined_score += candidate.weighted_score();
        self.retrieval_methods.push(candidate.retrieval_method);
    }

    /// Document identifier.
    pub fn id(&self) -> &str {
        &self.candidate.document.id
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.candidate.document
    }
}

// ============================================================================
// Tests
// ============================================================================
