//! Keyword backend trait and in-memory implementation.
//!
//! This module defines the `KeywordBackend` trait that every keyword store
//! executor must satisfy, plus the parameter type for keyword queries.
//!
//! # Scoring
//!
//! A document matches when its content contains **any** keyword
//! (case-insensitive substring, logical OR). Its score is the match ratio:
//! matched keywords divided by total keywords, in [0, 1]. An empty keyword
//! list matches nothing; it is never an error.
//!
//! # Backends
//!
//! - `SimpleKeywordBackend`: Linear scan over in-memory documents

use async_trait::async_trait;
use glonav_core::{CandidateDocument, Document, Error, Result, RetrievalMethod};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Parameters for a keyword search request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSearchParams {
    /// Lowercase keywords, combined with OR.
    pub keywords: Vec<String>,

    /// Maximum results to return.
    pub limit: usize,
}

impl KeywordSearchParams {
    /// Create params for `keywords` with the given limit.
    pub fn new(keywords: Vec<String>, limit: usize) -> Self {
        Self { keywords, limit }
    }
}

/// Abstract keyword search backend trait.
#[async_trait]
pub trait KeywordBackend: Send + Sync {
    /// Return up to `params.limit` documents containing any keyword, highest
    /// match ratio first, tagged [`RetrievalMethod::Keyword`].
    ///
    /// Internal errors and an empty keyword list yield an empty list.
    async fn search(&self, params: KeywordSearchParams) -> Vec<CandidateDocument>;

    /// Insert or replace a document (matched by id).
    ///
    /// Read-only backends keep the default, which reports an error.
    async fn upsert(&self, document: Document) -> Result<()> {
        Err(Error::operation(format!(
            "keyword backend '{}' does not accept writes (document '{}')",
            self.name(),
            document.id
        )))
    }

    /// Get the backend name for diagnostics.
    fn name(&self) -> &str;

    /// Check if the backend is ready to handle queries.
    fn is_ready(&self) -> bool {
        true
    }

    /// Get the number of indexed documents.
    fn document_count(&self) -> Result<usize>;
}

// ============================================================================
// SimpleKeywordBackend
// ============================================================================

/// Simple linear-scan keyword backend.
///
/// # Limitations
///
/// - O(n × k) search time
/// - No stemming or fuzzy matching
/// - Substring matching only
#[derive(Default)]
pub struct SimpleKeywordBackend {
    documents: RwLock<Vec<Document>>,
}

impl SimpleKeywordBackend {
    /// Create a new empty keyword backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-loaded with documents.
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    fn poisoned(&self) -> Error {
        Error::backend(self.name(), "document store lock poisoned")
    }

    fn try_search(&self, params: &KeywordSearchParams) -> Result<Vec<CandidateDocument>> {
        // Guards the match-ratio division below
        if params.keywords.is_empty() {
            return Ok(Vec::new());
        }

        let documents = self.documents.read().map_err(|_| self.poisoned())?;
        let keywords: Vec<String> = params.keywords.iter().map(|k| k.to_lowercase()).collect();
        let total = keywords.len() as f32;

        let mut scored: Vec<(usize, f32)> = documents
            .iter()
            .enumerate()
            .filter_map(|(i, doc)| {
                let content = doc.content.to_lowercase();
                let matched = keywords
                    .iter()
                    .filter(|kw| content.contains(kw.as_str()))
                    .count();
                (matched > 0).then(|| (i, matched as f32 / total))
            })
            .collect();

        // Stable sort: equal ratios keep store order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(params.limit);

        log::debug!(
            "SimpleKeywordBackend: keywords={:?}, limit={}, hits={}",
            keywords,
            params.limit,
            scored.len()
        );

        Ok(scored
            .into_iter()
            .map(|(i, score)| {
                CandidateDocument::new(documents[i].clone(), score, RetrievalMethod::Keyword)
            })
            .collect())
    }
}

#[async_trait]
impl KeywordBackend for SimpleKeywordBackend {
    async fn search(&self, params: KeywordSearchParams) -> Vec<CandidateDocument> {
        match self.try_search(&params) {
            Ok(items) => items,
            Err(e) => {
                log::error!("Keyword search failed: {e}");
                Vec::new()
            }
        }
    }

    async fn upsert(&self, document: Document) -> Result<()> {
        let mut documents = self.documents.write().map_err(|_| self.poisoned())?;
        match documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => documents.push(document),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "simple-keyword"
    }

    fn document_count(&self) -> Result<usize> {
        Ok(self.documents.read().map_err(|_| self.poisoned())?.len())
    }
}

impl std::fmt::Debug for SimpleKeywordBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleKeywordBackend")
            .field("documents", &self.document_count().unwrap_or(0))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
