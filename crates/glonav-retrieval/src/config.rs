//! Retrieval configuration.

use glonav_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings for the hybrid retriever.
///
/// Every field has a default, so an empty `[retrieval]` table is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Default number of results per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Vector candidates must have similarity strictly above this.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Character budget for the returned context.
    #[serde(default = "default_max_context_length")]
    pub max_context_length: usize,

    /// Whether graph search runs when a request does not say.
    #[serde(default = "default_include_graph_context")]
    pub include_graph_context: bool,
}

fn default_top_k() -> usize {
    10
}

fn default_similarity_threshold() -> f32 {
    0.7
}

fn default_max_context_length() -> usize {
    8000
}

fn default_include_graph_context() -> bool {
    true
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            similarity_threshold: default_similarity_threshold(),
            max_context_length: default_max_context_length(),
            include_graph_context: default_include_graph_context(),
        }
    }
}

impl RetrievalConfig {
    /// Set the default result count.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the vector similarity floor.
    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the context character budget.
    pub fn with_max_context_length(mut self, max_context_length: usize) -> Self {
        self.max_context_length = max_context_length;
        self
    }

    /// Set the default for graph search.
    pub fn with_graph_context(mut self, include: bool) -> Self {
        self.include_graph_context = include;
        self
    }

    /// Reject settings the retriever cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::config("retrieval.top_k must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(Error::config(format!(
                "retrieval.similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}
