//! Weighted-sum fusion of the three backend result lists.
//!
//! score(d) = Σ backend_score(d) × backend_weight
//!
//! with fixed weights vector 0.5, keyword 0.3, graph 0.2. A document
//! returned by several backends accumulates each contribution, so
//! cross-backend agreement outranks single-backend confidence.

use glonav_core::{CandidateDocument, FusedDocument};
use std::collections::HashMap;

/// Fuse backend results into one ranked, deduplicated list of at most
/// `top_k` documents.
///
/// Lists are merged in the fixed order vector, keyword, graph. The first
/// candidate seen for an id supplies the document fields; later ones only
/// add to `combined_score` and `retrieval_methods`. The sort is stable, so
/// equal scores keep first-insertion order.
pub fn fuse(
    vector_results: Vec<CandidateDocument>,
    keyword_results: Vec<CandidateDocument>,
    graph_results: Vec<CandidateDocument>,
    top_k: usize,
) -> Vec<FusedDocument> {
    let capacity = vector_results.len() + keyword_results.len() + graph_results.len();
    let mut fused: Vec<FusedDocument> = Vec::with_capacity(capacity);
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);

    for candidate in vector_results
        .into_iter()
        .chain(keyword_results)
        .chain(graph_results)
    {
        match positions.get(candidate.id()) {
            Some(&pos) => fused[pos].absorb(&candidate),
            None => {
                positions.insert(candidate.id().to_string(), fused.len());
                fused.push(FusedDocument::from_candidate(candidate));
            }
        }
    }

    fused.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));
    fused.truncate(top_k);
    fused
}

// ============================================================================
// Tests
// ============================================================================
