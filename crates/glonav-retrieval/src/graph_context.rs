//! Graph search step: turn entity neighborhoods into candidate documents.

use glonav_core::{CandidateDocument, Document, RetrievalMethod};
use glonav_graph::{EntityContext, GraphBackend};

/// Entities requested from the graph backend per query.
pub const ENTITY_SEARCH_LIMIT: usize = 5;

/// Top entities whose neighborhoods are expanded.
pub const ENTITIES_EXPANDED: usize = 3;

/// Neighborhood depth, in hops.
pub const CONTEXT_DEPTH: usize = 2;

/// Score given to every graph record.
///
/// Placeholder: the graph store has no relevance model yet, so every record
/// carries the same constant.
pub const GRAPH_CONTEXT_SCORE: f32 = 0.8;

/// `source` label on graph records.
pub const GRAPH_SOURCE: &str = "Knowledge Graph";

/// `document_type` on graph records.
pub const ENTITY_DOCUMENT_TYPE: &str = "entity";

/// Search the graph for `query` and return up to `top_k` context records.
///
/// Entities whose context cannot be fetched are skipped.
pub async fn search_graph(
    graph: &dyn GraphBackend,
    query: &str,
    top_k: usize,
) -> Vec<CandidateDocument> {
    let entities = graph.search_entities(query, ENTITY_SEARCH_LIMIT).await;

    let mut records = Vec::new();
    for entity in entities.iter().take(ENTITIES_EXPANDED) {
        match graph.entity_context(&entity.id, CONTEXT_DEPTH).await {
            Some(context) => records.push(context_record(&context)),
            None => log::debug!("No graph context for entity '{}'", entity.id),
        }
    }

    records.truncate(top_k);
    records
}

/// Serialize one neighborhood into a scored candidate.
pub fn context_record(context: &EntityContext) -> CandidateDocument {
    let entity = &context.entity;

    let mut content = format!(
        "Entity: {}\nDescription: {}\n",
        entity.name,
        entity.description.as_deref().unwrap_or("No description")
    );
    for related in &context.connected {
        content.push_str(&format!(
            "Related: {} ({})\n",
            related.entity.name,
            related.relationship.name()
        ));
    }

    let document = Document::new(format!("entity_{}", entity.id), content)
        .with_title(entity.name.clone())
        .with_source(GRAPH_SOURCE)
        .with_document_type(ENTITY_DOCUMENT_TYPE)
        .with_metadata("entity_id", entity.id.clone())
        .with_metadata("entity_types", entity.entity_types.clone());

    CandidateDocument::new(document, GRAPH_CONTEXT_SCORE, RetrievalMethod::Graph)
}

// ============================================================================
// Tests
// ============================================================================
