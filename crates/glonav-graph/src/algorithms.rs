//! Graph algorithms used by the retrieval pipeline.
//!
//! - Entity search (case-insensitive text match over names and descriptions)
//! - Neighborhood exploration (N-hop BFS with a capped max depth)
//!
//! Both operate on `GraphData` and never mutate it.

use crate::{ConnectedEntity, Entity, EntityContext, GraphData};
use glonav_core::{Error, Result};
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::collections::{HashSet, VecDeque};

/// Maximum allowed BFS depth to prevent runaway traversals.
pub const MAX_BFS_DEPTH: usize = 10;

// ============================================================================
// Entity search
// ============================================================================

/// How strongly an entity matched a query. Lower sorts first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    /// The query appears in the entity name.
    Name,
    /// The entity name appears in the query.
    Mentioned,
    /// Only the description matched.
    Description,
}

fn match_rank(entity: &Entity, query: &str) -> Option<MatchRank> {
    let name = entity.name.to_lowercase();
    if name.contains(query) {
        return Some(MatchRank::Name);
    }
    if !name.is_empty() && query.contains(name.as_str()) {
        return Some(MatchRank::Mentioned);
    }
    entity
        .description
        .as_deref()
        .filter(|d| d.to_lowercase().contains(query))
        .map(|_| MatchRank::Description)
}

/// Find entities relevant to free-text `query`.
///
/// An entity matches when the (trimmed, lowercased) query occurs in its
/// name or description, or when its name occurs in the query. Name matches
/// rank ahead of description-only matches; ties keep insertion order.
/// A blank query matches nothing.
pub fn search_entities(graph: &GraphData, query: &str, limit: usize) -> Vec<Entity> {
    let query = query.trim().to_lowercase();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(MatchRank, &Entity)> = graph
        .iter_entities()
        .filter_map(|entity| match_rank(entity, &query).map(|rank| (rank, entity)))
        .collect();

    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, e)| e.clone()).collect()
}

// ============================================================================
// Neighborhood
// ============================================================================

/// Get the N-hop neighborhood around an entity.
///
/// Performs a breadth-first search from the center over both outgoing and
/// incoming edges, collecting every entity within `depth` hops together
/// with the relationship it was reached through. Depth is capped at
/// [`MAX_BFS_DEPTH`].
///
/// Returns a not-found error when `center_id` is unknown.
pub fn neighborhood(graph: &GraphData, center_id: &str, depth: usize) -> Result<EntityContext> {
    let center_idx = graph
        .get_index(center_id)
        .ok_or_else(|| Error::not_found("entity", center_id))?;
    let center = graph.graph[center_idx].clone();

    let depth = depth.min(MAX_BFS_DEPTH);

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<(NodeIndex, usize)> = VecDeque::new();
    let mut connected: Vec<ConnectedEntity> = Vec::new();

    visited.insert(center_idx);
    queue.push_back((center_idx, 0));

    while let Some((current_idx, current_dist)) = queue.pop_front() {
        if current_dist >= depth {
            continue;
        }

        let outgoing = graph
            .graph
            .edges_directed(current_idx, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()));
        let incoming = graph
            .graph
            .edges_directed(current_idx, Direction::Incoming)
            .map(|e| (e.source(), e.weight()));

        for (neighbor_idx, edge) in outgoing.chain(incoming) {
            if visited.insert(neighbor_idx) {
                connected.push(ConnectedEntity {
                    entity: graph.graph[neighbor_idx].clone(),
                    relationship: edge.relationship.clone(),
                    depth: current_dist + 1,
                });
                queue.push_back((neighbor_idx, current_dist + 1));
            }
        }
    }

    log::trace!(
        "neighborhood: center={center_id}, depth={depth}, reached={}",
        connected.len()
    );

    Ok(EntityContext {
        entity: center,
        connected,
    })
}

// ============================================================================
// Tests
// ============================================================================
