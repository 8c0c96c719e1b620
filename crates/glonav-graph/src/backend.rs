//! Graph backend trait and in-memory implementation.
//!
//! Mirrors `glonav_vector::VectorBackend` and `glonav_fts::KeywordBackend`:
//! query methods cannot fail. A store error or an unknown entity is logged
//! and reported as an empty result.

use async_trait::async_trait;
use glonav_core::{Error, Result};
use std::sync::RwLock;

use crate::algorithms::{neighborhood, search_entities};
use crate::types::{Edge, Entity, EntityContext, GraphData};

/// Abstract knowledge-graph backend trait.
#[async_trait]
pub trait GraphBackend: Send + Sync {
    /// Return up to `limit` entities matching free-text `query`, best first.
    async fn search_entities(&self, query: &str, limit: usize) -> Vec<Entity>;

    /// Return the entity with its `depth`-hop neighborhood, or `None` when
    /// the entity is unknown or the store fails.
    async fn entity_context(&self, entity_id: &str, depth: usize) -> Option<EntityContext>;

    /// Get the backend name for diagnostics.
    fn name(&self) -> &str;

    /// Check if the backend is ready to handle queries.
    fn is_ready(&self) -> bool {
        true
    }

    /// Get the number of entities.
    fn entity_count(&self) -> Result<usize>;

    /// Get the number of relationships.
    fn relationship_count(&self) -> Result<usize>;
}

// ============================================================================
// SimpleGraphBackend
// ============================================================================

/// In-memory graph backend over [`GraphData`].
#[derive(Default)]
pub struct SimpleGraphBackend {
    graph: RwLock<GraphData>,
}

impl SimpleGraphBackend {
    /// Create a new empty graph backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend over an existing graph.
    pub fn with_graph(graph: GraphData) -> Self {
        Self {
            graph: RwLock::new(graph),
        }
    }

    /// Build a backend from entity and edge lists.
    ///
    /// Fails if an edge references an entity that is not in `entities`.
    pub fn from_parts(entities: Vec<Entity>, edges: Vec<Edge>) -> Result<Self> {
        let mut graph = GraphData::new();
        for entity in entities {
            graph.add_entity(entity);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(Self::with_graph(graph))
    }

    /// Insert or replace an entity.
    pub fn add_entity(&self, entity: Entity) -> Result<()> {
        self.graph
            .write()
            .map_err(|_| self.poisoned())?
            .add_entity(entity);
        Ok(())
    }

    /// Add a relationship between two existing entities.
    pub fn add_edge(&self, edge: Edge) -> Result<()> {
        self.graph.write().map_err(|_| self.poisoned())?.add_edge(edge)
    }

    fn poisoned(&self) -> Error {
        Error::backend(self.name(), "graph lock poisoned")
    }
}

#[async_trait]
impl GraphBackend for SimpleGraphBackend {
    async fn search_entities(&self, query: &str, limit: usize) -> Vec<Entity> {
        match self.graph.read() {
            Ok(graph) => search_entities(&graph, query, limit),
            Err(_) => {
                log::error!("Entity search failed: {}", self.poisoned());
                Vec::new()
            }
        }
    }

    async fn entity_context(&self, entity_id: &str, depth: usize) -> Option<EntityContext> {
        let result = self
            .graph
            .read()
            .map_err(|_| self.poisoned())
            .and_then(|graph| neighborhood(&graph, entity_id, depth));
        match result {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::warn!("Entity context unavailable: {e}");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "simple-graph"
    }

    fn entity_count(&self) -> Result<usize> {
        Ok(self.graph.read().map_err(|_| self.poisoned())?.entity_count())
    }

    fn relationship_count(&self) -> Result<usize> {
        Ok(self.graph.read().map_err(|_| self.poisoned())?.edge_count())
    }
}

impl std::fmt::Debug for SimpleGraphBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleGraphBackend")
            .field("entities", &self.entity_count().unwrap_or(0))
            .field("relationships", &self.relationship_count().unwrap_or(0))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
