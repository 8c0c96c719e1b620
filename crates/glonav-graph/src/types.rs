//! Core knowledge-graph types.
//!
//! Entities (agencies, datasets, policies, regions, ...) are nodes; typed
//! relationships are directed edges. The graph wraps a petgraph `DiGraph`
//! with id lookup tables.

use glonav_core::{Error, Metadata, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Relationship enum
// ============================================================================

/// Relationship types for graph edges.
///
/// Common relationships are first-class variants; anything else is kept
/// verbatim in `Custom`. Serialized as a plain snake_case string.
///
/// # Example
///
/// ```rust
/// use glonav_graph::Relationship;
///
/// assert_eq!(Relationship::from("regulates"), Relationship::Regulates);
/// assert_eq!(Relationship::from("FUNDS").name(), "funds");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relationship {
    /// A and B are related in an unspecified way.
    #[default]
    RelatedTo,
    /// A is a component or subdivision of B.
    PartOf,
    /// A (agency, policy) regulates B.
    Regulates,
    /// A is located in region B.
    LocatedIn,
    /// Dataset A was derived from B.
    DerivedFrom,
    /// A publishes dataset or report B.
    Publishes,
    /// A measures indicator B.
    Measures,
    /// Domain-specific relationship not covered above.
    Custom(String),
}

impl Relationship {
    /// Returns the relationship name as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::RelatedTo => "related_to",
            Self::PartOf => "part_of",
            Self::Regulates => "regulates",
            Self::LocatedIn => "located_in",
            Self::DerivedFrom => "derived_from",
            Self::Publishes => "publishes",
            Self::Measures => "measures",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for Relationship {
    fn from(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "related_to" | "related" | "relates_to" => Self::RelatedTo,
            "part_of" => Self::PartOf,
            "regulates" => Self::Regulates,
            "located_in" => Self::LocatedIn,
            "derived_from" => Self::DerivedFrom,
            "publishes" => Self::Publishes,
            "measures" => Self::Measures,
            _ => Self::Custom(normalized),
        }
    }
}

impl From<String> for Relationship {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Relationship> for String {
    fn from(rel: Relationship) -> Self {
        rel.name().to_string()
    }
}

// ============================================================================
// Entity struct
// ============================================================================

/// A node in the knowledge graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier (e.g., "epa", "clean-air-act").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type labels (e.g., ["Agency"], ["Dataset"]).
    #[serde(default)]
    pub entity_types: Vec<String>,
    /// Domain-specific metadata as key-value pairs.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Entity {
    /// Creates a new entity with the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a type label.
    pub fn with_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_types.push(entity_type.into());
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
}

// ============================================================================
// Edge struct
// ============================================================================

/// A directed relationship between two entities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source entity ID.
    pub from: String,
    /// Target entity ID.
    pub to: String,
    /// Type of relationship.
    #[serde(default)]
    pub relationship: Relationship,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, relationship: Relationship) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relationship,
        }
    }
}

// ============================================================================
// EntityContext
// ============================================================================

/// An entity reached while exploring a neighborhood.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConnectedEntity {
    /// The reached entity.
    pub entity: Entity,
    /// Relationship of the edge it was reached through.
    pub relationship: Relationship,
    /// Hops from the center (1 = direct neighbor).
    pub depth: usize,
}

/// An entity with its N-hop neighborhood.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityContext {
    /// The central entity.
    pub entity: Entity,
    /// Neighbors in breadth-first order.
    pub connected: Vec<ConnectedEntity>,
}

// ============================================================================
// GraphData struct
// ============================================================================

/// Core graph data structure.
///
/// Wraps a petgraph `DiGraph` with a lookup table for id-based access.
#[derive(Clone, Debug)]
pub struct GraphData {
    /// The underlying directed graph.
    pub graph: DiGraph<Entity, Edge>,
    /// Lookup table: entity ID → petgraph NodeIndex.
    pub node_indices: HashMap<String, NodeIndex>,
}

impl GraphData {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
        }
    }

    /// Returns the number of entities.
    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of relationships.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Gets an entity by ID.
    pub fn get_entity(&self, id: &str) -> Option<&Entity> {
        self.node_indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Gets the petgraph index for an entity ID.
    pub fn get_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// Checks whether an entity exists.
    pub fn contains_entity(&self, id: &str) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Iterates over entities in insertion order.
    pub fn iter_entities(&self) -> impl Iterator<Item = &Entity> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Add an entity, replacing the stored data if the ID already exists.
    ///
    /// Returns the entity's `NodeIndex`.
    pub fn add_entity(&mut self, entity: Entity) -> NodeIndex {
        if let Some(&existing_idx) = self.node_indices.get(&entity.id) {
            self.graph[existing_idx] = entity;
            return existing_idx;
        }
        let id = entity.id.clone();
        let idx = self.graph.add_node(entity);
        self.node_indices.insert(id, idx);
        idx
    }

    /// Add an edge between two entities identified by ID.
    ///
    /// Both entities must already exist in the graph.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let from_idx = self
            .get_index(&edge.from)
            .ok_or_else(|| Error::not_found("entity", &edge.from))?;
        let to_idx = self
            .get_index(&edge.to)
            .ok_or_else(|| Error::not_found("entity", &edge.to))?;

        self.graph.add_edge(from_idx, to_idx, edge);
        Ok(())
    }
}

impl Default for GraphData {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
