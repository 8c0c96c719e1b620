//! Knowledge graph infrastructure for Glonav.
//!
//! Entities (agencies, policies, datasets, regions) are stored in a
//! petgraph `DiGraph` with typed, directed relationships. The retriever
//! uses two capabilities: free-text entity search and N-hop neighborhood
//! expansion.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      glonav-graph                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  GraphBackend trait (never fails a query)                   │
//! │  └── SimpleGraphBackend (RwLock<GraphData>)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  algorithms: search_entities, neighborhood (BFS)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Entity, Edge, Relationship, EntityContext, GraphData       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use glonav_graph::{Edge, Entity, GraphBackend, Relationship, SimpleGraphBackend};
//!
//! # tokio_test::block_on(async {
//! let backend = SimpleGraphBackend::from_parts(
//!     vec![Entity::new("epa", "EPA"), Entity::new("caa", "Clean Air Act")],
//!     vec![Edge::new("epa", "caa", Relationship::Regulates)],
//! )
//! .unwrap();
//!
//! let hits = backend.search_entities("clean air", 5).await;
//! let ctx = backend.entity_context(&hits[0].id, 2).await.unwrap();
//! assert_eq!(ctx.connected[0].entity.name, "EPA");
//! # });
//! ```

pub mod algorithms;
pub mod backend;
pub mod types;

// Re-exports
pub use algorithms::{MAX_BFS_DEPTH, neighborhood, search_entities};
pub use backend::{GraphBackend, SimpleGraphBackend};
pub use types::{ConnectedEntity, Edge, Entity, EntityContext, GraphData, Relationship};
