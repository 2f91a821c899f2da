//! # lattix Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits, so typical consumers get a working surface from a single
//! import:
//!
//! ```rust
//! use lattix::prelude::*;
//!
//! let mut graph: Graph<&str, f64> = Graph::new();
//! graph.add_edge_with("A", "B", 1.0);
//! let tree = graph.minimum_spanning_tree()?;
//! assert_eq!(tree.edge_count(), 1);
//! # Ok::<(), lattix::Error>(())
//! ```

// ================================================================================================
// Core Structures
// ================================================================================================

/// Graph variants and the vertex/edge model
pub use crate::graph::{
    Dag, Digraph, Edge, EdgeId, EdgeWeight, Graph, Tree, Vertex, VertexFactory, VertexId,
};

/// Path builders
pub use crate::graph::{CyclePath, Path, SimplePath};

/// Edge factories
pub use crate::graph::{DirectedEdgeFactory, EdgeFactory, UndirectedEdgeFactory};

/// Structural-change observation
pub use crate::graph::{GraphEvents, GraphObserver, ObserverId};

/// Read-only query traits
pub use crate::graph::{Adjacency, VertexScan};

// ================================================================================================
// Algorithm Layer
// ================================================================================================

/// Traversal framework
pub use crate::algorithms::{
    breadth_first, depth_first, traverse_with, BreadthFirst, DepthFirst, TraversalOrder,
    TraversalOutcome, TraversalStrategy, Visit,
};

/// Topological ordering and cycle utilities
pub use crate::algorithms::{
    find_cycle, has_cycle, is_acyclic, postorder, reverse_topological_sort, topological_sort,
};

/// Strongly connected components
pub use crate::algorithms::{condensation, finish_time_scc, tarjan_scc, Condensation};

/// Weighted operations
pub use crate::algorithms::{
    dijkstra_directed, Dijkstra, Kruskal, ShortestPathStrategy, SpanningTreeStrategy,
};

// ================================================================================================
// Error Handling
// ================================================================================================

/// Crate-wide error type and result alias
pub use crate::{Error, Result};
