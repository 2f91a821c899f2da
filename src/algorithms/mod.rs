//! Algorithms over the graph structures.
//!
//! Everything in this module is a read-only consumer of the structural layer:
//! the visitor-driven traversal framework and, built on top of it or directly
//! on the adjacency indices, the classical derived algorithms.
//!
//! - [`traversal`] - depth-first / breadth-first strategies with visitor
//!   early termination
//! - [`topological`] - DFS-postorder topological ordering of a DAG
//! - [`cycles`] - cycle detection and extraction
//! - [`scc`] - strongly connected components (Tarjan and the two-pass
//!   finish-time algorithm) plus the condensation graph
//! - [`mst`] - minimum spanning tree through a pluggable strategy (Kruskal)
//! - [`shortest_path`] - single-source shortest paths through a pluggable
//!   strategy (Dijkstra)

pub mod cycles;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod topological;
pub mod traversal;

pub use cycles::{find_cycle, has_cycle, is_acyclic};
pub use mst::{Kruskal, SpanningTreeStrategy};
pub use scc::{condensation, finish_time_scc, tarjan_scc, Condensation};
pub use shortest_path::{dijkstra_directed, Dijkstra, ShortestPathStrategy};
pub use topological::{postorder, reverse_topological_sort, topological_sort};
pub use traversal::{
    breadth_first, depth_first, traverse_with, BreadthFirst, DepthFirst, TraversalOrder,
    TraversalOutcome, TraversalStrategy, Visit,
};
