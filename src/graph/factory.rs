//! Edge construction factories.
//!
//! Each graph variant is paired with a factory that builds edges appropriate
//! for it: a directed variant's factory always constructs directed edges.
//! Transformations that create new edges (filtering, folding, homomorphic
//! mapping) must go through the target graph's factory rather than construct
//! edges directly, so the result stays type-consistent with its declared
//! variant.

use crate::graph::Edge;

/// Constructs edges appropriate for one graph variant.
///
/// Obtain the right factory from the graph itself via
/// [`Graph::edge_factory`](crate::Graph::edge_factory); passing a factory's
/// output to a mismatched variant is rejected at insertion.
///
/// # Examples
///
/// ```rust
/// use lattix::{Digraph, Graph};
///
/// let directed: Digraph<&str> = Digraph::new();
/// let edge = directed.edge_factory().edge("A", "B", ());
/// assert!(edge.is_directed());
///
/// let undirected: Graph<&str> = Graph::new();
/// assert!(!undirected.edge_factory().edge("A", "B", ()).is_directed());
/// ```
pub trait EdgeFactory<V, D> {
    /// Builds an edge between `first` and `second` carrying `data`.
    fn edge(&self, first: V, second: V, data: D) -> Edge<V, D>;
}

/// Factory producing symmetric, direction-free edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct UndirectedEdgeFactory;

impl<V, D> EdgeFactory<V, D> for UndirectedEdgeFactory {
    fn edge(&self, first: V, second: V, data: D) -> Edge<V, D> {
        Edge::undirected(first, second, data)
    }
}

/// Factory producing source-to-sink directed edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectedEdgeFactory;

impl<V, D> EdgeFactory<V, D> for DirectedEdgeFactory {
    fn edge(&self, source: V, sink: V, data: D) -> Edge<V, D> {
        Edge::directed(source, sink, data)
    }
}
