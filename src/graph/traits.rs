//! Trait definitions for the read-only query surface.
//!
//! The traversal framework and external read-only consumers (layout engines,
//! matrix analytics) program against these traits instead of concrete graph
//! types, so the same algorithm runs over undirected graphs, directed graphs,
//! DAGs and trees without modification.
//!
//! # Design
//!
//! - [`VertexScan`] - Core properties: vertex count, enumeration in insertion
//!   order, membership test
//! - [`Adjacency`] - Neighborhood queries; the single seam that decides what
//!   "adjacent" means for a variant (all incident edges for undirected
//!   structures, outgoing edges only for directed ones)
//!
//! All enumeration methods return iterators for lazy evaluation; none of them
//! mutate the graph, and the borrowed references they yield must not be
//! retained across a subsequent mutation.

/// Base trait providing core read-only graph properties.
///
/// # Examples
///
/// ```rust
/// use lattix::{Graph, VertexScan};
///
/// fn biggest<'g, G: VertexScan<&'g str>>(graph: &G) -> usize {
///     graph.vertex_count()
/// }
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.add("A");
/// graph.add("B");
/// assert_eq!(biggest(&graph), 2);
/// ```
pub trait VertexScan<V> {
    /// Returns the number of vertices in the structure.
    fn vertex_count(&self) -> usize;

    /// Iterates all vertices in insertion order.
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Returns `true` if the vertex value is present.
    fn contains(&self, vertex: &V) -> bool;
}

/// Trait for structures exposing a vertex neighborhood.
///
/// The neighborhood decides traversal semantics: undirected structures yield
/// the opposite endpoint of every incident edge, directed structures yield
/// only the targets of outgoing edges. Parallel edges repeat their neighbor;
/// traversals deduplicate through their visited set.
pub trait Adjacency<V>: VertexScan<V> {
    /// Iterates the vertices adjacent to `vertex`, one entry per qualifying
    /// incident edge. Empty for an absent vertex.
    fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Digraph, Graph};

    fn reach_count<'g, G: Adjacency<&'g str>>(graph: &G, from: &&'g str) -> usize {
        // Tiny trait-only reachability check, independent of the traversal
        // framework.
        let mut seen = vec![*from];
        let mut stack = vec![*from];
        while let Some(current) = stack.pop() {
            for next in graph.adjacent(&current) {
                if !seen.contains(next) {
                    seen.push(*next);
                    stack.push(*next);
                }
            }
        }
        seen.len()
    }

    #[test]
    fn test_undirected_adjacency_ignores_direction() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("C", "B");

        assert_eq!(reach_count(&graph, &"A"), 3);
    }

    #[test]
    fn test_directed_adjacency_follows_outgoing_only() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("C", "B");

        assert_eq!(reach_count(&graph, &"A"), 2);
        assert_eq!(reach_count(&graph, &"B"), 1);
    }

    #[test]
    fn test_vertex_scan_via_trait_object_style_generics() {
        fn describe<V, G: VertexScan<V>>(graph: &G) -> (usize, bool) {
            (graph.vertex_count(), graph.vertex_count() == 0)
        }

        let mut graph: Graph<u32> = Graph::new();
        graph.add(1);
        assert_eq!(describe(&graph), (1, false));
    }
}
