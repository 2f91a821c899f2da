//! Topological ordering for directed acyclic graphs.
//!
//! The ordering is computed as a depth-first postorder, reversed: a vertex is
//! recorded after all vertices reachable from it, so reversing the record
//! yields the standard source-before-sink order. Starting the traversal from
//! every root vertex (no incoming edges) covers the whole DAG regardless of
//! connected components, since every vertex of a finite DAG is reachable from
//! some root.

use crate::{
    graph::{Dag, Digraph, Vertex, VertexId},
};

/// Depth-first postorder of the vertices reachable from `start`.
///
/// A vertex appears after every vertex reachable from it through unvisited
/// outgoing edges. Returns an empty sequence for a missing start vertex.
#[must_use]
pub fn postorder<V: Vertex, D>(digraph: &Digraph<V, D>, start: &V) -> Vec<V> {
    let Some(start_id) = digraph.vertex_id(start) else {
        return Vec::new();
    };
    let mut visited = vec![false; digraph.slot_count()];
    let mut order = Vec::new();
    postorder_ids(start_id, &mut visited, &mut order, |id| {
        digraph.successor_ids(id).collect()
    });
    order
        .into_iter()
        .filter_map(|id| digraph.vertex(id).cloned())
        .collect()
}

/// Iterative postorder over vertex slots using an explicit enter/exit stack.
pub(crate) fn postorder_ids<F>(
    start: VertexId,
    visited: &mut [bool],
    out: &mut Vec<VertexId>,
    successors: F,
) where
    F: Fn(VertexId) -> Vec<VertexId>,
{
    #[derive(Clone, Copy)]
    enum Step {
        Enter,
        Exit,
    }

    let mut stack = vec![(start, Step::Enter)];
    while let Some((node, step)) = stack.pop() {
        match step {
            Step::Enter => {
                if visited[node.index()] {
                    continue;
                }
                visited[node.index()] = true;
                stack.push((node, Step::Exit));

                // Reverse-push so children are entered in adjacency order.
                let children = successors(node);
                for &child in children.iter().rev() {
                    if !visited[child.index()] {
                        stack.push((child, Step::Enter));
                    }
                }
            }
            Step::Exit => out.push(node),
        }
    }
}

/// Vertex ordering of a DAG consistent with every edge: for each edge
/// `u -> v`, `u` appears before `v`.
///
/// Computed as the reversed depth-first postorder started from every root
/// vertex in insertion order.
///
/// # Examples
///
/// ```rust
/// use lattix::{algorithms::topological::topological_sort, Dag};
///
/// let mut dag: Dag<&str> = Dag::new();
/// dag.add_edge("shirt", "jacket").unwrap();
/// dag.add_edge("trousers", "jacket").unwrap();
///
/// let order = topological_sort(&dag);
/// let pos = |v: &str| order.iter().position(|x| *x == v).unwrap();
/// assert!(pos("shirt") < pos("jacket"));
/// assert!(pos("trousers") < pos("jacket"));
/// ```
#[must_use]
pub fn topological_sort<V: Vertex, D>(dag: &Dag<V, D>) -> Vec<V> {
    let mut visited = vec![false; dag.slot_count()];
    let mut order = Vec::new();

    let roots: Vec<VertexId> = dag.root_ids().collect();
    for root in roots {
        postorder_ids(root, &mut visited, &mut order, |id| {
            dag.successor_ids(id).collect()
        });
    }

    order.reverse();
    order
        .into_iter()
        .filter_map(|id| dag.vertex_by_id(id).cloned())
        .collect()
}

/// The exact reverse of [`topological_sort`]: sinks first, sources last.
#[must_use]
pub fn reverse_topological_sort<V: Vertex, D>(dag: &Dag<V, D>) -> Vec<V> {
    let mut order = topological_sort(dag);
    order.reverse();
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position<V: PartialEq>(order: &[V], vertex: &V) -> usize {
        order.iter().position(|x| x == vertex).unwrap()
    }

    #[test]
    fn test_postorder_chain() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");

        assert_eq!(postorder(&graph, &"A"), vec!["C", "B", "A"]);
        assert_eq!(postorder(&graph, &"B"), vec!["C", "B"]);
        assert!(postorder(&graph, &"Z").is_empty());
    }

    #[test]
    fn test_postorder_diamond() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("C", "D");

        let order = postorder(&graph, &"A");
        assert_eq!(order.len(), 4);
        assert_eq!(*order.last().unwrap(), "A");
        assert!(position(&order, &"D") < position(&order, &"B"));
    }

    #[test]
    fn test_topological_sort_chain() {
        let mut dag: Dag<&str> = Dag::new();
        dag.add_edge("A", "B").unwrap();
        dag.add_edge("B", "C").unwrap();

        assert_eq!(topological_sort(&dag), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_topological_sort_respects_every_edge() {
        let mut dag: Dag<&str> = Dag::new();
        let edges = [
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("D", "E"),
            ("C", "E"),
        ];
        for (u, v) in edges {
            dag.add_edge(u, v).unwrap();
        }

        let order = topological_sort(&dag);
        assert_eq!(order.len(), 5);
        for (u, v) in edges {
            assert!(
                position(&order, &u) < position(&order, &v),
                "{u} must precede {v} in {order:?}"
            );
        }
    }

    #[test]
    fn test_topological_sort_covers_all_components() {
        let mut dag: Dag<&str> = Dag::new();
        dag.add_edge("A", "B").unwrap();
        dag.add_edge("C", "D").unwrap();
        dag.add("E");

        let order = topological_sort(&dag);
        assert_eq!(order.len(), 5);
        assert!(position(&order, &"A") < position(&order, &"B"));
        assert!(position(&order, &"C") < position(&order, &"D"));
    }

    #[test]
    fn test_reverse_is_exact_reverse() {
        let mut dag: Dag<u32> = Dag::new();
        for i in 0..6 {
            dag.add_edge(i, i + 1).unwrap();
        }

        let forward = topological_sort(&dag);
        let mut backward = reverse_topological_sort(&dag);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_empty_dag() {
        let dag: Dag<&str> = Dag::new();
        assert!(topological_sort(&dag).is_empty());
    }

    #[test]
    fn test_isolated_vertices_appear() {
        let mut dag: Dag<&str> = Dag::new();
        dag.add("solo");
        assert_eq!(topological_sort(&dag), vec!["solo"]);
    }
}
