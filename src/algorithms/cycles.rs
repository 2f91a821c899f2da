//! Cycle detection for directed graphs.
//!
//! Depth-first search with an explicit recursion-stack marker: an edge back
//! into a vertex still on the DFS stack is a back edge, and a back edge means
//! a cycle. [`find_cycle`] additionally keeps the current DFS path so a
//! detected cycle can be handed back as a concrete, closed [`CyclePath`].

use crate::graph::{CyclePath, Digraph, Vertex, VertexId};

/// Returns `true` when the directed graph contains any cycle.
///
/// Every vertex serves as a potential search root, so cycles in any component
/// are found.
///
/// # Examples
///
/// ```rust
/// use lattix::{algorithms::cycles::has_cycle, Digraph};
///
/// let mut graph: Digraph<&str> = Digraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// assert!(!has_cycle(&graph));
///
/// graph.add_edge("C", "A");
/// assert!(has_cycle(&graph));
/// ```
#[must_use]
pub fn has_cycle<V: Vertex, D>(digraph: &Digraph<V, D>) -> bool {
    let mut visited = vec![false; digraph.slot_count()];
    let mut in_stack = vec![false; digraph.slot_count()];

    let starts: Vec<VertexId> = digraph.vertex_ids().collect();
    starts
        .into_iter()
        .any(|start| !visited[start.index()] && dfs_finds_back_edge(digraph, start, &mut visited, &mut in_stack))
}

/// Convenience inverse of [`has_cycle`].
#[must_use]
pub fn is_acyclic<V: Vertex, D>(digraph: &Digraph<V, D>) -> bool {
    !has_cycle(digraph)
}

fn dfs_finds_back_edge<V: Vertex, D>(
    digraph: &Digraph<V, D>,
    node: VertexId,
    visited: &mut [bool],
    in_stack: &mut [bool],
) -> bool {
    if in_stack[node.index()] {
        return true;
    }
    if visited[node.index()] {
        return false;
    }

    visited[node.index()] = true;
    in_stack[node.index()] = true;

    let successors: Vec<VertexId> = digraph.successor_ids(node).collect();
    for next in successors {
        if dfs_finds_back_edge(digraph, next, visited, in_stack) {
            return true;
        }
    }

    in_stack[node.index()] = false;
    false
}

/// Finds a cycle and returns it as a closed [`CyclePath`], or `None` for an
/// acyclic graph.
///
/// The returned path lists the cycle's distinct vertices in edge order; the
/// closing edge from the last vertex back to the first stays implied by the
/// sealed path. A self-loop yields a closed single-vertex path.
#[must_use]
pub fn find_cycle<V: Vertex, D>(digraph: &Digraph<V, D>) -> Option<CyclePath<V>> {
    let mut visited = vec![false; digraph.slot_count()];
    let mut in_stack = vec![false; digraph.slot_count()];
    let mut path = Vec::new();

    let starts: Vec<VertexId> = digraph.vertex_ids().collect();
    for start in starts {
        if visited[start.index()] {
            continue;
        }
        if let Some(ids) =
            dfs_extract_cycle(digraph, start, &mut visited, &mut in_stack, &mut path)
        {
            let mut cycle = CyclePath::new();
            for id in ids {
                cycle.push(digraph.vertex(id)?.clone()).ok()?;
            }
            cycle.close().ok()?;
            return Some(cycle);
        }
    }
    None
}

fn dfs_extract_cycle<V: Vertex, D>(
    digraph: &Digraph<V, D>,
    node: VertexId,
    visited: &mut [bool],
    in_stack: &mut [bool],
    path: &mut Vec<VertexId>,
) -> Option<Vec<VertexId>> {
    if in_stack[node.index()] {
        // Back edge: the cycle is the path suffix starting at `node`.
        let start = path.iter().position(|&entry| entry == node)?;
        return Some(path[start..].to_vec());
    }
    if visited[node.index()] {
        return None;
    }

    visited[node.index()] = true;
    in_stack[node.index()] = true;
    path.push(node);

    let successors: Vec<VertexId> = digraph.successor_ids(node).collect();
    for next in successors {
        if let Some(cycle) = dfs_extract_cycle(digraph, next, visited, in_stack, path) {
            return Some(cycle);
        }
    }

    path.pop();
    in_stack[node.index()] = false;
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Digraph<&'static str> {
        let mut graph = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        graph
    }

    #[test]
    fn test_acyclic_chain() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");

        assert!(!has_cycle(&graph));
        assert!(is_acyclic(&graph));
        assert!(find_cycle(&graph).is_none());
    }

    #[test]
    fn test_acyclic_diamond() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "D");
        graph.add_edge("C", "D");

        assert!(!has_cycle(&graph));
    }

    #[test]
    fn test_triangle_cycle_found() {
        let graph = triangle();
        assert!(has_cycle(&graph));

        let cycle = find_cycle(&graph).unwrap();
        assert!(cycle.is_closed());
        assert_eq!(cycle.len(), 3);
    }

    #[test]
    fn test_cycle_path_edges_exist() {
        let graph = triangle();
        let cycle = find_cycle(&graph).unwrap();
        let vertices: Vec<&&str> = cycle.iter().collect();

        // Consecutive vertices are connected by directed edges, and so is the
        // implied closing pair.
        for pair in vertices.windows(2) {
            assert!(graph.edge_between(pair[0], pair[1]).is_some());
        }
        let first = *vertices.first().unwrap();
        let last = *vertices.last().unwrap();
        assert!(graph.edge_between(last, first).is_some());
    }

    #[test]
    fn test_self_loop_cycle() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "A");

        assert!(has_cycle(&graph));
        let cycle = find_cycle(&graph).unwrap();
        assert_eq!(cycle.len(), 1);
        assert!(cycle.is_closed());
    }

    #[test]
    fn test_cycle_not_reachable_from_first_vertex() {
        // Entry vertex sits outside the cycle.
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("entry", "A");
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");

        assert!(has_cycle(&graph));
        let cycle = find_cycle(&graph).unwrap();
        assert_eq!(cycle.len(), 3);
        let members: Vec<&&str> = cycle.iter().collect();
        assert!(!members.contains(&&"entry"));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("X", "Y");
        graph.add_edge("Y", "X");

        assert!(has_cycle(&graph));
        let cycle = find_cycle(&graph).unwrap();
        assert_eq!(cycle.len(), 2);
    }

    #[test]
    fn test_two_separate_diamonds_stay_acyclic() {
        let mut graph: Digraph<u32> = Digraph::new();
        for base in [0, 10] {
            graph.add_edge(base, base + 1);
            graph.add_edge(base, base + 2);
            graph.add_edge(base + 1, base + 3);
            graph.add_edge(base + 2, base + 3);
        }
        assert!(is_acyclic(&graph));
    }
}
