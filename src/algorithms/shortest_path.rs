//! Single-source shortest paths.
//!
//! Shortest-path computation is exposed through the pluggable
//! [`ShortestPathStrategy`] contract; [`Dijkstra`] is the shipped
//! implementation, ordering the frontier by tentative distance on a binary
//! heap. The result is the shortest-path tree over the source's reachable
//! vertices: a new graph sharing vertex and payload values with the
//! original, never a live view.
//!
//! Dijkstra's invariant requires non-negative weights; a graph carrying a
//! negative edge weight is rejected before any work happens.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{
    graph::{Digraph, EdgeId, EdgeWeight, Graph, Vertex, VertexId},
    Error, Result,
};

/// A swappable single-source shortest-path algorithm.
///
/// Input: a weighted graph and a source vertex. Output: a new graph holding
/// the shortest-path tree rooted at the source. Callers may substitute any
/// implementation with the same contract via
/// [`Graph::shortest_paths_with`].
pub trait ShortestPathStrategy<V: Vertex, D: EdgeWeight + Clone> {
    /// Computes the shortest-path tree from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] for an absent source; implementations
    /// may reject further inputs they cannot handle.
    fn shortest_paths(&self, graph: &Graph<V, D>, source: &V) -> Result<Graph<V, D>>;
}

/// Heap entry ordered as a min-heap on tentative distance.
struct QueueEntry {
    cost: f64,
    vertex: VertexId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the std max-heap pops the smallest tentative distance.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

/// Per-slot result of a Dijkstra run.
struct ShortestPathState {
    distance: Vec<Option<f64>>,
    parent_edge: Vec<Option<EdgeId>>,
}

fn run_dijkstra<F>(slots: usize, source: VertexId, neighbors: F) -> ShortestPathState
where
    F: Fn(VertexId) -> Vec<(VertexId, EdgeId, f64)>,
{
    let mut state = ShortestPathState {
        distance: vec![None; slots],
        parent_edge: vec![None; slots],
    };
    state.distance[source.index()] = Some(0.0);

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        cost: 0.0,
        vertex: source,
    });

    while let Some(QueueEntry { cost, vertex }) = heap.pop() {
        // Stale entry: a shorter route was settled earlier.
        if state.distance[vertex.index()].is_some_and(|best| cost > best) {
            continue;
        }
        for (next, edge, weight) in neighbors(vertex) {
            let candidate = cost + weight;
            if state.distance[next.index()].map_or(true, |best| candidate < best) {
                state.distance[next.index()] = Some(candidate);
                state.parent_edge[next.index()] = Some(edge);
                heap.push(QueueEntry {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }
    state
}

/// Dijkstra's algorithm over a binary heap of tentative distances.
///
/// # Examples
///
/// ```rust
/// use lattix::Graph;
///
/// let mut graph: Graph<&str, f64> = Graph::new();
/// graph.add_edge_with("A", "B", 1.0);
/// graph.add_edge_with("B", "C", 1.0);
/// graph.add_edge_with("A", "C", 5.0);
///
/// let tree = graph.shortest_paths(&"A").unwrap();
/// // C is reached through B, not through the heavy direct edge.
/// assert!(tree.contains_edge(&lattix::Edge::undirected("B", "C", 1.0)));
/// assert_eq!(tree.edge_count(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl<V: Vertex + 'static, D: EdgeWeight + Clone + 'static> ShortestPathStrategy<V, D> for Dijkstra {
    fn shortest_paths(&self, graph: &Graph<V, D>, source: &V) -> Result<Graph<V, D>> {
        let source_id = graph.vertex_id(source).ok_or(Error::MissingVertex)?;
        reject_negative_weights(graph.live_edge_ids().filter_map(|edge| graph.data_of(edge)))?;

        let state = run_dijkstra(graph.slot_count(), source_id, |vertex| {
            graph
                .incident_ids(vertex)
                .iter()
                .filter_map(|&edge| {
                    let (a, b) = graph.endpoints_of(edge)?;
                    let other = if a == vertex { b } else { a };
                    let weight = graph.data_of(edge)?.weight();
                    Some((other, edge, weight))
                })
                .collect()
        });

        let mut tree: Graph<V, D> = Graph::new();
        let factory = tree.edge_factory();
        for vertex in graph.vertex_ids() {
            if state.distance[vertex.index()].is_some() {
                if let Some(value) = graph.vertex(vertex) {
                    tree.add(value.clone());
                }
            }
        }
        for vertex in graph.vertex_ids() {
            let Some(edge) = state.parent_edge[vertex.index()] else {
                continue;
            };
            let Some((a, b)) = graph.endpoints_of(edge) else {
                continue;
            };
            if let (Some(first), Some(second), Some(data)) =
                (graph.vertex(a), graph.vertex(b), graph.data_of(edge))
            {
                tree.add_edge_object(factory.edge(first.clone(), second.clone(), data.clone()))?;
            }
        }
        Ok(tree)
    }
}

/// Directed Dijkstra over outgoing edges only.
///
/// # Errors
///
/// Returns [`Error::MissingVertex`] for an absent source and
/// [`Error::Modification`] for a negative edge weight.
pub fn dijkstra_directed<V: Vertex + 'static, D: EdgeWeight + Clone + 'static>(
    digraph: &Digraph<V, D>,
    source: &V,
) -> Result<Digraph<V, D>> {
    let source_id = digraph.vertex_id(source).ok_or(Error::MissingVertex)?;
    reject_negative_weights(digraph.live_edge_ids().filter_map(|edge| digraph.edge_data(edge)))?;

    let state = run_dijkstra(digraph.slot_count(), source_id, |vertex| {
        digraph
            .out_edge_ids(vertex)
            .iter()
            .filter_map(|&edge| {
                let (_, sink) = digraph.edge_endpoint_ids(edge)?;
                let weight = digraph.edge_data(edge)?.weight();
                Some((sink, edge, weight))
            })
            .collect()
    });

    let mut tree: Digraph<V, D> = Digraph::new();
    let factory = tree.edge_factory();
    for vertex in digraph.vertex_ids() {
        if state.distance[vertex.index()].is_some() {
            if let Some(value) = digraph.vertex(vertex) {
                tree.add(value.clone());
            }
        }
    }
    for vertex in digraph.vertex_ids() {
        let Some(edge) = state.parent_edge[vertex.index()] else {
            continue;
        };
        let Some((a, b)) = digraph.edge_endpoint_ids(edge) else {
            continue;
        };
        if let (Some(first), Some(second), Some(data)) =
            (digraph.vertex(a), digraph.vertex(b), digraph.edge_data(edge))
        {
            tree.add_edge_object(factory.edge(first.clone(), second.clone(), data.clone()))?;
        }
    }
    Ok(tree)
}

fn reject_negative_weights<'d, D: EdgeWeight + 'd>(
    payloads: impl Iterator<Item = &'d D>,
) -> Result<()> {
    for payload in payloads {
        if payload.weight() < 0.0 {
            return Err(Error::Modification(
                "negative edge weight violates the shortest-path contract".into(),
            ));
        }
    }
    Ok(())
}

impl<V: Vertex, D: EdgeWeight + Clone> Graph<V, D> {
    /// Shortest-path tree from `source` using the default [`Dijkstra`]
    /// strategy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] for an absent source and
    /// [`Error::Modification`] for a negative edge weight.
    pub fn shortest_paths(&self, source: &V) -> Result<Graph<V, D>>
    where
        V: 'static,
        D: 'static,
    {
        Dijkstra.shortest_paths(self, source)
    }

    /// Shortest-path tree computed by a caller-supplied strategy.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's failure.
    pub fn shortest_paths_with<S>(&self, source: &V, strategy: &S) -> Result<Graph<V, D>>
    where
        S: ShortestPathStrategy<V, D>,
    {
        strategy.shortest_paths(self, source)
    }
}
