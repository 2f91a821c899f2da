//! Minimum spanning trees.
//!
//! Spanning-tree computation is exposed through the pluggable
//! [`SpanningTreeStrategy`] contract; [`Kruskal`] is the shipped
//! implementation. On a disconnected graph the result is a minimum spanning
//! forest: one tree per connected component, each with exactly
//! (component size - 1) edges.
//!
//! The result is a new graph whose vertices and edge payloads are shared
//! values with the original; it is an independent structure, never a live
//! view.

use crate::{
    graph::{EdgeId, EdgeWeight, Graph, Vertex},
    Result,
};

/// A swappable minimum-spanning-tree algorithm.
///
/// Input: a weighted undirected graph. Output: a new graph over the same
/// vertex set carrying the chosen edges. Callers may substitute any
/// implementation with the same contract via
/// [`Graph::minimum_spanning_tree_with`].
pub trait SpanningTreeStrategy<V: Vertex, D: EdgeWeight + Clone> {
    /// Computes a minimum spanning tree (forest on disconnected input).
    ///
    /// # Errors
    ///
    /// Implementations may reject inputs they cannot handle; [`Kruskal`]
    /// itself never fails.
    fn spanning_tree(&self, graph: &Graph<V, D>) -> Result<Graph<V, D>>;
}

/// Union-find over vertex slots with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(slots: usize) -> Self {
        UnionFind {
            parent: (0..slots).collect(),
            rank: vec![0; slots],
        }
    }

    fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression.
        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Joins the sets of `a` and `b`; returns `false` when already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else if self.rank[root_a] > self.rank[root_b] {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_b] = root_a;
            self.rank[root_a] += 1;
        }
        true
    }
}

/// Kruskal's algorithm: edges in ascending weight order, each accepted when
/// it joins two so-far-separate vertex sets.
///
/// # Examples
///
/// ```rust
/// use lattix::Graph;
///
/// let mut graph: Graph<&str, f64> = Graph::new();
/// graph.add_edge_with("A", "B", 1.0);
/// graph.add_edge_with("B", "C", 2.0);
/// graph.add_edge_with("A", "C", 10.0);
///
/// let tree = graph.minimum_spanning_tree().unwrap();
/// assert_eq!(tree.edge_count(), 2);
/// let total: f64 = tree.edges().map(|edge| edge.weight()).sum();
/// assert_eq!(total, 3.0);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Kruskal;

impl<V: Vertex + 'static, D: EdgeWeight + Clone + 'static> SpanningTreeStrategy<V, D> for Kruskal {
    fn spanning_tree(&self, graph: &Graph<V, D>) -> Result<Graph<V, D>> {
        let mut edges: Vec<(EdgeId, f64)> = graph
            .live_edge_ids()
            .filter_map(|edge| graph.data_of(edge).map(|data| (edge, data.weight())))
            .collect();
        edges.sort_by(|(_, a), (_, b)| a.total_cmp(b));

        let mut tree: Graph<V, D> = Graph::with_capacity(graph.vertex_count(), graph.vertex_count());
        for vertex in graph.vertices() {
            tree.add(vertex.clone());
        }
        let factory = tree.edge_factory();

        let mut joined = UnionFind::new(graph.slot_count());
        for (edge, _) in edges {
            let Some((a, b)) = graph.endpoints_of(edge) else {
                continue;
            };
            if !joined.union(a.index(), b.index()) {
                continue;
            }
            if let (Some(first), Some(second), Some(data)) =
                (graph.vertex(a), graph.vertex(b), graph.data_of(edge))
            {
                tree.add_edge_object(factory.edge(first.clone(), second.clone(), data.clone()))?;
            }
        }
        Ok(tree)
    }
}

impl<V: Vertex, D: EdgeWeight + Clone> Graph<V, D> {
    /// Minimum spanning tree (forest on disconnected input) using the default
    /// [`Kruskal`] strategy.
    ///
    /// # Errors
    ///
    /// Propagates strategy failures; the default strategy never fails.
    pub fn minimum_spanning_tree(&self) -> Result<Graph<V, D>>
    where
        V: 'static,
        D: 'static,
    {
        Kruskal.spanning_tree(self)
    }

    /// Minimum spanning tree computed by a caller-supplied strategy.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's failure.
    pub fn minimum_spanning_tree_with<S>(&self, strategy: &S) -> Result<Graph<V, D>>
    where
        S: SpanningTreeStrategy<V, D>,
    {
        strategy.spanning_tree(self)
    }
}
