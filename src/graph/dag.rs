//! Directed acyclic graph.
//!
//! [`Dag`] wraps a [`Digraph`] and guards every edge insertion with a
//! reachability check: an edge from `source` to `sink` is rejected when a
//! directed path already leads from `sink` back to `source`, because the new
//! edge would close that path into a cycle. The check runs strictly before
//! any structural change, so a rejected insertion leaves the graph untouched.

use crate::{
    algorithms,
    graph::{
        factory::EdgeFactory,
        observer::{GraphEvents, GraphObserver, ObserverId},
        traits::{Adjacency, VertexScan},
        Edge, EdgeId, Vertex, VertexId,
    },
    Digraph, Error, Result,
};

/// A directed graph that stays acyclic.
///
/// All query surfaces of [`Digraph`] are available; mutations delegate after
/// the acyclicity guard passes. Since the guarded structure is always a DAG,
/// [`topological_sort`](Self::topological_sort) never fails.
///
/// # Examples
///
/// ```rust
/// use lattix::{Dag, Error};
///
/// let mut dag: Dag<&str> = Dag::new();
/// dag.add_edge("boot", "init").unwrap();
/// dag.add_edge("init", "run").unwrap();
///
/// // Closing the loop is rejected and nothing changes.
/// assert!(matches!(dag.add_edge("run", "boot"), Err(Error::Cycle)));
/// assert_eq!(dag.edge_count(), 2);
///
/// assert_eq!(dag.topological_sort(), vec!["boot", "init", "run"]);
/// ```
#[derive(Debug)]
pub struct Dag<V, D = ()> {
    digraph: Digraph<V, D>,
}

impl<V: Vertex, D> Default for Dag<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, D> Dag<V, D> {
    /// Creates a new empty DAG.
    #[must_use]
    pub fn new() -> Self {
        Dag {
            digraph: Digraph::new(),
        }
    }

    /// Read-only view of the underlying directed graph.
    #[must_use]
    pub fn as_digraph(&self) -> &Digraph<V, D> {
        &self.digraph
    }

    /// Inserts a vertex. Idempotent; a lone vertex can never form a cycle.
    pub fn add(&mut self, vertex: V) -> bool {
        self.digraph.add(vertex)
    }

    /// Returns `true` if the vertex value is present.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.digraph.contains(vertex)
    }

    /// Number of vertices currently in the DAG.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.digraph.vertex_count()
    }

    /// Number of edges currently in the DAG.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Returns `true` if the DAG contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digraph.is_empty()
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.digraph.vertices()
    }

    /// Iterates vertices with no incoming edges, in insertion order.
    ///
    /// In a non-empty DAG every vertex is reachable from some root, so
    /// whole-graph passes start here.
    pub fn roots(&self) -> impl Iterator<Item = &V> + '_ {
        self.digraph.roots()
    }

    /// Iterates vertices with no outgoing edges, in insertion order.
    pub fn sinks(&self) -> impl Iterator<Item = &V> + '_ {
        self.digraph.sinks()
    }

    /// Directed reachability; see [`Digraph::is_path`].
    #[must_use]
    pub fn is_path(&self, from: &V, to: &V) -> bool {
        self.digraph.is_path(from, to)
    }

    /// Out-degree of a vertex.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.digraph.out_degree(vertex)
    }

    /// In-degree of a vertex.
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.digraph.in_degree(vertex)
    }

    /// Iterates the targets of `vertex`'s outgoing edges in insertion order.
    pub fn successors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        self.digraph.successors(vertex)
    }

    /// Iterates the sources of `vertex`'s incoming edges in insertion order.
    pub fn predecessors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        self.digraph.predecessors(vertex)
    }

    /// Registers an observer; see [`Graph::add_observer`](crate::Graph::add_observer).
    pub fn add_observer(
        &mut self,
        events: GraphEvents,
        observer: Box<dyn GraphObserver<V, D>>,
    ) -> ObserverId {
        self.digraph.add_observer(events, observer)
    }

    /// Detaches a previously registered observer.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.digraph.remove_observer(id)
    }

    /// Returns the directed-edge factory for this variant.
    #[must_use]
    pub fn edge_factory(&self) -> &'static dyn EdgeFactory<V, D> {
        self.digraph.edge_factory()
    }
}

impl<V: Vertex, D: Clone> Dag<V, D> {
    /// Adds an edge with a defaulted payload after the acyclicity guard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cycle`] when a directed path already leads from `sink`
    /// back to `source` (self-loops included); the DAG is left unchanged.
    pub fn add_edge(&mut self, source: V, sink: V) -> Result<EdgeId>
    where
        D: Default,
    {
        self.add_edge_with(source, sink, D::default())
    }

    /// Adds an edge carrying `data` after the acyclicity guard.
    ///
    /// The guard asks whether `sink` already reaches `source`; only when it
    /// does not is the insertion delegated to the underlying graph
    /// (auto-adding missing endpoints).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cycle`] when the insertion would create a cycle; the
    /// DAG is left unchanged.
    pub fn add_edge_with(&mut self, source: V, sink: V, data: D) -> Result<EdgeId> {
        if source == sink || self.digraph.is_path(&sink, &source) {
            return Err(Error::Cycle);
        }
        Ok(self.digraph.add_edge_with(source, sink, data))
    }

    /// Adds a pre-constructed directed edge object after the acyclicity guard.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] for an undirected edge object and
    /// [`Error::Cycle`] when the insertion would create a cycle.
    pub fn add_edge_object(&mut self, edge: Edge<V, D>) -> Result<EdgeId> {
        if !edge.is_directed() {
            return Err(Error::Modification(
                "undirected edge object in a directed graph".into(),
            ));
        }
        let (source, sink, data) = edge.into_parts();
        self.add_edge_with(source, sink, data)
    }

    /// Iterates all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.digraph.edges()
    }

    /// Removes a vertex and every incident edge. Removal can never introduce
    /// a cycle, so this delegates directly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] when the value is not present.
    pub fn remove(&mut self, vertex: &V) -> Result<()> {
        self.digraph.remove(vertex)
    }

    /// Removes the first edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no such edge exists.
    pub fn remove_edge_between(&mut self, from: &V, to: &V) -> Result<()> {
        self.digraph.remove_edge_between(from, to)
    }

    /// Vertex ordering consistent with every edge: sources before sinks.
    ///
    /// Computed as the reversed depth-first postorder started from every root,
    /// which covers the whole DAG regardless of connected components.
    #[must_use]
    pub fn topological_sort(&self) -> Vec<V> {
        algorithms::topological::topological_sort(self)
    }

    /// The exact reverse of [`topological_sort`](Self::topological_sort).
    #[must_use]
    pub fn reverse_topological_sort(&self) -> Vec<V> {
        algorithms::topological::reverse_topological_sort(self)
    }
}

impl<V: Vertex, D: Clone + PartialEq> Dag<V, D> {
    /// Removes the first edge structurally equal to `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no structurally equal edge exists.
    pub fn remove_edge(&mut self, edge: &Edge<V, D>) -> Result<()> {
        self.digraph.remove_edge(edge)
    }

    /// Returns `true` when an edge structurally equal to `edge` is present.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge<V, D>) -> bool {
        self.digraph.contains_edge(edge)
    }
}

impl<V: Vertex, D> Dag<V, D> {
    pub(crate) fn slot_count(&self) -> usize {
        self.digraph.slot_count()
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.digraph.vertex_ids()
    }

    pub(crate) fn root_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.digraph.root_ids()
    }

    pub(crate) fn successor_ids(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.digraph.successor_ids(vertex)
    }

    pub(crate) fn vertex_by_id(&self, id: VertexId) -> Option<&V> {
        self.digraph.vertex(id)
    }
}

impl<V: Vertex, D> VertexScan<V> for Dag<V, D> {
    fn vertex_count(&self) -> usize {
        self.digraph.vertex_count()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.digraph.vertices()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.digraph.contains(vertex)
    }
}

impl<V: Vertex, D> Adjacency<V> for Dag<V, D> {
    fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.digraph.successors(vertex)
    }
}
