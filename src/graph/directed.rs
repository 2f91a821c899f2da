//! Directed graph variant.
//!
//! [`Digraph`] composes the undirected core with a [`DirectedLinks`]
//! capability: per-vertex outgoing and incoming edge indices aligned with the
//! core's vertex slots. The core keeps incident lists and the connected-set
//! partition ignoring direction (connectivity remains weak connectivity);
//! the capability adds direction-aware adjacency, reachability and lookup.
//!
//! Composition is explicit: every mutation flows through `Digraph` methods,
//! which keep the index aligned with the base. Invariant: every directed edge
//! appears in exactly one outgoing list (at its source) and one incoming list
//! (at its sink).

use crate::{
    algorithms::traversal::{DepthFirst, TraversalStrategy, Visit},
    graph::{
        factory::EdgeFactory,
        observer::{GraphEvents, GraphObserver, ObserverId},
        traits::{Adjacency, VertexScan},
        Edge, EdgeId, Graph, Vertex, VertexId,
    },
    Error, Result,
};

/// Outgoing/incoming edge indices, aligned with the base graph's vertex slots.
#[derive(Debug, Default, Clone)]
pub(crate) struct DirectedLinks {
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
}

impl DirectedLinks {
    fn grow(&mut self, slot_count: usize) {
        while self.outgoing.len() < slot_count {
            self.outgoing.push(Vec::new());
            self.incoming.push(Vec::new());
        }
    }

    fn record(&mut self, edge: EdgeId, source: VertexId, sink: VertexId) {
        self.outgoing[source.index()].push(edge);
        self.incoming[sink.index()].push(edge);
    }

    fn erase(&mut self, edge: EdgeId, source: VertexId, sink: VertexId) {
        if let Some(list) = self.outgoing.get_mut(source.index()) {
            list.retain(|&id| id != edge);
        }
        if let Some(list) = self.incoming.get_mut(sink.index()) {
            list.retain(|&id| id != edge);
        }
    }

    fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        self.outgoing
            .get(vertex.index())
            .map_or(&[][..], Vec::as_slice)
    }

    fn incoming(&self, vertex: VertexId) -> &[EdgeId] {
        self.incoming
            .get(vertex.index())
            .map_or(&[][..], Vec::as_slice)
    }
}

/// A directed graph.
///
/// Composes the undirected [`Graph`] core (vertex set, incident lists,
/// connected sets, observers) with direction-aware edge indices. Edges carry
/// a source/sink distinction; traversal through the [`Adjacency`] seam
/// follows outgoing edges only, while the connected-set partition continues
/// to ignore direction.
///
/// # Examples
///
/// ```rust
/// use lattix::Digraph;
///
/// let mut graph: Digraph<&str> = Digraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// graph.add_edge("C", "A");
///
/// assert!(graph.is_path(&"A", &"C"));
/// assert!(graph.is_cycle(&"A"));
/// assert_eq!(graph.out_degree(&"A"), 1);
/// assert_eq!(graph.in_degree(&"A"), 1);
/// ```
#[derive(Debug)]
pub struct Digraph<V, D = ()> {
    graph: Graph<V, D>,
    links: DirectedLinks,
}

impl<V: Vertex, D> Default for Digraph<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, D> Digraph<V, D> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Digraph {
            graph: Graph::new_directed(),
            links: DirectedLinks::default(),
        }
    }

    /// Creates a new empty directed graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Digraph {
            graph: Graph::with_capacity_directed(vertex_capacity, edge_capacity),
            links: DirectedLinks::default(),
        }
    }

    /// Read-only view of the undirected base structure.
    ///
    /// Useful for query-surface consumers that want the incident lists and
    /// connected sets ignoring direction.
    #[must_use]
    pub fn as_graph(&self) -> &Graph<V, D> {
        &self.graph
    }

    /// Inserts a vertex. Idempotent; see [`Graph::add`].
    pub fn add(&mut self, vertex: V) -> bool {
        let added = self.graph.add(vertex);
        self.links.grow(self.graph.slot_count());
        added
    }

    /// Returns `true` if the vertex value is present.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.graph.contains(vertex)
    }

    /// Number of vertices currently in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of edges currently in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph.vertices()
    }

    /// Returns the vertex stored in the given slot, if live.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.graph.vertex(id)
    }

    /// Out-degree of a vertex (0 for an absent vertex).
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.graph
            .vertex_id(vertex)
            .map_or(0, |id| self.links.outgoing(id).len())
    }

    /// In-degree of a vertex (0 for an absent vertex).
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.graph
            .vertex_id(vertex)
            .map_or(0, |id| self.links.incoming(id).len())
    }

    /// Iterates the targets of `vertex`'s outgoing edges in insertion order.
    pub fn successors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        let ids: &[EdgeId] = self
            .graph
            .vertex_id(vertex)
            .map_or(&[][..], |id| self.links.outgoing(id));
        ids.iter().filter_map(move |&edge_id| {
            let (_, sink) = self.graph.endpoints_of(edge_id)?;
            self.graph.vertex(sink)
        })
    }

    /// Iterates the sources of `vertex`'s incoming edges in insertion order.
    pub fn predecessors<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        let ids: &[EdgeId] = self
            .graph
            .vertex_id(vertex)
            .map_or(&[][..], |id| self.links.incoming(id));
        ids.iter().filter_map(move |&edge_id| {
            let (source, _) = self.graph.endpoints_of(edge_id)?;
            self.graph.vertex(source)
        })
    }

    /// Iterates vertices with no incoming edges, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph
            .vertex_ids()
            .filter(|&id| self.links.incoming(id).is_empty())
            .filter_map(|id| self.graph.vertex(id))
    }

    /// Iterates vertices with no outgoing edges, in insertion order.
    pub fn sinks(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph
            .vertex_ids()
            .filter(|&id| self.links.outgoing(id).is_empty())
            .filter_map(|id| self.graph.vertex(id))
    }

    /// Directed reachability: runs a depth-first traversal from `from` with a
    /// visitor that stops as soon as `to` is visited, and reports whether the
    /// last visited vertex equals `to`.
    ///
    /// The target test compares by vertex equality, never identity. A missing
    /// `from` yields `false`; `is_path(v, v)` is trivially `true` for a
    /// present vertex.
    #[must_use]
    pub fn is_path(&self, from: &V, to: &V) -> bool {
        let mut visited = Vec::new();
        DepthFirst.traverse(self, from, &mut visited, |vertex| {
            if vertex == to {
                Visit::Stop
            } else {
                Visit::Continue
            }
        });
        visited.last().is_some_and(|last| last == to)
    }

    /// Returns `true` when any outgoing edge's opposite vertex has a directed
    /// path back to `vertex`.
    #[must_use]
    pub fn is_cycle(&self, vertex: &V) -> bool {
        self.successors(vertex)
            .any(|next| self.is_path(next, vertex))
    }

    /// Registers an observer; see [`Graph::add_observer`].
    pub fn add_observer(
        &mut self,
        events: GraphEvents,
        observer: Box<dyn GraphObserver<V, D>>,
    ) -> ObserverId {
        self.graph.add_observer(events, observer)
    }

    /// Detaches a previously registered observer.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.graph.remove_observer(id)
    }

    /// Returns the directed-edge factory for this variant.
    #[must_use]
    pub fn edge_factory(&self) -> &'static dyn EdgeFactory<V, D> {
        self.graph.edge_factory()
    }

    // ---- slot-level accessors for the algorithm layer

    pub(crate) fn slot_count(&self) -> usize {
        self.graph.slot_count()
    }

    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph.vertex_ids()
    }

    pub(crate) fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.graph.vertex_id(vertex)
    }

    pub(crate) fn out_edge_ids(&self, vertex: VertexId) -> &[EdgeId] {
        self.links.outgoing(vertex)
    }

    pub(crate) fn root_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.graph
            .vertex_ids()
            .filter(|&id| self.links.incoming(id).is_empty())
    }

    pub(crate) fn successor_ids(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.links
            .outgoing(vertex)
            .iter()
            .filter_map(|&edge_id| self.graph.endpoints_of(edge_id).map(|(_, sink)| sink))
    }

    pub(crate) fn edge_endpoint_ids(&self, edge: EdgeId) -> Option<(VertexId, VertexId)> {
        self.graph.endpoints_of(edge)
    }

    pub(crate) fn edge_data(&self, edge: EdgeId) -> Option<&D> {
        self.graph.data_of(edge)
    }

    pub(crate) fn live_edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.graph.live_edge_ids()
    }
}

impl<V: Vertex, D: Clone> Digraph<V, D> {
    /// Adds a directed edge with a defaulted payload, auto-adding missing
    /// endpoints.
    pub fn add_edge(&mut self, source: V, sink: V) -> EdgeId
    where
        D: Default,
    {
        self.add_edge_with(source, sink, D::default())
    }

    /// Adds a directed edge from `source` to `sink` carrying `data`,
    /// auto-adding missing endpoints and indexing the edge at its source's
    /// outgoing list and its sink's incoming list.
    pub fn add_edge_with(&mut self, source: V, sink: V, data: D) -> EdgeId {
        let id = self.graph.add_edge_with(source, sink, data);
        self.links.grow(self.graph.slot_count());
        if let Some((src, dst)) = self.graph.endpoints_of(id) {
            self.links.record(id, src, dst);
        }
        id
    }

    /// Adds a pre-constructed directed edge object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] for an undirected edge object.
    pub fn add_edge_object(&mut self, edge: Edge<V, D>) -> Result<EdgeId> {
        if !edge.is_directed() {
            return Err(Error::Modification(
                "undirected edge object in a directed graph".into(),
            ));
        }
        let (source, sink, data) = edge.into_parts();
        Ok(self.add_edge_with(source, sink, data))
    }

    /// Returns the structural edge value stored in the given slot, if live.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge<V, D>> {
        self.graph.edge(id)
    }

    /// Iterates all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.graph.edges()
    }

    /// Iterates `vertex`'s outgoing edges in insertion order.
    pub fn outgoing_edges<'g>(&'g self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + 'g {
        let ids: &[EdgeId] = self
            .graph
            .vertex_id(vertex)
            .map_or(&[][..], |id| self.links.outgoing(id));
        ids.iter().filter_map(move |&edge_id| self.graph.edge(edge_id))
    }

    /// Iterates `vertex`'s incoming edges in insertion order.
    pub fn incoming_edges<'g>(&'g self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + 'g {
        let ids: &[EdgeId] = self
            .graph
            .vertex_id(vertex)
            .map_or(&[][..], |id| self.links.incoming(id));
        ids.iter().filter_map(move |&edge_id| self.graph.edge(edge_id))
    }

    /// First outgoing edge of `from` whose sink equals `to`, ties broken by
    /// insertion order.
    #[must_use]
    pub fn edge_between(&self, from: &V, to: &V) -> Option<Edge<V, D>> {
        let source = self.graph.vertex_id(from)?;
        let sink = self.graph.vertex_id(to)?;
        let id = self
            .links
            .outgoing(source)
            .iter()
            .copied()
            .find(|&edge_id| {
                self.graph
                    .endpoints_of(edge_id)
                    .is_some_and(|(_, target)| target == sink)
            })?;
        self.graph.edge(id)
    }

    /// Removes a vertex and every incident edge; see [`Graph::remove`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] when the value is not present.
    pub fn remove(&mut self, vertex: &V) -> Result<()> {
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        let detached: Vec<(EdgeId, VertexId, VertexId)> = self
            .graph
            .incident_ids(id)
            .iter()
            .copied()
            .filter_map(|edge_id| {
                self.graph
                    .endpoints_of(edge_id)
                    .map(|(src, dst)| (edge_id, src, dst))
            })
            .collect();

        self.graph.remove(vertex)?;
        for (edge_id, src, dst) in detached {
            self.links.erase(edge_id, src, dst);
        }
        Ok(())
    }

    /// Removes the first edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no such edge exists.
    pub fn remove_edge_between(&mut self, from: &V, to: &V) -> Result<()> {
        let id = self
            .graph
            .find_edge_between(from, to)
            .ok_or_else(|| Error::Modification("edge is not present in the graph".into()))?;
        self.detach(id)
    }

    fn detach(&mut self, id: EdgeId) -> Result<()> {
        let (src, dst) = self
            .graph
            .endpoints_of(id)
            .ok_or_else(|| Error::Modification("edge is not present in the graph".into()))?;
        self.graph.remove_edge_by_id(id)?;
        self.links.erase(id, src, dst);
        Ok(())
    }

    /// Connected sets of the underlying structure, ignoring direction.
    #[must_use]
    pub fn connected_sets(&self) -> Vec<Vec<&V>> {
        self.graph.connected_sets()
    }

    /// Returns `true` when an undirected path connects the vertices.
    #[must_use]
    pub fn same_connected_set(&self, a: &V, b: &V) -> bool {
        self.graph.same_connected_set(a, b)
    }
}

impl<V: Vertex, D: Clone + PartialEq> Digraph<V, D> {
    /// Returns `true` when an edge structurally equal to `edge` is present.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge<V, D>) -> bool {
        self.graph.contains_edge(edge)
    }

    /// Removes the first edge structurally equal to `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no structurally equal edge exists.
    pub fn remove_edge(&mut self, edge: &Edge<V, D>) -> Result<()> {
        let id = self
            .graph
            .find_edge(edge)
            .ok_or_else(|| Error::Modification("edge is not present in the graph".into()))?;
        self.detach(id)
    }

    /// Returns a new directed graph keeping only the edges `keep` accepts;
    /// see [`Graph::filter_edges`].
    ///
    /// # Errors
    ///
    /// Propagates edge-construction failures from the factory surface.
    pub fn filter_edges<F>(&self, keep: F) -> Result<Digraph<V, D>>
    where
        F: FnMut(&Edge<V, D>) -> bool,
        V: 'static,
        D: 'static,
    {
        Ok(Self::from_base(self.graph.filter_edges(keep)?))
    }

    /// Returns a new directed graph with every vertex mapped through `map`;
    /// see [`Graph::map_vertices`].
    ///
    /// # Errors
    ///
    /// Propagates edge-construction failures from the factory surface.
    pub fn map_vertices<U, F>(&self, map: F) -> Result<Digraph<U, D>>
    where
        U: Vertex + 'static,
        F: FnMut(&V) -> U,
        D: 'static,
    {
        Ok(Digraph::from_base(self.graph.map_vertices(map)?))
    }

    /// Rebuilds the outgoing/incoming indices over a directed base graph.
    pub(crate) fn from_base(graph: Graph<V, D>) -> Digraph<V, D> {
        let mut links = DirectedLinks::default();
        links.grow(graph.slot_count());
        for edge_id in graph.live_edge_ids() {
            if let Some((src, dst)) = graph.endpoints_of(edge_id) {
                links.record(edge_id, src, dst);
            }
        }
        Digraph { graph, links }
    }
}

impl<V: Vertex, D> VertexScan<V> for Digraph<V, D> {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.graph.vertices()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.graph.contains(vertex)
    }
}

impl<V: Vertex, D> Adjacency<V> for Digraph<V, D> {
    fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.successors(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Digraph<&'static str> {
        // A -> B -> C -> A
        let mut graph = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        graph
    }

    #[test]
    fn test_degrees() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");

        assert_eq!(graph.out_degree(&"A"), 2);
        assert_eq!(graph.in_degree(&"A"), 0);
        assert_eq!(graph.in_degree(&"B"), 1);
        assert_eq!(graph.out_degree(&"B"), 0);
    }

    #[test]
    fn test_successors_and_predecessors() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("C", "B");

        let succ: Vec<&&str> = graph.successors(&"A").collect();
        assert_eq!(succ, vec![&"B", &"C"]);

        let pred: Vec<&&str> = graph.predecessors(&"B").collect();
        assert_eq!(pred, vec![&"A", &"C"]);
    }

    #[test]
    fn test_reachability_and_cycles() {
        let graph = triangle();
        assert!(graph.is_cycle(&"A"));
        assert!(graph.is_path(&"A", &"C"));
        // C reaches B, but only routed through A.
        assert!(graph.is_path(&"C", &"B"));
    }

    #[test]
    fn test_no_backward_reachability_without_cycle() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");

        assert!(graph.is_path(&"A", &"C"));
        assert!(!graph.is_path(&"C", &"B"));
        assert!(!graph.is_cycle(&"A"));
    }

    #[test]
    fn test_is_path_missing_vertices() {
        let graph = triangle();
        assert!(!graph.is_path(&"Z", &"A"));
        assert!(!graph.is_path(&"A", &"Z"));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "A");
        assert!(graph.is_cycle(&"A"));
    }

    #[test]
    fn test_edge_between_first_inserted_wins() {
        let mut graph: Digraph<&str, i32> = Digraph::new();
        graph.add_edge_with("A", "B", 1);
        graph.add_edge_with("A", "C", 2);
        graph.add_edge_with("A", "B", 3);

        let edge = graph.edge_between(&"A", &"B").unwrap();
        assert_eq!(edge.data(), &1);
        assert!(graph.edge_between(&"B", &"A").is_none());
    }

    #[test]
    fn test_roots_and_sinks() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("C", "D");

        let roots: Vec<&&str> = graph.roots().collect();
        let sinks: Vec<&&str> = graph.sinks().collect();
        assert_eq!(roots, vec![&"A"]);
        assert_eq!(sinks, vec![&"B", &"D"]);
    }

    #[test]
    fn test_remove_vertex_patches_indices() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");

        graph.remove(&"B").unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.out_degree(&"A"), 0);
        assert_eq!(graph.in_degree(&"A"), 1);
        assert_eq!(graph.out_degree(&"C"), 1);
        assert!(!graph.is_path(&"A", &"C"));
        assert!(graph.is_path(&"C", &"A"));
    }

    #[test]
    fn test_remove_edge_between_respects_direction() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");

        assert!(graph.remove_edge_between(&"B", &"A").is_err());
        graph.remove_edge_between(&"A", &"B").unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.out_degree(&"A"), 0);
        assert_eq!(graph.in_degree(&"B"), 0);
    }

    #[test]
    fn test_directed_edge_equality_lookup() {
        let mut graph: Digraph<&str, i32> = Digraph::new();
        graph.add_edge_with("A", "B", 7);

        assert!(graph.contains_edge(&Edge::directed("A", "B", 7)));
        assert!(!graph.contains_edge(&Edge::directed("B", "A", 7)));
        assert!(!graph.contains_edge(&Edge::undirected("A", "B", 7)));
    }

    #[test]
    fn test_add_edge_object_rejects_undirected() {
        let mut graph: Digraph<&str> = Digraph::new();
        let result = graph.add_edge_object(Edge::undirected("A", "B", ()));
        assert!(matches!(result, Err(Error::Modification(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_connectivity_ignores_direction() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("C", "B");

        assert!(graph.same_connected_set(&"A", &"C"));
        assert!(!graph.is_path(&"A", &"C"));
    }

    #[test]
    fn test_filter_edges_preserves_direction() {
        let mut graph: Digraph<&str, i32> = Digraph::new();
        graph.add_edge_with("A", "B", 1);
        graph.add_edge_with("B", "C", 9);

        let filtered = graph.filter_edges(|edge| *edge.data() < 5).unwrap();
        assert_eq!(filtered.edge_count(), 1);
        assert_eq!(filtered.out_degree(&"A"), 1);
        assert_eq!(filtered.in_degree(&"B"), 1);
        assert_eq!(filtered.out_degree(&"B"), 0);
    }

    #[test]
    fn test_map_vertices_rebuilds_indices() {
        let mut graph: Digraph<&str> = Digraph::new();
        graph.add_edge("alpha", "beta");

        let mapped = graph.map_vertices(|v| v.to_uppercase()).unwrap();
        assert!(mapped.is_path(&"ALPHA".to_string(), &"BETA".to_string()));
        assert_eq!(mapped.out_degree(&"ALPHA".to_string()), 1);
    }

    #[test]
    fn test_factory_produces_directed_edges() {
        let graph: Digraph<&str> = Digraph::new();
        assert!(graph.edge_factory().edge("A", "B", ()).is_directed());
    }
}
