//! Core mutable graph implementation.
//!
//! This module provides [`Graph`], the undirected base structure that every
//! other variant composes. The graph owns its vertex set, per-vertex
//! incident-edge lists, the global edge table, and a partition of vertices
//! into connected sets that is kept consistent across every mutation.
//!
//! # Memory Layout
//!
//! Vertices and edges live in slot tables indexed by [`VertexId`] and
//! [`EdgeId`]. Slots are assigned in insertion order and tombstoned on
//! removal, so ids stay stable and enumeration order is insertion order.
//! A value index maps each vertex value back to its slot.
//!
//! # Connectivity
//!
//! Adding an edge merges the endpoints' connected sets, folding the smaller
//! set into the larger. Removing an edge re-traverses from one endpoint and
//! carves the reached vertices into a new set when the opposite endpoint is no
//! longer reachable. The split costs O(group size) per removal; that is the
//! intended trade-off for keeping merges cheap.
//!
//! # Thread Safety
//!
//! `Graph` is a single-threaded structure driven by one logical owner at a
//! time. Callers needing concurrent access must serialize externally.

use std::collections::HashMap;
use std::fmt;

use crate::{
    graph::{
        factory::{DirectedEdgeFactory, EdgeFactory, UndirectedEdgeFactory},
        observer::{GraphEvents, GraphObserver, ObserverId, ObserverRegistry},
        partition::Partition,
        Edge, EdgeId, EdgeWeight, Vertex, VertexId,
    },
    Error, Result,
};

/// Internal storage for one edge: endpoint slots plus payload.
#[derive(Debug, Clone)]
pub(crate) struct EdgeRecord<D> {
    pub(crate) a: VertexId,
    pub(crate) b: VertexId,
    pub(crate) data: D,
}

/// A mutable graph over caller-supplied vertex values.
///
/// `Graph<V, D>` stores vertices of type `V` (any `Eq + Hash + Clone` value)
/// and edges carrying payloads of type `D` (defaulting to `()`). The graph
/// maintains, at all times:
///
/// - the vertex set, iterable in insertion order;
/// - per-vertex incident-edge lists, in insertion order;
/// - the global edge table;
/// - the connected-set partition: two vertices share a set exactly when an
///   undirected path connects them;
/// - the observer registry for structural-change notifications.
///
/// Vertex insertion is idempotent: re-adding a present value is a no-op that
/// fires no notification. Edge insertion auto-adds missing endpoints.
///
/// The directed variants ([`Digraph`](crate::Digraph), [`Dag`](crate::Dag))
/// compose this structure rather than inherit from it; the undirected base
/// keeps incident lists and connectivity ignoring direction even when its
/// edges are directed.
///
/// # Examples
///
/// ```rust
/// use lattix::Graph;
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.same_connected_set(&"A", &"C"));
///
/// graph.remove_edge_between(&"B", &"C").unwrap();
/// assert!(!graph.same_connected_set(&"A", &"C"));
/// assert_eq!(graph.connected_set_count(), 2);
/// ```
pub struct Graph<V, D = ()> {
    /// Vertex slots, tombstoned on removal. Slot index == `VertexId`.
    vertices: Vec<Option<V>>,
    /// Value index back into the slot table.
    index: HashMap<V, VertexId>,
    /// Edge slots, tombstoned on removal. Slot index == `EdgeId`.
    edges: Vec<Option<EdgeRecord<D>>>,
    /// Incident edge ids per vertex slot, insertion order. A self-loop
    /// appears twice in its vertex's list.
    incident: Vec<Vec<EdgeId>>,
    /// Connected-set partition over vertex slots.
    partition: Partition,
    /// Structural-change observers.
    observers: ObserverRegistry<V, D>,
    live_vertices: usize,
    live_edges: usize,
    /// Whether edges of this graph carry a source/sink distinction.
    directed: bool,
}

impl<V: Vertex, D> Default for Graph<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D> fmt::Debug for Graph<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.live_vertices)
            .field("edges", &self.live_edges)
            .field("connected_sets", &self.partition.set_count())
            .field("directed", &self.directed)
            .finish_non_exhaustive()
    }
}

impl<V: Vertex, D> Graph<V, D> {
    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_direction(false)
    }

    /// Creates a new empty graph whose edges carry a source/sink distinction.
    ///
    /// Used by the directed variants, which compose this base and augment it
    /// with outgoing/incoming indices.
    pub(crate) fn new_directed() -> Self {
        Self::with_direction(true)
    }

    fn with_direction(directed: bool) -> Self {
        Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            incident: Vec::new(),
            partition: Partition::new(),
            observers: ObserverRegistry::default(),
            live_vertices: 0,
            live_edges: 0,
            directed,
        }
    }

    /// Creates a new empty undirected graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        let mut graph = Self::new();
        graph.reserve(vertex_capacity, edge_capacity);
        graph
    }

    /// Directed-base counterpart of [`with_capacity`](Self::with_capacity),
    /// used by the composed directed variants.
    pub(crate) fn with_capacity_directed(vertex_capacity: usize, edge_capacity: usize) -> Self {
        let mut graph = Self::new_directed();
        graph.reserve(vertex_capacity, edge_capacity);
        graph
    }

    fn reserve(&mut self, vertex_capacity: usize, edge_capacity: usize) {
        self.vertices.reserve(vertex_capacity);
        self.index.reserve(vertex_capacity);
        self.incident.reserve(vertex_capacity);
        self.edges.reserve(edge_capacity);
    }

    /// Returns `true` if edges of this graph carry a source/sink distinction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts a vertex. Idempotent: returns `false` without touching the
    /// graph (and without notifying observers) when the value is present.
    ///
    /// A genuinely new vertex starts out in a singleton connected set.
    pub fn add(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.ensure_vertex(vertex);
        true
    }

    /// Inserts `vertex` if absent and returns its slot id either way.
    pub(crate) fn ensure_vertex(&mut self, vertex: V) -> VertexId {
        if let Some(&id) = self.index.get(&vertex) {
            return id;
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(vertex.clone(), id);
        self.vertices.push(Some(vertex));
        self.incident.push(Vec::new());
        self.partition.add_singleton(id);
        self.live_vertices += 1;

        if let Some(stored) = self.vertices[id.index()].as_ref() {
            self.observers.vertex_added(stored);
        }
        id
    }

    /// Returns `true` if the vertex value is present.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Number of vertices currently in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of edges currently in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_vertices == 0
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter().filter_map(Option::as_ref)
    }

    /// Returns the vertex stored in the given slot, if live.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id.index()).and_then(Option::as_ref)
    }

    /// Degree of a vertex: the length of its incident-edge list. A self-loop
    /// contributes two. Returns 0 for an absent vertex.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.vertex_id(vertex)
            .map_or(0, |id| self.incident[id.index()].len())
    }

    /// Iterates the vertices adjacent to `vertex`, one entry per incident
    /// edge (parallel edges repeat their neighbor).
    pub fn adjacent_vertices<'g>(&'g self, vertex: &V) -> impl Iterator<Item = &'g V> + 'g {
        let id = self.vertex_id(vertex);
        let ids: &[EdgeId] = id.map_or(&[][..], |i| self.incident[i.index()].as_slice());
        ids.iter().filter_map(move |&edge_id| {
            let record = self.edges.get(edge_id.index())?.as_ref()?;
            let other = if Some(record.a) == id {
                record.b
            } else {
                record.a
            };
            self.vertices.get(other.index())?.as_ref()
        })
    }

    /// Returns the connected set containing `vertex`, in joining order, or
    /// `None` for an absent vertex.
    #[must_use]
    pub fn connected_set(&self, vertex: &V) -> Option<Vec<&V>> {
        let id = self.vertex_id(vertex)?;
        let set = self.partition.set_id(id)?;
        Some(
            self.partition
                .members(set)
                .iter()
                .filter_map(|&member| self.vertex(member))
                .collect(),
        )
    }

    /// Returns every connected set of the graph. Set enumeration order is
    /// unspecified; members within a set are in joining order.
    #[must_use]
    pub fn connected_sets(&self) -> Vec<Vec<&V>> {
        self.partition
            .iter_sets()
            .map(|members| {
                members
                    .iter()
                    .filter_map(|&member| self.vertex(member))
                    .collect()
            })
            .collect()
    }

    /// Number of connected sets.
    #[must_use]
    pub fn connected_set_count(&self) -> usize {
        self.partition.set_count()
    }

    /// Returns `true` when both vertices are present and an undirected path
    /// connects them.
    #[must_use]
    pub fn same_connected_set(&self, a: &V, b: &V) -> bool {
        match (self.vertex_id(a), self.vertex_id(b)) {
            (Some(ia), Some(ib)) => self.partition.same_set(ia, ib),
            _ => false,
        }
    }

    /// Returns the edge factory matching this graph's variant.
    ///
    /// Transformations that construct edges for this graph must go through
    /// this factory so the result stays consistent with the variant.
    #[must_use]
    pub fn edge_factory(&self) -> &'static dyn EdgeFactory<V, D> {
        if self.directed {
            &DirectedEdgeFactory
        } else {
            &UndirectedEdgeFactory
        }
    }

    /// Registers an observer for the events selected by `events`.
    ///
    /// Observers fire synchronously on the mutating call, in registration
    /// order, strictly after the structural change commits.
    pub fn add_observer(
        &mut self,
        events: GraphEvents,
        observer: Box<dyn GraphObserver<V, D>>,
    ) -> ObserverId {
        self.observers.attach(events, observer)
    }

    /// Detaches a previously registered observer. Returns `false` when the id
    /// is unknown.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.detach(id)
    }

    // ---- slot-level accessors shared with the directed index and the
    // ---- algorithm layer

    pub(crate) fn vertex_id(&self, vertex: &V) -> Option<VertexId> {
        self.index.get(vertex).copied()
    }

    /// Total slot count including tombstones; per-slot scratch tables in the
    /// algorithm layer are sized by this.
    pub(crate) fn slot_count(&self) -> usize {
        self.vertices.len()
    }

    /// Live vertex slots in insertion order.
    pub(crate) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId::new(i)))
    }

    pub(crate) fn incident_ids(&self, id: VertexId) -> &[EdgeId] {
        self.incident
            .get(id.index())
            .map_or(&[][..], Vec::as_slice)
    }

    pub(crate) fn endpoints_of(&self, id: EdgeId) -> Option<(VertexId, VertexId)> {
        self.edges
            .get(id.index())
            .and_then(Option::as_ref)
            .map(|record| (record.a, record.b))
    }

    pub(crate) fn data_of(&self, id: EdgeId) -> Option<&D> {
        self.edges
            .get(id.index())
            .and_then(Option::as_ref)
            .map(|record| &record.data)
    }

    /// Live edge slots in insertion order.
    pub(crate) fn live_edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| EdgeId::new(i)))
    }

    /// First edge connecting `a` and `b` in insertion order of `a`'s incident
    /// list. Respects edge direction for directed graphs.
    pub(crate) fn find_edge_between(&self, a: &V, b: &V) -> Option<EdgeId> {
        let ia = self.vertex_id(a)?;
        let ib = self.vertex_id(b)?;
        self.incident[ia.index()].iter().copied().find(|&edge_id| {
            self.edges
                .get(edge_id.index())
                .and_then(Option::as_ref)
                .is_some_and(|record| {
                    (record.a == ia && record.b == ib)
                        || (!self.directed && record.a == ib && record.b == ia)
                })
        })
    }

    /// Vertices reachable from `from` ignoring edge direction, including
    /// `from` itself, discovered breadth-first.
    fn reachable_undirected(&self, from: VertexId) -> Vec<VertexId> {
        let mut seen = vec![false; self.vertices.len()];
        let mut reached = Vec::new();
        let mut queue = std::collections::VecDeque::new();

        seen[from.index()] = true;
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            reached.push(current);
            for &edge_id in &self.incident[current.index()] {
                let Some(record) = self.edges.get(edge_id.index()).and_then(Option::as_ref)
                else {
                    continue;
                };
                let other = if record.a == current {
                    record.b
                } else {
                    record.a
                };
                if !seen[other.index()] {
                    seen[other.index()] = true;
                    queue.push_back(other);
                }
            }
        }
        reached
    }
}

impl<V: Vertex, D: Clone> Graph<V, D> {
    /// Adds an edge between `first` and `second` with a defaulted payload,
    /// auto-adding missing endpoints.
    pub fn add_edge(&mut self, first: V, second: V) -> EdgeId
    where
        D: Default,
    {
        self.add_edge_with(first, second, D::default())
    }

    /// Adds an edge between `first` and `second` carrying `data`, auto-adding
    /// missing endpoints.
    ///
    /// The edge is appended to both endpoints' incident lists and the global
    /// edge table, and the endpoints' connected sets are merged. Observers are
    /// notified after the change commits.
    pub fn add_edge_with(&mut self, first: V, second: V, data: D) -> EdgeId {
        let ia = self.ensure_vertex(first);
        let ib = self.ensure_vertex(second);

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeRecord { a: ia, b: ib, data }));
        self.incident[ia.index()].push(id);
        self.incident[ib.index()].push(id);
        self.live_edges += 1;
        self.partition.merge(ia, ib);

        if !self.observers.is_empty() {
            if let Some(edge) = self.edge(id) {
                self.observers.edge_added(&edge);
            }
        }
        id
    }

    /// Adds a pre-constructed edge object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when the edge's direction marker does
    /// not match this graph's variant; the graph is left unchanged. Edge
    /// objects should come from this graph's [`edge_factory`](Self::edge_factory).
    pub fn add_edge_object(&mut self, edge: Edge<V, D>) -> Result<EdgeId> {
        if edge.is_directed() != self.directed {
            return Err(Error::Modification(format!(
                "edge direction does not match the graph variant (edge directed: {}, graph directed: {})",
                edge.is_directed(),
                self.directed
            )));
        }
        let (first, second, data) = edge.into_parts();
        Ok(self.add_edge_with(first, second, data))
    }

    /// Returns the structural edge value stored in the given slot, if live.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<Edge<V, D>> {
        let record = self.edges.get(id.index())?.as_ref()?;
        self.materialize(record)
    }

    fn materialize(&self, record: &EdgeRecord<D>) -> Option<Edge<V, D>> {
        let first = self.vertices.get(record.a.index())?.clone()?;
        let second = self.vertices.get(record.b.index())?.clone()?;
        let data = record.data.clone();
        Some(if self.directed {
            Edge::directed(first, second, data)
        } else {
            Edge::undirected(first, second, data)
        })
    }

    /// Iterates all edges in insertion order as structural edge values.
    pub fn edges(&self) -> impl Iterator<Item = Edge<V, D>> + '_ {
        self.edges
            .iter()
            .flatten()
            .filter_map(|record| self.materialize(record))
    }

    /// Iterates the edges incident to `vertex` in insertion order. A
    /// self-loop appears twice.
    pub fn incident_edges<'g>(&'g self, vertex: &V) -> impl Iterator<Item = Edge<V, D>> + 'g {
        let ids: &[EdgeId] = self
            .vertex_id(vertex)
            .map_or(&[][..], |id| self.incident[id.index()].as_slice());
        ids.iter().filter_map(move |&edge_id| self.edge(edge_id))
    }

    /// Removes a vertex, detaching every incident edge first (each detachment
    /// notifies edge observers and updates connectivity), then destroying the
    /// vertex's by-then-singleton connected set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] when the value is not present.
    pub fn remove(&mut self, vertex: &V) -> Result<()> {
        let id = self.vertex_id(vertex).ok_or(Error::MissingVertex)?;

        let incident: Vec<EdgeId> = self.incident[id.index()].clone();
        for edge_id in incident {
            // A self-loop lists its id twice; the second pass sees a tombstone.
            if self
                .edges
                .get(edge_id.index())
                .is_some_and(Option::is_some)
            {
                self.remove_edge_by_id(edge_id)?;
            }
        }

        self.partition.remove_vertex(id);
        let Some(owned) = self.vertices[id.index()].take() else {
            return Err(Error::MissingVertex);
        };
        self.index.remove(&owned);
        self.incident[id.index()].clear();
        self.live_vertices -= 1;
        self.observers.vertex_removed(&owned);
        Ok(())
    }

    /// Removes the first edge connecting `a` and `b` (respecting direction on
    /// directed graphs).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no such edge exists.
    pub fn remove_edge_between(&mut self, a: &V, b: &V) -> Result<()> {
        let id = self
            .find_edge_between(a, b)
            .ok_or_else(|| Error::Modification("edge is not present in the graph".into()))?;
        self.remove_edge_by_id(id)
    }

    /// Detaches an edge by slot id, recomputing connectivity.
    ///
    /// After the detachment the graph re-traverses from one endpoint; when the
    /// opposite endpoint is no longer reached, the reached vertices are carved
    /// into a new connected set. Observers are notified after the change
    /// commits.
    pub(crate) fn remove_edge_by_id(&mut self, id: EdgeId) -> Result<()> {
        let Some(edge_value) = self.edge(id) else {
            return Err(Error::Modification(
                "edge is not present in the graph".into(),
            ));
        };
        let Some((ia, ib)) = self.endpoints_of(id) else {
            return Err(Error::Modification(
                "edge is not present in the graph".into(),
            ));
        };

        self.edges[id.index()] = None;
        self.incident[ia.index()].retain(|&edge_id| edge_id != id);
        if ib != ia {
            self.incident[ib.index()].retain(|&edge_id| edge_id != id);
        }
        self.live_edges -= 1;

        // A self-loop removal cannot disconnect anything.
        if ia != ib {
            let reached = self.reachable_undirected(ia);
            if !reached.contains(&ib) {
                self.partition.split(&reached);
            }
        }

        self.observers.edge_removed(&edge_value);
        Ok(())
    }
}

impl<V: Vertex, D: Clone + PartialEq> Graph<V, D> {
    /// First edge structurally equal to `edge` (endpoints plus payload), in
    /// insertion order of the first endpoint's incident list.
    pub(crate) fn find_edge(&self, edge: &Edge<V, D>) -> Option<EdgeId> {
        if edge.is_directed() != self.directed {
            return None;
        }
        let ia = self.vertex_id(edge.first())?;
        let ib = self.vertex_id(edge.second())?;
        self.incident[ia.index()].iter().copied().find(|&edge_id| {
            self.edges
                .get(edge_id.index())
                .and_then(Option::as_ref)
                .is_some_and(|record| {
                    let endpoints = (record.a == ia && record.b == ib)
                        || (!self.directed && record.a == ib && record.b == ia);
                    endpoints && record.data == *edge.data()
                })
        })
    }

    /// Returns `true` when an edge structurally equal to `edge` is present.
    /// Identity is endpoint pair plus payload, never allocation.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge<V, D>) -> bool {
        self.find_edge(edge).is_some()
    }

    /// Removes the first edge structurally equal to `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Modification`] when no structurally equal edge exists.
    pub fn remove_edge(&mut self, edge: &Edge<V, D>) -> Result<()> {
        let id = self
            .find_edge(edge)
            .ok_or_else(|| Error::Modification("edge is not present in the graph".into()))?;
        self.remove_edge_by_id(id)
    }

    /// Returns a new graph keeping only the edges `keep` accepts.
    ///
    /// All vertices carry over; surviving edges are rebuilt through this
    /// graph's [`edge_factory`](Self::edge_factory), so the result stays
    /// consistent with the variant. Observers are not carried over.
    ///
    /// # Errors
    ///
    /// Propagates edge-construction failures from the factory surface.
    pub fn filter_edges<F>(&self, mut keep: F) -> Result<Graph<V, D>>
    where
        F: FnMut(&Edge<V, D>) -> bool,
        V: 'static,
        D: 'static,
    {
        let mut out = Self::with_direction(self.directed);
        for vertex in self.vertices() {
            out.add(vertex.clone());
        }
        let factory = self.edge_factory();
        for edge in self.edges() {
            if keep(&edge) {
                let (first, second, data) = edge.into_parts();
                out.add_edge_object(factory.edge(first, second, data))?;
            }
        }
        Ok(out)
    }

    /// Returns a new graph with every vertex mapped through `map`.
    ///
    /// A non-injective mapping folds vertices together (the mapping is
    /// homomorphic: every source edge is re-created between the images of its
    /// endpoints, through the target's factory). Observers are not carried
    /// over.
    ///
    /// # Errors
    ///
    /// Propagates edge-construction failures from the factory surface.
    pub fn map_vertices<U, F>(&self, mut map: F) -> Result<Graph<U, D>>
    where
        U: Vertex + 'static,
        F: FnMut(&V) -> U,
        D: 'static,
    {
        let mut out = Graph::<U, D>::with_direction(self.directed);
        for vertex in self.vertices() {
            out.add(map(vertex));
        }
        let factory = out.edge_factory();
        for edge in self.edges() {
            let (first, second, data) = edge.into_parts();
            out.add_edge_object(factory.edge(map(&first), map(&second), data))?;
        }
        Ok(out)
    }
}

impl<V: Vertex, D: EdgeWeight + Clone> Graph<V, D> {
    /// Among `vertex`'s incident edges, the one with minimum weight. Ties are
    /// broken arbitrarily; returns `None` for an absent or isolated vertex.
    #[must_use]
    pub fn closest_edge(&self, vertex: &V) -> Option<Edge<V, D>> {
        let id = self.vertex_id(vertex)?;
        let (best, _) = self.incident[id.index()]
            .iter()
            .copied()
            .filter_map(|edge_id| {
                self.data_of(edge_id)
                    .map(|data| (edge_id, data.weight()))
            })
            .min_by(|(_, x), (_, y)| x.total_cmp(y))?;
        self.edge(best)
    }
}

impl<V: Vertex, D> crate::graph::traits::VertexScan<V> for Graph<V, D> {
    fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.vertices.iter().filter_map(Option::as_ref)
    }

    fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }
}

impl<V: Vertex, D> crate::graph::traits::Adjacency<V> for Graph<V, D> {
    fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacent_vertices(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphEvents;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn abc_chain() -> Graph<&'static str> {
        // A -- B -- C
        let mut graph = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph<&str> = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.connected_set_count(), 0);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut graph: Graph<&str> = Graph::new();
        assert!(graph.add("A"));
        assert!(!graph.add("A"));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.connected_set_count(), 1);
    }

    #[test]
    fn test_vertices_iterate_in_insertion_order() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add("C");
        graph.add("A");
        graph.add("B");

        let order: Vec<&&str> = graph.vertices().collect();
        assert_eq!(order, vec![&"C", &"A", &"B"]);
    }

    #[test]
    fn test_add_edge_auto_adds_endpoints() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "B");

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains(&"A"));
        assert!(graph.contains(&"B"));
    }

    #[test]
    fn test_add_edge_merges_connected_sets() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add("A");
        graph.add("B");
        assert_eq!(graph.connected_set_count(), 2);

        graph.add_edge("A", "B");
        assert_eq!(graph.connected_set_count(), 1);
        assert!(graph.same_connected_set(&"A", &"B"));
    }

    #[test]
    fn test_chain_connected_set() {
        let graph = abc_chain();
        let set = graph.connected_set(&"A").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&&"C"));
    }

    #[test]
    fn test_remove_edge_splits_connected_set() {
        // Removing B--C splits {A,B,C} into {A,B} and {C}.
        let mut graph = abc_chain();
        graph.remove_edge_between(&"B", &"C").unwrap();

        assert_eq!(graph.connected_set_count(), 2);
        assert!(graph.same_connected_set(&"A", &"B"));
        assert!(!graph.same_connected_set(&"B", &"C"));
        assert_eq!(graph.connected_set(&"C").unwrap(), vec![&"C"]);
    }

    #[test]
    fn test_remove_edge_keeps_set_when_alternate_path_exists() {
        // Triangle: removing one side keeps everything connected.
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");

        graph.remove_edge_between(&"A", &"B").unwrap();
        assert_eq!(graph.connected_set_count(), 1);
        assert!(graph.same_connected_set(&"A", &"B"));
    }

    #[test]
    fn test_remove_missing_edge_is_error() {
        let mut graph = abc_chain();
        let result = graph.remove_edge_between(&"A", &"C");
        assert!(matches!(result, Err(Error::Modification(_))));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_remove_vertex_detaches_incident_edges() {
        let mut graph = abc_chain();
        graph.remove(&"B").unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.connected_set_count(), 2);
        assert_eq!(graph.degree(&"A"), 0);
    }

    #[test]
    fn test_remove_missing_vertex_is_error() {
        let mut graph: Graph<&str> = Graph::new();
        assert!(matches!(graph.remove(&"A"), Err(Error::MissingVertex)));
    }

    #[test]
    fn test_degree_and_adjacency() {
        let graph = abc_chain();
        assert_eq!(graph.degree(&"B"), 2);
        assert_eq!(graph.degree(&"A"), 1);

        let neighbors: Vec<&&str> = graph.adjacent_vertices(&"B").collect();
        assert_eq!(neighbors, vec![&"A", &"C"]);
    }

    #[test]
    fn test_self_loop_degree() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "A");
        assert_eq!(graph.degree(&"A"), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.connected_set_count(), 1);
    }

    #[test]
    fn test_self_loop_removal_does_not_split() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("A", "A");
        graph.add_edge("A", "B");
        graph.remove_edge_between(&"A", &"A").unwrap();
        assert_eq!(graph.connected_set_count(), 1);
        assert_eq!(graph.degree(&"A"), 1);
    }

    #[test]
    fn test_edge_object_roundtrip() {
        let mut graph: Graph<&str, i32> = Graph::new();
        let edge = Edge::undirected("A", "B", 7);
        graph.add_edge_object(edge.clone()).unwrap();

        assert!(graph.contains_edge(&edge));
        // Symmetric form matches too.
        assert!(graph.contains_edge(&Edge::undirected("B", "A", 7)));
        // Different payload does not.
        assert!(!graph.contains_edge(&Edge::undirected("A", "B", 8)));
    }

    #[test]
    fn test_add_edge_object_rejects_direction_mismatch() {
        let mut graph: Graph<&str> = Graph::new();
        let result = graph.add_edge_object(Edge::directed("A", "B", ()));
        assert!(matches!(result, Err(Error::Modification(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_remove_edge_by_structural_equality() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_edge_with("A", "B", 1);
        graph.add_edge_with("A", "B", 2);

        graph.remove_edge(&Edge::undirected("B", "A", 2)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&Edge::undirected("A", "B", 1)));
    }

    #[test]
    fn test_parallel_edge_removal_keeps_connectivity() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_edge_with("A", "B", 1);
        graph.add_edge_with("A", "B", 2);

        graph.remove_edge(&Edge::undirected("A", "B", 1)).unwrap();
        assert!(graph.same_connected_set(&"A", &"B"));
    }

    #[test]
    fn test_incident_edges_in_insertion_order() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_edge_with("B", "A", 1);
        graph.add_edge_with("B", "C", 2);

        let payloads: Vec<i32> = graph.incident_edges(&"B").map(|e| *e.data()).collect();
        assert_eq!(payloads, vec![1, 2]);
    }

    #[test]
    fn test_filter_edges_keeps_all_vertices() {
        let mut graph: Graph<&str, i32> = Graph::new();
        graph.add_edge_with("A", "B", 1);
        graph.add_edge_with("B", "C", 5);

        let light = graph.filter_edges(|edge| *edge.data() < 3).unwrap();
        assert_eq!(light.vertex_count(), 3);
        assert_eq!(light.edge_count(), 1);
        assert!(!light.same_connected_set(&"B", &"C"));
    }

    #[test]
    fn test_map_vertices_is_homomorphic() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add_edge("alpha", "beta");
        graph.add_edge("beta", "gamma");

        let lengths = graph.map_vertices(|v| v.len()).unwrap();
        // alpha -> 5, beta -> 4, gamma -> 5: two vertices fold together.
        assert_eq!(lengths.vertex_count(), 2);
        assert_eq!(lengths.edge_count(), 2);
        assert!(lengths.same_connected_set(&5, &4));
    }

    #[test]
    fn test_closest_edge() {
        let mut graph: Graph<&str, f64> = Graph::new();
        graph.add_edge_with("A", "B", 4.0);
        graph.add_edge_with("A", "C", 1.5);
        graph.add_edge_with("A", "D", 3.0);

        let closest = graph.closest_edge(&"A").unwrap();
        assert_eq!(closest.opposite(&"A"), Some(&"C"));
        assert_eq!(closest.weight(), 1.5);
        assert!(graph.closest_edge(&"Z").is_none());
    }

    struct EventLog {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl GraphObserver<&'static str, ()> for EventLog {
        fn vertex_added(&mut self, vertex: &&'static str) {
            self.log.borrow_mut().push(format!("+v {vertex}"));
        }

        fn vertex_removed(&mut self, vertex: &&'static str) {
            self.log.borrow_mut().push(format!("-v {vertex}"));
        }

        fn edge_added(&mut self, edge: &Edge<&'static str, ()>) {
            self.log.borrow_mut().push(format!("+e {edge}"));
        }

        fn edge_removed(&mut self, edge: &Edge<&'static str, ()>) {
            self.log.borrow_mut().push(format!("-e {edge}"));
        }
    }

    #[test]
    fn test_observers_fire_after_commit_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut graph: Graph<&str> = Graph::new();
        graph.add_observer(GraphEvents::ALL, Box::new(EventLog { log: log.clone() }));

        graph.add_edge("A", "B");
        graph.add("A"); // idempotent, no event
        graph.remove(&"A").unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["+v A", "+v B", "+e A -- B", "-e A -- B", "-v A"]
        );
    }

    #[test]
    fn test_observer_mask_limits_events() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut graph: Graph<&str> = Graph::new();
        graph.add_observer(
            GraphEvents::EDGE_ADDED,
            Box::new(EventLog { log: log.clone() }),
        );

        graph.add_edge("A", "B");
        assert_eq!(*log.borrow(), vec!["+e A -- B"]);
    }

    #[test]
    fn test_observer_detach() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut graph: Graph<&str> = Graph::new();
        let id = graph.add_observer(GraphEvents::ALL, Box::new(EventLog { log: log.clone() }));

        assert!(graph.remove_observer(id));
        graph.add("A");
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_partition_invariant_after_mutation_sequence() {
        let mut graph: Graph<u32> = Graph::new();
        for i in 0..10 {
            graph.add(i);
        }
        for i in 0..9 {
            graph.add_edge(i, i + 1);
        }
        assert_eq!(graph.connected_set_count(), 1);

        graph.remove_edge_between(&4, &5).unwrap();
        graph.remove(&7).unwrap();

        // Every vertex sits in exactly one set.
        let total: usize = graph.connected_sets().iter().map(Vec::len).sum();
        assert_eq!(total, graph.vertex_count());
        assert_eq!(graph.connected_set_count(), 3); // {0..=4}, {5,6}, {8,9}
        assert!(graph.same_connected_set(&8, &9));
        assert!(!graph.same_connected_set(&6, &8));
    }

    #[test]
    fn test_vertex_slot_accessor() {
        let mut graph: Graph<&str> = Graph::new();
        graph.add("A");
        let id = graph.vertex_id(&"A").unwrap();
        assert_eq!(graph.vertex(id), Some(&"A"));
        graph.remove(&"A").unwrap();
        assert_eq!(graph.vertex(id), None);
    }
}
