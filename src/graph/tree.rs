//! Rooted tree.
//!
//! [`Tree`] wraps the undirected core with a designated root vertex and keeps
//! two invariants on top of it: the structure stays connected and acyclic
//! (every non-root vertex has exactly one parent-connecting edge), and rooted
//! queries (parent, depth, height, leaves) orient themselves by walking away
//! from the root.
//!
//! Because the tree is always one connected component, the cycle guard for an
//! edge between two present vertices degenerates to a constant check: an
//! undirected path between them always exists already. Growth therefore
//! happens by attaching exactly one new endpoint at a time, either through
//! [`Tree::add_node`] or through [`Tree::add_edge`] with one absent endpoint.

use std::collections::{HashMap, VecDeque};

use crate::{
    graph::{
        factory::EdgeFactory,
        observer::{GraphEvents, GraphObserver, ObserverId},
        traits::{Adjacency, VertexScan},
        EdgeId, Graph, Vertex, VertexId,
    },
    Error, Result,
};

/// An undirected, acyclic, connected graph with a designated root.
///
/// # Examples
///
/// ```rust
/// use lattix::Tree;
///
/// let mut tree: Tree<&str> = Tree::new();
/// tree.add_node(None, "R").unwrap();
/// tree.add_node(Some(&"R"), "X").unwrap();
/// tree.add_node(Some(&"R"), "Y").unwrap();
/// tree.add_node(Some(&"X"), "Z").unwrap();
///
/// assert_eq!(tree.depth(&"Z").unwrap(), 3);
/// assert_eq!(tree.leaves().unwrap(), vec![&"Y", &"Z"]);
/// assert_eq!(tree.height().unwrap(), 3);
/// ```
#[derive(Debug)]
pub struct Tree<V, D = ()> {
    graph: Graph<V, D>,
    root: Option<VertexId>,
}

impl<V: Vertex, D> Default for Tree<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, D> Tree<V, D> {
    /// Creates a new empty tree. The first [`add_node`](Self::add_node) with
    /// no parent establishes the root.
    #[must_use]
    pub fn new() -> Self {
        Tree {
            graph: Graph::new(),
            root: None,
        }
    }

    /// Read-only view of the underlying undirected graph.
    #[must_use]
    pub fn as_graph(&self) -> &Graph<V, D> {
        &self.graph
    }

    /// Returns the designated root, if established.
    #[must_use]
    pub fn root(&self) -> Option<&V> {
        self.root.and_then(|id| self.graph.vertex(id))
    }

    /// Designates `vertex` as the root, re-orienting all rooted queries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVertex`] when the vertex is not already part of
    /// the tree.
    pub fn set_root(&mut self, vertex: &V) -> Result<()> {
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        self.root = Some(id);
        Ok(())
    }

    /// Returns `true` if the vertex value is present.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.graph.contains(vertex)
    }

    /// Number of vertices currently in the tree.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of edges currently in the tree.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the tree contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Iterates all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.graph.vertices()
    }

    /// Degree of a vertex; see [`Graph::degree`].
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.graph.degree(vertex)
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

    /// Returns the undirected-edge factory for this variant.
    #[must_use]
    pub fn edge_factory(&self) -> &'static dyn EdgeFactory<V, D> {
        self.graph.edge_factory()
    }

    /// Parent of `vertex` on the path toward the root; `None` for the root
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] before a root is established and
    /// [`Error::MissingVertex`] for an absent vertex.
    pub fn parent(&self, vertex: &V) -> Result<Option<&V>> {
        let root = self.root.ok_or(Error::EmptyStructure)?;
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        if id == root {
            return Ok(None);
        }
        let (parents, _) = self.orientation()?;
        Ok(parents.get(&id).and_then(|&parent| self.graph.vertex(parent)))
    }

    /// Depth of `vertex`: the number of vertices on its path from the root,
    /// the root itself having depth 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] before a root is established and
    /// [`Error::MissingVertex`] for an absent vertex.
    pub fn depth(&self, vertex: &V) -> Result<usize> {
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        let (_, depths) = self.orientation()?;
        depths.get(&id).copied().ok_or(Error::MissingVertex)
    }

    /// Height of the tree: the maximum depth over all vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] before a root is established.
    pub fn height(&self) -> Result<usize> {
        let (_, depths) = self.orientation()?;
        Ok(depths.values().copied().max().unwrap_or(0))
    }

    /// The vertices with no children, in insertion order. A lone root is a
    /// leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] before a root is established.
    pub fn leaves(&self) -> Result<Vec<&V>> {
        let (parents, _) = self.orientation()?;
        let is_parent: Vec<VertexId> = parents.values().copied().collect();
        Ok(self
            .graph
            .vertex_ids()
            .filter(|id| !is_parent.contains(id))
            .filter_map(|id| self.graph.vertex(id))
            .collect())
    }

    /// Returns `true` when `vertex` has no children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] before a root is established and
    /// [`Error::MissingVertex`] for an absent vertex.
    pub fn is_leaf(&self, vertex: &V) -> Result<bool> {
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        let (parents, _) = self.orientation()?;
        Ok(!parents.values().any(|&parent| parent == id))
    }

    /// Breadth-first orientation away from the root: child -> parent mapping
    /// plus per-vertex depth (root depth 1).
    fn orientation(&self) -> Result<(HashMap<VertexId, VertexId>, HashMap<VertexId, usize>)> {
        let root = self.root.ok_or(Error::EmptyStructure)?;
        let mut parents = HashMap::new();
        let mut depths = HashMap::new();
        depths.insert(root, 1);
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            let level = depths[&current];
            for &edge_id in self.graph.incident_ids(current) {
                let Some((a, b)) = self.graph.endpoints_of(edge_id) else {
                    continue;
                };
                let other = if a == current { b } else { a };
                if !depths.contains_key(&other) {
                    depths.insert(other, level + 1);
                    parents.insert(other, current);
                    queue.push_back(other);
                }
            }
        }
        Ok((parents, depths))
    }
}

impl<V: Vertex, D: Clone> Tree<V, D> {
    /// Adds a node under `parent`.
    ///
    /// `parent` may be `None` only for the very first node, which becomes the
    /// root; afterwards the parent must already be present and the child must
    /// not.
    ///
    /// # Errors
    ///
    /// - [`Error::Modification`] when the child already exists, or when
    ///   `parent` is omitted on a non-empty tree
    /// - [`Error::MissingVertex`] when the named parent is absent
    pub fn add_node(&mut self, parent: Option<&V>, child: V) -> Result<()>
    where
        D: Default,
    {
        if self.graph.contains(&child) {
            return Err(Error::Modification(
                "vertex is already present in the tree".into(),
            ));
        }
        match parent {
            None => {
                if !self.graph.is_empty() {
                    return Err(Error::Modification(
                        "parent may be omitted only for the first node".into(),
                    ));
                }
                self.graph.add(child.clone());
                self.root = self.graph.vertex_id(&child);
                Ok(())
            }
            Some(parent) => {
                if !self.graph.contains(parent) {
                    return Err(Error::MissingVertex);
                }
                self.graph.add_edge_with(parent.clone(), child, D::default());
                Ok(())
            }
        }
    }

    /// Adds an edge with a defaulted payload; see
    /// [`add_edge_with`](Self::add_edge_with).
    ///
    /// # Errors
    ///
    /// See [`add_edge_with`](Self::add_edge_with).
    pub fn add_edge(&mut self, a: V, b: V) -> Result<EdgeId>
    where
        D: Default,
    {
        self.add_edge_with(a, b, D::default())
    }

    /// Adds an edge, keeping the tree connected and acyclic.
    ///
    /// Exactly one endpoint must already be part of the tree: two present
    /// endpoints are already joined by an undirected path (the insertion
    /// would close a cycle), and two absent endpoints would start a second
    /// component.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyStructure`] before a root is established
    /// - [`Error::Cycle`] when both endpoints are present
    /// - [`Error::Modification`] when neither endpoint is present
    pub fn add_edge_with(&mut self, a: V, b: V, data: D) -> Result<EdgeId> {
        if self.root.is_none() {
            return Err(Error::EmptyStructure);
        }
        match (self.graph.contains(&a), self.graph.contains(&b)) {
            (true, true) => Err(Error::Cycle),
            (false, false) => Err(Error::Modification(
                "edge would be detached from the tree".into(),
            )),
            _ => Ok(self.graph.add_edge_with(a, b, data)),
        }
    }

    /// Removes a leaf vertex (degree at most 1).
    ///
    /// Removing an interior vertex would fragment the tree into a forest, so
    /// it is rejected. The root may only be removed as the last remaining
    /// vertex, which empties the tree.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingVertex`] for an absent vertex
    /// - [`Error::Modification`] for a non-leaf, or for the root while other
    ///   vertices remain
    pub fn remove(&mut self, vertex: &V) -> Result<()> {
        let id = self.graph.vertex_id(vertex).ok_or(Error::MissingVertex)?;
        if self.graph.degree(vertex) > 1 {
            return Err(Error::Modification(
                "only leaves may be removed from a tree".into(),
            ));
        }
        if self.root == Some(id) && self.graph.vertex_count() > 1 {
            return Err(Error::Modification(
                "cannot remove the root while other nodes remain".into(),
            ));
        }
        self.graph.remove(vertex)?;
        if self.root == Some(id) {
            self.root = None;
        }
        Ok(())
    }
}

impl<V: Vertex, D> VertexScan<V> for Tree<V, D> {
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

impl<V: Vertex, D> Adjacency<V> for Tree<V, D> {
    fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.graph.adjacent_vertices(vertex)
    }
}
