//! Incremental path builders.
//!
//! A path is an ordered sequence of vertices with implied edges between
//! consecutive entries, assembled step by step. Three builders with
//! increasingly strict rules:
//!
//! - [`Path`] - free sequence, any vertex may repeat
//! - [`SimplePath`] - rejects pushing a vertex already on the path
//! - [`CyclePath`] - simple while open; an explicit [`close`](CyclePath::close)
//!   marks the implied return edge to the start, after which the path is
//!   sealed
//!
//! Rule violations surface as [`Error::IllegalPath`]; the builder is left
//! unchanged by a rejected operation.

use crate::{Error, Result};

/// An ordered vertex sequence with implied edges between consecutive entries.
///
/// # Examples
///
/// ```rust
/// use lattix::Path;
///
/// let mut path = Path::new();
/// path.push("A");
/// path.push("B");
/// path.push("A"); // revisiting is fine on a free path
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.first(), Some(&"A"));
/// assert_eq!(path.last(), Some(&"A"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V> Path<V> {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Path {
            vertices: Vec::new(),
        }
    }

    /// Appends a vertex to the end of the path.
    pub fn push(&mut self, vertex: V) {
        self.vertices.push(vertex);
    }

    /// Number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for a path with no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex of the path.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last vertex of the path.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Iterates the vertices in path order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Consumes the builder and returns the vertex sequence.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// A path on which every vertex is unique.
///
/// # Examples
///
/// ```rust
/// use lattix::{Error, SimplePath};
///
/// let mut path = SimplePath::new();
/// path.push("A").unwrap();
/// path.push("B").unwrap();
///
/// assert!(matches!(path.push("A"), Err(Error::IllegalPath(_))));
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplePath<V> {
    vertices: Vec<V>,
}

impl<V: PartialEq> SimplePath<V> {
    /// Creates an empty simple path.
    #[must_use]
    pub fn new() -> Self {
        SimplePath {
            vertices: Vec::new(),
        }
    }

    /// Appends a vertex not yet on the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalPath`] when the vertex is already present; the
    /// path is left unchanged.
    pub fn push(&mut self, vertex: V) -> Result<()> {
        if self.vertices.contains(&vertex) {
            return Err(Error::IllegalPath(
                "vertex already on the simple path".into(),
            ));
        }
        self.vertices.push(vertex);
        Ok(())
    }

    /// Number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for a path with no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex of the path.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last vertex of the path.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Returns `true` when `vertex` lies on the path.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Iterates the vertices in path order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Consumes the builder and returns the vertex sequence.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}

/// A simple path that can be sealed into a cycle.
///
/// While open, the builder behaves like [`SimplePath`]: no vertex may repeat
/// (in particular the start — returning to it goes through the explicit
/// [`close`](Self::close) operation, which marks the implied edge from the
/// last vertex back to the first). Once closed, the path rejects any further
/// addition.
///
/// # Examples
///
/// ```rust
/// use lattix::{CyclePath, Error};
///
/// let mut cycle = CyclePath::new();
/// cycle.push("A").unwrap();
/// cycle.push("B").unwrap();
/// cycle.push("C").unwrap();
///
/// assert!(matches!(cycle.push("A"), Err(Error::IllegalPath(_))));
/// cycle.close().unwrap();
/// assert!(cycle.is_closed());
/// assert!(matches!(cycle.push("D"), Err(Error::IllegalPath(_))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CyclePath<V> {
    vertices: Vec<V>,
    closed: bool,
}

impl<V: PartialEq> CyclePath<V> {
    /// Creates an empty, open cycle path.
    #[must_use]
    pub fn new() -> Self {
        CyclePath {
            vertices: Vec::new(),
            closed: false,
        }
    }

    /// Appends a vertex not yet on the path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalPath`] when the path is already closed or the
    /// vertex would be revisited; the path is left unchanged.
    pub fn push(&mut self, vertex: V) -> Result<()> {
        if self.closed {
            return Err(Error::IllegalPath("cycle path is already closed".into()));
        }
        if self.vertices.contains(&vertex) {
            return Err(Error::IllegalPath(
                "vertex would be revisited before the cycle is closed".into(),
            ));
        }
        self.vertices.push(vertex);
        Ok(())
    }

    /// Returns `true` when closing now would revisit `vertex` as the start of
    /// the cycle.
    #[must_use]
    pub fn would_close_at(&self, vertex: &V) -> bool {
        !self.closed && self.vertices.first() == Some(vertex)
    }

    /// Seals the path with the implied edge from the last vertex back to the
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalPath`] when the path is already closed or is
    /// empty (there is no cycle to close).
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::IllegalPath("cycle path is already closed".into()));
        }
        if self.vertices.is_empty() {
            return Err(Error::IllegalPath(
                "an empty path does not form a cycle".into(),
            ));
        }
        self.closed = true;
        Ok(())
    }

    /// Returns `true` once the cycle has been sealed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct vertices on the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for a path with no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// First vertex of the cycle (also the implied target of the closing
    /// edge).
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last explicit vertex of the cycle.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Iterates the distinct vertices in cycle order; the closing edge back to
    /// the first vertex stays implied.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Consumes the builder and returns the distinct vertex sequence.
    #[must_use]
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }
}
