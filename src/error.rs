use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure mode is a synchronous, recoverable signal returned to the immediate
/// caller. None of these represent transient faults — they are either contract
/// violations by the caller or legitimate negative outcomes of a mutation attempt.
/// A rejected operation never leaves a graph in a partially-mutated state: all
/// validity checks run strictly before any structural change.
///
/// # Error Categories
///
/// ## Structural Mutation Errors
/// - [`Error::Modification`] - Generic structural-mutation failure (removing a
///   non-leaf from a tree, detaching an edge that is not present, inserting a
///   mismatched edge object)
/// - [`Error::Cycle`] - An edge insertion into an acyclic structure would have
///   created a cycle; the structure is left unchanged
///
/// ## Lookup Errors
/// - [`Error::MissingVertex`] - An operation referenced a vertex that is not
///   present in the graph or tree
/// - [`Error::EmptyStructure`] - A rooted query (parent, depth, leaf test) was
///   issued before any root had been established
///
/// ## Path Composition Errors
/// - [`Error::IllegalPath`] - A path was composed in a way that violates its
///   simplicity or closure rules
///
/// # Examples
///
/// ```rust
/// use lattix::{Dag, Error};
///
/// let mut dag: Dag<&str> = Dag::new();
/// dag.add_edge("a", "b").unwrap();
/// dag.add_edge("b", "c").unwrap();
///
/// match dag.add_edge("c", "a") {
///     Err(Error::Cycle) => { /* rejected, dag still has exactly 2 edges */ }
///     other => panic!("expected cycle rejection, got {other:?}"),
/// }
/// assert_eq!(dag.edge_count(), 2);
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A structural mutation was not permitted.
    ///
    /// Raised for generic mutation-contract violations: removing a vertex that
    /// still anchors a tree, detaching an edge that does not exist, adding an
    /// edge object whose direction does not match the graph variant, or
    /// re-inserting a vertex into a tree that already holds it.
    #[error("modification not permitted: {0}")]
    Modification(String),

    /// An edge insertion would have created a cycle.
    ///
    /// Raised by the acyclic specializations (DAG, tree) when the reachability
    /// check ahead of an insertion finds an existing path between the endpoints.
    /// The check runs strictly before any structural change, so a rejected
    /// insertion leaves vertex and edge counts untouched.
    #[error("edge insertion would create a cycle")]
    Cycle,

    /// A path was composed in a way that violates its rules.
    ///
    /// Raised when pushing a duplicate vertex onto a simple path, appending to a
    /// cycle path after it has been closed, or closing a path that does not form
    /// a cycle.
    #[error("illegal path operation: {0}")]
    IllegalPath(String),

    /// An operation referenced a vertex that is not present.
    ///
    /// Raised when removing an absent vertex, designating an absent vertex as a
    /// tree root, or asking for rooted properties of a vertex outside the tree.
    #[error("vertex is not present in the graph")]
    MissingVertex,

    /// A rooted query was issued before any root was established.
    ///
    /// Tree queries such as parent, depth, height and the leaf test require a
    /// designated root; until one exists there is no orientation to answer with.
    #[error("no root has been established")]
    EmptyStructure,
}

/// Convenience alias used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
