//! Mutable graph structures.
//!
//! This module contains the structural layer of the crate: the vertex/edge
//! model, the undirected [`Graph`] core with its connected-set partition and
//! observer registry, the composed [`Digraph`] directed extension, the
//! acyclic specializations [`Dag`] and [`Tree`], the incremental path
//! builders, and the edge factories tied to each variant.
//!
//! The algorithm layer in [`crate::algorithms`] consumes these structures
//! read-only through the traits in [`traits`].

pub mod dag;
pub mod directed;
pub mod edge;
pub mod factory;
pub mod observer;
pub mod path;
pub(crate) mod partition;
pub mod traits;
pub mod tree;
pub mod undirected;
pub mod vertex;

pub use dag::Dag;
pub use directed::Digraph;
pub use edge::{Edge, EdgeId, EdgeWeight};
pub use factory::{DirectedEdgeFactory, EdgeFactory, UndirectedEdgeFactory};
pub use observer::{GraphEvents, GraphObserver, ObserverId};
pub use path::{CyclePath, Path, SimplePath};
pub use traits::{Adjacency, VertexScan};
pub use tree::Tree;
pub use undirected::Graph;
pub use vertex::{Vertex, VertexFactory, VertexId};
