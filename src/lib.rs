// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![deny(missing_docs)]

//! # lattix
//!
//! A mutable in-memory graph engine: vertices and edges under simultaneous
//! structural invariants, with directed, acyclic and weighted
//! specializations and a reusable algorithm layer on top.
//!
//! ## Features
//!
//! - **Value-keyed vertices** - any `Eq + Hash + Clone` value is a vertex;
//!   the graph never wraps it in its own node type
//! - **Live connectivity** - the partition of vertices into connected sets is
//!   maintained across every mutation: edge insertion merges sets (smaller
//!   into larger), edge removal splits them by re-traversal
//! - **Composed variants** - the directed extension, DAG guard and rooted
//!   tree are built by explicit composition over the undirected core, not by
//!   inheritance-style delegation
//! - **Visitor traversal** - pluggable depth-first / breadth-first strategies
//!   with early termination through a per-vertex [`Visit`] verdict
//! - **Classical algorithms** - topological sort, cycle extraction, strongly
//!   connected components (two interchangeable algorithms), minimum spanning
//!   tree and shortest paths through swappable strategy objects
//! - **Structural notifications** - synchronous observers for the four
//!   structural events, filtered by a [`GraphEvents`] mask
//!
//! ## Quick Start
//!
//! ```rust
//! use lattix::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! assert!(graph.same_connected_set(&"A", &"C"));
//!
//! graph.remove_edge_between(&"B", &"C")?;
//! assert_eq!(graph.connected_set_count(), 2);
//! # Ok::<(), lattix::Error>(())
//! ```
//!
//! ### Acyclic Structures
//!
//! ```rust
//! use lattix::{Dag, Error};
//!
//! let mut deps: Dag<&str> = Dag::new();
//! deps.add_edge("core", "api")?;
//! deps.add_edge("api", "cli")?;
//!
//! // Dependency cycles are rejected before anything changes.
//! assert!(matches!(deps.add_edge("cli", "core"), Err(Error::Cycle)));
//! assert_eq!(deps.topological_sort(), vec!["core", "api", "cli"]);
//! # Ok::<(), lattix::Error>(())
//! ```
//!
//! ### Traversal with Early Termination
//!
//! ```rust
//! use lattix::{BreadthFirst, Digraph, TraversalStrategy, Visit};
//!
//! let mut graph: Digraph<u32> = Digraph::new();
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//!
//! let mut order = Vec::new();
//! BreadthFirst.traverse(&graph, &1, &mut order, |v| {
//!     if *v == 2 { Visit::Stop } else { Visit::Continue }
//! });
//! assert_eq!(order, vec![1, 2]);
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - the structural layer: [`Graph`], [`Digraph`], [`Dag`],
//!   [`Tree`], edges, factories, observers and path builders
//! - [`algorithms`] - the read-only algorithm layer over the query traits
//! - [`prelude`] - one-stop re-exports of the commonly used types
//! - [`Error`] and [`Result`] - the crate-wide error taxonomy
//!
//! ## Concurrency Model
//!
//! A graph is a single-threaded structure driven by one logical owner at a
//! time: every operation runs to completion on the calling thread, and
//! structural notifications fire synchronously on the mutating call. Callers
//! needing concurrent access must serialize externally.

pub mod algorithms;
pub mod graph;
pub mod prelude;

mod error;

pub use error::{Error, Result};

pub use graph::{
    Adjacency, CyclePath, Dag, Digraph, DirectedEdgeFactory, Edge, EdgeFactory, EdgeId,
    EdgeWeight, Graph, GraphEvents, GraphObserver, ObserverId, Path, SimplePath, Tree,
    UndirectedEdgeFactory, Vertex, VertexFactory, VertexId, VertexScan,
};

pub use algorithms::{
    breadth_first, depth_first, BreadthFirst, DepthFirst, Dijkstra, Kruskal,
    ShortestPathStrategy, SpanningTreeStrategy, TraversalOrder, TraversalOutcome,
    TraversalStrategy, Visit,
};
