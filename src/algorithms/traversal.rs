//! Visitor-driven graph traversal.
//!
//! This module provides the traversal framework the rest of the algorithm
//! layer builds on: pluggable depth-first and breadth-first strategies
//! parameterized by a starting vertex, a mutable visited output sequence, and
//! a per-vertex visitor callback whose [`Visit`] result is the sole
//! termination signal, checked after every visit.
//!
//! Traversal works through the [`Adjacency`] seam, so the same strategies run
//! over undirected graphs (all incident edges), directed graphs and DAGs
//! (outgoing edges only), and trees. The framework never mutates the graph.
//!
//! # Realized Depth-First Order
//!
//! Depth-first uses an explicit pushdown stack: a vertex is marked when first
//! discovered (at push time), then popped and visited with its unvisited
//! adjacent vertices pushed next, in reverse adjacency order so plain chains
//! read in adjacency order. The realized order is the stack-based
//! approximation of preorder, not a strict recursive preorder.

use std::collections::{HashSet, VecDeque};

use strum::{Display, EnumIter};

use crate::graph::{Adjacency, Vertex};

/// Visitor verdict after each visited vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep traversing.
    Continue,
    /// Terminate the traversal immediately.
    Stop,
}

/// How a traversal run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOutcome {
    /// Every reachable vertex was visited exactly once.
    Exhausted,
    /// The visitor requested termination.
    Stopped,
}

/// The two shipped visitation orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum TraversalOrder {
    /// Explicit-stack depth-first order.
    DepthFirst,
    /// Classic level-order breadth-first.
    BreadthFirst,
}

/// A pluggable traversal strategy.
///
/// Implementations visit each vertex reachable from `start` exactly once,
/// appending every visited vertex to `visited` in visitation order and
/// consulting `visitor` after each visit. A missing start vertex yields an
/// empty, [`Exhausted`](TraversalOutcome::Exhausted) run — a negative result,
/// not an error.
///
/// # Examples
///
/// ```rust
/// use lattix::{BreadthFirst, Graph, TraversalOutcome, TraversalStrategy, Visit};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
///
/// let mut order = Vec::new();
/// let outcome = BreadthFirst.traverse(&graph, &"A", &mut order, |vertex| {
///     if *vertex == "B" { Visit::Stop } else { Visit::Continue }
/// });
///
/// assert_eq!(outcome, TraversalOutcome::Stopped);
/// assert_eq!(order, vec!["A", "B"]);
/// ```
pub trait TraversalStrategy {
    /// Traverses `graph` from `start`, recording visitation order into
    /// `visited` and consulting `visitor` after every visit.
    fn traverse<V, G, F>(
        &self,
        graph: &G,
        start: &V,
        visited: &mut Vec<V>,
        visitor: F,
    ) -> TraversalOutcome
    where
        V: Vertex,
        G: Adjacency<V>,
        F: FnMut(&V) -> Visit;
}

/// Depth-first traversal with an explicit pushdown stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl TraversalStrategy for DepthFirst {
    fn traverse<V, G, F>(
        &self,
        graph: &G,
        start: &V,
        visited: &mut Vec<V>,
        mut visitor: F,
    ) -> TraversalOutcome
    where
        V: Vertex,
        G: Adjacency<V>,
        F: FnMut(&V) -> Visit,
    {
        if !graph.contains(start) {
            return TraversalOutcome::Exhausted;
        }

        let mut discovered: HashSet<V> = HashSet::new();
        discovered.insert(start.clone());
        let mut stack = vec![start.clone()];

        while let Some(current) = stack.pop() {
            visited.push(current.clone());
            if visitor(&current) == Visit::Stop {
                return TraversalOutcome::Stopped;
            }

            // Push unvisited neighbors in reverse order so they pop in
            // adjacency order.
            let adjacent: Vec<V> = graph.adjacent(&current).cloned().collect();
            for next in adjacent.iter().rev() {
                if !discovered.contains(next) {
                    discovered.insert(next.clone());
                    stack.push(next.clone());
                }
            }
        }
        TraversalOutcome::Exhausted
    }
}

/// Breadth-first traversal with an explicit queue.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl TraversalStrategy for BreadthFirst {
    fn traverse<V, G, F>(
        &self,
        graph: &G,
        start: &V,
        visited: &mut Vec<V>,
        mut visitor: F,
    ) -> TraversalOutcome
    where
        V: Vertex,
        G: Adjacency<V>,
        F: FnMut(&V) -> Visit,
    {
        if !graph.contains(start) {
            return TraversalOutcome::Exhausted;
        }

        let mut discovered: HashSet<V> = HashSet::new();
        discovered.insert(start.clone());
        let mut queue = VecDeque::new();
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            visited.push(current.clone());
            if visitor(&current) == Visit::Stop {
                return TraversalOutcome::Stopped;
            }

            for next in graph.adjacent(&current) {
                if !discovered.contains(next) {
                    discovered.insert(next.clone());
                    queue.push_back(next.clone());
                }
            }
        }
        TraversalOutcome::Exhausted
    }
}

/// Runs a full traversal and returns the visitation order.
pub fn depth_first<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Vertex,
    G: Adjacency<V>,
{
    let mut visited = Vec::new();
    DepthFirst.traverse(graph, start, &mut visited, |_| Visit::Continue);
    visited
}

/// Runs a full breadth-first traversal and returns the visitation order.
pub fn breadth_first<V, G>(graph: &G, start: &V) -> Vec<V>
where
    V: Vertex,
    G: Adjacency<V>,
{
    let mut visited = Vec::new();
    BreadthFirst.traverse(graph, start, &mut visited, |_| Visit::Continue);
    visited
}

/// Dispatches a traversal on a runtime-selected [`TraversalOrder`].
pub fn traverse_with<V, G, F>(
    order: TraversalOrder,
    graph: &G,
    start: &V,
    visited: &mut Vec<V>,
    visitor: F,
) -> TraversalOutcome
where
    V: Vertex,
    G: Adjacency<V>,
    F: FnMut(&V) -> Visit,
{
    match order {
        TraversalOrder::DepthFirst => DepthFirst.traverse(graph, start, visited, visitor),
        TraversalOrder::BreadthFirst => BreadthFirst.traverse(graph, start, visited, visitor),
    }
}
