//! Structural-change notifications.
//!
//! Graphs fire synchronous, in-process callbacks for the four structural
//! events: vertex added, vertex removed, edge added, edge removed. Observers
//! run on the mutating call, in registration order, strictly after the
//! structural change has committed; an observer cannot veto or roll back a
//! change it is being told about.
//!
//! Observers subscribe with a [`GraphEvents`] mask and only receive the events
//! the mask selects.

use std::fmt;

use bitflags::bitflags;

use crate::graph::Edge;

bitflags! {
    /// Mask selecting which structural events an observer receives.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GraphEvents: u8 {
        /// A vertex was inserted into the graph.
        const VERTEX_ADDED = 1;
        /// A vertex (and, beforehand, all its incident edges) was removed.
        const VERTEX_REMOVED = 1 << 1;
        /// An edge was inserted into the graph.
        const EDGE_ADDED = 1 << 2;
        /// An edge was detached from the graph.
        const EDGE_REMOVED = 1 << 3;
        /// All four structural events.
        const ALL = Self::VERTEX_ADDED.bits()
            | Self::VERTEX_REMOVED.bits()
            | Self::EDGE_ADDED.bits()
            | Self::EDGE_REMOVED.bits();
    }
}

/// Callback interface for structural-change notifications.
///
/// All hooks have empty default bodies, so an observer implements only the
/// events it cares about. Edge hooks receive the structural [`Edge`] value of
/// the affected edge; vertex hooks receive the vertex value.
///
/// # Examples
///
/// ```rust
/// use lattix::{Graph, GraphEvents, GraphObserver};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct CountAdds(Rc<RefCell<usize>>);
///
/// impl GraphObserver<&'static str, ()> for CountAdds {
///     fn vertex_added(&mut self, _vertex: &&'static str) {
///         *self.0.borrow_mut() += 1;
///     }
/// }
///
/// let adds = Rc::new(RefCell::new(0));
/// let mut graph: Graph<&str> = Graph::new();
/// graph.add_observer(GraphEvents::VERTEX_ADDED, Box::new(CountAdds(adds.clone())));
/// graph.add("A");
/// graph.add("A"); // idempotent re-insert does not notify
/// assert_eq!(*adds.borrow(), 1);
/// ```
#[allow(unused_variables)]
pub trait GraphObserver<V, D> {
    /// A vertex was inserted. Fires only for genuinely new vertices, not for
    /// idempotent re-insertions.
    fn vertex_added(&mut self, vertex: &V) {}

    /// A vertex was removed, after all its incident edges were detached.
    fn vertex_removed(&mut self, vertex: &V) {}

    /// An edge was inserted.
    fn edge_added(&mut self, edge: &Edge<V, D>) {}

    /// An edge was detached.
    fn edge_removed(&mut self, edge: &Edge<V, D>) {}
}

/// Handle identifying one registered observer.
///
/// Returned by observer registration and used to detach the observer again.
/// Ids are assigned sequentially per graph and never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

impl fmt::Debug for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObserverId({})", self.0)
    }
}

struct ObserverEntry<V, D> {
    id: ObserverId,
    events: GraphEvents,
    observer: Box<dyn GraphObserver<V, D>>,
}

/// Per-graph observer bookkeeping: registration order is notification order.
pub(crate) struct ObserverRegistry<V, D> {
    entries: Vec<ObserverEntry<V, D>>,
    next_id: usize,
}

impl<V, D> Default for ObserverRegistry<V, D> {
    fn default() -> Self {
        ObserverRegistry {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<V, D> ObserverRegistry<V, D> {
    pub(crate) fn attach(
        &mut self,
        events: GraphEvents,
        observer: Box<dyn GraphObserver<V, D>>,
    ) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push(ObserverEntry {
            id,
            events,
            observer,
        });
        id
    }

    pub(crate) fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn vertex_added(&mut self, vertex: &V) {
        for entry in &mut self.entries {
            if entry.events.contains(GraphEvents::VERTEX_ADDED) {
                entry.observer.vertex_added(vertex);
            }
        }
    }

    pub(crate) fn vertex_removed(&mut self, vertex: &V) {
        for entry in &mut self.entries {
            if entry.events.contains(GraphEvents::VERTEX_REMOVED) {
                entry.observer.vertex_removed(vertex);
            }
        }
    }

    pub(crate) fn edge_added(&mut self, edge: &Edge<V, D>) {
        for entry in &mut self.entries {
            if entry.events.contains(GraphEvents::EDGE_ADDED) {
                entry.observer.edge_added(edge);
            }
        }
    }

    pub(crate) fn edge_removed(&mut self, edge: &Edge<V, D>) {
        for entry in &mut self.entries {
            if entry.events.contains(GraphEvents::EDGE_REMOVED) {
                entry.observer.edge_removed(edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Log {
        events: Rc<RefCell<Vec<String>>>,
    }

    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl GraphObserver<&'static str, ()> for Recorder {
        fn vertex_added(&mut self, vertex: &&'static str) {
            self.log.borrow_mut().push(format!("{}+v:{vertex}", self.tag));
        }

        fn vertex_removed(&mut self, vertex: &&'static str) {
            self.log.borrow_mut().push(format!("{}-v:{vertex}", self.tag));
        }

        fn edge_added(&mut self, edge: &Edge<&'static str, ()>) {
            self.log.borrow_mut().push(format!("{}+e:{edge}", self.tag));
        }
    }

    #[test]
    fn test_events_mask_composition() {
        let mask = GraphEvents::VERTEX_ADDED | GraphEvents::EDGE_ADDED;
        assert!(mask.contains(GraphEvents::VERTEX_ADDED));
        assert!(!mask.contains(GraphEvents::EDGE_REMOVED));
        assert!(GraphEvents::ALL.contains(mask));
    }

    #[test]
    fn test_registration_order_is_notification_order() {
        let log = Log::default();
        let mut registry: ObserverRegistry<&'static str, ()> = ObserverRegistry::default();
        registry.attach(
            GraphEvents::ALL,
            Box::new(Recorder {
                tag: "a",
                log: log.events.clone(),
            }),
        );
        registry.attach(
            GraphEvents::ALL,
            Box::new(Recorder {
                tag: "b",
                log: log.events.clone(),
            }),
        );

        registry.vertex_added(&"X");
        assert_eq!(*log.events.borrow(), vec!["a+v:X", "b+v:X"]);
    }

    #[test]
    fn test_mask_filters_events() {
        let log = Log::default();
        let mut registry: ObserverRegistry<&'static str, ()> = ObserverRegistry::default();
        registry.attach(
            GraphEvents::EDGE_ADDED,
            Box::new(Recorder {
                tag: "e",
                log: log.events.clone(),
            }),
        );

        registry.vertex_added(&"X");
        registry.edge_added(&Edge::undirected("X", "Y", ()));

        assert_eq!(*log.events.borrow(), vec!["e+e:X -- Y"]);
    }

    #[test]
    fn test_detach() {
        let log = Log::default();
        let mut registry: ObserverRegistry<&'static str, ()> = ObserverRegistry::default();
        let id = registry.attach(
            GraphEvents::ALL,
            Box::new(Recorder {
                tag: "a",
                log: log.events.clone(),
            }),
        );

        assert!(registry.detach(id));
        assert!(!registry.detach(id));
        registry.vertex_added(&"X");
        assert!(log.events.borrow().is_empty());
        assert!(registry.is_empty());
    }
}
