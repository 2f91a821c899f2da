//! Connected-set partition bookkeeping.
//!
//! The graph core maintains a partition of its vertex slots into connected
//! sets: two vertices share a set exactly when an undirected path connects
//! them. This module owns that bookkeeping. Merges happen eagerly when an edge
//! joins two sets (always folding the smaller set into the larger one, so the
//! amortized cost stays proportional to the smaller side); splits happen
//! lazily after an edge removal, driven by a reachability traversal the graph
//! core performs.

use std::collections::HashMap;
use std::fmt;

use crate::graph::VertexId;

/// Identifier for one connected set within a partition.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SetId(usize);

impl SetId {
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SetId({})", self.0)
    }
}

/// Partition of vertex slots into connected sets.
///
/// Invariant: every live vertex slot is assigned to exactly one set, and every
/// set is non-empty. Membership lists preserve the order in which vertices
/// joined their set.
#[derive(Debug, Default, Clone)]
pub(crate) struct Partition {
    /// Per vertex slot: the set it belongs to (`None` for removed slots).
    set_of: Vec<Option<SetId>>,
    /// Members of each live set, keyed by set id.
    sets: HashMap<SetId, Vec<VertexId>>,
    /// Next set id to hand out. Ids are never reused.
    next_set: usize,
}

impl Partition {
    pub(crate) fn new() -> Self {
        Partition::default()
    }

    fn allocate(&mut self) -> SetId {
        let id = SetId(self.next_set);
        self.next_set += 1;
        id
    }

    /// Extends the slot table so it covers `slot_count` vertex slots.
    pub(crate) fn grow(&mut self, slot_count: usize) {
        while self.set_of.len() < slot_count {
            self.set_of.push(None);
        }
    }

    /// Places a fresh vertex into a singleton set of its own.
    pub(crate) fn add_singleton(&mut self, vertex: VertexId) -> SetId {
        self.grow(vertex.index() + 1);
        let id = self.allocate();
        self.set_of[vertex.index()] = Some(id);
        self.sets.insert(id, vec![vertex]);
        id
    }

    /// Returns the set containing `vertex`, if the slot is live.
    pub(crate) fn set_id(&self, vertex: VertexId) -> Option<SetId> {
        self.set_of.get(vertex.index()).copied().flatten()
    }

    /// Returns the members of a set in joining order.
    pub(crate) fn members(&self, set: SetId) -> &[VertexId] {
        self.sets.get(&set).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` when both slots are live and share a set.
    pub(crate) fn same_set(&self, a: VertexId, b: VertexId) -> bool {
        match (self.set_id(a), self.set_id(b)) {
            (Some(sa), Some(sb)) => sa == sb,
            _ => false,
        }
    }

    /// Merges the sets of `a` and `b`, folding the smaller into the larger.
    ///
    /// Returns the id of the surviving set. A no-op when the vertices already
    /// share a set.
    pub(crate) fn merge(&mut self, a: VertexId, b: VertexId) -> Option<SetId> {
        let sa = self.set_id(a)?;
        let sb = self.set_id(b)?;
        if sa == sb {
            return Some(sa);
        }

        let (keep, fold) = if self.sets[&sa].len() >= self.sets[&sb].len() {
            (sa, sb)
        } else {
            (sb, sa)
        };

        let folded = self.sets.remove(&fold).unwrap_or_default();
        for &member in &folded {
            self.set_of[member.index()] = Some(keep);
        }
        if let Some(target) = self.sets.get_mut(&keep) {
            target.extend(folded);
        }
        Some(keep)
    }

    /// Carves `moved` out of its current set into a freshly allocated set.
    ///
    /// The remaining members keep their old set id. Callers pass the vertices
    /// reached by a post-removal traversal from one endpoint; the old set must
    /// contain every moved vertex.
    pub(crate) fn split(&mut self, moved: &[VertexId]) -> Option<SetId> {
        let old = self.set_id(*moved.first()?)?;

        let mut is_moved = vec![false; self.set_of.len()];
        for &vertex in moved {
            is_moved[vertex.index()] = true;
        }

        if let Some(remaining) = self.sets.get_mut(&old) {
            remaining.retain(|member| !is_moved[member.index()]);
        }

        let fresh = self.allocate();
        for &vertex in moved {
            self.set_of[vertex.index()] = Some(fresh);
        }
        self.sets.insert(fresh, moved.to_vec());
        Some(fresh)
    }

    /// Removes a vertex from its set, destroying the set once empty.
    pub(crate) fn remove_vertex(&mut self, vertex: VertexId) {
        let Some(set) = self.set_id(vertex) else {
            return;
        };
        self.set_of[vertex.index()] = None;

        let emptied = if let Some(members) = self.sets.get_mut(&set) {
            members.retain(|&member| member != vertex);
            members.is_empty()
        } else {
            false
        };
        if emptied {
            self.sets.remove(&set);
        }
    }

    /// Number of live connected sets.
    pub(crate) fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Iterates all live sets. Set enumeration order is unspecified; member
    /// order within a set is joining order.
    pub(crate) fn iter_sets(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.sets.values().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(index: usize) -> VertexId {
        VertexId::new(index)
    }

    #[test]
    fn test_singletons() {
        let mut partition = Partition::new();
        let s0 = partition.add_singleton(v(0));
        let s1 = partition.add_singleton(v(1));

        assert_ne!(s0, s1);
        assert_eq!(partition.set_count(), 2);
        assert_eq!(partition.members(s0), &[v(0)]);
        assert!(!partition.same_set(v(0), v(1)));
    }

    #[test]
    fn test_merge_folds_smaller_into_larger() {
        let mut partition = Partition::new();
        for i in 0..5 {
            partition.add_singleton(v(i));
        }
        // Build a set of three: {0, 1, 2}
        partition.merge(v(0), v(1));
        partition.merge(v(1), v(2));
        let big = partition.set_id(v(0)).unwrap();

        // Merge singleton {3} in: the big id must survive.
        let kept = partition.merge(v(0), v(3)).unwrap();
        assert_eq!(kept, big);
        assert_eq!(partition.members(big).len(), 4);
        assert!(partition.same_set(v(3), v(2)));
        assert_eq!(partition.set_count(), 2);
    }

    #[test]
    fn test_merge_same_set_is_noop() {
        let mut partition = Partition::new();
        partition.add_singleton(v(0));
        partition.add_singleton(v(1));
        partition.merge(v(0), v(1));

        let before = partition.set_count();
        partition.merge(v(1), v(0));
        assert_eq!(partition.set_count(), before);
    }

    #[test]
    fn test_split_carves_new_set() {
        let mut partition = Partition::new();
        for i in 0..4 {
            partition.add_singleton(v(i));
        }
        partition.merge(v(0), v(1));
        partition.merge(v(1), v(2));
        partition.merge(v(2), v(3));
        assert_eq!(partition.set_count(), 1);

        let fresh = partition.split(&[v(2), v(3)]).unwrap();
        assert_eq!(partition.set_count(), 2);
        assert_eq!(partition.set_id(v(2)), Some(fresh));
        assert!(partition.same_set(v(2), v(3)));
        assert!(partition.same_set(v(0), v(1)));
        assert!(!partition.same_set(v(0), v(3)));
    }

    #[test]
    fn test_remove_vertex_destroys_empty_set() {
        let mut partition = Partition::new();
        partition.add_singleton(v(0));
        partition.add_singleton(v(1));
        partition.merge(v(0), v(1));

        partition.remove_vertex(v(0));
        assert_eq!(partition.set_count(), 1);
        partition.remove_vertex(v(1));
        assert_eq!(partition.set_count(), 0);
        assert_eq!(partition.set_id(v(1)), None);
    }

    #[test]
    fn test_iter_sets_covers_all_vertices() {
        let mut partition = Partition::new();
        for i in 0..6 {
            partition.add_singleton(v(i));
        }
        partition.merge(v(0), v(1));
        partition.merge(v(2), v(3));

        let total: usize = partition.iter_sets().map(<[VertexId]>::len).sum();
        assert_eq!(total, 6);
        assert_eq!(partition.set_count(), 4);
    }
}
