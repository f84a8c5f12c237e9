//! Disjoint Set (Union-Find) over the dense universe `[0, n)`.
//!
//! # Performance
//!
//! - Full path compression in `find`: every node visited on the way up is
//!   re-pointed at the representative.
//! - Union by size: the larger set's representative absorbs the smaller one.
//! - Together they give O(α(n)) amortized `find` and `union`.
//!
//! [`ValuedDisjointSet`] additionally carries one aggregate per set and folds
//! the two aggregates together whenever sets merge.

use serde::{Deserialize, Serialize};

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisjointSet {
    /// Parent pointers; a representative points at itself.
    parent: Vec<usize>,
    /// Member count, meaningful only at representatives.
    size: Vec<usize>,
    /// Number of live sets.
    groups: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            groups: len,
        }
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative of the set containing `x`, with path compression.
    ///
    /// # Panics
    /// Panics if `x` is outside the universe.
    pub fn find(&mut self, x: usize) -> usize {
        // 1. Find root
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 2. Compress path
        let mut curr = x;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn are_same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Unites the sets containing `x` and `y`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        self.link(x, y).is_some()
    }

    /// Unites the sets of `x` and `y` by size and reports
    /// `(surviving representative, absorbed representative)`.
    ///
    /// On equal sizes the representative of `x` survives.
    pub(crate) fn link(&mut self, x: usize, y: usize) -> Option<(usize, usize)> {
        let mut kept = self.find(x);
        let mut absorbed = self.find(y);
        if kept == absorbed {
            return None;
        }

        if self.size[kept] < self.size[absorbed] {
            core::mem::swap(&mut kept, &mut absorbed);
        }
        self.parent[absorbed] = kept;
        self.size[kept] += self.size[absorbed];
        self.groups -= 1;

        Some((kept, absorbed))
    }

    /// Number of elements in the set containing `x`.
    pub fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Number of disjoint sets currently alive.
    pub fn groups_count(&self) -> usize {
        self.groups
    }

    /// Returns `true` if `x` is the representative of its set.
    pub fn is_representative(&self, x: usize) -> bool {
        self.parent[x] == x
    }

    /// Iterates over the current representatives in ascending order.
    pub fn representatives(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.parent.len()).filter(move |&x| self.is_representative(x))
    }

    /// Lists every current set.
    ///
    /// Sets are ordered by their smallest member, and members are ascending
    /// within each set.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut slot_of_root = vec![usize::MAX; self.len()];
        let mut groups: Vec<Vec<usize>> = Vec::with_capacity(self.groups);

        for x in 0..self.len() {
            let root = self.find(x);
            if slot_of_root[root] == usize::MAX {
                slot_of_root[root] = groups.len();
                groups.push(Vec::with_capacity(self.size[root]));
            }
            groups[slot_of_root[root]].push(x);
        }

        groups
    }
}

/// A disjoint set carrying one aggregate value per set.
///
/// When two sets merge, the new representative's value becomes
/// `merge(larger_side_value, smaller_side_value)`.
pub struct ValuedDisjointSet<T, F> {
    sets: DisjointSet,
    values: Vec<T>,
    merge: F,
}

impl<T, F> ValuedDisjointSet<T, F>
where
    F: FnMut(&T, &T) -> T,
{
    /// Creates one singleton set per entry of `values`, each starting with its
    /// own value as aggregate.
    pub fn with_values(values: Vec<T>, merge: F) -> Self {
        Self {
            sets: DisjointSet::new(values.len()),
            values,
            merge,
        }
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Finds the representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        self.sets.find(x)
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn are_same(&mut self, x: usize, y: usize) -> bool {
        self.sets.are_same(x, y)
    }

    /// Unites the sets containing `x` and `y`, merging their aggregates.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let Some((kept, absorbed)) = self.sets.link(x, y) else {
            return false;
        };
        self.values[kept] = (self.merge)(&self.values[kept], &self.values[absorbed]);
        true
    }

    /// The aggregate of the set containing `x`.
    pub fn value(&mut self, x: usize) -> &T {
        let root = self.sets.find(x);
        &self.values[root]
    }

    /// The aggregate stored at `representative`.
    ///
    /// Slots of absorbed representatives keep their pre-merge value, so they
    /// are never read through here.
    ///
    /// # Panics
    /// Panics if `representative` is not currently the representative of its set.
    pub fn value_of_representative(&self, representative: usize) -> &T {
        assert!(
            self.sets.is_representative(representative),
            "{representative} is not a representative"
        );
        &self.values[representative]
    }

    /// Number of elements in the set containing `x`.
    pub fn size_of(&mut self, x: usize) -> usize {
        self.sets.size_of(x)
    }

    /// Number of disjoint sets currently alive.
    pub fn groups_count(&self) -> usize {
        self.sets.groups_count()
    }

    /// Lists every current set; see [`DisjointSet::groups`].
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        self.sets.groups()
    }

    /// The underlying set structure.
    pub fn sets(&self) -> &DisjointSet {
        &self.sets
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for ValuedDisjointSet<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValuedDisjointSet")
            .field("sets", &self.sets)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
