//! `ListMap`: an append-only sequence per vertex, used to accumulate adjacency.

use super::VertexDomain;
use core::fmt;

/// Per-vertex growable sequences over a [`VertexDomain`].
pub struct ListMap<D, V> {
    domain: D,
    slots: Vec<Vec<V>>,
}

impl<D: VertexDomain, V> ListMap<D, V> {
    /// Creates a list map with one empty sequence per vertex.
    pub fn new(domain: D) -> Self {
        let slots = (0..domain.len()).map(|_| Vec::new()).collect();
        Self { domain, slots }
    }

    /// Appends `value` to the sequence of `key`.
    pub fn add(&mut self, key: &D::Key, value: V) {
        let index = self.domain.index_of(key);
        self.slots[index].push(value);
    }

    /// The values accumulated for `key`, in insertion order.
    #[inline(always)]
    pub fn get(&self, key: &D::Key) -> &[V] {
        &self.slots[self.domain.index_of(key)]
    }

    /// Number of values accumulated for `key`.
    pub fn len_of(&self, key: &D::Key) -> usize {
        self.get(key).len()
    }

    /// Total number of values over all vertices.
    pub fn total_len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// The domain this map is indexed by.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Iterates over `(dense index, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[V])> {
        self.slots.iter().enumerate().map(|(i, v)| (i, v.as_slice()))
    }

    /// Empties every sequence, keeping their allocations.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }
}

impl<D: Clone, V: Clone> Clone for ListMap<D, V> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            slots: self.slots.clone(),
        }
    }
}

impl<D, V: fmt::Debug> fmt::Debug for ListMap<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}
