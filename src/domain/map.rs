//! `VertexMap`: one value per vertex, addressed by key.

use super::VertexDomain;
use core::fmt;
use core::ops::{Index, IndexMut};

/// Dense per-vertex storage over a [`VertexDomain`].
///
/// All slots are allocated up front; reads and writes are O(1) and never
/// allocate after construction.
pub struct VertexMap<D, V> {
    domain: D,
    slots: Vec<V>,
}

impl<D: VertexDomain, V: Clone> VertexMap<D, V> {
    /// Creates a map over `domain` with every slot set to `default`.
    pub fn new(domain: D, default: V) -> Self {
        let slots = vec![default; domain.len()];
        Self { domain, slots }
    }

    /// Overwrites every slot with `value`.
    pub fn fill(&mut self, value: V) {
        self.slots.fill(value);
    }
}

impl<D: VertexDomain, V> VertexMap<D, V> {
    /// Returns the value stored for `key`.
    #[inline(always)]
    pub fn get(&self, key: &D::Key) -> &V {
        &self.slots[self.domain.index_of(key)]
    }

    /// Returns a mutable reference to the value stored for `key`.
    #[inline(always)]
    pub fn get_mut(&mut self, key: &D::Key) -> &mut V {
        let index = self.domain.index_of(key);
        &mut self.slots[index]
    }

    /// Stores `value` for `key`.
    #[inline(always)]
    pub fn set(&mut self, key: &D::Key, value: V) {
        *self.get_mut(key) = value;
    }

    /// The domain this map is indexed by.
    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Number of slots (equal to the domain size).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the map has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots in dense-index order.
    pub fn as_slice(&self) -> &[V] {
        &self.slots
    }

    /// Iterates over the slots in dense-index order.
    pub fn iter(&self) -> core::slice::Iter<'_, V> {
        self.slots.iter()
    }

    /// Iterates mutably over the slots in dense-index order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, V> {
        self.slots.iter_mut()
    }

    /// Consumes the map and returns the slots in dense-index order.
    pub fn into_vec(self) -> Vec<V> {
        self.slots
    }
}

impl<'k, D: VertexDomain, V> Index<&'k D::Key> for VertexMap<D, V> {
    type Output = V;

    fn index(&self, key: &'k D::Key) -> &V {
        self.get(key)
    }
}

impl<'k, D: VertexDomain, V> IndexMut<&'k D::Key> for VertexMap<D, V> {
    fn index_mut(&mut self, key: &'k D::Key) -> &mut V {
        self.get_mut(key)
    }
}

impl<D: Clone, V: Clone> Clone for VertexMap<D, V> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            slots: self.slots.clone(),
        }
    }
}

impl<D, V: PartialEq> PartialEq for VertexMap<D, V> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<D, V: fmt::Debug> fmt::Debug for VertexMap<D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.iter()).finish()
    }
}
