//! Integer vertex keys.

use super::VertexDomain;

/// Vertices `0..len`, keyed by their own index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DenseDomain {
    len: usize,
}

impl DenseDomain {
    /// Sentinel used as the invalid key.
    pub const INVALID: usize = usize::MAX;

    /// Creates a domain of `len` vertices.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl VertexDomain for DenseDomain {
    type Key = usize;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    fn invalid(&self) -> usize {
        Self::INVALID
    }

    #[inline(always)]
    fn index_of(&self, key: &usize) -> usize {
        debug_assert!(*key < self.len, "vertex {key} outside 0..{}", self.len);
        *key
    }

    fn key_of(&self, index: usize) -> Option<usize> {
        (index < self.len).then_some(index)
    }
}
