//! Arbitrary vertex keys flattened by a caller-supplied function.

use super::VertexDomain;
use core::fmt;
use std::sync::Arc;

type Inverse<T> = Arc<dyn Fn(usize) -> Option<T> + Send + Sync>;

/// Vertices of any key type `T`, mapped onto `[0, len)` by `to_index`.
///
/// `to_index` must be total and injective over every key the caller will
/// ever use, and must land in `[0, len)`. The inverse is optional and is only
/// needed to turn indices back into keys ([`VertexDomain::key_of`]).
pub struct HashedDomain<T, F> {
    len: usize,
    to_index: F,
    invalid: T,
    inverse: Option<Inverse<T>>,
}

impl<T, F> HashedDomain<T, F>
where
    T: Clone + Eq + fmt::Debug,
    F: Fn(&T) -> usize + Clone,
{
    /// Creates a domain of `len` vertices indexed by `to_index`, with
    /// `invalid` as the sentinel key.
    pub fn new(len: usize, to_index: F, invalid: T) -> Self {
        Self {
            len,
            to_index,
            invalid,
            inverse: None,
        }
    }

    /// Attaches the inverse of `to_index`.
    #[must_use]
    pub fn with_inverse<G>(mut self, from_index: G) -> Self
    where
        G: Fn(usize) -> Option<T> + Send + Sync + 'static,
    {
        self.inverse = Some(Arc::new(from_index));
        self
    }
}

impl<T: Clone, F: Clone> Clone for HashedDomain<T, F> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            to_index: self.to_index.clone(),
            invalid: self.invalid.clone(),
            inverse: self.inverse.clone(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for HashedDomain<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedDomain")
            .field("len", &self.len)
            .field("invalid", &self.invalid)
            .field("invertible", &self.inverse.is_some())
            .finish()
    }
}

impl<T, F> VertexDomain for HashedDomain<T, F>
where
    T: Clone + Eq + fmt::Debug,
    F: Fn(&T) -> usize + Clone,
{
    type Key = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    fn invalid(&self) -> T {
        self.invalid.clone()
    }

    #[inline(always)]
    fn index_of(&self, key: &T) -> usize {
        let index = (self.to_index)(key);
        debug_assert!(index < self.len, "key {key:?} mapped to {index}, outside 0..{}", self.len);
        index
    }

    fn key_of(&self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        self.inverse.as_ref().and_then(|inverse| inverse(index))
    }
}
