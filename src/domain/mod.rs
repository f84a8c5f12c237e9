//! Vertex domains and the per-vertex storage built on them.
//!
//! A domain decides what a vertex key looks like and how it is flattened into
//! a dense index in `[0, len)`. Three domains are provided:
//! - `dense`: the key already is the index
//! - `grid`: `(row, col)` cells of an `H x W` rectangle, row-major
//! - `hashed`: any key type, flattened by a caller-supplied injective function
//!
//! Algorithms are generic over [`VertexDomain`] and only ever touch vertices
//! through [`VertexMap`] and [`ListMap`], so one implementation serves every
//! domain and is monomorphized per domain.

pub mod dense;
pub mod grid;
pub mod hashed;
pub mod list_map;
pub mod map;

pub use dense::DenseDomain;
pub use grid::{GridDomain, GridKey};
pub use hashed::HashedDomain;
pub use list_map::ListMap;
pub use map::VertexMap;

use core::fmt::Debug;

/// A vertex key space flattened onto `[0, len)`.
///
/// Implementations must be cheap to clone: every map created from a domain
/// keeps its own copy of the indexing strategy.
pub trait VertexDomain: Clone {
    /// The key identifying one vertex.
    type Key: Clone + Eq + Debug;

    /// Number of addressable vertices.
    fn len(&self) -> usize;

    /// Returns `true` if the domain has no vertices.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The sentinel key, distinct from every real key.
    fn invalid(&self) -> Self::Key;

    /// Flattens `key` to its dense index.
    ///
    /// Keys outside the domain are a caller error; the index is not
    /// range-checked here and an out-of-range index panics on first access.
    fn index_of(&self, key: &Self::Key) -> usize;

    /// Inverse of [`index_of`](Self::index_of), when the domain can provide it.
    fn key_of(&self, index: usize) -> Option<Self::Key>;

    /// Creates a map holding `default` for every vertex.
    fn create_map<V: Clone>(&self, default: V) -> VertexMap<Self, V> {
        VertexMap::new(self.clone(), default)
    }

    /// Creates a list map with an empty sequence for every vertex.
    fn create_list_map<V>(&self) -> ListMap<Self, V> {
        ListMap::new(self.clone())
    }
}
