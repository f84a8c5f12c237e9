//! Single-source shortest-path searches over any [`VertexDomain`].
//!
//! Three algorithms share one result type and one bookkeeping contract:
//! - [`bfs`]: unit weights, FIFO queue
//! - [`dijkstra`]: non-negative weights, key-cached binary heap with lazy deletion
//! - [`bounded_search`]: integer weights in `[0, m)`, `m` FIFO buckets
//!   (0-1 BFS when `m == 2`)
//!
//! Edges are never materialized up front: every search pulls them from a
//! caller-supplied expansion function, called once per settled vertex. An
//! [`AdjacencyGraph`] can be used instead when the edges come from a list.
//!
//! [`VertexDomain`]: crate::domain::VertexDomain

pub mod bfs;
pub mod bounded;
pub mod dijkstra;
pub mod edge;
pub mod graph;
pub mod multi;
pub mod result;

pub use bfs::bfs;
pub use bounded::bounded_search;
pub use dijkstra::dijkstra;
pub use edge::{Direction, Edge};
pub use graph::AdjacencyGraph;
pub use multi::{dijkstra_each, min_costs};
pub use result::{SearchResult, SearchStats};

use core::fmt::Debug;
use num_traits::{Bounded, CheckedAdd, One, Zero};

/// Numeric types usable as path costs.
///
/// `C::max_value()` stands for "unreached".
pub trait Cost: Copy + Ord + Debug + Zero + One + Bounded + CheckedAdd {}

impl<T> Cost for T where T: Copy + Ord + Debug + Zero + One + Bounded + CheckedAdd {}

/// The "unreached" cost.
#[inline(always)]
pub fn infinity<C: Cost>() -> C {
    C::max_value()
}
