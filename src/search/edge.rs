//! Weighted directed edges.

use num_traits::One;
use serde::{Deserialize, Serialize};

/// A directed edge `from -> to` with a traversal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<K, C = i64> {
    /// Tail vertex.
    pub from: K,
    /// Head vertex.
    pub to: K,
    /// Traversal cost.
    pub cost: C,
}

impl<K, C> Edge<K, C> {
    /// Creates an edge `from -> to` costing `cost`.
    pub fn new(from: K, to: K, cost: C) -> Self {
        Self { from, to, cost }
    }

    /// The same edge traversed the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}

impl<K, C: One> Edge<K, C> {
    /// Creates an edge of cost one.
    pub fn unit(from: K, to: K) -> Self {
        Self::new(from, to, C::one())
    }
}

impl<K, C> From<(K, K, C)> for Edge<K, C> {
    fn from((from, to, cost): (K, K, C)) -> Self {
        Self::new(from, to, cost)
    }
}

/// How an edge list is interpreted when it is turned into adjacency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Each edge is traversable only from `from` to `to`.
    #[default]
    Directed,
    /// Each edge is also traversable from `to` to `from`.
    Undirected,
}
