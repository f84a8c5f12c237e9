//! Standalone collections backing the searches.
//!
//! - `priority_queue`: binary heaps, plain and key-cached
//! - `disjoint_set`: union-find, plain and aggregate-carrying

pub mod disjoint_set;
pub mod priority_queue;

pub use disjoint_set::{DisjointSet, ValuedDisjointSet};
pub use priority_queue::{KeyedPriorityQueue, Order, PriorityQueue};
