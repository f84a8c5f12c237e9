//! # `waypoint` - Shortest Paths over Pluggable Vertex Domains
//!
//! One implementation of breadth-first search, Dijkstra and a bounded-weight
//! bucket search that runs unmodified whether vertices are dense integers,
//! cells of a grid, or arbitrary keys mapped onto a dense range. A union-find
//! structure covers pure connectivity and grouping queries.
//!
//! ## Architecture
//!
//! Stratified, leaves first:
//!
//! 1. **Vertex domains** (`domain`): a [`VertexDomain`] flattens keys onto
//!    `[0, n)`; [`VertexMap`] and [`ListMap`] store per-vertex data on top of it.
//!    Dense, grid and hashed domains are provided.
//! 2. **Collections** (`collections`): a 1-indexed binary heap
//!    ([`PriorityQueue`]), its key-caching variant ([`KeyedPriorityQueue`]),
//!    and union-find ([`DisjointSet`], [`ValuedDisjointSet`]).
//! 3. **Searches** (`search`): [`bfs`], [`dijkstra`] and [`bounded_search`],
//!    generic over the domain and over a caller-supplied neighbor function.
//!    All three return a [`SearchResult`] holding the shortest-path tree.
//!
//! ## Invariants
//!
//! - For every reached vertex `v` other than the source,
//!   `cost(pred(v).from) + pred(v).cost == cost(v)`.
//! - A heap or bucket entry popped with a cost above its vertex's current best
//!   is stale and is discarded (lazy deletion).
//! - Every structure is owned by one computation; nothing is shared between
//!   searches.
//!
//! ## Example
//!
//! ```rust
//! use waypoint::domain::DenseDomain;
//! use waypoint::search::{AdjacencyGraph, Direction, Edge};
//!
//! let domain = DenseDomain::new(4);
//! let graph: AdjacencyGraph<_> = AdjacencyGraph::from_edges(
//!     &domain,
//!     Direction::Directed,
//!     [
//!         Edge::new(0, 1, 5),
//!         Edge::new(0, 2, 2),
//!         Edge::new(2, 1, 1),
//!         Edge::new(1, 3, 1),
//!         Edge::new(2, 3, 7),
//!     ],
//! );
//!
//! let result = graph.dijkstra(0, None)?;
//! assert_eq!(result.costs().as_slice(), &[0, 3, 2, 4]);
//! assert_eq!(result.path_vertices(&3)?, vec![0, 2, 1, 3]);
//! # Ok::<(), waypoint::Error>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod collections;
pub mod domain;
pub mod error;
pub mod search;

pub use collections::{DisjointSet, KeyedPriorityQueue, Order, PriorityQueue, ValuedDisjointSet};
pub use domain::{DenseDomain, GridDomain, GridKey, HashedDomain, ListMap, VertexDomain, VertexMap};
pub use error::{Error, Result};
pub use search::{bfs, bounded_search, dijkstra, AdjacencyGraph, Direction, Edge, SearchResult};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Grid keys stay two machine words.
    assert!(mem::size_of::<GridKey>() == 2 * mem::size_of::<isize>());

    // The dense domain is a bare length.
    assert!(mem::size_of::<DenseDomain>() == mem::size_of::<usize>());
};
