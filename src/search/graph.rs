//! `AdjacencyGraph`: searches bound to a materialized edge list.

use super::{bfs, bounded_search, dijkstra, Cost, Direction, Edge, SearchResult};
use crate::domain::{ListMap, VertexDomain};
use crate::error::Result;
use core::fmt;
use num_traits::ToPrimitive;

/// Outgoing edges of every vertex, accumulated from an edge list.
///
/// Undirected graphs store each edge in both directions, so every search
/// below sees a plain directed adjacency.
pub struct AdjacencyGraph<D: VertexDomain, C = i64> {
    adjacency: ListMap<D, Edge<D::Key, C>>,
    direction: Direction,
    edge_count: usize,
}

impl<D: VertexDomain, C: Cost> AdjacencyGraph<D, C> {
    /// Creates a graph over `domain` with no edges.
    pub fn new(domain: &D, direction: Direction) -> Self {
        Self {
            adjacency: domain.create_list_map(),
            direction,
            edge_count: 0,
        }
    }

    /// Creates a graph over `domain` holding `edges`.
    pub fn from_edges<E>(domain: &D, direction: Direction, edges: E) -> Self
    where
        E: IntoIterator,
        E::Item: Into<Edge<D::Key, C>>,
    {
        let mut graph = Self::new(domain, direction);
        for edge in edges {
            graph.add_edge(edge.into());
        }
        graph
    }

    /// Adds `edge`, plus its reverse when the graph is undirected.
    pub fn add_edge(&mut self, edge: Edge<D::Key, C>) {
        if self.direction == Direction::Undirected {
            let back = Edge::new(edge.to.clone(), edge.from.clone(), edge.cost);
            self.adjacency.add(&edge.to, back);
        }
        let from = edge.from.clone();
        self.adjacency.add(&from, edge);
        self.edge_count += 1;
    }

    /// Outgoing edges of `key`, in insertion order.
    pub fn neighbors(&self, key: &D::Key) -> &[Edge<D::Key, C>] {
        self.adjacency.get(key)
    }

    /// Number of edges added (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// How added edges are interpreted.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The vertex domain.
    pub fn domain(&self) -> &D {
        self.adjacency.domain()
    }

    /// Unit-weight search; edge costs are ignored.
    pub fn bfs(&self, source: D::Key, target: Option<D::Key>) -> SearchResult<D> {
        bfs(self.domain(), source, target, |v| {
            self.adjacency.get(v).iter().map(|edge| edge.to.clone())
        })
    }

    /// Dijkstra over the stored edge costs.
    ///
    /// # Errors
    /// See [`dijkstra`](super::dijkstra).
    pub fn dijkstra(&self, source: D::Key, target: Option<D::Key>) -> Result<SearchResult<D, C>> {
        dijkstra(self.domain(), source, target, |v| self.adjacency.get(v).iter().cloned())
    }
}

impl<D: VertexDomain, C: Cost + ToPrimitive> AdjacencyGraph<D, C> {
    /// Bucket search over the stored edge costs, which must lie in `[0, buckets)`.
    ///
    /// # Errors
    /// See [`bounded_search`](super::bounded_search).
    pub fn bounded_search(
        &self,
        source: D::Key,
        target: Option<D::Key>,
        buckets: usize,
    ) -> Result<SearchResult<D, C>> {
        bounded_search(self.domain(), source, target, buckets, |v| {
            self.adjacency.get(v).iter().cloned()
        })
    }
}

impl<D: VertexDomain, C: fmt::Debug> fmt::Debug for AdjacencyGraph<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("direction", &self.direction)
            .field("edge_count", &self.edge_count)
            .field("adjacency", &self.adjacency)
            .finish()
    }
}
