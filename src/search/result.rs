//! Cost and predecessor maps produced by every search, plus path readout.

use super::{infinity, Cost, Edge};
use crate::domain::{VertexDomain, VertexMap};
use crate::error::{Error, Result};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Work counters gathered during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Vertices expanded (neighbor function called).
    pub settled: usize,
    /// Successful relaxations (cost improved, predecessor rewritten).
    pub relaxed: usize,
    /// Queue entries discarded because a cheaper route superseded them.
    pub stale: usize,
}

/// The shortest-path tree rooted at a single source.
///
/// For every reached vertex `v` other than the source, `predecessor(v)` is the
/// edge `u -> v` through which `v` was last improved and
/// `cost(u) + edge.cost == cost(v)`. The source has cost zero and no
/// predecessor. Unreached vertices hold [`infinity`].
pub struct SearchResult<D: VertexDomain, C = i64> {
    pub(super) source: D::Key,
    pub(super) cost: VertexMap<D, C>,
    pub(super) predecessor: VertexMap<D, Option<Edge<D::Key, C>>>,
    pub(super) stats: SearchStats,
}

impl<D: VertexDomain, C: Cost> SearchResult<D, C> {
    /// Fresh maps over `domain`: everything unreached except `source` at zero.
    pub(super) fn new(domain: &D, source: D::Key) -> Self {
        let mut cost = domain.create_map(infinity::<C>());
        cost.set(&source, C::zero());
        Self {
            source,
            cost,
            predecessor: domain.create_map(None),
            stats: SearchStats::default(),
        }
    }

    /// Records that `edge` reaches `edge.to` at `cost`.
    #[inline(always)]
    pub(super) fn improve(&mut self, edge: Edge<D::Key, C>, cost: C) {
        self.cost.set(&edge.to, cost);
        let index_key = edge.to.clone();
        self.predecessor.set(&index_key, Some(edge));
        self.stats.relaxed += 1;
    }

    /// Best known cost of `key`, [`infinity`] if unreached.
    #[inline]
    pub fn cost(&self, key: &D::Key) -> C {
        *self.cost.get(key)
    }

    /// Returns `true` if `key` was reached from the source.
    #[inline]
    pub fn is_connected(&self, key: &D::Key) -> bool {
        self.cost(key) != infinity::<C>()
    }

    /// Number of reached vertices, the source included.
    pub fn reached_count(&self) -> usize {
        self.cost.iter().filter(|&&c| c != infinity::<C>()).count()
    }
}

impl<D: VertexDomain, C> SearchResult<D, C> {
    /// The vertex the search started from.
    pub fn source(&self) -> &D::Key {
        &self.source
    }

    /// The edge `key` was reached through, if any.
    pub fn predecessor(&self, key: &D::Key) -> Option<&Edge<D::Key, C>> {
        self.predecessor.get(key).as_ref()
    }

    /// The vertex `key` was reached from, or the domain's invalid key for the
    /// source and for unreached vertices.
    pub fn predecessor_vertex(&self, key: &D::Key) -> D::Key {
        match self.predecessor(key) {
            Some(edge) => edge.from.clone(),
            None => self.cost.domain().invalid(),
        }
    }

    /// The whole cost map.
    pub fn costs(&self) -> &VertexMap<D, C> {
        &self.cost
    }

    /// The whole predecessor map.
    pub fn predecessors(&self) -> &VertexMap<D, Option<Edge<D::Key, C>>> {
        &self.predecessor
    }

    /// Work counters for this search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The domain the maps are indexed by.
    pub fn domain(&self) -> &D {
        self.cost.domain()
    }

    /// Splits the result into its cost and predecessor maps.
    pub fn into_maps(self) -> (VertexMap<D, C>, VertexMap<D, Option<Edge<D::Key, C>>>) {
        (self.cost, self.predecessor)
    }
}

impl<D: VertexDomain, C: Cost> SearchResult<D, C> {
    /// The edges of the recorded shortest path from the source to `target`,
    /// in travel order. Empty when `target` is the source.
    ///
    /// # Errors
    /// Returns [`Error::Unreachable`] if `target` was never reached.
    pub fn path_edges(&self, target: &D::Key) -> Result<Vec<Edge<D::Key, C>>> {
        if !self.is_connected(target) {
            return Err(Error::unreachable(target));
        }

        let mut stack = Vec::new();
        let mut current = target;
        while *current != self.source {
            let Some(edge) = self.predecessor(current) else {
                break;
            };
            stack.push(edge.clone());
            current = &edge.from;
        }
        stack.reverse();
        Ok(stack)
    }

    /// The vertices of the recorded shortest path from the source to
    /// `target`, both ends included.
    ///
    /// # Errors
    /// Returns [`Error::Unreachable`] if `target` was never reached.
    pub fn path_vertices(&self, target: &D::Key) -> Result<Vec<D::Key>> {
        let edges = self.path_edges(target)?;
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(self.source.clone());
        vertices.extend(edges.into_iter().map(|edge| edge.to));
        Ok(vertices)
    }
}

impl<D: VertexDomain, C: Clone> Clone for SearchResult<D, C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            cost: self.cost.clone(),
            predecessor: self.predecessor.clone(),
            stats: self.stats,
        }
    }
}

impl<D: VertexDomain, C: PartialEq> PartialEq for SearchResult<D, C> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.cost == other.cost
            && self.predecessor == other.predecessor
    }
}

impl<D: VertexDomain, C: fmt::Debug> fmt::Debug for SearchResult<D, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResult")
            .field("source", &self.source)
            .field("cost", &self.cost)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
