//! Bucket search for small integer weights (0-1 BFS when `buckets == 2`).
//!
//! Weights must lie in `[0, m)`. Entries are kept in `m` FIFO buckets indexed
//! by `cost mod m`. A counter `c` walks upward from zero and bucket `c mod m`
//! is drained completely before `c` advances. Every entry pushed while
//! draining `c` has cost in `[c, c + m)`, so those costs map to distinct
//! buckets and bucket `c mod m` only ever holds entries of cost exactly `c`.
//! As with Dijkstra, an entry whose vertex has since been improved below `c`
//! is stale and discarded.

use super::{infinity, Cost, Edge, SearchResult};
use crate::domain::VertexDomain;
use crate::error::{Error, Result};
use crate::trace::search_event;
use num_traits::ToPrimitive;
use std::collections::VecDeque;

/// Computes shortest paths from `source` over integer weights in `[0, buckets)`.
///
/// Equivalent to [`dijkstra`](super::dijkstra) on such graphs, in
/// O(V + E + max cost) time and without a heap.
///
/// # Errors
/// - [`Error::InvalidBucketCount`] if `buckets == 0`.
/// - [`Error::WeightOutOfRange`] if an expanded edge weight is outside `[0, buckets)`.
/// - [`Error::CostOverflow`] if a tentative cost does not fit in `C`.
pub fn bounded_search<D, C, F, I>(
    domain: &D,
    source: D::Key,
    target: Option<D::Key>,
    buckets: usize,
    mut edges: F,
) -> Result<SearchResult<D, C>>
where
    D: VertexDomain,
    C: Cost + ToPrimitive,
    F: FnMut(&D::Key) -> I,
    I: IntoIterator<Item = Edge<D::Key, C>>,
{
    if buckets == 0 {
        return Err(Error::InvalidBucketCount);
    }
    let target = target.filter(|t| *t != domain.invalid());
    search_event!(algorithm = "bounded", source = ?source, buckets, vertices = domain.len(), "search started");

    let mut result = SearchResult::new(domain, source.clone());
    let mut queues: Vec<VecDeque<D::Key>> = (0..buckets).map(|_| VecDeque::new()).collect();
    queues[0].push_back(source);
    let mut pending = 1usize;

    let mut current = C::zero();
    let mut slot = 0usize;

    while pending > 0 {
        while let Some(vertex) = queues[slot].pop_front() {
            pending -= 1;
            if result.cost(&vertex) < current {
                result.stats.stale += 1;
                continue;
            }
            result.stats.settled += 1;

            if target.as_ref() == Some(&vertex) {
                search_event!(target = ?vertex, cost = ?current, "target reached");
                return Ok(result);
            }

            for edge in edges(&vertex) {
                debug_assert!(edge.from == vertex, "edge {:?} expanded from {vertex:?}", edge.from);
                let weight = match edge.cost.to_usize() {
                    Some(w) if edge.cost >= C::zero() && w < buckets => w,
                    _ => {
                        search_event!(from = ?edge.from, to = ?edge.to, buckets, "weight out of range");
                        return Err(Error::weight_out_of_range(&edge.from, &edge.to, buckets));
                    }
                };
                let next_cost = current
                    .checked_add(&edge.cost)
                    .filter(|c| *c != infinity())
                    .ok_or_else(|| Error::cost_overflow(&edge.from, &edge.to))?;

                if next_cost < result.cost(&edge.to) {
                    queues[(slot + weight) % buckets].push_back(edge.to.clone());
                    pending += 1;
                    result.improve(edge, next_cost);
                }
            }
        }

        if pending > 0 {
            current = current + C::one();
            slot = (slot + 1) % buckets;
        }
    }

    search_event!(stats = ?result.stats, "search finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DenseDomain, GridDomain, GridKey};
    use crate::search::dijkstra;

    #[test]
    fn test_zero_one_bfs() {
        // Every vertex is reachable through zero-weight edges only.
        let adj: Vec<Vec<Edge<usize>>> = vec![
            vec![Edge::new(0, 1, 0), Edge::new(0, 2, 1), Edge::new(0, 3, 1)],
            vec![Edge::new(1, 2, 1), Edge::new(1, 3, 0)],
            vec![],
            vec![Edge::new(3, 2, 0)],
        ];
        let domain = DenseDomain::new(4);
        let result = bounded_search(&domain, 0, None, 2, |&v| adj[v].clone()).unwrap();

        assert_eq!(result.costs().as_slice(), &[0, 0, 0, 0]);
        assert_eq!(result.path_vertices(&2).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_matches_dijkstra_on_small_weights() {
        // Cell weights 0..=3 on a 4x5 grid, m = 4.
        let grid = GridDomain::new(4, 5);
        let weight = |key: GridKey| ((key.row * 7 + key.col * 3) % 4) as i64;
        let expand = |cell: &GridKey| {
            grid.orthogonal_neighbors(*cell)
                .map(|next| Edge::new(*cell, next, weight(next)))
                .collect::<Vec<_>>()
        };

        let start = GridKey::new(0, 0);
        let bucketed = bounded_search(&grid, start, None, 4, expand).unwrap();
        let reference = dijkstra(&grid, start, None, expand).unwrap();
        assert_eq!(bucketed.costs(), reference.costs());
    }

    #[test]
    fn test_stops_at_target() {
        let domain = DenseDomain::new(5);
        let chain = |&v: &usize| (v + 1 < 5).then(|| Edge::new(v, v + 1, 1i64));
        let result = bounded_search(&domain, 0, Some(2), 2, chain).unwrap();
        assert_eq!(result.cost(&2), 2);
        assert!(!result.is_connected(&4));
    }

    #[test]
    fn test_rejects_weights_outside_range() {
        let domain = DenseDomain::new(2);
        let too_heavy = |&v: &usize| (v == 0).then(|| Edge::new(0, 1, 2i64));
        let err = bounded_search(&domain, 0, None, 2, too_heavy).unwrap_err();
        assert_eq!(
            err,
            Error::WeightOutOfRange {
                from: "0".into(),
                to: "1".into(),
                limit: 2
            }
        );

        let negative = |&v: &usize| (v == 0).then(|| Edge::new(0, 1, -1i64));
        let err = bounded_search(&domain, 0, None, 2, negative).unwrap_err();
        assert!(matches!(err, Error::WeightOutOfRange { .. }));

        let err = bounded_search(&domain, 0, None, 0, too_heavy).unwrap_err();
        assert_eq!(err, Error::InvalidBucketCount);
    }

    #[test]
    fn test_cost_equal_to_unreached_is_rejected() {
        let domain = DenseDomain::new(2);
        let heaviest = |&v: &usize| (v == 0).then(|| Edge::new(0, 1, u8::MAX));
        let err = bounded_search(&domain, 0, None, 300, heaviest).unwrap_err();
        assert!(matches!(err, Error::CostOverflow { .. }));
    }
}
