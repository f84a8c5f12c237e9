//! Dijkstra's algorithm with lazy deletion.
//!
//! The heap never has entries removed or re-keyed. When a vertex's cost
//! improves, a new entry is pushed and the old one stays behind. An entry
//! popped with a key greater than the vertex's current best cost is stale and
//! is discarded. This invariant is what makes the result correct: each vertex
//! is expanded exactly once, at its final cost. It also bounds the heap at
//! one entry per successful relaxation plus the source.

use super::{infinity, Cost, Edge, SearchResult};
use crate::collections::KeyedPriorityQueue;
use crate::domain::VertexDomain;
use crate::error::{Error, Result};
use crate::trace::search_event;

/// A tentative cost for a vertex, as pushed onto the heap.
#[derive(Debug, Clone)]
struct Visit<K, C> {
    vertex: K,
    cost: C,
}

/// Computes shortest paths from `source` over non-negative edge weights.
///
/// `edges(v)` yields `v`'s outgoing edges; each must have `from == v`. When
/// `target` is given (and is not the domain's invalid key) the search stops
/// as soon as the target is popped with its final cost.
///
/// # Errors
/// - [`Error::NegativeWeight`] if an expanded edge has a cost below zero.
/// - [`Error::CostOverflow`] if a tentative cost does not fit in `C`.
///
/// # Example
///
/// ```rust
/// use waypoint::domain::DenseDomain;
/// use waypoint::search::{dijkstra, Edge};
///
/// let adj: Vec<Vec<Edge<usize>>> = vec![
///     vec![Edge::new(0, 1, 5), Edge::new(0, 2, 2)],
///     vec![Edge::new(1, 3, 1)],
///     vec![Edge::new(2, 1, 1), Edge::new(2, 3, 7)],
///     vec![],
/// ];
/// let domain = DenseDomain::new(4);
/// let result = dijkstra(&domain, 0, None, |&v| adj[v].clone()).unwrap();
///
/// assert_eq!(result.costs().as_slice(), &[0, 3, 2, 4]);
/// assert_eq!(result.path_vertices(&3).unwrap(), vec![0, 2, 1, 3]);
/// ```
pub fn dijkstra<D, C, F, I>(
    domain: &D,
    source: D::Key,
    target: Option<D::Key>,
    mut edges: F,
) -> Result<SearchResult<D, C>>
where
    D: VertexDomain,
    C: Cost,
    F: FnMut(&D::Key) -> I,
    I: IntoIterator<Item = Edge<D::Key, C>>,
{
    let target = target.filter(|t| *t != domain.invalid());
    search_event!(algorithm = "dijkstra", source = ?source, vertices = domain.len(), "search started");

    let mut result = SearchResult::new(domain, source.clone());
    let mut heap = KeyedPriorityQueue::new(|visit: &Visit<D::Key, C>| visit.cost);
    heap.push(Visit {
        vertex: source,
        cost: C::zero(),
    });

    while !heap.is_empty() {
        let (cost, Visit { vertex, .. }) = heap.pop_with_key()?;
        if cost > result.cost(&vertex) {
            result.stats.stale += 1;
            continue;
        }
        result.stats.settled += 1;

        if target.as_ref() == Some(&vertex) {
            search_event!(target = ?vertex, cost = ?cost, "target reached");
            return Ok(result);
        }

        for edge in edges(&vertex) {
            debug_assert!(edge.from == vertex, "edge {:?} expanded from {vertex:?}", edge.from);
            if edge.cost < C::zero() {
                search_event!(from = ?edge.from, to = ?edge.to, "negative edge weight");
                return Err(Error::negative_weight(&edge.from, &edge.to));
            }
            let next_cost = cost
                .checked_add(&edge.cost)
                .filter(|c| *c != infinity())
                .ok_or_else(|| Error::cost_overflow(&edge.from, &edge.to))?;

            if next_cost < result.cost(&edge.to) {
                heap.push(Visit {
                    vertex: edge.to.clone(),
                    cost: next_cost,
                });
                result.improve(edge, next_cost);
            }
        }
    }

    search_event!(stats = ?result.stats, "search finished");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DenseDomain, GridDomain, GridKey, HashedDomain};
    use crate::search::infinity;

    fn sample() -> Vec<Vec<Edge<usize>>> {
        let mut adj = vec![Vec::new(); 4];
        for (from, to, cost) in [(0, 1, 5), (0, 2, 2), (2, 1, 1), (1, 3, 1), (2, 3, 7)] {
            adj[from].push(Edge::new(from, to, cost));
        }
        adj
    }

    #[test]
    fn test_dijkstra_sample_graph() {
        let adj = sample();
        let domain = DenseDomain::new(4);
        let result = dijkstra(&domain, 0, None, |&v| adj[v].clone()).unwrap();

        assert_eq!(result.costs().as_slice(), &[0, 3, 2, 4]);
        assert_eq!(result.path_vertices(&3).unwrap(), vec![0, 2, 1, 3]);
        assert_eq!(
            result.path_edges(&3).unwrap(),
            vec![Edge::new(0, 2, 2), Edge::new(2, 1, 1), Edge::new(1, 3, 1)]
        );
        // 0 -> 1 (5) and 2 -> 3 (7) are superseded before their entries pop.
        assert_eq!(result.stats().stale, 2);
    }

    #[test]
    fn test_dijkstra_stops_at_target() {
        let adj = sample();
        let domain = DenseDomain::new(4);
        let result = dijkstra(&domain, 0, Some(1), |&v| adj[v].clone()).unwrap();

        assert_eq!(result.cost(&1), 3);
        assert_eq!(result.stats().settled, 3);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let domain = DenseDomain::new(2);
        let err = dijkstra(&domain, 0, None, |&v: &usize| {
            (v == 0).then(|| Edge::new(0, 1, -1i64))
        })
        .unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { .. }));
    }

    #[test]
    fn test_overflow_is_rejected() {
        let domain = DenseDomain::new(3);
        let err = dijkstra(&domain, 0, None, |&v: &usize| match v {
            0 => vec![Edge::new(0, 1, u8::MAX - 1)],
            1 => vec![Edge::new(1, 2, 5u8)],
            _ => vec![],
        })
        .unwrap_err();
        assert!(matches!(err, Error::CostOverflow { .. }));
    }

    #[test]
    fn test_cost_equal_to_unreached_is_rejected() {
        // A sum of exactly `max_value()` is indistinguishable from "unreached".
        let domain = DenseDomain::new(2);
        let err = dijkstra(&domain, 0, None, |&v: &usize| (v == 0).then(|| Edge::new(0, 1, u8::MAX))).unwrap_err();
        assert_eq!(
            err,
            Error::CostOverflow {
                from: "0".into(),
                to: "1".into()
            }
        );

        let err = dijkstra(&domain, 0, None, |&v: &usize| (v == 0).then(|| Edge::new(0, 1, i64::MAX))).unwrap_err();
        assert!(matches!(err, Error::CostOverflow { .. }));
    }

    #[test]
    fn test_dijkstra_on_weighted_grid() {
        // Entering a cell costs its digit.
        let cells = ["131", "191", "111"];
        let grid = GridDomain::new(3, 3);
        let weight = |key: GridKey| i64::from(cells[key.row as usize].as_bytes()[key.col as usize] - b'0');

        let start = GridKey::new(0, 0);
        let goal = GridKey::new(2, 2);
        let result = dijkstra(&grid, start, Some(goal), |&cell| {
            grid.orthogonal_neighbors(cell)
                .map(|next| Edge::new(cell, next, weight(next)))
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(result.cost(&goal), 4);
        assert_eq!(result.path_vertices(&goal).unwrap().len(), 5);
    }

    #[test]
    fn test_dijkstra_hashed_keys() {
        let to_index: fn(&&str) -> usize = |name| match *name {
            "home" => 0,
            "shop" => 1,
            "park" => 2,
            "work" => 3,
            _ => 4,
        };
        let domain = HashedDomain::new(5, to_index, "");
        let roads = |from: &&'static str| -> Vec<Edge<&'static str>> {
            match *from {
                "home" => vec![Edge::new("home", "shop", 4), Edge::new("home", "park", 1)],
                "park" => vec![Edge::new("park", "shop", 1), Edge::new("park", "work", 9)],
                "shop" => vec![Edge::new("shop", "work", 2)],
                _ => vec![],
            }
        };

        let result = dijkstra(&domain, "home", None, roads).unwrap();
        assert_eq!(result.cost(&"work"), 4);
        assert_eq!(
            result.path_vertices(&"work").unwrap(),
            vec!["home", "park", "shop", "work"]
        );
        assert_eq!(result.cost(&"nowhere"), infinity::<i64>());
        assert!(result.path_vertices(&"nowhere").is_err());
    }
}
