//! Breadth-first search for unit-weight graphs.

use super::{Edge, SearchResult};
use crate::domain::VertexDomain;
use crate::trace::search_event;
use std::collections::VecDeque;

/// Computes unit-weight shortest paths from `source`.
///
/// `neighbors(v)` yields the heads of `v`'s outgoing edges. When `target` is
/// given (and is not the domain's invalid key) the search stops as soon as
/// the target's cost is set; costs of vertices not yet settled at that point
/// are upper bounds only.
///
/// # Example
///
/// ```rust
/// use waypoint::domain::{GridDomain, GridKey};
/// use waypoint::search::bfs;
///
/// let grid = GridDomain::new(3, 3);
/// let goal = GridKey::new(2, 2);
/// let result = bfs(&grid, GridKey::new(0, 0), Some(goal), |&cell| {
///     grid.orthogonal_neighbors(cell).collect::<Vec<_>>()
/// });
///
/// assert_eq!(result.cost(&goal), 4);
/// assert_eq!(result.path_vertices(&goal).unwrap().len(), 5);
/// ```
pub fn bfs<D, F, I>(
    domain: &D,
    source: D::Key,
    target: Option<D::Key>,
    mut neighbors: F,
) -> SearchResult<D>
where
    D: VertexDomain,
    F: FnMut(&D::Key) -> I,
    I: IntoIterator<Item = D::Key>,
{
    let target = target.filter(|t| *t != domain.invalid());
    search_event!(algorithm = "bfs", source = ?source, vertices = domain.len(), "search started");

    let mut result = SearchResult::new(domain, source.clone());
    if target.as_ref() == Some(&source) {
        return result;
    }

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(vertex) = queue.pop_front() {
        result.stats.settled += 1;
        let next_cost = result.cost(&vertex) + 1;

        for next in neighbors(&vertex) {
            if next_cost >= result.cost(&next) {
                continue;
            }
            result.improve(Edge::new(vertex.clone(), next.clone(), 1), next_cost);

            if target.as_ref() == Some(&next) {
                search_event!(target = ?next, cost = next_cost, "target reached");
                return result;
            }
            queue.push_back(next);
        }
    }

    search_event!(stats = ?result.stats, "search finished");
    result
}
