//! Independent searches from several sources.
//!
//! Each source gets its own cost and predecessor maps; nothing is shared
//! between runs. With the `parallel` feature the runs fan out over rayon.

use super::{dijkstra, Cost, Edge, SearchResult};
use crate::domain::{VertexDomain, VertexMap};
use crate::error::Result;

/// Runs [`dijkstra`] to all vertices from every entry of `sources`.
///
/// Results come back in the order of `sources`.
///
/// # Errors
/// Returns the first error any run reports.
#[cfg(not(feature = "parallel"))]
pub fn dijkstra_each<D, C, F, I>(domain: &D, sources: &[D::Key], edges: F) -> Result<Vec<SearchResult<D, C>>>
where
    D: VertexDomain,
    C: Cost,
    F: Fn(&D::Key) -> I,
    I: IntoIterator<Item = Edge<D::Key, C>>,
{
    sources
        .iter()
        .map(|source| dijkstra(domain, source.clone(), None, &edges))
        .collect()
}

/// Runs [`dijkstra`] to all vertices from every entry of `sources`, in parallel.
///
/// Results come back in the order of `sources`.
///
/// # Errors
/// Returns an error reported by one of the runs.
#[cfg(feature = "parallel")]
pub fn dijkstra_each<D, C, F, I>(domain: &D, sources: &[D::Key], edges: F) -> Result<Vec<SearchResult<D, C>>>
where
    D: VertexDomain + Sync + Send,
    D::Key: Sync + Send,
    C: Cost + Send,
    F: Fn(&D::Key) -> I + Sync,
    I: IntoIterator<Item = Edge<D::Key, C>>,
{
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|source| dijkstra(domain, source.clone(), None, &edges))
        .collect()
}

/// Per-vertex minimum cost over several results on the same domain.
///
/// Returns `None` when `results` is empty.
pub fn min_costs<D, C>(results: &[SearchResult<D, C>]) -> Option<VertexMap<D, C>>
where
    D: VertexDomain,
    C: Cost,
{
    let (first, rest) = results.split_first()?;
    let mut best = first.costs().clone();
    for result in rest {
        for (slot, &cost) in best.iter_mut().zip(result.costs().iter()) {
            if cost < *slot {
                *slot = cost;
            }
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DenseDomain;

    fn path_graph(v: usize) -> Vec<Edge<usize>> {
        // Undirected path 0 - 1 - 2 - 3 - 4 with unit costs.
        let mut out = Vec::new();
        if v > 0 {
            out.push(Edge::new(v, v - 1, 1));
        }
        if v < 4 {
            out.push(Edge::new(v, v + 1, 1));
        }
        out
    }

    #[test]
    fn test_each_source_gets_its_own_result() {
        let domain = DenseDomain::new(5);
        let results = dijkstra_each(&domain, &[0, 4], |&v: &usize| path_graph(v)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].costs().as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(results[1].costs().as_slice(), &[4, 3, 2, 1, 0]);
        assert_eq!(*results[1].source(), 4);
    }

    #[test]
    fn test_min_costs_combines_sources() {
        let domain = DenseDomain::new(5);
        let results = dijkstra_each(&domain, &[0, 4], |&v: &usize| path_graph(v)).unwrap();

        let nearest = min_costs(&results).unwrap();
        assert_eq!(nearest.as_slice(), &[0, 1, 2, 1, 0]);
        assert!(min_costs::<DenseDomain, i64>(&[]).is_none());
    }
}
