use waypoint::domain::{DenseDomain, GridDomain, GridKey, HashedDomain, VertexDomain};
use waypoint::search::{bfs, dijkstra, infinity, AdjacencyGraph, Direction, Edge};
use waypoint::{Error, ValuedDisjointSet};

#[test]
fn grid_bfs_corner_to_corner() -> anyhow::Result<()> {
    let grid = GridDomain::new(3, 3);
    let start = GridKey::new(0, 0);
    let goal = GridKey::new(2, 2);

    let result = bfs(&grid, start, Some(goal), |&cell| {
        grid.orthogonal_neighbors(cell).collect::<Vec<_>>()
    });

    assert_eq!(result.cost(&goal), 4);
    let path = result.path_vertices(&goal)?;
    assert_eq!(path.len(), 5);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert_eq!((a.row - b.row).abs() + (a.col - b.col).abs(), 1);
    }
    Ok(())
}

#[test]
fn dense_dijkstra_prefers_cheaper_detour() -> anyhow::Result<()> {
    let domain = DenseDomain::new(4);
    let graph: AdjacencyGraph<_> = AdjacencyGraph::from_edges(
        &domain,
        Direction::Directed,
        [
            Edge::new(0, 1, 5),
            Edge::new(0, 2, 2),
            Edge::new(2, 1, 1),
            Edge::new(1, 3, 1),
            Edge::new(2, 3, 7),
        ],
    );

    let result = graph.dijkstra(0, None)?;
    assert_eq!(result.costs().as_slice(), &[0, 3, 2, 4]);
    assert_eq!(result.path_vertices(&3)?, vec![0, 2, 1, 3]);

    // Costs along the path never decrease.
    let along: Vec<i64> = result.path_vertices(&3)?.iter().map(|v| result.cost(v)).collect();
    assert!(along.windows(2).all(|w| w[0] <= w[1]));
    Ok(())
}

#[test]
fn union_find_with_sum_aggregate() {
    let mut sets = ValuedDisjointSet::with_values(vec![1, 2, 3, 4, 5], |a: &i64, b: &i64| a + b);
    sets.union(0, 1);
    sets.union(2, 3);

    assert!(sets.are_same(0, 1));
    assert!(!sets.are_same(0, 2));
    assert_eq!(sets.groups_count(), 3);

    let representative = sets.find(1);
    assert_eq!(*sets.value_of_representative(representative), 3);
    assert_eq!(sets.groups(), vec![vec![0, 1], vec![2, 3], vec![4]]);
}

#[test]
fn isolated_vertex_is_unreachable() {
    let domain = DenseDomain::new(3);
    let graph: AdjacencyGraph<_> =
        AdjacencyGraph::from_edges(&domain, Direction::Undirected, [Edge::new(0, 1, 1)]);

    let by_bfs = graph.bfs(0, None);
    let by_dijkstra = graph.dijkstra(0, None).expect("non-negative weights");

    for result in [&by_bfs, &by_dijkstra] {
        assert_eq!(result.cost(&2), infinity::<i64>());
        assert!(!result.is_connected(&2));
        assert!(result.predecessor(&2).is_none());
        assert_eq!(result.predecessor_vertex(&2), domain.invalid());
        assert!(matches!(result.path_vertices(&2), Err(Error::Unreachable { .. })));
        assert!(result.path_edges(&2).is_err());
    }
}

#[test]
fn hashed_domain_paths_read_back_as_keys() -> anyhow::Result<()> {
    // Words of length 3 over {a, b}; neighbors differ in one letter.
    let to_index: fn(&String) -> usize = |word| {
        word.bytes().fold(0, |acc, b| acc * 2 + usize::from(b == b'b'))
    };
    let domain = HashedDomain::new(8, to_index, String::new()).with_inverse(|i| {
        Some((0..3).rev().map(|bit| if i >> bit & 1 == 1 { 'b' } else { 'a' }).collect())
    });

    let flip = |word: &String| -> Vec<String> {
        (0..word.len())
            .map(|i| {
                let mut chars: Vec<char> = word.chars().collect();
                chars[i] = if chars[i] == 'a' { 'b' } else { 'a' };
                chars.into_iter().collect()
            })
            .collect()
    };

    let result = bfs(&domain, "aaa".to_string(), None, flip);
    assert_eq!(result.cost(&"bbb".to_string()), 3);
    assert_eq!(result.reached_count(), 8);

    let path = result.path_vertices(&"bab".to_string())?;
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], "aaa");
    assert_eq!(path[2], "bab");

    // Cost map entries can be named through the domain's inverse.
    let farthest: Vec<String> = result
        .costs()
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == 3)
        .filter_map(|(i, _)| domain.key_of(i))
        .collect();
    assert_eq!(farthest, vec!["bbb".to_string()]);
    Ok(())
}

#[test]
fn dijkstra_rejects_negative_weight() {
    let domain = DenseDomain::new(2);
    let result = dijkstra(&domain, 0, None, |&v: &usize| {
        if v == 0 {
            vec![Edge::new(0, 1, -3i64)]
        } else {
            vec![]
        }
    });
    assert_eq!(
        result.unwrap_err(),
        Error::NegativeWeight {
            from: "0".into(),
            to: "1".into()
        }
    );
}
