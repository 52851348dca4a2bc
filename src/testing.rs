//! Shared helpers for the unit tests: seeded random weighted digraphs and a
//! naive shortest-path reference to compare the search algorithms against.

use rand::Rng;

use crate::{
    repr::{StaticDigraph, StaticDigraphBuilder},
    utils::ArcMap,
    vertex::*,
};

/// Creates `m` random arcs over the vertices `0..n` with lengths in
/// `1..=max_len`. Parallel arcs and self-loops may occur.
pub fn random_weighted_arcs<R: Rng>(
    rng: &mut R,
    n: NumVertices,
    m: usize,
    max_len: u32,
) -> Vec<(Vertex, Vertex, u32)> {
    (0..m)
        .map(|_| {
            (
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(1..=max_len),
            )
        })
        .collect()
}

/// Builds a digraph plus its length map from a weighted arc list.
pub fn build_digraph(
    n: NumVertices,
    arcs: &[(Vertex, Vertex, u32)],
) -> (StaticDigraph, ArcMap<u32>) {
    let mut builder = StaticDigraphBuilder::new(n);
    for &(u, v, w) in arcs {
        builder.add_arc(u, v, w);
    }
    builder.build()
}

/// Bellman-Ford style reference distances from the given sources.
/// Unreachable vertices keep `u32::MAX`.
pub fn reference_distances(
    n: NumVertices,
    arcs: &[(Vertex, Vertex, u32)],
    sources: &[Vertex],
) -> Vec<u32> {
    let mut dist = vec![u32::MAX; n as usize];
    for &s in sources {
        dist[s as usize] = 0;
    }

    loop {
        let mut improved = false;
        for &(u, v, w) in arcs {
            let new_dist = dist[u as usize].saturating_add(w);
            if new_dist < dist[v as usize] {
                dist[v as usize] = new_dist;
                improved = true;
            }
        }
        if !improved {
            return dist;
        }
    }
}

/// The classic six-vertex example graph with every arc mirrored, so that it
/// behaves like a weighted undirected graph.
///
/// Distances from vertex `0`: `[0, 7, 9, 21, 20, 11]`.
pub fn demo_graph() -> (StaticDigraph, ArcMap<u32>) {
    let arcs = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 12),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ];

    let mut builder = StaticDigraphBuilder::new(6);
    for (u, v, w) in arcs {
        builder.add_arc(u, v, w);
        builder.add_arc(v, u, w);
    }
    builder.build()
}
