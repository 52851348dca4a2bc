/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Arcs carry lengths through external, user-chosen property maps
- **directed** : Every arc has an orientation, and both directions are traversable

# Representation

We represent **vertices** as `u32` in the range `0..n` if `n` is the number of vertices in the graph.
As most common graphs do not exceed `2^32` vertices, this should normally suffice and save space as compared to `u64/usize`.
**Arcs** are likewise dense `u32` ids in the range `0..m`, assigned in source-major order,
so all per-arc data (lengths, flags, capacities) lives in plain arrays next to the graph.

### Available Representations

See the [`repr`] module:

- [`StaticDigraph`](crate::repr::StaticDigraph): an immutable compressed-sparse-row digraph
  storing forward and reverse adjacency, built directly from sorted arc arrays or through
  [`StaticDigraphBuilder`](crate::repr::StaticDigraphBuilder) from an unordered arc stream.

The search algorithms are generic over the traits in [`ops`], so further backends can be
plugged in as long as they expose contiguous vertex and arc ids.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
either the *Builder* / *Setter* pattern before driving the configured search on a provided
graph. Alternatively, the most commonly used configurations are available via the
[`ShortestPaths`](crate::algo::ShortestPaths) trait on graphs itself, making them usable
without configuring the algorithm beforehand.

Distance arithmetic is pluggable through the [`Semiring`](crate::semiring::Semiring)
abstraction; the default instance computes non-negative shortest paths with saturating
addition.

# Usage

```
use wgraphs::prelude::*;

let mut builder = StaticDigraphBuilder::new(4);
builder.add_arc(0, 1, 1u32);
builder.add_arc(1, 2, 2);
builder.add_arc(0, 2, 5);
builder.add_arc(2, 3, 1);
let (graph, lengths) = builder.build();

// Stream single-source shortest paths in non-decreasing distance order.
let mut search = graph.dijkstra(&lengths);
search.add_source(0);
assert_eq!(search.collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 3), (3, 4)]);

// Or answer a point-to-point query with a bidirectional search.
let mut search = graph.bidirectional_dijkstra(&lengths, 0, 3);
assert_eq!(search.run(), 4);
assert!(search.path_found());
```

# When to use

You should only use this library if the following apply:
- Your graphs are static with non-negative arc lengths
- You want to work in *Rust*
- You require fast single-source or point-to-point shortest paths
- Performance is important

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod algo;
pub mod arc;
pub mod ops;
pub mod repr;
pub mod semiring;
pub mod utils;
pub mod vertex;

#[cfg(test)]
pub(crate) mod testing;

/// `wgraphs::prelude` includes definitions for vertices and arcs, all graph operation
/// traits, the implemented representations as well as the search algorithms and their
/// supporting data structures.
pub mod prelude {
    pub use super::{algo::*, arc::*, ops::*, repr::*, semiring::*, utils::*, vertex::*};
}
