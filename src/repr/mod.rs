/*!
# Graph Representation

This module contains the concrete graph data structure backing the search
algorithms.

- [`StaticDigraph`] (Compressed Sparse Row)
  Stores forward and reverse adjacency in flattened arrays with offset
  indices.
  - Memory-efficient for sparse graphs.
  - Good cache locality and iteration speed.
  - Immutable after construction; arc ids are stable and contiguous, so all
    per-arc data lives in plain arrays.

- [`StaticDigraphBuilder`]
  Accumulates arcs with aligned per-arc properties in any order and
  assembles the digraph deterministically.
*/

pub mod builder;
pub mod digraph;

pub use builder::StaticDigraphBuilder;
pub use digraph::StaticDigraph;
