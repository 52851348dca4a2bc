/*!
# Vertex Representation

This module defines the representation of vertices in graphs.

- Vertices are numbered `0` to `n - 1` if `n` is the number of vertices in the graph.
- We represent them as `u32` as most common graphs do not exceed `2^32` vertices,
  which saves space compared to `u64/usize`, especially in the dense per-vertex
  maps the search algorithms allocate.
*/

/// A vertex of a graph, represented as a dense 0-indexed id.
pub type Vertex = u32;

/// Type alias representing the number of vertices.
///
/// Limited to `u32` (maximum `2^32 - 1` vertices).
/// If not big enough, change manually to `u64` for very large graphs.
pub type NumVertices = Vertex;
