/*!
# Arc Representation

This module defines the representation of arcs (directed edges) in graphs.

- An arc connects a **source** vertex to a **target** vertex.
- Arcs are numbered `0` to `m - 1` if `m` is the number of arcs in the graph,
  assigned in source-major order by the static representations.
- Arc ids are the keys of arc property maps such as length maps, so they are
  kept as compact `u32` values like vertices.
*/

/// An arc of a graph, represented as a dense 0-indexed id.
///
/// The arc id alone does not encode its endpoints; those are looked up
/// through the graph via [`source`](crate::ops::ReverseIncidenceList::source)
/// and [`target`](crate::ops::IncidenceList::target).
pub type Arc = u32;

/// Type alias representing the number of arcs.
///
/// Limited to `u32` (maximum `2^32 - 1` arcs).
/// If not big enough, change manually to `u64` for very large graphs.
pub type NumArcs = Arc;
