/*!
# Search Algorithms

Shortest-path searches over weighted digraphs:

- [`DijkstraSearch`]: forward single-source shortest paths, usable as a lazy
  iterator over settled `(vertex, distance)` pairs.
- [`BidirectionalDijkstra`]: point-to-point shortest path via simultaneous
  forward and reverse searches meeting in the middle.

Both are configurable structs in the builder/setter style: construct them
with a borrowed graph and length mapping, add sources/targets, then drive
them. Optional bookkeeping (predecessors, distances, path retrieval) is
selected through type parameters so that disabled features occupy no memory
and their accessors do not exist. The common configurations are also
reachable directly on any graph through [`ShortestPaths`].
*/

use crate::{
    arc::Arc,
    ops::{IncidenceList, ReverseIncidenceList},
    semiring::{Semiring, ShortestPathSemiring},
    utils::{Mapping, StaticMap, VertexMap},
    vertex::*,
};

mod bidirectional_dijkstra;
mod dijkstra;

pub use bidirectional_dijkstra::*;
pub use dijkstra::*;

/// The semiring a search falls back to when none is specified: non-negative
/// shortest paths over the value type of the length mapping.
pub type DefaultSemiring<L> = ShortestPathSemiring<<L as Mapping<Arc>>::Value>;

/// Lifecycle tag of a vertex during a search.
///
/// Transitions are one-way: `PreHeap -> InHeap` on the first relaxation,
/// `InHeap -> PostHeap` when the vertex is settled. A settled vertex is
/// never queued again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexStatus {
    /// Not reached yet.
    #[default]
    PreHeap,
    /// Queued with a tentative distance.
    InHeap,
    /// Settled; the final distance is known.
    PostHeap,
}

/// Per-vertex bookkeeping a search may or may not carry.
///
/// Implemented by [`VertexMap`] (values are recorded) and by `()` (recording
/// is a no-op and the map occupies no memory). Searches are instantiated per
/// configuration, so the compiler erases the disabled variants entirely;
/// accessors reading the values only exist on instantiations that use
/// [`VertexMap`].
pub trait TraversalStore<V: Copy>: Sized {
    /// Allocates storage for vertices `0..n`.
    fn allocate(n: NumVertices) -> Self;

    /// Records a value for a vertex.
    fn record(&mut self, key: Vertex, value: V);
}

impl<V: Copy> TraversalStore<V> for () {
    #[inline(always)]
    fn allocate(_: NumVertices) -> Self {}

    #[inline(always)]
    fn record(&mut self, _: Vertex, _: V) {}
}

impl<V: Copy + Default> TraversalStore<V> for VertexMap<V> {
    fn allocate(n: NumVertices) -> Self {
        StaticMap::new(n as usize, V::default())
    }

    #[inline(always)]
    fn record(&mut self, key: Vertex, value: V) {
        self[key] = value;
    }
}

/// Offers the shortest-path searches as methods of the graph representation,
/// in their default configuration.
pub trait ShortestPaths: IncidenceList {
    /// Returns a [`Dijkstra`] search bound to this graph and the given
    /// length mapping. Sources still need to be added.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let mut builder = StaticDigraphBuilder::new(3);
    /// builder.add_arc(0, 1, 2u32);
    /// builder.add_arc(1, 2, 3);
    /// let (graph, lengths) = builder.build();
    ///
    /// let mut search = graph.dijkstra(&lengths);
    /// search.add_source(0);
    /// assert_eq!(search.last(), Some((2, 5)));
    /// ```
    fn dijkstra<'a, L>(&'a self, lengths: &'a L) -> Dijkstra<'a, Self, L>
    where
        L: Mapping<Arc>,
        DefaultSemiring<L>: Semiring<Value = L::Value>,
    {
        DijkstraSearch::new(self, lengths)
    }

    /// Returns a [`BidirectionalDijkstra`] search between `s` and `t` bound
    /// to this graph and the given length mapping.
    fn bidirectional_dijkstra<'a, L>(
        &'a self,
        lengths: &'a L,
        s: Vertex,
        t: Vertex,
    ) -> BidirectionalDijkstra<'a, Self, L>
    where
        Self: ReverseIncidenceList,
        L: Mapping<Arc>,
        DefaultSemiring<L>: Semiring<Value = L::Value>,
    {
        BidirectionalDijkstra::between(self, lengths, s, t)
    }
}

impl<G: IncidenceList> ShortestPaths for G {}
