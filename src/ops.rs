/*!
# Graph Operations

Core graph traits and operations.

This module defines the **fundamental traits** that graph representations in
`wgraphs` implement. It covers:
- **Vertex and arc counts** ([`GraphVertexOrder`], [`GraphArcOrder`]).
- **Incidence access** ([`IncidenceList`], [`ReverseIncidenceList`]).
- **Dense map creation** for per-vertex and per-arc state.

These traits form the backbone for the search algorithms to work against any
backing store that provides contiguous vertex and arc ids; the canonical
implementation is [`StaticDigraph`](crate::repr::StaticDigraph).

# Examples
```
use wgraphs::prelude::*;

let g = StaticDigraph::from_arcs(3, [(0, 1), (0, 2), (2, 1)]);

assert_eq!(g.number_of_vertices(), 3);
assert_eq!(g.number_of_arcs(), 3);
assert_eq!(g.out_neighbors_of(0).collect::<Vec<_>>(), vec![1, 2]);
assert_eq!(g.in_neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
```
*/

use std::ops::Range;

use crate::{
    arc::*,
    utils::{ArcMap, Mapping, StaticMap, VertexMap},
    vertex::*,
};

/// Provides accessors related to the number of vertices.
///
/// Implemented by all graph representations.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = StaticDigraph::from_arcs(3, [(0, 1), (1, 2)]);
/// assert_eq!(g.number_of_vertices(), 3);
/// assert_eq!(g.len(), 3);
/// assert!(!g.is_empty());
/// assert_eq!(g.vertices().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
pub trait GraphVertexOrder {
    /// Iterator over all vertices in the graph.
    ///
    /// Returned by [`GraphVertexOrder::vertices`].
    type VertexIter<'a>: Iterator<Item = Vertex> + 'a
    where
        Self: 'a;

    /// Returns the number of vertices in the graph.
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of vertices as a `usize`.
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns `true` if the graph has no vertices (and therefore no arcs).
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> Self::VertexIter<'_>;

    /// Returns a range of all vertices.
    ///
    /// Unlike `vertices()`, this does not borrow `self` and can be used
    /// where additional mutable references are needed.
    fn vertices_range(&self) -> Range<Vertex> {
        0..self.number_of_vertices()
    }

    /// Returns `true` if `u` is a vertex of the graph.
    #[inline]
    fn is_valid_vertex(&self, u: Vertex) -> bool {
        u < self.number_of_vertices()
    }

    /// Allocates a dense vertex-indexed map with every entry set to `init`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let g = StaticDigraph::from_arcs(3, [(0, 1)]);
    /// let mut visited = g.create_vertex_map(false);
    /// visited[1u32] = true;
    /// assert_eq!(visited.len(), 3);
    /// ```
    fn create_vertex_map<T: Clone>(&self, init: T) -> VertexMap<T> {
        StaticMap::new(self.len(), init)
    }
}

/// Provides accessors related to the number of arcs.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = StaticDigraph::from_arcs(3, [(0, 1), (1, 2)]);
/// assert_eq!(g.number_of_arcs(), 2);
/// assert_eq!(g.arcs().collect::<Vec<_>>(), vec![0, 1]);
/// ```
pub trait GraphArcOrder {
    /// Iterator over all arc ids in the graph.
    ///
    /// Returned by [`GraphArcOrder::arcs`].
    type ArcIter<'a>: Iterator<Item = Arc> + 'a
    where
        Self: 'a;

    /// Returns the number of arcs in the graph.
    fn number_of_arcs(&self) -> NumArcs;

    /// Returns an iterator over all arc ids in the graph.
    fn arcs(&self) -> Self::ArcIter<'_>;

    /// Returns `true` if `a` is an arc of the graph.
    #[inline]
    fn is_valid_arc(&self, a: Arc) -> bool {
        a < self.number_of_arcs()
    }

    /// Allocates a dense arc-indexed map with every entry set to `init`.
    fn create_arc_map<T: Clone>(&self, init: T) -> ArcMap<T> {
        StaticMap::new(self.number_of_arcs() as usize, init)
    }
}

/// Iterator over the targets of the out-arcs of a vertex.
///
/// Returned by [`IncidenceList::out_neighbors_of`].
pub struct OutNeighbors<'a, G: IncidenceList> {
    graph: &'a G,
    arcs: G::OutArcIter<'a>,
}

impl<G: IncidenceList> Iterator for OutNeighbors<'_, G> {
    type Item = Vertex;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.graph.target(self.arcs.next()?))
    }
}

/// Iterator over the sources of the in-arcs of a vertex.
///
/// Returned by [`ReverseIncidenceList::in_neighbors_of`].
pub struct InNeighbors<'a, G: ReverseIncidenceList> {
    graph: &'a G,
    arcs: G::InArcIter<'a>,
}

impl<G: ReverseIncidenceList> Iterator for InNeighbors<'_, G> {
    type Item = Vertex;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.graph.source(self.arcs.next()?))
    }
}

/// Iterator over all arcs of a graph together with their endpoints.
///
/// Returned by [`ReverseIncidenceList::arc_entries`].
pub struct ArcEntries<'a, G: ReverseIncidenceList> {
    graph: &'a G,
    arcs: G::ArcIter<'a>,
}

impl<G: ReverseIncidenceList> Iterator for ArcEntries<'_, G> {
    type Item = (Arc, (Vertex, Vertex));

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.arcs.next()?;
        Some((a, (self.graph.source(a), self.graph.target(a))))
    }
}

/// Trait providing forward incidence access: the out-arcs of a vertex and
/// the target endpoint of an arc.
///
/// The search algorithms rely on this trait for relaxations.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = StaticDigraph::from_arcs(3, [(0, 1), (0, 2), (2, 1)]);
///
/// let out: Vec<_> = g.out_arcs(0).map(|a| g.target(a)).collect();
/// assert_eq!(out, vec![1, 2]);
/// assert_eq!(g.out_degree_of(0), 2);
/// assert_eq!(Mapping::get(&g.targets_map(), 2), 1);
/// ```
pub trait IncidenceList: GraphVertexOrder + GraphArcOrder + Sized {
    /// Iterator over the out-arc ids of a vertex.
    ///
    /// Returned by [`IncidenceList::out_arcs`].
    type OutArcIter<'a>: Iterator<Item = Arc> + 'a
    where
        Self: 'a;

    /// Read-only view mapping an arc id to its target vertex.
    ///
    /// Returned by [`IncidenceList::targets_map`].
    type TargetsMap<'a>: Mapping<Arc, Value = Vertex> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the ids of all arcs leaving `u`.
    ///
    /// **Panics if `u >= n`.**
    fn out_arcs(&self, u: Vertex) -> Self::OutArcIter<'_>;

    /// Returns the target vertex of an arc.
    ///
    /// **Panics if `a >= m`.**
    fn target(&self, a: Arc) -> Vertex;

    /// Returns a mapping view from arc ids to their targets.
    fn targets_map(&self) -> Self::TargetsMap<'_>;

    /// Returns the number of arcs leaving `u`.
    ///
    /// **Panics if `u >= n`.**
    fn out_degree_of(&self, u: Vertex) -> NumArcs {
        self.out_arcs(u).count() as NumArcs
    }

    /// Returns an iterator over the targets of all arcs leaving `u`.
    ///
    /// **Panics if `u >= n`.**
    fn out_neighbors_of(&self, u: Vertex) -> OutNeighbors<'_, Self> {
        OutNeighbors {
            graph: self,
            arcs: self.out_arcs(u),
        }
    }
}

/// Extends [`IncidenceList`] with reverse incidence access: the in-arcs of a
/// vertex and the source endpoint of an arc.
///
/// Required by searches that traverse arcs against their direction, such as
/// the reverse half of a bidirectional search.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = StaticDigraph::from_arcs(3, [(0, 1), (0, 2), (2, 1)]);
///
/// let into: Vec<_> = g.in_arcs(1).map(|a| g.source(a)).collect();
/// assert_eq!(into, vec![0, 2]);
/// assert_eq!(g.in_degree_of(1), 2);
///
/// let entries: Vec<_> = g.arc_entries().collect();
/// assert_eq!(entries, vec![(0, (0, 1)), (1, (0, 2)), (2, (2, 1))]);
/// ```
pub trait ReverseIncidenceList: IncidenceList {
    /// Iterator over the in-arc ids of a vertex.
    ///
    /// Returned by [`ReverseIncidenceList::in_arcs`].
    type InArcIter<'a>: Iterator<Item = Arc> + 'a
    where
        Self: 'a;

    /// Read-only view mapping an arc id to its source vertex.
    ///
    /// Returned by [`ReverseIncidenceList::sources_map`].
    type SourcesMap<'a>: Mapping<Arc, Value = Vertex> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the ids of all arcs entering `v`.
    ///
    /// **Panics if `v >= n`.**
    fn in_arcs(&self, v: Vertex) -> Self::InArcIter<'_>;

    /// Returns the source vertex of an arc.
    ///
    /// **Panics if `a >= m`.**
    fn source(&self, a: Arc) -> Vertex;

    /// Returns a mapping view from arc ids to their sources.
    fn sources_map(&self) -> Self::SourcesMap<'_>;

    /// Returns the number of arcs entering `v`.
    ///
    /// **Panics if `v >= n`.**
    fn in_degree_of(&self, v: Vertex) -> NumArcs {
        self.in_arcs(v).count() as NumArcs
    }

    /// Returns an iterator over the sources of all arcs entering `v`.
    ///
    /// **Panics if `v >= n`.**
    fn in_neighbors_of(&self, v: Vertex) -> InNeighbors<'_, Self> {
        InNeighbors {
            graph: self,
            arcs: self.in_arcs(v),
        }
    }

    /// Returns an iterator over `(arc, (source, target))` for all arcs.
    fn arc_entries(&self) -> ArcEntries<'_, Self> {
        ArcEntries {
            graph: self,
            arcs: self.arcs(),
        }
    }
}
