/*!
# Static Digraph

[`StaticDigraph`] is the canonical backing store of this crate: an immutable
directed graph over contiguous vertex ids in **Compressed Sparse Row (CSR)**
form, extended with a mirrored reverse adjacency.

The forward direction stores a per-vertex offset array into a flat target
array; arc ids are assigned in source-major order, so the out-arcs of a
vertex are a contiguous id range. The reverse direction stores a second
offset array plus a permutation of arc ids bucketed by target, so traversing
arcs against their direction yields canonical arc ids as well.

This structure provides:
- **Compact storage** and good cache locality for sparse graphs.
- **O(1)** endpoint lookups in both directions.
- **Immutability**: no arcs or vertices can be added or removed after
  construction, which is what allows the unchecked slice accesses below.
*/

use std::{iter::Copied, ops::Range, slice::Iter};

use crate::{arc::*, ops::*, vertex::*};

/// Immutable directed graph in CSR form with forward and reverse adjacency.
///
/// Arcs are identified by their position in the source-major order; all
/// per-arc data (such as length maps) is indexed by these ids.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let g = StaticDigraph::from_arcs(4, [(0, 1), (2, 1), (0, 3), (1, 2)]);
///
/// // Arc ids follow the (source, target) order: (0,1), (0,3), (1,2), (2,1).
/// assert_eq!(g.out_arcs(0).collect::<Vec<_>>(), vec![0, 1]);
/// assert_eq!((g.source(3), g.target(3)), (2, 1));
/// assert_eq!(g.in_arcs(1).collect::<Vec<_>>(), vec![0, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct StaticDigraph {
    /// Offsets into the arc arrays per source vertex, length `n + 1`.
    out_begin: Vec<NumArcs>,
    /// Source of each arc in canonical (source-major) order.
    arc_sources: Vec<Vertex>,
    /// Target of each arc in canonical order.
    arc_targets: Vec<Vertex>,
    /// Offsets into `in_arc_ids` per target vertex, length `n + 1`.
    in_begin: Vec<NumArcs>,
    /// Canonical arc ids bucketed by target, stable within each bucket.
    in_arc_ids: Vec<Arc>,
}

impl StaticDigraph {
    /// Constructs a digraph from parallel source and target arrays.
    ///
    /// The sources must be sorted non-decreasingly; the resulting arc ids
    /// are the positions in the given arrays.
    ///
    /// # Panics
    /// Panics if:
    /// - the arrays differ in length,
    /// - `sources` is not sorted,
    /// - any endpoint is `>= n`.
    pub fn new(n: NumVertices, sources: Vec<Vertex>, targets: Vec<Vertex>) -> Self {
        assert_eq!(sources.len(), targets.len());
        assert!(sources.len() <= NumArcs::MAX as usize);
        assert!(sources.is_sorted());
        assert!(sources.iter().all(|&u| u < n));
        assert!(targets.iter().all(|&v| v < n));

        let m = sources.len();

        // Derive the forward offsets by counting and an exclusive scan.
        let mut out_begin = vec![0 as NumArcs; n as usize + 1];
        for &u in &sources {
            out_begin[u as usize + 1] += 1;
        }
        for i in 1..out_begin.len() {
            out_begin[i] += out_begin[i - 1];
        }

        // Mirror the graph by target: counting sort of the arc ids, which is
        // stable and therefore keeps the canonical order within each bucket.
        let mut in_begin = vec![0 as NumArcs; n as usize + 1];
        for &v in &targets {
            in_begin[v as usize + 1] += 1;
        }
        for i in 1..in_begin.len() {
            in_begin[i] += in_begin[i - 1];
        }

        let mut cursor: Vec<NumArcs> = in_begin[..n as usize].to_vec();
        let mut in_arc_ids = vec![0 as Arc; m];
        for (a, &v) in targets.iter().enumerate() {
            in_arc_ids[cursor[v as usize] as usize] = a as Arc;
            cursor[v as usize] += 1;
        }

        Self {
            out_begin,
            arc_sources: sources,
            arc_targets: targets,
            in_begin,
            in_arc_ids,
        }
    }

    /// Constructs a digraph from an unordered arc list.
    ///
    /// Arc ids are assigned in `(source, target)` order. If per-arc
    /// properties need to stay aligned with the arcs, use
    /// [`StaticDigraphBuilder`](crate::repr::StaticDigraphBuilder) instead.
    ///
    /// # Panics
    /// Panics if any endpoint is `>= n`.
    pub fn from_arcs<I>(n: NumVertices, arcs: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut arcs: Vec<(Vertex, Vertex)> = arcs.into_iter().collect();
        arcs.sort_unstable();

        let (sources, targets) = arcs.into_iter().unzip();
        Self::new(n, sources, targets)
    }
}

impl GraphVertexOrder for StaticDigraph {
    type VertexIter<'a>
        = Range<Vertex>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VertexIter<'_> {
        self.vertices_range()
    }

    fn number_of_vertices(&self) -> NumVertices {
        (self.out_begin.len() - 1) as NumVertices
    }
}

impl GraphArcOrder for StaticDigraph {
    type ArcIter<'a>
        = Range<Arc>
    where
        Self: 'a;

    fn arcs(&self) -> Self::ArcIter<'_> {
        0..self.number_of_arcs()
    }

    fn number_of_arcs(&self) -> NumArcs {
        self.arc_targets.len() as NumArcs
    }
}

impl IncidenceList for StaticDigraph {
    type OutArcIter<'a>
        = Range<Arc>
    where
        Self: 'a;

    type TargetsMap<'a>
        = &'a [Vertex]
    where
        Self: 'a;

    #[inline(always)]
    fn out_arcs(&self, u: Vertex) -> Range<Arc> {
        self.out_begin[u as usize]..self.out_begin[u as usize + 1]
    }

    #[inline(always)]
    fn target(&self, a: Arc) -> Vertex {
        self.arc_targets[a as usize]
    }

    fn targets_map(&self) -> &[Vertex] {
        &self.arc_targets
    }

    #[inline(always)]
    fn out_degree_of(&self, u: Vertex) -> NumArcs {
        self.out_begin[u as usize + 1] - self.out_begin[u as usize]
    }
}

impl ReverseIncidenceList for StaticDigraph {
    type InArcIter<'a>
        = Copied<Iter<'a, Arc>>
    where
        Self: 'a;

    type SourcesMap<'a>
        = &'a [Vertex]
    where
        Self: 'a;

    #[inline(always)]
    fn in_arcs(&self, v: Vertex) -> Self::InArcIter<'_> {
        let start = self.in_begin[v as usize] as usize;
        let end = self.in_begin[v as usize + 1] as usize;

        // using unchecked here is safe, since we established in the
        // constructor that all entries within `self.in_begin` are
        //  (i) non-decreasing (i.e. produce a valid range) and
        //  (ii) are within bounds of `self.in_arc_ids`
        unsafe { self.in_arc_ids.get_unchecked(start..end) }
            .iter()
            .copied()
    }

    #[inline(always)]
    fn source(&self, a: Arc) -> Vertex {
        self.arc_sources[a as usize]
    }

    fn sources_map(&self) -> &[Vertex] {
        &self.arc_sources
    }

    #[inline(always)]
    fn in_degree_of(&self, v: Vertex) -> NumArcs {
        self.in_begin[v as usize + 1] - self.in_begin[v as usize]
    }
}
