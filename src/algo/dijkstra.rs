use std::marker::PhantomData;

use crate::{
    arc::*,
    ops::IncidenceList,
    semiring::Semiring,
    utils::{DAryHeap, Mapping, UpdatablePriorityQueue, VertexMap},
    vertex::*,
};

use super::{DefaultSemiring, TraversalStore, VertexStatus};

/// Single-source shortest-path search over the out-arcs of a digraph.
///
/// The search borrows the graph and the arc length mapping and owns its
/// queue and per-vertex state. It is driven either step by step through
/// [`next_entry`](DijkstraSearch::next_entry) or as an iterator yielding the
/// settled `(vertex, distance)` pairs in non-decreasing distance order.
///
/// The type parameters select the semiring `S`, the optional bookkeeping
/// (`PV` predecessor vertices, `PA` predecessor arcs, `DM` distances; either
/// `()` or [`VertexMap`]) and the queue implementation `H`. See the
/// [`Dijkstra`], [`DijkstraWithPredVertices`], [`DijkstraWithPredArcs`] and
/// [`DijkstraWithDistances`] aliases for the common configurations.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut builder = StaticDigraphBuilder::new(3);
/// builder.add_arc(0, 1, 10u32);
/// builder.add_arc(0, 2, 1);
/// builder.add_arc(2, 1, 1);
/// let (graph, lengths) = builder.build();
///
/// let mut search = graph.dijkstra(&lengths);
/// search.add_source(0);
///
/// let settled: Vec<_> = search.collect();
/// assert_eq!(settled, vec![(0, 0), (2, 1), (1, 2)]);
/// ```
pub struct DijkstraSearch<'a, G, L, S = DefaultSemiring<L>, PV = (), PA = (), DM = (), H = DAryHeap<S>>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    graph: &'a G,
    lengths: &'a L,
    heap: H,
    statuses: VertexMap<VertexStatus>,
    pred_vertices: PV,
    pred_arcs: PA,
    distances: DM,
    _semiring: PhantomData<S>,
}

/// [`DijkstraSearch`] without any optional bookkeeping.
pub type Dijkstra<'a, G, L> = DijkstraSearch<'a, G, L>;

/// [`DijkstraSearch`] recording the predecessor vertex of every reached vertex.
pub type DijkstraWithPredVertices<'a, G, L> =
    DijkstraSearch<'a, G, L, DefaultSemiring<L>, VertexMap<Vertex>>;

/// [`DijkstraSearch`] recording the predecessor arc of every reached vertex.
pub type DijkstraWithPredArcs<'a, G, L> =
    DijkstraSearch<'a, G, L, DefaultSemiring<L>, (), VertexMap<Option<Arc>>>;

/// [`DijkstraSearch`] recording the final distance of every settled vertex.
pub type DijkstraWithDistances<'a, G, L> =
    DijkstraSearch<'a, G, L, DefaultSemiring<L>, (), (), VertexMap<<L as Mapping<Arc>>::Value>>;

impl<'a, G, L, S, PV, PA, DM, H> DijkstraSearch<'a, G, L, S, PV, PA, DM, H>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
    PV: TraversalStore<Vertex>,
    PA: TraversalStore<Option<Arc>>,
    DM: TraversalStore<S::Value>,
    H: UpdatablePriorityQueue<Priority = S::Value>,
{
    /// Binds a graph and a length mapping. No source is added yet.
    pub fn new(graph: &'a G, lengths: &'a L) -> Self {
        let n = graph.number_of_vertices();
        Self {
            graph,
            lengths,
            heap: H::with_vertex_count(n),
            statuses: graph.create_vertex_map(VertexStatus::PreHeap),
            pred_vertices: PV::allocate(n),
            pred_arcs: PA::allocate(n),
            distances: DM::allocate(n),
            _semiring: PhantomData,
        }
    }

    /// Binds a graph and a length mapping and adds `s` as the source.
    pub fn with_source(graph: &'a G, lengths: &'a L, s: Vertex) -> Self {
        let mut search = Self::new(graph, lengths);
        search.add_source(s);
        search
    }

    /// Empties the queue and marks every vertex unreached, keeping the bound
    /// graph, length mapping and allocated capacity.
    pub fn reset(&mut self) -> &mut Self {
        self.heap.clear();
        self.statuses.fill(VertexStatus::PreHeap);
        self
    }

    /// Queues `s` at distance zero.
    ///
    /// `s` must not be queued already.
    pub fn add_source(&mut self, s: Vertex) -> &mut Self {
        self.add_source_with_dist(s, S::zero())
    }

    /// Queues `s` at the given initial distance.
    ///
    /// `s` must not be queued already.
    pub fn add_source_with_dist(&mut self, s: Vertex, dist: S::Value) -> &mut Self {
        debug_assert!(self.statuses[s] != VertexStatus::InHeap);
        self.heap.push(s, dist);
        self.statuses[s] = VertexStatus::InHeap;
        self.pred_vertices.record(s, s);
        self.pred_arcs.record(s, None);
        self
    }

    /// Returns `true` if no vertex is queued, i.e. the search is exhausted.
    pub fn empty_queue(&self) -> bool {
        self.heap.is_empty()
    }

    /// Settles and returns the queued vertex with minimum distance, relaxing
    /// all its out-arcs.
    ///
    /// The queue must be non-empty.
    pub fn next_entry(&mut self) -> (Vertex, S::Value) {
        let (u, dist) = self.heap.pop();
        self.statuses[u] = VertexStatus::PostHeap;

        for a in self.graph.out_arcs(u) {
            let w = self.graph.target(a);
            match self.statuses[w] {
                VertexStatus::InHeap => {
                    let new_dist = S::plus(dist, self.lengths.get(a));
                    if S::less(new_dist, self.heap.priority(w)) {
                        self.heap.promote(w, new_dist);
                        self.pred_vertices.record(w, u);
                        self.pred_arcs.record(w, Some(a));
                    }
                }
                VertexStatus::PreHeap => {
                    self.heap.push(w, S::plus(dist, self.lengths.get(a)));
                    self.statuses[w] = VertexStatus::InHeap;
                    self.pred_vertices.record(w, u);
                    self.pred_arcs.record(w, Some(a));
                }
                VertexStatus::PostHeap => {}
            }
        }

        self.distances.record(u, dist);
        (u, dist)
    }

    /// Settles all reachable vertices.
    pub fn run(&mut self) {
        while !self.empty_queue() {
            self.next_entry();
        }
    }
}

impl<'a, G, L, S, PV, PA, DM, H> Iterator for DijkstraSearch<'a, G, L, S, PV, PA, DM, H>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
    PV: TraversalStore<Vertex>,
    PA: TraversalStore<Option<Arc>>,
    DM: TraversalStore<S::Value>,
    H: UpdatablePriorityQueue<Priority = S::Value>,
{
    type Item = (Vertex, S::Value);

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty_queue() {
            return None;
        }
        Some(self.next_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.graph.len()))
    }
}

impl<'a, G, L, S, PA, DM, H> DijkstraSearch<'a, G, L, S, VertexMap<Vertex>, PA, DM, H>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    /// Returns the vertex through which `u` obtained its current distance,
    /// or `None` if `u` was added as a source.
    ///
    /// `u` must have been reached.
    pub fn pred_vertex(&self, u: Vertex) -> Option<Vertex> {
        debug_assert!(self.statuses[u] != VertexStatus::PreHeap);
        // Sources are encoded as their own predecessor.
        let p = self.pred_vertices[u];
        (p != u).then_some(p)
    }
}

impl<'a, G, L, S, PV, DM, H> DijkstraSearch<'a, G, L, S, PV, VertexMap<Option<Arc>>, DM, H>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    /// Returns the arc through which `u` obtained its current distance, or
    /// `None` if `u` was added as a source.
    ///
    /// `u` must have been reached.
    pub fn pred_arc(&self, u: Vertex) -> Option<Arc> {
        debug_assert!(self.statuses[u] != VertexStatus::PreHeap);
        self.pred_arcs[u]
    }
}

impl<'a, G, L, S, PV, PA, H> DijkstraSearch<'a, G, L, S, PV, PA, VertexMap<S::Value>, H>
where
    G: IncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    /// Returns the final distance of a settled vertex.
    pub fn dist(&self, u: Vertex) -> S::Value {
        debug_assert!(self.statuses[u] == VertexStatus::PostHeap);
        self.distances[u]
    }
}
