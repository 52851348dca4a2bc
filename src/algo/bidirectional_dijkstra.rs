use std::marker::PhantomData;

use crate::{
    arc::*,
    ops::{IncidenceList, ReverseIncidenceList},
    semiring::Semiring,
    utils::{DAryHeap, Mapping, UpdatablePriorityQueue, VertexMap},
    vertex::*,
};

use super::{DefaultSemiring, VertexStatus};

/// Per-direction predecessor bookkeeping of a bidirectional search.
///
/// Implemented by [`StPath`] (arcs and the meeting vertex are recorded, path
/// retrieval is available) and by `()` (recording is a no-op, the search
/// only computes the distance). Searches are instantiated per configuration,
/// so the disabled variant occupies no memory.
pub trait PathStore: Sized {
    /// Allocates storage for vertices `0..n`.
    fn allocate(n: NumVertices) -> Self;

    /// Records the arc through which the forward search reached `w`.
    fn record_forward(&mut self, w: Vertex, a: Option<Arc>);

    /// Records the arc through which the reverse search reached `w`.
    fn record_reverse(&mut self, w: Vertex, a: Option<Arc>);

    /// Records `m` as the meeting vertex of the best connection so far.
    fn record_meeting(&mut self, m: Vertex);

    /// Forgets the meeting vertex.
    fn clear(&mut self);
}

impl PathStore for () {
    #[inline(always)]
    fn allocate(_: NumVertices) -> Self {}

    #[inline(always)]
    fn record_forward(&mut self, _: Vertex, _: Option<Arc>) {}

    #[inline(always)]
    fn record_reverse(&mut self, _: Vertex, _: Option<Arc>) {}

    #[inline(always)]
    fn record_meeting(&mut self, _: Vertex) {}

    #[inline(always)]
    fn clear(&mut self) {}
}

/// Predecessor arcs of both search halves plus the meeting vertex.
pub struct StPath {
    forward_pred_arcs: VertexMap<Option<Arc>>,
    reverse_pred_arcs: VertexMap<Option<Arc>>,
    midpoint: Option<Vertex>,
}

impl PathStore for StPath {
    fn allocate(n: NumVertices) -> Self {
        Self {
            forward_pred_arcs: VertexMap::new(n as usize, None),
            reverse_pred_arcs: VertexMap::new(n as usize, None),
            midpoint: None,
        }
    }

    #[inline(always)]
    fn record_forward(&mut self, w: Vertex, a: Option<Arc>) {
        self.forward_pred_arcs[w] = a;
    }

    #[inline(always)]
    fn record_reverse(&mut self, w: Vertex, a: Option<Arc>) {
        self.reverse_pred_arcs[w] = a;
    }

    #[inline(always)]
    fn record_meeting(&mut self, m: Vertex) {
        self.midpoint = Some(m);
    }

    fn clear(&mut self) {
        self.midpoint = None;
    }
}

/// Point-to-point shortest-path search running a forward and a reverse
/// Dijkstra simultaneously until their frontiers prove optimality.
///
/// The forward half explores out-arcs from the added sources, the reverse
/// half explores in-arcs from the added targets; each vertex carries one
/// status per direction. The search maintains the best connection `μ` found
/// through any vertex relaxed by both halves and stops as soon as the two
/// queue minima alone exceed it.
///
/// [`run`](BidirectionalDijkstra::run) returns `μ`, which is
/// `S::infty()` exactly if no target is reachable from any source.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut builder = StaticDigraphBuilder::new(3);
/// builder.add_arc(0, 1, 5u32);
/// builder.add_arc(1, 2, 7);
/// let (graph, lengths) = builder.build();
///
/// let mut search = graph.bidirectional_dijkstra(&lengths, 0, 2);
/// assert_eq!(search.run(), 12);
/// assert!(search.path_found());
///
/// let arcs: Vec<_> = search.path().collect();
/// assert_eq!(arcs, vec![0, 1]);
/// ```
pub struct BidirectionalDijkstra<'a, G, L, S = DefaultSemiring<L>, P = StPath, H = DAryHeap<S>>
where
    G: ReverseIncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    graph: &'a G,
    lengths: &'a L,
    forward_heap: H,
    reverse_heap: H,
    statuses: VertexMap<(VertexStatus, VertexStatus)>,
    path_store: P,
    _semiring: PhantomData<S>,
}

/// [`BidirectionalDijkstra`] computing the distance only; no predecessor
/// arcs are recorded and path retrieval is unavailable.
pub type BidirectionalDistance<'a, G, L> =
    BidirectionalDijkstra<'a, G, L, DefaultSemiring<L>, ()>;

impl<'a, G, L, S, P, H> BidirectionalDijkstra<'a, G, L, S, P, H>
where
    G: ReverseIncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
    P: PathStore,
    H: UpdatablePriorityQueue<Priority = S::Value>,
{
    /// Binds a graph and a length mapping. No source or target is added yet.
    pub fn new(graph: &'a G, lengths: &'a L) -> Self {
        let n = graph.number_of_vertices();
        Self {
            graph,
            lengths,
            forward_heap: H::with_vertex_count(n),
            reverse_heap: H::with_vertex_count(n),
            statuses: graph.create_vertex_map((VertexStatus::PreHeap, VertexStatus::PreHeap)),
            path_store: P::allocate(n),
            _semiring: PhantomData,
        }
    }

    /// Binds a graph and a length mapping and adds `s` as source and `t` as
    /// target.
    pub fn between(graph: &'a G, lengths: &'a L, s: Vertex, t: Vertex) -> Self {
        let mut search = Self::new(graph, lengths);
        search.add_source(s).add_target(t);
        search
    }

    /// Empties both queues and marks every vertex unreached in both
    /// directions, keeping the bound graph, length mapping and capacity.
    pub fn reset(&mut self) -> &mut Self {
        self.forward_heap.clear();
        self.reverse_heap.clear();
        self.statuses
            .fill((VertexStatus::PreHeap, VertexStatus::PreHeap));
        self.path_store.clear();
        self
    }

    /// Queues `s` in the forward direction at distance zero.
    ///
    /// `s` must be unreached in the forward direction.
    pub fn add_source(&mut self, s: Vertex) -> &mut Self {
        self.add_source_with_dist(s, S::zero())
    }

    /// Queues `s` in the forward direction at the given initial distance.
    pub fn add_source_with_dist(&mut self, s: Vertex, dist: S::Value) -> &mut Self {
        debug_assert!(self.statuses[s].0 == VertexStatus::PreHeap);
        self.forward_heap.push(s, dist);
        self.statuses[s].0 = VertexStatus::InHeap;
        self.path_store.record_forward(s, None);
        self
    }

    /// Queues `t` in the reverse direction at distance zero.
    ///
    /// `t` must be unreached in the reverse direction.
    pub fn add_target(&mut self, t: Vertex) -> &mut Self {
        self.add_target_with_dist(t, S::zero())
    }

    /// Queues `t` in the reverse direction at the given initial distance.
    pub fn add_target_with_dist(&mut self, t: Vertex, dist: S::Value) -> &mut Self {
        debug_assert!(self.statuses[t].1 == VertexStatus::PreHeap);
        self.reverse_heap.push(t, dist);
        self.statuses[t].1 = VertexStatus::InHeap;
        self.path_store.record_reverse(t, None);
        self
    }

    /// Runs both searches to completion and returns the shortest s-t
    /// distance, or `S::infty()` if no target is reachable.
    ///
    /// The direction with the smaller queue minimum expands next, ties
    /// expanding the reverse direction. The loop stops once the sum of the
    /// two minima can no longer beat the best connection found.
    pub fn run(&mut self) -> S::Value {
        let mut st_dist = S::infty();
        while !self.forward_heap.is_empty() && !self.reverse_heap.is_empty() {
            let (u1, d1) = self.forward_heap.top();
            let (u2, d2) = self.reverse_heap.top();
            if S::less(st_dist, S::plus(d1, d2)) {
                break;
            }
            if S::less(d1, d2) {
                self.forward_heap.pop();
                st_dist = self.settle_forward(u1, d1, st_dist);
            } else {
                self.reverse_heap.pop();
                st_dist = self.settle_reverse(u2, d2, st_dist);
            }
        }
        st_dist
    }

    /// Relaxes the out-arcs of the settled forward vertex `u`, updating the
    /// best connection on every successful relaxation whose head is queued
    /// in the reverse direction.
    fn settle_forward(&mut self, u: Vertex, dist: S::Value, mut st_dist: S::Value) -> S::Value {
        self.statuses[u].0 = VertexStatus::PostHeap;
        for a in self.graph.out_arcs(u) {
            let w = self.graph.target(a);
            let (w_forward, w_reverse) = self.statuses[w];
            match w_forward {
                VertexStatus::InHeap => {
                    let new_dist = S::plus(dist, self.lengths.get(a));
                    if S::less(new_dist, self.forward_heap.priority(w)) {
                        self.forward_heap.promote(w, new_dist);
                        if w_reverse == VertexStatus::InHeap {
                            let new_st_dist = S::plus(new_dist, self.reverse_heap.priority(w));
                            if S::less(new_st_dist, st_dist) {
                                st_dist = new_st_dist;
                                self.path_store.record_meeting(w);
                            }
                        }
                        self.path_store.record_forward(w, Some(a));
                    }
                }
                VertexStatus::PreHeap => {
                    let new_dist = S::plus(dist, self.lengths.get(a));
                    self.forward_heap.push(w, new_dist);
                    self.statuses[w].0 = VertexStatus::InHeap;
                    if w_reverse == VertexStatus::InHeap {
                        let new_st_dist = S::plus(new_dist, self.reverse_heap.priority(w));
                        if S::less(new_st_dist, st_dist) {
                            st_dist = new_st_dist;
                            self.path_store.record_meeting(w);
                        }
                    }
                    self.path_store.record_forward(w, Some(a));
                }
                VertexStatus::PostHeap => {}
            }
        }
        st_dist
    }

    /// Mirror of [`settle_forward`](Self::settle_forward) walking in-arcs.
    fn settle_reverse(&mut self, u: Vertex, dist: S::Value, mut st_dist: S::Value) -> S::Value {
        self.statuses[u].1 = VertexStatus::PostHeap;
        for a in self.graph.in_arcs(u) {
            let w = self.graph.source(a);
            let (w_forward, w_reverse) = self.statuses[w];
            match w_reverse {
                VertexStatus::InHeap => {
                    let new_dist = S::plus(dist, self.lengths.get(a));
                    if S::less(new_dist, self.reverse_heap.priority(w)) {
                        self.reverse_heap.promote(w, new_dist);
                        if w_forward == VertexStatus::InHeap {
                            let new_st_dist = S::plus(new_dist, self.forward_heap.priority(w));
                            if S::less(new_st_dist, st_dist) {
                                st_dist = new_st_dist;
                                self.path_store.record_meeting(w);
                            }
                        }
                        self.path_store.record_reverse(w, Some(a));
                    }
                }
                VertexStatus::PreHeap => {
                    let new_dist = S::plus(dist, self.lengths.get(a));
                    self.reverse_heap.push(w, new_dist);
                    self.statuses[w].1 = VertexStatus::InHeap;
                    if w_forward == VertexStatus::InHeap {
                        let new_st_dist = S::plus(new_dist, self.forward_heap.priority(w));
                        if S::less(new_st_dist, st_dist) {
                            st_dist = new_st_dist;
                            self.path_store.record_meeting(w);
                        }
                    }
                    self.path_store.record_reverse(w, Some(a));
                }
                VertexStatus::PostHeap => {}
            }
        }
        st_dist
    }
}

impl<'a, G, L, S, H> BidirectionalDijkstra<'a, G, L, S, StPath, H>
where
    G: ReverseIncidenceList,
    L: Mapping<Arc>,
    S: Semiring<Value = L::Value>,
{
    /// Returns `true` if the searches have met, i.e. a best connection and
    /// its meeting vertex exist.
    pub fn path_found(&self) -> bool {
        self.path_store.midpoint.is_some()
    }

    /// Returns the meeting vertex of the best connection found so far.
    pub fn midpoint(&self) -> Option<Vertex> {
        self.path_store.midpoint
    }

    /// Returns the arc through which the forward search reached `u`, or
    /// `None` if `u` was added as a source.
    ///
    /// `u` must have been reached by the forward search.
    pub fn pred_arc(&self, u: Vertex) -> Option<Arc> {
        debug_assert!(self.statuses[u].0 != VertexStatus::PreHeap);
        self.path_store.forward_pred_arcs[u]
    }

    /// Returns the arc through which the reverse search reached `u`, or
    /// `None` if `u` was added as a target.
    ///
    /// `u` must have been reached by the reverse search.
    pub fn succ_arc(&self, u: Vertex) -> Option<Arc> {
        debug_assert!(self.statuses[u].1 != VertexStatus::PreHeap);
        self.path_store.reverse_pred_arcs[u]
    }

    /// Returns a lazy iterator over the arcs of the found s-t walk.
    ///
    /// The arcs of the source-to-midpoint leg are yielded first, walking
    /// backwards from the midpoint, followed by the midpoint-to-target leg
    /// in forward order. Together they contain every arc of the walk exactly
    /// once.
    ///
    /// # Panics
    /// Panics if no meeting vertex exists (see
    /// [`path_found`](Self::path_found)).
    pub fn path(&self) -> PathArcs<'_, G> {
        let m = self
            .path_store
            .midpoint
            .expect("retrieving a path requires a meeting vertex");
        PathArcs {
            graph: self.graph,
            forward_pred_arcs: &self.path_store.forward_pred_arcs,
            reverse_pred_arcs: &self.path_store.reverse_pred_arcs,
            forward_cur: self.path_store.forward_pred_arcs[m],
            reverse_cur: self.path_store.reverse_pred_arcs[m],
        }
    }
}

/// Lazy iterator over the arcs of a found s-t walk.
///
/// Returned by [`BidirectionalDijkstra::path`].
pub struct PathArcs<'b, G: ReverseIncidenceList> {
    graph: &'b G,
    forward_pred_arcs: &'b VertexMap<Option<Arc>>,
    reverse_pred_arcs: &'b VertexMap<Option<Arc>>,
    forward_cur: Option<Arc>,
    reverse_cur: Option<Arc>,
}

impl<G: ReverseIncidenceList> Iterator for PathArcs<'_, G> {
    type Item = Arc;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(a) = self.forward_cur.take() {
            self.forward_cur = self.forward_pred_arcs[self.graph.source(a)];
            return Some(a);
        }
        let a = self.reverse_cur.take()?;
        self.reverse_cur = self.reverse_pred_arcs[self.graph.target(a)];
        Some(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algo::Dijkstra, testing::*};
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn demo_distance_and_path() {
        let (graph, lengths) = demo_graph();

        let mut search: BidirectionalDijkstra<'_, _, _> =
            BidirectionalDijkstra::between(&graph, &lengths, 0, 3);
        assert_eq!(search.run(), 21);
        assert!(search.path_found());
        assert_eq!(search.midpoint(), Some(2));

        let endpoints = search
            .path()
            .map(|a| (graph.source(a), graph.target(a)))
            .collect_vec();
        assert_eq!(endpoints, vec![(0, 2), (2, 3)]);
    }

    #[test]
    fn demo_longer_pair() {
        let (graph, lengths) = demo_graph();

        let mut search: BidirectionalDijkstra<'_, _, _> =
            BidirectionalDijkstra::between(&graph, &lengths, 1, 4);
        assert_eq!(search.run(), 21);

        let arcs = search.path().collect_vec();
        let total: u32 = arcs.iter().map(|&a| lengths[a]).sum();
        assert_eq!(total, 21);
    }

    #[test]
    fn disconnected_pair() {
        let (graph, lengths) = build_digraph(4, &[(0, 1, 1), (1, 0, 1), (2, 3, 1), (3, 2, 1)]);

        let mut search: BidirectionalDijkstra<'_, _, _> =
            BidirectionalDijkstra::between(&graph, &lengths, 0, 3);
        assert_eq!(search.run(), u32::MAX);
        assert!(!search.path_found());
    }

    #[test]
    fn respects_arc_direction() {
        // Only 0 -> 1 exists; the reverse query must fail.
        let (graph, lengths) = build_digraph(2, &[(0, 1, 3)]);

        assert_eq!(
            BidirectionalDijkstra::<'_, _, _>::between(&graph, &lengths, 0, 1).run(),
            3
        );
        assert_eq!(
            BidirectionalDijkstra::<'_, _, _>::between(&graph, &lengths, 1, 0).run(),
            u32::MAX
        );
    }

    #[test]
    fn distance_only_configuration() {
        let (graph, lengths) = demo_graph();

        let mut search: BidirectionalDistance<'_, _, _> =
            BidirectionalDistance::between(&graph, &lengths, 0, 4);
        assert_eq!(search.run(), 20);
    }

    #[test]
    fn reset_allows_reuse() {
        let (graph, lengths) = demo_graph();

        let mut search: BidirectionalDijkstra<'_, _, _> =
            BidirectionalDijkstra::between(&graph, &lengths, 0, 3);
        assert_eq!(search.run(), 21);

        search.reset().add_source(4).add_target(0);
        assert_eq!(search.run(), 20);
        assert!(search.path_found());
    }

    #[test]
    fn agrees_with_forward_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        for n in [2 as NumVertices, 6, 25, 60] {
            for m in [2 * n as usize, 6 * n as usize] {
                let arcs = random_weighted_arcs(rng, n, m, 25);
                let (graph, lengths) = build_digraph(n, &arcs);

                for _ in 0..8 {
                    let s = rng.random_range(0..n);
                    let t = rng.random_range(0..n);
                    if s == t {
                        continue;
                    }

                    let forward_dist = Dijkstra::with_source(&graph, &lengths, s)
                        .find(|&(u, _)| u == t)
                        .map(|(_, d)| d)
                        .unwrap_or(u32::MAX);

                    let mut search: BidirectionalDijkstra<'_, _, _> =
                        BidirectionalDijkstra::between(&graph, &lengths, s, t);
                    assert_eq!(search.run(), forward_dist);
                }
            }
        }
    }

    #[test]
    fn retrieved_path_is_an_st_walk_of_length_mu() {
        let rng = &mut Pcg64Mcg::seed_from_u64(43);

        for _ in 0..30 {
            let n = 40 as NumVertices;
            let arcs = random_weighted_arcs(rng, n, 180, 12);
            let (graph, lengths) = build_digraph(n, &arcs);

            let s = rng.random_range(0..n);
            let t = rng.random_range(0..n);
            if s == t {
                continue;
            }

            let mut search: BidirectionalDijkstra<'_, _, _> =
                BidirectionalDijkstra::between(&graph, &lengths, s, t);
            let mu = search.run();
            if mu == u32::MAX {
                assert!(!search.path_found());
                continue;
            }

            assert!(search.path_found());
            let arcs = search.path().collect_vec();
            let total: u32 = arcs.iter().map(|&a| lengths[a]).sum();
            assert_eq!(total, mu);

            // The arcs chain into a single walk from s to t. A shortest path
            // visits each vertex at most once, so sources are unique.
            let mut remaining = arcs;
            let mut cur = s;
            while !remaining.is_empty() {
                let pos = remaining
                    .iter()
                    .position(|&a| graph.source(a) == cur)
                    .expect("path arcs do not chain");
                cur = graph.target(remaining.swap_remove(pos));
            }
            assert_eq!(cur, t);
        }
    }
}
