/*!
# Updatable D-Ary Heaps

A [`DAryHeap`] is the priority queue driving the shortest-path searches: a
min-heap with branching factor `D` whose entries are `(vertex, priority)`
pairs, paired with a dense vertex-indexed position map. The position map
makes `promote` (decreasing the priority of a queued vertex in place) and
`priority` lookups constant-time apart from the sift, which is what a
Dijkstra relaxation needs.

The comparison order comes from a [`Semiring`], so the heap orders entries
exactly like the search that owns it.

### Invariants

1. For every entry at index `i > 0`, the entry does not precede its parent
   under the semiring order.
2. `positions[k]` equals the array index of `k` iff `k` is queued, and the
   absent sentinel otherwise.

All preconditions (pushing a queued key, popping an empty heap, promoting to
a non-preceding priority) are caller bugs and only checked by debug
assertions.
*/

use crate::{semiring::Semiring, utils::VertexMap, vertex::*};

/// Position map sentinel for keys that are not currently queued.
const ABSENT: usize = usize::MAX;

/// Interface of priority queues with in-place priority decreases, as
/// required by the search algorithms.
///
/// Keys are vertices of a fixed-size graph; implementations allocate their
/// position tracking eagerly from the vertex count.
pub trait UpdatablePriorityQueue {
    /// The priority type entries are ordered by.
    type Priority: Copy;

    /// Creates an empty queue able to hold every vertex of an `n`-vertex graph.
    fn with_vertex_count(n: NumVertices) -> Self;

    /// Queues a key that is not currently present.
    fn push(&mut self, key: Vertex, priority: Self::Priority);

    /// Removes and returns the minimum entry. The queue must be non-empty.
    fn pop(&mut self) -> (Vertex, Self::Priority);

    /// Returns the minimum entry without removing it. The queue must be non-empty.
    fn top(&self) -> (Vertex, Self::Priority);

    /// Moves a queued key to a strictly preceding priority.
    fn promote(&mut self, key: Vertex, priority: Self::Priority);

    /// Returns the current priority of a queued key.
    fn priority(&self, key: Vertex) -> Self::Priority;

    /// Returns `true` if the key is currently queued.
    fn contains(&self, key: Vertex) -> bool;

    /// Returns the number of queued entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entry is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries but keeps the allocated capacity.
    fn clear(&mut self);
}

/// Min-heap with branching factor `D` over `(vertex, priority)` entries,
/// ordered by the semiring `S` and backed by a dense position map.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut heap: DAryHeap<ShortestPathSemiring<u32>> = DAryHeap::with_vertex_count(4);
///
/// heap.push(0, 10);
/// heap.push(1, 3);
/// heap.push(2, 7);
/// assert_eq!(heap.top(), (1, 3));
///
/// heap.promote(0, 1);
/// assert_eq!(heap.pop(), (0, 1));
/// assert_eq!(heap.pop(), (1, 3));
/// assert_eq!(heap.pop(), (2, 7));
/// assert!(heap.is_empty());
/// ```
pub struct DAryHeap<S: Semiring, const D: usize = 2> {
    entries: Vec<(Vertex, S::Value)>,
    positions: VertexMap<usize>,
}

impl<S: Semiring, const D: usize> DAryHeap<S, D> {
    /// Creates an empty heap for vertices `0..n`.
    pub fn with_vertex_count(n: NumVertices) -> Self {
        assert!(D >= 2);
        Self {
            entries: Vec::with_capacity(n as usize),
            positions: VertexMap::new(n as usize, ABSENT),
        }
    }

    /// Returns the number of queued entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry is queued.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the key is currently queued.
    #[inline(always)]
    pub fn contains(&self, key: Vertex) -> bool {
        self.positions[key] != ABSENT
    }

    /// Returns the current priority of `key`. The key must be queued.
    #[inline]
    pub fn priority(&self, key: Vertex) -> S::Value {
        debug_assert!(self.contains(key));
        self.entries[self.positions[key]].1
    }

    /// Returns the minimum entry without removing it. The heap must be non-empty.
    #[inline]
    pub fn top(&self) -> (Vertex, S::Value) {
        debug_assert!(!self.is_empty());
        self.entries[0]
    }

    /// Queues `key` at the given priority. The key must not be queued yet.
    pub fn push(&mut self, key: Vertex, priority: S::Value) {
        debug_assert!(!self.contains(key));
        let hole = self.entries.len();
        self.entries.push((key, priority));
        self.sift_up(hole, (key, priority));
    }

    /// Removes and returns the minimum entry. The heap must be non-empty.
    pub fn pop(&mut self) -> (Vertex, S::Value) {
        debug_assert!(!self.is_empty());
        let top = self.entries[0];
        self.positions[top.0] = ABSENT;

        let last = self.entries.pop().unwrap();
        if !self.entries.is_empty() {
            self.sift_down(0, last);
        }

        top
    }

    /// Moves the queued `key` to `priority`, which must strictly precede its
    /// current priority. Only ever sifts toward the root.
    pub fn promote(&mut self, key: Vertex, priority: S::Value) {
        debug_assert!(self.contains(key));
        debug_assert!(S::less(priority, self.priority(key)));
        let hole = self.positions[key];
        self.sift_up(hole, (key, priority));
    }

    /// Removes all entries; the position map is restored to all-absent.
    pub fn clear(&mut self) {
        for &(key, _) in &self.entries {
            self.positions[key] = ABSENT;
        }
        self.entries.clear();
    }

    /// Moves `entry` from index `hole` toward the root while it strictly
    /// precedes its parent, shifting displaced entries down.
    fn sift_up(&mut self, mut hole: usize, entry: (Vertex, S::Value)) {
        while hole > 0 {
            let parent = (hole - 1) / D;
            if !S::less(entry.1, self.entries[parent].1) {
                break;
            }
            let displaced = self.entries[parent];
            self.positions[displaced.0] = hole;
            self.entries[hole] = displaced;
            hole = parent;
        }
        self.positions[entry.0] = hole;
        self.entries[hole] = entry;
    }

    /// Moves `entry` from index `hole` toward the leaves while any child
    /// strictly precedes it, always descending into the smallest child
    /// (ties broken by the lower index).
    fn sift_down(&mut self, mut hole: usize, entry: (Vertex, S::Value)) {
        let len = self.entries.len();
        loop {
            let first = D * hole + 1;
            if first >= len {
                break;
            }
            let mut best = first;
            for child in (first + 1)..(first + D).min(len) {
                if S::less(self.entries[child].1, self.entries[best].1) {
                    best = child;
                }
            }
            if !S::less(self.entries[best].1, entry.1) {
                break;
            }
            let displaced = self.entries[best];
            self.positions[displaced.0] = hole;
            self.entries[hole] = displaced;
            hole = best;
        }
        self.positions[entry.0] = hole;
        self.entries[hole] = entry;
    }
}

impl<S: Semiring, const D: usize> UpdatablePriorityQueue for DAryHeap<S, D> {
    type Priority = S::Value;

    fn with_vertex_count(n: NumVertices) -> Self {
        DAryHeap::with_vertex_count(n)
    }

    fn push(&mut self, key: Vertex, priority: S::Value) {
        DAryHeap::push(self, key, priority);
    }

    fn pop(&mut self) -> (Vertex, S::Value) {
        DAryHeap::pop(self)
    }

    fn top(&self) -> (Vertex, S::Value) {
        DAryHeap::top(self)
    }

    fn promote(&mut self, key: Vertex, priority: S::Value) {
        DAryHeap::promote(self, key, priority);
    }

    fn priority(&self, key: Vertex) -> S::Value {
        DAryHeap::priority(self, key)
    }

    fn contains(&self, key: Vertex) -> bool {
        DAryHeap::contains(self, key)
    }

    fn len(&self) -> usize {
        DAryHeap::len(self)
    }

    fn clear(&mut self) {
        DAryHeap::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semiring::ShortestPathSemiring;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    type BinaryHeap = DAryHeap<ShortestPathSemiring<u32>>;
    type QuaternaryHeap = DAryHeap<ShortestPathSemiring<u32>, 4>;

    #[test]
    fn push_pop_sorted() {
        let mut heap = BinaryHeap::with_vertex_count(8);
        for (v, p) in [(3, 12u32), (0, 5), (7, 1), (2, 30), (5, 5)] {
            heap.push(v, p);
        }
        assert_eq!(heap.len(), 5);
        assert_eq!(heap.top(), (7, 1));

        let mut popped = Vec::new();
        while !heap.is_empty() {
            popped.push(heap.pop());
        }
        assert!(popped.iter().tuple_windows().all(|(a, b)| a.1 <= b.1));
        assert_eq!(popped[0], (7, 1));
        assert_eq!(popped[4], (2, 30));
    }

    #[test]
    fn promote_reorders() {
        let mut heap = BinaryHeap::with_vertex_count(4);
        heap.push(0, 10);
        heap.push(1, 20);
        heap.push(2, 30);

        assert_eq!(heap.priority(2), 30);
        heap.promote(2, 5);
        assert_eq!(heap.priority(2), 5);
        assert_eq!(heap.top(), (2, 5));

        assert_eq!(heap.pop(), (2, 5));
        assert_eq!(heap.pop(), (0, 10));
        assert_eq!(heap.pop(), (1, 20));
    }

    #[test]
    fn clear_resets_membership() {
        let mut heap = BinaryHeap::with_vertex_count(4);
        heap.push(1, 3);
        heap.push(2, 1);
        heap.clear();

        assert!(heap.is_empty());
        assert!(!heap.contains(1));
        assert!(!heap.contains(2));

        // All keys are pushable again.
        heap.push(2, 9);
        assert_eq!(heap.pop(), (2, 9));
    }

    /// Random push/promote/pop sequences against a naive model, for both
    /// branching factors.
    fn random_ops<const D: usize>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(111);

        for n in [1 as NumVertices, 2, 10, 64, 257] {
            for _ in 0..10 {
                let mut heap: DAryHeap<ShortestPathSemiring<u32>, D> =
                    DAryHeap::with_vertex_count(n);
                let mut model: Vec<Option<u32>> = vec![None; n as usize];

                for v in 0..n {
                    if rng.random_bool(0.8) {
                        let p = rng.random_range(0..1000);
                        heap.push(v, p);
                        model[v as usize] = Some(p);
                    }
                }

                for v in 0..n {
                    if let Some(p) = model[v as usize] {
                        if p > 0 && rng.random_bool(0.5) {
                            let p2 = rng.random_range(0..p);
                            heap.promote(v, p2);
                            model[v as usize] = Some(p2);
                        }
                    }
                }

                let mut expected = model
                    .iter()
                    .enumerate()
                    .filter_map(|(v, p)| p.map(|p| (p, v as Vertex)))
                    .collect_vec();
                expected.sort_unstable();

                for (p, _) in expected {
                    let (_, popped_p) = heap.pop();
                    // Equal priorities may pop in any key order.
                    assert_eq!(popped_p, p);
                }
                assert!(heap.is_empty());
            }
        }
    }

    #[test]
    fn random_ops_binary() {
        random_ops::<2>();
    }

    #[test]
    fn random_ops_quaternary() {
        random_ops::<4>();
    }

    #[test]
    fn top_is_minimal_at_all_times() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        let mut heap = QuaternaryHeap::with_vertex_count(100);

        for v in 0..100 {
            heap.push(v, rng.random_range(0..10_000));
            let min = (0..=v).filter(|&u| heap.contains(u)).map(|u| heap.priority(u)).min();
            assert_eq!(heap.top().1, min.unwrap());
        }
        for _ in 0..50 {
            let (_, p) = heap.pop();
            assert!(p <= heap.top().1);
        }
    }
}
