/*!
# Static Digraph Builder

[`StaticDigraphBuilder`] accumulates arcs in any order, together with one
property value per arc, and produces a [`StaticDigraph`] plus the property
array permuted into canonical arc-id order.

The build step co-sorts arcs and properties **stably** by `(source, target)`,
so arc ids are deterministic under any insertion order and repeated arcs keep
their insertion order. Multiple properties per arc are carried as a tuple.
*/

use itertools::{izip, Itertools};

use crate::{arc::*, repr::StaticDigraph, utils::ArcMap, vertex::*};

/// Accumulates arcs with per-arc properties and builds the CSR digraph.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut builder = StaticDigraphBuilder::new(3);
/// builder.add_arc(2, 0, 30u32);
/// builder.add_arc(0, 1, 10);
/// builder.add_arc(0, 2, 20);
///
/// let (graph, lengths) = builder.build();
///
/// // Ids follow (source, target) order, properties stay aligned.
/// assert_eq!(graph.arc_entries().collect::<Vec<_>>(),
///            vec![(0, (0, 1)), (1, (0, 2)), (2, (2, 0))]);
/// assert_eq!(lengths.as_slice(), &[10, 20, 30]);
/// ```
pub struct StaticDigraphBuilder<P = ()> {
    number_of_vertices: NumVertices,
    sources: Vec<Vertex>,
    targets: Vec<Vertex>,
    properties: Vec<P>,
}

impl<P> StaticDigraphBuilder<P> {
    /// Creates a builder for a digraph with vertices `0..n`.
    pub fn new(n: NumVertices) -> Self {
        Self {
            number_of_vertices: n,
            sources: Vec::new(),
            targets: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Returns the number of arcs added so far.
    pub fn number_of_arcs(&self) -> NumArcs {
        self.sources.len() as NumArcs
    }

    /// Appends the arc `(u, v)` with its property value.
    ///
    /// # Panics
    /// Panics if an endpoint is `>= n`.
    pub fn add_arc(&mut self, u: Vertex, v: Vertex, property: P) -> &mut Self {
        assert!(u < self.number_of_vertices && v < self.number_of_vertices);
        self.sources.push(u);
        self.targets.push(v);
        self.properties.push(property);
        self
    }

    /// Builds the digraph and the aligned arc property map.
    ///
    /// Arcs are sorted stably by `(source, target)`, so repeated arcs keep
    /// their insertion order and ids are independent of insertion order.
    pub fn build(self) -> (StaticDigraph, ArcMap<P>) {
        let mut arcs = izip!(self.sources, self.targets, self.properties).collect_vec();
        arcs.sort_by_key(|&(u, v, _)| (u, v));

        let (sources, targets, properties): (Vec<_>, Vec<_>, Vec<_>) =
            arcs.into_iter().multiunzip();

        let graph = StaticDigraph::new(self.number_of_vertices, sources, targets);
        (graph, ArcMap::from(properties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::*;
    use itertools::Itertools;
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn empty_build() {
        let builder: StaticDigraphBuilder = StaticDigraphBuilder::new(4);
        let (graph, props) = builder.build();

        assert_eq!(graph.number_of_vertices(), 4);
        assert_eq!(graph.number_of_arcs(), 0);
        assert!(props.is_empty());
    }

    #[test]
    fn properties_follow_arcs() {
        let mut builder = StaticDigraphBuilder::new(4);
        builder
            .add_arc(3, 0, 'd')
            .add_arc(1, 2, 'b')
            .add_arc(0, 1, 'a')
            .add_arc(2, 0, 'c');

        assert_eq!(builder.number_of_arcs(), 4);
        let (graph, labels) = builder.build();

        for (a, (u, v)) in graph.arc_entries() {
            let expected = match (u, v) {
                (0, 1) => 'a',
                (1, 2) => 'b',
                (2, 0) => 'c',
                (3, 0) => 'd',
                _ => unreachable!(),
            };
            assert_eq!(labels[a], expected);
        }
    }

    #[test]
    fn tuple_properties() {
        let mut builder = StaticDigraphBuilder::new(2);
        builder.add_arc(1, 0, (9u32, true)).add_arc(0, 1, (4u32, false));

        let (graph, props) = builder.build();
        assert_eq!(graph.source(0), 0);
        assert_eq!(props[0u32], (4, false));
        assert_eq!(props[1u32], (9, true));
    }

    #[test]
    fn repeated_arcs_keep_insertion_order() {
        let mut builder = StaticDigraphBuilder::new(2);
        builder.add_arc(0, 1, 'x').add_arc(1, 0, 'z').add_arc(0, 1, 'y');

        let (graph, labels) = builder.build();
        assert_eq!(graph.out_arcs(0).collect_vec(), vec![0, 1]);
        assert_eq!(labels[0u32], 'x');
        assert_eq!(labels[1u32], 'y');
        assert_eq!(labels[2u32], 'z');
    }

    #[test]
    fn arc_ids_independent_of_insertion_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        let n = 15 as NumVertices;
        let mut arcs = (0..60)
            .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
            .collect_vec();
        arcs.sort_unstable();
        arcs.dedup();

        let mut reference: Option<Vec<(Arc, (Vertex, Vertex))>> = None;
        for _ in 0..5 {
            arcs.shuffle(rng);

            let mut builder = StaticDigraphBuilder::new(n);
            for &(u, v) in &arcs {
                builder.add_arc(u, v, u + v);
            }
            let (graph, weights) = builder.build();

            let entries = graph.arc_entries().collect_vec();
            match &reference {
                None => reference = Some(entries),
                Some(expected) => assert_eq!(&entries, expected),
            }

            for (a, (u, v)) in graph.arc_entries() {
                assert_eq!(weights[a], u + v);
            }
        }
    }
}
