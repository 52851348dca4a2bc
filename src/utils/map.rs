/*!
# Generalized Read-Only Mappings

This module provides an abstraction over read-only `key -> value` lookups,
allowing algorithms to accept the most convenient source of per-arc or
per-vertex data:

- Dense indexed maps -> [`StaticMap`](crate::utils::StaticMap) / slices
- Sparse maps -> `HashMap` / `FxHashMap`
- Computed maps -> [`MapView`] around a closure

A [`Mapping`] must be side-effect-free and deterministic; the search
algorithms query it repeatedly during relaxation and cache nothing.
*/

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

/// Minimalist trait for read-only lookups with copyable values.
///
/// Looking up a key the mapping does not cover is a contract violation of the
/// caller; dense implementations panic on out-of-range indices.
pub trait Mapping<K> {
    /// The value type produced by the lookup.
    type Value: Copy;

    /// Returns the value associated with the given key.
    fn get(&self, key: K) -> Self::Value;
}

/// Slices are dense mappings from their indices.
///
/// # Examples
/// ```
/// use wgraphs::utils::Mapping;
///
/// let weights: &[u32] = &[7, 9, 14];
/// assert_eq!(Mapping::get(&weights, 1), 9);
/// ```
impl<T: Copy> Mapping<u32> for &[T] {
    type Value = T;

    #[inline(always)]
    fn get(&self, key: u32) -> T {
        self[key as usize]
    }
}

/// `HashMap` (with any hasher, hence also `FxHashMap`) usable as a sparse
/// mapping. The key must be present.
impl<K, V, S> Mapping<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Copy,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn get(&self, key: K) -> V {
        self[&key]
    }
}

/// A mapping computed on the fly by a closure.
///
/// Useful for lookups derivable from the key itself, such as unit arc
/// lengths or projections of packed arc data.
///
/// # Examples
/// ```
/// use wgraphs::utils::{MapView, Mapping};
///
/// let unit_lengths = MapView::new(|_arc: u32| 1u32);
/// assert_eq!(unit_lengths.get(42), 1);
///
/// let doubled = MapView::new(|x: u32| x * 2);
/// assert_eq!(doubled.get(21), 42);
/// ```
pub struct MapView<F>(F);

impl<F> MapView<F> {
    /// Wraps a closure as a [`Mapping`].
    pub fn new(map_fn: F) -> Self {
        Self(map_fn)
    }
}

impl<K, V, F> Mapping<K> for MapView<F>
where
    V: Copy,
    F: Fn(K) -> V,
{
    type Value = V;

    #[inline(always)]
    fn get(&self, key: K) -> V {
        (self.0)(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashMap;

    #[test]
    fn hash_map_lookup() {
        let mut lengths: FxHashMap<u32, u64> = FxHashMap::default();
        lengths.insert(0, 5);
        lengths.insert(3, 11);

        assert_eq!(Mapping::get(&lengths, 0), 5);
        assert_eq!(Mapping::get(&lengths, 3), 11);
    }

    #[test]
    fn slice_and_view_agree() {
        let values: &[u32] = &[0, 2, 4, 6];
        let view = MapView::new(|k: u32| k * 2);

        for k in 0..4 {
            assert_eq!(Mapping::get(&values, k), view.get(k));
        }
    }
}
