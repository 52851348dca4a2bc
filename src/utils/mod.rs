/*!
# Utilities

Provides the data structures the graph representations and search algorithms
are built on:
- [`StaticMap`]: a dense id-indexed map used for all per-vertex/per-arc state,
- abstractions over read-only [`Mapping`]s for more flexibility in providing
  arc lengths and other per-id data,
- [`DAryHeap`]: the updatable priority queue of the shortest-path searches.

Apart from `Mapping`, `StaticMap` and the heap types, you probably do not
need to interact with this module directly.
*/

pub mod dary_heap;
pub mod map;
pub mod static_map;

// Only export most important traits / structs

pub use dary_heap::{DAryHeap, UpdatablePriorityQueue};
pub use map::{MapView, Mapping};
pub use static_map::{ArcMap, StaticMap, VertexMap};
