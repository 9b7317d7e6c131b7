//! Primitive containers the routing algorithms are built from.
//!
//! The algorithms keep their frontiers in these containers explicitly instead
//! of relying on recursion or ad-hoc sorting.

pub mod min_heap;
pub mod queue;
pub mod stack;
pub mod union_find;
pub mod visit_set;

pub use min_heap::MinHeap;
pub use queue::Queue;
pub use stack::Stack;
pub use union_find::UnionFind;
pub use visit_set::{TypedBitSet, VisitSet};
