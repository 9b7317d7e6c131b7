use std::marker::PhantomData;

use fixedbitset::FixedBitSet;

use crate::core::id::CityId;

/// Set of visited elements during a traversal.
pub trait VisitSet<I> {
    /// Marks the element as visited. Returns `true` if it was not visited
    /// before.
    fn visit(&mut self, index: I) -> bool;
    /// Clears the visited mark. Returns `true` if the element was visited.
    fn unvisit(&mut self, index: &I) -> bool;
    fn is_visited(&self, index: &I) -> bool;
}

/// Bit set indexed by a typed id. Grows on demand.
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl VisitSet<CityId> for TypedBitSet<CityId> {
    fn visit(&mut self, index: CityId) -> bool {
        let bit = index.as_usize();
        if bit >= self.inner.len() {
            self.inner.grow(bit + 1);
        }
        !self.inner.put(bit)
    }

    fn unvisit(&mut self, index: &CityId) -> bool {
        let bit = index.as_usize();
        if self.inner.contains(bit) {
            self.inner.set(bit, false);
            true
        } else {
            false
        }
    }

    fn is_visited(&self, index: &CityId) -> bool {
        self.inner.contains(index.as_usize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_and_unvisit() {
        let mut set = TypedBitSet::with_capacity(4);
        let a = CityId::from_usize(0);
        let b = CityId::from_usize(70);

        assert!(set.visit(a));
        assert!(!set.visit(a));
        assert!(set.visit(b));
        assert!(set.is_visited(&b));

        assert!(set.unvisit(&b));
        assert!(!set.unvisit(&b));
        assert!(!set.is_visited(&b));
        assert!(set.is_visited(&a));
    }

    #[test]
    fn out_of_range_is_unvisited() {
        let mut set = TypedBitSet::with_capacity(2);
        let far = CityId::from_usize(1000);

        assert!(!set.is_visited(&far));
        assert!(!set.unvisit(&far));
    }
}
