//! Identifiers of cities in a [`RoadNetwork`](crate::network::RoadNetwork).
//!
//! Cities are never removed from a network individually (only by clearing
//! it), so an id stays valid for the whole life of the network between
//! clears and can be used to index contiguous arrays.

use std::fmt;

/// Dense index of a city in its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(u32);

impl CityId {
    /// The largest number of cities a network can hold.
    pub const CAPACITY: usize = u32::MAX as usize;

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// # Panics
    ///
    /// Panics if `index` does not fit into the id representation. Use
    /// [`CityId::try_from_usize`] for a fallible conversion.
    pub fn from_usize(index: usize) -> Self {
        Self::try_from_usize(index).expect("city index overflow")
    }

    pub fn try_from_usize(index: usize) -> Option<Self> {
        u32::try_from(index).ok().filter(|&i| i != u32::MAX).map(Self)
    }
}

impl From<CityId> for usize {
    fn from(id: CityId) -> Self {
        id.as_usize()
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        let id = CityId::from_usize(42);
        assert_eq!(id.as_usize(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(id.to_string(), "#42");
    }

    #[test]
    fn capacity() {
        assert!(CityId::try_from_usize(CityId::CAPACITY - 1).is_some());
        assert!(CityId::try_from_usize(CityId::CAPACITY).is_none());
    }
}
