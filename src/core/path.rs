use super::{id::CityId, weight::TotalDistance};

/// A walk through the network together with its total distance.
///
/// Cities are listed from the start to the end, both inclusive. What the
/// distance measures depends on the query: summed route distances for
/// weighted searches, number of hops for unit-weight searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub cities: Vec<CityId>,
    pub distance: TotalDistance,
}

impl Path {
    pub fn new(cities: Vec<CityId>, distance: TotalDistance) -> Self {
        Self { cities, distance }
    }

    /// Path consisting of a single city.
    pub fn trivial(city: CityId) -> Self {
        Self::new(vec![city], 0)
    }

    /// Number of routes travelled, that is, the number of cities minus one.
    pub fn stops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<CityId> {
        self.cities.first().copied()
    }

    pub fn end(&self) -> Option<CityId> {
        self.cities.last().copied()
    }

    /// Appends `other` to this path. The last city of `self` must be the
    /// first city of `other`; it is kept only once.
    pub(crate) fn chain(&mut self, other: Path) {
        let mut cities = other.cities.into_iter();
        if self.cities.is_empty() {
            self.cities.extend(cities);
        } else {
            cities.next();
            self.cities.extend(cities);
        }
        self.distance = self.distance.saturating_add(other.distance);
    }
}
