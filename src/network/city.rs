use crate::core::{id::CityId, name::CityKey, weight::Distance};

#[derive(Debug, Clone, PartialEq)]
pub(super) struct City {
    pub name: String,
    pub key: CityKey,
    pub roads: Vec<Road>,
}

impl City {
    pub fn new(name: String, key: CityKey) -> Self {
        Self {
            name,
            key,
            roads: Vec::new(),
        }
    }
}

/// One direction of an undirected route, stored at its source city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Road {
    pub to: CityId,
    pub distance: Distance,
}

/// An undirected route, reported once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub from: CityId,
    pub to: CityId,
    pub distance: Distance,
}
