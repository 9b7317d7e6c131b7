//! Undirected road network over case-insensitively named cities.
//!
//! Every route `{u, v}` is stored as two half-edges ([`Road`]s), one in the
//! adjacency list of each endpoint, carrying the same distance. The two
//! halves are always inserted, updated and removed together.
//!
//! Cities are created implicitly by adding a route. Removing the last route
//! of a city keeps the city in the network (with no roads) until the network
//! is [cleared](RoadNetwork::clear). Thanks to that, [`CityId`]s are stable.
//!
//! # Examples
//!
//! ```
//! use citynet::network::RoadNetwork;
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("Addis Ababa", "Adama", 100).unwrap();
//! network.add_route("adama", "Dire Dawa", 350).unwrap();
//!
//! assert_eq!(network.city_count(), 3);
//! assert_eq!(network.distance("ADAMA", "addis ababa"), Some(100));
//!
//! let adama = network.find_city("Adama").unwrap();
//! assert_eq!(network.name(adama), Some("Adama"));
//! ```

mod city;

pub use city::{Road, Route};

use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddRouteError, AddRouteErrorKind, ReplaceRouteError},
    id::CityId,
    name::CityKey,
    weight::Distance,
};

use city::City;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoadNetwork {
    cities: Vec<City>,
    lookup: FxHashMap<CityKey, CityId>,
    route_count: usize,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(city_count: usize) -> Self {
        Self {
            cities: Vec::with_capacity(city_count),
            lookup: FxHashMap::with_capacity_and_hasher(city_count, Default::default()),
            route_count: 0,
        }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Upper bound of city ids, usable as a size of id-indexed arrays.
    pub fn city_bound(&self) -> usize {
        self.cities.len()
    }

    /// Number of undirected routes.
    pub fn route_count(&self) -> usize {
        self.route_count
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub(crate) fn lookup_len(&self) -> usize {
        self.lookup.len()
    }

    pub fn find_city(&self, name: &str) -> Option<CityId> {
        self.lookup.get(&CityKey::new(name)).copied()
    }

    pub fn contains_city(&self, name: &str) -> bool {
        self.find_city(name).is_some()
    }

    pub fn contains(&self, id: CityId) -> bool {
        id.as_usize() < self.cities.len()
    }

    /// Canonical (first-seen) spelling of the city name.
    pub fn name(&self, id: CityId) -> Option<&str> {
        self.cities.get(id.as_usize()).map(|city| city.name.as_str())
    }

    pub fn key(&self, id: CityId) -> Option<&CityKey> {
        self.cities.get(id.as_usize()).map(|city| &city.key)
    }

    /// Canonical names of the given cities. Unknown ids are skipped.
    pub fn names<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a CityId>,
    {
        ids.into_iter()
            .filter_map(|id| self.name(*id))
            .map(ToOwned::to_owned)
            .collect()
    }

    /// All city ids in the order of creation.
    pub fn city_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len()).map(CityId::from_usize)
    }

    /// All cities, ordered by their normalized names.
    pub fn cities(&self) -> Vec<CityId> {
        let mut ids = self.city_ids().collect::<Vec<_>>();
        ids.sort_by(|a, b| self.cities[a.as_usize()].key.cmp(&self.cities[b.as_usize()].key));
        ids
    }

    /// Canonical names of all cities, ordered by their normalized names.
    pub fn city_names(&self) -> Vec<&str> {
        self.cities()
            .into_iter()
            .map(|id| self.cities[id.as_usize()].name.as_str())
            .collect()
    }

    /// Half-edges leaving the city. Empty for an unknown city.
    pub fn roads(&self, id: CityId) -> &[Road] {
        self.cities
            .get(id.as_usize())
            .map(|city| city.roads.as_slice())
            .unwrap_or(&[])
    }

    /// Half-edges leaving the named city. Empty for an unknown city.
    pub fn neighbors(&self, name: &str) -> &[Road] {
        match self.find_city(name) {
            Some(id) => self.roads(id),
            None => &[],
        }
    }

    pub fn degree(&self, id: CityId) -> usize {
        self.roads(id).len()
    }

    /// Distance of the direct route between two cities, if there is one.
    pub fn distance_between(&self, a: CityId, b: CityId) -> Option<Distance> {
        self.roads(a)
            .iter()
            .find(|road| road.to == b)
            .map(|road| road.distance)
    }

    pub fn distance(&self, u: &str, v: &str) -> Option<Distance> {
        let (a, b) = (self.find_city(u)?, self.find_city(v)?);
        self.distance_between(a, b)
    }

    pub fn has_route(&self, u: &str, v: &str) -> bool {
        self.distance(u, v).is_some()
    }

    /// Adds a route or replaces the distance of an existing one.
    ///
    /// Returns the replaced distance, if the route existed before. Cities
    /// that are not in the network yet are created, keeping the given
    /// spelling as their canonical name.
    pub fn add_route(
        &mut self,
        u: &str,
        v: &str,
        distance: Distance,
    ) -> Result<Option<Distance>, AddRouteError> {
        let fail = |kind| AddRouteError::new(distance, kind);

        if distance == 0 {
            return Err(fail(AddRouteErrorKind::ZeroDistance));
        }

        let key_u = CityKey::new(u);
        let key_v = CityKey::new(v);

        if key_u == key_v {
            return Err(fail(AddRouteErrorKind::SelfLoop));
        }

        let missing = [&key_u, &key_v]
            .iter()
            .filter(|key| !self.lookup.contains_key(**key))
            .count();
        if self.cities.len() + missing > CityId::CAPACITY {
            return Err(fail(AddRouteErrorKind::CapacityOverflow));
        }

        let a = self.ensure_city(u, key_u);
        let b = self.ensure_city(v, key_v);

        let previous = self.set_road(a, b, distance);
        self.set_road(b, a, distance);

        if previous.is_none() {
            self.route_count += 1;
        }

        tracing::trace!(from = %u, to = %v, distance, replaced = ?previous, "route added");
        Ok(previous)
    }

    /// Changes the distance of an existing route.
    ///
    /// Returns the previous distance. Fails without touching the network if
    /// the route does not exist.
    pub fn update_route(
        &mut self,
        u: &str,
        v: &str,
        distance: Distance,
    ) -> Result<Distance, ReplaceRouteError> {
        if distance == 0 {
            return Err(ReplaceRouteError::ZeroDistance);
        }

        let (a, b) = match (self.find_city(u), self.find_city(v)) {
            (Some(a), Some(b)) if self.distance_between(a, b).is_some() => (a, b),
            _ => return Err(ReplaceRouteError::RouteAbsent(distance)),
        };

        let previous = self.set_road(a, b, distance);
        self.set_road(b, a, distance);

        tracing::trace!(from = %u, to = %v, distance, "route updated");
        previous.ok_or(ReplaceRouteError::RouteAbsent(distance))
    }

    /// Removes the route between two cities and returns its distance.
    ///
    /// The cities themselves stay in the network even if they are left
    /// without any route.
    pub fn remove_route(&mut self, u: &str, v: &str) -> Option<Distance> {
        let a = self.find_city(u)?;
        let b = self.find_city(v)?;

        let distance = self.remove_road(a, b)?;
        self.remove_road(b, a);
        self.route_count -= 1;

        tracing::trace!(from = %u, to = %v, distance, "route removed");
        Some(distance)
    }

    /// Every undirected route exactly once.
    ///
    /// Each route is oriented so that the normalized name of `from` sorts
    /// before the normalized name of `to`, and the routes are listed in that
    /// order.
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = Vec::with_capacity(self.route_count);

        for (index, city) in self.cities.iter().enumerate() {
            let from = CityId::from_usize(index);
            for road in &city.roads {
                if city.key < self.cities[road.to.as_usize()].key {
                    routes.push(Route {
                        from,
                        to: road.to,
                        distance: road.distance,
                    });
                }
            }
        }

        routes.sort_by(|lhs, rhs| {
            let key = |id: CityId| &self.cities[id.as_usize()].key;
            key(lhs.from)
                .cmp(key(rhs.from))
                .then_with(|| key(lhs.to).cmp(key(rhs.to)))
        });

        routes
    }

    /// Removes all cities and routes. Previously returned ids become invalid.
    pub fn clear(&mut self) {
        self.cities.clear();
        self.lookup.clear();
        self.route_count = 0;
    }

    fn ensure_city(&mut self, name: &str, key: CityKey) -> CityId {
        if let Some(id) = self.lookup.get(&key) {
            return *id;
        }

        let id = CityId::from_usize(self.cities.len());
        self.cities
            .push(City::new(name.to_owned(), key.clone()));
        self.lookup.insert(key, id);
        id
    }

    fn set_road(&mut self, from: CityId, to: CityId, distance: Distance) -> Option<Distance> {
        let roads = &mut self.cities[from.as_usize()].roads;

        match roads.iter_mut().find(|road| road.to == to) {
            Some(road) => Some(std::mem::replace(&mut road.distance, distance)),
            None => {
                roads.push(Road { to, distance });
                None
            }
        }
    }

    fn remove_road(&mut self, from: CityId, to: CityId) -> Option<Distance> {
        let roads = &mut self.cities.get_mut(from.as_usize())?.roads;
        let index = roads.iter().position(|road| road.to == to)?;
        Some(roads.swap_remove(index).distance)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::infra::testing::{check_consistency, create_sample_network};

    use super::*;

    fn names(network: &RoadNetwork, ids: &[CityId]) -> Vec<String> {
        network.names(ids)
    }

    #[test]
    fn add_symmetric() {
        let mut network = RoadNetwork::new();
        assert_eq!(network.add_route("A", "B", 10), Ok(None));

        assert!(network.has_route("A", "B"));
        assert!(network.has_route("B", "A"));
        assert_eq!(network.distance("A", "B"), Some(10));
        assert_eq!(network.distance("B", "A"), Some(10));
        assert_eq!(network.route_count(), 1);
        check_consistency(&network).unwrap();
    }

    #[test]
    fn add_is_upsert() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 10).unwrap();

        assert_eq!(network.add_route("b", "a", 7), Ok(Some(10)));
        assert_eq!(network.distance("A", "B"), Some(7));
        assert_eq!(network.route_count(), 1);
        assert_eq!(network.roads(network.find_city("a").unwrap()).len(), 1);
        check_consistency(&network).unwrap();
    }

    #[test]
    fn add_invalid() {
        let mut network = RoadNetwork::new();

        assert_matches!(
            network.add_route("A", "B", 0),
            Err(AddRouteError {
                kind: AddRouteErrorKind::ZeroDistance,
                ..
            })
        );
        assert_matches!(
            network.add_route("Gondar", "GONDAR", 1),
            Err(AddRouteError {
                kind: AddRouteErrorKind::SelfLoop,
                ..
            })
        );

        assert!(network.is_empty());
    }

    #[test]
    fn case_insensitive_identity() {
        let mut network = RoadNetwork::new();
        network.add_route("Addis Ababa", "Adama", 100).unwrap();
        network.add_route("ADDIS ABABA", "bahir dar", 500).unwrap();

        assert_eq!(network.city_count(), 3);
        assert!(network.contains_city("addis ababa"));

        let addis = network.find_city("aDdIs AbAbA").unwrap();
        assert_eq!(network.name(addis), Some("Addis Ababa"));
        assert_eq!(network.degree(addis), 2);
    }

    #[test]
    fn whitespace_distinguishes_cities() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 1).unwrap();
        network.add_route(" A", "C", 1).unwrap();
        network.add_route("", "B", 2).unwrap();

        assert_eq!(network.city_count(), 5);
        assert_ne!(network.find_city(" a"), network.find_city("a"));
        assert_eq!(network.name(network.find_city(" a").unwrap()), Some(" A"));
        assert_eq!(network.distance("", "b"), Some(2));
        check_consistency(&network).unwrap();
    }

    #[test]
    fn update_existing() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 10).unwrap();

        assert_eq!(network.update_route("B", "A", 20), Ok(10));
        assert_eq!(network.distance("A", "B"), Some(20));
        check_consistency(&network).unwrap();
    }

    #[test]
    fn update_missing() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 10).unwrap();
        network.add_route("B", "C", 10).unwrap();

        assert_eq!(
            network.update_route("A", "C", 5),
            Err(ReplaceRouteError::RouteAbsent(5))
        );
        assert_eq!(
            network.update_route("A", "Z", 5),
            Err(ReplaceRouteError::RouteAbsent(5))
        );
        assert_eq!(
            network.update_route("A", "B", 0),
            Err(ReplaceRouteError::ZeroDistance)
        );
        assert!(!network.contains_city("Z"));
        assert_eq!(network.distance("A", "B"), Some(10));
    }

    #[test]
    fn remove_keeps_isolated_cities() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 10).unwrap();
        network.add_route("B", "C", 5).unwrap();

        assert_eq!(network.remove_route("a", "b"), Some(10));
        assert!(!network.has_route("A", "B"));
        assert!(!network.has_route("B", "A"));
        assert_eq!(network.route_count(), 1);

        // A has no route left but is still a city of the network.
        let a = network.find_city("A").unwrap();
        assert!(network.roads(a).is_empty());
        assert_eq!(network.city_names(), vec!["A", "B", "C"]);
        check_consistency(&network).unwrap();
    }

    #[test]
    fn remove_missing() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 10).unwrap();

        assert_eq!(network.remove_route("A", "C"), None);
        assert_eq!(network.remove_route("X", "Y"), None);
        assert_eq!(network.route_count(), 1);
    }

    #[test]
    fn neighbors_unknown_city() {
        let network = create_sample_network();
        assert!(network.neighbors("Nowhere").is_empty());
        assert_eq!(network.neighbors("e").len(), 2);
    }

    #[test]
    fn routes_reported_once() {
        let network = create_sample_network();
        let routes = network.routes();

        assert_eq!(routes.len(), 6);
        assert_eq!(routes.len(), network.route_count());

        let listed = routes
            .iter()
            .map(|route| {
                let pair = names(&network, &[route.from, route.to]);
                (pair[0].clone(), pair[1].clone(), route.distance)
            })
            .collect::<Vec<_>>();

        assert_eq!(
            listed,
            vec![
                ("A".to_string(), "B".to_string(), 4),
                ("A".to_string(), "C".to_string(), 2),
                ("B".to_string(), "C".to_string(), 5),
                ("B".to_string(), "D".to_string(), 10),
                ("C".to_string(), "E".to_string(), 3),
                ("D".to_string(), "E".to_string(), 4),
            ]
        );
    }

    #[test]
    fn cities_sorted_by_key() {
        let mut network = RoadNetwork::new();
        network.add_route("delta", "Alpha", 1).unwrap();
        network.add_route("charlie", "Bravo", 1).unwrap();

        assert_eq!(
            network.city_names(),
            vec!["Alpha", "Bravo", "charlie", "delta"]
        );
    }

    #[test]
    fn clear_removes_everything() {
        let mut network = create_sample_network();
        network.clear();

        assert!(network.is_empty());
        assert_eq!(network.route_count(), 0);
        assert!(network.routes().is_empty());
        assert_eq!(network.find_city("A"), None);
        check_consistency(&network).unwrap();

        network.add_route("A", "B", 1).unwrap();
        assert_eq!(network.find_city("A"), Some(CityId::from_usize(0)));
    }
}
