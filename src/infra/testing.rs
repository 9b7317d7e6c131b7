use thiserror::Error;

use crate::{
    core::{id::CityId, name::CityKey},
    network::RoadNetwork,
};

/// The network used throughout the documentation of the routing queries.
///
/// ```text
///     A --4-- B
///     |     / |
///     2   5   10
///     | /     |
///     C       D
///     |       |
///     3       4
///     \-- E --/
/// ```
pub fn create_sample_network() -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(5);

    for (u, v, distance) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 5),
        ("B", "D", 10),
        ("C", "E", 3),
        ("E", "D", 4),
    ] {
        network.add_route(u, v, distance).unwrap();
    }

    network
}

/// Six cities `v0` to `v5` with a unique shortest path from `v0` to every
/// other city.
pub fn create_basic_network() -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(6);

    for (u, v, distance) in [
        ("v0", "v1", 3),
        ("v0", "v2", 2),
        ("v1", "v2", 2),
        ("v1", "v3", 2),
        ("v1", "v4", 7),
        ("v2", "v3", 5),
        ("v3", "v4", 3),
        ("v4", "v5", 10),
    ] {
        network.add_route(u, v, distance).unwrap();
    }

    network
}

/// Every pair of cities `c0`, `c1`, ... connected by a route of distance 1.
/// City ids follow the numbering of the names.
pub fn create_complete_network(city_count: usize) -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(city_count);

    for u in 0..city_count {
        for v in (u + 1)..city_count {
            network
                .add_route(&format!("c{u}"), &format!("c{v}"), 1)
                .unwrap();
        }
    }

    network
}

/// Cities `c0`, `c1`, ... connected in a line, route `i` having distance
/// `i + 1`.
pub fn create_path_network(city_count: usize) -> RoadNetwork {
    let mut network = RoadNetwork::with_capacity(city_count);

    for u in 1..city_count {
        network
            .add_route(&format!("c{}", u - 1), &format!("c{u}"), u as u32)
            .unwrap();
    }

    network
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("city ids iterator count ({0}) is not equal to city count ({1})")]
    CityIdsCityCountMismatch(usize, usize),
    #[error("city bound ({0}) is less than city count ({1})")]
    CityBoundInvalid(usize, usize),
    #[error("lookup table size ({0}) is not equal to city count ({1})")]
    LookupCityCountMismatch(usize, usize),
    #[error("city {0} is not found by its own name")]
    LookupInvalid(CityId),
    #[error("key of city {0} does not match its name")]
    KeyInvalid(CityId),
    #[error("routes iterator count ({0}) is not equal to route count ({1})")]
    RoutesRouteCountMismatch(usize, usize),
    #[error("sum of degrees ({0}) is not equal to doubled route count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("road {0} -> {1} has no matching road in the opposite direction")]
    AsymmetricRoad(CityId, CityId),
    #[error("road {0} -> {1} is stored more than once")]
    DuplicateRoad(CityId, CityId),
    #[error("road {0} -> {1} is invalid")]
    InvalidRoad(CityId, CityId),
}

pub fn check_consistency(network: &RoadNetwork) -> Result<(), ConsistencyCheckError> {
    fn equal<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let city_count = network.city_count();

    equal(
        network.city_ids().count(),
        city_count,
        ConsistencyCheckError::CityIdsCityCountMismatch,
    )?;

    if network.city_bound() < city_count {
        return Err(ConsistencyCheckError::CityBoundInvalid(
            network.city_bound(),
            city_count,
        ));
    }

    equal(
        network.lookup_len(),
        city_count,
        ConsistencyCheckError::LookupCityCountMismatch,
    )?;

    for id in network.city_ids() {
        let name = network.name(id).unwrap_or_default();

        if network.find_city(name) != Some(id) {
            return Err(ConsistencyCheckError::LookupInvalid(id));
        }

        if network.key(id) != Some(&CityKey::new(name)) {
            return Err(ConsistencyCheckError::KeyInvalid(id));
        }
    }

    let route_count = network.route_count();

    equal(
        network.routes().len(),
        route_count,
        ConsistencyCheckError::RoutesRouteCountMismatch,
    )?;

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    equal(
        network.city_ids().map(|id| network.degree(id)).sum(),
        2 * route_count,
        ConsistencyCheckError::HandshakingLemma,
    )?;

    for from in network.city_ids() {
        let roads = network.roads(from);

        for (i, road) in roads.iter().enumerate() {
            if road.to == from || road.distance == 0 || !network.contains(road.to) {
                return Err(ConsistencyCheckError::InvalidRoad(from, road.to));
            }

            if roads[..i].iter().any(|other| other.to == road.to) {
                return Err(ConsistencyCheckError::DuplicateRoad(from, road.to));
            }

            if network.distance_between(road.to, from) != Some(road.distance) {
                return Err(ConsistencyCheckError::AsymmetricRoad(from, road.to));
            }
        }
    }

    Ok(())
}
