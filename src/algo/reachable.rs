//! Cities reachable from a given city.
//!
//! # Examples
//!
//! ```
//! use citynet::{algo::reachable, network::RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("Mekele", "Adigrat", 120).unwrap();
//! network.add_route("Adigrat", "Axum", 180).unwrap();
//! network.add_route("Jimma", "Bonga", 110).unwrap();
//!
//! let mekele = network.find_city("Mekele").unwrap();
//! let mut names = network.names(&reachable(&network, mekele));
//! names.sort();
//!
//! assert_eq!(names, vec!["Adigrat", "Axum"]);
//! ```

use crate::{
    common::{Stack, TypedBitSet, VisitSet},
    core::id::CityId,
    network::RoadNetwork,
};

/// All cities connected to `start` by some path, excluding `start` itself.
///
/// The cities are listed in the order of a depth-first traversal. That order
/// depends on the order in which routes were added and callers should not
/// rely on it. An unknown `start` has no reachable cities.
pub fn reachable(network: &RoadNetwork, start: CityId) -> Vec<CityId> {
    if !network.contains(start) {
        return Vec::new();
    }

    let mut visited = TypedBitSet::with_capacity(network.city_bound());
    let mut stack = Stack::new();
    let mut result = Vec::new();

    stack.push(start);

    while let Some(city) = stack.pop() {
        // Cities can be pushed multiple times before they are popped.
        if !visited.visit(city) {
            continue;
        }

        if city != start {
            result.push(city);
        }

        for road in network.roads(city) {
            if !visited.is_visited(&road.to) {
                stack.push(road.to);
            }
        }
    }

    tracing::debug!(%start, count = result.len(), "reachable cities collected");
    result
}

/// Whether there is a path between the two cities.
///
/// A city is always connected to itself.
pub fn is_path_between(network: &RoadNetwork, from: CityId, to: CityId) -> bool {
    if !network.contains(from) || !network.contains(to) {
        return false;
    }

    from == to || reachable(network, from).contains(&to)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algo::ShortestPaths,
        infra::{proptest::network, testing::create_sample_network},
    };

    use super::*;

    fn sorted_names(network: &RoadNetwork, ids: &[CityId]) -> Vec<String> {
        let mut names = network.names(ids);
        names.sort();
        names
    }

    #[test]
    fn excludes_start() {
        let network = create_sample_network();
        let a = network.find_city("A").unwrap();

        let cities = reachable(&network, a);
        assert_eq!(sorted_names(&network, &cities), vec!["B", "C", "D", "E"]);
    }

    #[test]
    fn separate_components() {
        let mut network = create_sample_network();
        network.add_route("X", "Y", 1).unwrap();
        network.add_route("Y", "Z", 1).unwrap();

        let x = network.find_city("x").unwrap();
        assert_eq!(sorted_names(&network, &reachable(&network, x)), vec!["Y", "Z"]);

        let a = network.find_city("a").unwrap();
        assert!(!is_path_between(&network, a, x));
        assert!(is_path_between(&network, a, network.find_city("D").unwrap()));
    }

    #[test]
    fn isolated_city() {
        let mut network = create_sample_network();
        network.add_route("X", "Y", 1).unwrap();
        network.remove_route("X", "Y").unwrap();

        let x = network.find_city("X").unwrap();
        assert!(reachable(&network, x).is_empty());
        assert!(is_path_between(&network, x, x));
    }

    #[test]
    fn unknown_start() {
        let network = create_sample_network();
        let unknown = CityId::from_usize(network.city_count());

        assert!(reachable(&network, unknown).is_empty());
        assert!(!is_path_between(&network, unknown, unknown));
    }

    #[test]
    fn no_duplicates() {
        let network = create_sample_network();
        let e = network.find_city("E").unwrap();

        let mut cities = reachable(&network, e);
        let count = cities.len();
        cities.sort();
        cities.dedup();

        assert_eq!(cities.len(), count);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_reachable_agrees_with_shortest_paths(network in network(), start: u64) {
            let n = network.city_count() as u64;
            prop_assume!(n > 0);

            let start = CityId::from_usize((start % n) as usize);
            let mut cities = reachable(&network, start);
            cities.sort();

            let paths = ShortestPaths::on(&network).run(start).unwrap();
            let expected = network
                .city_ids()
                .filter(|&v| v != start && paths.dist(v).is_some())
                .collect::<Vec<_>>();

            prop_assert_eq!(cities, expected);
        }
    }
}
