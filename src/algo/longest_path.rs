//! Find the longest simple path between two cities.
//!
//! The problem is NP-hard, the search enumerates all simple paths leaving the
//! start city by backtracking and takes exponential time in the worst case.
//! It is therefore bounded by [`Limits`](crate::core::Limits).
//!
//! # Examples
//!
//! ```
//! use citynet::{algo::LongestPath, network::RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("A", "B", 4).unwrap();
//! network.add_route("A", "C", 2).unwrap();
//! network.add_route("B", "C", 5).unwrap();
//! network.add_route("B", "D", 10).unwrap();
//!
//! let a = network.find_city("A").unwrap();
//! let d = network.find_city("D").unwrap();
//!
//! let longest = LongestPath::on(&network).run(a, d).unwrap();
//! assert_eq!(longest.distance(), 17);
//! assert_eq!(network.names(&longest.path().cities), vec!["A", "C", "B", "D"]);
//! ```

use thiserror::Error;

use crate::{
    common::{Stack, TypedBitSet, VisitSet},
    core::{
        id::CityId,
        limits::{LimitExceeded, Limits},
        path::Path,
        weight::{Distance, TotalDistance},
    },
    network::RoadNetwork,
};

/// The longest simple path found and statistics of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPath {
    path: Path,
    explored: u64,
}

impl LongestPath {
    pub fn on(network: &RoadNetwork) -> LongestPathBuilder<'_> {
        LongestPathBuilder {
            network,
            limits: Limits::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn distance(&self) -> TotalDistance {
        self.path.distance
    }

    /// Number of partial paths extended during the search.
    pub fn explored(&self) -> u64 {
        self.explored
    }
}

pub struct LongestPathBuilder<'a> {
    network: &'a RoadNetwork,
    limits: Limits,
}

impl<'a> LongestPathBuilder<'a> {
    pub fn limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    pub fn run(self, start: CityId, end: CityId) -> Result<LongestPath, Error> {
        let LongestPathBuilder { network, limits } = self;

        if !network.contains(start) || !network.contains(end) {
            return Err(Error::CityNotFound);
        }

        let result = longest_path(network, start, end, &limits);

        match &result {
            Ok(longest) => tracing::debug!(
                %start,
                %end,
                distance = longest.distance(),
                explored = longest.explored(),
                "longest path found"
            ),
            Err(Error::Limit(error)) => tracing::warn!(%start, %end, %error, "longest path search aborted"),
            Err(error) => tracing::debug!(%start, %end, %error, "longest path not found"),
        }

        result
    }
}

/// The error encountered during a [`LongestPath`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("city not found")]
    CityNotFound,

    #[error("no path exists")]
    NoPath,

    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}

struct Frame {
    city: CityId,
    // Index of the next road of `city` to try.
    next: usize,
    // Distance of the road by which the city was entered.
    entered_by: Distance,
}

fn longest_path(
    network: &RoadNetwork,
    start: CityId,
    end: CityId,
    limits: &Limits,
) -> Result<LongestPath, Error> {
    if start == end {
        return Ok(LongestPath {
            path: Path::trivial(start),
            explored: 0,
        });
    }

    let mut budget = limits.budget();
    let mut explored = 0;

    let mut on_path = TypedBitSet::with_capacity(network.city_bound());
    let mut stack = Stack::new();
    let mut distance: TotalDistance = 0;
    let mut best: Option<Path> = None;

    on_path.visit(start);
    stack.push(Frame {
        city: start,
        next: 0,
        entered_by: 0,
    });

    loop {
        let (city, index) = match stack.top_mut() {
            Some(frame) => {
                frame.next += 1;
                (frame.city, frame.next - 1)
            }
            None => break,
        };

        let Some(road) = network.roads(city).get(index) else {
            // All roads of the city were tried, backtrack.
            if let Some(frame) = stack.pop() {
                on_path.unvisit(&frame.city);
                distance -= TotalDistance::from(frame.entered_by);
            }
            continue;
        };

        if on_path.is_visited(&road.to) {
            continue;
        }

        budget.tick()?;
        explored += 1;

        let next_distance = distance + TotalDistance::from(road.distance);

        if road.to == end {
            // Ties keep the path found first.
            if best.as_ref().map_or(true, |best| next_distance > best.distance) {
                let cities = stack
                    .as_slice()
                    .iter()
                    .map(|frame| frame.city)
                    .chain(std::iter::once(end))
                    .collect();
                best = Some(Path::new(cities, next_distance));
            }

            // A simple path cannot continue past its end.
            continue;
        }

        on_path.visit(road.to);
        distance = next_distance;
        stack.push(Frame {
            city: road.to,
            next: 0,
            entered_by: road.distance,
        });
    }

    best.map(|path| LongestPath { path, explored })
        .ok_or(Error::NoPath)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        algo::ShortestPaths,
        infra::{
            proptest::network,
            testing::{create_complete_network, create_sample_network},
        },
    };

    use super::*;

    fn city(network: &RoadNetwork, name: &str) -> CityId {
        network.find_city(name).unwrap()
    }

    #[test]
    fn sample_scenario() {
        let network = create_sample_network();
        let longest = LongestPath::on(&network)
            .run(city(&network, "A"), city(&network, "D"))
            .unwrap();

        assert_eq!(longest.distance(), 17);
        assert_eq!(
            network.names(&longest.path().cities),
            vec!["A", "C", "B", "D"]
        );
    }

    #[test]
    fn ties_keep_first() {
        let mut network = RoadNetwork::new();
        network.add_route("A", "B", 1).unwrap();
        network.add_route("A", "C", 1).unwrap();
        network.add_route("B", "D", 1).unwrap();
        network.add_route("C", "D", 1).unwrap();

        let longest = LongestPath::on(&network)
            .run(city(&network, "A"), city(&network, "D"))
            .unwrap();

        assert_eq!(longest.distance(), 2);
        assert_eq!(network.names(&longest.path().cities), vec!["A", "B", "D"]);
    }

    #[test]
    fn start_is_end() {
        let network = create_sample_network();
        let a = city(&network, "A");

        let longest = LongestPath::on(&network).run(a, a).unwrap();
        assert_eq!(longest.into_path(), Path::trivial(a));
    }

    #[test]
    fn no_path() {
        let mut network = create_sample_network();
        network.add_route("X", "Y", 1).unwrap();

        assert_matches!(
            LongestPath::on(&network).run(city(&network, "A"), city(&network, "X")),
            Err(Error::NoPath)
        );
    }

    #[test]
    fn unknown_city() {
        let network = create_sample_network();
        let unknown = CityId::from_usize(network.city_count());

        assert_matches!(
            LongestPath::on(&network).run(city(&network, "A"), unknown),
            Err(Error::CityNotFound)
        );
    }

    #[test]
    fn expansion_limit() {
        let network = create_complete_network(9);

        let result = LongestPath::on(&network)
            .limits(Limits::unbounded().max_expansions(10))
            .run(CityId::from_usize(0), CityId::from_usize(8));

        assert_matches!(
            result,
            Err(Error::Limit(LimitExceeded::Expansions { max: 10 }))
        );
    }

    #[test]
    fn unbounded_complete() {
        let network = create_complete_network(6);

        let longest = LongestPath::on(&network)
            .limits(Limits::unbounded())
            .run(CityId::from_usize(0), CityId::from_usize(5))
            .unwrap();

        // Hamiltonian path visiting every city.
        assert_eq!(longest.path().cities.len(), 6);
        assert!(longest.explored() > 0);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_longest_path_is_simple_and_not_shorter(network in network().max_size(8), start: u64, end: u64) {
            let n = network.city_count() as u64;
            prop_assume!(n > 0);

            let start = CityId::from_usize((start % n) as usize);
            let end = CityId::from_usize((end % n) as usize);

            let longest = LongestPath::on(&network).limits(Limits::unbounded()).run(start, end);
            let shortest = ShortestPaths::on(&network).goal(end).run(start);

            match (longest, shortest) {
                (Ok(longest), Ok(shortest)) => {
                    let path = longest.path();
                    let mut cities = path.cities.clone();
                    cities.sort();
                    cities.dedup();

                    prop_assert_eq!(cities.len(), path.cities.len());
                    prop_assert_eq!(path.start(), Some(start));
                    prop_assert_eq!(path.end(), Some(end));
                    prop_assert!(path.distance >= shortest[end]);
                }
                (Err(Error::NoPath), Err(_)) => {}
                (longest, shortest) => prop_assert!(false, "{:?} vs {:?}", longest, shortest),
            }
        }
    }
}
