//! Name-based facade over a [`RoadNetwork`] and the routing queries.
//!
//! [`RoutePlanner`] owns a network and the [`Limits`] for the searches. It
//! accepts city names in any case, validates the input, and turns the results
//! of the algorithms into report records with canonical city names. No
//! operation panics on user input and a failed operation leaves the network
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use citynet::RoutePlanner;
//!
//! let mut planner = RoutePlanner::new();
//! planner.add_route("Addis Ababa", "Adama", 99);
//! planner.add_route("adama", "Awash", 125);
//!
//! let report = planner.shortest_path("ADDIS ABABA", "awash");
//! assert!(report.found);
//! assert_eq!(report.distance, 224);
//! assert_eq!(report.path, vec!["Addis Ababa", "Adama", "Awash"]);
//!
//! let outcome = planner.add_route("Adama", "Awash", 0);
//! assert!(!outcome.success);
//! assert_eq!(outcome.message, "distance must be positive");
//! ```

pub mod report;

pub use report::{NetworkReport, Outcome, PathReport, RouteRecord, StopsReport, TourReport};

use thiserror::Error;

use crate::{
    algo::{
        longest_path, reachable, shortest_paths, spanning_forest, tour,
        LongestPath, ShortestPaths, SpanningForest, Tour,
    },
    core::{
        error::{AddRouteError, ReplaceRouteError},
        id::CityId,
        limits::Limits,
        path::Path,
        weight::Distance,
    },
    network::{RoadNetwork, Route},
};

/// The error reported by a failed [`RoutePlanner`] operation.
#[derive(Debug, PartialEq, Error)]
pub enum Error {
    #[error("distance must be positive")]
    NonPositiveDistance,

    #[error("distance must not exceed {}", Distance::MAX)]
    DistanceTooLarge,

    #[error("city '{0}' not found")]
    UnknownCity(String),

    #[error("route not found")]
    RouteNotFound,

    #[error(transparent)]
    AddRoute(#[from] AddRouteError),

    #[error(transparent)]
    ShortestPaths(#[from] shortest_paths::Error),

    #[error(transparent)]
    LongestPath(#[from] longest_path::Error),

    #[error(transparent)]
    Tour(#[from] tour::Error),

    #[error(transparent)]
    SpanningForest(#[from] spanning_forest::Error),
}

impl From<ReplaceRouteError> for Error {
    fn from(error: ReplaceRouteError) -> Self {
        match error {
            ReplaceRouteError::RouteAbsent(_) => Error::RouteNotFound,
            ReplaceRouteError::ZeroDistance => Error::NonPositiveDistance,
        }
    }
}

fn checked_distance(distance: i64) -> Result<Distance, Error> {
    if distance <= 0 {
        return Err(Error::NonPositiveDistance);
    }

    Distance::try_from(distance).map_err(|_| Error::DistanceTooLarge)
}

#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    network: RoadNetwork,
    limits: Limits,
}

impl RoutePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            network: RoadNetwork::new(),
            limits,
        }
    }

    /// Wraps an existing network.
    pub fn from_network(network: RoadNetwork) -> Self {
        Self {
            network,
            limits: Limits::default(),
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn set_limits(&mut self, limits: Limits) {
        self.limits = limits;
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    pub fn into_network(self) -> RoadNetwork {
        self.network
    }

    /// Adds a route, or replaces the distance of an existing one.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn add_route(&mut self, from: &str, to: &str, distance: i64) -> Outcome {
        let result = checked_distance(distance).and_then(|distance| {
            let replaced = self.network.add_route(from, to, distance)?;
            Ok((distance, replaced))
        });

        match result {
            Ok((distance, replaced)) => {
                let action = if replaced.is_some() { "updated" } else { "added" };
                Outcome::success(format!(
                    "route {action}: {}",
                    self.record(from, to, distance)
                ))
            }
            Err(error) => {
                tracing::debug!(%error, "route not added");
                Outcome::failure(error)
            }
        }
    }

    /// Changes the distance of an existing route. Fails if there is no route
    /// between the cities.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn update_route(&mut self, from: &str, to: &str, distance: i64) -> Outcome {
        let result = checked_distance(distance).and_then(|distance| {
            self.network.update_route(from, to, distance)?;
            Ok(distance)
        });

        match result {
            Ok(distance) => Outcome::success(format!(
                "route updated: {}",
                self.record(from, to, distance)
            )),
            Err(Error::RouteNotFound) => Outcome::failure(format_args!(
                "{}, use add_route to create it",
                Error::RouteNotFound
            )),
            Err(error) => Outcome::failure(error),
        }
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn remove_route(&mut self, from: &str, to: &str) -> Outcome {
        match self.network.remove_route(from, to) {
            Some(distance) => {
                let record = self.record(from, to, distance);
                Outcome::success(format!("route removed: {} <-> {}", record.from, record.to))
            }
            None => Outcome::failure(Error::RouteNotFound),
        }
    }

    /// Removes all cities and routes.
    pub fn clear(&mut self) -> Outcome {
        let (cities, routes) = (self.network.city_count(), self.network.route_count());
        self.network.clear();

        tracing::debug!(cities, routes, "network cleared");
        Outcome::success(format!("removed {cities} cities and {routes} routes"))
    }

    /// The route with the smallest total distance.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn shortest_path(&self, start: &str, end: &str) -> PathReport {
        let result = self
            .resolve(start)
            .and_then(|start| Ok((start, self.resolve(end)?)))
            .and_then(|(start, end)| self.shortest_segment(start, end));

        match result {
            Ok(path) => {
                let message = if path.stops() == 0 {
                    "start and destination are the same"
                } else {
                    "path found"
                };
                self.path_report(path, message)
            }
            Err(error) => PathReport::failure(error),
        }
    }

    /// The shortest route from `start` to `end` passing through the `via`
    /// cities in the given order.
    ///
    /// The route is composed of the shortest routes between consecutive
    /// cities. If any of them does not exist, the query fails with the reason
    /// of that segment.
    #[tracing::instrument(skip(self, via), level = "debug", fields(via = via.len()))]
    pub fn shortest_path_via<S: AsRef<str>>(&self, start: &str, via: &[S], end: &str) -> PathReport {
        let names = std::iter::once(start)
            .chain(via.iter().map(AsRef::as_ref))
            .chain(std::iter::once(end));

        let result = names
            .map(|name| self.resolve(name))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|cities| {
                let mut path = Path::new(Vec::new(), 0);
                for pair in cities.windows(2) {
                    path.chain(self.shortest_segment(pair[0], pair[1])?);
                }
                Ok(path)
            });

        match result {
            Ok(path) => self.path_report(path, "path found"),
            Err(error) => PathReport::failure(error),
        }
    }

    /// The route with the smallest number of stops, regardless of distances.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn fewest_stops(&self, start: &str, end: &str) -> StopsReport {
        let result = self
            .resolve(start)
            .and_then(|start| Ok((start, self.resolve(end)?)))
            .and_then(|(start, end)| {
                let shortest_paths = ShortestPaths::on(&self.network)
                    .goal(end)
                    .bfs()
                    .run(start)?;
                shortest_paths
                    .path_to(end)
                    .ok_or(Error::ShortestPaths(shortest_paths::Error::GoalNotReached))
            });

        match result {
            Ok(path) => StopsReport {
                found: true,
                stops: path.stops(),
                path: self.network.names(&path.cities),
                message: "path found with fewest stops".to_string(),
            },
            Err(error) => StopsReport::failure(error),
        }
    }

    /// The simple route (visiting no city twice) with the largest total
    /// distance.
    ///
    /// This query takes exponential time in the worst case and is bounded by
    /// the [limits](Self::limits).
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn longest_path(&self, start: &str, end: &str) -> PathReport {
        let result = self
            .resolve(start)
            .and_then(|start| Ok((start, self.resolve(end)?)))
            .and_then(|(start, end)| {
                let longest = LongestPath::on(&self.network)
                    .limits(self.limits)
                    .run(start, end)?;
                Ok(longest.into_path())
            });

        match result {
            Ok(path) => self.path_report(path, "longest path found"),
            Err(error) => PathReport::failure(error),
        }
    }

    /// Canonical names of all cities connected to `start`, excluding `start`
    /// itself. Empty for an unknown city.
    ///
    /// The order is not specified.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn reachable(&self, start: &str) -> Vec<String> {
        match self.network.find_city(start) {
            Some(start) => self.network.names(&reachable(&self.network, start)),
            None => Vec::new(),
        }
    }

    /// The cheapest order of visiting the cities, starting with the first one
    /// and moving between consecutive cities by direct routes.
    ///
    /// This query takes factorial time in the number of cities and is bounded
    /// by the [limits](Self::limits).
    #[tracing::instrument(skip(self, cities), level = "debug", fields(cities = cities.len()))]
    pub fn plan_tour<S: AsRef<str>>(&self, cities: &[S]) -> TourReport {
        let result = cities
            .iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|cities| {
                let tour = Tour::on(&self.network).limits(self.limits).run(&cities)?;
                Ok(tour.into_path())
            });

        match result {
            Ok(path) => TourReport {
                found: true,
                path: self.network.names(&path.cities),
                total_distance: path.distance,
                message: "optimal tour planned".to_string(),
            },
            Err(error) => TourReport::failure(error),
        }
    }

    /// The cheapest set of routes connecting all cities that can be connected.
    ///
    /// If the network is not connected, the result connects every component
    /// separately.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn cheapest_network(&self) -> NetworkReport {
        match SpanningForest::on(&self.network).run() {
            Ok(forest) => {
                let message = if forest.is_spanning_tree() {
                    "cheapest network found".to_string()
                } else {
                    format!(
                        "cheapest network found for {} disconnected parts",
                        forest.components()
                    )
                };

                NetworkReport {
                    found: true,
                    total_cost: forest.total(),
                    components: forest.components(),
                    routes: forest
                        .routes()
                        .iter()
                        .map(|route| self.route_record(route))
                        .collect(),
                    message,
                }
            }
            Err(error) => NetworkReport::failure(Error::from(error)),
        }
    }

    /// Canonical names of all cities, ordered case-insensitively.
    pub fn all_cities(&self) -> Vec<String> {
        self.network
            .city_names()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Every route exactly once, ordered case-insensitively by the names of
    /// its cities.
    pub fn all_routes(&self) -> Vec<RouteRecord> {
        self.network
            .routes()
            .iter()
            .map(|route| self.route_record(route))
            .collect()
    }

    pub fn city_count(&self) -> usize {
        self.network.city_count()
    }

    pub fn route_count(&self) -> usize {
        self.network.route_count()
    }

    fn resolve(&self, name: &str) -> Result<CityId, Error> {
        self.network
            .find_city(name)
            .ok_or_else(|| Error::UnknownCity(name.to_owned()))
    }

    fn shortest_segment(&self, start: CityId, end: CityId) -> Result<Path, Error> {
        let shortest_paths = ShortestPaths::on(&self.network)
            .goal(end)
            .dijkstra()
            .run(start)?;

        shortest_paths
            .path_to(end)
            .ok_or(Error::ShortestPaths(shortest_paths::Error::GoalNotReached))
    }

    fn path_report(&self, path: Path, message: &str) -> PathReport {
        PathReport {
            found: true,
            path: self.network.names(&path.cities),
            distance: path.distance,
            message: message.to_string(),
        }
    }

    fn route_record(&self, route: &Route) -> RouteRecord {
        RouteRecord {
            from: self.network.name(route.from).unwrap_or_default().to_owned(),
            to: self.network.name(route.to).unwrap_or_default().to_owned(),
            distance: route.distance,
        }
    }

    // Canonical names of the cities, falling back to the given spelling.
    fn record(&self, from: &str, to: &str, distance: Distance) -> RouteRecord {
        let canonical = |name: &str| {
            self.network
                .find_city(name)
                .and_then(|id| self.network.name(id))
                .unwrap_or(name)
                .to_owned()
        };

        RouteRecord {
            from: canonical(from),
            to: canonical(to),
            distance,
        }
    }
}
