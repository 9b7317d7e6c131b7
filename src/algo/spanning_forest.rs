//! Find the cheapest set of routes connecting the cities.
//!
//! Uses [Kruskal's algorithm] with a [union-find](crate::common::UnionFind)
//! structure. If the network is not connected, the result is a minimum
//! spanning forest, one tree per connected component.
//!
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use citynet::{algo::SpanningForest, network::RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("Hawassa", "Shashamane", 25).unwrap();
//! network.add_route("Shashamane", "Arba Minch", 250).unwrap();
//! network.add_route("Hawassa", "Arba Minch", 270).unwrap();
//!
//! let forest = SpanningForest::on(&network).run().unwrap();
//! assert_eq!(forest.total(), 275);
//! assert!(forest.is_spanning_tree());
//! ```

use thiserror::Error;

use crate::{
    common::UnionFind,
    core::weight::TotalDistance,
    network::{RoadNetwork, Route},
};

/// Routes of a minimum spanning forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    routes: Vec<Route>,
    total: TotalDistance,
    components: usize,
}

impl SpanningForest {
    pub fn on(network: &RoadNetwork) -> SpanningForestBuilder<'_> {
        SpanningForestBuilder { network }
    }

    /// Accepted routes in the order they were accepted, that is, by
    /// increasing distance.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Sum of the distances of the accepted routes.
    pub fn total(&self) -> TotalDistance {
        self.total
    }

    /// Number of connected components, isolated cities included.
    pub fn components(&self) -> usize {
        self.components
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.components == 1
    }
}

pub struct SpanningForestBuilder<'a> {
    network: &'a RoadNetwork,
}

impl<'a> SpanningForestBuilder<'a> {
    pub fn run(self) -> Result<SpanningForest, Error> {
        let result = kruskal(self.network);

        match &result {
            Ok(forest) => tracing::debug!(
                routes = forest.routes.len(),
                total = forest.total,
                components = forest.components,
                "spanning forest found"
            ),
            Err(error) => tracing::debug!(%error, "spanning forest not found"),
        }

        result
    }
}

/// The error encountered during a [`SpanningForest`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("network is empty")]
    Empty,

    #[error("no routes to connect")]
    NoRoutes,
}

fn kruskal(network: &RoadNetwork) -> Result<SpanningForest, Error> {
    if network.is_empty() {
        return Err(Error::Empty);
    }

    let mut routes = network.routes();

    // Equal distances are ordered by the city names, which makes the result
    // deterministic.
    routes.sort_by(|lhs, rhs| {
        lhs.distance
            .cmp(&rhs.distance)
            .then_with(|| network.key(lhs.from).cmp(&network.key(rhs.from)))
            .then_with(|| network.key(lhs.to).cmp(&network.key(rhs.to)))
    });

    let mut sets = UnionFind::new();
    for city in network.city_ids() {
        sets.make_set(city);
    }

    let mut accepted = Vec::with_capacity(network.city_count().saturating_sub(1));
    let mut total: TotalDistance = 0;

    // Not stopping after `n - 1` accepted routes, a disconnected network needs
    // to go through all of them to span every component.
    for route in routes {
        if sets.union(&route.from, &route.to) {
            total += TotalDistance::from(route.distance);
            accepted.push(route);
        }
    }

    if accepted.is_empty() && network.city_count() > 1 {
        return Err(Error::NoRoutes);
    }

    Ok(SpanningForest {
        routes: accepted,
        total,
        components: sets.set_count(),
    })
}
