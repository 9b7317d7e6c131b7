//! Plan a tour visiting a list of cities.
//!
//! The first listed city is the start of the tour. The remaining cities are
//! visited in the order that minimizes the total distance, where every two
//! consecutive cities must be connected by a direct route. The tour does not
//! return to the start.
//!
//! All orders are enumerated by backtracking, which takes factorial time in
//! the number of cities. The search is bounded by
//! [`Limits`](crate::core::Limits), including the maximum number of cities.
//!
//! # Examples
//!
//! ```
//! use citynet::{algo::Tour, network::RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("Gondar", "Bahir Dar", 180).unwrap();
//! network.add_route("Bahir Dar", "Lalibela", 300).unwrap();
//! network.add_route("Gondar", "Lalibela", 350).unwrap();
//!
//! let cities = ["Gondar", "Lalibela", "Bahir Dar"]
//!     .map(|name| network.find_city(name).unwrap());
//!
//! let tour = Tour::on(&network).run(&cities).unwrap();
//! assert_eq!(tour.distance(), 480);
//! assert_eq!(
//!     network.names(&tour.path().cities),
//!     vec!["Gondar", "Bahir Dar", "Lalibela"]
//! );
//! ```

use thiserror::Error;

use crate::{
    core::{
        id::CityId,
        limits::{Budget, LimitExceeded, Limits},
        path::Path,
        weight::{Distance, TotalDistance},
    },
    network::RoadNetwork,
};

/// The cheapest tour found and statistics of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    path: Path,
    explored: u64,
}

impl Tour {
    pub fn on(network: &RoadNetwork) -> TourBuilder<'_> {
        TourBuilder {
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

    /// Number of partial tours extended during the search.
    pub fn explored(&self) -> u64 {
        self.explored
    }
}

pub struct TourBuilder<'a> {
    network: &'a RoadNetwork,
    limits: Limits,
}

impl<'a> TourBuilder<'a> {
    pub fn limits(self, limits: Limits) -> Self {
        Self { limits, ..self }
    }

    pub fn run(self, cities: &[CityId]) -> Result<Tour, Error> {
        let TourBuilder { network, limits } = self;

        if cities.is_empty() {
            return Err(Error::NoCities);
        }

        if let Some(&unknown) = cities.iter().find(|&&city| !network.contains(city)) {
            return Err(Error::CityNotFound(unknown));
        }

        limits.check_tour_size(cities.len())?;

        let result = tour(network, cities, &limits);

        match &result {
            Ok(tour) => tracing::debug!(
                cities = cities.len(),
                distance = tour.distance(),
                explored = tour.explored(),
                "tour found"
            ),
            Err(Error::Limit(error)) => tracing::warn!(cities = cities.len(), %error, "tour search aborted"),
            Err(error) => tracing::debug!(cities = cities.len(), %error, "tour not found"),
        }

        result
    }
}

/// The error encountered during a [`Tour`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no cities provided")]
    NoCities,

    #[error("city {0} not found")]
    CityNotFound(CityId),

    #[error("no complete tour found")]
    NoTour,

    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}

struct Search<'a> {
    cities: &'a [CityId],
    // Direct distances between the listed cities, indexed by their positions
    // in the list.
    direct: Vec<Option<Distance>>,
    used: Vec<bool>,
    order: Vec<usize>,
    best: Option<(Vec<usize>, TotalDistance)>,
    budget: Budget,
    explored: u64,
}

impl<'a> Search<'a> {
    fn new(network: &RoadNetwork, cities: &'a [CityId], limits: &Limits) -> Self {
        let k = cities.len();
        let direct = cities
            .iter()
            .flat_map(|&a| cities.iter().map(move |&b| network.distance_between(a, b)))
            .collect();

        Self {
            cities,
            direct,
            used: vec![false; k],
            order: Vec::with_capacity(k),
            best: None,
            budget: limits.budget(),
            explored: 0,
        }
    }

    fn direct(&self, from: usize, to: usize) -> Option<Distance> {
        self.direct[from * self.cities.len() + to]
    }

    fn extend(&mut self, cost: TotalDistance) -> Result<(), LimitExceeded> {
        // Partial tours that already cost as much as the best complete one
        // cannot improve it.
        if self
            .best
            .as_ref()
            .is_some_and(|(_, best_cost)| cost >= *best_cost)
        {
            return Ok(());
        }

        if self.order.len() == self.cities.len() {
            self.best = Some((self.order.clone(), cost));
            return Ok(());
        }

        let last = match self.order.last() {
            Some(&last) => last,
            None => return Ok(()),
        };

        for next in 0..self.cities.len() {
            if self.used[next] {
                continue;
            }

            let Some(distance) = self.direct(last, next) else {
                continue;
            };

            self.budget.tick()?;
            self.explored += 1;

            self.used[next] = true;
            self.order.push(next);

            let result = self.extend(cost + TotalDistance::from(distance));

            self.order.pop();
            self.used[next] = false;

            result?;
        }

        Ok(())
    }
}

fn tour(network: &RoadNetwork, cities: &[CityId], limits: &Limits) -> Result<Tour, Error> {
    let mut search = Search::new(network, cities, limits);

    // The first city is fixed as the start.
    search.used[0] = true;
    search.order.push(0);
    search.extend(0)?;

    let (order, distance) = search.best.ok_or(Error::NoTour)?;
    let path = Path::new(order.into_iter().map(|i| cities[i]).collect(), distance);

    Ok(Tour {
        path,
        explored: search.explored,
    })
}
