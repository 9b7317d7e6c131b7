//! Find single source shortest paths and their distances in a road network.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! The weighted search uses [Dijkstra's algorithm] over the route distances.
//! With [unit weights](ShortestPathsBuilder::unit_weight) every route counts
//! as one stop and the search becomes a plain breadth-first search, which
//! finds the route with the fewest stops.
//!
//! [Dijkstra's algorithm]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use citynet::{algo::ShortestPaths, network::RoadNetwork};
//!
//! let mut network = RoadNetwork::new();
//! network.add_route("Addis Ababa", "Adama", 99).unwrap();
//! network.add_route("Adama", "Awash", 125).unwrap();
//! network.add_route("Awash", "Dire Dawa", 219).unwrap();
//! network.add_route("Addis Ababa", "Dire Dawa", 515).unwrap();
//!
//! let addis = network.find_city("Addis Ababa").unwrap();
//! let dire_dawa = network.find_city("Dire Dawa").unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&network)
//!     .goal(dire_dawa)
//!     .run(addis)
//!     .unwrap();
//!
//! let path = shortest_paths.path_to(dire_dawa).unwrap();
//! assert_eq!(path.distance, 443);
//! assert_eq!(
//!     network.names(&path.cities),
//!     vec!["Addis Ababa", "Adama", "Awash", "Dire Dawa"]
//! );
//!
//! let fewest_stops = ShortestPaths::on(&network)
//!     .goal(dire_dawa)
//!     .unit_weight()
//!     .run(addis)
//!     .unwrap();
//!
//! assert_eq!(fewest_stops[dire_dawa], 1);
//! ```

use std::ops::Index;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    common::Stack,
    core::{id::CityId, path::Path, weight::TotalDistance},
};

mod bfs;
mod builder;
mod dijkstra;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their distances from a single source city.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths {
    source: CityId,
    // Using HashMaps because the search terminates early when reaching the
    // goal, which usually means visiting only a part of the network.
    dist: FxHashMap<CityId, TotalDistance>,
    pred: FxHashMap<CityId, CityId>,
}

impl ShortestPaths {
    /// Source city where the search was started.
    pub fn source(&self) -> CityId {
        self.source
    }

    /// Returns the path distance between the source city and the given city,
    /// or `None` if it's not known.
    ///
    /// There are two causes why the distance between two cities is not known:
    /// (1) the cities are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before visiting the given
    /// city.
    pub fn dist(&self, to: CityId) -> Option<TotalDistance> {
        self.dist.get(&to).copied()
    }

    /// Returns an iterator over cities on the path between the given city and
    /// the source city, in this order, excluding the given city itself.
    ///
    /// The iterator is empty if the path is not known or if `to` is the
    /// source.
    pub fn reconstruct(&self, to: CityId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// The path from the source city to the given city, source first.
    pub fn path_to(&self, to: CityId) -> Option<Path> {
        let distance = self.dist(to)?;

        let mut stack = Stack::new();
        stack.push(to);
        for city in self.reconstruct(to) {
            stack.push(city);
        }

        Some(Path::new(stack.drain().collect(), distance))
    }
}

impl Index<CityId> for ShortestPaths {
    type Output = TotalDistance;

    /// # Panics
    ///
    /// Panics if the distance to `index` is not known.
    fn index(&self, index: CityId) -> &Self::Output {
        &self.dist[&index]
    }
}

/// Algorithm for [`ShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
    ///
    /// Repeatedly settles the city with the smallest known distance from the
    /// source and relaxes the routes leaving it.
    Dijkstra,

    /// [Breadth-first
    /// search](https://en.wikipedia.org/wiki/Breadth-first_search)
    ///
    /// Ignores route distances and counts stops.
    Bfs,
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source or the goal is not a city of the network.
    #[error("city not found")]
    CityNotFound,

    /// The specified goal not reached.
    #[error("no path exists")]
    GoalNotReached,
}

/// Iterator over the cities on the path from a city to the source city.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: CityId,
    pred: &'a FxHashMap<CityId, CityId>,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = CityId;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(&self.curr).copied()?;
        Some(self.curr)
    }
}
