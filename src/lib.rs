//! Weighted undirected network of cities connected by roads, and routing
//! queries over it.
//!
//! The [`RoadNetwork`] stores cities under case-insensitive names and the
//! routes between them. The [`algo`] module implements the queries (shortest
//! route, fewest stops, longest simple route, reachability, cheapest tour and
//! cheapest connecting network) on top of the containers in [`common`].
//! [`RoutePlanner`] puts everything behind a name-based interface that reports
//! success or failure with a message instead of panicking.
//!
//! # Examples
//!
//! ```
//! use citynet::RoutePlanner;
//!
//! let mut planner = RoutePlanner::new();
//! planner.add_route("Addis Ababa", "Adama", 99);
//! planner.add_route("Adama", "Dire Dawa", 313);
//! planner.add_route("Addis Ababa", "Dire Dawa", 453);
//!
//! let shortest = planner.shortest_path("addis ababa", "dire dawa");
//! assert_eq!(shortest.distance, 412);
//!
//! let fewest = planner.fewest_stops("addis ababa", "dire dawa");
//! assert_eq!(fewest.stops, 1);
//! assert_eq!(fewest.path, vec!["Addis Ababa", "Dire Dawa"]);
//!
//! let cheapest = planner.cheapest_network();
//! assert_eq!(cheapest.total_cost, 412);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod network;
pub mod planner;

pub use network::RoadNetwork;
pub use planner::RoutePlanner;
