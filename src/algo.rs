//! Routing queries over a [`RoadNetwork`](crate::network::RoadNetwork).
//!
//! None of the algorithms mutates the network. The searches that may take
//! exponential time are bounded by [`Limits`](crate::core::Limits).

pub mod longest_path;
pub mod reachable;
pub mod shortest_paths;
pub mod spanning_forest;
pub mod tour;

pub use longest_path::LongestPath;
pub use reachable::{is_path_between, reachable};
pub use shortest_paths::ShortestPaths;
pub use spanning_forest::SpanningForest;
pub use tour::Tour;
