//! Results of the [`RoutePlanner`](super::RoutePlanner) operations.
//!
//! Every record carries a success flag and a human-readable message. Failed
//! records have empty payloads and the message explains the failure.

use std::fmt;

use crate::core::weight::{Distance, TotalDistance};

/// Result of a network mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub(crate) fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }

    pub(crate) fn failure(error: impl fmt::Display) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}

/// Result of a path query. The distance is the sum of route distances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathReport {
    pub found: bool,
    pub path: Vec<String>,
    pub distance: TotalDistance,
    pub message: String,
}

impl PathReport {
    pub(crate) fn failure(error: impl fmt::Display) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            distance: 0,
            message: error.to_string(),
        }
    }
}

/// Result of a fewest-stops query. `stops` is the number of routes travelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopsReport {
    pub found: bool,
    pub path: Vec<String>,
    pub stops: usize,
    pub message: String,
}

impl StopsReport {
    pub(crate) fn failure(error: impl fmt::Display) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            stops: 0,
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourReport {
    pub found: bool,
    pub path: Vec<String>,
    pub total_distance: TotalDistance,
    pub message: String,
}

impl TourReport {
    pub(crate) fn failure(error: impl fmt::Display) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            total_distance: 0,
            message: error.to_string(),
        }
    }
}

/// Result of a cheapest-network query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    pub found: bool,
    pub routes: Vec<RouteRecord>,
    pub total_cost: TotalDistance,
    /// Number of connected components the routes span, 1 for a connected
    /// network.
    pub components: usize,
    pub message: String,
}

impl NetworkReport {
    pub(crate) fn failure(error: impl fmt::Display) -> Self {
        Self {
            found: false,
            routes: Vec::new(),
            total_cost: 0,
            components: 0,
            message: error.to_string(),
        }
    }
}

/// A route between two cities, given by their canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteRecord {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

impl fmt::Display for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {} ({} km)", self.from, self.to, self.distance)
    }
}
