use std::fmt;

use thiserror::Error;

use super::weight::Distance;

#[derive(Debug, Error, PartialEq)]
#[error("adding route failed: {kind}")]
pub struct AddRouteError {
    pub distance: Distance,
    pub kind: AddRouteErrorKind,
}

impl AddRouteError {
    pub fn new(distance: Distance, kind: AddRouteErrorKind) -> Self {
        Self { distance, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddRouteErrorKind {
    SelfLoop,
    ZeroDistance,
    CapacityOverflow,
}

impl fmt::Display for AddRouteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddRouteErrorKind::SelfLoop => "a route must connect two different cities",
            AddRouteErrorKind::ZeroDistance => "distance must be positive",
            AddRouteErrorKind::CapacityOverflow => "the network has exhausted its capacity",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ReplaceRouteError {
    #[error("route not found")]
    RouteAbsent(Distance),
    #[error("distance must be positive")]
    ZeroDistance,
}
