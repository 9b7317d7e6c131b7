pub mod error;
pub mod id;
pub mod limits;
pub mod name;
pub mod path;
pub mod weight;

pub use error::{AddRouteError, AddRouteErrorKind, ReplaceRouteError};
pub use id::CityId;
pub use limits::{LimitExceeded, Limits};
pub use name::CityKey;
pub use path::Path;
pub use weight::{Distance, TotalDistance};
