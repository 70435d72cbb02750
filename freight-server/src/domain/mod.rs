//! Domain value types.
//!
//! These are the immutable building blocks of the planner: geographic
//! coordinates, transport modes, locations with infrastructure flags,
//! route segments, and complete routes with aggregated metrics.

mod geo;
mod location;
mod mode;
mod route;
mod segment;

pub use geo::{Coordinates, haversine_km};
pub use location::{Location, LocationType};
pub use mode::{PreferenceLevel, TransportMode};
pub use route::{Route, RouteError, RouteSignature};
pub use segment::RouteSegment;
