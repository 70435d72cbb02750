//! External road-distance providers.
//!
//! Road legs may be priced from a real routing service instead of the
//! haversine estimate. Providers are strictly optional: any failure is
//! absorbed by the segment factory, which falls back to the offline
//! estimate, so nothing downstream of the factory ever sees a provider
//! error.

mod client;
mod error;
pub mod mock;

pub use client::{OrsClient, OrsConfig};
pub use error::DistanceError;

use std::sync::Arc;

use crate::domain::Coordinates;

/// A road route estimate from an external provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEstimate {
    /// Driving distance in kilometres.
    pub distance_km: f64,

    /// Driving duration in hours.
    pub duration_hours: f64,
}

/// Source of road distance/duration estimates.
///
/// Implementations must bound their own latency (e.g. an HTTP timeout);
/// callers treat every error as "provider unavailable".
pub trait DistanceProvider {
    /// Estimate the road route between two coordinates.
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError>;
}

impl<P: DistanceProvider + ?Sized> DistanceProvider for &P {
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        (**self).road_route(origin, destination)
    }
}

impl<P: DistanceProvider + ?Sized> DistanceProvider for Arc<P> {
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        (**self).road_route(origin, destination)
    }
}
