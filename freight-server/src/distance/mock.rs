//! Mock distance providers for tests and offline operation.

use std::collections::HashMap;

use crate::domain::Coordinates;

use super::error::DistanceError;
use super::{DistanceProvider, RoadEstimate};

/// Coordinates quantized to ~11 m so lookups tolerate float noise.
fn key(origin: Coordinates, destination: Coordinates) -> (i64, i64, i64, i64) {
    let q = |v: f64| (v * 10_000.0).round() as i64;
    (
        q(origin.latitude),
        q(origin.longitude),
        q(destination.latitude),
        q(destination.longitude),
    )
}

/// A provider backed by a fixed table of estimates.
///
/// Unknown coordinate pairs yield `DistanceError::Unavailable`.
#[derive(Debug, Default)]
pub struct StaticProvider {
    estimates: HashMap<(i64, i64, i64, i64), RoadEstimate>,
}

impl StaticProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an estimate for a coordinate pair.
    pub fn insert(&mut self, origin: Coordinates, destination: Coordinates, estimate: RoadEstimate) {
        self.estimates.insert(key(origin, destination), estimate);
    }
}

impl DistanceProvider for StaticProvider {
    fn road_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        self.estimates
            .get(&key(origin, destination))
            .copied()
            .ok_or(DistanceError::Unavailable)
    }
}

/// A provider that always fails.
///
/// Used for offline operation and for exercising the factory's
/// fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

impl DistanceProvider for UnavailableProvider {
    fn road_route(
        &self,
        _origin: Coordinates,
        _destination: Coordinates,
    ) -> Result<RoadEstimate, DistanceError> {
        Err(DistanceError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_returns_registered_estimate() {
        let a = Coordinates::new(19.0760, 72.8777);
        let b = Coordinates::new(12.9716, 77.5946);

        let mut provider = StaticProvider::new();
        provider.insert(
            a,
            b,
            RoadEstimate {
                distance_km: 984.0,
                duration_hours: 15.0,
            },
        );

        let estimate = provider.road_route(a, b).unwrap();
        assert_eq!(estimate.distance_km, 984.0);
        assert_eq!(estimate.duration_hours, 15.0);

        // Reverse direction was not registered.
        assert!(provider.road_route(b, a).is_err());
    }

    #[test]
    fn unavailable_provider_always_fails() {
        let provider = UnavailableProvider;
        let result = provider.road_route(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0));
        assert!(matches!(result, Err(DistanceError::Unavailable)));
    }
}
