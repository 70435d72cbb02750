//! Segment factory: per-mode pricing of route legs.
//!
//! A fixed reference table per mode defines the distance multiplier,
//! average speed, fixed overhead, cost per kilometre, emissions per
//! kilometre, and a constant reliability score. Cost and time are
//! strictly linear in adjusted distance.
//!
//! Road legs may consult an external distance provider; every provider
//! failure silently degrades to the haversine/speed estimate, so the
//! factory is infallible from the caller's point of view.

use crate::distance::DistanceProvider;
use crate::domain::{Location, RouteSegment, TransportMode};

/// Fixed currency conversion applied to the USD-denominated per-km
/// rates in the reference table.
pub const USD_TO_INR: f64 = 83.0;

/// Per-mode pricing and performance profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeProfile {
    /// Multiplier applied to the great-circle distance.
    pub distance_factor: f64,

    /// Average speed in km/h.
    pub speed_kmh: f64,

    /// Fixed time overhead in hours (terminal handling, boarding).
    pub overhead_hours: f64,

    /// Cost per kilometre, in USD before conversion.
    pub cost_per_km_usd: f64,

    /// Emissions per kilometre, in kg CO2.
    pub emissions_per_km: f64,

    /// Constant reliability percentage.
    pub reliability: f64,
}

impl ModeProfile {
    /// The reference profile for a mode.
    pub fn for_mode(mode: TransportMode) -> &'static ModeProfile {
        match mode {
            TransportMode::Road => &ROAD,
            TransportMode::Rail => &RAIL,
            TransportMode::Air => &AIR,
            TransportMode::Sea => &SEA,
        }
    }

    /// Cost per kilometre after currency conversion.
    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km_usd * USD_TO_INR
    }
}

const ROAD: ModeProfile = ModeProfile {
    distance_factor: 1.00,
    speed_kmh: 65.0,
    overhead_hours: 0.0,
    cost_per_km_usd: 1.8,
    emissions_per_km: 0.35,
    reliability: 82.0,
};

const RAIL: ModeProfile = ModeProfile {
    distance_factor: 1.10,
    speed_kmh: 55.0,
    overhead_hours: 0.0,
    cost_per_km_usd: 0.9,
    emissions_per_km: 0.09,
    reliability: 88.0,
};

const AIR: ModeProfile = ModeProfile {
    distance_factor: 1.05,
    speed_kmh: 750.0,
    overhead_hours: 4.0,
    cost_per_km_usd: 6.5,
    emissions_per_km: 1.40,
    reliability: 85.0,
};

const SEA: ModeProfile = ModeProfile {
    distance_factor: 1.35,
    speed_kmh: 22.0,
    overhead_hours: 0.0,
    cost_per_km_usd: 0.35,
    emissions_per_km: 0.06,
    reliability: 75.0,
};

/// Builds fully priced route segments from a mode and two locations.
pub struct SegmentFactory<P> {
    provider: Option<P>,
}

impl SegmentFactory<crate::distance::mock::UnavailableProvider> {
    /// A factory with no external provider: all legs use the offline
    /// haversine estimate.
    pub fn offline() -> Self {
        Self { provider: None }
    }
}

impl<P: DistanceProvider> SegmentFactory<P> {
    /// Create a factory, optionally with a road-distance provider.
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }

    /// Build a priced segment for `mode` between two locations.
    pub fn segment(
        &self,
        mode: TransportMode,
        origin: &Location,
        destination: &Location,
    ) -> RouteSegment {
        match mode {
            TransportMode::Road => self.road_segment(origin, destination),
            TransportMode::Rail => self.tabled_segment(
                TransportMode::Rail,
                origin,
                destination,
                format!(
                    "From: {} -> To: {}",
                    origin.railway_station.as_deref().unwrap_or("-"),
                    destination.railway_station.as_deref().unwrap_or("-"),
                ),
            ),
            TransportMode::Air => self.tabled_segment(
                TransportMode::Air,
                origin,
                destination,
                format!(
                    "From: {} Airport -> To: {} Airport",
                    origin.airport_code.as_deref().unwrap_or("-"),
                    destination.airport_code.as_deref().unwrap_or("-"),
                ),
            ),
            TransportMode::Sea => self.tabled_segment(
                TransportMode::Sea,
                origin,
                destination,
                format!(
                    "From: {} -> To: {}",
                    origin.seaport.as_deref().unwrap_or("-"),
                    destination.seaport.as_deref().unwrap_or("-"),
                ),
            ),
        }
    }

    /// Price a road leg, preferring the external provider.
    ///
    /// The fallback path is mandatory: provider failures are logged
    /// and never propagated.
    fn road_segment(&self, origin: &Location, destination: &Location) -> RouteSegment {
        let profile = ModeProfile::for_mode(TransportMode::Road);

        let estimate = self
            .provider
            .as_ref()
            .map(|p| p.road_route(origin.coordinates, destination.coordinates));

        let (distance_km, duration_hours, note) = match estimate {
            Some(Ok(route)) => (
                route.distance_km,
                route.duration_hours,
                "Road transport via National Highways (live provider)",
            ),
            Some(Err(error)) => {
                tracing::warn!(
                    %error,
                    origin = %origin.name,
                    destination = %destination.name,
                    "road distance provider failed, using haversine estimate"
                );
                let d = origin.distance_to(destination);
                (
                    d,
                    d / profile.speed_kmh,
                    "Road transport via National Highways (estimated)",
                )
            }
            None => {
                let d = origin.distance_to(destination);
                (
                    d,
                    d / profile.speed_kmh,
                    "Road transport via National Highways (estimated)",
                )
            }
        };

        RouteSegment::new(
            TransportMode::Road,
            origin.clone(),
            destination.clone(),
            Some(distance_km),
            duration_hours,
            distance_km * profile.cost_per_km(),
            distance_km * profile.emissions_per_km,
            profile.reliability,
            note,
        )
    }

    /// Price a leg from the reference table alone.
    fn tabled_segment(
        &self,
        mode: TransportMode,
        origin: &Location,
        destination: &Location,
        note: String,
    ) -> RouteSegment {
        let profile = ModeProfile::for_mode(mode);
        let distance_km = origin.distance_to(destination) * profile.distance_factor;
        let duration_hours = distance_km / profile.speed_kmh + profile.overhead_hours;

        RouteSegment::new(
            mode,
            origin.clone(),
            destination.clone(),
            Some(distance_km),
            duration_hours,
            distance_km * profile.cost_per_km(),
            distance_km * profile.emissions_per_km,
            profile.reliability,
            note,
        )
    }
}
