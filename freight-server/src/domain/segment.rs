//! Route segments: one leg of a journey on a single mode.

use super::{Location, TransportMode};

/// One leg of a freight journey using a single transport mode.
///
/// All scalar metrics are non-negative; reliability is a percentage
/// in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    /// Transport mode of this leg.
    pub mode: TransportMode,

    /// Where the leg starts.
    pub origin: Location,

    /// Where the leg ends.
    pub destination: Location,

    /// Distance travelled, in kilometres.
    pub distance_km: f64,

    /// Transit duration, in hours.
    pub duration_hours: f64,

    /// Monetary cost.
    pub cost: f64,

    /// CO2 emissions, in kilograms.
    pub emissions_kg: f64,

    /// Reliability percentage, 0-100.
    pub reliability: f64,

    /// Free-text note about the infrastructure used.
    pub infrastructure_note: String,
}

impl RouteSegment {
    /// Create a segment.
    ///
    /// When `distance_km` is `None` the great-circle distance between
    /// the endpoints is used.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mode: TransportMode,
        origin: Location,
        destination: Location,
        distance_km: Option<f64>,
        duration_hours: f64,
        cost: f64,
        emissions_kg: f64,
        reliability: f64,
        infrastructure_note: impl Into<String>,
    ) -> Self {
        let distance_km = distance_km.unwrap_or_else(|| origin.distance_to(&destination));
        Self {
            mode,
            origin,
            destination,
            distance_km,
            duration_hours,
            cost,
            emissions_kg,
            reliability,
            infrastructure_note: infrastructure_note.into(),
        }
    }

    /// The same leg travelled in the opposite direction.
    ///
    /// Scalar metrics are mirrored exactly, not independently priced.
    pub fn reversed(&self) -> RouteSegment {
        RouteSegment {
            mode: self.mode,
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            distance_km: self.distance_km,
            duration_hours: self.duration_hours,
            cost: self.cost,
            emissions_kg: self.emissions_kg,
            reliability: self.reliability,
            infrastructure_note: self.infrastructure_note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationType;

    fn mumbai() -> Location {
        Location::new("Mumbai", 19.0760, 72.8777, LocationType::Origin)
    }

    fn bengaluru() -> Location {
        Location::new("Bengaluru", 12.9716, 77.5946, LocationType::Destination)
    }

    #[test]
    fn distance_defaults_to_geodesic() {
        let seg = RouteSegment::new(
            TransportMode::Road,
            mumbai(),
            bengaluru(),
            None,
            13.0,
            1000.0,
            300.0,
            82.0,
            "",
        );
        assert!((835.0..=855.0).contains(&seg.distance_km));
    }

    #[test]
    fn explicit_distance_is_kept() {
        let seg = RouteSegment::new(
            TransportMode::Road,
            mumbai(),
            bengaluru(),
            Some(990.0),
            13.0,
            1000.0,
            300.0,
            82.0,
            "",
        );
        assert_eq!(seg.distance_km, 990.0);
    }

    #[test]
    fn reversed_mirrors_scalars() {
        let seg = RouteSegment::new(
            TransportMode::Rail,
            mumbai(),
            bengaluru(),
            Some(930.0),
            17.0,
            69_000.0,
            84.0,
            88.0,
            "note",
        );
        let rev = seg.reversed();
        assert_eq!(rev.origin.name, "Bengaluru");
        assert_eq!(rev.destination.name, "Mumbai");
        assert_eq!(rev.distance_km, seg.distance_km);
        assert_eq!(rev.duration_hours, seg.duration_hours);
        assert_eq!(rev.cost, seg.cost);
        assert_eq!(rev.emissions_kg, seg.emissions_kg);
        assert_eq!(rev.reliability, seg.reliability);
        assert_eq!(rev.infrastructure_note, seg.infrastructure_note);
    }
}
