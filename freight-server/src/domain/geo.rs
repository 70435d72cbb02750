//! Geographic coordinates and geodesic distance.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the Earth's surface, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees (positive north).
    pub latitude: f64,

    /// Longitude in degrees (positive east).
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another point, in kilometres.
    pub fn distance_to(&self, other: Coordinates) -> f64 {
        haversine_km(*self, other)
    }

    /// The arithmetic midpoint of two coordinate pairs.
    ///
    /// Good enough for placing synthetic hubs on the short distances
    /// this planner works with; not a true geodesic midpoint.
    pub fn midpoint(a: Coordinates, b: Coordinates) -> Coordinates {
        Coordinates::new(
            (a.latitude + b.latitude) / 2.0,
            (a.longitude + b.longitude) / 2.0,
        )
    }

    /// A point weighted `w` towards `a` and `1 - w` towards `b`.
    pub fn weighted(a: Coordinates, b: Coordinates, w: f64) -> Coordinates {
        Coordinates::new(
            a.latitude * w + b.latitude * (1.0 - w),
            a.longitude * w + b.longitude * (1.0 - w),
        )
    }
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric, and zero for coincident points.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().asin()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord_strategy() -> impl Strategy<Value = Coordinates> {
        (-85.0f64..85.0, -180.0f64..180.0).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_is_non_negative(a in coord_strategy(), b in coord_strategy()) {
            prop_assert!(haversine_km(a, b) >= 0.0);
        }

        #[test]
        fn self_distance_is_zero(a in coord_strategy()) {
            prop_assert!(haversine_km(a, a).abs() < 1e-9);
        }
    }
}
