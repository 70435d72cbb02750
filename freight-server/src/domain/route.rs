//! Complete multimodal routes.
//!
//! A `Route` is an ordered, contiguous chain of segments from origin
//! to destination, together with aggregated metrics and the cost
//! fields the adjuster fills in after search.

use std::collections::BTreeMap;

use super::{RouteSegment, TransportMode};

/// Error constructing a route from segments.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// A route must contain at least one segment.
    #[error("route must contain at least one segment")]
    Empty,

    /// Adjacent segments must connect end-to-start.
    #[error("segments are not contiguous: {prev_destination} does not connect to {next_origin}")]
    Discontiguous {
        prev_destination: String,
        next_origin: String,
    },
}

/// The structural identity of a route: its ordered sequence of
/// `(mode, origin, destination)` triples.
///
/// Used to enforce diversity across the four selected objective routes.
pub type RouteSignature = Vec<(TransportMode, String, String)>;

/// An ordered, contiguous chain of segments with aggregated metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Human-readable route name.
    pub name: String,

    /// The legs of the route, in travel order.
    pub segments: Vec<RouteSegment>,

    /// Sum of segment costs.
    pub total_cost: f64,

    /// Total travel time in hours. May exceed the sum of segment
    /// durations when mode-change penalties were accumulated during
    /// search.
    pub total_time_hours: f64,

    /// Sum of segment distances, in kilometres.
    pub total_distance_km: f64,

    /// Sum of segment emissions, in kilograms of CO2.
    pub total_emissions_kg: f64,

    /// Arithmetic mean of segment reliabilities.
    pub average_reliability: f64,

    /// Score under the objective this route was selected for.
    pub optimization_score: f64,

    /// Carbon cost, zero until the cost adjuster runs.
    pub carbon_cost: f64,

    /// Base cost plus carbon cost, zero until the cost adjuster runs.
    pub adjusted_total_cost: f64,

    /// SLA penalty, zero until the cost adjuster runs.
    pub sla_penalty: f64,

    /// Adjusted cost plus SLA penalty, zero until the cost adjuster
    /// runs.
    pub final_total_cost: f64,
}

impl Route {
    /// Build a route from segments, computing all aggregates.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `segments` is empty or adjacent segments do
    /// not connect (`segments[i].destination != segments[i+1].origin`).
    pub fn from_segments(
        name: impl Into<String>,
        segments: Vec<RouteSegment>,
    ) -> Result<Route, RouteError> {
        let total_time_hours = segments.iter().map(|s| s.duration_hours).sum();
        Route::from_parts(name, segments, total_time_hours)
    }

    /// Build a route from segments with an explicit total time.
    ///
    /// The label-setting search accumulates mode-change penalties into
    /// its running time total, so the route's total time can exceed
    /// the plain sum of segment durations.
    pub(crate) fn from_parts(
        name: impl Into<String>,
        segments: Vec<RouteSegment>,
        total_time_hours: f64,
    ) -> Result<Route, RouteError> {
        if segments.is_empty() {
            return Err(RouteError::Empty);
        }
        for pair in segments.windows(2) {
            if pair[0].destination.name != pair[1].origin.name {
                return Err(RouteError::Discontiguous {
                    prev_destination: pair[0].destination.name.clone(),
                    next_origin: pair[1].origin.name.clone(),
                });
            }
        }

        let total_cost = segments.iter().map(|s| s.cost).sum();
        let total_distance_km = segments.iter().map(|s| s.distance_km).sum();
        let total_emissions_kg = segments.iter().map(|s| s.emissions_kg).sum();
        let average_reliability =
            segments.iter().map(|s| s.reliability).sum::<f64>() / segments.len() as f64;

        Ok(Route {
            name: name.into(),
            segments,
            total_cost,
            total_time_hours,
            total_distance_km,
            total_emissions_kg,
            average_reliability,
            optimization_score: 0.0,
            carbon_cost: 0.0,
            adjusted_total_cost: 0.0,
            sla_penalty: 0.0,
            final_total_cost: 0.0,
        })
    }

    /// Each mode's share of the total distance, as percentages.
    ///
    /// Shares sum to 100 when the total distance is positive; when the
    /// total distance is zero every present mode maps to zero.
    pub fn mode_percentages(&self) -> BTreeMap<TransportMode, f64> {
        let mut distances: BTreeMap<TransportMode, f64> = BTreeMap::new();
        for segment in &self.segments {
            *distances.entry(segment.mode).or_insert(0.0) += segment.distance_km;
        }

        let total: f64 = distances.values().sum();
        distances
            .into_iter()
            .map(|(mode, d)| {
                let pct = if total > 0.0 { d / total * 100.0 } else { 0.0 };
                (mode, pct)
            })
            .collect()
    }

    /// The route's structural signature.
    pub fn signature(&self) -> RouteSignature {
        self.segments
            .iter()
            .map(|s| (s.mode, s.origin.name.clone(), s.destination.name.clone()))
            .collect()
    }

    /// Whether the route uses at least two distinct modes.
    pub fn is_multimodal(&self) -> bool {
        let first = match self.segments.first() {
            Some(s) => s.mode,
            None => return false,
        };
        self.segments.iter().any(|s| s.mode != first)
    }

    /// Number of adjacent mode changes along the route.
    pub fn mode_change_count(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].mode != pair[1].mode)
            .count()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Location, LocationType};
    use proptest::prelude::*;

    fn mode_strategy() -> impl Strategy<Value = TransportMode> {
        prop::sample::select(TransportMode::ALL.to_vec())
    }

    /// A contiguous chain of segments A0 -> A1 -> ... with arbitrary
    /// modes and distances.
    fn chain_strategy() -> impl Strategy<Value = Vec<RouteSegment>> {
        prop::collection::vec((mode_strategy(), 0.0f64..2000.0), 1..6).prop_map(|legs| {
            legs.into_iter()
                .enumerate()
                .map(|(i, (mode, distance))| {
                    let from = Location::new(format!("N{i}"), 10.0, 70.0, LocationType::Hub);
                    let to = Location::new(format!("N{}", i + 1), 10.5, 70.5, LocationType::Hub);
                    RouteSegment::new(
                        mode,
                        from,
                        to,
                        Some(distance),
                        distance / 50.0,
                        distance * 10.0,
                        distance * 0.2,
                        80.0,
                        "",
                    )
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn percentages_sum_to_100_or_zero(segments in chain_strategy()) {
            let route = Route::from_segments("p", segments).unwrap();
            let sum: f64 = route.mode_percentages().values().sum();
            if route.total_distance_km > 0.0 {
                prop_assert!((sum - 100.0).abs() < 1e-6, "sum was {sum}");
            } else {
                prop_assert_eq!(sum, 0.0);
            }
        }

        #[test]
        fn aggregates_match_segment_sums(segments in chain_strategy()) {
            let expected_cost: f64 = segments.iter().map(|s| s.cost).sum();
            let expected_distance: f64 = segments.iter().map(|s| s.distance_km).sum();
            let route = Route::from_segments("p", segments).unwrap();
            prop_assert!((route.total_cost - expected_cost).abs() < 1e-6);
            prop_assert!((route.total_distance_km - expected_distance).abs() < 1e-6);
        }
    }
}
