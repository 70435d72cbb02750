//! Wire types for the HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::adjust::CostAdjustment;
use crate::directory::CityRecord;
use crate::domain::{PreferenceLevel, Route, RouteSegment, TransportMode};
use crate::scenario::DisruptionScenario;

/// A route planning request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanRequest {
    /// Origin city name, as listed by `/api/cities`.
    pub origin: String,

    /// Destination city name.
    pub destination: String,

    /// Priority given to low cost.
    #[serde(default)]
    pub cost_priority: PreferenceLevel,

    /// Priority given to short transit time.
    #[serde(default)]
    pub time_priority: PreferenceLevel,

    /// Priority given to low emissions.
    #[serde(default)]
    pub eco_priority: PreferenceLevel,

    /// Carbon pricing and SLA parameters.
    #[serde(default)]
    pub adjustment: CostAdjustment,

    /// Disruptions to simulate on top of the recommendations.
    #[serde(default)]
    pub disruptions: DisruptionScenario,
}

/// One leg of a recommended route.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentDto {
    pub mode: TransportMode,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub cost: f64,
    pub emissions_kg: f64,
    pub reliability: f64,
    pub infrastructure_note: String,
}

impl From<&RouteSegment> for SegmentDto {
    fn from(segment: &RouteSegment) -> Self {
        Self {
            mode: segment.mode,
            origin: segment.origin.name.clone(),
            destination: segment.destination.name.clone(),
            distance_km: segment.distance_km,
            duration_hours: segment.duration_hours,
            cost: segment.cost,
            emissions_kg: segment.emissions_kg,
            reliability: segment.reliability,
            infrastructure_note: segment.infrastructure_note.clone(),
        }
    }
}

/// A recommended route with aggregates and adjusted costs.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDto {
    pub name: String,
    pub segments: Vec<SegmentDto>,
    pub total_cost: f64,
    pub total_time_hours: f64,
    pub total_distance_km: f64,
    pub total_emissions_kg: f64,
    pub average_reliability: f64,
    pub optimization_score: f64,
    pub mode_percentages: BTreeMap<TransportMode, f64>,
    pub carbon_cost: f64,
    pub adjusted_total_cost: f64,
    pub sla_penalty: f64,
    pub final_total_cost: f64,
}

impl From<&Route> for RouteDto {
    fn from(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            segments: route.segments.iter().map(SegmentDto::from).collect(),
            total_cost: route.total_cost,
            total_time_hours: route.total_time_hours,
            total_distance_km: route.total_distance_km,
            total_emissions_kg: route.total_emissions_kg,
            average_reliability: route.average_reliability,
            optimization_score: route.optimization_score,
            mode_percentages: route.mode_percentages(),
            carbon_cost: route.carbon_cost,
            adjusted_total_cost: route.adjusted_total_cost,
            sla_penalty: route.sla_penalty,
            final_total_cost: route.final_total_cost,
        }
    }
}

/// The planner's full answer for one query.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub origin: String,
    pub destination: String,
    pub routes: Vec<RouteDto>,

    /// Present only when the request asked for a disruption scenario.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated: Option<Vec<RouteDto>>,
}

/// One city as listed by `/api/cities`.
#[derive(Debug, Clone, Serialize)]
pub struct CityDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub railway_station: Option<String>,
    pub airport_code: Option<String>,
    pub seaport: Option<String>,
}

impl From<&CityRecord> for CityDto {
    fn from(record: &CityRecord) -> Self {
        Self {
            name: record.name.clone(),
            latitude: record.coordinates.latitude,
            longitude: record.coordinates.longitude,
            railway_station: record.railway_station.clone(),
            airport_code: record.airport_code.clone(),
            seaport: record.seaport.clone(),
        }
    }
}
