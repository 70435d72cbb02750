//! Objectives, preference weights, and route scoring.
//!
//! Time, cost, and emissions objectives score a route by its raw
//! metric. The balanced objective normalizes each segment's per-km
//! metrics against per-mode reference values, so that a mode is judged
//! against its own baseline rather than penalized for being inherently
//! slow or expensive.

use crate::domain::{PreferenceLevel, Route, RouteSegment, TransportMode};
use crate::factory::ModeProfile;

/// Score penalty per mode change under the balanced objective.
pub(crate) const MODE_CHANGE_SCORE_PENALTY: f64 = 0.05;

/// An optimization objective. Lower scores are better under every
/// objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Time,
    Cost,
    Balanced,
    Emissions,
}

impl Objective {
    /// All objectives, in selection-priority order.
    pub const ALL: [Objective; 4] = [
        Objective::Time,
        Objective::Cost,
        Objective::Balanced,
        Objective::Emissions,
    ];

    /// Stable lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            Objective::Time => "time",
            Objective::Cost => "cost",
            Objective::Balanced => "balanced",
            Objective::Emissions => "emissions",
        }
    }

    /// Display name given to the route selected for this objective.
    pub fn display_name(&self) -> &'static str {
        match self {
            Objective::Time => "Fastest Multimodal Route",
            Objective::Cost => "Cheapest Multimodal Route",
            Objective::Balanced => "Balanced Multimodal Route",
            Objective::Emissions => "Most Eco-Friendly Multimodal Route",
        }
    }
}

/// Weights for the balanced objective.
///
/// When derived from preference levels the three criterion weights
/// are normalized to sum to 0.9, with 0.1 reserved for reliability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub cost: f64,
    pub time: f64,
    pub emissions: f64,
    pub reliability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            cost: 0.33,
            time: 0.33,
            emissions: 0.34,
            reliability: 0.12,
        }
    }
}

impl ScoringWeights {
    /// Derive weights from ordinal preference levels.
    ///
    /// Levels are normalized so the three criteria sum to 0.9; the
    /// reliability weight is fixed at 0.1.
    pub fn from_preferences(
        cost: PreferenceLevel,
        time: PreferenceLevel,
        emissions: PreferenceLevel,
    ) -> Self {
        let total = cost.weight() + time.weight() + emissions.weight();
        Self {
            cost: cost.weight() / total * 0.9,
            time: time.weight() / total * 0.9,
            emissions: emissions.weight() / total * 0.9,
            reliability: 0.1,
        }
    }
}

/// Reference cost per kilometre for each mode, in INR. Represents a
/// typical market rate the balanced objective normalizes against.
fn cost_reference(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Road => 150.0,
        TransportMode::Rail => 80.0,
        TransportMode::Air => 550.0,
        TransportMode::Sea => 35.0,
    }
}

/// Reference hours per kilometre: the reciprocal of the mode's
/// average speed.
fn time_reference(mode: TransportMode) -> f64 {
    1.0 / ModeProfile::for_mode(mode).speed_kmh
}

/// Reference emissions per kilometre, straight from the mode table.
fn emissions_reference(mode: TransportMode) -> f64 {
    ModeProfile::for_mode(mode).emissions_per_km
}

/// Score a single segment under an objective. Lower is better.
pub fn segment_score(segment: &RouteSegment, objective: Objective, weights: &ScoringWeights) -> f64 {
    match objective {
        Objective::Time => segment.duration_hours,
        Objective::Cost => segment.cost,
        Objective::Emissions => segment.emissions_kg,
        Objective::Balanced => {
            // Guard against zero-length segments.
            let d = segment.distance_km.max(1.0);
            let cost_term = (segment.cost / d) / cost_reference(segment.mode);
            let time_term = (segment.duration_hours / d) / time_reference(segment.mode);
            let emissions_term = (segment.emissions_kg / d) / emissions_reference(segment.mode);

            weights.cost * cost_term
                + weights.time * time_term
                + weights.emissions * emissions_term
                + weights.reliability * (100.0 - segment.reliability) / 100.0
        }
    }
}

/// Score a whole route under an objective. Lower is better.
///
/// Under the balanced objective each mode change adds a fixed penalty;
/// the raw-metric objectives are pure segment sums.
pub fn route_score(route: &Route, objective: Objective, weights: &ScoringWeights) -> f64 {
    let base: f64 = route
        .segments
        .iter()
        .map(|segment| segment_score(segment, objective, weights))
        .sum();

    if objective == Objective::Balanced {
        base + MODE_CHANGE_SCORE_PENALTY * route.mode_change_count() as f64
    } else {
        base
    }
}
