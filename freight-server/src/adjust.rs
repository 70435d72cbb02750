//! Post-search cost adjustment: carbon pricing and SLA penalties.

use serde::Deserialize;

use crate::domain::Route;
use crate::optimizer::RouteSet;

/// Carbon and service-level adjustments applied after route selection.
///
/// Applying an adjustment overwrites the four derived cost fields on
/// each route, so re-applying with different parameters is safe and
/// never compounds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostAdjustment {
    /// Whether carbon pricing is applied at all.
    pub carbon_enabled: bool,

    /// Price per kilogram of CO2.
    pub carbon_price: f64,

    /// Committed delivery window in hours.
    pub sla_hours: f64,

    /// Penalty per hour beyond the SLA window.
    pub penalty_rate: f64,
}

impl Default for CostAdjustment {
    fn default() -> Self {
        Self {
            carbon_enabled: false,
            carbon_price: 0.0,
            sla_hours: 0.0,
            penalty_rate: 0.0,
        }
    }
}

impl CostAdjustment {
    /// Adjust every route in the set in place.
    pub fn apply(&self, routes: &mut RouteSet) {
        for (_, route) in routes.iter_mut() {
            self.apply_route(route);
        }
    }

    /// Adjust a single route in place.
    pub fn apply_route(&self, route: &mut Route) {
        route.carbon_cost = if self.carbon_enabled {
            route.total_emissions_kg * self.carbon_price
        } else {
            0.0
        };
        route.adjusted_total_cost = route.total_cost + route.carbon_cost;
        route.sla_penalty =
            (route.total_time_hours - self.sla_hours).max(0.0) * self.penalty_rate;
        route.final_total_cost = route.adjusted_total_cost + route.sla_penalty;
    }
}
