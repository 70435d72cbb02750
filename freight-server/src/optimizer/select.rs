//! Objective-diverse route selection.

use std::collections::HashSet;

use crate::domain::{Route, RouteSignature};
use crate::network::TransportationNetwork;

use super::config::SearchConfig;
use super::enumerate::enumerate_routes;
use super::scoring::{Objective, ScoringWeights, route_score};

/// One recommended route per objective.
///
/// A slot is empty when no route exists at all, or when every
/// candidate was already claimed by a higher-priority objective.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteSet {
    pub fastest: Option<Route>,
    pub cheapest: Option<Route>,
    pub balanced: Option<Route>,
    pub eco_friendly: Option<Route>,
}

impl RouteSet {
    /// The route selected for an objective, if any.
    pub fn get(&self, objective: Objective) -> Option<&Route> {
        match objective {
            Objective::Time => self.fastest.as_ref(),
            Objective::Cost => self.cheapest.as_ref(),
            Objective::Balanced => self.balanced.as_ref(),
            Objective::Emissions => self.eco_friendly.as_ref(),
        }
    }

    /// Store a route under an objective, replacing any previous one.
    pub fn insert(&mut self, objective: Objective, route: Route) {
        let slot = match objective {
            Objective::Time => &mut self.fastest,
            Objective::Cost => &mut self.cheapest,
            Objective::Balanced => &mut self.balanced,
            Objective::Emissions => &mut self.eco_friendly,
        };
        *slot = Some(route);
    }

    /// Iterate over the filled slots in objective order.
    pub fn iter(&self) -> impl Iterator<Item = (Objective, &Route)> {
        Objective::ALL
            .into_iter()
            .filter_map(|objective| self.get(objective).map(|route| (objective, route)))
    }

    /// Iterate mutably over the filled slots in objective order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Objective, &mut Route)> {
        [
            (Objective::Time, self.fastest.as_mut()),
            (Objective::Cost, self.cheapest.as_mut()),
            (Objective::Balanced, self.balanced.as_mut()),
            (Objective::Emissions, self.eco_friendly.as_mut()),
        ]
        .into_iter()
        .filter_map(|(objective, route)| route.map(|route| (objective, route)))
    }

    /// Whether no route was found for any objective.
    pub fn is_empty(&self) -> bool {
        self.fastest.is_none()
            && self.cheapest.is_none()
            && self.balanced.is_none()
            && self.eco_friendly.is_none()
    }
}

/// Selects one route per objective from the enumerated candidate
/// pool.
///
/// Multimodal routes are preferred: when at least one candidate mixes
/// modes, single-mode candidates are excluded from selection entirely.
/// Objectives are filled in priority order and only consider routes
/// not already claimed by an earlier objective, so filled slots are
/// always structurally distinct; an objective with nothing left
/// unclaimed stays empty.
#[derive(Debug, Clone)]
pub struct MultimodalOptimizer {
    config: SearchConfig,
    weights: ScoringWeights,
}

impl MultimodalOptimizer {
    /// Create an optimizer with the given balanced-objective weights.
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            config: SearchConfig::default(),
            weights,
        }
    }

    /// Override the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Find the recommended route for every objective.
    pub fn find_optimal_routes(
        &self,
        network: &TransportationNetwork,
        origin: &str,
        destination: &str,
    ) -> RouteSet {
        let pool = enumerate_routes(network, origin, destination, &self.config);

        tracing::debug!(
            origin,
            destination,
            candidates = pool.len(),
            "selecting routes from candidate pool"
        );

        let multimodal: Vec<&Route> = pool.iter().filter(|r| r.is_multimodal()).collect();
        let candidates: Vec<&Route> = if multimodal.is_empty() {
            pool.iter().collect()
        } else {
            multimodal
        };

        let mut set = RouteSet::default();
        let mut used: HashSet<RouteSignature> = HashSet::new();

        for objective in Objective::ALL {
            let best = match self.best_under(&candidates, objective, &used) {
                Some(route) => route,
                None => continue,
            };

            used.insert(best.signature());
            let mut route = best.clone();
            route.name = objective.display_name().to_string();
            route.optimization_score = route_score(&route, objective, &self.weights);
            set.insert(objective, route);
        }

        set
    }

    /// The lowest-scoring unclaimed candidate under an objective.
    fn best_under<'p>(
        &self,
        candidates: &[&'p Route],
        objective: Objective,
        used: &HashSet<RouteSignature>,
    ) -> Option<&'p Route> {
        candidates
            .iter()
            .copied()
            .filter(|route| !used.contains(&route.signature()))
            .min_by(|a, b| {
                route_score(a, objective, &self.weights)
                    .total_cmp(&route_score(b, objective, &self.weights))
            })
    }
}
