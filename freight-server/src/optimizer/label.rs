//! Label-setting best-route search.
//!
//! A Dijkstra-style search over `(location, last mode)` states. Each
//! label carries its partial path, its accumulated score under one
//! objective, and its accumulated travel time. Mode changes add a
//! fixed number of hours to the travel time on every objective, and
//! additionally a score penalty under the balanced objective.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::domain::{Route, RouteSegment, TransportMode};
use crate::network::TransportationNetwork;

use super::config::SearchConfig;
use super::scoring::{MODE_CHANGE_SCORE_PENALTY, Objective, ScoringWeights, segment_score};

struct Label {
    score: f64,
    /// Insertion sequence number; breaks score ties deterministically.
    seq: u64,
    node: String,
    last_mode: Option<TransportMode>,
    segments: Vec<RouteSegment>,
    time_hours: f64,
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for Label {}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the best route from `origin` to `destination` under one
/// objective, or `None` when no route within the leg bound exists.
///
/// The returned route's `optimization_score` is set to the winning
/// label's score, and its total time includes accumulated mode-change
/// hours.
pub fn search_best_route(
    network: &TransportationNetwork,
    origin: &str,
    destination: &str,
    objective: Objective,
    weights: &ScoringWeights,
    config: &SearchConfig,
) -> Option<Route> {
    if origin == destination || !network.contains_location(origin) {
        return None;
    }

    let mut heap: BinaryHeap<Reverse<Label>> = BinaryHeap::new();
    let mut visited: HashSet<(String, Option<TransportMode>)> = HashSet::new();
    let mut seq = 0u64;

    heap.push(Reverse(Label {
        score: 0.0,
        seq,
        node: origin.to_string(),
        last_mode: None,
        segments: Vec::new(),
        time_hours: 0.0,
    }));

    while let Some(Reverse(label)) = heap.pop() {
        if label.node == destination {
            let mut route = Route::from_parts(
                objective.display_name(),
                label.segments,
                label.time_hours,
            )
            .ok()?;
            route.optimization_score = label.score;
            return Some(route);
        }

        if !visited.insert((label.node.clone(), label.last_mode)) {
            continue;
        }

        if label.segments.len() >= config.max_segments {
            continue;
        }

        for (neighbor, mode, segment) in network.neighbors(&label.node) {
            if visited.contains(&(neighbor.to_string(), Some(mode))) {
                continue;
            }

            let changing = label.last_mode.is_some_and(|last| last != mode);
            let mut score = label.score + segment_score(segment, objective, weights);
            if changing && objective == Objective::Balanced {
                score += MODE_CHANGE_SCORE_PENALTY;
            }
            let mut time_hours = label.time_hours + segment.duration_hours;
            if changing {
                time_hours += config.mode_change_hours;
            }

            let mut segments = label.segments.clone();
            segments.push(segment.clone());

            seq += 1;
            heap.push(Reverse(Label {
                score,
                seq,
                node: neighbor.to_string(),
                last_mode: Some(mode),
                segments,
                time_hours,
            }));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, LocationType};

    fn loc(name: &str) -> Location {
        Location::new(name, 10.0, 70.0, LocationType::Hub)
    }

    fn seg(
        mode: TransportMode,
        from: &str,
        to: &str,
        duration: f64,
        cost: f64,
        emissions: f64,
    ) -> RouteSegment {
        RouteSegment::new(
            mode,
            loc(from),
            loc(to),
            Some(100.0),
            duration,
            cost,
            emissions,
            85.0,
            "",
        )
    }

    /// A network where the optimum differs per objective: the air leg
    /// is fast but costly and dirty, the sea detour slow but cheap.
    fn contrasting_network() -> TransportationNetwork {
        let mut network = TransportationNetwork::new();
        network.add_connection(seg(TransportMode::Air, "A", "C", 2.0, 50_000.0, 500.0));
        network.add_connection(seg(TransportMode::Road, "A", "B", 6.0, 12_000.0, 120.0));
        network.add_connection(seg(TransportMode::Sea, "B", "C", 20.0, 3_000.0, 20.0));
        network
    }

    #[test]
    fn objectives_pick_different_routes() {
        let network = contrasting_network();
        let weights = ScoringWeights::default();
        let config = SearchConfig::default();

        let fastest =
            search_best_route(&network, "A", "C", Objective::Time, &weights, &config).unwrap();
        assert_eq!(fastest.segments.len(), 1);
        assert_eq!(fastest.segments[0].mode, TransportMode::Air);

        let cheapest =
            search_best_route(&network, "A", "C", Objective::Cost, &weights, &config).unwrap();
        assert_eq!(cheapest.segments.len(), 2);
        assert_eq!(cheapest.segments[1].mode, TransportMode::Sea);

        let greenest = search_best_route(
            &network,
            "A",
            "C",
            Objective::Emissions,
            &weights,
            &config,
        )
        .unwrap();
        assert_eq!(greenest.segments.len(), 2);
    }

    #[test]
    fn mode_change_adds_hours_but_not_time_score() {
        let network = contrasting_network();
        let weights = ScoringWeights::default();
        let config = SearchConfig::default();

        let cheapest =
            search_best_route(&network, "A", "C", Objective::Cost, &weights, &config).unwrap();

        // Road then sea: one mode change adds two hours to the total.
        let duration_sum: f64 = cheapest.segments.iter().map(|s| s.duration_hours).sum();
        assert!((cheapest.total_time_hours - duration_sum - 2.0).abs() < 1e-9);
    }

    #[test]
    fn time_score_excludes_change_penalty() {
        // Only a two-leg mixed-mode path exists.
        let mut network = TransportationNetwork::new();
        network.add_connection(seg(TransportMode::Road, "A", "B", 3.0, 1_000.0, 10.0));
        network.add_connection(seg(TransportMode::Rail, "B", "C", 4.0, 1_000.0, 10.0));

        let route = search_best_route(
            &network,
            "A",
            "C",
            Objective::Time,
            &ScoringWeights::default(),
            &SearchConfig::default(),
        )
        .unwrap();

        assert!((route.optimization_score - 7.0).abs() < 1e-9);
        assert!((route.total_time_hours - 9.0).abs() < 1e-9);
    }

    #[test]
    fn respects_segment_bound() {
        let mut network = TransportationNetwork::new();
        for pair in ["A", "B", "C", "D", "E", "F"].windows(2) {
            network.add_connection(seg(TransportMode::Road, pair[0], pair[1], 1.0, 100.0, 1.0));
        }

        let config = SearchConfig::default();
        let weights = ScoringWeights::default();
        assert!(
            search_best_route(&network, "A", "F", Objective::Time, &weights, &config).is_none()
        );
        assert!(
            search_best_route(&network, "A", "E", Objective::Time, &weights, &config).is_some()
        );
    }

    #[test]
    fn no_route_between_disconnected_components() {
        let mut network = TransportationNetwork::new();
        network.add_connection(seg(TransportMode::Road, "A", "B", 1.0, 100.0, 1.0));
        network.add_connection(seg(TransportMode::Road, "X", "Y", 1.0, 100.0, 1.0));

        assert!(
            search_best_route(
                &network,
                "A",
                "Y",
                Objective::Time,
                &ScoringWeights::default(),
                &SearchConfig::default(),
            )
            .is_none()
        );
    }

    #[test]
    fn matches_enumeration_minimum() {
        let network = contrasting_network();
        let weights = ScoringWeights::default();
        let config = SearchConfig::default();

        for objective in Objective::ALL {
            let best =
                search_best_route(&network, "A", "C", objective, &weights, &config);
            let enumerated = super::super::enumerate_routes(&network, "A", "C", &config);
            let enumerated_min = enumerated
                .iter()
                .map(|r| super::super::route_score(r, objective, &weights))
                .fold(f64::INFINITY, f64::min);

            let best = best.unwrap();
            assert!(
                (best.optimization_score - enumerated_min).abs() < 1e-9,
                "{objective:?}: label {} vs enumerated {enumerated_min}",
                best.optimization_score
            );
        }
    }
}
