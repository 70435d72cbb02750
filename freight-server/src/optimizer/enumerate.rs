//! Bounded depth-first route enumeration.

use std::collections::HashSet;

use crate::domain::{Route, RouteSegment};
use crate::network::TransportationNetwork;

use super::config::SearchConfig;

/// Enumerate every simple path from `origin` to `destination` with at
/// most `config.max_segments` legs.
///
/// Paths never revisit a location. The per-query networks are small
/// (a handful of locations), so exhaustive enumeration under the leg
/// bound is cheap and gives the selection pass a rich candidate pool.
pub fn enumerate_routes(
    network: &TransportationNetwork,
    origin: &str,
    destination: &str,
    config: &SearchConfig,
) -> Vec<Route> {
    let mut routes = Vec::new();
    if origin == destination || !network.contains_location(origin) {
        return routes;
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(origin.to_string());
    let mut path: Vec<RouteSegment> = Vec::new();

    walk(
        network,
        origin,
        destination,
        config.max_segments,
        &mut visited,
        &mut path,
        &mut routes,
    );
    routes
}

fn walk(
    network: &TransportationNetwork,
    current: &str,
    destination: &str,
    max_segments: usize,
    visited: &mut HashSet<String>,
    path: &mut Vec<RouteSegment>,
    routes: &mut Vec<Route>,
) {
    if path.len() >= max_segments {
        return;
    }

    for (neighbor, _, segment) in network.neighbors(current) {
        if neighbor == destination {
            let mut segments = path.clone();
            segments.push(segment.clone());
            // Contiguous by construction.
            if let Ok(route) = Route::from_segments("candidate", segments) {
                routes.push(route);
            }
            continue;
        }

        if visited.contains(neighbor) {
            continue;
        }

        visited.insert(neighbor.to_string());
        path.push(segment.clone());
        walk(network, neighbor, destination, max_segments, visited, path, routes);
        path.pop();
        visited.remove(neighbor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, LocationType, TransportMode};

    fn loc(name: &str) -> Location {
        Location::new(name, 10.0, 70.0, LocationType::Hub)
    }

    fn seg(mode: TransportMode, from: &str, to: &str) -> RouteSegment {
        RouteSegment::new(
            mode,
            loc(from),
            loc(to),
            Some(100.0),
            2.0,
            10_000.0,
            30.0,
            85.0,
            "",
        )
    }

    fn diamond() -> TransportationNetwork {
        // A -> B -> C plus a rail alternative on the first leg and a
        // direct road edge A -> C.
        let mut network = TransportationNetwork::new();
        network.add_connection(seg(TransportMode::Road, "A", "B"));
        network.add_connection(seg(TransportMode::Rail, "A", "B"));
        network.add_connection(seg(TransportMode::Road, "B", "C"));
        network.add_connection(seg(TransportMode::Road, "A", "C"));
        network
    }

    #[test]
    fn enumerates_all_simple_paths() {
        let network = diamond();
        let routes = enumerate_routes(&network, "A", "C", &SearchConfig::default());

        // A->C direct, A->B(road)->C, A->B(rail)->C.
        assert_eq!(routes.len(), 3);
        for route in &routes {
            assert_eq!(route.segments.first().unwrap().origin.name, "A");
            assert_eq!(route.segments.last().unwrap().destination.name, "C");
        }
    }

    #[test]
    fn paths_never_revisit_a_location() {
        let network = diamond();
        let routes = enumerate_routes(&network, "A", "C", &SearchConfig::default());
        for route in routes {
            let mut seen = HashSet::new();
            seen.insert(route.segments[0].origin.name.clone());
            for segment in &route.segments {
                assert!(seen.insert(segment.destination.name.clone()));
            }
        }
    }

    #[test]
    fn respects_segment_bound() {
        // A chain A -> B -> C -> D -> E -> F needs five legs.
        let mut network = TransportationNetwork::new();
        for pair in ["A", "B", "C", "D", "E", "F"].windows(2) {
            network.add_connection(seg(TransportMode::Road, pair[0], pair[1]));
        }

        let config = SearchConfig::default();
        assert!(enumerate_routes(&network, "A", "F", &config).is_empty());
        assert_eq!(enumerate_routes(&network, "A", "E", &config).len(), 1);
    }

    #[test]
    fn unknown_origin_yields_nothing() {
        let network = diamond();
        assert!(enumerate_routes(&network, "Z", "C", &SearchConfig::default()).is_empty());
    }

    #[test]
    fn same_endpoints_yield_nothing() {
        let network = diamond();
        assert!(enumerate_routes(&network, "A", "A", &SearchConfig::default()).is_empty());
    }
}
