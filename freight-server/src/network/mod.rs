//! Transportation network: a per-query multigraph of locations and
//! mode-tagged connections.

mod builder;

pub use builder::{BuildError, NetworkBuilder};

use std::collections::BTreeMap;

use crate::domain::{Location, RouteSegment, TransportMode};

/// Key of one directed connection: `(origin, destination, mode)`.
///
/// Keying on the full triple lets two cities be linked by several
/// modes simultaneously without collision.
pub type ConnectionKey = (String, String, TransportMode);

/// An undirected-by-construction multigraph of locations.
///
/// Built fresh per query and discarded afterwards: there is no
/// persistence and no incremental mutation across queries. Ordered
/// maps keep neighbor iteration deterministic, which in turn keeps
/// search results reproducible.
#[derive(Debug, Clone, Default)]
pub struct TransportationNetwork {
    locations: BTreeMap<String, Location>,
    connections: BTreeMap<ConnectionKey, RouteSegment>,
}

impl TransportationNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Idempotent keyed by name: re-adding a name that
    /// already exists is a no-op.
    pub fn add_location(&mut self, location: Location) {
        self.locations.entry(location.name.clone()).or_insert(location);
    }

    /// Insert a connection and its mirrored reverse.
    ///
    /// The reverse segment copies the forward segment's scalar
    /// attributes exactly; it is a mirror, not independently priced.
    /// Re-inserting an existing `(origin, destination, mode)` triple
    /// overwrites it, which makes the builder's rules idempotent.
    pub fn add_connection(&mut self, segment: RouteSegment) {
        let reverse = segment.reversed();

        let key = (
            segment.origin.name.clone(),
            segment.destination.name.clone(),
            segment.mode,
        );
        self.connections.insert(key, segment);

        let reverse_key = (
            reverse.origin.name.clone(),
            reverse.destination.name.clone(),
            reverse.mode,
        );
        self.connections.insert(reverse_key, reverse);
    }

    /// Look up a location by name.
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Whether the network contains a location.
    pub fn contains_location(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// All locations, in name order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Look up one directed connection.
    pub fn connection(
        &self,
        origin: &str,
        destination: &str,
        mode: TransportMode,
    ) -> Option<&RouteSegment> {
        self.connections
            .get(&(origin.to_string(), destination.to_string(), mode))
    }

    /// All directed connections, in key order.
    pub fn connections(&self) -> impl Iterator<Item = (&ConnectionKey, &RouteSegment)> {
        self.connections.iter()
    }

    /// Number of directed connections (twice the undirected edge
    /// count).
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Every outgoing edge from `name`: `(neighbor, mode, segment)`.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, TransportMode, &RouteSegment)> {
        self.connections
            .iter()
            .filter(|((origin, _, _), _)| origin == name)
            .map(|((_, destination, mode), segment)| (destination.as_str(), *mode, segment))
            .collect()
    }
}
