//! Per-query network construction.
//!
//! The builder resolves two city names against the directory and
//! assembles a small multigraph around them: direct connections for
//! every mode both cities support, a road-sea-road corridor through
//! the nearest seaport cities when a direct sea leg is impossible, and
//! synthetic transfer hubs on longer corridors. All connections are
//! priced by the segment factory and mirrored by the network.

use thiserror::Error;

use crate::directory::CityDirectory;
use crate::distance::DistanceProvider;
use crate::domain::{Coordinates, Location, LocationType, TransportMode};
use crate::factory::SegmentFactory;

use super::TransportationNetwork;

/// Minimum direct distance for air connections, in km. Below this,
/// fixed airport overhead makes air pointless.
const AIR_MIN_DISTANCE_KM: f64 = 500.0;

/// Minimum direct distance for the midway transfer hub, in km.
const MIDWAY_HUB_MIN_KM: f64 = 700.0;

/// Minimum direct distance for the intermodal hub, in km.
const INTERMODAL_HUB_MIN_KM: f64 = 300.0;

const MIDWAY_HUB_NAME: &str = "Transit Hub (Midway)";
const INTERMODAL_HUB_NAME: &str = "Intermodal Hub";

/// Errors from network construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A query endpoint is not in the city directory.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Origin and destination name the same city.
    #[error("origin and destination are the same city: {0}")]
    SameCity(String),
}

/// Builds a fresh [`TransportationNetwork`] for one origin/destination
/// pair.
pub struct NetworkBuilder<'a, P> {
    directory: &'a CityDirectory,
    factory: &'a SegmentFactory<P>,
}

impl<'a, P: DistanceProvider> NetworkBuilder<'a, P> {
    /// Create a builder over a directory and a segment factory.
    pub fn new(directory: &'a CityDirectory, factory: &'a SegmentFactory<P>) -> Self {
        Self { directory, factory }
    }

    /// Build the network between two named cities.
    pub fn build(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TransportationNetwork, BuildError> {
        if origin == destination {
            return Err(BuildError::SameCity(origin.to_string()));
        }

        let origin = self
            .directory
            .location(origin, LocationType::Origin)
            .ok_or_else(|| BuildError::UnknownCity(origin.to_string()))?;
        let destination = self
            .directory
            .location(destination, LocationType::Destination)
            .ok_or_else(|| BuildError::UnknownCity(destination.to_string()))?;

        let direct_km = origin.distance_to(&destination);
        tracing::debug!(
            origin = %origin.name,
            destination = %destination.name,
            direct_km,
            "building transportation network"
        );

        let mut network = TransportationNetwork::new();
        network.add_location(origin.clone());
        network.add_location(destination.clone());

        // Road is always available.
        network.add_connection(
            self.factory
                .segment(TransportMode::Road, &origin, &destination),
        );

        if origin.has_rail() && destination.has_rail() {
            network.add_connection(
                self.factory
                    .segment(TransportMode::Rail, &origin, &destination),
            );
        }

        if origin.has_air() && destination.has_air() && direct_km > AIR_MIN_DISTANCE_KM {
            network.add_connection(
                self.factory
                    .segment(TransportMode::Air, &origin, &destination),
            );
        }

        if origin.has_sea() && destination.has_sea() {
            network.add_connection(
                self.factory
                    .segment(TransportMode::Sea, &origin, &destination),
            );
        } else {
            self.add_sea_corridor(&mut network, &origin, &destination);
        }

        if direct_km > MIDWAY_HUB_MIN_KM {
            self.add_midway_hub(&mut network, &origin, &destination);
        }

        if direct_km > INTERMODAL_HUB_MIN_KM {
            self.add_intermodal_hub(&mut network, &origin, &destination, direct_km);
        }

        Ok(network)
    }

    /// Route sea freight through the nearest seaport city on each
    /// side: road to the origin-side port, sea between the ports, road
    /// onward to the destination.
    ///
    /// Skipped entirely when both sides resolve to the same port, or
    /// when the directory has no coastal city at all. A road feeder
    /// leg is skipped when the endpoint is itself the port city.
    fn add_sea_corridor(
        &self,
        network: &mut TransportationNetwork,
        origin: &Location,
        destination: &Location,
    ) {
        let (Some(origin_port), Some(destination_port)) = (
            self.directory.nearest_seaport(origin.coordinates, None),
            self.directory.nearest_seaport(destination.coordinates, None),
        ) else {
            return;
        };

        if origin_port.name == destination_port.name {
            return;
        }

        // When an endpoint is itself the port city, reuse it rather
        // than injecting a second location under the same name.
        let origin_side = if origin_port.name == origin.name {
            origin.clone()
        } else {
            origin_port.to_location(LocationType::Port)
        };
        let destination_side = if destination_port.name == destination.name {
            destination.clone()
        } else {
            destination_port.to_location(LocationType::Port)
        };

        network.add_location(origin_side.clone());
        network.add_location(destination_side.clone());

        if origin_side.name != origin.name {
            network.add_connection(
                self.factory
                    .segment(TransportMode::Road, origin, &origin_side),
            );
        }

        network.add_connection(
            self.factory
                .segment(TransportMode::Sea, &origin_side, &destination_side),
        );

        if destination_side.name != destination.name {
            network.add_connection(
                self.factory
                    .segment(TransportMode::Road, &destination_side, destination),
            );
        }
    }

    /// Inject a rail-capable transfer hub at the geographic midpoint
    /// of long corridors.
    fn add_midway_hub(
        &self,
        network: &mut TransportationNetwork,
        origin: &Location,
        destination: &Location,
    ) {
        let mid = Coordinates::midpoint(origin.coordinates, destination.coordinates);
        let hub = Location::new(MIDWAY_HUB_NAME, mid.latitude, mid.longitude, LocationType::Hub)
            .with_railway_station("Regional Rail Hub");
        network.add_location(hub.clone());

        for endpoint in [origin, destination] {
            network.add_connection(self.factory.segment(TransportMode::Road, endpoint, &hub));
            if endpoint.has_rail() {
                network.add_connection(self.factory.segment(TransportMode::Rail, endpoint, &hub));
            }
        }
    }

    /// Inject an intermodal hub weighted towards the origin (60/40
    /// split). The hub always has rail; it gains an airport only on
    /// corridors long enough for air to make sense.
    fn add_intermodal_hub(
        &self,
        network: &mut TransportationNetwork,
        origin: &Location,
        destination: &Location,
        direct_km: f64,
    ) {
        let pos = Coordinates::weighted(origin.coordinates, destination.coordinates, 0.6);
        let mut hub = Location::new(
            INTERMODAL_HUB_NAME,
            pos.latitude,
            pos.longitude,
            LocationType::Hub,
        )
        .with_railway_station("Intermodal Rail Hub");
        if direct_km > AIR_MIN_DISTANCE_KM {
            hub = hub.with_airport("HUB");
        }
        network.add_location(hub.clone());

        for endpoint in [origin, destination] {
            network.add_connection(self.factory.segment(TransportMode::Road, endpoint, &hub));
            if endpoint.has_rail() {
                network.add_connection(self.factory.segment(TransportMode::Rail, endpoint, &hub));
            }
            if endpoint.has_air() && hub.has_air() {
                network.add_connection(self.factory.segment(TransportMode::Air, endpoint, &hub));
            }
        }
    }
}
