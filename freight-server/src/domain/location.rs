//! Locations with transport infrastructure flags.

use super::Coordinates;

/// The role a location plays within one query's network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    /// The query's starting city.
    Origin,
    /// The query's destination city.
    Destination,
    /// A synthetic transfer hub injected by the network builder.
    Hub,
    /// A seaport city injected to enable sea legs.
    Port,
}

impl LocationType {
    /// Lowercase name of the location type.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Origin => "origin",
            LocationType::Destination => "destination",
            LocationType::Hub => "hub",
            LocationType::Port => "port",
        }
    }
}

/// A geographic location with transport infrastructure.
///
/// Infrastructure is modelled as optional facility names: a location
/// has rail capability exactly when it carries a railway station name,
/// and likewise for airports and seaports. The name is the unique key
/// within a network instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Unique name within a network.
    pub name: String,

    /// Geographic position.
    pub coordinates: Coordinates,

    /// Role within the query's network.
    pub location_type: LocationType,

    /// Railway station name, if the location has rail capability.
    pub railway_station: Option<String>,

    /// IATA-style airport code, if the location has air capability.
    pub airport_code: Option<String>,

    /// Seaport facility name, if the location is coastal.
    pub seaport: Option<String>,
}

impl Location {
    /// Create a location with no infrastructure.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        location_type: LocationType,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates: Coordinates::new(latitude, longitude),
            location_type,
            railway_station: None,
            airport_code: None,
            seaport: None,
        }
    }

    /// Attach a railway station.
    pub fn with_railway_station(mut self, station: impl Into<String>) -> Self {
        self.railway_station = Some(station.into());
        self
    }

    /// Attach an airport code.
    pub fn with_airport(mut self, code: impl Into<String>) -> Self {
        self.airport_code = Some(code.into());
        self
    }

    /// Attach a seaport.
    pub fn with_seaport(mut self, port: impl Into<String>) -> Self {
        self.seaport = Some(port.into());
        self
    }

    /// Whether the location has a railway station.
    pub fn has_rail(&self) -> bool {
        self.railway_station.is_some()
    }

    /// Whether the location has an airport.
    pub fn has_air(&self) -> bool {
        self.airport_code.is_some()
    }

    /// Whether the location is coastal with a seaport.
    pub fn has_sea(&self) -> bool {
        self.seaport.is_some()
    }

    /// Great-circle distance to another location, in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.coordinates.distance_to(other.coordinates)
    }
}
