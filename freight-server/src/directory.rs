//! Static city directory.
//!
//! A read-only table mapping city names to coordinates and transport
//! infrastructure. The planner treats this as configuration: it is
//! consulted when resolving query endpoints and when searching for the
//! nearest seaport city, and is never mutated by a query.

use std::collections::BTreeMap;

use crate::domain::{Coordinates, Location, LocationType};

/// One city in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    /// City name, unique within the directory.
    pub name: String,

    /// Geographic position.
    pub coordinates: Coordinates,

    /// Railway station name, if the city has one.
    pub railway_station: Option<String>,

    /// Airport code, if the city has one.
    pub airport_code: Option<String>,

    /// Seaport facility name, if the city is coastal.
    pub seaport: Option<String>,
}

impl CityRecord {
    /// Whether the city is coastal with a seaport.
    pub fn has_seaport(&self) -> bool {
        self.seaport.is_some()
    }

    /// Materialize this record as a network location with the given
    /// role.
    pub fn to_location(&self, location_type: LocationType) -> Location {
        let mut location = Location::new(
            self.name.clone(),
            self.coordinates.latitude,
            self.coordinates.longitude,
            location_type,
        );
        if let Some(station) = &self.railway_station {
            location = location.with_railway_station(station.clone());
        }
        if let Some(code) = &self.airport_code {
            location = location.with_airport(code.clone());
        }
        if let Some(port) = &self.seaport {
            location = location.with_seaport(port.clone());
        }
        location
    }
}

/// An ordered, read-only directory of cities.
#[derive(Debug, Clone, Default)]
pub struct CityDirectory {
    cities: BTreeMap<String, CityRecord>,
}

impl CityDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city record, replacing any record with the same name.
    pub fn insert(&mut self, record: CityRecord) {
        self.cities.insert(record.name.clone(), record);
    }

    /// Look up a city by name.
    pub fn get(&self, name: &str) -> Option<&CityRecord> {
        self.cities.get(name)
    }

    /// Whether the directory contains a city.
    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// All city names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// All city records, in name order.
    pub fn records(&self) -> impl Iterator<Item = &CityRecord> {
        self.cities.values()
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Materialize a named city as a location, if present.
    pub fn location(&self, name: &str, location_type: LocationType) -> Option<Location> {
        self.get(name).map(|record| record.to_location(location_type))
    }

    /// The coastal city nearest to `from` by great-circle distance.
    ///
    /// `exclude` removes one city name from consideration. Returns
    /// `None` when the directory has no (other) coastal city.
    pub fn nearest_seaport(
        &self,
        from: Coordinates,
        exclude: Option<&str>,
    ) -> Option<&CityRecord> {
        self.cities
            .values()
            .filter(|record| record.has_seaport())
            .filter(|record| exclude != Some(record.name.as_str()))
            .min_by(|a, b| {
                let da = from.distance_to(a.coordinates);
                let db = from.distance_to(b.coordinates);
                da.total_cmp(&db)
            })
    }

    /// The built-in directory of major Indian freight cities.
    pub fn indian_cities() -> Self {
        let mut directory = CityDirectory::new();
        for (name, lat, lon, station, airport, seaport) in INDIAN_CITIES {
            directory.insert(CityRecord {
                name: (*name).to_string(),
                coordinates: Coordinates::new(*lat, *lon),
                railway_station: non_empty(station),
                airport_code: non_empty(airport),
                seaport: non_empty(seaport),
            });
        }
        directory
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Built-in Indian city data: (name, lat, lon, railway station,
/// airport code, seaport). Empty string means the city lacks that
/// infrastructure.
#[rustfmt::skip]
const INDIAN_CITIES: &[(&str, f64, f64, &str, &str, &str)] = &[
    ("Mumbai, Maharashtra", 19.0760, 72.8777, "Mumbai Central/CSMT", "BOM", "Jawaharlal Nehru Port (JNPT)"),
    ("Delhi", 28.7041, 77.1025, "New Delhi Railway Station", "DEL", ""),
    ("Bengaluru, Karnataka", 12.9716, 77.5946, "Bengaluru City Junction", "BLR", ""),
    ("Kolkata, West Bengal", 22.5726, 88.3639, "Howrah Junction", "CCU", "Kolkata Port"),
    ("Chennai, Tamil Nadu", 13.0827, 80.2707, "Chennai Central", "MAA", "Chennai Port"),
    ("Hyderabad, Telangana", 17.3850, 78.4867, "Hyderabad Deccan", "HYD", ""),
    ("Pune, Maharashtra", 18.5204, 73.8567, "Pune Junction", "PNQ", ""),
    ("Ahmedabad, Gujarat", 23.0225, 72.5714, "Ahmedabad Junction", "AMD", ""),
    ("Jaipur, Rajasthan", 26.9124, 75.7873, "Jaipur Junction", "JAI", ""),
    ("Surat, Gujarat", 21.1702, 72.8311, "Surat Railway Station", "STV", "Surat Port (Magdalla)"),
    ("Lucknow, Uttar Pradesh", 26.8467, 80.9462, "Lucknow Charbagh", "LKO", ""),
    ("Kanpur, Uttar Pradesh", 26.4499, 80.3319, "Kanpur Central", "", ""),
    ("Nagpur, Maharashtra", 21.1458, 79.0882, "Nagpur Junction", "NAG", ""),
    ("Visakhapatnam, Andhra Pradesh", 17.6869, 83.2185, "Visakhapatnam Junction", "VTZ", "Visakhapatnam Port"),
    ("Indore, Madhya Pradesh", 22.7196, 75.8577, "Indore Junction", "IDR", ""),
    ("Patna, Bihar", 25.5941, 85.1376, "Patna Junction", "PAT", ""),
    ("Bhopal, Madhya Pradesh", 23.2599, 77.4126, "Bhopal Junction", "BHO", ""),
    ("Vadodara, Gujarat", 22.3072, 73.1812, "Vadodara Junction", "BDQ", ""),
    ("Ludhiana, Punjab", 30.9010, 75.8573, "Ludhiana Junction", "", ""),
    ("Agra, Uttar Pradesh", 27.1767, 78.0081, "Agra Cantt", "AGR", ""),
    ("Nashik, Maharashtra", 19.9975, 73.7898, "Nashik Road", "", ""),
    ("Ranchi, Jharkhand", 23.3441, 85.3096, "Ranchi Junction", "IXR", ""),
    ("Rajkot, Gujarat", 22.3039, 70.8022, "Rajkot Junction", "RAJ", ""),
    ("Varanasi, Uttar Pradesh", 25.3176, 82.9739, "Varanasi Junction", "VNS", ""),
    ("Amritsar, Punjab", 31.6340, 74.8723, "Amritsar Junction", "ATQ", ""),
    ("Aurangabad, Maharashtra", 19.8762, 75.3433, "Aurangabad Railway Station", "IXU", ""),
    ("Guwahati, Assam", 26.1445, 91.7362, "Guwahati Railway Station", "GAU", ""),
    ("Chandigarh", 30.7333, 76.7794, "Chandigarh Railway Station", "IXC", ""),
    ("Kochi, Kerala", 9.9312, 76.2673, "Ernakulam Junction", "COK", "Cochin Port"),
    ("Coimbatore, Tamil Nadu", 11.0168, 76.9558, "Coimbatore Junction", "CJB", ""),
    ("Thiruvananthapuram, Kerala", 8.5241, 76.9366, "Trivandrum Central", "TRV", "Vizhinjam Port"),
    ("Goa (Vasco)", 15.3983, 73.8318, "Vasco-da-Gama Railway Station", "GOI", "Mormugao Port"),
    ("Mangalore, Karnataka", 12.9141, 74.8560, "Mangalore Central", "IXE", "New Mangalore Port"),
    ("Bhubaneswar, Odisha", 20.2961, 85.8245, "Bhubaneswar Railway Station", "BBI", ""),
    ("Vijayawada, Andhra Pradesh", 16.5062, 80.6480, "Vijayawada Junction", "VGA", ""),
    ("Madurai, Tamil Nadu", 9.9252, 78.1198, "Madurai Junction", "IXM", ""),
    ("Jodhpur, Rajasthan", 26.2389, 73.0243, "Jodhpur Junction", "JDH", ""),
    ("Raipur, Chhattisgarh", 21.2514, 81.6296, "Raipur Junction", "RPR", ""),
    ("Kota, Rajasthan", 25.2138, 75.8648, "Kota Junction", "", ""),
    ("Srinagar, Jammu and Kashmir", 34.0837, 74.7973, "Srinagar Railway Station", "SXR", ""),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directory_has_40_cities() {
        let directory = CityDirectory::indian_cities();
        assert_eq!(directory.len(), 40);
        assert!(directory.contains("Mumbai, Maharashtra"));
        assert!(directory.contains("Bengaluru, Karnataka"));
    }

    #[test]
    fn infrastructure_flags_parsed() {
        let directory = CityDirectory::indian_cities();

        let mumbai = directory.get("Mumbai, Maharashtra").unwrap();
        assert!(mumbai.has_seaport());
        assert_eq!(mumbai.airport_code.as_deref(), Some("BOM"));

        // Kanpur has rail only.
        let kanpur = directory.get("Kanpur, Uttar Pradesh").unwrap();
        assert!(kanpur.railway_station.is_some());
        assert!(kanpur.airport_code.is_none());
        assert!(!kanpur.has_seaport());
    }

    #[test]
    fn nearest_seaport_to_bengaluru_is_chennai() {
        let directory = CityDirectory::indian_cities();
        let bengaluru = directory.get("Bengaluru, Karnataka").unwrap();

        let port = directory
            .nearest_seaport(bengaluru.coordinates, None)
            .unwrap();
        assert_eq!(port.name, "Chennai, Tamil Nadu");
    }

    #[test]
    fn nearest_seaport_respects_exclusion() {
        let directory = CityDirectory::indian_cities();
        let chennai = directory.get("Chennai, Tamil Nadu").unwrap();

        // Chennai itself is the nearest seaport to Chennai.
        let port = directory.nearest_seaport(chennai.coordinates, None).unwrap();
        assert_eq!(port.name, "Chennai, Tamil Nadu");

        // Excluding it yields some other coastal city.
        let other = directory
            .nearest_seaport(chennai.coordinates, Some("Chennai, Tamil Nadu"))
            .unwrap();
        assert_ne!(other.name, "Chennai, Tamil Nadu");
        assert!(other.has_seaport());
    }

    #[test]
    fn nearest_seaport_on_empty_directory() {
        let directory = CityDirectory::new();
        assert!(
            directory
                .nearest_seaport(Coordinates::new(0.0, 0.0), None)
                .is_none()
        );
    }

    #[test]
    fn to_location_carries_infrastructure() {
        let directory = CityDirectory::indian_cities();
        let location = directory
            .location("Chennai, Tamil Nadu", LocationType::Port)
            .unwrap();
        assert_eq!(location.location_type, LocationType::Port);
        assert!(location.has_rail());
        assert!(location.has_air());
        assert!(location.has_sea());
    }
}
