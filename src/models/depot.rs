//! Depot entity.

use serde::Deserialize;

use super::Location;

/// A depot where vehicles depart or arrive.
///
/// Immutable once read from input. Deserializes from the flat record
/// `{depot_id, lat, lng}`; extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "DepotRecord")]
pub struct Depot {
    depot_id: String,
    location: Location,
}

/// Flat wire shape of a depot record.
#[derive(Debug, Deserialize)]
struct DepotRecord {
    depot_id: String,
    lat: f64,
    lng: f64,
}

impl From<DepotRecord> for Depot {
    fn from(record: DepotRecord) -> Self {
        Self {
            depot_id: record.depot_id,
            location: Location::new(record.lat, record.lng),
        }
    }
}

impl Depot {
    /// Creates a depot at the given coordinates.
    pub fn new(depot_id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            depot_id: depot_id.into(),
            location: Location::new(lat, lng),
        }
    }

    /// Depot identifier.
    pub fn depot_id(&self) -> &str {
        &self.depot_id
    }

    /// Depot location.
    pub fn location(&self) -> &Location {
        &self.location
    }
}
