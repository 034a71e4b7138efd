//! Rider entity.

use serde::Deserialize;

use super::Location;

/// A rider waiting to be picked up.
///
/// Immutable once read from input. Deserializes from the flat record
/// `{rider_id, lat, lng}`; extra fields are ignored.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Rider;
///
/// let rider: Rider = serde_json::from_str(
///     r#"{"rider_id": "r-1", "lat": 4.72, "lng": -74.07}"#,
/// ).unwrap();
/// assert_eq!(rider.rider_id(), "r-1");
/// assert_eq!(rider.location().lat(), 4.72);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RiderRecord")]
pub struct Rider {
    rider_id: String,
    location: Location,
}

/// Flat wire shape of a rider record.
#[derive(Debug, Deserialize)]
struct RiderRecord {
    rider_id: String,
    lat: f64,
    lng: f64,
}

impl From<RiderRecord> for Rider {
    fn from(record: RiderRecord) -> Self {
        Self {
            rider_id: record.rider_id,
            location: Location::new(record.lat, record.lng),
        }
    }
}

impl Rider {
    /// Creates a rider at the given coordinates.
    pub fn new(rider_id: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            rider_id: rider_id.into(),
            location: Location::new(lat, lng),
        }
    }

    /// Rider identifier.
    pub fn rider_id(&self) -> &str {
        &self.rider_id
    }

    /// Pickup location.
    pub fn location(&self) -> &Location {
        &self.location
    }
}
