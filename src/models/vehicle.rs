//! Vehicle entity.

use serde::Deserialize;

/// A vehicle that serves pickup stops between two depots.
///
/// Immutable once read from input. Deserializes from the flat record
/// `{vehicle_id, capacity, start, end}`; extra fields are ignored.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Vehicle;
///
/// let v = Vehicle::new("bus-1", 40, "depot-a", "depot-b");
/// assert_eq!(v.capacity(), 40);
/// assert_eq!(v.start(), "depot-a");
/// assert_eq!(v.end(), "depot-b");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    vehicle_id: String,
    capacity: u32,
    start: String,
    end: String,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity and start/end depot ids.
    pub fn new(
        vehicle_id: impl Into<String>,
        capacity: u32,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            capacity,
            start: start.into(),
            end: end.into(),
        }
    }

    /// Vehicle identifier.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Maximum number of riders on board at any point of the path.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Identifier of the depot where the vehicle departs.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Identifier of the depot where the vehicle arrives.
    pub fn end(&self) -> &str {
        &self.end
    }
}
