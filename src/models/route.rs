//! Decoded route type.

use serde::Serialize;

use super::Stop;

/// An ordered sequence of stops served by one vehicle.
///
/// Routes are produced exclusively by solution decoding; when the route
/// serves at least one pickup stop its first and last entries are the
/// vehicle's start and end depot stops.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Location, Route, Stop};
///
/// let route = Route::new(
///     "bus-1",
///     vec![Stop::depot("d0", Location::new(0.0, 0.0))],
/// );
/// assert_eq!(route.vehicle_id(), "bus-1");
/// assert_eq!(route.stops().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    vehicle_id: String,
    stops: Vec<Stop>,
}

impl Route {
    /// Creates a route for the given vehicle.
    pub fn new(vehicle_id: impl Into<String>, stops: Vec<Stop>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            stops,
        }
    }

    /// The serving vehicle's identifier.
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Stops in visit order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Total demand of the route's pickup stops.
    pub fn total_demand(&self) -> u32 {
        self.stops.iter().map(Stop::demand).sum()
    }

    /// Rider ids served by this route, in visit order.
    pub fn rider_ids(&self) -> Vec<&str> {
        self.stops
            .iter()
            .filter_map(Stop::riders)
            .flat_map(|riders| riders.keys().map(String::as_str))
            .collect()
    }
}
