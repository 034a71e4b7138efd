//! Stop type: the visitable unit of the routing model.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{Location, Rider};

/// A visitable location in the routing model.
///
/// Exactly one of the two shapes exists: a pickup stop owns the riders it
/// groups, a depot stop carries the depot it anchors. Stops are created by
/// aggregation, never mutated, and read back during decoding.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use shuttle_routing::models::{Rider, Stop};
///
/// let mut riders = BTreeMap::new();
/// riders.insert("r-1".to_string(), Rider::new("r-1", 2.0, 2.0));
/// riders.insert("r-2".to_string(), Rider::new("r-2", 4.0, 4.0));
///
/// let stop = Stop::pickup(riders);
/// assert_eq!(stop.demand(), 2);
/// // Location is the centroid of the member riders.
/// assert_eq!(stop.location().coordinates(), (3.0, 3.0));
/// assert!(!stop.is_depot());
/// ```
#[derive(Debug, Clone)]
pub enum Stop {
    /// A cluster of riders picked up together; located at their centroid.
    Pickup {
        /// Member riders keyed by rider id. Never empty.
        riders: BTreeMap<String, Rider>,
        /// Centroid of the member riders' coordinates.
        location: Location,
        /// Seconds spent boarding at this stop.
        service_time: f64,
    },
    /// A depot anchoring the start or end of some vehicle's path.
    Depot {
        /// The depot's identifier.
        depot_id: String,
        /// The depot's location.
        location: Location,
    },
}

impl Stop {
    /// Creates a pickup stop at the centroid of the given riders.
    ///
    /// The rider map must be non-empty; aggregation only produces groups
    /// with at least one member.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `riders` is empty; an empty group has
    /// no centroid.
    pub fn pickup(riders: BTreeMap<String, Rider>) -> Self {
        debug_assert!(!riders.is_empty(), "pickup stop requires at least one rider");
        let count = riders.len() as f64;
        let (lat_sum, lng_sum) = riders
            .values()
            .map(|rider| rider.location().coordinates())
            .fold((0.0, 0.0), |(lat, lng), (r_lat, r_lng)| {
                (lat + r_lat, lng + r_lng)
            });
        Self::Pickup {
            riders,
            location: Location::new(lat_sum / count, lng_sum / count),
            service_time: 0.0,
        }
    }

    /// Creates a depot stop at the depot's location.
    pub fn depot(depot_id: impl Into<String>, location: Location) -> Self {
        Self::Depot {
            depot_id: depot_id.into(),
            location,
        }
    }

    /// Sets the boarding time of a pickup stop. No effect on depot stops.
    pub fn with_service_time(mut self, seconds: f64) -> Self {
        if let Self::Pickup { service_time, .. } = &mut self {
            *service_time = seconds;
        }
        self
    }

    /// Where the stop sits: rider centroid or depot location.
    pub fn location(&self) -> &Location {
        match self {
            Self::Pickup { location, .. } => location,
            Self::Depot { location, .. } => location,
        }
    }

    /// Capacity consumed by visiting this stop: the rider count, or 0 at a depot.
    pub fn demand(&self) -> u32 {
        match self {
            Self::Pickup { riders, .. } => riders.len() as u32,
            Self::Depot { .. } => 0,
        }
    }

    /// Seconds spent at the stop when it is visited.
    pub fn service_time(&self) -> f64 {
        match self {
            Self::Pickup { service_time, .. } => *service_time,
            Self::Depot { .. } => 0.0,
        }
    }

    /// Member riders of a pickup stop, if any.
    pub fn riders(&self) -> Option<&BTreeMap<String, Rider>> {
        match self {
            Self::Pickup { riders, .. } => Some(riders),
            Self::Depot { .. } => None,
        }
    }

    /// The anchored depot's id, if this is a depot stop.
    pub fn depot_id(&self) -> Option<&str> {
        match self {
            Self::Pickup { .. } => None,
            Self::Depot { depot_id, .. } => Some(depot_id),
        }
    }

    /// Returns `true` for depot stops.
    pub fn is_depot(&self) -> bool {
        matches!(self, Self::Depot { .. })
    }
}

// Output shape: {"location": [lat, lng], "riders": [...] | null, "depot_id": ... | null}.
impl Serialize for Stop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Stop", 3)?;
        state.serialize_field("location", &[self.location().lat(), self.location().lng()])?;
        match self {
            Self::Pickup { riders, .. } => {
                let rider_ids: Vec<&str> = riders.keys().map(String::as_str).collect();
                state.serialize_field("riders", &rider_ids)?;
                state.serialize_field("depot_id", &Option::<&str>::None)?;
            }
            Self::Depot { depot_id, .. } => {
                state.serialize_field("riders", &Option::<&str>::None)?;
                state.serialize_field("depot_id", depot_id)?;
            }
        }
        state.end()
    }
}
