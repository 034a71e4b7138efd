//! Grouping of riders and depots into stops.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::models::{Depot, Rider, Stop};

/// Groups raw entities into the stop sequence of a routing problem.
///
/// Riders sharing a geohash prefix of the configured precision collapse into
/// one pickup stop located at their centroid. Depot stops are built only for
/// depots actually referenced by some vehicle's start or end; unrouted depots
/// would only inflate the engine's search space.
///
/// Ordering contract: depot stops come first, in the depot mapping's
/// iteration order, so start/end indices computed against the referenced
/// depot order stay valid once pickup stops are appended.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use shuttle_routing::models::Rider;
/// use shuttle_routing::problem::StopAggregator;
///
/// let mut riders = BTreeMap::new();
/// for id in ["a", "b"] {
///     riders.insert(id.to_string(), Rider::new(id, 4.7184, -74.0721));
/// }
/// riders.insert("far".to_string(), Rider::new("far", -33.45, -70.67));
///
/// let stops = StopAggregator::new(6).pickup_stops(&riders);
/// assert_eq!(stops.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct StopAggregator {
    precision: usize,
}

impl StopAggregator {
    /// Creates an aggregator grouping at the given geohash precision.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Grouping precision in geohash characters.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Builds one pickup stop per geohash-prefix group of riders.
    pub fn pickup_stops(&self, riders: &BTreeMap<String, Rider>) -> Vec<Stop> {
        let mut groups: BTreeMap<&str, BTreeMap<String, Rider>> = BTreeMap::new();
        for (rider_id, rider) in riders {
            groups
                .entry(rider.location().geohash_prefix(self.precision))
                .or_default()
                .insert(rider_id.clone(), rider.clone());
        }

        let stops: Vec<Stop> = groups.into_values().map(Stop::pickup).collect();
        info!(
            num_stops = stops.len(),
            num_riders = riders.len(),
            "built pickup stops from riders"
        );
        stops
    }

    /// Builds depot stops for the referenced depots, in depot-map order.
    pub fn depot_stops(
        &self,
        depots: &BTreeMap<String, Depot>,
        referenced: &BTreeSet<String>,
    ) -> Vec<Stop> {
        let stops: Vec<Stop> = depots
            .values()
            .filter(|depot| referenced.contains(depot.depot_id()))
            .map(|depot| Stop::depot(depot.depot_id(), depot.location().clone()))
            .collect();
        info!(
            num_stops = stops.len(),
            num_depots = depots.len(),
            "built depot stops from referenced depots"
        );
        stops
    }

    /// Builds the full stop sequence: referenced depot stops, then pickup stops.
    pub fn build_stops(
        &self,
        riders: &BTreeMap<String, Rider>,
        depots: &BTreeMap<String, Depot>,
        referenced: &BTreeSet<String>,
    ) -> Vec<Stop> {
        let mut stops = self.depot_stops(depots, referenced);
        stops.extend(self.pickup_stops(riders));
        stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider_map(riders: &[(&str, f64, f64)]) -> BTreeMap<String, Rider> {
        riders
            .iter()
            .map(|&(id, lat, lng)| (id.to_string(), Rider::new(id, lat, lng)))
            .collect()
    }

    #[test]
    fn test_nearby_riders_share_a_stop() {
        let riders = rider_map(&[
            ("a", 4.718400, -74.072100),
            ("b", 4.718401, -74.072101),
            ("c", -33.448900, -70.669300),
        ]);
        let stops = StopAggregator::new(8).pickup_stops(&riders);
        assert_eq!(stops.len(), 2);

        let demands: Vec<u32> = stops.iter().map(Stop::demand).collect();
        assert_eq!(demands.iter().sum::<u32>(), 3);
        assert!(demands.contains(&2));
        assert!(demands.contains(&1));
    }

    #[test]
    fn test_precision_one_merges_near_neighbors() {
        // Bogotá and Medellín share a 1-character geohash cell ("d"),
        // Santiago does not.
        let riders = rider_map(&[
            ("bog", 4.7110, -74.0721),
            ("med", 6.2442, -75.5812),
            ("scl", -33.4489, -70.6693),
        ]);
        let coarse = StopAggregator::new(1).pickup_stops(&riders);
        assert_eq!(coarse.len(), 2);
        let fine = StopAggregator::new(8).pickup_stops(&riders);
        assert_eq!(fine.len(), 3);
    }

    #[test]
    fn test_unreferenced_depots_excluded() {
        let depots: BTreeMap<String, Depot> = [
            ("d0", Depot::new("d0", 0.0, 0.0)),
            ("d1", Depot::new("d1", 1.0, 1.0)),
            ("d2", Depot::new("d2", 2.0, 2.0)),
        ]
        .into_iter()
        .map(|(id, depot)| (id.to_string(), depot))
        .collect();
        let referenced: BTreeSet<String> = ["d0".to_string(), "d2".to_string()].into();

        let stops = StopAggregator::new(8).depot_stops(&depots, &referenced);
        let ids: Vec<&str> = stops.iter().filter_map(Stop::depot_id).collect();
        assert_eq!(ids, vec!["d0", "d2"]);
    }

    #[test]
    fn test_depot_stops_precede_pickups() {
        let riders = rider_map(&[("a", 4.7184, -74.0721)]);
        let depots: BTreeMap<String, Depot> =
            [("d0".to_string(), Depot::new("d0", 0.0, 0.0))].into();
        let referenced: BTreeSet<String> = ["d0".to_string()].into();

        let stops = StopAggregator::new(8).build_stops(&riders, &depots, &referenced);
        assert_eq!(stops.len(), 2);
        assert!(stops[0].is_depot());
        assert!(!stops[1].is_depot());
    }

    #[test]
    fn test_no_riders_yields_no_pickup_stops() {
        let stops = StopAggregator::new(8).pickup_stops(&BTreeMap::new());
        assert!(stops.is_empty());
    }
}
