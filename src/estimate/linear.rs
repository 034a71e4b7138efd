//! Straight-line travel-time estimator.

use tracing::debug;

use crate::models::Stop;

use super::{TimeEstimator, TravelTimeMatrix};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Assumed vehicle velocity: 20 km/h expressed in km/s.
pub const DEFAULT_VELOCITY: f64 = 20.0 / 3600.0;

/// Estimates travel time as great-circle distance over a fixed velocity.
///
/// The simplest [`TimeEstimator`]: haversine distance between stop centroids
/// divided by [`DEFAULT_VELOCITY`]. Symmetric by construction, though
/// consumers of the resulting matrix never rely on that.
///
/// # Examples
///
/// ```
/// use shuttle_routing::estimate::{LinearEstimator, TimeEstimator};
/// use shuttle_routing::models::{Location, Stop};
///
/// let stops = vec![
///     Stop::depot("d0", Location::new(0.0, 0.0)),
///     Stop::depot("d1", Location::new(0.0, 1.0)),
/// ];
/// let times = LinearEstimator::new().estimate(&stops);
/// assert_eq!(times.len(), 4);
/// assert_eq!(times.get(0, 0), 0.0);
/// assert!(times.get(0, 1) > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearEstimator {
    velocity: f64,
}

impl LinearEstimator {
    /// Creates an estimator at [`DEFAULT_VELOCITY`].
    pub fn new() -> Self {
        Self {
            velocity: DEFAULT_VELOCITY,
        }
    }

    /// Overrides the assumed velocity, in km/s.
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }
}

impl TimeEstimator for LinearEstimator {
    fn estimate(&self, stops: &[Stop]) -> TravelTimeMatrix {
        let n = stops.len();
        let mut times = TravelTimeMatrix::new(n);

        for from in 0..n {
            for to in 0..n {
                // Self-pairs are 0 by index identity, not coordinate equality.
                if from == to {
                    continue;
                }
                let km = haversine_km(
                    stops[from].location().coordinates(),
                    stops[to].location().coordinates(),
                );
                times.set(from, to, km / self.velocity);
            }
        }

        debug!(num_stops = n, num_paths = times.len(), "estimated all-pairs travel times");
        times
    }
}

/// Great-circle distance between two `(lat, lng)` points, in kilometers.
pub fn haversine_km(origin: (f64, f64), destination: (f64, f64)) -> f64 {
    let (lat1, lng1) = (origin.0.to_radians(), origin.1.to_radians());
    let (lat2, lng2) = (destination.0.to_radians(), destination.1.to_radians());

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;
    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn depot_stops(coords: &[(f64, f64)]) -> Vec<Stop> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| Stop::depot(format!("d{i}"), Location::new(lat, lng)))
            .collect()
    }

    #[test]
    fn test_haversine_equator_degree() {
        // One degree of longitude on the equator is ~111.19 km.
        let km = haversine_km((0.0, 0.0), (0.0, 1.0));
        assert!((km - 111.19).abs() < 0.1, "got {km}");
    }

    #[test]
    fn test_haversine_zero_distance() {
        assert_eq!(haversine_km((45.0, 45.0), (45.0, 45.0)), 0.0);
    }

    #[test]
    fn test_all_pairs_count_and_diagonal() {
        let stops = depot_stops(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
        let times = LinearEstimator::new().estimate(&stops);
        assert_eq!(times.len(), stops.len() * stops.len());
        for i in 0..stops.len() {
            assert_eq!(times.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_velocity_division() {
        let stops = depot_stops(&[(0.0, 0.0), (0.0, 1.0)]);
        let times = LinearEstimator::new().estimate(&stops);
        let km = haversine_km((0.0, 0.0), (0.0, 1.0));
        assert!((times.get(0, 1) - km / DEFAULT_VELOCITY).abs() < 1e-9);
        // ~111 km at 20 km/h is north of five hours.
        assert!(times.get(0, 1) > 5.0 * 3600.0);
    }

    #[test]
    fn test_symmetric_output() {
        let stops = depot_stops(&[(10.0, 10.0), (-5.0, 30.0), (42.0, -3.0)]);
        let times = LinearEstimator::new().estimate(&stops);
        assert!(times.is_symmetric(1e-9));
    }

    #[test]
    fn test_coincident_distinct_stops_are_zero_both_ways() {
        // Distinct stops at the same coordinates: both directions equal
        // haversine/velocity, which is 0 here.
        let stops = depot_stops(&[(3.0, 3.0), (3.0, 3.0)]);
        let times = LinearEstimator::new().estimate(&stops);
        assert_eq!(times.get(0, 1), 0.0);
        assert_eq!(times.get(1, 0), 0.0);
    }

    #[test]
    fn test_custom_velocity() {
        let stops = depot_stops(&[(0.0, 0.0), (0.0, 1.0)]);
        let fast = LinearEstimator::new().with_velocity(DEFAULT_VELOCITY * 2.0);
        let times = fast.estimate(&stops);
        let baseline = LinearEstimator::new().estimate(&stops);
        assert!((times.get(0, 1) - baseline.get(0, 1) / 2.0).abs() < 1e-9);
    }
}
