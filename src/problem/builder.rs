//! Problem assembly from raw entities.

use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::error::{Error, Result};
use crate::estimate::TimeEstimator;
use crate::models::{Depot, Params, Rider, Vehicle};

use super::{Problem, StopAggregator};

/// Builds an immutable [`Problem`] from riders, vehicles, and depots.
///
/// Resolves each vehicle's named start/end depot to a stop index, delegates
/// stop construction to [`StopAggregator`] and travel times to the configured
/// [`TimeEstimator`], and assembles the result. A vehicle naming a depot
/// absent from the depot set fails the build.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use shuttle_routing::estimate::LinearEstimator;
/// use shuttle_routing::models::{Depot, Params, Rider, Vehicle};
/// use shuttle_routing::problem::ProblemBuilder;
///
/// let riders = BTreeMap::from([("r".to_string(), Rider::new("r", 1.0, 1.0))]);
/// let vehicles = BTreeMap::from([
///     ("bus".to_string(), Vehicle::new("bus", 4, "d0", "d0")),
/// ]);
/// let depots = BTreeMap::from([("d0".to_string(), Depot::new("d0", 0.0, 0.0))]);
///
/// let builder = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()));
/// let problem = builder.build(&riders, &vehicles, &depots).unwrap();
/// assert_eq!(problem.stops().len(), 2);
/// assert_eq!(problem.starts(), &[0]);
/// ```
pub struct ProblemBuilder {
    params: Params,
    estimator: Box<dyn TimeEstimator>,
}

impl ProblemBuilder {
    /// Creates a builder with the given params and estimator.
    pub fn new(params: Params, estimator: Box<dyn TimeEstimator>) -> Self {
        Self { params, estimator }
    }

    /// Builds the problem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDepot`] if any vehicle's start or end names a
    /// depot missing from `depots`.
    pub fn build(
        &self,
        riders: &BTreeMap<String, Rider>,
        vehicles: &BTreeMap<String, Vehicle>,
        depots: &BTreeMap<String, Depot>,
    ) -> Result<Problem> {
        let referenced = Self::referenced_depots(vehicles, depots)?;
        let (starts, ends) = Self::vehicle_starts_ends(vehicles, depots, &referenced);

        let aggregator = StopAggregator::new(self.params.geohash_precision_grouping());
        let stops = aggregator.build_stops(riders, depots, &referenced);
        let estimations = self.estimator.estimate(&stops);

        Ok(Problem::new(
            depots.clone(),
            vehicles.clone(),
            stops,
            starts,
            ends,
            estimations,
            self.params.clone(),
        ))
    }

    /// Collects the ids of depots referenced by some vehicle, validating
    /// every reference against the depot set.
    fn referenced_depots(
        vehicles: &BTreeMap<String, Vehicle>,
        depots: &BTreeMap<String, Depot>,
    ) -> Result<BTreeSet<String>> {
        let mut referenced = BTreeSet::new();
        for vehicle in vehicles.values() {
            for depot_id in [vehicle.start(), vehicle.end()] {
                if !depots.contains_key(depot_id) {
                    return Err(Error::UnknownDepot {
                        vehicle_id: vehicle.vehicle_id().to_string(),
                        depot_id: depot_id.to_string(),
                    });
                }
                referenced.insert(depot_id.to_string());
            }
        }
        Ok(referenced)
    }

    /// Resolves each vehicle's start/end depot id to its stop index.
    ///
    /// Depot stops occupy the head of the stop sequence in depot-map order,
    /// restricted to referenced depots, so the index of a depot within that
    /// restricted ordering is its final stop index.
    fn vehicle_starts_ends(
        vehicles: &BTreeMap<String, Vehicle>,
        depots: &BTreeMap<String, Depot>,
        referenced: &BTreeSet<String>,
    ) -> (Vec<usize>, Vec<usize>) {
        let index_of: BTreeMap<&str, usize> = depots
            .keys()
            .filter(|id| referenced.contains(*id))
            .enumerate()
            .map(|(ix, id)| (id.as_str(), ix))
            .collect();

        let mut starts = Vec::with_capacity(vehicles.len());
        let mut ends = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles.values() {
            starts.push(index_of[vehicle.start()]);
            ends.push(index_of[vehicle.end()]);
        }

        info!(
            num_vehicles = vehicles.len(),
            num_depots = depots.len(),
            "resolved vehicle start and end stop indices"
        );
        (starts, ends)
    }
}
