//! The assembled routing problem.

use std::collections::BTreeMap;

use tracing::info;

use crate::estimate::TravelTimeMatrix;
use crate::models::{Depot, Params, Stop, Vehicle};

/// An immutable vehicle routing problem instance.
///
/// The stop sequence index is the contract with the engine: constraints,
/// the objective, and decoding all address stops positionally. Starts and
/// ends are per-vehicle stop indices aligned with the vehicle mapping's
/// iteration order. Once built, a problem is read-only and can be shared
/// across concurrent solve pipelines.
#[derive(Debug)]
pub struct Problem {
    depots: BTreeMap<String, Depot>,
    vehicles: BTreeMap<String, Vehicle>,
    stops: Vec<Stop>,
    starts: Vec<usize>,
    ends: Vec<usize>,
    estimations: TravelTimeMatrix,
    params: Params,
}

impl Problem {
    /// Assembles a problem from already-validated parts.
    ///
    /// Invariants upheld by [`ProblemBuilder`](super::ProblemBuilder):
    /// `estimations.len() == stops.len()²`, every start/end is a valid stop
    /// index, and depot stops occupy exactly the referenced indices.
    pub(crate) fn new(
        depots: BTreeMap<String, Depot>,
        vehicles: BTreeMap<String, Vehicle>,
        stops: Vec<Stop>,
        starts: Vec<usize>,
        ends: Vec<usize>,
        estimations: TravelTimeMatrix,
        params: Params,
    ) -> Self {
        info!(
            num_depots = depots.len(),
            num_vehicles = vehicles.len(),
            num_stops = stops.len(),
            num_estimations = estimations.len(),
            "assembled routing problem"
        );
        Self {
            depots,
            vehicles,
            stops,
            starts,
            ends,
            estimations,
            params,
        }
    }

    /// Depots keyed by id.
    pub fn depots(&self) -> &BTreeMap<String, Depot> {
        &self.depots
    }

    /// Vehicles keyed by id. Iteration order defines vehicle position.
    pub fn vehicles(&self) -> &BTreeMap<String, Vehicle> {
        &self.vehicles
    }

    /// Vehicle ids in iteration order; position here matches the engine's
    /// per-vehicle path ordering.
    pub fn vehicle_ids(&self) -> Vec<&str> {
        self.vehicles.keys().map(String::as_str).collect()
    }

    /// The stop sequence. Index is the engine-space node id.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Per-vehicle start stop indices, aligned to vehicle iteration order.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Per-vehicle end stop indices, aligned to vehicle iteration order.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// All-pairs travel-time mapping over the stop sequence.
    pub fn estimations(&self) -> &TravelTimeMatrix {
        &self.estimations
    }

    /// The parameters the problem was formulated with.
    pub fn params(&self) -> &Params {
        &self.params
    }
}
