//! Decoding of engine answers into domain routes.

use tracing::{info, warn};

use crate::models::Route;
use crate::problem::Problem;
use crate::solver::Assignment;

/// Maps the engine's index-space answer back onto domain stops and vehicles.
///
/// Each visited node index resolves through the problem's stop sequence, and
/// each vehicle position through the problem's vehicle iteration order; both
/// orderings are fixed at formulation time and must reach decoding intact.
/// A path visiting a single stop means the vehicle went unused and yields no
/// route.
///
/// A non-success solver status is not an error here: decoding simply
/// produces zero or fewer routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionDecoder;

impl SolutionDecoder {
    /// Creates a decoder.
    pub fn new() -> Self {
        Self
    }

    /// Decodes an assignment into routes.
    pub fn decode(&self, problem: &Problem, assignment: &Assignment) -> Vec<Route> {
        if !assignment.status().is_success() {
            warn!(
                status = %assignment.status(),
                "decoding a non-success assignment; expect missing routes"
            );
        }

        let vehicle_ids = problem.vehicle_ids();
        let routes: Vec<Route> = assignment
            .paths()
            .iter()
            .enumerate()
            .filter(|(_, path)| path.len() > 1)
            .map(|(vehicle_ix, path)| {
                let stops = path.iter().map(|&ix| problem.stops()[ix].clone()).collect();
                Route::new(vehicle_ids[vehicle_ix], stops)
            })
            .collect();

        info!(num_routes = routes.len(), "decoded routes from assignment");
        routes
    }
}
