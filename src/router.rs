//! Pipeline orchestration.

use std::collections::BTreeMap;

use tracing::info;

use crate::decode::SolutionDecoder;
use crate::error::Result;
use crate::models::{Depot, Rider, Route, Vehicle};
use crate::optimize::OptimizationModelBuilder;
use crate::problem::ProblemBuilder;
use crate::solver::Solver;

/// Runs the full formulate-solve-decode pipeline.
///
/// Each stage consumes its predecessor's output synchronously; the only
/// blocking call is the solver's bounded search. Independent pipelines can
/// run in parallel since nothing is shared mutably after construction.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use shuttle_routing::estimate::LinearEstimator;
/// use shuttle_routing::models::{Depot, Params, Rider, Vehicle};
/// use shuttle_routing::optimize::{CapacityConstraint, OptimizationModelBuilder};
/// use shuttle_routing::problem::ProblemBuilder;
/// use shuttle_routing::solver::LocalSearchSolver;
/// use shuttle_routing::Router;
///
/// let riders = BTreeMap::from([("r".to_string(), Rider::new("r", 4.71, -74.07))]);
/// let vehicles = BTreeMap::from([
///     ("bus".to_string(), Vehicle::new("bus", 4, "d0", "d0")),
/// ]);
/// let depots = BTreeMap::from([("d0".to_string(), Depot::new("d0", 4.60, -74.08))]);
///
/// let router = Router::new(
///     ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new())),
///     OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())]),
///     LocalSearchSolver::new().with_seed(0),
/// );
/// let routes = router.route(&riders, &vehicles, &depots).unwrap();
/// assert_eq!(routes.len(), 1);
/// ```
pub struct Router<S: Solver> {
    problem_builder: ProblemBuilder,
    model_builder: OptimizationModelBuilder,
    solver: S,
}

impl<S: Solver> Router<S> {
    /// Creates a router from its three collaborators.
    pub fn new(
        problem_builder: ProblemBuilder,
        model_builder: OptimizationModelBuilder,
        solver: S,
    ) -> Self {
        Self {
            problem_builder,
            model_builder,
            solver,
        }
    }

    /// Formulates, solves, and decodes in one pass.
    ///
    /// # Errors
    ///
    /// Fails on unknown depot references or unrecognized search names. A
    /// non-success solver status is not an error; it decodes to zero or
    /// fewer routes.
    pub fn route(
        &self,
        riders: &BTreeMap<String, Rider>,
        vehicles: &BTreeMap<String, Vehicle>,
        depots: &BTreeMap<String, Depot>,
    ) -> Result<Vec<Route>> {
        let problem = self.problem_builder.build(riders, vehicles, depots)?;
        let model = self.model_builder.build(&problem)?;
        let assignment = self.solver.solve(&model);
        let routes = SolutionDecoder::new().decode(&problem, &assignment);

        info!(
            num_riders = riders.len(),
            num_routes = routes.len(),
            status = %assignment.status(),
            "routing pipeline finished"
        );
        Ok(routes)
    }
}
