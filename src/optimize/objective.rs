//! Arc-cost objective.

use tracing::debug;

use crate::problem::Problem;

/// Arc-cost evaluator over ordered stop-index pairs, in engine space.
pub type ArcCostEvaluator = Box<dyn Fn(usize, usize) -> f64 + Send + Sync>;

/// Derives the uniform arc-cost function registered for all vehicles.
///
/// The cost of traversing an arc is the estimated travel time plus the
/// service time at the destination:
///
/// ```text
/// cost(from, to) = estimations(from, to) + service_time(to)
/// ```
///
/// The engine minimizes the total accumulated arc cost across all vehicle
/// paths. The estimation mapping may be directional; no symmetry is assumed
/// here even though the bundled estimator happens to be symmetric.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveBuilder;

impl ObjectiveBuilder {
    /// Builds the arc-cost evaluator for the given problem.
    ///
    /// The evaluator owns copies of the travel times and service times so it
    /// can outlive the borrow of `problem`.
    pub fn arc_cost(problem: &Problem) -> ArcCostEvaluator {
        let estimations = problem.estimations().clone();
        let service_times: Vec<f64> = problem.stops().iter().map(|s| s.service_time()).collect();

        debug!(num_stops = service_times.len(), "built arc-cost objective");
        Box::new(move |from, to| estimations.get(from, to) + service_times[to])
    }
}
