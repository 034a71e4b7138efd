//! Optimization model assembly.

use tracing::info;

use crate::error::Result;
use crate::problem::Problem;

use super::{ArcCostEvaluator, Constraint, Dimension, ObjectiveBuilder, SearchParameters};

/// The engine-facing optimization model.
///
/// Carries everything the engine needs for one blocking search: node and
/// vehicle counts, per-vehicle start/end node indices, the registered
/// dimensions, the uniform arc-cost evaluator, and the search parameters.
/// Node indices are exactly the problem's stop-sequence indices.
pub struct OptimizationModel {
    num_stops: usize,
    num_vehicles: usize,
    starts: Vec<usize>,
    ends: Vec<usize>,
    dimensions: Vec<Dimension>,
    arc_cost: Option<ArcCostEvaluator>,
    search: SearchParameters,
}

impl OptimizationModel {
    /// Creates the bare model for a problem: counts, start/end indices, and
    /// search parameters, with no constraints or objective yet.
    ///
    /// # Errors
    ///
    /// Fails if the problem's params name an unknown strategy or
    /// metaheuristic.
    pub fn from_problem(problem: &Problem) -> Result<Self> {
        Ok(Self {
            num_stops: problem.stops().len(),
            num_vehicles: problem.vehicles().len(),
            starts: problem.starts().to_vec(),
            ends: problem.ends().to_vec(),
            dimensions: Vec::new(),
            arc_cost: None,
            search: SearchParameters::from_params(problem.params())?,
        })
    }

    /// Number of nodes (stops) in the model.
    pub fn num_stops(&self) -> usize {
        self.num_stops
    }

    /// Number of vehicles in the model.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Per-vehicle start node indices.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Per-vehicle end node indices.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Registers a cumulative dimension.
    pub fn add_dimension(&mut self, dimension: Dimension) {
        self.dimensions.push(dimension);
    }

    /// The registered dimensions, in application order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Registers the uniform arc-cost evaluator for all vehicles.
    pub fn set_arc_cost(&mut self, evaluator: ArcCostEvaluator) {
        self.arc_cost = Some(evaluator);
    }

    /// Cost of traversing the arc `from → to`. Zero until an evaluator is
    /// registered.
    pub fn arc_cost(&self, from: usize, to: usize) -> f64 {
        self.arc_cost.as_ref().map_or(0.0, |cost| cost(from, to))
    }

    /// The search configuration the engine must respect.
    pub fn search(&self) -> &SearchParameters {
        &self.search
    }
}

/// Assembles an [`OptimizationModel`] from a [`Problem`] and an ordered
/// constraint list.
///
/// # Examples
///
/// ```
/// use shuttle_routing::optimize::{CapacityConstraint, OptimizationModelBuilder};
/// # use std::collections::BTreeMap;
/// # use shuttle_routing::estimate::LinearEstimator;
/// # use shuttle_routing::models::{Depot, Params, Rider, Vehicle};
/// # use shuttle_routing::problem::ProblemBuilder;
/// # let riders = BTreeMap::from([("r".to_string(), Rider::new("r", 1.0, 1.0))]);
/// # let vehicles = BTreeMap::from([("bus".to_string(), Vehicle::new("bus", 4, "d0", "d0"))]);
/// # let depots = BTreeMap::from([("d0".to_string(), Depot::new("d0", 0.0, 0.0))]);
/// # let problem = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()))
/// #     .build(&riders, &vehicles, &depots).unwrap();
///
/// let builder = OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())]);
/// let model = builder.build(&problem).unwrap();
/// assert_eq!(model.num_stops(), problem.stops().len());
/// assert_eq!(model.dimensions().len(), 1);
/// ```
pub struct OptimizationModelBuilder {
    constraints: Vec<Box<dyn Constraint>>,
}

impl OptimizationModelBuilder {
    /// Creates a builder applying the given constraints, in order.
    pub fn new(constraints: Vec<Box<dyn Constraint>>) -> Self {
        Self { constraints }
    }

    /// Builds the model: search parameters first (failing fast on bad
    /// names), then constraints in registration order, then the objective.
    pub fn build(&self, problem: &Problem) -> Result<OptimizationModel> {
        let mut model = OptimizationModel::from_problem(problem)?;

        for constraint in &self.constraints {
            constraint.apply(problem, &mut model)?;
        }
        info!(
            num_constraints = self.constraints.len(),
            "applied constraints to the optimization model"
        );

        model.set_arc_cost(ObjectiveBuilder::arc_cost(problem));
        Ok(model)
    }
}
