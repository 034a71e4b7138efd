//! Pluggable model constraints.

use tracing::debug;

use crate::error::Result;
use crate::problem::Problem;

use super::OptimizationModel;

/// Per-node quantity callback registered by a constraint, in engine space.
pub type UnaryTransit = Box<dyn Fn(usize) -> i64 + Send + Sync>;

/// A cumulative quantity tracked along each vehicle's path, with a
/// per-vehicle upper bound.
pub struct Dimension {
    name: &'static str,
    transit: UnaryTransit,
    slack_max: i64,
    capacities: Vec<i64>,
    fix_start_cumul_to_zero: bool,
}

impl Dimension {
    /// Creates a dimension over the given transit callback.
    pub fn new(
        name: &'static str,
        transit: UnaryTransit,
        slack_max: i64,
        capacities: Vec<i64>,
        fix_start_cumul_to_zero: bool,
    ) -> Self {
        Self {
            name,
            transit,
            slack_max,
            capacities,
            fix_start_cumul_to_zero,
        }
    }

    /// Dimension name, unique within a model.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The quantity accumulated when node `node` is visited.
    pub fn transit(&self, node: usize) -> i64 {
        (self.transit)(node)
    }

    /// Maximum slack (deferred quantity) allowed at each node.
    pub fn slack_max(&self) -> i64 {
        self.slack_max
    }

    /// Per-vehicle upper bounds on the cumulative quantity, aligned to
    /// vehicle iteration order.
    pub fn capacities(&self) -> &[i64] {
        &self.capacities
    }

    /// Whether the cumulative value resets to zero at each vehicle's start.
    pub fn fix_start_cumul_to_zero(&self) -> bool {
        self.fix_start_cumul_to_zero
    }
}

/// A constraint that can be applied to an in-progress optimization model.
///
/// Constraints produce a per-node transit callback from the problem and
/// register themselves on the model; a model builder applies its constraint
/// list in order.
pub trait Constraint {
    /// Stable name of the constraint, used as the dimension name.
    fn name(&self) -> &'static str;

    /// Produces the per-node quantity callback for this constraint.
    fn transit_callback(&self, problem: &Problem) -> UnaryTransit;

    /// Registers the constraint on the model.
    fn apply(&self, problem: &Problem, model: &mut OptimizationModel) -> Result<()>;
}

/// Bounds the number of riders aboard each vehicle by its capacity.
///
/// Registers stop demand (rider count, 0 at depots) as a cumulative
/// dimension with zero slack and the cumul fixed to zero at each vehicle's
/// start, capped per vehicle by its capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityConstraint;

impl CapacityConstraint {
    /// Creates the capacity constraint.
    pub fn new() -> Self {
        Self
    }
}

impl Constraint for CapacityConstraint {
    fn name(&self) -> &'static str {
        "capacity_constraint"
    }

    fn transit_callback(&self, problem: &Problem) -> UnaryTransit {
        let demands: Vec<i64> = problem.stops().iter().map(|s| s.demand() as i64).collect();
        Box::new(move |node| demands[node])
    }

    fn apply(&self, problem: &Problem, model: &mut OptimizationModel) -> Result<()> {
        let capacities: Vec<i64> = problem
            .vehicles()
            .values()
            .map(|v| v.capacity() as i64)
            .collect();
        model.add_dimension(Dimension::new(
            self.name(),
            self.transit_callback(problem),
            0,
            capacities,
            true,
        ));
        debug!(constraint = self.name(), "applied constraint to model");
        Ok(())
    }
}
