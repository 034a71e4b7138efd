//! Optimization model assembly: constraints, objective, and search mapping.
//!
//! - [`SearchParameters`] — symbolic names and limits mapped to engine terms
//! - [`Constraint`] / [`CapacityConstraint`] — pluggable model constraints
//! - [`ObjectiveBuilder`] — the uniform arc-cost evaluator
//! - [`OptimizationModelBuilder`] — ties the above to a [`Problem`](crate::problem::Problem)

mod constraints;
mod model;
mod objective;
mod search;

pub use constraints::{CapacityConstraint, Constraint, Dimension, UnaryTransit};
pub use model::{OptimizationModel, OptimizationModelBuilder};
pub use objective::{ArcCostEvaluator, ObjectiveBuilder};
pub use search::{FirstSolutionStrategy, Metaheuristic, SearchParameters};
