//! Problem formulation: stop aggregation and assembly.
//!
//! - [`StopAggregator`] — geohash grouping of riders, referenced-depot stops
//! - [`ProblemBuilder`] — entity resolution and problem assembly
//! - [`Problem`] — the immutable formulated instance

mod aggregate;
mod builder;
#[allow(clippy::module_inception)]
mod problem;

pub use aggregate::StopAggregator;
pub use builder::ProblemBuilder;
pub use problem::Problem;
