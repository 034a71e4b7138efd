//! Travel-time estimator trait.

use crate::models::Stop;

use super::TravelTimeMatrix;

/// Produces the all-pairs travel-time mapping for a stop sequence.
///
/// Implementations must fill every ordered pair of stop indices, including
/// self-pairs, and a self-pair `(i, i)` must be exactly 0 by identity of the
/// index, even if the stop's coordinates are degenerate.
///
/// # Complexity
///
/// Estimation is O(N²) in both time and memory for N stops; it is the
/// dominant cost of problem formulation. Callers needing road-network
/// travel times substitute their own implementation behind this trait.
pub trait TimeEstimator {
    /// Estimates travel times between every ordered pair of stops, in seconds.
    fn estimate(&self, stops: &[Stop]) -> TravelTimeMatrix;
}
