//! All-pairs travel-time estimation.
//!
//! - [`TravelTimeMatrix`] — dense n×n mapping over ordered stop-index pairs
//! - [`TimeEstimator`] — the estimation contract (O(N²) by nature)
//! - [`LinearEstimator`] — haversine distance over a fixed velocity

mod estimator;
mod linear;
mod matrix;

pub use estimator::TimeEstimator;
pub use linear::{haversine_km, LinearEstimator, DEFAULT_VELOCITY};
pub use matrix::TravelTimeMatrix;
