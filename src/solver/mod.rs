//! Boundary to the optimization engine.
//!
//! - [`Solver`] — the narrow contract any engine implements
//! - [`Assignment`] — the engine's index-space answer plus status
//! - [`LocalSearchSolver`] — the bundled engine (greedy construction + 2-opt)

mod engine;

use std::fmt;

use crate::optimize::OptimizationModel;

pub use engine::LocalSearchSolver;

/// Terminal status of one blocking search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// The search never ran.
    NotSolved,
    /// A feasible assignment covering all demand was found.
    Success,
    /// No feasible assignment exists under the constraints.
    Fail,
    /// The time budget expired before a feasible assignment was found.
    FailTimeout,
    /// The model itself is malformed.
    Invalid,
}

impl SolverStatus {
    /// The engine's native status code.
    pub fn code(self) -> i32 {
        match self {
            Self::NotSolved => 0,
            Self::Success => 1,
            Self::Fail => 2,
            Self::FailTimeout => 3,
            Self::Invalid => 4,
        }
    }

    /// Returns `true` only for [`SolverStatus::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotSolved => "NOT_SOLVED",
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
            Self::FailTimeout => "FAIL_TIMEOUT",
            Self::Invalid => "INVALID",
        };
        f.write_str(name)
    }
}

/// The engine's answer: a status and one node-index path per vehicle.
///
/// Paths follow the model's vehicle iteration order and run from the
/// vehicle's start node to its end node inclusive. Paths are syntactically
/// well-formed for every status; a single-node path means the vehicle is
/// unused. Interpreting a non-success status is the decoder's business, not
/// the solver's.
#[derive(Debug, Clone)]
pub struct Assignment {
    status: SolverStatus,
    paths: Vec<Vec<usize>>,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(status: SolverStatus, paths: Vec<Vec<usize>>) -> Self {
        Self { status, paths }
    }

    /// The search's terminal status.
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Per-vehicle node paths, aligned to vehicle iteration order.
    pub fn paths(&self) -> &[Vec<usize>] {
        &self.paths
    }
}

/// A combinatorial search engine consumed through a narrow contract.
///
/// Given an assembled model, performs a single blocking search bounded by
/// the model's time and solution limits and returns per-vehicle node paths.
/// Implementations never error; infeasibility and malformed models are
/// reported through [`SolverStatus`].
pub trait Solver {
    /// Runs one blocking search over the model.
    fn solve(&self, model: &OptimizationModel) -> Assignment;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(SolverStatus::NotSolved.code(), 0);
        assert_eq!(SolverStatus::Success.code(), 1);
        assert_eq!(SolverStatus::Fail.code(), 2);
        assert_eq!(SolverStatus::FailTimeout.code(), 3);
        assert_eq!(SolverStatus::Invalid.code(), 4);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SolverStatus::Success.to_string(), "SUCCESS");
        assert_eq!(SolverStatus::FailTimeout.to_string(), "FAIL_TIMEOUT");
        assert!(SolverStatus::Success.is_success());
        assert!(!SolverStatus::Fail.is_success());
    }

    #[test]
    fn test_assignment_accessors() {
        let assignment = Assignment::new(SolverStatus::Success, vec![vec![0, 2, 0], vec![1]]);
        assert!(assignment.status().is_success());
        assert_eq!(assignment.paths().len(), 2);
        assert_eq!(assignment.paths()[1], vec![1]);
    }
}
