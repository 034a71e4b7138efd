//! Search configuration mapping.
//!
//! Translates the symbolic strategy and metaheuristic names carried in
//! [`Params`] into the engine's native enumeration codes, failing fast on
//! anything unrecognized instead of silently defaulting.

use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::Params;

/// Construction heuristic used to produce the initial route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstSolutionStrategy {
    /// Let the engine pick.
    Automatic,
    /// Extend each route with the cheapest outgoing arc.
    PathCheapestArc,
    /// Extend each route with the most constrained outgoing arc.
    PathMostConstrainedArc,
    /// Arc selection driven by the registered evaluator.
    EvaluatorStrategy,
    /// Clarke-Wright savings.
    Savings,
    /// Sweep construction.
    Sweep,
    /// Christofides-style construction.
    Christofides,
    /// Start with every node unperformed.
    AllUnperformed,
    /// Insert the node with the best global insertion cost.
    BestInsertion,
    /// Cheapest insertion evaluated across routes in parallel.
    ParallelCheapestInsertion,
    /// Cheapest insertion evaluated per route.
    LocalCheapestInsertion,
    /// Globally cheapest arc first.
    GlobalCheapestArc,
    /// Cheapest arc from the current node.
    LocalCheapestArc,
    /// Bind the first unbound variable to its minimum value.
    FirstUnboundMinValue,
}

impl FirstSolutionStrategy {
    /// The engine's native enumeration code for this strategy.
    pub fn engine_code(self) -> i32 {
        match self {
            Self::Automatic => 15,
            Self::PathCheapestArc => 3,
            Self::PathMostConstrainedArc => 4,
            Self::EvaluatorStrategy => 5,
            Self::Savings => 10,
            Self::Sweep => 11,
            Self::Christofides => 13,
            Self::AllUnperformed => 6,
            Self::BestInsertion => 7,
            Self::ParallelCheapestInsertion => 8,
            Self::LocalCheapestInsertion => 9,
            Self::GlobalCheapestArc => 1,
            Self::LocalCheapestArc => 2,
            Self::FirstUnboundMinValue => 12,
        }
    }
}

impl FromStr for FirstSolutionStrategy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "AUTOMATIC" => Ok(Self::Automatic),
            "PATH_CHEAPEST_ARC" => Ok(Self::PathCheapestArc),
            "PATH_MOST_CONSTRAINED_ARC" => Ok(Self::PathMostConstrainedArc),
            "EVALUATOR_STRATEGY" => Ok(Self::EvaluatorStrategy),
            "SAVINGS" => Ok(Self::Savings),
            "SWEEP" => Ok(Self::Sweep),
            "CHRISTOFIDES" => Ok(Self::Christofides),
            "ALL_UNPERFORMED" => Ok(Self::AllUnperformed),
            "BEST_INSERTION" => Ok(Self::BestInsertion),
            "PARALLEL_CHEAPEST_INSERTION" => Ok(Self::ParallelCheapestInsertion),
            "LOCAL_CHEAPEST_INSERTION" => Ok(Self::LocalCheapestInsertion),
            "GLOBAL_CHEAPEST_ARC" => Ok(Self::GlobalCheapestArc),
            "LOCAL_CHEAPEST_ARC" => Ok(Self::LocalCheapestArc),
            "FIRST_UNBOUND_MIN_VALUE" => Ok(Self::FirstUnboundMinValue),
            other => Err(Error::UnknownFirstSolutionStrategy(other.to_string())),
        }
    }
}

/// Local-search metaheuristic applied after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metaheuristic {
    /// Let the engine pick.
    Automatic,
    /// Accept improving moves only.
    GreedyDescent,
    /// Guided local search with penalized arcs.
    GuidedLocalSearch,
    /// Simulated annealing acceptance.
    SimulatedAnnealing,
    /// Tabu search.
    TabuSearch,
}

impl Metaheuristic {
    /// The engine's native enumeration code for this metaheuristic.
    pub fn engine_code(self) -> i32 {
        match self {
            Self::Automatic => 6,
            Self::GreedyDescent => 1,
            Self::GuidedLocalSearch => 2,
            Self::SimulatedAnnealing => 3,
            Self::TabuSearch => 4,
        }
    }
}

impl FromStr for Metaheuristic {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "AUTOMATIC" => Ok(Self::Automatic),
            "GREEDY_DESCENT" => Ok(Self::GreedyDescent),
            "GUIDED_LOCAL_SEARCH" => Ok(Self::GuidedLocalSearch),
            "SIMULATED_ANNEALING" => Ok(Self::SimulatedAnnealing),
            "TABU_SEARCH" => Ok(Self::TabuSearch),
            other => Err(Error::UnknownMetaheuristic(other.to_string())),
        }
    }
}

/// Engine-facing search configuration: strategy, metaheuristic, and the two
/// hard limits the engine must respect.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Params;
/// use shuttle_routing::optimize::{Metaheuristic, SearchParameters};
///
/// let params = Params::default().with_search_metaheuristic("TABU_SEARCH");
/// let search = SearchParameters::from_params(&params).unwrap();
/// assert_eq!(search.metaheuristic(), Metaheuristic::TabuSearch);
/// assert_eq!(search.time_limit().as_secs(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParameters {
    first_solution_strategy: FirstSolutionStrategy,
    metaheuristic: Metaheuristic,
    time_limit: Duration,
    solution_limit: usize,
}

impl SearchParameters {
    /// Translates the symbolic names and limits in `params`.
    ///
    /// # Errors
    ///
    /// Fails on any unrecognized strategy or metaheuristic name, and on a
    /// time limit that is negative, non-finite, or too large for a
    /// [`Duration`].
    pub fn from_params(params: &Params) -> Result<Self> {
        let time_limit = Duration::try_from_secs_f64(params.search_time_limit())
            .map_err(|_| Error::InvalidTimeLimit(params.search_time_limit()))?;
        Ok(Self {
            first_solution_strategy: params.first_solution_strategy().parse()?,
            metaheuristic: params.search_metaheuristic().parse()?,
            time_limit,
            solution_limit: params.search_solutions_limit(),
        })
    }

    /// The construction strategy.
    pub fn first_solution_strategy(&self) -> FirstSolutionStrategy {
        self.first_solution_strategy
    }

    /// The refinement metaheuristic.
    pub fn metaheuristic(&self) -> Metaheuristic {
        self.metaheuristic
    }

    /// Wall-clock budget for the whole search.
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Maximum number of accepted solutions before the search stops.
    pub fn solution_limit(&self) -> usize {
        self.solution_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_codes_match_engine_table() {
        let cases = [
            ("AUTOMATIC", 15),
            ("PATH_CHEAPEST_ARC", 3),
            ("PATH_MOST_CONSTRAINED_ARC", 4),
            ("EVALUATOR_STRATEGY", 5),
            ("SAVINGS", 10),
            ("SWEEP", 11),
            ("CHRISTOFIDES", 13),
            ("ALL_UNPERFORMED", 6),
            ("BEST_INSERTION", 7),
            ("PARALLEL_CHEAPEST_INSERTION", 8),
            ("LOCAL_CHEAPEST_INSERTION", 9),
            ("GLOBAL_CHEAPEST_ARC", 1),
            ("LOCAL_CHEAPEST_ARC", 2),
            ("FIRST_UNBOUND_MIN_VALUE", 12),
        ];
        for (name, code) in cases {
            let strategy: FirstSolutionStrategy = name.parse().expect("known name");
            assert_eq!(strategy.engine_code(), code, "{name}");
        }
    }

    #[test]
    fn test_metaheuristic_codes_match_engine_table() {
        let cases = [
            ("AUTOMATIC", 6),
            ("GREEDY_DESCENT", 1),
            ("GUIDED_LOCAL_SEARCH", 2),
            ("SIMULATED_ANNEALING", 3),
            ("TABU_SEARCH", 4),
        ];
        for (name, code) in cases {
            let metaheuristic: Metaheuristic = name.parse().expect("known name");
            assert_eq!(metaheuristic.engine_code(), code, "{name}");
        }
    }

    #[test]
    fn test_unknown_strategy_fails_fast() {
        let result = SearchParameters::from_params(
            &Params::default().with_first_solution_strategy("CHEAPEST_VIBES"),
        );
        assert!(matches!(
            result,
            Err(Error::UnknownFirstSolutionStrategy(ref name)) if name == "CHEAPEST_VIBES"
        ));
    }

    #[test]
    fn test_unknown_metaheuristic_fails_fast() {
        let result = SearchParameters::from_params(
            &Params::default().with_search_metaheuristic("tabu_search"),
        );
        // Case matters; lowercase is not a known name.
        assert!(matches!(result, Err(Error::UnknownMetaheuristic(_))));
    }

    #[test]
    fn test_negative_time_limit_is_an_error() {
        // Reachable from raw input: params deserialization accepts any
        // number, so the translation layer must reject it, not panic.
        let params: Params =
            serde_json::from_str(r#"{"SEARCH_TIME_LIMIT": -1}"#).expect("parses");
        let result = SearchParameters::from_params(&params);
        assert!(matches!(result, Err(Error::InvalidTimeLimit(limit)) if limit == -1.0));
    }

    #[test]
    fn test_non_finite_time_limit_is_an_error() {
        let nan = Params::default().with_search_time_limit(f64::NAN);
        assert!(matches!(
            SearchParameters::from_params(&nan),
            Err(Error::InvalidTimeLimit(_))
        ));

        let infinite = Params::default().with_search_time_limit(f64::INFINITY);
        assert!(matches!(
            SearchParameters::from_params(&infinite),
            Err(Error::InvalidTimeLimit(_))
        ));
    }

    #[test]
    fn test_limits_carried_through() {
        let params = Params::default()
            .with_search_time_limit(0.5)
            .with_search_solutions_limit(7);
        let search = SearchParameters::from_params(&params).expect("valid");
        assert_eq!(search.time_limit(), Duration::from_millis(500));
        assert_eq!(search.solution_limit(), 7);
    }
}
