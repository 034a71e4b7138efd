//! Tunable parameters of the formulation and search.

use serde::Deserialize;

/// Parameters steering stop grouping and the engine's search.
///
/// Every field has a default; unknown keys in the input are ignored and
/// missing keys fall back to the default, so a partial params object is
/// always accepted.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Params;
///
/// let params: Params = serde_json::from_str(
///     r#"{"SEARCH_TIME_LIMIT": 10, "IGNORED": true}"#,
/// ).unwrap();
/// assert_eq!(params.search_time_limit(), 10.0);
/// assert_eq!(params.geohash_precision_grouping(), 8);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Geohash prefix length used to group riders into pickup stops.
    #[serde(rename = "GEOHASH_PRECISION_GROUPING")]
    geohash_precision_grouping: usize,
    /// Name of the engine's first-solution construction strategy.
    #[serde(rename = "FIRST_SOLUTION_STRATEGY")]
    first_solution_strategy: String,
    /// Name of the engine's local-search metaheuristic.
    #[serde(rename = "SEARCH_METAHEURISTIC")]
    search_metaheuristic: String,
    /// Wall-clock search budget in seconds.
    #[serde(rename = "SEARCH_TIME_LIMIT")]
    search_time_limit: f64,
    /// Maximum number of solutions the engine may accept before stopping.
    #[serde(rename = "SEARCH_SOLUTIONS_LIMIT")]
    search_solutions_limit: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            geohash_precision_grouping: 8,
            first_solution_strategy: "AUTOMATIC".to_string(),
            search_metaheuristic: "AUTOMATIC".to_string(),
            search_time_limit: 3.0,
            search_solutions_limit: 1000,
        }
    }
}

impl Params {
    /// Geohash prefix length for rider grouping.
    pub fn geohash_precision_grouping(&self) -> usize {
        self.geohash_precision_grouping
    }

    /// Sets the grouping precision.
    pub fn with_geohash_precision(mut self, precision: usize) -> Self {
        self.geohash_precision_grouping = precision;
        self
    }

    /// Symbolic name of the first-solution strategy.
    pub fn first_solution_strategy(&self) -> &str {
        &self.first_solution_strategy
    }

    /// Sets the first-solution strategy name.
    pub fn with_first_solution_strategy(mut self, name: impl Into<String>) -> Self {
        self.first_solution_strategy = name.into();
        self
    }

    /// Symbolic name of the local-search metaheuristic.
    pub fn search_metaheuristic(&self) -> &str {
        &self.search_metaheuristic
    }

    /// Sets the metaheuristic name.
    pub fn with_search_metaheuristic(mut self, name: impl Into<String>) -> Self {
        self.search_metaheuristic = name.into();
        self
    }

    /// Wall-clock search budget in seconds.
    pub fn search_time_limit(&self) -> f64 {
        self.search_time_limit
    }

    /// Sets the search time limit in seconds.
    pub fn with_search_time_limit(mut self, seconds: f64) -> Self {
        self.search_time_limit = seconds;
        self
    }

    /// Accepted-solutions budget.
    pub fn search_solutions_limit(&self) -> usize {
        self.search_solutions_limit
    }

    /// Sets the accepted-solutions limit.
    pub fn with_search_solutions_limit(mut self, limit: usize) -> Self {
        self.search_solutions_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Params::default();
        assert_eq!(params.geohash_precision_grouping(), 8);
        assert_eq!(params.first_solution_strategy(), "AUTOMATIC");
        assert_eq!(params.search_metaheuristic(), "AUTOMATIC");
        assert_eq!(params.search_time_limit(), 3.0);
        assert_eq!(params.search_solutions_limit(), 1000);
    }

    #[test]
    fn test_deserialize_partial() {
        let params: Params =
            serde_json::from_str(r#"{"GEOHASH_PRECISION_GROUPING": 5}"#).expect("valid");
        assert_eq!(params.geohash_precision_grouping(), 5);
        assert_eq!(params.search_solutions_limit(), 1000);
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let params: Params =
            serde_json::from_str(r#"{"NOT_A_PARAM": 1, "SEARCH_SOLUTIONS_LIMIT": 50}"#)
                .expect("valid");
        assert_eq!(params.search_solutions_limit(), 50);
    }

    #[test]
    fn test_builder_setters() {
        let params = Params::default()
            .with_geohash_precision(6)
            .with_first_solution_strategy("SAVINGS")
            .with_search_metaheuristic("TABU_SEARCH")
            .with_search_time_limit(1.5)
            .with_search_solutions_limit(10);
        assert_eq!(params.geohash_precision_grouping(), 6);
        assert_eq!(params.first_solution_strategy(), "SAVINGS");
        assert_eq!(params.search_metaheuristic(), "TABU_SEARCH");
        assert_eq!(params.search_time_limit(), 1.5);
        assert_eq!(params.search_solutions_limit(), 10);
    }
}
