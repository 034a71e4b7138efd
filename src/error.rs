//! Crate-level error type.

use thiserror::Error;

/// Errors surfaced while parsing input records or assembling a routing model.
///
/// Estimation and aggregation are total over valid inputs and never fail;
/// everything that can go wrong does so at parse or build time.
#[derive(Debug, Error)]
pub enum Error {
    /// A vehicle names a start or end depot that is not in the depot set.
    #[error("vehicle `{vehicle_id}` references unknown depot `{depot_id}`")]
    UnknownDepot {
        /// Vehicle holding the dangling reference.
        vehicle_id: String,
        /// The depot identifier that could not be resolved.
        depot_id: String,
    },

    /// An unrecognized first-solution strategy name in the params.
    #[error("unknown first-solution strategy `{0}`")]
    UnknownFirstSolutionStrategy(String),

    /// An unrecognized local-search metaheuristic name in the params.
    #[error("unknown search metaheuristic `{0}`")]
    UnknownMetaheuristic(String),

    /// A search time limit that is not a representable span of seconds.
    #[error("invalid search time limit `{0}`: must be finite and non-negative seconds")]
    InvalidTimeLimit(f64),

    /// A rider, vehicle, depot, or params record is missing required fields
    /// or carries a malformed value.
    #[error("malformed {entity} record: {source}")]
    MalformedRecord {
        /// Which entity kind failed to parse.
        entity: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize routes to the output shape.
    #[error("failed to serialize routes: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
