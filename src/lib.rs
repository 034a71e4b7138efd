//! # shuttle-routing
//!
//! Formulates a capacitated vehicle routing problem from raw rider, vehicle,
//! and depot records and decodes an engine's index-space answer back into
//! rider-serving routes.
//!
//! The pipeline: riders are grouped into pickup stops by geohash proximity,
//! travel times are estimated for every ordered stop pair, the capacity
//! constraint and arc-cost objective are assembled into an engine-facing
//! model, a [`Solver`](solver::Solver) runs one bounded search, and the
//! resulting node paths are decoded into [`Route`](models::Route)s.
//!
//! ## Modules
//!
//! - [`models`] — Input entities, locations with geohashes, stops, routes, params
//! - [`estimate`] — All-pairs travel-time estimation (haversine straight-line)
//! - [`problem`] — Stop aggregation and problem assembly
//! - [`optimize`] — Constraints, objective, and search-parameter mapping
//! - [`solver`] — The engine contract and the bundled local-search engine
//! - [`decode`] — Index-space answer back to domain routes
//! - [`input`] — JSON record parsing helpers

pub mod decode;
pub mod error;
pub mod estimate;
pub mod input;
pub mod models;
pub mod optimize;
pub mod problem;
mod router;
pub mod solver;

pub use error::{Error, Result};
pub use router::Router;
