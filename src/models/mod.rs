//! Domain model types for the shuttle routing pipeline.
//!
//! Provides the input entities (riders, vehicles, depots, params), the
//! geohash-bearing location type, the stop union that the optimization model
//! is built over, and the decoded route output.

mod depot;
mod location;
mod params;
mod rider;
mod route;
mod stop;
mod vehicle;

pub use depot::Depot;
pub use location::{encode_geohash, Location, GEOHASH_MAX_PRECISION};
pub use params::Params;
pub use rider::Rider;
pub use route::Route;
pub use stop::Stop;
pub use vehicle::Vehicle;
