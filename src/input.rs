//! Parsing of raw entity records.
//!
//! Turns JSON arrays of flat records into the keyed entity maps the pipeline
//! consumes. Extra fields in a record are ignored; a missing or malformed
//! required field fails the whole parse immediately. File and CLI handling
//! live with the caller.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Depot, Params, Rider, Route, Vehicle};

/// Parses a JSON array of rider records, keyed by rider id.
pub fn riders_from_json(json: &str) -> Result<BTreeMap<String, Rider>> {
    let riders = parse_records(json, "rider", |rider: &Rider| rider.rider_id().to_string())?;
    info!(num_riders = riders.len(), "parsed riders");
    Ok(riders)
}

/// Parses a JSON array of vehicle records, keyed by vehicle id.
pub fn vehicles_from_json(json: &str) -> Result<BTreeMap<String, Vehicle>> {
    let vehicles = parse_records(json, "vehicle", |vehicle: &Vehicle| {
        vehicle.vehicle_id().to_string()
    })?;
    info!(num_vehicles = vehicles.len(), "parsed vehicles");
    Ok(vehicles)
}

/// Parses a JSON array of depot records, keyed by depot id.
pub fn depots_from_json(json: &str) -> Result<BTreeMap<String, Depot>> {
    let depots = parse_records(json, "depot", |depot: &Depot| depot.depot_id().to_string())?;
    info!(num_depots = depots.len(), "parsed depots");
    Ok(depots)
}

/// Parses a params object; unknown keys ignored, missing keys defaulted.
pub fn params_from_json(json: &str) -> Result<Params> {
    serde_json::from_str(json).map_err(|source| Error::MalformedRecord {
        entity: "params",
        source,
    })
}

/// Serializes routes to the output shape, pretty-printed.
pub fn routes_to_json(routes: &[Route]) -> Result<String> {
    serde_json::to_string_pretty(routes).map_err(Error::Serialize)
}

fn parse_records<T: DeserializeOwned>(
    json: &str,
    entity: &'static str,
    key: impl Fn(&T) -> String,
) -> Result<BTreeMap<String, T>> {
    let records: Vec<T> =
        serde_json::from_str(json).map_err(|source| Error::MalformedRecord { entity, source })?;
    Ok(records
        .into_iter()
        .map(|record| (key(&record), record))
        .collect())
}
