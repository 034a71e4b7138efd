//! End-to-end pipeline scenarios: formulate, solve, decode.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use shuttle_routing::estimate::{LinearEstimator, TimeEstimator};
use shuttle_routing::models::{Depot, Location, Params, Rider, Stop, Vehicle};
use shuttle_routing::optimize::{CapacityConstraint, OptimizationModelBuilder};
use shuttle_routing::problem::ProblemBuilder;
use shuttle_routing::solver::{LocalSearchSolver, Solver, SolverStatus};
use shuttle_routing::Router;

fn rider_map(riders: &[(&str, f64, f64)]) -> BTreeMap<String, Rider> {
    riders
        .iter()
        .map(|&(id, lat, lng)| (id.to_string(), Rider::new(id, lat, lng)))
        .collect()
}

fn vehicle_map(vehicles: &[(&str, u32, &str, &str)]) -> BTreeMap<String, Vehicle> {
    vehicles
        .iter()
        .map(|&(id, cap, start, end)| (id.to_string(), Vehicle::new(id, cap, start, end)))
        .collect()
}

fn depot_map(depots: &[(&str, f64, f64)]) -> BTreeMap<String, Depot> {
    depots
        .iter()
        .map(|&(id, lat, lng)| (id.to_string(), Depot::new(id, lat, lng)))
        .collect()
}

fn router(params: Params) -> Router<LocalSearchSolver> {
    Router::new(
        ProblemBuilder::new(params, Box::new(LinearEstimator::new())),
        OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())]),
        LocalSearchSolver::new().with_seed(99),
    )
}

#[test]
fn one_rider_two_coincident_depots_yields_one_route() {
    let riders = rider_map(&[("r1", 4.7110, -74.0721)]);
    let vehicles = vehicle_map(&[("bus", 4, "d0", "d0")]);
    // Second depot shares d0's location but no vehicle references it.
    let depots = depot_map(&[("d0", 4.60, -74.08), ("d1", 4.60, -74.08)]);

    let routes = router(Params::default())
        .route(&riders, &vehicles, &depots)
        .expect("pipeline runs");

    assert_eq!(routes.len(), 1);
    let stops = routes[0].stops();
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].depot_id(), Some("d0"));
    assert_eq!(stops[1].riders().map(|r| r.len()), Some(1));
    assert_eq!(stops[2].depot_id(), Some("d0"));
    assert_eq!(routes[0].total_demand(), 1);
}

#[test]
fn zero_capacity_fleet_decodes_to_zero_routes() {
    let riders = rider_map(&[("r1", 4.7110, -74.0721)]);
    let vehicles = vehicle_map(&[("bus", 0, "d0", "d0")]);
    let depots = depot_map(&[("d0", 4.60, -74.08)]);

    let problem = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()))
        .build(&riders, &vehicles, &depots)
        .expect("builds");
    let model = OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())])
        .build(&problem)
        .expect("builds");
    let assignment = LocalSearchSolver::new().with_seed(99).solve(&model);
    assert_eq!(assignment.status(), SolverStatus::Fail);

    let routes = router(Params::default())
        .route(&riders, &vehicles, &depots)
        .expect("no error for infeasibility");
    assert!(routes.is_empty());
}

#[test]
fn successful_decode_covers_every_stop_index() {
    // Two rider clusters far apart, two vehicles from distinct depots.
    let riders = rider_map(&[
        ("r1", 4.7110, -74.0721),
        ("r2", 4.7110, -74.0721),
        ("r3", 6.2442, -75.5812),
        ("r4", 6.2443, -75.5813),
    ]);
    let vehicles = vehicle_map(&[("bus-a", 10, "d0", "d0"), ("bus-b", 10, "d1", "d1")]);
    let depots = depot_map(&[("d0", 4.60, -74.08), ("d1", 6.25, -75.57)]);

    let problem = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()))
        .build(&riders, &vehicles, &depots)
        .expect("builds");
    let model = OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())])
        .build(&problem)
        .expect("builds");
    let assignment = LocalSearchSolver::new().with_seed(99).solve(&model);
    assert_eq!(assignment.status(), SolverStatus::Success);

    let visited: BTreeSet<usize> = assignment.paths().iter().flatten().copied().collect();
    let all: BTreeSet<usize> = (0..problem.stops().len()).collect();
    assert_eq!(visited, all);

    // Every decoded route stays within its vehicle's capacity and is
    // depot-anchored at both ends.
    let routes = router(Params::default())
        .route(&riders, &vehicles, &depots)
        .expect("pipeline runs");
    for route in &routes {
        let capacity = vehicles[route.vehicle_id()].capacity();
        assert!(route.total_demand() <= capacity);
        assert!(route.stops().first().expect("non-empty").is_depot());
        assert!(route.stops().last().expect("non-empty").is_depot());
    }

    // All riders are served exactly once across routes.
    let served: BTreeSet<&str> = routes.iter().flat_map(|r| r.rider_ids()).collect();
    assert_eq!(served.len(), riders.len());
}

#[test]
fn unreferenced_depot_never_reaches_the_stop_sequence() {
    let riders = rider_map(&[("r1", 4.7110, -74.0721)]);
    let vehicles = vehicle_map(&[("bus", 4, "d0", "d0")]);
    let depots = depot_map(&[("d0", 4.60, -74.08), ("ghost", 50.0, 50.0)]);

    let problem = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()))
        .build(&riders, &vehicles, &depots)
        .expect("builds");
    assert!(problem
        .stops()
        .iter()
        .all(|stop| stop.depot_id() != Some("ghost")));
}

proptest! {
    #[test]
    fn estimations_are_all_pairs_with_zero_diagonal(
        coords in prop::collection::vec((-85.0_f64..85.0, -180.0_f64..180.0), 1..8)
    ) {
        let stops: Vec<Stop> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| Stop::depot(format!("d{i}"), Location::new(lat, lng)))
            .collect();
        let times = LinearEstimator::new().estimate(&stops);

        prop_assert_eq!(times.len(), stops.len() * stops.len());
        for i in 0..stops.len() {
            prop_assert_eq!(times.get(i, i), 0.0);
            for j in 0..stops.len() {
                prop_assert!(times.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn riders_share_a_stop_iff_they_share_the_geohash_prefix(
        coords in prop::collection::vec((-85.0_f64..85.0, -180.0_f64..180.0), 1..12),
        precision in 1_usize..7
    ) {
        let riders: BTreeMap<String, Rider> = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| (format!("r{i}"), Rider::new(format!("r{i}"), lat, lng)))
            .collect();

        let stops = shuttle_routing::problem::StopAggregator::new(precision)
            .pickup_stops(&riders);

        let expected_groups: BTreeSet<String> = riders
            .values()
            .map(|r| r.location().geohash_prefix(precision).to_string())
            .collect();
        prop_assert_eq!(stops.len(), expected_groups.len());

        // Within each stop, all members share the truncated prefix.
        for stop in &stops {
            let members = stop.riders().expect("pickup stop");
            let prefixes: BTreeSet<&str> = members
                .values()
                .map(|r| r.location().geohash_prefix(precision))
                .collect();
            prop_assert_eq!(prefixes.len(), 1);
        }
    }
}
