//! Bundled local-search engine.
//!
//! A small engine behind the [`Solver`] contract so the pipeline runs end to
//! end without an external dependency: greedy cheapest-feasible-arc
//! construction followed by intra-route 2-opt refinement, with
//! simulated-annealing acceptance when that metaheuristic is configured.
//! First-solution strategy codes beyond the greedy construction are accepted
//! and treated as advisory.

use std::collections::BTreeSet;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::optimize::{Metaheuristic, OptimizationModel};

use super::{Assignment, Solver, SolverStatus};

/// Greedy construction plus bounded 2-opt local search.
///
/// Honors the model's wall-clock time limit and accepted-solutions limit as
/// hard stops. Deterministic for a fixed seed.
///
/// # Examples
///
/// ```
/// use shuttle_routing::solver::{LocalSearchSolver, Solver};
/// # use std::collections::BTreeMap;
/// # use shuttle_routing::estimate::LinearEstimator;
/// # use shuttle_routing::models::{Depot, Params, Rider, Vehicle};
/// # use shuttle_routing::optimize::{CapacityConstraint, OptimizationModelBuilder};
/// # use shuttle_routing::problem::ProblemBuilder;
/// # let riders = BTreeMap::from([("r".to_string(), Rider::new("r", 1.0, 1.0))]);
/// # let vehicles = BTreeMap::from([("bus".to_string(), Vehicle::new("bus", 4, "d0", "d0"))]);
/// # let depots = BTreeMap::from([("d0".to_string(), Depot::new("d0", 0.0, 0.0))]);
/// # let problem = ProblemBuilder::new(Params::default(), Box::new(LinearEstimator::new()))
/// #     .build(&riders, &vehicles, &depots).unwrap();
/// # let model = OptimizationModelBuilder::new(vec![Box::new(CapacityConstraint::new())])
/// #     .build(&problem).unwrap();
///
/// let assignment = LocalSearchSolver::new().with_seed(7).solve(&model);
/// assert!(assignment.status().is_success());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalSearchSolver {
    seed: Option<u64>,
}

impl LocalSearchSolver {
    /// Creates an engine seeded from the OS.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Fixes the random seed, making the search deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

impl Solver for LocalSearchSolver {
    fn solve(&self, model: &OptimizationModel) -> Assignment {
        if !is_well_formed(model) {
            let paths = model
                .starts()
                .iter()
                .map(|&start| {
                    if start < model.num_stops() {
                        vec![start]
                    } else {
                        Vec::new()
                    }
                })
                .collect();
            return Assignment::new(SolverStatus::Invalid, paths);
        }

        let deadline = Instant::now() + model.search().time_limit();
        let mut search = Search::new(model, self.rng(), deadline);
        search.construct();
        search.refine();

        let (status, paths) = search.finish();
        info!(status = %status, num_vehicles = paths.len(), "solver finished");
        Assignment::new(status, paths)
    }
}

/// Starts, ends, and dimension capacities must all line up with the model's
/// node and vehicle counts.
fn is_well_formed(model: &OptimizationModel) -> bool {
    let vehicles = model.num_vehicles();
    model.starts().len() == vehicles
        && model.ends().len() == vehicles
        && model
            .starts()
            .iter()
            .chain(model.ends())
            .all(|&ix| ix < model.num_stops())
        && model
            .dimensions()
            .iter()
            .all(|dim| dim.capacities().len() == vehicles)
}

/// One search run over a model.
struct Search<'a> {
    model: &'a OptimizationModel,
    rng: StdRng,
    deadline: Instant,
    /// Pickup nodes assigned per vehicle, depots excluded.
    routes: Vec<Vec<usize>>,
    unassigned: BTreeSet<usize>,
    accepted: usize,
    timed_out: bool,
}

impl<'a> Search<'a> {
    fn new(model: &'a OptimizationModel, rng: StdRng, deadline: Instant) -> Self {
        // Every node that is not some vehicle's start or end is a pickup.
        let depot_nodes: BTreeSet<usize> =
            model.starts().iter().chain(model.ends()).copied().collect();
        let unassigned: BTreeSet<usize> = (0..model.num_stops())
            .filter(|node| !depot_nodes.contains(node))
            .collect();

        Self {
            model,
            rng,
            deadline,
            routes: vec![Vec::new(); model.num_vehicles()],
            unassigned,
            accepted: 0,
            timed_out: false,
        }
    }

    /// Greedy construction: each vehicle repeatedly takes the cheapest
    /// feasible arc to an unassigned pickup node.
    fn construct(&mut self) {
        for vehicle in 0..self.model.num_vehicles() {
            let mut current = self.model.starts()[vehicle];
            let mut loads = vec![0_i64; self.model.dimensions().len()];

            loop {
                if Instant::now() >= self.deadline {
                    self.timed_out = true;
                    return;
                }

                let next = self
                    .unassigned
                    .iter()
                    .copied()
                    .filter(|&node| self.fits(vehicle, &loads, node))
                    .min_by(|&a, &b| {
                        self.model
                            .arc_cost(current, a)
                            .total_cmp(&self.model.arc_cost(current, b))
                    });

                match next {
                    Some(node) => {
                        self.unassigned.remove(&node);
                        for (load, dim) in loads.iter_mut().zip(self.model.dimensions()) {
                            *load += dim.transit(node);
                        }
                        self.routes[vehicle].push(node);
                        current = node;
                    }
                    None => break,
                }
            }
        }
        self.accepted += 1;
        debug!(
            unassigned = self.unassigned.len(),
            "constructed initial assignment"
        );
    }

    /// Intra-route 2-opt refinement under the configured acceptance rule.
    fn refine(&mut self) {
        let annealing = self.model.search().metaheuristic() == Metaheuristic::SimulatedAnnealing;
        let mut temperature = self.initial_temperature();

        for vehicle in 0..self.model.num_vehicles() {
            if self.routes[vehicle].len() < 2 {
                continue;
            }

            let mut improved = true;
            while improved {
                improved = false;
                let len = self.routes[vehicle].len();
                for i in 0..len - 1 {
                    for j in i + 1..len {
                        if self.budget_exhausted() {
                            return;
                        }
                        let delta = self.reversal_delta(vehicle, i, j);
                        let accept = delta < -1e-9
                            || (annealing
                                && temperature > f64::EPSILON
                                && self.rng.random::<f64>() < (-delta / temperature).exp());
                        if accept {
                            self.routes[vehicle][i..=j].reverse();
                            self.accepted += 1;
                            if annealing {
                                temperature *= 0.9;
                            }
                            if delta < -1e-9 {
                                improved = true;
                            }
                        }
                    }
                }
            }
        }
    }

    fn budget_exhausted(&mut self) -> bool {
        if Instant::now() >= self.deadline {
            self.timed_out = true;
            return true;
        }
        self.accepted >= self.model.search().solution_limit()
    }

    /// Exact cost change of reversing `routes[vehicle][i..=j]`.
    ///
    /// Inner arcs are re-summed in both directions; the arc-cost evaluator
    /// may be directional so the symmetric shortcut is not available.
    fn reversal_delta(&self, vehicle: usize, i: usize, j: usize) -> f64 {
        let route = &self.routes[vehicle];
        let prev = if i == 0 {
            self.model.starts()[vehicle]
        } else {
            route[i - 1]
        };
        let next = if j == route.len() - 1 {
            self.model.ends()[vehicle]
        } else {
            route[j + 1]
        };

        let mut old_cost = self.model.arc_cost(prev, route[i]);
        let mut new_cost = self.model.arc_cost(prev, route[j]);
        for k in i..j {
            old_cost += self.model.arc_cost(route[k], route[k + 1]);
            new_cost += self.model.arc_cost(route[k + 1], route[k]);
        }
        old_cost += self.model.arc_cost(route[j], next);
        new_cost += self.model.arc_cost(route[i], next);

        new_cost - old_cost
    }

    /// Mean arc cost of the constructed routes; seeds the annealing schedule.
    fn initial_temperature(&self) -> f64 {
        let mut total = 0.0;
        let mut arcs = 0_usize;
        for (vehicle, route) in self.routes.iter().enumerate() {
            let mut current = self.model.starts()[vehicle];
            for &node in route {
                total += self.model.arc_cost(current, node);
                arcs += 1;
                current = node;
            }
        }
        if arcs == 0 {
            1.0
        } else {
            total / arcs as f64
        }
    }

    /// Whether every dimension still fits vehicle capacity after adding `node`.
    fn fits(&self, vehicle: usize, loads: &[i64], node: usize) -> bool {
        self.model
            .dimensions()
            .iter()
            .zip(loads)
            .all(|(dim, &load)| load + dim.transit(node) <= dim.capacities()[vehicle])
    }

    /// Builds the final per-vehicle paths and the terminal status.
    fn finish(self) -> (SolverStatus, Vec<Vec<usize>>) {
        let paths = self
            .routes
            .iter()
            .enumerate()
            .map(|(vehicle, route)| {
                if route.is_empty() {
                    // Unused vehicle: degenerate single-node path.
                    vec![self.model.starts()[vehicle]]
                } else {
                    let mut path = Vec::with_capacity(route.len() + 2);
                    path.push(self.model.starts()[vehicle]);
                    path.extend_from_slice(route);
                    path.push(self.model.ends()[vehicle]);
                    path
                }
            })
            .collect();

        let status = if !self.unassigned.is_empty() {
            if self.timed_out {
                SolverStatus::FailTimeout
            } else {
                SolverStatus::Fail
            }
        } else {
            SolverStatus::Success
        };
        (status, paths)
    }
}
