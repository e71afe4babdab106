//! Annealing execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::SaConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::{validate_solution, CostEvaluator};
use crate::models::{Node, Solution};
use crate::neighborhood::NeighborhoodGenerator;

/// Why the annealing loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Temperature fell to or below the configured floor.
    TemperatureFloor,
    /// The stall counter reached its limit.
    Stalled,
    /// The external cancellation flag was raised.
    Cancelled,
}

/// Per-iteration progress record handed to an observer callback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Temperature after this iteration's cooling step.
    pub temperature: f64,
    /// Cost of the current (accepted) solution.
    pub current_cost: f64,
    /// Cost of the best solution so far.
    pub best_cost: f64,
}

/// Result of an annealing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaResult {
    /// The best solution found.
    pub best: Solution,

    /// Cost of the best solution, in kilometers.
    pub best_cost: f64,

    /// Total number of loop iterations executed.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of candidates that improved on the best-known cost.
    pub improving_moves: usize,

    /// Why the loop stopped.
    pub termination: Termination,

    /// Proposed candidate cost per iteration, in order. This raw trace
    /// may rise and fall; only the best-so-far trace is non-increasing.
    pub cost_history: Vec<f64>,
}

/// Metropolis acceptance rule.
///
/// Improvements are always accepted; a worsening move is accepted with
/// probability `exp(-delta / temperature)` from a uniform [0, 1) draw.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrp_anneal::sa::metropolis_accept;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// assert!(metropolis_accept(-3.0, 1e-9, &mut rng));
/// ```
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / temperature).exp()
}

/// Drives the simulated annealing search over one problem instance.
///
/// Holds the immutable session data (node list and distance matrix), a
/// neighborhood generator, and the loop configuration. Each call to
/// [`run`](Annealer::run) executes an independent chain from the supplied
/// initial solution.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::Node;
/// use vrp_anneal::distance::DistanceMatrix;
/// use vrp_anneal::construct::nearest_neighbor;
/// use vrp_anneal::sa::{Annealer, SaConfig};
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::store("A", 0.0, 1.0),
///     Node::store("B", 0.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let initial = nearest_neighbor(&nodes, 0, &dm).unwrap();
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.99)
///     .with_seed(42);
/// let annealer = Annealer::new(&nodes, &dm, config).unwrap();
/// let result = annealer.run(&initial).unwrap();
/// assert_eq!(result.cost_history.len(), result.iterations);
/// ```
pub struct Annealer<'a> {
    nodes: &'a [Node],
    distances: &'a DistanceMatrix,
    generator: NeighborhoodGenerator,
    config: SaConfig,
}

impl<'a> Annealer<'a> {
    /// Creates an annealer for one problem instance.
    ///
    /// Validates the configuration and that the matrix covers the node
    /// list; both are configuration errors raised before any iteration.
    pub fn new(nodes: &'a [Node], distances: &'a DistanceMatrix, config: SaConfig) -> Result<Self> {
        config.validate()?;
        if distances.size() != nodes.len() {
            return Err(Error::InvalidParameter {
                name: "distances",
                reason: format!(
                    "matrix covers {} nodes but {} were supplied",
                    distances.size(),
                    nodes.len()
                ),
            });
        }
        Ok(Self {
            nodes,
            distances,
            generator: NeighborhoodGenerator::new(),
            config,
        })
    }

    /// Replaces the default neighborhood generator.
    pub fn with_generator(mut self, generator: NeighborhoodGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Runs the annealing chain from `initial`.
    pub fn run(&self, initial: &Solution) -> Result<SaResult> {
        self.run_with(initial, None, None)
    }

    /// Runs with an external cancellation flag, checked once per iteration.
    pub fn run_with_cancel(
        &self,
        initial: &Solution,
        cancel: Arc<AtomicBool>,
    ) -> Result<SaResult> {
        self.run_with(initial, Some(cancel), None)
    }

    /// Runs with optional cancellation and a per-iteration progress
    /// observer.
    pub fn run_with(
        &self,
        initial: &Solution,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: Option<&mut dyn FnMut(Progress)>,
    ) -> Result<SaResult> {
        validate_solution(self.nodes, initial)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let evaluator = CostEvaluator::new(self.distances);

        let mut current = initial.clone();
        let mut current_cost = evaluator.solution_cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = self.config.initial_temperature;
        let mut iterations = 0usize;
        let mut stall = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = Vec::new();

        debug!(
            routes = current.num_routes(),
            stops = current.num_stops(),
            initial_cost = current_cost,
            temperature,
            "annealing started"
        );

        let termination = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break Termination::Cancelled;
                }
            }

            iterations += 1;

            let candidate = self.generator.neighbor(&current, &mut rng);
            let candidate_cost = evaluator.solution_cost(&candidate);
            cost_history.push(candidate_cost);

            let delta = candidate_cost - current_cost;
            if metropolis_accept(delta, temperature, &mut rng) {
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;

                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    improving_moves += 1;
                    stall = 0;
                    debug!(iteration = iterations, best_cost, "new best solution");
                } else {
                    stall += 1;
                }
            } else {
                stall += 1;
            }

            temperature *= self.config.cooling_rate;

            trace!(
                iteration = iterations,
                temperature,
                current_cost,
                best_cost,
                stall,
                "iteration complete"
            );
            if let Some(ref mut obs) = observer {
                obs(Progress {
                    iteration: iterations,
                    temperature,
                    current_cost,
                    best_cost,
                });
            }

            if temperature <= self.config.min_temperature {
                break Termination::TemperatureFloor;
            }
            if stall >= self.config.max_stall_iterations {
                break Termination::Stalled;
            }
        };

        debug!(
            ?termination,
            iterations, best_cost, final_temperature = temperature,
            "annealing finished"
        );

        Ok(SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            termination,
            cost_history,
        })
    }
}
