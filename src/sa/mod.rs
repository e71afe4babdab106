//! Simulated annealing search loop.
//!
//! A single-solution trajectory metaheuristic: candidates one move away
//! from the current solution are accepted by the Metropolis criterion
//! under a geometrically cooling temperature, letting the search escape
//! local optima early and settle as it cools.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{metropolis_accept, Annealer, Progress, SaResult, Termination};
