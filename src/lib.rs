//! # vrp-anneal
//!
//! Multi-route vehicle routing by simulated annealing: stores are
//! partitioned into depot-bounded routes minimizing total great-circle
//! travel distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Route, Solution)
//! - [`distance`] — Haversine distance and the pairwise matrix
//! - [`construct`] — Initial-solution builders (nearest neighbor, random shuffle)
//! - [`neighborhood`] — Elementary move operators and candidate generation
//! - [`evaluation`] — Total-distance objective and coverage validation
//! - [`sa`] — Simulated annealing loop (Metropolis acceptance, geometric cooling)
//!
//! ## Example
//!
//! ```
//! use vrp_anneal::models::Node;
//! use vrp_anneal::distance::DistanceMatrix;
//! use vrp_anneal::construct::nearest_neighbor;
//! use vrp_anneal::sa::{Annealer, SaConfig};
//!
//! let nodes = vec![
//!     Node::depot("DC Central", 24.8070, -107.3900),
//!     Node::store("Store 1", 24.8211, -107.4101),
//!     Node::store("Store 2", 24.7905, -107.3703),
//!     Node::store("Store 3", 24.8302, -107.3655),
//! ];
//! let distances = DistanceMatrix::from_nodes(&nodes)?;
//! let initial = nearest_neighbor(&nodes, 0, &distances)?;
//!
//! let config = SaConfig::default()
//!     .with_initial_temperature(1_000.0)
//!     .with_min_temperature(0.01)
//!     .with_cooling_rate(0.99)
//!     .with_seed(42);
//! let result = Annealer::new(&nodes, &distances, config)?.run(&initial)?;
//!
//! println!("{:.2} km over {} route(s)", result.best_cost, result.best.num_routes());
//! for path in result.best.to_id_paths(&nodes) {
//!     println!("{}", path.join(" -> "));
//! }
//! # Ok::<(), vrp_anneal::Error>(())
//! ```

pub mod construct;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod neighborhood;
pub mod sa;

pub use error::{Error, Result};
