//! Domain model types.
//!
//! Provides the core abstractions: geographic nodes tagged as depot or
//! store, routes as ordered stop sequences bounded by the depot, and
//! solutions as collections of routes sharing one depot.

mod node;
mod route;
mod solution;

pub use node::{Node, NodeRole};
pub use route::Route;
pub use solution::Solution;
