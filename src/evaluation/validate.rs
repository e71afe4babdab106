//! Defensive solution validation.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Node, Solution};

/// Checks the store-coverage invariant: the interior stops across all
/// routes must equal the full store set with no repeats and no omissions,
/// and no depot-tagged node may appear inside a route.
///
/// A failure here indicates a builder or move-operator bug, not a runtime
/// condition; callers surface it immediately.
pub fn validate_solution(nodes: &[Node], solution: &Solution) -> Result<()> {
    let depot = solution.depot();
    let depot_node = nodes.get(depot).ok_or(Error::NodeOutOfRange {
        index: depot,
        len: nodes.len(),
    })?;
    if !depot_node.is_depot() {
        return Err(Error::NotDepot(depot_node.id().to_string()));
    }

    let mut seen: HashMap<usize, usize> = HashMap::new();
    for route in solution.routes() {
        for &stop in route.stops() {
            let node = nodes.get(stop).ok_or(Error::NodeOutOfRange {
                index: stop,
                len: nodes.len(),
            })?;
            if node.is_depot() {
                return Err(Error::DepotInRoute(node.id().to_string()));
            }
            *seen.entry(stop).or_insert(0) += 1;
        }
    }

    for (i, node) in nodes.iter().enumerate() {
        if !node.is_store() {
            continue;
        }
        match seen.remove(&i) {
            Some(1) => {}
            Some(n) => {
                return Err(Error::CoverageViolation(format!(
                    "store '{}' visited {n} times",
                    node.id()
                )))
            }
            None => {
                return Err(Error::CoverageViolation(format!(
                    "store '{}' never visited",
                    node.id()
                )))
            }
        }
    }

    Ok(())
}
