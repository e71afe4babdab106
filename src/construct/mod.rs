//! Initial-solution builders.
//!
//! - [`nearest_neighbor`] — greedy construction from the depot
//! - [`random_solution`] — uniform shuffle of all stores into one route

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor;
pub use random::random_solution;

use crate::error::{Error, Result};
use crate::models::Node;

/// Checks the depot choice and collects store indices.
///
/// The dataset may contain several depot-tagged nodes; only the one
/// passed as `depot` anchors the routes, and every depot-tagged node is
/// excluded from the store set.
pub(crate) fn store_indices(nodes: &[Node], depot: usize) -> Result<Vec<usize>> {
    let depot_node = nodes.get(depot).ok_or(Error::NodeOutOfRange {
        index: depot,
        len: nodes.len(),
    })?;
    if !depot_node.is_depot() {
        return Err(Error::NotDepot(depot_node.id().to_string()));
    }

    let stores: Vec<usize> = nodes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.is_store())
        .map(|(i, _)| i)
        .collect();
    if stores.is_empty() {
        return Err(Error::NoStores);
    }
    Ok(stores)
}
