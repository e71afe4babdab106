//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the
//! nearest unvisited store. A route is closed back to the depot when no
//! unvisited candidate remains; with no capacity cut-off the first route
//! drains the whole store set, so a single route results.
//!
//! # Complexity
//!
//! O(n²) where n = number of stores.

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Node, Route, Solution};

/// Constructs an initial solution with the nearest-neighbor heuristic.
///
/// Ties on minimal distance are broken by the first store in node-list
/// order. Fails with a configuration error if `depot` does not index a
/// depot-tagged node or the store set is empty.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::Node;
/// use vrp_anneal::distance::DistanceMatrix;
/// use vrp_anneal::construct::nearest_neighbor;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::store("B", 0.0, 2.0),
///     Node::store("A", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let sol = nearest_neighbor(&nodes, 0, &dm).unwrap();
/// // Visits A (index 2) before B (index 1).
/// assert_eq!(sol.routes()[0].stops(), &[2, 1]);
/// ```
pub fn nearest_neighbor(
    nodes: &[Node],
    depot: usize,
    distances: &DistanceMatrix,
) -> Result<Solution> {
    let mut unvisited = super::store_indices(nodes, depot)?;
    let mut solution = Solution::new(depot);

    while !unvisited.is_empty() {
        let mut route = Route::new();
        let mut current = depot;

        while let Some(pos) = nearest_position(current, &unvisited, distances) {
            let next = unvisited.remove(pos);
            route.push(next);
            current = next;
        }

        solution.add_route(route);
    }

    debug!(
        routes = solution.num_routes(),
        stops = solution.num_stops(),
        "nearest-neighbor construction complete"
    );
    Ok(solution)
}

/// Position (within `candidates`) of the store nearest to `from`.
///
/// Scans in order with a strict `<`, so the first candidate wins ties.
fn nearest_position(from: usize, candidates: &[usize], distances: &DistanceMatrix) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (pos, &node) in candidates.iter().enumerate() {
        let d = distances.get(from, node);
        if best.is_none() || d < best.expect("checked is_none").1 {
            best = Some((pos, d));
        }
    }
    best.map(|(pos, _)| pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::evaluation::{validate_solution, CostEvaluator};

    fn collinear() -> (Vec<Node>, DistanceMatrix) {
        // Depot plus four stores spaced one degree apart along the equator.
        let nodes = vec![
            Node::depot("D", 0.0, 0.0),
            Node::store("A", 0.0, 1.0),
            Node::store("B", 0.0, 2.0),
            Node::store("C", 0.0, 3.0),
            Node::store("E", 0.0, 4.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes).expect("valid");
        (nodes, dm)
    }

    #[test]
    fn test_nn_visits_in_line_order() {
        let (nodes, dm) = collinear();
        let sol = nearest_neighbor(&nodes, 0, &dm).expect("valid");
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].stops(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_nn_collinear_cost_is_eight_units() {
        let (nodes, dm) = collinear();
        let sol = nearest_neighbor(&nodes, 0, &dm).expect("valid");
        // Out 4 units, back 4 units, one unit = 1 degree along the equator.
        let unit = dm.get(0, 1);
        let cost = CostEvaluator::new(&dm).solution_cost(&sol);
        assert!((cost - 8.0 * unit).abs() < 1e-6);
    }

    #[test]
    fn test_nn_covers_all_stores() {
        let (nodes, dm) = collinear();
        let sol = nearest_neighbor(&nodes, 0, &dm).expect("valid");
        assert!(validate_solution(&nodes, &sol).is_ok());
    }

    #[test]
    fn test_nn_tie_break_first_wins() {
        // A and B are equidistant from the depot; A comes first in the list.
        let nodes = vec![
            Node::depot("D", 0.0, 0.0),
            Node::store("A", 0.0, 1.0),
            Node::store("B", 0.0, -1.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes).expect("valid");
        let sol = nearest_neighbor(&nodes, 0, &dm).expect("valid");
        assert_eq!(sol.routes()[0].stops()[0], 1);
    }

    #[test]
    fn test_nn_missing_depot_role() {
        let nodes = vec![Node::store("A", 0.0, 0.0), Node::store("B", 0.0, 1.0)];
        let dm = DistanceMatrix::from_nodes(&nodes).expect("valid");
        assert!(matches!(
            nearest_neighbor(&nodes, 0, &dm),
            Err(Error::NotDepot(_))
        ));
    }

    #[test]
    fn test_nn_no_stores() {
        let nodes = vec![Node::depot("D", 0.0, 0.0)];
        let dm = DistanceMatrix::from_nodes(&nodes).expect("valid");
        assert!(matches!(
            nearest_neighbor(&nodes, 0, &dm),
            Err(Error::NoStores)
        ));
    }

    #[test]
    fn test_nn_ignores_other_depots() {
        let nodes = vec![
            Node::depot("D1", 0.0, 0.0),
            Node::depot("D2", 0.0, 0.5),
            Node::store("A", 0.0, 1.0),
        ];
        let dm = DistanceMatrix::from_nodes(&nodes).expect("valid");
        let sol = nearest_neighbor(&nodes, 0, &dm).expect("valid");
        assert_eq!(sol.stop_indices(), vec![2]);
    }
}
