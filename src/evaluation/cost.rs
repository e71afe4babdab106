//! Total-distance objective.

use crate::distance::DistanceMatrix;
use crate::models::{Route, Solution};

/// Computes the total travel distance of routes and solutions from a
/// distance matrix.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::{Node, Route, Solution};
/// use vrp_anneal::distance::DistanceMatrix;
/// use vrp_anneal::evaluation::CostEvaluator;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::store("A", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes).unwrap();
/// let sol = Solution::with_routes(0, vec![Route::from_stops(vec![1])]);
///
/// let eval = CostEvaluator::new(&dm);
/// // Out and back: twice the depot-to-A distance.
/// let expected = 2.0 * dm.get(0, 1);
/// assert!((eval.solution_cost(&sol) - expected).abs() < 1e-9);
/// ```
pub struct CostEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> CostEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Distance of one route: `depot → stops… → depot`.
    ///
    /// An empty route costs nothing.
    pub fn route_cost(&self, route: &Route, depot: usize) -> f64 {
        let stops = route.stops();
        if stops.is_empty() {
            return 0.0;
        }
        let mut cost = self.distances.get(depot, stops[0]);
        for pair in stops.windows(2) {
            cost += self.distances.get(pair[0], pair[1]);
        }
        cost += self.distances.get(stops[stops.len() - 1], depot);
        cost
    }

    /// Total distance across all routes of a solution.
    pub fn solution_cost(&self, solution: &Solution) -> f64 {
        let depot = solution.depot();
        solution
            .routes()
            .iter()
            .map(|r| self.route_cost(r, depot))
            .sum()
    }
}
