//! Solution type.

use serde::{Deserialize, Serialize};

use super::{Node, Route};

/// A complete solution: a set of routes sharing one depot.
///
/// Solutions are value-like. `Clone` produces a structurally independent
/// deep copy, so promoting a solution to "best" or deriving a neighbor
/// from it can never alias the original's routes.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::{Route, Solution};
///
/// let mut sol = Solution::new(0);
/// sol.add_route(Route::from_stops(vec![1, 2]));
/// sol.add_route(Route::from_stops(vec![3]));
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_stops(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    depot: usize,
    routes: Vec<Route>,
}

impl Solution {
    /// Creates an empty solution anchored at the given depot index.
    pub fn new(depot: usize) -> Self {
        Self {
            depot,
            routes: Vec::new(),
        }
    }

    /// Creates a solution from pre-built routes.
    pub fn with_routes(depot: usize, routes: Vec<Route>) -> Self {
        Self { depot, routes }
    }

    /// Depot index shared by every route.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Adds a route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Mutable access to the routes (used by the move operators).
    pub fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of store visits across all routes.
    pub fn num_stops(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// All interior stop indices, in route order.
    pub fn stop_indices(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.stops().iter().copied())
            .collect()
    }

    /// Renders the output contract: each route as an ordered list of node
    /// identities starting and ending at the depot identity.
    ///
    /// # Panics
    ///
    /// Panics if a stop index falls outside `nodes` (a solution is only
    /// meaningful against the node list it was built from).
    pub fn to_id_paths(&self, nodes: &[Node]) -> Vec<Vec<String>> {
        self.routes
            .iter()
            .map(|r| {
                r.full_path(self.depot)
                    .into_iter()
                    .map(|i| nodes[i].id().to_string())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new(0);
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_stops(), 0);
        assert!(sol.stop_indices().is_empty());
    }

    #[test]
    fn test_solution_stop_indices() {
        let sol = Solution::with_routes(
            0,
            vec![Route::from_stops(vec![2, 1]), Route::from_stops(vec![3])],
        );
        assert_eq!(sol.stop_indices(), vec![2, 1, 3]);
        assert_eq!(sol.num_stops(), 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Solution::with_routes(0, vec![Route::from_stops(vec![1, 2])]);
        let mut copy = original.clone();
        copy.routes_mut()[0].swap(0, 1);
        assert_eq!(original.routes()[0].stops(), &[1, 2]);
        assert_eq!(copy.routes()[0].stops(), &[2, 1]);
    }

    #[test]
    fn test_to_id_paths() {
        let nodes = vec![
            Node::depot("D", 0.0, 0.0),
            Node::store("A", 0.0, 1.0),
            Node::store("B", 0.0, 2.0),
        ];
        let sol = Solution::with_routes(0, vec![Route::from_stops(vec![2, 1])]);
        assert_eq!(sol.to_id_paths(&nodes), vec![vec!["D", "B", "A", "D"]]);
    }
}
