//! Random constructive heuristic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::models::{Node, Route, Solution};

/// Constructs an initial solution by shuffling all stores uniformly at
/// random into a single depot-bounded route.
///
/// Draws from the injected RNG, so a seeded generator makes construction
/// reproducible. Fails with the same configuration errors as
/// [`nearest_neighbor`](super::nearest_neighbor).
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use vrp_anneal::models::Node;
/// use vrp_anneal::construct::random_solution;
///
/// let nodes = vec![
///     Node::depot("D", 0.0, 0.0),
///     Node::store("A", 0.0, 1.0),
///     Node::store("B", 0.0, 2.0),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let sol = random_solution(&nodes, 0, &mut rng).unwrap();
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_stops(), 2);
/// ```
pub fn random_solution<R: Rng>(nodes: &[Node], depot: usize, rng: &mut R) -> Result<Solution> {
    let mut stores = super::store_indices(nodes, depot)?;
    stores.shuffle(rng);
    Ok(Solution::with_routes(depot, vec![Route::from_stops(stores)]))
}
