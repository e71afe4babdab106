//! Elementary move operators.

use rand::{Rng, RngCore};

use crate::models::Solution;

/// One elementary neighborhood move.
///
/// An operator checks its own preconditions against the chosen route and
/// mutates the solution only when they hold. Randomness (positions, the
/// relocate target route) is drawn from the injected RNG stream.
pub trait MoveOperator {
    /// Operator name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Applies the move to `solution` at the chosen `route` index.
    ///
    /// Returns `false` without mutating anything if the preconditions do
    /// not hold.
    fn try_apply(&self, solution: &mut Solution, route: usize, rng: &mut dyn RngCore) -> bool;
}

/// Exchanges two distinct stops within the chosen route.
///
/// Requires at least two interior stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntraSwap;

impl MoveOperator for IntraSwap {
    fn name(&self) -> &'static str {
        "intra-swap"
    }

    fn try_apply(&self, solution: &mut Solution, route: usize, rng: &mut dyn RngCore) -> bool {
        let len = solution.routes()[route].len();
        if len < 2 {
            return false;
        }
        let i = rng.random_range(0..len);
        // Draw from the remaining positions so the pair is always distinct.
        let mut j = rng.random_range(0..len - 1);
        if j >= i {
            j += 1;
        }
        solution.routes_mut()[route].swap(i, j);
        true
    }
}

/// Moves one stop from the chosen route into a second route.
///
/// The target route is drawn uniformly and re-rolled until it differs
/// from the source; both routes must be non-empty. The stop is inserted
/// at a random interior position of the target (never after its last
/// stop).
#[derive(Debug, Clone, Copy, Default)]
pub struct InterRelocate;

impl MoveOperator for InterRelocate {
    fn name(&self) -> &'static str {
        "inter-relocate"
    }

    fn try_apply(&self, solution: &mut Solution, route: usize, rng: &mut dyn RngCore) -> bool {
        let num_routes = solution.num_routes();
        if num_routes < 2 {
            return false;
        }

        let mut other = rng.random_range(0..num_routes);
        while other == route {
            other = rng.random_range(0..num_routes);
        }

        let from_len = solution.routes()[route].len();
        let to_len = solution.routes()[other].len();
        if from_len == 0 || to_len == 0 {
            return false;
        }

        let from_pos = rng.random_range(0..from_len);
        let to_pos = rng.random_range(0..to_len);
        let node = solution.routes_mut()[route].remove(from_pos);
        solution.routes_mut()[other].insert(to_pos, node);
        true
    }
}

/// Reverses a random interior sub-range of the chosen route (2-opt style).
///
/// Requires at least three interior stops; the range always spans at
/// least two positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentReverse;

impl MoveOperator for SegmentReverse {
    fn name(&self) -> &'static str {
        "segment-reverse"
    }

    fn try_apply(&self, solution: &mut Solution, route: usize, rng: &mut dyn RngCore) -> bool {
        let len = solution.routes()[route].len();
        if len < 3 {
            return false;
        }
        let start = rng.random_range(0..len - 1);
        let end = rng.random_range(start + 1..len);
        solution.routes_mut()[route].reverse_segment(start, end);
        true
    }
}
