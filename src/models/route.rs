//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of store visits assigned to one vehicle.
///
/// Only the interior stops are stored; the depot bound at both ends is
/// held by the owning [`Solution`](super::Solution) and re-attached by
/// [`full_path`](Route::full_path). Keeping the depot out of the stop
/// list makes the "route starts and ends at the depot" invariant hold by
/// construction.
///
/// Stops are indices into the problem's node list.
///
/// # Examples
///
/// ```
/// use vrp_anneal::models::Route;
///
/// let route = Route::from_stops(vec![1, 2, 3]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.full_path(0), vec![0, 1, 2, 3, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { stops: Vec::new() }
    }

    /// Creates a route from an ordered list of store indices.
    pub fn from_stops(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// Ordered interior stop indices.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of interior stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route visits no stores.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Appends a stop.
    pub fn push(&mut self, node: usize) {
        self.stops.push(node);
    }

    /// Exchanges the stops at two interior positions.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stops.swap(i, j);
    }

    /// Removes and returns the stop at an interior position.
    pub fn remove(&mut self, pos: usize) -> usize {
        self.stops.remove(pos)
    }

    /// Inserts a stop before the given interior position.
    pub fn insert(&mut self, pos: usize, node: usize) {
        self.stops.insert(pos, node);
    }

    /// Reverses the stop order over the inclusive interior range `[start, end]`.
    pub fn reverse_segment(&mut self, start: usize, end: usize) {
        self.stops[start..=end].reverse();
    }

    /// The route as node indices bounded by the depot at both ends.
    pub fn full_path(&self, depot: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.stops.len() + 2);
        path.push(depot);
        path.extend_from_slice(&self.stops);
        path.push(depot);
        path
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
