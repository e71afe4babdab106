//! Neighborhood move generation.
//!
//! - [`IntraSwap`] — exchange two stops within one route
//! - [`InterRelocate`] — move a stop into another route
//! - [`SegmentReverse`] — reverse an interior sub-range (2-opt style)
//! - [`NeighborhoodGenerator`] — cascading operator selection

mod generator;
mod moves;

pub use generator::NeighborhoodGenerator;
pub use moves::{InterRelocate, IntraSwap, MoveOperator, SegmentReverse};
