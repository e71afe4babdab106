//! Great-circle distances and the pairwise distance matrix.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
