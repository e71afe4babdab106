//! Cost evaluation and solution validation.

mod cost;
mod validate;

pub use cost::CostEvaluator;
pub use validate::validate_solution;
