mod closest;
pub mod constants;
mod core;
mod errors;
mod reducer;

pub use core::{ExpressionSolver, SolverConfig};
pub use errors::SolverError;
pub use reducer::reduce;
