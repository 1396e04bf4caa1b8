//! Random games and repeated-trial statistics

pub mod constants;
mod draw;
mod errors;
mod stats;

pub use draw::{Draw, DrawConfig, draw};
pub use errors::{DrawError, GameError};
pub use stats::{TrialStats, run_trials};

#[cfg(test)]
mod tests;
