mod combinations;

pub use combinations::{Combinations, binomial};

#[cfg(test)]
mod tests;
