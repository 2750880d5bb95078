//! Mathematical utilities for the configurator core

/// Swappable random number source for stochastic selectors
pub mod random;

pub use random::{RandomSource, SeededRandom};
