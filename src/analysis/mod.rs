//! Analysis modules.
//!
//! Shared aggregation routines used by the puzzle solvers.

pub mod aggregator;

pub use aggregator::*;
