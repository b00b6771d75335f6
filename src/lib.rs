//! Advent Solver - line-oriented Advent of Code puzzle solvers.
//!
//! The library holds the solvers and their shared building blocks; the
//! `advent` binary wires them to the command line.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod puzzles;
pub mod report;

pub use error::{AggregateError, InputError, PuzzleError};
pub use input::LineSource;
pub use models::{Answer, Part, PuzzleId, Solution};
pub use puzzles::{find, registry, solve_all, Puzzle};
