//! Solvers for the 2022 event.

mod day01;
mod day02;
mod day04;

pub use day01::CalorieCounting;
pub use day02::RockPaperScissors;
pub use day04::CampCleanup;
