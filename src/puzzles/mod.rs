//! Puzzle solvers and the registry used to look them up.
//!
//! Every solver implements [`Puzzle`]; the CLI picks one by year and day
//! via [`find`] and runs the requested parts through [`solve_all`].

pub mod y2022;

use crate::error::PuzzleError;
use crate::models::{Answer, Part, PuzzleId, Solution};
use tracing::{debug, info};

/// A line-oriented puzzle with two numeric parts.
pub trait Puzzle {
    /// Year and day of the puzzle.
    fn id(&self) -> PuzzleId;

    /// Human-readable puzzle title.
    fn title(&self) -> &'static str;

    /// Solve one part for the given input lines.
    fn solve(&self, part: Part, lines: &[String]) -> Result<Answer, PuzzleError>;
}

/// All available solvers, ordered by id.
pub fn registry() -> Vec<Box<dyn Puzzle>> {
    let mut puzzles: Vec<Box<dyn Puzzle>> = vec![
        Box::new(y2022::CalorieCounting),
        Box::new(y2022::RockPaperScissors),
        Box::new(y2022::CampCleanup),
    ];
    puzzles.sort_by_key(|p| p.id());
    puzzles
}

/// Look up the solver for a puzzle.
pub fn find(id: PuzzleId) -> Option<Box<dyn Puzzle>> {
    registry().into_iter().find(|p| p.id() == id)
}

/// Solve the requested parts in order, stopping at the first failure.
pub fn solve_all(
    puzzle: &dyn Puzzle,
    lines: &[String],
    parts: &[Part],
) -> Result<Vec<Solution>, PuzzleError> {
    info!("Solving {} ({})", puzzle.id(), puzzle.title());
    debug!("Input has {} lines", lines.len());

    parts
        .iter()
        .map(|&part| {
            let answer = puzzle.solve(part, lines)?;
            debug!("{}: {}", part, answer);
            Ok(Solution { part, answer })
        })
        .collect()
}
