//! Day 1: Calorie Counting.
//!
//! Each elf's inventory is a run of calorie counts; inventories are
//! separated by blank lines.

use crate::analysis::{group_sums, max_group, top_k_sum};
use crate::error::PuzzleError;
use crate::models::{Answer, Part, PuzzleId};
use crate::puzzles::Puzzle;

/// How many of the best-stocked elves part two totals up.
const TOP_ELVES: usize = 3;

pub struct CalorieCounting;

impl Puzzle for CalorieCounting {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2022, 1)
    }

    fn title(&self) -> &'static str {
        "Calorie Counting"
    }

    fn solve(&self, part: Part, lines: &[String]) -> Result<Answer, PuzzleError> {
        let calories = group_sums(lines)?;

        let answer = match part {
            Part::One => max_group(&calories)?,
            Part::Two => top_k_sum(&calories, TOP_ELVES)?,
        };
        Ok(answer)
    }
}
