//! Day 4: Camp Cleanup.

use crate::error::PuzzleError;
use crate::models::{Answer, Part, PuzzleId};
use crate::puzzles::Puzzle;
use std::ops::RangeInclusive;

/// A section assignment, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignment(RangeInclusive<u32>);

impl Assignment {
    fn parse(line_no: usize, encoded: &str) -> Result<Self, PuzzleError> {
        let invalid = || PuzzleError::parse(line_no, format!("invalid range '{}'", encoded));

        let (start, end) = encoded.split_once('-').ok_or_else(invalid)?;
        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let end: u32 = end.trim().parse().map_err(|_| invalid())?;
        if start > end {
            return Err(invalid());
        }

        Ok(Self(start..=end))
    }

    fn fully_contains(&self, other: &Assignment) -> bool {
        self.0.start() <= other.0.start() && self.0.end() >= other.0.end()
    }

    fn overlaps(&self, other: &Assignment) -> bool {
        self.0.start() <= other.0.end() && other.0.start() <= self.0.end()
    }
}

fn parse_pair(line_no: usize, line: &str) -> Result<(Assignment, Assignment), PuzzleError> {
    let (a, b) = line.split_once(',').ok_or_else(|| {
        PuzzleError::parse(line_no, format!("expected 'a-b,c-d', got '{}'", line))
    })?;
    Ok((Assignment::parse(line_no, a)?, Assignment::parse(line_no, b)?))
}

pub struct CampCleanup;

impl Puzzle for CampCleanup {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2022, 4)
    }

    fn title(&self) -> &'static str {
        "Camp Cleanup"
    }

    fn solve(&self, part: Part, lines: &[String]) -> Result<Answer, PuzzleError> {
        let mut count = 0;

        for (idx, line) in lines.iter().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (a, b) = parse_pair(idx + 1, line)?;
            let matched = match part {
                Part::One => a.fully_contains(&b) || b.fully_contains(&a),
                Part::Two => a.overlaps(&b),
            };
            if matched {
                count += 1;
            }
        }

        Ok(count)
    }
}
