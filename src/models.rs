//! Data models for the puzzle solvers.
//!
//! This module contains the core data structures shared by the solvers,
//! the report generator and the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which half of a puzzle to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in order.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    pub fn number(&self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        part.number()
    }
}

impl TryFrom<u8> for Part {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(format!("puzzle part must be 1 or 2, got {}", other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part {}", self.number())
    }
}

/// Identifies a puzzle by event year and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PuzzleId {
    pub year: u16,
    pub day: u8,
}

impl PuzzleId {
    pub const fn new(year: u16, day: u8) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {:02}", self.year, self.day)
    }
}

/// A numeric puzzle answer.
pub type Answer = u64;

/// The answer to one part of a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub part: Part,
    pub answer: Answer,
}

/// Puzzle details included in a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    pub title: String,
}

/// The result of a solver run, as written by the report generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub puzzle: PuzzleInfo,
    /// Where the input came from (file path or `stdin`).
    pub input: String,
    /// Number of input lines consumed.
    pub line_count: usize,
    pub solutions: Vec<Solution>,
    pub solved_at: DateTime<Utc>,
    pub duration_ms: f64,
}
