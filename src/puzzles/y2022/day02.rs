//! Day 2: Rock Paper Scissors.
//!
//! Each line of the strategy guide is `<opponent> <code>`. In part one
//! the code is our shape; in part two it is the outcome we need.

use crate::error::PuzzleError;
use crate::models::{Answer, Part, PuzzleId};
use crate::puzzles::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> Answer {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one.
    fn loses_to(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }

    fn play(self, opponent: Shape) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn score(self) -> Answer {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape to throw against `opponent` to get this outcome.
    fn response_to(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Loss => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.loses_to(),
        }
    }
}

fn single_char(column: &str) -> Option<char> {
    let mut chars = column.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Split a round into its two single-letter columns.
fn parse_round(line_no: usize, line: &str) -> Result<(char, char), PuzzleError> {
    let mut columns = line.split_whitespace().map(single_char);
    match (columns.next(), columns.next(), columns.next()) {
        (Some(Some(a)), Some(Some(b)), None) => Ok((a, b)),
        _ => Err(PuzzleError::parse(
            line_no,
            format!("expected '<A|B|C> <X|Y|Z>', got '{}'", line),
        )),
    }
}

fn opponent_shape(line_no: usize, code: char) -> Result<Shape, PuzzleError> {
    match code {
        'A' => Ok(Shape::Rock),
        'B' => Ok(Shape::Paper),
        'C' => Ok(Shape::Scissors),
        other => Err(PuzzleError::parse(
            line_no,
            format!("unknown opponent move '{}'", other),
        )),
    }
}

fn own_shape(line_no: usize, code: char) -> Result<Shape, PuzzleError> {
    match code {
        'X' => Ok(Shape::Rock),
        'Y' => Ok(Shape::Paper),
        'Z' => Ok(Shape::Scissors),
        other => Err(PuzzleError::parse(
            line_no,
            format!("unknown response '{}'", other),
        )),
    }
}

fn desired_outcome(line_no: usize, code: char) -> Result<Outcome, PuzzleError> {
    match code {
        'X' => Ok(Outcome::Loss),
        'Y' => Ok(Outcome::Draw),
        'Z' => Ok(Outcome::Win),
        other => Err(PuzzleError::parse(
            line_no,
            format!("unknown outcome '{}'", other),
        )),
    }
}

fn round_score(part: Part, line_no: usize, line: &str) -> Result<Answer, PuzzleError> {
    let (a, b) = parse_round(line_no, line)?;
    let opponent = opponent_shape(line_no, a)?;

    let ours = match part {
        Part::One => own_shape(line_no, b)?,
        Part::Two => desired_outcome(line_no, b)?.response_to(opponent),
    };

    Ok(ours.score() + ours.play(opponent).score())
}

pub struct RockPaperScissors;

impl Puzzle for RockPaperScissors {
    fn id(&self) -> PuzzleId {
        PuzzleId::new(2022, 2)
    }

    fn title(&self) -> &'static str {
        "Rock Paper Scissors"
    }

    fn solve(&self, part: Part, lines: &[String]) -> Result<Answer, PuzzleError> {
        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_no, line)| round_score(part, line_no, line))
            .sum()
    }
}
