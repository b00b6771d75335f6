//! Error types for the solver library.
//!
//! The binary wraps these in `anyhow` at the edges; inside the library
//! every failure is one of the enums below.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while grouping lines and reducing the group sums.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("line {line}: '{content}' is not a non-negative integer")]
    Parse { line: usize, content: String },

    #[error("line {line}: group sum overflowed")]
    Overflow { line: usize },

    #[error("input contains no groups")]
    NoGroups,

    #[error("requested the top {requested} groups but only {available} exist")]
    NotEnoughGroups { requested: usize, available: usize },

    #[error("failed to read line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Failures raised by an individual puzzle solver.
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl PuzzleError {
    /// Shorthand for a malformed-line error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Failures while acquiring puzzle input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = AggregateError::Parse {
            line: 4,
            content: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "line 4: 'abc' is not a non-negative integer"
        );
    }

    #[test]
    fn test_aggregate_error_is_transparent() {
        let err: PuzzleError = AggregateError::NoGroups.into();
        assert_eq!(err.to_string(), "input contains no groups");
    }
}
