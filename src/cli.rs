//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::{Part, PuzzleId};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Advent Solver - line-oriented Advent of Code puzzle solvers
///
/// Reads a puzzle input (a file, stdin, or the named input in the
/// configured inputs directory) and prints the answers.
///
/// Examples:
///   advent --day 1 --input day01.txt
///   advent --day 1 --part 2 --input - < day01.txt
///   advent --year 2022 --day 4 --format json
///   advent --list
///   advent --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Event year of the puzzle
    #[arg(short, long, default_value = "2022", env = "ADVENT_YEAR")]
    pub year: u16,

    /// Day of the puzzle (1-25)
    #[arg(
        short,
        long,
        value_name = "DAY",
        required_unless_present_any = ["list", "init_config"]
    )]
    pub day: Option<u8>,

    /// Solve only this part (1 or 2); both parts by default
    #[arg(short, long, value_name = "PART", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Input file to read, or `-` for stdin
    ///
    /// If not specified, reads <inputs-dir>/<year>/dayDD.txt
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding named puzzle inputs
    #[arg(long, value_name = "DIR", env = "ADVENT_INPUTS")]
    pub inputs_dir: Option<PathBuf>,

    /// Output format (text, markdown, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the answers to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .advent.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// List the available puzzles and exit
    #[arg(long)]
    pub list: bool,

    /// Generate a default .advent.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the answers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Part N: answer` line per part (default)
    #[default]
    Text,
    /// Markdown summary
    Markdown,
    /// JSON document
    Json,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Nothing else matters for these modes
        if self.init_config || self.list {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        match self.day {
            Some(day) if (1..=25).contains(&day) => {}
            Some(day) => return Err(format!("Day must be between 1 and 25, got {}", day)),
            None => return Err("A puzzle day is required (--day)".to_string()),
        }

        // Validate input file if provided
        if let Some(ref input) = self.input {
            if input.as_os_str() != "-" && !input.is_file() {
                return Err(format!("Input file does not exist: {}", input.display()));
            }
        }

        Ok(())
    }

    /// The puzzle selected by --year and --day.
    pub fn puzzle_id(&self) -> Option<PuzzleId> {
        self.day.map(|day| PuzzleId::new(self.year, day))
    }

    /// The parts to solve, in order.
    pub fn parts(&self) -> Vec<Part> {
        match self.part.map(Part::try_from) {
            Some(Ok(part)) => vec![part],
            _ => Part::ALL.to_vec(),
        }
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
