//! Puzzle input acquisition.
//!
//! A [`LineSource`] is either a file on disk or standard input. Named
//! inputs are resolved inside an inputs directory laid out as
//! `<dir>/<year>/dayDD.txt`.

use crate::error::InputError;
use crate::models::PuzzleId;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where puzzle input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSource {
    File(PathBuf),
    Stdin,
}

impl LineSource {
    /// Interpret a CLI value: `-` means stdin, anything else is a path.
    pub fn from_arg(value: &Path) -> Self {
        if value.as_os_str() == "-" {
            LineSource::Stdin
        } else {
            LineSource::File(value.to_path_buf())
        }
    }

    /// The conventional input file for a puzzle inside `dir`.
    pub fn named(dir: &Path, id: PuzzleId) -> Self {
        LineSource::File(resolve_named(dir, id))
    }

    /// Open the source for buffered line reading.
    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        match self {
            LineSource::File(path) => {
                if !path.is_file() {
                    return Err(InputError::NotFound { path: path.clone() });
                }
                let file = File::open(path).map_err(|source| InputError::Read {
                    origin: self.to_string(),
                    source,
                })?;
                debug!("Opened input file {}", path.display());
                Ok(Box::new(BufReader::new(file)))
            }
            LineSource::Stdin => {
                debug!("Reading input from stdin");
                Ok(Box::new(io::stdin().lock()))
            }
        }
    }

    /// Read every line of the source, once, in order.
    pub fn read_lines(&self) -> Result<Vec<String>, InputError> {
        let reader = self.open()?;
        let lines = reader
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|source| InputError::Read {
                origin: self.to_string(),
                source,
            })?;
        debug!("Read {} lines from {}", lines.len(), self);
        Ok(lines)
    }
}

impl fmt::Display for LineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSource::File(path) => write!(f, "{}", path.display()),
            LineSource::Stdin => write!(f, "stdin"),
        }
    }
}

/// Path of the named input for `id` under `dir`.
pub fn resolve_named(dir: &Path, id: PuzzleId) -> PathBuf {
    dir.join(id.year.to_string())
        .join(format!("day{:02}.txt", id.day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(LineSource::from_arg(Path::new("-")), LineSource::Stdin);
        assert_eq!(
            LineSource::from_arg(Path::new("in.txt")),
            LineSource::File(PathBuf::from("in.txt"))
        );
    }

    #[test]
    fn test_resolve_named() {
        let path = resolve_named(Path::new("inputs"), PuzzleId::new(2022, 4));
        assert_eq!(path, Path::new("inputs").join("2022").join("day04.txt"));
    }

    #[test]
    fn test_read_lines_from_file() {
        let dir = TempDir::new().unwrap();
        let year_dir = dir.path().join("2022");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day01.txt"), "1\r\n2\n\n3").unwrap();

        let source = LineSource::named(dir.path(), PuzzleId::new(2022, 1));
        let lines = source.read_lines().unwrap();
        assert_eq!(lines, vec!["1", "2", "", "3"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = LineSource::File(dir.path().join("nope.txt"));
        assert!(matches!(
            source.read_lines(),
            Err(InputError::NotFound { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineSource::Stdin.to_string(), "stdin");
    }
}
