//! Grouped line aggregation.
//!
//! Turns a sequence of lines into per-group integer sums, where a group
//! is a run of non-blank lines, and provides the reductions the puzzles
//! ask for over those sums.

use crate::error::AggregateError;
use std::io::BufRead;
use tracing::{debug, trace};

/// Incremental state for grouping lines into sums.
///
/// Feed lines in order with [`GroupAccumulator::push_line`], then call
/// [`GroupAccumulator::finish`]. Repeated, leading and trailing blank
/// lines never produce empty groups; a run summing to zero is still a group.
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    sums: Vec<u64>,
    current: u64,
    in_group: bool,
    line_no: usize,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line.
    pub fn push_line(&mut self, line: &str) -> Result<(), AggregateError> {
        self.line_no += 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.close_group();
            return Ok(());
        }

        let value: u64 = trimmed.parse().map_err(|_| AggregateError::Parse {
            line: self.line_no,
            content: trimmed.to_string(),
        })?;

        self.current = self
            .current
            .checked_add(value)
            .ok_or(AggregateError::Overflow { line: self.line_no })?;
        self.in_group = true;

        Ok(())
    }

    /// Number of lines consumed so far.
    pub fn lines_seen(&self) -> usize {
        self.line_no
    }

    /// Close any open group and return the sums in input order.
    pub fn finish(mut self) -> Vec<u64> {
        self.close_group();
        debug!(
            "Grouped {} lines into {} groups",
            self.line_no,
            self.sums.len()
        );
        self.sums
    }

    fn close_group(&mut self) {
        if self.in_group {
            trace!("Group {} sums to {}", self.sums.len() + 1, self.current);
            self.sums.push(self.current);
            self.current = 0;
            self.in_group = false;
        }
    }
}

/// Compute the per-group sums of a line sequence.
pub fn group_sums<I, S>(lines: I) -> Result<Vec<u64>, AggregateError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = GroupAccumulator::new();
    for line in lines {
        acc.push_line(line.as_ref())?;
    }
    Ok(acc.finish())
}

/// Compute the per-group sums while reading lines from `reader`.
pub fn group_sums_from_reader<R: BufRead>(reader: R) -> Result<Vec<u64>, AggregateError> {
    let mut acc = GroupAccumulator::new();
    for line in reader.lines() {
        let line = line.map_err(|source| AggregateError::Io {
            line: acc.lines_seen() + 1,
            source,
        })?;
        acc.push_line(&line)?;
    }
    Ok(acc.finish())
}

/// The largest group sum.
pub fn max_group(sums: &[u64]) -> Result<u64, AggregateError> {
    sums.iter().copied().max().ok_or(AggregateError::NoGroups)
}

/// Sum of the `k` largest group sums.
pub fn top_k_sum(sums: &[u64], k: usize) -> Result<u64, AggregateError> {
    if k > sums.len() {
        return Err(AggregateError::NotEnoughGroups {
            requested: k,
            available: sums.len(),
        });
    }

    let mut sorted = sums.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    Ok(sorted.iter().take(k).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";

    fn sums_of(text: &str) -> Vec<u64> {
        group_sums(text.lines()).unwrap()
    }

    #[test]
    fn test_example_groups() {
        assert_eq!(sums_of(EXAMPLE), vec![6000, 4000, 11000, 24000, 10000]);
    }

    #[test]
    fn test_example_reductions() {
        let sums = sums_of(EXAMPLE);
        assert_eq!(max_group(&sums).unwrap(), 24000);
        assert_eq!(top_k_sum(&sums, 3).unwrap(), 45000);
    }

    #[test]
    fn test_single_line_without_trailing_newline() {
        let sums = sums_of("42");
        assert_eq!(sums, vec![42]);
        assert_eq!(max_group(&sums).unwrap(), 42);
    }

    #[test]
    fn test_consecutive_blank_lines_do_not_insert_groups() {
        assert_eq!(sums_of("5\n\n\n3"), vec![5, 3]);
    }

    #[test]
    fn test_leading_and_trailing_blank_lines() {
        assert_eq!(sums_of("\n\n1\n2\n\n"), vec![3]);
    }

    #[test]
    fn test_zero_group_is_kept() {
        assert_eq!(sums_of("4\n\n0"), vec![4, 0]);
        assert_eq!(sums_of("0\n0\n\n7\n"), vec![0, 7]);
    }

    #[test]
    fn test_no_blank_lines_gives_one_group() {
        let lines = ["3", "9", "27", "81"];
        assert_eq!(group_sums(lines).unwrap(), vec![120]);
    }

    #[test]
    fn test_group_count_matches_runs() {
        let text = "1\n\n\n2\n3\n\n4\n\n\n\n5\n";
        let runs = text
            .split('\n')
            .collect::<Vec<_>>()
            .split(|l| l.is_empty())
            .filter(|run| !run.is_empty())
            .count();
        assert_eq!(sums_of(text).len(), runs);
        assert_eq!(runs, 4);
    }

    #[test]
    fn test_crlf_and_padding_are_ignored() {
        assert_eq!(sums_of("10\r\n20\r\n\r\n 5 \r\n"), vec![30, 5]);
    }

    #[test]
    fn test_empty_input() {
        let sums = sums_of("");
        assert!(sums.is_empty());
        assert!(matches!(max_group(&sums), Err(AggregateError::NoGroups)));
        assert_eq!(top_k_sum(&sums, 0).unwrap(), 0);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = group_sums("1\n2\n\nabc\n".lines()).unwrap_err();
        match err {
            AggregateError::Parse { line, content } => {
                assert_eq!(line, 4);
                assert_eq!(content, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_negative_values_are_rejected() {
        assert!(matches!(
            group_sums(["-5"]),
            Err(AggregateError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_overflow_is_detected() {
        let max = u64::MAX.to_string();
        let err = group_sums([max.as_str(), "1"]).unwrap_err();
        assert!(matches!(err, AggregateError::Overflow { line: 2 }));
    }

    #[test]
    fn test_max_invariant_under_group_reordering() {
        let forward = sums_of("1\n2\n\n30\n\n4\n4");
        let reversed = sums_of("4\n4\n\n30\n\n1\n2");
        assert_eq!(max_group(&forward).unwrap(), max_group(&reversed).unwrap());
    }

    #[test]
    fn test_top_one_equals_max() {
        let sums = sums_of(EXAMPLE);
        assert_eq!(top_k_sum(&sums, 1).unwrap(), max_group(&sums).unwrap());
    }

    #[test]
    fn test_top_k_is_non_decreasing() {
        let sums = sums_of(EXAMPLE);
        let totals: Vec<u64> = (0..=sums.len())
            .map(|k| top_k_sum(&sums, k).unwrap())
            .collect();
        assert!(totals.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(totals[sums.len()], sums.iter().sum::<u64>());
    }

    #[test]
    fn test_top_k_too_large() {
        let err = top_k_sum(&[1, 2], 3).unwrap_err();
        assert!(matches!(
            err,
            AggregateError::NotEnoughGroups {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_top_k_does_not_reorder_input() {
        let sums = vec![3, 1, 2];
        top_k_sum(&sums, 2).unwrap();
        assert_eq!(sums, vec![3, 1, 2]);
    }

    #[test]
    fn test_from_reader_matches_in_memory() {
        let from_reader = group_sums_from_reader(Cursor::new(EXAMPLE)).unwrap();
        assert_eq!(from_reader, sums_of(EXAMPLE));
    }
}
