//! Solution report generation.
//!
//! Renders a [`Report`] as plain text (one answer per line), a small
//! Markdown summary, or pretty-printed JSON.

use crate::models::Report;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Plain text: one `Part N: answer` line per solved part.
pub fn generate_text_report(report: &Report) -> String {
    let mut output = String::new();

    for solution in &report.solutions {
        output.push_str(&format!("{}: {}\n", solution.part, solution.answer));
    }

    output
}

/// Markdown summary with puzzle details and an answer table.
pub fn generate_markdown_report(report: &Report) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# {} Day {}: {}\n\n",
        report.puzzle.year, report.puzzle.day, report.puzzle.title
    ));

    output.push_str(&format!("- **Input:** `{}`\n", report.input));
    output.push_str(&format!("- **Lines:** {}\n", report.line_count));
    output.push_str(&format!(
        "- **Solved At:** {}\n",
        report.solved_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("- **Duration:** {:.3}ms\n\n", report.duration_ms));

    output.push_str("| Part | Answer |\n");
    output.push_str("|:---:|---:|\n");
    for solution in &report.solutions {
        output.push_str(&format!(
            "| {} | {} |\n",
            solution.part.number(),
            solution.answer
        ));
    }

    output
}

/// Generate a JSON report.
pub fn generate_json_report(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Write rendered report content to a file, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            file.write_all(content.as_bytes())?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                handle.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}
