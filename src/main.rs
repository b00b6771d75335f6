//! Advent Solver - line-oriented Advent of Code puzzle solvers
//!
//! Reads a puzzle input and prints the answers for the selected parts.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (bad arguments, missing input, malformed input, etc.)

use advent_solver::cli::{Args, OutputFormat};
use advent_solver::config::{Config, CONFIG_FILE_NAME};
use advent_solver::input::LineSource;
use advent_solver::models::{PuzzleInfo, Report};
use advent_solver::{puzzles, report};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config and --list early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }
    if args.list {
        handle_list();
        return Ok(());
    }

    // Load configuration before logging so its verbosity applies
    let (config, config_origin) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&args, &config);

    debug!("Arguments: {:?}", args);
    match config_origin {
        Some(path) => info!("Loaded config from {}", path),
        None => debug!("No config file found, using defaults"),
    }

    if let Err(e) = run(&args, &config) {
        error!("Solve failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .advent.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Handle --list: print every registered puzzle.
fn handle_list() {
    for puzzle in puzzles::registry() {
        println!("{}  {}", puzzle.id(), puzzle.title());
    }
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so stdout only carries the answers. `RUST_LOG`
/// directives take precedence over the flag-derived level.
fn init_logging(args: &Args, config: &Config) {
    let level = if config.general.verbose && !args.quiet {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load configuration from the explicit path, the working directory, or defaults.
///
/// Also returns where the configuration came from, if anywhere.
fn load_config(args: &Args) -> Result<(Config, Option<String>)> {
    let (mut config, origin) = if let Some(ref config_path) = args.config {
        (
            Config::load(config_path)?,
            Some(config_path.display().to_string()),
        )
    } else {
        match Config::load_default()? {
            Some(config) => (config, Some(CONFIG_FILE_NAME.to_string())),
            None => (Config::default(), None),
        }
    };

    config.merge_with_args(args);
    Ok((config, origin))
}

/// Solve the selected puzzle and write the answers.
fn run(args: &Args, config: &Config) -> Result<()> {
    let start_time = Instant::now();

    let id = args.puzzle_id().context("A puzzle day is required (--day)")?;
    let puzzle = puzzles::find(id).with_context(|| format!("No solver available for {}", id))?;

    let source = match args.input {
        Some(ref input) => LineSource::from_arg(input),
        None => LineSource::named(&config.input.dir, id),
    };
    info!("Reading input from {}", source);

    let lines = source.read_lines()?;
    let solutions = puzzles::solve_all(puzzle.as_ref(), &lines, &args.parts())
        .with_context(|| format!("Failed to solve {} from {}", id, source))?;

    let report = Report {
        puzzle: PuzzleInfo {
            year: id.year,
            day: id.day,
            title: puzzle.title().to_string(),
        },
        input: source.to_string(),
        line_count: lines.len(),
        solutions,
        solved_at: Utc::now(),
        duration_ms: start_time.elapsed().as_secs_f64() * 1000.0,
    };

    let output = match config.output.format {
        OutputFormat::Text => report::generate_text_report(&report),
        OutputFormat::Markdown => report::generate_markdown_report(&report),
        OutputFormat::Json => report::generate_json_report(&report)?,
    };

    report::write_output(&output, args.output.as_deref())?;

    if let Some(ref path) = args.output {
        info!("Answers written to {}", path.display());
    }
    debug!("Finished in {:.3}ms", report.duration_ms);

    Ok(())
}
