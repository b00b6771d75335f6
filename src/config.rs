//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.advent.toml` files. Only ambient settings live here: where named
//! inputs are found, how answers are printed, and log verbosity.

use crate::cli::{Args, OutputFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".advent.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Input settings.
    #[serde(default)]
    pub input: InputConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Where puzzle inputs are read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory containing `<year>/dayDD.txt` input files.
    #[serde(default = "default_inputs_dir")]
    pub dir: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_inputs_dir(),
        }
    }
}

fn default_inputs_dir() -> PathBuf {
    PathBuf::from("inputs")
}

/// How answers are rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.advent.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &Args) {
        if let Some(ref dir) = args.inputs_dir {
            self.input.dir = dir.clone();
        }

        if let Some(format) = args.format {
            self.output.format = format;
        }

        if args.verbose {
            self.general.verbose = true;
        }
        if args.quiet {
            self.general.verbose = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert_eq!(config.input.dir, PathBuf::from("inputs"));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
verbose = true

[input]
dir = "puzzle-inputs"

[output]
format = "json"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.input.dir, PathBuf::from("puzzle-inputs"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"markdown\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.input.dir, PathBuf::from("inputs"));
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;

        let args = Args::try_parse_from(["advent", "--day", "1", "--inputs-dir", "data"]).unwrap();
        config.merge_with_args(&args);

        assert_eq!(config.input.dir, PathBuf::from("data"));
        // Not given on the command line, so the file value stays.
        assert_eq!(config.output.format, OutputFormat::Markdown);

        let args = Args::try_parse_from(["advent", "--day", "1", "-f", "json", "-v"]).unwrap();
        config.merge_with_args(&args);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.general.verbose);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[input]\ndir = \"elsewhere\"\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.input.dir, PathBuf::from("elsewhere"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = \"xml\"\n").unwrap();
        assert!(Config::load_from_dir(dir.path()).is_err());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[output]"));

        let round_trip: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(round_trip.output.format, OutputFormat::Text);
    }
}
