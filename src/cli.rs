//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// Rosterboard - static roster page generator
///
/// Groups a roster of people by their manager and writes the result as
/// pretty-printed JSON into a target element of an HTML page, together
/// with two image references.
///
/// Examples:
///   rosterboard
///   rosterboard --output site/index.html --target app
///   rosterboard --roster ./people.json --dry-run
///   rosterboard --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Hosting HTML document to render into
    ///
    /// Created from a minimal template when it does not exist yet.
    /// Defaults to dist/index.html or [general].output from the config.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Element id of the output region inside the document
    ///
    /// Defaults to "root" or [render].target_id from the config.
    #[arg(short, long, value_name = "ID", env = "ROSTERBOARD_TARGET")]
    pub target: Option<String>,

    /// JSON roster file to use instead of the embedded roster
    #[arg(short, long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Spaces per indentation level in the rendered JSON
    ///
    /// Defaults to 2 or [render].indent from the config.
    #[arg(long, value_name = "NUM")]
    pub indent: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .rosterboard.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the grouped roster to stdout without touching the document
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .rosterboard.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        // Validate target id if provided
        if let Some(ref target) = self.target {
            if target.is_empty() {
                return Err("Target id must not be empty".to_string());
            }
            if target.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
                return Err(format!("Target id contains invalid characters: {}", target));
            }
        }

        // Validate indent if provided
        if let Some(indent) = self.indent {
            if indent > 16 {
                return Err("Indent must be at most 16 spaces".to_string());
            }
        }

        // Validate roster file if provided
        if let Some(ref roster_path) = self.roster {
            if !roster_path.exists() {
                return Err(format!(
                    "Roster file does not exist: {}",
                    roster_path.display()
                ));
            }
            if !roster_path.is_file() {
                return Err(format!(
                    "Roster path is not a file: {}",
                    roster_path.display()
                ));
            }
        }

        Ok(())
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
