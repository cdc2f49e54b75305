//! Roster acquisition.
//!
//! The roster ships embedded in the binary; a JSON file can override it
//! via the CLI. Either way the result is an ordered `Vec<Person>` that
//! stays constant for the rest of the run.

use crate::models::Person;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// The roster compiled into the binary.
const EMBEDDED_ROSTER: &str = include_str!("people.json");

/// Parse the embedded roster.
pub fn embedded() -> Result<Vec<Person>> {
    parse(EMBEDDED_ROSTER).context("Failed to parse embedded roster")
}

/// Load a roster from a JSON file.
pub fn load_from_file(path: &Path) -> Result<Vec<Person>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse roster file: {}", path.display()))
}

fn parse(content: &str) -> Result<Vec<Person>> {
    let roster: Vec<Person> = serde_json::from_str(content)?;
    debug!("Parsed roster with {} people", roster.len());
    Ok(roster)
}
