//! Roster modules.
//!
//! This module provides the embedded roster and the optional
//! file-based override.

pub mod loader;

pub use loader::{embedded, load_from_file};
