//! Grouping modules.
//!
//! This module partitions the roster by manager and computes
//! small summary statistics over the result.

pub mod grouper;

pub use grouper::*;
