//! Rendering modules.
//!
//! This module serializes the grouped roster to display text, assembles
//! the page fragment, and writes it through an output sink.

pub mod page;
pub mod sink;

pub use page::*;
pub use sink::*;
