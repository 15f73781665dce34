//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for table resolution:
//! - Recognized tag, attribute and style names
//! - Compiled content patterns

pub mod constants;
pub mod patterns;

// Re-export commonly used items
pub use constants::{CELL_TAGS, DEFAULT_LINK_STYLE, LINE_BREAK_PLACEHOLDER};
pub use patterns::{expand_line_breaks, is_double, remove_commas, DOUBLE_PATTERN};
