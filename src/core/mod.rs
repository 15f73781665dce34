//! Core resolution modules
//!
//! This module contains the resolution engine:
//! - `cascade`: style inheritance from table to cell
//! - `content`: cell content classification and rich-text runs
//! - `grid`: span-aware placement of cells on an absolute grid
//! - `options`: caller-facing configuration

pub mod cascade;
pub mod content;
pub mod grid;
pub mod options;

// Re-export main types and functions
pub use cascade::{
    mix_style, parse_declarations, parse_style, StyleCache, StyleCascade, StyleKey,
};
pub use content::{extract_rich_text, infer_type, CellContent, Override};
pub use grid::{
    resolve_table, resolve_tables, resolve_tables_parallel, GridResolver, OccupancyTracker,
};
pub use options::ParseOptions;
