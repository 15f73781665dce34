//! # htmlgrid
//!
//! Resolve HTML `<table>` elements into position-exact grids for spreadsheet
//! export.
//!
//! ## Features
//!
//! - **Span Resolution**: `colspan`/`rowspan` mapped onto absolute, collision-free columns
//! - **Style Cascade**: inline styles inherited from table, row group and row down to cells
//! - **Content Typing**: text, numbers, booleans, formulas, links, images, drop-down lists
//! - **Rich Text**: `<span>` runs become character-range font overrides
//! - **Column Widths**: optional width estimation from cell text
//! - **Pluggable DOM**: any tree implementing [`dom::HtmlElement`] can be resolved
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use htmlgrid::{parse_html_tables, ContentType, ParseOptions};
//!
//! let tables = parse_html_tables(
//!     r#"<table>
//!         <tr><td rowspan="2">Region</td><td>42</td></tr>
//!         <tr><td>true</td></tr>
//!     </table>"#,
//!     &ParseOptions::default(),
//! );
//!
//! let second_row = &tables[0].rows[1];
//! assert_eq!(second_row.cells[0].col, 1);
//! assert_eq!(second_row.cells[0].content_type, ContentType::Boolean);
//! ```

use std::path::Path;
use std::time::Instant;

use log::info;

/// Core resolution modules
pub mod core;

/// Data layer - static names and patterns
pub mod data;

/// Element tree abstraction and implementations
pub mod dom;

/// Resolved table model
pub mod model;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types and functions
pub use crate::core::{
    resolve_table, resolve_tables, resolve_tables_parallel, CellContent, GridResolver,
    OccupancyTracker, Override, ParseOptions, StyleCache, StyleCascade,
};

pub use dom::{ElementBuilder, HtmlDocument, HtmlElement, MemoryElement, ScraperElement};
pub use model::{ContentType, Font, StyleMap, Table, Td, Tr};

// Re-export utilities
pub use utils::error::{GridError, GridResult};

/// Parse an HTML document and resolve every table in it
///
/// Tables are returned in document order; nested tables appear after the
/// table that contains them.
pub fn parse_html_tables(html: &str, options: &ParseOptions) -> Vec<Table> {
    info!("Start parsing html");
    let start = Instant::now();

    let document = HtmlDocument::parse(html);
    let tables = resolve_tables(&document.tables(), options);

    info!(
        "Complete html parsing: {} table(s), takes {} ms",
        tables.len(),
        start.elapsed().as_millis()
    );
    tables
}

/// Read an HTML file and resolve every table in it
///
/// Fails only when the file cannot be read as UTF-8 text.
pub fn parse_html_file(path: impl AsRef<Path>, options: &ParseOptions) -> GridResult<Vec<Table>> {
    let path = path.as_ref();
    let html = std::fs::read_to_string(path).map_err(|e| GridError::io(path, e))?;
    Ok(parse_html_tables(&html, options))
}
