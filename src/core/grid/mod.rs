//! Grid resolution
//!
//! Maps HTML's declarative `colspan`/`rowspan` layout onto absolute,
//! collision-free row/column coordinates.
//!
//! # Architecture
//!
//! ```text
//! <table> -> rows (document order) -> cells -> OccupancyTracker -> Table
//!                \-> StyleCascade        \-> CellContent
//! ```
//!
//! Tables are independent of each other and can be resolved in parallel;
//! rows and cells within one table are strictly sequential.

mod occupancy;
mod resolver;


use rayon::prelude::*;

pub use occupancy::OccupancyTracker;
pub use resolver::GridResolver;

use super::cascade::StyleCache;
use super::options::ParseOptions;
use crate::dom::HtmlElement;
use crate::model::Table;

/// Resolve one table element using `cache` for row-group styles
pub fn resolve_table<E: HtmlElement>(
    table: &E,
    options: &ParseOptions,
    cache: &StyleCache,
) -> Table {
    GridResolver::new(options, cache).resolve(table)
}

/// Resolve tables one after another, each with its own style cache
pub fn resolve_tables<E: HtmlElement>(tables: &[E], options: &ParseOptions) -> Vec<Table> {
    tables
        .iter()
        .map(|table| resolve_table(table, options, &StyleCache::new()))
        .collect()
}

/// Resolve tables on the rayon pool
///
/// All tables share one style cache; entries are keyed per table, so the
/// result equals [`resolve_tables`]. Output order matches input order.
pub fn resolve_tables_parallel<E>(tables: &[E], options: &ParseOptions) -> Vec<Table>
where
    E: HtmlElement + Send + Sync,
{
    let cache = StyleCache::new();
    tables
        .par_iter()
        .map(|table| resolve_table(table, options, &cache))
        .collect()
}
