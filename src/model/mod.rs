//! Resolved table model
//!
//! This is what the resolver hands to a spreadsheet writer: rows in document
//! order, cells at absolute grid positions, cascaded styles and per-column
//! widths. Nothing here is mutated after resolution finishes.

mod cell;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use cell::{ContentType, Font, Td};

/// Flat style property map, e.g. `color -> red`
///
/// Keeps declaration order; inserting an existing key replaces its value in
/// place.
pub type StyleMap = IndexMap<String, String>;

/// A resolved `<tr>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tr {
    /// Row index in document order (0-based)
    pub index: usize,
    /// Row height from the cascaded `height` property
    pub height: Option<u32>,
    /// False when the cascaded style has `visibility: hidden`
    pub visible: bool,
    pub cells: Vec<Td>,
    /// Column index -> display width
    pub col_widths: BTreeMap<usize, u32>,
}

impl Tr {
    pub fn new(index: usize) -> Self {
        Tr {
            index,
            height: None,
            visible: true,
            cells: Vec::new(),
            col_widths: BTreeMap::new(),
        }
    }

    /// Cell whose origin is at `col`, if any
    pub fn cell_at(&self, col: usize) -> Option<&Td> {
        self.cells.iter().find(|td| td.col == col)
    }
}

/// A resolved `<table>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub caption: Option<String>,
    pub rows: Vec<Tr>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns, accounting for spans
    pub fn num_cols(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|tr| tr.cells.iter())
            .map(|td| td.col_bound() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Widest value seen for each column across all rows
    pub fn col_widths(&self) -> BTreeMap<usize, u32> {
        let mut widths = BTreeMap::new();
        for tr in &self.rows {
            for (&col, &width) in &tr.col_widths {
                let entry = widths.entry(col).or_insert(0);
                *entry = (*entry).max(width);
            }
        }
        widths
    }
}
