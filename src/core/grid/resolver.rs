//! Grid resolver
//!
//! Walks table -> rows -> cells in document order and places every cell at
//! an absolute grid position. Rows must be processed in order: a row's free
//! columns depend on row spans declared by earlier rows.

use std::collections::BTreeMap;

use log::{debug, trace};

use super::occupancy::OccupancyTracker;
use crate::core::cascade::{default_link_style, parse_style, StyleCache, StyleCascade};
use crate::core::content::CellContent;
use crate::core::options::ParseOptions;
use crate::data::constants::{
    ATTR_COLSPAN, ATTR_ROWSPAN, CELL_TAGS, MAX_COL_SPAN, MAX_ROW_SPAN, STYLE_HEIGHT,
    STYLE_VISIBILITY, STYLE_WIDTH, TAG_CAPTION, TAG_TH, TAG_TR, VISIBILITY_HIDDEN,
};
use crate::dom::HtmlElement;
use crate::model::{StyleMap, Table, Td, Tr};
use crate::utils::measure::{parse_length, parse_span, string_width};

/// Resolves table elements into [`Table`]s
pub struct GridResolver<'a> {
    options: &'a ParseOptions,
    cache: &'a StyleCache,
}

impl<'a> GridResolver<'a> {
    pub fn new(options: &'a ParseOptions, cache: &'a StyleCache) -> Self {
        Self { options, cache }
    }

    /// Resolve one `<table>` element
    pub fn resolve<E: HtmlElement>(&self, table_element: &E) -> Table {
        let mut table = Table::new();
        table.caption = table_element
            .elements_by_tag(TAG_CAPTION)
            .first()
            .map(|caption| caption.text());

        let cascade = StyleCascade::new(table_element, self.cache);
        let rows = collect_rows(table_element);
        let mut occupancy = OccupancyTracker::new(rows.len());

        for (index, (row, parent)) in rows.into_iter().enumerate() {
            let row_style = cascade.resolve_row(&row, &parent);
            let mut tr = Tr::new(index);
            tr.height = row_style.get(STYLE_HEIGHT).and_then(|h| parse_length(h));
            tr.visible =
                row_style.get(STYLE_VISIBILITY).map(String::as_str) != Some(VISIBILITY_HIDDEN);
            self.resolve_cells(&mut tr, &row, &row_style, &cascade, &mut occupancy);
            table.rows.push(tr);
        }

        debug!(
            "resolved table: {} rows, {} columns",
            table.num_rows(),
            table.num_cols()
        );
        table
    }

    fn resolve_cells<E: HtmlElement>(
        &self,
        tr: &mut Tr,
        row: &E,
        row_style: &StyleMap,
        cascade: &StyleCascade<'_>,
        occupancy: &mut OccupancyTracker,
    ) {
        // Logical cursor, advanced by colspans only; row-span claims are
        // applied per cell by the tracker
        let mut shift = 0;
        let cells = row
            .children()
            .into_iter()
            .filter(|child| CELL_TAGS.contains(child.tag_name()));

        for (i, cell) in cells.enumerate() {
            let mut td = Td::new(tr.index, i + shift);
            CellContent::classify(&cell).apply_to(&mut td);
            td.is_header = cell.tag_name() == TAG_TH;

            let mut own = parse_style(&cell);
            if own.is_empty() && td.content_type.is_link() && self.options.apply_default_link_style
            {
                own = default_link_style();
            }
            td.style = cascade.resolve_cell(row_style, &own);

            td.col_span = parse_span(cell.attr(ATTR_COLSPAN), MAX_COL_SPAN);
            td.row_span = parse_span(cell.attr(ATTR_ROWSPAN), MAX_ROW_SPAN);

            let col = occupancy.resolve_column(tr.index, td.col);
            if col != td.col {
                trace!(
                    "row {}: cell {} shifted from column {} to {}",
                    tr.index,
                    i,
                    td.col,
                    col
                );
                td.col = col;
            }
            occupancy.claim(tr.index, td.col, td.row_span, td.col_span);
            shift += td.col_span - 1;

            self.record_width(&mut tr.col_widths, &td);
            tr.cells.push(td);
        }
    }

    fn record_width(&self, widths: &mut BTreeMap<usize, u32>, td: &Td) {
        if self.options.compute_auto_width {
            let span = u32::try_from(td.col_span).unwrap_or(u32::MAX).max(1);
            let per_col = string_width(td.text()).div_ceil(span);
            for col in td.col..=td.col_bound() {
                let width = widths.entry(col).or_insert(0);
                *width = (*width).max(per_col);
            }
        }
        if let Some(width) = td.style.get(STYLE_WIDTH).and_then(|w| parse_length(w)) {
            widths.insert(td.col, width);
        }
    }
}

/// Every `<tr>` under `table` in document order, paired with its parent
fn collect_rows<E: HtmlElement>(table: &E) -> Vec<(E, E)> {
    let mut rows = Vec::new();
    walk_rows(table, &mut rows);
    rows
}

fn walk_rows<E: HtmlElement>(parent: &E, rows: &mut Vec<(E, E)>) {
    for child in parent.children() {
        if child.tag_name() == TAG_TR {
            rows.push((child.clone(), parent.clone()));
        }
        walk_rows(&child, rows);
    }
}
