//! Row-span occupancy tracking

use std::collections::BTreeSet;

/// Columns of future rows already claimed by row-spanning cells
///
/// Indexed by absolute row; each row owns its own ordered set of claimed
/// columns, so claims never alias between rows. Sized to the table up
/// front: claims reaching past the last row are dropped.
#[derive(Debug, Clone)]
pub struct OccupancyTracker {
    claims: Vec<BTreeSet<usize>>,
}

impl OccupancyTracker {
    /// Tracker for a table with `row_count` rows
    pub fn new(row_count: usize) -> Self {
        Self {
            claims: vec![BTreeSet::new(); row_count],
        }
    }

    /// Claimed columns of `row`, ascending
    pub fn claims(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.claims.get(row).into_iter().flatten().copied()
    }

    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        self.claims.get(row).is_some_and(|set| set.contains(&col))
    }

    /// Absolute column for a cell whose logical position in `row` is `logical`
    ///
    /// Every claim at or before the candidate column pushes the cell one
    /// column right. Newly passed claims are counted until none remain, which
    /// takes at most one pass per claim.
    pub fn resolve_column(&self, row: usize, logical: usize) -> usize {
        let Some(claimed) = self.claims.get(row).filter(|set| !set.is_empty()) else {
            return logical;
        };

        let mut col = logical;
        let mut absorbed = 0;
        loop {
            let passed = claimed.range(..=col).count();
            let newly = passed - absorbed;
            if newly == 0 {
                return col;
            }
            col += newly;
            absorbed = passed;
        }
    }

    /// Claim the columns of a cell placed at (`row`, `col`) in every row it
    /// spans below its own, up to the last row of the table
    pub fn claim(&mut self, row: usize, col: usize, row_span: usize, col_span: usize) {
        if row_span <= 1 || col_span == 0 {
            return;
        }
        let last_row = row
            .saturating_add(row_span - 1)
            .min(self.claims.len().saturating_sub(1));
        if last_row <= row {
            return;
        }
        let end_col = col.saturating_add(col_span);
        for set in &mut self.claims[row + 1..=last_row] {
            set.extend(col..end_col);
        }
    }
}
