#![forbid(unsafe_code)]

//! Column-major grid partition.
//!
//! [`Grid::compute`] splits an ordered label sequence into columns of at most
//! `limit` rows. Column `c` holds items `c * limit ..= min((c + 1) * limit, n) - 1`;
//! only the last column may be short.
//!
//! ```text
//!  limit = 3, n = 8
//!
//!  col 0   col 1   col 2
//!  [0]     [3]     [6]
//!  [1]     [4]     [7]
//!  [2]     [5]
//! ```
//!
//! # Invariants
//!
//! 1. `total_columns() == ceil(n / limit)`; an empty sequence has no columns.
//! 2. Every index `i < n` lives in column `i / limit` at row `i % limit`.
//! 3. Each column is sized independently: longest label (display width) plus
//!    [`GridMetrics::overhead`].
//! 4. The grid depends on labels, limit and metrics only. The viewport width
//!    plays no part here.

use std::num::NonZeroU16;
use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::config::GridMetrics;

/// One column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column {
    /// Index of the first item in this column.
    pub start: usize,
    /// Number of rows actually occupied (`1..=limit`).
    pub len: usize,
    /// Cells taken by this column, overhead included.
    pub width: u16,
}

impl Column {
    /// Item indices in this column.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Index of the last item in this column (inclusive).
    #[inline]
    #[must_use]
    pub const fn last(&self) -> usize {
        (self.start + self.len).saturating_sub(1)
    }

    /// Whether item `index` lives in this column.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.len
    }
}

/// The column partition of an item sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<Column>,
    item_count: usize,
    limit: usize,
}

impl Grid {
    /// Partition `labels` into columns of at most `limit` rows.
    ///
    /// Pure: identical inputs always produce an identical grid.
    #[must_use]
    pub fn compute<'a, I>(labels: I, limit: NonZeroU16, metrics: GridMetrics) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let limit = usize::from(limit.get());
        let overhead = metrics.overhead();

        let mut columns: Vec<Column> = Vec::new();
        let mut item_count = 0usize;
        let mut widest = 0u16;

        for label in labels {
            let row = item_count % limit;
            if row == 0 {
                if let Some(prev) = columns.last_mut() {
                    prev.width = widest.saturating_add(overhead);
                }
                columns.push(Column {
                    start: item_count,
                    len: 0,
                    width: 0,
                });
                widest = 0;
            }
            let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            widest = widest.max(label_width);
            if let Some(col) = columns.last_mut() {
                col.len += 1;
            }
            item_count += 1;
        }
        if let Some(last) = columns.last_mut() {
            last.width = widest.saturating_add(overhead);
        }

        Self {
            columns,
            item_count,
            limit,
        }
    }

    /// All columns, left to right.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of columns (`ceil(n / limit)`).
    #[inline]
    #[must_use]
    pub fn total_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of items partitioned.
    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Rows per column.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Whether the grid has no items.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Column at `col`, if any.
    #[inline]
    #[must_use]
    pub fn column(&self, col: usize) -> Option<&Column> {
        self.columns.get(col)
    }

    /// Width of column `col`, or 0 when out of range.
    #[inline]
    #[must_use]
    pub fn column_width(&self, col: usize) -> u16 {
        self.columns.get(col).map_or(0, |c| c.width)
    }

    /// Column holding item `index`. Not bounds-checked against the item count.
    #[inline]
    #[must_use]
    pub const fn column_of(&self, index: usize) -> usize {
        index / self.limit
    }

    /// Row of item `index` within its column.
    #[inline]
    #[must_use]
    pub const fn row_of(&self, index: usize) -> usize {
        index % self.limit
    }

    /// First item index of column `col`.
    #[inline]
    #[must_use]
    pub const fn column_start(&self, col: usize) -> usize {
        col * self.limit
    }

    /// Last item index of column `col` (inclusive), or `None` when the column
    /// does not exist.
    #[must_use]
    pub fn column_end(&self, col: usize) -> Option<usize> {
        self.columns.get(col).map(Column::last)
    }

    /// Item at (`col`, `row`), clamped to the last row of a short column.
    ///
    /// Returns `None` when `col` is out of range.
    #[must_use]
    pub fn index_at(&self, col: usize, row: usize) -> Option<usize> {
        let column = self.columns.get(col)?;
        Some((column.start + row).min(column.last()))
    }

    /// (`column`, `row`) of item `index`, or `None` when out of range.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.item_count).then(|| (self.column_of(index), self.row_of(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(n: u16) -> NonZeroU16 {
        NonZeroU16::new(n).expect("non-zero limit")
    }

    fn filenames(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("filename{i}.ext")).collect()
    }

    fn grid_of(labels: &[String], rows: u16) -> Grid {
        Grid::compute(labels.iter().map(String::as_str), limit(rows), GridMetrics::default())
    }

    #[test]
    fn empty_sequence_has_no_columns() {
        let grid = Grid::compute(std::iter::empty::<&str>(), limit(12), GridMetrics::default());
        assert!(grid.is_empty());
        assert_eq!(grid.total_columns(), 0);
        assert_eq!(grid.column_end(0), None);
        assert_eq!(grid.index_at(0, 0), None);
        assert_eq!(grid.position(0), None);
    }

    #[test]
    fn partitions_column_major() {
        let labels = filenames(150);
        let grid = grid_of(&labels, 12);

        assert_eq!(grid.total_columns(), 13);
        assert_eq!(grid.item_count(), 150);
        assert_eq!(grid.column(0).map(Column::range), Some(0..12));
        assert_eq!(grid.column(1).map(Column::range), Some(12..24));
        assert_eq!(grid.column(12).map(Column::range), Some(144..150));
        assert_eq!(grid.column_end(11), Some(143));
        assert_eq!(grid.column_end(12), Some(149));
    }

    #[test]
    fn columns_are_sized_independently() {
        let labels = filenames(150);
        let grid = grid_of(&labels, 12);
        let overhead = GridMetrics::default().overhead();

        // filename10.ext .. filename12.ext
        assert_eq!(grid.column_width(0), 14 + overhead);
        // filename13.ext .. filename24.ext
        assert_eq!(grid.column_width(1), 14 + overhead);
        // filename97.ext .. filename108.ext
        assert_eq!(grid.column_width(8), 15 + overhead);
        assert_eq!(grid.column_width(99), 0);
    }

    #[test]
    fn display_width_counts_wide_glyphs() {
        let labels = ["漢字".to_string(), "ab".to_string()];
        let grid = grid_of(&labels, 2);
        assert_eq!(grid.column_width(0), 4 + GridMetrics::default().overhead());
    }

    #[test]
    fn metrics_change_overhead_only() {
        let labels = filenames(3);
        let tight = GridMetrics {
            indicator_width: 1,
            column_gap: 0,
        };
        let grid = Grid::compute(labels.iter().map(String::as_str), limit(5), tight);
        assert_eq!(grid.column_width(0), 13 + 1);
    }

    #[test]
    fn row_and_column_lookup() {
        let labels = filenames(150);
        let grid = grid_of(&labels, 12);
        assert_eq!(grid.position(50), Some((4, 2)));
        assert_eq!(grid.position(149), Some((12, 5)));
        assert_eq!(grid.position(150), None);
        assert_eq!(grid.column_start(12), 144);
    }

    #[test]
    fn index_at_clamps_short_column() {
        let labels = filenames(150);
        let grid = grid_of(&labels, 12);
        assert_eq!(grid.index_at(11, 11), Some(143));
        assert_eq!(grid.index_at(12, 11), Some(149));
        assert_eq!(grid.index_at(12, 3), Some(147));
        assert_eq!(grid.index_at(13, 0), None);
    }

    #[test]
    fn single_row_limit() {
        let labels = filenames(4);
        let grid = grid_of(&labels, 1);
        assert_eq!(grid.total_columns(), 4);
        assert!(grid.columns().iter().all(|c| c.len == 1));
    }

    #[test]
    fn deterministic() {
        let labels = filenames(37);
        assert_eq!(grid_of(&labels, 5), grid_of(&labels, 5));
    }
}
