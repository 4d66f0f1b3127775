#![forbid(unsafe_code)]

//! Horizontal viewport over grid columns.
//!
//! [`ViewportWindow::compute`] decides which contiguous run of columns is
//! shown for a given width and selected column.
//!
//! # Scrolling policy
//!
//! Minimal shift, never re-centering:
//!
//! - selected column already visible: the window stays where it is
//! - selected column right of the window: scroll until it is the rightmost
//!   visible column
//! - selected column left of the window: scroll until it is the leftmost
//!   visible column
//!
//! # Invariants
//!
//! 1. `count >= 1` whenever the grid has columns, even if one column is
//!    wider than the viewport.
//! 2. The selected column (when given and in range) satisfies
//!    `first <= selected <= last()`.
//! 3. `first + count <= total_columns`.
//! 4. When the window reaches the last column, columns to the left are pulled
//!    in while they fit, so no trailing space is wasted.
//! 5. Recomputing with the returned window as `previous` and the same inputs
//!    yields the same window, so a visible selection never scrolls a window
//!    this function produced.
//!
//! Invariant 4 takes precedence over the minimal-shift rule for a
//! caller-supplied `previous` that ends at the last column with room to
//! spare: `first` moves left even though the selected column was visible.

use std::ops::Range;

use crate::grid::Grid;

/// The run of columns currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ViewportWindow {
    /// First visible column.
    pub first: usize,
    /// Number of visible columns.
    pub count: usize,
}

impl ViewportWindow {
    /// The window of an empty grid.
    pub const EMPTY: Self = Self { first: 0, count: 0 };

    /// Visible column indices.
    #[inline]
    #[must_use]
    pub const fn columns(&self) -> Range<usize> {
        self.first..self.first + self.count
    }

    /// Last visible column, or `None` for an empty window.
    #[inline]
    #[must_use]
    pub const fn last(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some(self.first + self.count - 1)
        }
    }

    /// Whether column `col` is visible.
    #[inline]
    #[must_use]
    pub const fn contains(&self, col: usize) -> bool {
        col >= self.first && col < self.first + self.count
    }

    /// Compute the window for `grid` within `width` cells.
    ///
    /// `previous` anchors the window; pass `None` after a full reset so the
    /// window starts at column 0. `selected_column` beyond the grid is
    /// clamped to the last column.
    #[must_use]
    pub fn compute(
        grid: &Grid,
        width: u16,
        selected_column: Option<usize>,
        previous: Option<ViewportWindow>,
    ) -> Self {
        let total = grid.total_columns();
        if total == 0 {
            return Self::EMPTY;
        }
        let width = u32::from(width);

        let mut first = previous.map_or(0, |w| w.first).min(total - 1);

        if let Some(selected) = selected_column.map(|c| c.min(total - 1)) {
            if selected < first {
                first = selected;
            } else {
                let (count, _) = fit_from(grid, width, first);
                if selected >= first + count {
                    first = first_ending_at(grid, width, selected);
                }
            }
        }

        let (mut count, mut used) = fit_from(grid, width, first);

        // Pull earlier columns in when the tail leaves room.
        if first + count == total {
            while first > 0 {
                let w = u32::from(grid.column_width(first - 1));
                if used + w > width {
                    break;
                }
                used += w;
                first -= 1;
                count += 1;
            }
        }

        let window = Self { first, count };

        #[cfg(feature = "tracing")]
        log_scroll(previous, window, total);

        window
    }
}

#[cfg(feature = "tracing")]
fn log_scroll(previous: Option<ViewportWindow>, window: ViewportWindow, total_columns: usize) {
    if let Some(prev) = previous
        && prev.first != window.first
    {
        tracing::trace!(
            message = "viewport.scroll",
            from = prev.first,
            to = window.first,
            visible = window.count,
            total_columns,
        );
    }
}

/// Columns that fit starting at `first`, and the cells they use. At least one
/// column is always taken.
fn fit_from(grid: &Grid, width: u32, first: usize) -> (usize, u32) {
    let mut used = 0u32;
    let mut count = 0usize;
    for column in &grid.columns()[first..] {
        let w = u32::from(column.width);
        if count > 0 && used + w > width {
            break;
        }
        used += w;
        count += 1;
    }
    (count, used)
}

/// Smallest first column such that `first..=last` fits. Returns `last` when
/// even that column alone is too wide.
fn first_ending_at(grid: &Grid, width: u32, last: usize) -> usize {
    let mut used = u32::from(grid.column_width(last));
    let mut first = last;
    while first > 0 {
        let w = u32::from(grid.column_width(first - 1));
        if used + w > width {
            break;
        }
        used += w;
        first -= 1;
    }
    first
}
