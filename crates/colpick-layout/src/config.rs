#![forbid(unsafe_code)]

//! Validated layout inputs.

use std::num::NonZeroU16;

use thiserror::Error;

/// Cells reserved in front of every label for the selection indicator.
pub const DEFAULT_INDICATOR_WIDTH: u16 = 2;

/// Blank cells trailing every column.
pub const DEFAULT_COLUMN_GAP: u16 = 6;

/// Rejected layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The viewport must be at least one cell wide.
    #[error("layout width must be greater than zero")]
    ZeroWidth,
    /// Columns must hold at least one row.
    #[error("row limit must be greater than zero")]
    ZeroLimit,
}

/// Viewport width and rows-per-column.
///
/// Only constructible through [`LayoutConfig::new`], so every instance has a
/// non-zero width and limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    width: NonZeroU16,
    limit: NonZeroU16,
}

impl LayoutConfig {
    /// Validate a width (in cells) and a row limit.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroWidth`] or [`LayoutError::ZeroLimit`] when
    /// either value is zero.
    pub fn new(width: u16, limit: u16) -> Result<Self, LayoutError> {
        let width = NonZeroU16::new(width).ok_or(LayoutError::ZeroWidth)?;
        let limit = NonZeroU16::new(limit).ok_or(LayoutError::ZeroLimit)?;
        Ok(Self { width, limit })
    }

    /// Total cells available to all visible columns combined.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width.get()
    }

    /// Rows per column.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> NonZeroU16 {
        self.limit
    }

    /// Same limit, different width.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroWidth`] when `width` is zero.
    pub fn with_width(self, width: u16) -> Result<Self, LayoutError> {
        Self::new(width, self.limit.get())
    }

    /// Same limit, `width` raised to at least one cell.
    ///
    /// For host resizes, where a zero-column report is not an error.
    #[must_use]
    pub fn with_width_at_least_one(self, width: u16) -> Self {
        Self {
            width: NonZeroU16::new(width).unwrap_or(NonZeroU16::MIN),
            limit: self.limit,
        }
    }
}

/// Fixed per-column overhead added to the longest label.
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `COLPICK_COLUMN_GAP` | u16 | 6 | Blank cells after each column |
/// | `COLPICK_INDICATOR_WIDTH` | u16 | 2 | Cells reserved for the indicator |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridMetrics {
    /// Cells reserved in front of each label.
    pub indicator_width: u16,
    /// Blank cells after each column.
    pub column_gap: u16,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            indicator_width: DEFAULT_INDICATOR_WIDTH,
            column_gap: DEFAULT_COLUMN_GAP,
        }
    }
}

impl GridMetrics {
    /// Build metrics from defaults overridden by environment variables.
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build metrics from defaults overridden by `lookup(variable)`.
    ///
    /// [`from_env`](Self::from_env) with the environment swapped for any
    /// source; unparseable values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut metrics = Self::default();

        if let Some(val) = lookup("COLPICK_COLUMN_GAP")
            && let Ok(gap) = val.trim().parse::<u16>()
        {
            metrics.column_gap = gap;
        }

        if let Some(val) = lookup("COLPICK_INDICATOR_WIDTH")
            && let Ok(width) = val.trim().parse::<u16>()
        {
            metrics.indicator_width = width;
        }

        metrics
    }

    /// Overhead added to every column.
    #[inline]
    #[must_use]
    pub const fn overhead(&self) -> u16 {
        self.indicator_width.saturating_add(self.column_gap)
    }
}
