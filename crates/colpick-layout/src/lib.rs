#![forbid(unsafe_code)]

//! Column-major grid layout and horizontal viewport scrolling.
//!
//! # Role in colpick
//! `colpick-layout` turns an item sequence into geometry. [`Grid`] partitions
//! labels into fixed-height columns and sizes each one; [`ViewportWindow`]
//! picks the run of columns that fits the available width while keeping the
//! selected column in view. Both are pure and recomputed from scratch
//! whenever inputs change.

pub mod config;
pub mod grid;
pub mod viewport;

pub use config::{
    DEFAULT_COLUMN_GAP, DEFAULT_INDICATOR_WIDTH, GridMetrics, LayoutConfig, LayoutError,
};
pub use grid::{Column, Grid};
pub use viewport::ViewportWindow;
