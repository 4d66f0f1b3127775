#![forbid(unsafe_code)]

//! colpick public facade crate.
//!
//! Re-exports the types a host needs to drive a multi-column select list and
//! offers a small prelude. The host decodes terminal input into [`Event`]s,
//! forwards them to a [`MulticolumnSelect`], and draws whatever
//! [`MulticolumnSelect::visible_columns`] returns.
//!
//! ```
//! use colpick::prelude::*;
//!
//! let files: Vec<String> = (1..=150).map(|i| format!("filename{i}.ext")).collect();
//! let mut select = MulticolumnSelect::<String>::new(files, LayoutConfig::new(80, 12)?);
//!
//! select.handle_event(&Event::Key(KeyEvent::char('$')));
//! assert_eq!(select.selected(), Some(149));
//! assert_eq!(select.window().columns(), 10..13);
//! # Ok::<(), colpick::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use colpick_core::event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use colpick_core::keymap::{Keymap, KeymapConfig, NavCommand};

// --- Layout re-exports -----------------------------------------------------

pub use colpick_layout::{Column, Grid, GridMetrics, LayoutConfig, LayoutError, ViewportWindow};

// --- Widget re-exports -----------------------------------------------------

pub use colpick_widgets::{
    Indicator, MulticolumnSelect, NavOutcome, SelectItem, UpdateOutcome, VisibleColumn, VisibleRow,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for colpick hosts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The layout configuration was rejected.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Standard result type for colpick APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a select list whose metrics and key bindings come from the
/// environment (`COLPICK_COLUMN_GAP`, `COLPICK_INDICATOR_WIDTH`,
/// `COLPICK_DISABLE_VIM_KEYS`).
///
/// # Errors
///
/// Returns [`Error::Layout`] when `width` or `limit` is zero.
pub fn select_from_env<V>(
    items: impl IntoIterator<Item = impl Into<SelectItem<V>>>,
    width: u16,
    limit: u16,
) -> Result<MulticolumnSelect<V>> {
    let config = LayoutConfig::new(width, limit)?;
    Ok(MulticolumnSelect::new(items, config)
        .metrics(GridMetrics::from_env())
        .keymap(Keymap::from_env()))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Event, Indicator, KeyCode, KeyEvent, LayoutConfig, Modifiers, MulticolumnSelect,
        NavCommand, NavOutcome, Result, SelectItem, UpdateOutcome, VisibleColumn, VisibleRow,
    };

    pub use crate::{core, layout, widgets};
}

pub use colpick_core as core;
pub use colpick_layout as layout;
pub use colpick_widgets as widgets;
