#![forbid(unsafe_code)]

//! Multi-column select widget.
//!
//! [`MulticolumnSelect`] owns an item sequence, lays it out column-major
//! (`limit` rows per column), keeps a horizontal window of columns that fits
//! the configured width, and moves a single highlight in response to
//! navigation commands.
//!
//! # Navigation
//!
//! | Command     | Effect                                                    |
//! |-------------|-----------------------------------------------------------|
//! | `MoveDown`  | next row; stops at the column's last row                  |
//! | `MoveUp`    | previous row; stops at row 0                              |
//! | `MoveRight` | same row, next column; clamps into a short last column    |
//! | `MoveLeft`  | same row, previous column                                 |
//! | `MoveHome`  | first item                                                |
//! | `MoveEnd`   | last item                                                 |
//! | `Confirm`   | reports the highlighted item; highlight unchanged         |
//!
//! Moves blocked at a grid edge are no-ops: nothing is reported and nothing
//! is logged.
//!
//! # Notifications
//!
//! `on_highlight` runs whenever the highlighted index changes (including a
//! reset caused by [`MulticolumnSelect::update`]); `on_select` runs on
//! `Confirm`. Both run synchronously before the triggering call returns.
//!
//! # Example
//!
//! ```
//! use colpick_core::keymap::NavCommand;
//! use colpick_layout::LayoutConfig;
//! use colpick_widgets::select::{MulticolumnSelect, NavOutcome};
//!
//! let files: Vec<String> = (1..=150).map(|i| format!("filename{i}.ext")).collect();
//! let config = LayoutConfig::new(80, 12)?;
//! let mut select = MulticolumnSelect::<String>::new(files, config);
//!
//! assert_eq!(select.selected(), Some(0));
//! assert_eq!(select.apply(NavCommand::MoveDown), NavOutcome::Highlighted(1));
//! assert_eq!(select.window().columns(), 0..3);
//! # Ok::<(), colpick_layout::LayoutError>(())
//! ```

use std::fmt;

use colpick_core::event::{Event, KeyEvent};
use colpick_core::keymap::{Keymap, NavCommand};
use colpick_layout::{Grid, GridMetrics, LayoutConfig, LayoutError, ViewportWindow};
#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::change::should_reset;
use crate::item::SelectItem;

/// Callback receiving the affected item.
pub type ItemCallback<V> = Box<dyn FnMut(&SelectItem<V>)>;

/// Result of applying a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavOutcome {
    /// The command was a no-op (edge of the grid, empty list).
    Unchanged,
    /// The highlight moved to this index.
    Highlighted(usize),
    /// The item at this index was confirmed.
    Selected(usize),
}

/// Result of replacing the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// Values matched; the highlight stayed where it was.
    Preserved,
    /// Values differed; the highlight went back to the first item.
    Reset,
}

/// A multi-column, horizontally scrolling single-select list.
pub struct MulticolumnSelect<V> {
    items: Vec<SelectItem<V>>,
    config: LayoutConfig,
    metrics: GridMetrics,
    keymap: Keymap,
    grid: Grid,
    window: ViewportWindow,
    /// `None` iff `items` is empty.
    selected: Option<usize>,
    on_highlight: Option<ItemCallback<V>>,
    on_select: Option<ItemCallback<V>>,
}

impl<V> fmt::Debug for MulticolumnSelect<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MulticolumnSelect")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .field("keymap", &self.keymap)
            .field("total_columns", &self.grid.total_columns())
            .field("window", &self.window)
            .field("selected", &self.selected)
            .field("on_highlight", &self.on_highlight.is_some())
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

impl<V> MulticolumnSelect<V> {
    /// Create a widget with the first item highlighted.
    #[must_use]
    pub fn new(
        items: impl IntoIterator<Item = impl Into<SelectItem<V>>>,
        config: LayoutConfig,
    ) -> Self {
        let items: Vec<SelectItem<V>> = items.into_iter().map(Into::into).collect();
        let metrics = GridMetrics::default();
        let grid = compute_grid(&items, config, metrics);
        let selected = (!items.is_empty()).then_some(0);
        let mut select = Self {
            items,
            config,
            metrics,
            keymap: Keymap::default(),
            grid,
            window: ViewportWindow::EMPTY,
            selected,
            on_highlight: None,
            on_select: None,
        };
        select.relayout(None);
        select
    }

    /// Start with item `index` highlighted, clamped to the last item.
    ///
    /// The window is scrolled so the item is visible. No notification fires.
    #[must_use]
    pub fn initial_index(mut self, index: usize) -> Self {
        if !self.items.is_empty() {
            self.selected = Some(index.min(self.items.len() - 1));
        }
        self.relayout(None);
        self
    }

    /// Override the per-column overhead.
    #[must_use]
    pub fn metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self.grid = compute_grid(&self.items, self.config, metrics);
        self.relayout(None);
        self
    }

    /// Override the key bindings.
    #[must_use]
    pub fn keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Called with the newly highlighted item whenever the highlight moves.
    #[must_use]
    pub fn on_highlight(mut self, callback: impl FnMut(&SelectItem<V>) + 'static) -> Self {
        self.on_highlight = Some(Box::new(callback));
        self
    }

    /// Called with the highlighted item when it is confirmed.
    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&SelectItem<V>) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// All items, in grid order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[SelectItem<V>] {
        &self.items
    }

    /// Whether there is nothing to select.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the highlighted item, `None` when empty.
    #[inline]
    #[must_use = "use the selected index (if any)"]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted item, `None` when empty.
    #[must_use]
    pub fn selected_item(&self) -> Option<&SelectItem<V>> {
        self.selected.and_then(|i| self.items.get(i))
    }

    /// Column of the highlighted item.
    #[must_use]
    pub fn selected_column(&self) -> Option<usize> {
        self.selected.map(|i| self.grid.column_of(i))
    }

    /// Current grid geometry.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Currently visible columns.
    #[inline]
    #[must_use]
    pub const fn window(&self) -> ViewportWindow {
        self.window
    }

    /// Current width and row limit.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Current per-column overhead.
    #[inline]
    #[must_use]
    pub const fn grid_metrics(&self) -> GridMetrics {
        self.metrics
    }

    /// Replace the layout configuration, keeping items and highlight.
    ///
    /// A changed row limit re-anchors the window at column 0 (column indices
    /// no longer mean the same items); a width-only change keeps the anchor.
    pub fn set_config(&mut self, config: LayoutConfig) {
        let limit_changed = config.limit() != self.config.limit();
        self.config = config;
        if limit_changed {
            self.grid = compute_grid(&self.items, config, self.metrics);
            self.relayout(None);
        } else {
            self.relayout(Some(self.window));
        }
    }

    /// Replace only the width.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroWidth`] for a zero width; the current
    /// configuration is left untouched.
    pub fn set_width(&mut self, width: u16) -> Result<(), LayoutError> {
        let config = self.config.with_width(width)?;
        self.set_config(config);
        Ok(())
    }

    fn relayout(&mut self, previous: Option<ViewportWindow>) {
        self.window = ViewportWindow::compute(
            &self.grid,
            self.config.width(),
            self.selected_column(),
            previous,
        );
    }

    fn notify_highlight(&mut self, index: usize) {
        if let Some(callback) = self.on_highlight.as_mut()
            && let Some(item) = self.items.get(index)
        {
            callback(item);
        }
    }

    fn notify_select(&mut self, index: usize) {
        if let Some(callback) = self.on_select.as_mut()
            && let Some(item) = self.items.get(index)
        {
            callback(item);
        }
    }

    /// Index reached from `current` by a movement command.
    ///
    /// Returns `current` when the move is blocked.
    fn target(&self, command: NavCommand, current: usize) -> usize {
        let grid = &self.grid;
        let col = grid.column_of(current);
        let row = grid.row_of(current);

        match command {
            NavCommand::MoveDown => match grid.column_end(col) {
                Some(end) if current < end => current + 1,
                _ => current,
            },
            NavCommand::MoveUp if row > 0 => current - 1,
            NavCommand::MoveUp => current,
            NavCommand::MoveRight => grid.index_at(col + 1, row).unwrap_or(current),
            NavCommand::MoveLeft => col
                .checked_sub(1)
                .and_then(|target| grid.index_at(target, row))
                .unwrap_or(current),
            NavCommand::MoveHome => 0,
            NavCommand::MoveEnd => self.items.len().saturating_sub(1),
            NavCommand::Confirm => current,
        }
    }

    /// Apply a navigation command.
    pub fn apply(&mut self, command: NavCommand) -> NavOutcome {
        let Some(current) = self.selected else {
            return NavOutcome::Unchanged;
        };

        if command == NavCommand::Confirm {
            #[cfg(feature = "tracing")]
            self.log_selection_change(command.as_str());
            self.notify_select(current);
            return NavOutcome::Selected(current);
        }

        let next = self.target(command, current);
        if next == current {
            return NavOutcome::Unchanged;
        }

        self.selected = Some(next);
        self.relayout(Some(self.window));
        #[cfg(feature = "tracing")]
        self.log_selection_change(command.as_str());
        self.notify_highlight(next);
        NavOutcome::Highlighted(next)
    }

    /// Resolve a key through the keymap and apply it.
    ///
    /// Returns `None` for keys the keymap does not recognize.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<NavOutcome> {
        let command = self.keymap.resolve(key)?;
        Some(self.apply(command))
    }

    /// Handle a host event.
    ///
    /// Resizes adopt the new width; a terminal reporting zero columns is
    /// treated as one so a single column stays visible.
    pub fn handle_event(&mut self, event: &Event) -> Option<NavOutcome> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize { width, .. } => {
                let config = self.config.with_width_at_least_one(*width);
                self.set_config(config);
                None
            }
        }
    }

    #[cfg(feature = "tracing")]
    fn log_selection_change(&self, action: &str) {
        tracing::debug!(
            message = "multicolumn.selection",
            action,
            selected = self.selected,
            column = self.selected_column(),
            first_visible_column = self.window.first,
            visible_columns = self.window.count,
        );
    }
}

impl<V: PartialEq> MulticolumnSelect<V> {
    /// Replace items and layout configuration.
    ///
    /// When the new values differ from the old ones (see
    /// [`should_reset`](crate::change::should_reset)) the highlight returns to
    /// the first item, the window to column 0, and `on_highlight` fires for
    /// the first item (unless the list is now empty). Otherwise the highlight
    /// is kept even if labels changed.
    pub fn update(
        &mut self,
        items: impl IntoIterator<Item = impl Into<SelectItem<V>>>,
        config: LayoutConfig,
    ) -> UpdateOutcome {
        let items: Vec<SelectItem<V>> = items.into_iter().map(Into::into).collect();

        #[cfg(feature = "tracing")]
        let update_start = Instant::now();
        #[cfg(feature = "tracing")]
        let update_span = tracing::debug_span!(
            "multicolumn.update",
            total_items = items.len(),
            width = config.width(),
            limit = config.limit().get(),
            reset = tracing::field::Empty,
            update_duration_us = tracing::field::Empty
        );
        #[cfg(feature = "tracing")]
        let _update_guard = update_span.enter();

        let reset = should_reset(&self.items, &items);
        let limit_changed = config.limit() != self.config.limit();

        self.items = items;
        self.config = config;
        self.grid = compute_grid(&self.items, config, self.metrics);

        if reset {
            self.selected = (!self.items.is_empty()).then_some(0);
            self.relayout(None);
        } else if limit_changed {
            self.relayout(None);
        } else {
            self.relayout(Some(self.window));
        }

        #[cfg(feature = "tracing")]
        {
            let elapsed_us = update_start.elapsed().as_micros() as u64;
            update_span.record("reset", reset);
            update_span.record("update_duration_us", elapsed_us);
            if reset {
                self.log_selection_change("reset");
            }
        }

        if !reset {
            return UpdateOutcome::Preserved;
        }
        if let Some(first) = self.selected {
            self.notify_highlight(first);
        }
        UpdateOutcome::Reset
    }

    /// Replace items, keeping the current configuration.
    pub fn set_items(
        &mut self,
        items: impl IntoIterator<Item = impl Into<SelectItem<V>>>,
    ) -> UpdateOutcome {
        let config = self.config;
        self.update(items, config)
    }
}

fn compute_grid<V>(items: &[SelectItem<V>], config: LayoutConfig, metrics: GridMetrics) -> Grid {
    Grid::compute(
        items.iter().map(|item| item.label.as_str()),
        config.limit(),
        metrics,
    )
}
