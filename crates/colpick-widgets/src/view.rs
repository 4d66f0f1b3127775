#![forbid(unsafe_code)]

//! What a renderer needs to draw the widget.
//!
//! [`MulticolumnSelect::visible_columns`] flattens the current grid and
//! viewport into columns of rows. Each row knows its item, the cells its
//! column occupies and whether it is the highlighted one; glyphs, colors and
//! padding are left to the renderer.

use crate::indicator::Indicator;
use crate::item::SelectItem;
use crate::select::MulticolumnSelect;

/// One row of a visible column.
#[derive(Debug, PartialEq, Eq)]
pub struct VisibleRow<'a, V> {
    /// Index of the item in the full sequence.
    pub index: usize,
    /// The item itself.
    pub item: &'a SelectItem<V>,
    /// Cells available to this row (its column's width).
    pub width: u16,
    /// Whether this row is highlighted.
    pub is_selected: bool,
}

// Manual impls: deriving would require `V: Clone`/`V: Copy`.
impl<V> Clone for VisibleRow<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for VisibleRow<'_, V> {}

impl<'a, V> VisibleRow<'a, V> {
    /// Text to draw.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'a str {
        &self.item.label
    }

    /// Ask `indicator` what to draw in front of this row.
    pub fn indicator<I: Indicator>(&self, indicator: &I) -> I::Output {
        indicator.render_indicator(self.is_selected)
    }
}

/// A column inside the viewport window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleColumn<'a, V> {
    /// Grid column index.
    pub column: usize,
    /// Cells this column occupies, indicator and gap included.
    pub width: u16,
    /// Rows top to bottom; shorter than the limit only for the last column.
    pub rows: Vec<VisibleRow<'a, V>>,
}

impl<V> MulticolumnSelect<V> {
    /// Columns in the current viewport window, left to right.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<VisibleColumn<'_, V>> {
        let grid = self.grid();
        let items = self.items();
        let selected = self.selected();

        self.window()
            .columns()
            .filter_map(|col| grid.column(col).map(|column| (col, column)))
            .map(|(col, column)| VisibleColumn {
                column: col,
                width: column.width,
                rows: column
                    .range()
                    .filter_map(|index| {
                        items.get(index).map(|item| VisibleRow {
                            index,
                            item,
                            width: column.width,
                            is_selected: selected == Some(index),
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colpick_core::keymap::NavCommand;
    use colpick_layout::LayoutConfig;

    fn fixture() -> MulticolumnSelect<String> {
        let files: Vec<String> = (1..=150).map(|i| format!("filename{i}.ext")).collect();
        MulticolumnSelect::new(files, LayoutConfig::new(80, 12).expect("valid config"))
    }

    #[test]
    fn first_row_of_each_visible_column() {
        let select = fixture();
        let columns = select.visible_columns();
        let heads: Vec<&str> = columns.iter().map(|c| c.rows[0].label()).collect();
        assert_eq!(heads, ["filename1.ext", "filename13.ext", "filename25.ext"]);
        assert!(columns.iter().all(|c| c.rows.len() == 12));
    }

    #[test]
    fn exactly_one_row_is_selected() {
        let mut select = fixture();
        select.apply(NavCommand::MoveRight);
        let selected: Vec<usize> = select
            .visible_columns()
            .iter()
            .flat_map(|c| c.rows.iter())
            .filter(|r| r.is_selected)
            .map(|r| r.index)
            .collect();
        assert_eq!(selected, [12]);
    }

    #[test]
    fn short_last_column() {
        let mut select = fixture();
        select.apply(NavCommand::MoveEnd);
        let columns = select.visible_columns();
        let last = columns.last().expect("visible column");
        assert_eq!(last.column, 12);
        assert_eq!(last.rows.len(), 6);
        assert_eq!(last.rows[5].label(), "filename150.ext");
        assert!(last.rows[5].is_selected);
    }

    #[test]
    fn indicator_follows_selection_flag() {
        let select = fixture();
        let columns = select.visible_columns();
        let marker = |selected: bool| if selected { 'X' } else { ' ' };
        assert_eq!(columns[0].rows[0].indicator(&marker), 'X');
        assert_eq!(columns[0].rows[1].indicator(&marker), ' ');
    }

    #[test]
    fn empty_widget_has_no_columns() {
        let select = MulticolumnSelect::<String>::new(
            Vec::<String>::new(),
            LayoutConfig::new(80, 12).expect("valid config"),
        );
        assert!(select.visible_columns().is_empty());
    }
}
