#![forbid(unsafe_code)]

//! Selectable items.

/// A labeled item.
///
/// `value` is the item's identity (compared when the item sequence is
/// replaced); `label` is only what gets shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectItem<V> {
    /// Text shown in the grid.
    pub label: String,
    /// Identity used for change detection.
    pub value: V,
}

impl<V> SelectItem<V> {
    /// Create an item from a label and a value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Replace the label, keeping the value.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl From<&str> for SelectItem<String> {
    fn from(s: &str) -> Self {
        Self::new(s, s.to_owned())
    }
}

impl From<String> for SelectItem<String> {
    fn from(s: String) -> Self {
        Self {
            value: s.clone(),
            label: s,
        }
    }
}

impl<V> From<(&str, V)> for SelectItem<V> {
    fn from((label, value): (&str, V)) -> Self {
        Self::new(label, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_items_use_label_as_value() {
        let item = SelectItem::from("a.txt");
        assert_eq!(item.label, "a.txt");
        assert_eq!(item.value, "a.txt");

        let owned = SelectItem::from(String::from("b.txt"));
        assert_eq!(owned.value, "b.txt");
    }

    #[test]
    fn tuple_items_keep_value() {
        let item: SelectItem<u32> = ("seven", 7).into();
        assert_eq!(item, SelectItem::new("seven", 7));
        assert_eq!(item.with_label("SEVEN").value, 7);
    }
}
