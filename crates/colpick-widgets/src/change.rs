#![forbid(unsafe_code)]

//! Item-sequence change detection.
//!
//! Decides whether replacing the item sequence invalidates the selection.
//! Items are compared positionally by `value`; labels are ignored, so a host
//! may re-label items (for example to add a size suffix) without moving the
//! highlight.

use crate::item::SelectItem;

/// Whether swapping `previous` for `next` must reset the selection.
///
/// No reset iff both sequences have the same length and equal values at
/// every position.
#[must_use]
pub fn should_reset<V: PartialEq>(previous: &[SelectItem<V>], next: &[SelectItem<V>]) -> bool {
    previous.len() != next.len()
        || previous
            .iter()
            .zip(next)
            .any(|(prev, next)| prev.value != next.value)
}
