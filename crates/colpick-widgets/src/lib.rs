#![forbid(unsafe_code)]

//! Multi-column select widget for colpick.
//!
//! # Role in colpick
//! `colpick-widgets` holds the stateful part: the item sequence, the
//! highlighted index, change detection when the host swaps items, and the
//! flattened view handed to a renderer. Geometry comes from
//! `colpick-layout`, key bindings from `colpick-core`.

pub mod change;
pub mod indicator;
pub mod item;
pub mod select;
pub mod view;

pub use change::should_reset;
pub use indicator::Indicator;
pub use item::SelectItem;
pub use select::{ItemCallback, MulticolumnSelect, NavOutcome, UpdateOutcome};
pub use view::{VisibleColumn, VisibleRow};
