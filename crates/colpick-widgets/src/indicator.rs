#![forbid(unsafe_code)]

//! Selection-indicator capability.
//!
//! The widget never chooses glyphs. Renderers hand it an [`Indicator`] and
//! get back whatever they render for a row (a `&str`, a styled span, ...),
//! driven only by the row's `is_selected` flag.
//!
//! ```
//! use colpick_widgets::indicator::Indicator;
//!
//! let arrow = |selected: bool| if selected { "❯ " } else { "  " };
//! assert_eq!(arrow.render_indicator(true), "❯ ");
//! assert_eq!(arrow.render_indicator(false), "  ");
//! ```

/// Produces the renderable shown in front of a row.
pub trait Indicator {
    /// What the renderer draws.
    type Output;

    /// Render the indicator for a row.
    fn render_indicator(&self, is_selected: bool) -> Self::Output;
}

impl<F, R> Indicator for F
where
    F: Fn(bool) -> R,
{
    type Output = R;

    fn render_indicator(&self, is_selected: bool) -> R {
        self(is_selected)
    }
}
