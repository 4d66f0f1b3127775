#![forbid(unsafe_code)]

//! Key to navigation-command mapping.
//!
//! # Bindings
//!
//! | Command     | Vim key | Named key      |
//! |-------------|---------|----------------|
//! | `MoveDown`  | `j`     | Down           |
//! | `MoveUp`    | `k`     | Up             |
//! | `MoveRight` | `l`     | Right          |
//! | `MoveLeft`  | `h`     | Left           |
//! | `MoveHome`  | `^`     | Home           |
//! | `MoveEnd`   | `$`     | End            |
//! | `Confirm`   |         | Enter / Return |
//!
//! Anything else resolves to `None`. Unrecognized keys are not an error.
//!
//! # Example
//!
//! ```
//! use colpick_core::event::{KeyCode, KeyEvent};
//! use colpick_core::keymap::{Keymap, NavCommand};
//!
//! let keymap = Keymap::default();
//! assert_eq!(keymap.resolve(&KeyEvent::char('j')), Some(NavCommand::MoveDown));
//! assert_eq!(keymap.resolve(&KeyEvent::new(KeyCode::End)), Some(NavCommand::MoveEnd));
//! assert_eq!(keymap.resolve(&KeyEvent::char('x')), None);
//! ```

use crate::event::{KeyCode, KeyEvent};

/// A logical navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Next row within the current column.
    MoveDown,
    /// Previous row within the current column.
    MoveUp,
    /// Same row in the next column.
    MoveRight,
    /// Same row in the previous column.
    MoveLeft,
    /// First item.
    MoveHome,
    /// Last item.
    MoveEnd,
    /// Pick the highlighted item.
    Confirm,
}

impl NavCommand {
    /// All commands, in table order.
    pub const ALL: [Self; 7] = [
        Self::MoveDown,
        Self::MoveUp,
        Self::MoveRight,
        Self::MoveLeft,
        Self::MoveHome,
        Self::MoveEnd,
        Self::Confirm,
    ];

    /// Stable name used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MoveDown => "move_down",
            Self::MoveUp => "move_up",
            Self::MoveRight => "move_right",
            Self::MoveLeft => "move_left",
            Self::MoveHome => "move_home",
            Self::MoveEnd => "move_end",
            Self::Confirm => "confirm",
        }
    }
}

/// Configuration for [`Keymap`].
///
/// # Environment Variables
///
/// | Variable | Type | Default | Description |
/// |----------|------|---------|-------------|
/// | `COLPICK_DISABLE_VIM_KEYS` | bool | false | Ignore `h`/`j`/`k`/`l`/`^`/`$` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeymapConfig {
    /// Accept the single-character vim bindings next to the named keys.
    pub vim_keys: bool,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self { vim_keys: true }
    }
}

impl KeymapConfig {
    /// Build a config from defaults overridden by environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from defaults overridden by `lookup(variable)`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(val) = lookup("COLPICK_DISABLE_VIM_KEYS") {
            config.vim_keys = !parse_flag(&val);
        }
        config
    }
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim();
    val == "1" || val.eq_ignore_ascii_case("true")
}

/// Resolves decoded key events into [`NavCommand`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keymap {
    config: KeymapConfig,
}

impl Keymap {
    /// Create a keymap with the given configuration.
    #[must_use]
    pub const fn new(config: KeymapConfig) -> Self {
        Self { config }
    }

    /// Create a keymap configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(KeymapConfig::from_env())
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> KeymapConfig {
        self.config
    }

    /// Resolve a key event to a command.
    ///
    /// Returns `None` for releases, for keys held with Ctrl/Alt/Super and
    /// for anything not in the binding table.
    #[must_use]
    pub fn resolve(&self, event: &KeyEvent) -> Option<NavCommand> {
        if !event.is_press() || event.has_chord_modifier() {
            return None;
        }

        match event.code {
            KeyCode::Down => Some(NavCommand::MoveDown),
            KeyCode::Up => Some(NavCommand::MoveUp),
            KeyCode::Right => Some(NavCommand::MoveRight),
            KeyCode::Left => Some(NavCommand::MoveLeft),
            KeyCode::Home => Some(NavCommand::MoveHome),
            KeyCode::End => Some(NavCommand::MoveEnd),
            KeyCode::Enter => Some(NavCommand::Confirm),
            // Some terminals deliver Return as a bare carriage return.
            KeyCode::Char('\r' | '\n') => Some(NavCommand::Confirm),
            KeyCode::Char(c) if self.config.vim_keys => vim_command(c),
            _ => None,
        }
    }
}

fn vim_command(c: char) -> Option<NavCommand> {
    match c {
        'j' => Some(NavCommand::MoveDown),
        'k' => Some(NavCommand::MoveUp),
        'l' => Some(NavCommand::MoveRight),
        'h' => Some(NavCommand::MoveLeft),
        '^' => Some(NavCommand::MoveHome),
        '$' => Some(NavCommand::MoveEnd),
        _ => None,
    }
}
