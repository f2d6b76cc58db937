//! Shift and accent-menu state machine, plus the long-press timer.
//!
//! ```text
//!   Normal --toggle_shift--> ShiftPending --toggle_shift--> Normal
//!   Normal | ShiftPending --long press elapsed--> AccentMenuOpen
//!   AccentMenuOpen --select / dismiss--> Normal
//! ```

use crate::models::{KeyDefinition, ShiftRelease};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Observable state of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// No modifier pending
    #[default]
    Normal,
    /// Next character is shifted
    ShiftPending,
    /// A long-press accent picker is showing
    AccentMenuOpen,
}

/// Accent picker opened by a long press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccentMenu {
    /// Id of the key whose variants are showing
    pub source_key: String,
    /// Variants in the order the key declares them (never empty)
    pub variants: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Normal,
    ShiftPending,
    AccentMenu(AccentMenu),
}

/// Shift and accent state for one keyboard session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    mode: Mode,
}

impl InputState {
    /// Fresh state in `Normal`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        match self.mode {
            Mode::Normal => InputMode::Normal,
            Mode::ShiftPending => InputMode::ShiftPending,
            Mode::AccentMenu(_) => InputMode::AccentMenuOpen,
        }
    }

    /// Returns true if the next character is shifted.
    #[must_use]
    pub fn shift_active(&self) -> bool {
        self.mode == Mode::ShiftPending
    }

    /// The open accent menu, if any.
    #[must_use]
    pub fn accent_menu(&self) -> Option<&AccentMenu> {
        match &self.mode {
            Mode::AccentMenu(menu) => Some(menu),
            _ => None,
        }
    }

    /// Flips shift. Does nothing while the accent menu is open.
    ///
    /// Returns true if the state changed.
    pub fn toggle_shift(&mut self) -> bool {
        self.mode = match self.mode {
            Mode::Normal => Mode::ShiftPending,
            Mode::ShiftPending => Mode::Normal,
            Mode::AccentMenu(_) => return false,
        };
        true
    }

    /// Clears a pending shift if `glyph` consumes it under `policy`.
    pub fn consume_shift(&mut self, glyph: char, policy: ShiftRelease) {
        if self.mode == Mode::ShiftPending && policy.releases_after(glyph) {
            self.mode = Mode::Normal;
        }
    }

    /// Opens the accent menu for `key`. Keys without variants are ignored.
    ///
    /// Returns true if the menu opened.
    pub fn open_accent_menu(&mut self, key: &KeyDefinition) -> bool {
        if !key.has_accents() || matches!(self.mode, Mode::AccentMenu(_)) {
            return false;
        }
        self.mode = Mode::AccentMenu(AccentMenu {
            source_key: key.id.clone(),
            variants: key.accent_variants().to_vec(),
        });
        true
    }

    /// Closes the accent menu, returning it. A no-op outside the menu.
    pub fn close_accent_menu(&mut self) -> Option<AccentMenu> {
        match std::mem::take(&mut self.mode) {
            Mode::AccentMenu(menu) => Some(menu),
            other => {
                self.mode = other;
                None
            }
        }
    }

    /// Back to `Normal`, whatever the current mode.
    pub fn reset(&mut self) {
        self.mode = Mode::Normal;
    }
}

/// A pending long press: fires once at `deadline` unless canceled first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongPress {
    /// Key being held
    pub key: String,
    deadline: Instant,
}

impl LongPress {
    /// Starts timing a press on `key` at `now`.
    pub fn start(key: impl Into<String>, now: Instant, threshold: Duration) -> Self {
        Self {
            key: key.into(),
            deadline: now + threshold,
        }
    }

    /// Returns true once the press has been held for the full threshold.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// When the press fires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
