//! The keyboard engine: one session per shown keyboard.
//!
//! [`Keyboard`] owns a layout and, while shown, a session holding the single
//! typing target, the shift/accent state, and any pending long press. Every
//! operation is a silent no-op when no session (or no live target) exists.

pub mod events;
pub mod resolver;
pub mod splice;
pub mod state;

pub use events::PageEvent;
pub use resolver::{classify, is_typing_target};
pub use splice::LineBreak;
pub use state::{AccentMenu, InputMode, InputState, LongPress};

use crate::constants::DEFAULT_LONG_PRESS_MS;
use crate::host::Host;
use crate::models::{ElementId, KeyKind, LayoutTable, TypingTarget};
use std::time::{Duration, Instant};
use tracing::debug;

/// Tunables for a [`Keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardSettings {
    /// How long a key must be held before its accent menu opens
    pub long_press: Duration,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(DEFAULT_LONG_PRESS_MS),
        }
    }
}

#[derive(Debug, Clone)]
struct Session {
    target: TypingTarget,
    state: InputState,
    long_press: Option<LongPress>,
    // The click that ends a long press must not dismiss the menu it opened.
    swallow_click: bool,
}

/// An on-screen keyboard bound to one layout.
#[derive(Debug, Clone)]
pub struct Keyboard {
    layout: LayoutTable,
    settings: KeyboardSettings,
    session: Option<Session>,
}

impl Keyboard {
    /// Creates a hidden keyboard.
    #[must_use]
    pub fn new(layout: LayoutTable, settings: KeyboardSettings) -> Self {
        Self {
            layout,
            settings,
            session: None,
        }
    }

    /// The layout this keyboard renders.
    #[must_use]
    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }

    /// Returns true while a session is open.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    /// The element currently receiving input.
    #[must_use]
    pub fn target(&self) -> Option<TypingTarget> {
        self.session.as_ref().map(|session| session.target)
    }

    /// Current mode; `Normal` while hidden.
    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.session
            .as_ref()
            .map_or(InputMode::Normal, |session| session.state.mode())
    }

    /// Returns true if the next character is shifted.
    #[must_use]
    pub fn shift_active(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.state.shift_active())
    }

    /// The open accent menu, if any.
    #[must_use]
    pub fn accent_menu(&self) -> Option<&AccentMenu> {
        self.session
            .as_ref()
            .and_then(|session| session.state.accent_menu())
    }

    /// The pending long press, if any.
    #[must_use]
    pub fn pending_long_press(&self) -> Option<&LongPress> {
        self.session
            .as_ref()
            .and_then(|session| session.long_press.as_ref())
    }

    /// Shows the keyboard for `element` if it is a typing target.
    ///
    /// Showing for a different target while already visible retargets the
    /// session and keeps its shift/accent state. Returns true if `element`
    /// is now the target.
    pub fn show(&mut self, host: &impl Host, element: ElementId) -> bool {
        let kind = classify(host.element(element).as_ref());
        if !kind.is_target() {
            return false;
        }

        let target = TypingTarget { element, kind };
        match &mut self.session {
            Some(session) => {
                if session.target != target {
                    debug!(element = %element, ?kind, "retargeting keyboard");
                    session.target = target;
                }
            }
            None => {
                debug!(element = %element, ?kind, layout = %self.layout.id, "showing keyboard");
                self.session = Some(Session {
                    target,
                    state: InputState::new(),
                    long_press: None,
                    swallow_click: false,
                });
            }
        }
        true
    }

    /// Hides the keyboard, releasing the target and resetting all state.
    pub fn hide(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(element = %session.target.element, "hiding keyboard");
        }
    }

    // Live target, dropping the session if the element has gone away.
    fn live_target(&mut self, host: &impl Host) -> Option<TypingTarget> {
        let target = self.session.as_ref()?.target;
        if host.element(target.element).is_none() {
            debug!(element = %target.element, "target vanished, hiding keyboard");
            self.session = None;
            return None;
        }
        Some(target)
    }

    /// Flips the one-shot shift. Ignored while the accent menu is open.
    pub fn toggle_shift(&mut self) {
        if let Some(session) = &mut self.session {
            session.state.toggle_shift();
        }
    }

    /// Types a character, upper-casing base-layout lower-case letters while
    /// shift is pending, then applies the layout's shift release policy.
    pub fn insert_character(&mut self, host: &mut impl Host, glyph: char) {
        let glyph = if self.shift_active() && self.is_base_letter(glyph) {
            glyph.to_ascii_uppercase()
        } else {
            glyph
        };
        self.type_glyph(host, glyph, true);
    }

    fn is_base_letter(&self, glyph: char) -> bool {
        glyph.is_ascii_lowercase()
            && self
                .layout
                .keys()
                .any(|key| matches!(key.kind, KeyKind::Char { base, .. } if base == glyph))
    }

    // Inserts `glyph` verbatim; `consumes_shift` applies the release policy.
    fn type_glyph(&mut self, host: &mut impl Host, glyph: char, consumes_shift: bool) {
        let Some(target) = self.live_target(host) else {
            return;
        };

        splice::insert_glyph(host, target, glyph);

        if consumes_shift {
            let policy = self.layout.shift_release;
            if let Some(session) = &mut self.session {
                session.state.consume_shift(glyph, policy);
            }
        }
    }

    /// Deletes the selection or the character before the caret.
    pub fn delete_backward(&mut self, host: &mut impl Host) {
        if let Some(target) = self.live_target(host) {
            splice::delete_glyph(host, target);
        }
    }

    /// Enter: newline on multi-line targets, form submission on single-line
    /// fields inside a form, nothing otherwise.
    pub fn insert_line_break(&mut self, host: &mut impl Host) -> LineBreak {
        let Some(target) = self.live_target(host) else {
            return LineBreak::Ignored;
        };

        let outcome = splice::line_break(host, target);
        if outcome == LineBreak::Submitted {
            debug!(element = %target.element, "enter requested form submission");
        }
        outcome
    }

    /// Clicks a key by logical id.
    ///
    /// While the accent menu is open a click only dismisses it. Unknown ids
    /// are ignored.
    pub fn press_key(&mut self, host: &mut impl Host, key_id: &str) {
        if self.live_target(host).is_none() {
            return;
        }

        if self.accent_menu().is_some() {
            self.dismiss_accent_menu();
            return;
        }

        let Some(key) = self.layout.key(key_id) else {
            debug!(key = key_id, "ignoring unknown key");
            return;
        };

        match key.kind.clone() {
            KeyKind::Char { base, shifted, .. } => match shifted {
                Some(shifted) if self.shift_active() => self.type_glyph(host, shifted, true),
                _ => self.insert_character(host, base),
            },
            KeyKind::Backspace => self.delete_backward(host),
            KeyKind::Enter => {
                self.insert_line_break(host);
            }
            KeyKind::Shift => self.toggle_shift(),
            KeyKind::Space => self.insert_character(host, ' '),
        }
    }

    /// Starts timing a press on `key_id`. Keys without accent variants, and
    /// presses while the menu is open, are ignored.
    pub fn begin_long_press(&mut self, key_id: &str, now: Instant) {
        let threshold = self.settings.long_press;
        let Some(key) = self.layout.key(key_id) else {
            return;
        };
        if !key.has_accents() {
            return;
        }
        let Some(session) = &mut self.session else {
            return;
        };
        if session.state.mode() == InputMode::AccentMenuOpen {
            return;
        }
        session.long_press = Some(LongPress::start(key_id, now, threshold));
    }

    /// Fires the pending long press if it is due. Returns true if the accent
    /// menu opened.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        if !session.long_press.as_ref().is_some_and(|press| press.is_due(now)) {
            return false;
        }
        let Some(press) = session.long_press.take() else {
            return false;
        };
        let Some(key) = self.layout.key(&press.key) else {
            return false;
        };

        let opened = session.state.open_accent_menu(key);
        if opened {
            session.swallow_click = true;
            debug!(key = %press.key, variants = key.accent_variants().len(), "accent menu opened");
        }
        opened
    }

    /// Pointer released: fires the press if already due, then cancels it.
    pub fn release_press(&mut self, now: Instant) {
        self.poll(now);
        if let Some(session) = &mut self.session {
            session.long_press = None;
        }
    }

    /// Pointer left the key: same as a release, except that no click
    /// follows, so nothing is left to swallow.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.release_press(now);
        if let Some(session) = &mut self.session {
            session.swallow_click = false;
        }
    }

    /// Types one of the open menu's variants and closes the menu.
    ///
    /// Returns false, changing nothing, if no menu is open or `glyph` is not
    /// one of its variants.
    pub fn select_accent(&mut self, host: &mut impl Host, glyph: char) -> bool {
        let Some(menu) = self.accent_menu() else {
            return false;
        };
        if !menu.variants.contains(&glyph) {
            return false;
        }
        if self.live_target(host).is_none() {
            return false;
        }

        debug!(?glyph, "accent selected");
        self.type_glyph(host, glyph, false);
        self.dismiss_accent_menu();
        true
    }

    /// Closes the accent menu without typing anything.
    pub fn dismiss_accent_menu(&mut self) {
        if let Some(session) = &mut self.session {
            session.state.close_accent_menu();
            session.swallow_click = false;
        }
    }
}
