//! Routing of raw page events into keyboard operations.

use super::Keyboard;
use crate::host::Host;
use crate::models::ElementId;
use std::time::Instant;

/// Events the presentation layer forwards to the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Document-wide click. `inside_keyboard` is set for clicks on keyboard
    /// chrome that is not a key.
    Click {
        /// Clicked element, if the click landed on a page element
        target: Option<ElementId>,
        /// Whether the click landed inside the keyboard popup
        inside_keyboard: bool,
    },
    /// Document-wide focus (capturing).
    Focus {
        /// Element receiving focus
        target: ElementId,
    },
    /// Pointer pressed on a key.
    KeyDown {
        /// Logical key id
        key: String,
        /// When the press started
        at: Instant,
    },
    /// Pointer released over the keyboard.
    KeyUp {
        /// When the pointer was released
        at: Instant,
    },
    /// Pointer left the keyboard.
    KeyLeave {
        /// When the pointer left
        at: Instant,
    },
    /// The host's deferred timer fired.
    Tick {
        /// Current time
        at: Instant,
    },
    /// A key was clicked.
    KeyClick {
        /// Logical key id
        key: String,
    },
    /// An accent menu option was clicked.
    AccentClick {
        /// The chosen variant
        glyph: char,
    },
    /// The keyboard's close button was clicked.
    CloseClick,
}

impl Keyboard {
    /// Applies one page event.
    pub fn handle_event(&mut self, host: &mut impl Host, event: PageEvent) {
        match event {
            PageEvent::Click {
                target,
                inside_keyboard,
            } => {
                self.dismiss_accent_menu();
                let shown = match target {
                    Some(element) => self.show(host, element),
                    None => false,
                };
                if !shown && !inside_keyboard {
                    self.hide();
                }
            }
            PageEvent::Focus { target } => {
                self.show(host, target);
            }
            PageEvent::KeyDown { key, at } => self.begin_long_press(&key, at),
            PageEvent::KeyUp { at } => self.release_press(at),
            PageEvent::KeyLeave { at } => self.pointer_leave(at),
            PageEvent::Tick { at } => {
                self.poll(at);
            }
            PageEvent::KeyClick { key } => {
                if self.take_swallowed_click() {
                    return;
                }
                self.press_key(host, &key);
            }
            PageEvent::AccentClick { glyph } => {
                self.select_accent(host, glyph);
            }
            PageEvent::CloseClick => self.hide(),
        }
    }

    fn take_swallowed_click(&mut self) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| std::mem::take(&mut session.swallow_click))
    }
}
