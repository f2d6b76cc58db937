//! Boundary between the keyboard core and the page it types into.
//!
//! The core never owns page elements. It names them by [`ElementId`] and
//! reads or mutates them only through [`Host`], so the same engine runs
//! against a real page binding or the in-memory [`MemoryDocument`].

mod memory;

pub use memory::{DispatchedEvent, MemoryDocument};

use crate::models::{ElementId, ElementInfo, Selection};
use serde::Serialize;

/// Notifications dispatched on page elements so page listeners observe a
/// mutation as if it had been typed natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    /// The value changed (`input`)
    Input,
    /// The value was committed (`change`)
    Change,
    /// A form submission was requested (`submit`)
    Submit,
}

impl Notification {
    /// DOM event name.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change => "change",
            Self::Submit => "submit",
        }
    }
}

/// Native editing commands, used for editable regions that have no plain
/// value/selection model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert text at the caret, replacing any selection
    InsertText(String),
    /// Delete the selection, or one unit before the caret
    DeleteBackward,
}

/// Page access needed by the keyboard core.
pub trait Host {
    /// Describes an element, or `None` if it no longer exists.
    fn element(&self, id: ElementId) -> Option<ElementInfo>;

    /// Current text value.
    fn value(&self, id: ElementId) -> String;

    /// Replaces the text value.
    fn set_value(&mut self, id: ElementId, value: String);

    /// Current caret range, or `None` for controls that expose no caret.
    fn selection(&self, id: ElementId) -> Option<Selection>;

    /// Moves the caret.
    fn set_selection(&mut self, id: ElementId, selection: Selection);

    /// Dispatches a notification on an element.
    fn dispatch(&mut self, id: ElementId, notification: Notification);

    /// Nearest enclosing form of an element.
    fn enclosing_form(&self, id: ElementId) -> Option<ElementId>;

    /// Runs a native editing command on an element. Any notification the
    /// command produces is the host's responsibility.
    fn exec_command(&mut self, id: ElementId, command: EditCommand);
}
