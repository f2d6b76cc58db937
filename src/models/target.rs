//! Page elements as seen by the keyboard: identity, classification and caret.

use serde::Serialize;
use std::fmt;

/// Opaque handle to an element owned by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element tag, reduced to what typing-target detection needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementTag {
    /// `<input>`
    Input,
    /// `<textarea>`
    TextArea,
    /// Anything else (div, span, button, form, ...)
    Other(String),
}

/// Snapshot of the element properties the keyboard inspects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementInfo {
    /// Element tag
    pub tag: ElementTag,
    /// Declared input type; `None` means the browser default ("text")
    pub input_type: Option<String>,
    /// Explicitly marked editable by the page (`contenteditable="true"`)
    pub editable: bool,
}

impl ElementInfo {
    /// An `<input>` with the given type.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self {
            tag: ElementTag::Input,
            input_type: Some(input_type.into()),
            editable: false,
        }
    }

    /// A `<textarea>`.
    #[must_use]
    pub fn textarea() -> Self {
        Self {
            tag: ElementTag::TextArea,
            input_type: None,
            editable: false,
        }
    }

    /// Any other element, optionally marked editable.
    pub fn other(tag: impl Into<String>, editable: bool) -> Self {
        Self {
            tag: ElementTag::Other(tag.into()),
            input_type: None,
            editable,
        }
    }
}

/// Closed classification of an element as a typing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Single-line input control
    TextField,
    /// Multi-line text area
    TextArea,
    /// Page-defined editable region without a value/selection model
    EditableRegion,
    /// Not something the keyboard types into
    NotATarget,
}

impl TargetKind {
    /// Returns true for anything the keyboard may type into.
    #[must_use]
    pub fn is_target(self) -> bool {
        self != Self::NotATarget
    }

    /// Returns true if Enter inserts a newline rather than submitting.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        matches!(self, Self::TextArea | Self::EditableRegion)
    }
}

/// Caret range in char offsets. Always normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    /// First selected offset (caret position when collapsed)
    pub start: usize,
    /// One past the last selected offset
    pub end: usize,
}

impl Selection {
    /// Creates a selection, swapping the bounds if given backwards.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// A collapsed caret at `pos`.
    #[must_use]
    pub const fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    /// Clamps both bounds to a text of `len` chars.
    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_collapsed() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// The single element currently receiving keyboard input.
///
/// The caret is not cached here: it is read from the host on every
/// operation so page-side cursor moves are always honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypingTarget {
    /// Element receiving input
    pub element: ElementId,
    /// How the element was classified when it became the target
    pub kind: TargetKind,
}
