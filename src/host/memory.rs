//! In-memory page used by the command-line driver and by tests.

use super::{EditCommand, Host, Notification};
use crate::engine::splice;
use crate::models::{ElementId, ElementInfo, ElementTag, Selection};
use serde::Serialize;
use std::collections::BTreeMap;

/// Input types that expose no caret (selection APIs return nothing).
const CARETLESS_INPUT_TYPES: [&str; 2] = ["number", "email"];

/// A notification recorded by [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchedEvent {
    /// Element the notification was dispatched on
    pub target: ElementId,
    /// What was dispatched
    pub notification: Notification,
}

#[derive(Debug, Clone)]
struct Node {
    info: ElementInfo,
    value: String,
    selection: Selection,
    parent: Option<ElementId>,
}

/// A flat element tree with values, carets, and an event log.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: BTreeMap<ElementId, Node>,
    next_id: u32,
    events: Vec<DispatchedEvent>,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element, optionally nested inside `parent`.
    pub fn insert(&mut self, info: ElementInfo, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                info,
                value: String::new(),
                selection: Selection::default(),
                parent,
            },
        );
        id
    }

    /// Adds a `<form>` element.
    pub fn insert_form(&mut self) -> ElementId {
        self.insert(ElementInfo::other("form", false), None)
    }

    /// Removes an element. Children keep a dangling parent link, which
    /// simply stops resolving.
    pub fn remove(&mut self, id: ElementId) {
        self.nodes.remove(&id);
    }

    /// Sets an element's text and caret without dispatching anything, the
    /// way a page script would prefill a field.
    pub fn set_text(&mut self, id: ElementId, text: &str, selection: Selection) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.value = text.to_string();
            node.selection = selection.clamp(text.chars().count());
        }
    }

    /// Every notification dispatched so far, in order.
    #[must_use]
    pub fn events(&self) -> &[DispatchedEvent] {
        &self.events
    }

    /// Notifications dispatched on one element, in order.
    #[must_use]
    pub fn events_for(&self, id: ElementId) -> Vec<Notification> {
        self.events
            .iter()
            .filter(|event| event.target == id)
            .map(|event| event.notification)
            .collect()
    }

    /// Forgets recorded notifications.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn exposes_caret(info: &ElementInfo) -> bool {
        match info.tag {
            ElementTag::Input => info.input_type.as_deref().map_or(true, |kind| {
                !CARETLESS_INPUT_TYPES.contains(&kind.to_lowercase().as_str())
            }),
            ElementTag::TextArea => true,
            ElementTag::Other(_) => info.editable,
        }
    }
}

impl Host for MemoryDocument {
    fn element(&self, id: ElementId) -> Option<ElementInfo> {
        self.nodes.get(&id).map(|node| node.info.clone())
    }

    fn value(&self, id: ElementId) -> String {
        self.nodes
            .get(&id)
            .map(|node| node.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: ElementId, value: String) {
        if let Some(node) = self.nodes.get_mut(&id) {
            // Assigning a value moves the caret to the end, as browsers do.
            node.selection = Selection::caret(value.chars().count());
            node.value = value;
        }
    }

    fn selection(&self, id: ElementId) -> Option<Selection> {
        let node = self.nodes.get(&id)?;
        Self::exposes_caret(&node.info).then_some(node.selection)
    }

    fn set_selection(&mut self, id: ElementId, selection: Selection) {
        if let Some(node) = self.nodes.get_mut(&id) {
            if Self::exposes_caret(&node.info) {
                node.selection = selection.clamp(node.value.chars().count());
            }
        }
    }

    fn dispatch(&mut self, id: ElementId, notification: Notification) {
        if self.nodes.contains_key(&id) {
            self.events.push(DispatchedEvent {
                target: id,
                notification,
            });
        }
    }

    fn enclosing_form(&self, id: ElementId) -> Option<ElementId> {
        let mut current = self.nodes.get(&id)?.parent;
        while let Some(parent_id) = current {
            let parent = self.nodes.get(&parent_id)?;
            if parent.info.tag == ElementTag::Other("form".to_string()) {
                return Some(parent_id);
            }
            current = parent.parent;
        }
        None
    }

    fn exec_command(&mut self, id: ElementId, command: EditCommand) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };

        let edit = match command {
            EditCommand::InsertText(text) => {
                Some(splice::insert_text(&node.value, node.selection, &text))
            }
            EditCommand::DeleteBackward => splice::delete_backward(&node.value, node.selection),
        };

        if let Some((value, selection)) = edit {
            node.value = value;
            node.selection = selection;
            self.events.push(DispatchedEvent {
                target: id,
                notification: Notification::Input,
            });
        }
    }
}
