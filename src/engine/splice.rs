//! Text splicing on typing targets.
//!
//! Offsets are char offsets. Targets with a value model are spliced here and
//! then notified; editable regions hand the edit to the host's native
//! editing command.

use crate::host::{EditCommand, Host, Notification};
use crate::models::{Selection, TargetKind, TypingTarget};
use tracing::trace;

/// What Enter did on a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    /// A newline was inserted
    Inserted,
    /// The enclosing form was asked to submit
    Submitted,
    /// Single-line field outside any form
    Ignored,
}

fn byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(idx, _)| idx)
}

/// Replaces the selection with `insert`; the caret lands after it.
#[must_use]
pub fn insert_text(text: &str, selection: Selection, insert: &str) -> (String, Selection) {
    let selection = selection.clamp(text.chars().count());
    let start = byte_index(text, selection.start);
    let end = byte_index(text, selection.end);

    let mut value = String::with_capacity(text.len() + insert.len());
    value.push_str(&text[..start]);
    value.push_str(insert);
    value.push_str(&text[end..]);

    let caret = selection.start + insert.chars().count();
    (value, Selection::caret(caret))
}

/// Deletes the selection, or the char before a collapsed caret.
///
/// Returns `None` when there is nothing to delete.
#[must_use]
pub fn delete_backward(text: &str, selection: Selection) -> Option<(String, Selection)> {
    let selection = selection.clamp(text.chars().count());

    let range = if !selection.is_collapsed() {
        selection
    } else if selection.start > 0 {
        Selection::new(selection.start - 1, selection.start)
    } else {
        return None;
    };

    let start = byte_index(text, range.start);
    let end = byte_index(text, range.end);
    let value = format!("{}{}", &text[..start], &text[end..]);
    Some((value, Selection::caret(range.start)))
}

// Controls that expose no caret are edited at the end of their value.
fn current_selection(host: &impl Host, target: TypingTarget, text: &str) -> Selection {
    host.selection(target.element)
        .unwrap_or_else(|| Selection::caret(text.chars().count()))
}

/// Inserts a glyph at the target's caret and notifies the page.
pub fn insert_glyph(host: &mut impl Host, target: TypingTarget, glyph: char) {
    let id = target.element;
    match target.kind {
        TargetKind::TextField | TargetKind::TextArea => {
            let text = host.value(id);
            let selection = current_selection(host, target, &text);
            let (value, caret) = insert_text(&text, selection, glyph.encode_utf8(&mut [0; 4]));
            trace!(element = %id, ?glyph, caret = caret.start, "spliced glyph");
            host.set_value(id, value);
            host.set_selection(id, caret);
            host.dispatch(id, Notification::Input);
            host.dispatch(id, Notification::Change);
        }
        TargetKind::EditableRegion => {
            host.exec_command(id, EditCommand::InsertText(glyph.to_string()));
        }
        TargetKind::NotATarget => {}
    }
}

/// Deletes backwards on the target. Returns true if anything was removed
/// from a value-model target; editable regions report true whenever the
/// native command was issued.
pub fn delete_glyph(host: &mut impl Host, target: TypingTarget) -> bool {
    let id = target.element;
    match target.kind {
        TargetKind::TextField | TargetKind::TextArea => {
            let text = host.value(id);
            let selection = current_selection(host, target, &text);
            let Some((value, caret)) = delete_backward(&text, selection) else {
                return false;
            };
            trace!(element = %id, caret = caret.start, "deleted backwards");
            host.set_value(id, value);
            host.set_selection(id, caret);
            host.dispatch(id, Notification::Input);
            true
        }
        TargetKind::EditableRegion => {
            host.exec_command(id, EditCommand::DeleteBackward);
            true
        }
        TargetKind::NotATarget => false,
    }
}

/// Enter: newline on multi-line targets, submit request on single-line
/// fields inside a form, nothing otherwise.
pub fn line_break(host: &mut impl Host, target: TypingTarget) -> LineBreak {
    if target.kind.is_multiline() {
        insert_glyph(host, target, '\n');
        return LineBreak::Inserted;
    }

    match host.enclosing_form(target.element) {
        Some(form) => {
            host.dispatch(form, Notification::Submit);
            LineBreak::Submitted
        }
        None => LineBreak::Ignored,
    }
}
