//! Key definitions for on-screen layouts.

use serde::Serialize;

/// What a key does when it is clicked.
///
/// Character keys carry their glyphs; every other kind is an editing or
/// keyboard action with no glyph of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyKind {
    /// Types a glyph.
    Char {
        /// Glyph typed without shift
        base: char,
        /// Glyph typed with shift, used verbatim (never re-cased)
        #[serde(skip_serializing_if = "Option::is_none")]
        shifted: Option<char>,
        /// Ordered variants offered by a long press
        #[serde(skip_serializing_if = "Vec::is_empty")]
        accents: Vec<char>,
    },
    /// Deletes backwards.
    Backspace,
    /// Line break, or submit on single-line fields.
    Enter,
    /// One-shot shift modifier.
    Shift,
    /// Types a space.
    Space,
}

/// Immutable key record: a logical id, the label painted on the key, and
/// what the key does.
///
/// # Validation
///
/// - `id` must be unique within its layout (checked by `LayoutTable::new`)
/// - `accents` must not repeat a glyph (checked by `LayoutTable::new`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyDefinition {
    /// Logical identifier, unique within a layout (e.g., "a", "é", "backspace")
    pub id: String,
    /// Label shown on the key face
    pub label: String,
    /// Behavior of the key
    #[serde(flatten)]
    pub kind: KeyKind,
}

impl KeyDefinition {
    /// Creates a character key whose id and label are its base glyph.
    pub fn char(base: char) -> Self {
        Self {
            id: base.to_string(),
            label: base.to_string(),
            kind: KeyKind::Char {
                base,
                shifted: None,
                accents: Vec::new(),
            },
        }
    }

    /// Creates an action key (backspace, enter, shift, space).
    pub fn action(id: impl Into<String>, label: impl Into<String>, kind: KeyKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
        }
    }

    /// Sets the explicit shifted glyph. Ignored for action keys.
    pub fn with_shifted(mut self, glyph: char) -> Self {
        if let KeyKind::Char { shifted, .. } = &mut self.kind {
            *shifted = Some(glyph);
        }
        self
    }

    /// Sets the long-press accent variants. Ignored for action keys.
    pub fn with_accents(mut self, variants: &[char]) -> Self {
        if let KeyKind::Char { accents, .. } = &mut self.kind {
            *accents = variants.to_vec();
        }
        self
    }

    /// Long-press variants of this key, empty when it declares none.
    #[must_use]
    pub fn accent_variants(&self) -> &[char] {
        match &self.kind {
            KeyKind::Char { accents, .. } => accents,
            _ => &[],
        }
    }

    /// Returns true if a long press on this key opens an accent menu.
    #[must_use]
    pub fn has_accents(&self) -> bool {
        !self.accent_variants().is_empty()
    }

    /// Returns true for the shift key.
    #[must_use]
    pub fn is_shift(&self) -> bool {
        self.kind == KeyKind::Shift
    }
}
