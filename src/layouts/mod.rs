//! Built-in layout tables.
//!
//! Each layout is a plain row description turned into a validated
//! [`LayoutTable`] on demand.

mod azerty;
mod qwerty;

use crate::models::{KeyDefinition, KeyKind, LayoutId, LayoutTable};
use anyhow::{Context, Result};

/// Builds the table for a built-in layout.
pub fn builtin(id: LayoutId) -> Result<LayoutTable> {
    let table = match id {
        LayoutId::Qwerty => qwerty::table(),
        LayoutId::Azerty => azerty::table(),
    };
    table.with_context(|| format!("Built-in layout '{id}' is malformed"))
}

fn backspace() -> KeyDefinition {
    KeyDefinition::action("backspace", "⌫", KeyKind::Backspace)
}

fn shift() -> KeyDefinition {
    KeyDefinition::action("shift", "⇧", KeyKind::Shift)
}

fn enter(label: &str) -> KeyDefinition {
    KeyDefinition::action("enter", label, KeyKind::Enter)
}

fn space(label: &str) -> KeyDefinition {
    KeyDefinition::action("space", label, KeyKind::Space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftRelease;

    #[test]
    fn test_all_builtins_are_valid() {
        for id in LayoutId::ALL {
            let table = builtin(id).unwrap();
            assert_eq!(table.id, id);
            for action in ["backspace", "enter", "shift", "space"] {
                assert!(table.key(action).is_some(), "{id} is missing {action}");
            }
        }
    }

    #[test]
    fn test_qwerty_shape() {
        let table = builtin(LayoutId::Qwerty).unwrap();
        let sizes: Vec<usize> = table.rows().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![11, 10, 10, 11, 1]);
        assert_eq!(table.shift_release, ShiftRelease::AfterAnyGlyph);
        assert!(table.keys().all(|k| !k.has_accents()));
        assert!(table.key("?").is_some());
    }

    #[test]
    fn test_azerty_shape() {
        let table = builtin(LayoutId::Azerty).unwrap();
        let sizes: Vec<usize> = table.rows().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![12, 12, 12, 11, 1]);
        assert_eq!(table.shift_release, ShiftRelease::AfterLetter);
        assert_eq!(table.key("space").unwrap().label, "Espace");
    }

    #[test]
    fn test_azerty_accents() {
        let table = builtin(LayoutId::Azerty).unwrap();
        assert_eq!(
            table.key("a").unwrap().accent_variants(),
            &['à', 'á', 'â', 'ä', 'ã', 'å']
        );
        assert_eq!(table.key("c").unwrap().accent_variants(), &['ç']);
        assert!(!table.key("z").unwrap().has_accents());

        let with_accents: Vec<&str> = table
            .keys()
            .filter(|k| k.has_accents())
            .map(|k| k.id.as_str())
            .collect();
        assert_eq!(with_accents, vec!["a", "e", "y", "u", "i", "o", "c", "n"]);
    }

    #[test]
    fn test_azerty_shifted_symbols() {
        let table = builtin(LayoutId::Azerty).unwrap();
        let KeyKind::Char { shifted, .. } = &table.key("é").unwrap().kind else {
            panic!("é should be a character key");
        };
        assert_eq!(*shifted, Some('2'));
    }
}
