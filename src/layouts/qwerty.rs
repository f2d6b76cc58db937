//! Latin QWERTY: letters are upper-cased by shift, no accent menus.

use super::{backspace, enter, shift, space};
use crate::models::{KeyDefinition, LayoutId, LayoutTable, ShiftRelease};
use anyhow::Result;

fn chars(glyphs: &str) -> impl Iterator<Item = KeyDefinition> + '_ {
    glyphs.chars().map(KeyDefinition::char)
}

pub(super) fn table() -> Result<LayoutTable> {
    let rows = vec![
        chars("1234567890").chain([backspace()]).collect(),
        chars("qwertyuiop").collect(),
        chars("asdfghjkl").chain([enter("Enter")]).collect(),
        [shift()].into_iter().chain(chars("zxcvbnm,.?")).collect(),
        vec![space("Space")],
    ];

    LayoutTable::new(
        LayoutId::Qwerty,
        "Virtual Keyboard",
        ShiftRelease::AfterAnyGlyph,
        rows,
    )
}
