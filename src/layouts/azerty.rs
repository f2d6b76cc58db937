//! French AZERTY.
//!
//! The number row types accented letters and punctuation; shift selects the
//! digits. Vowels and a few consonants open an accent menu on long press.

use super::{backspace, enter, shift, space};
use crate::models::{KeyDefinition, LayoutId, LayoutTable, ShiftRelease};
use anyhow::Result;

/// (base, shifted) pairs, left to right.
const NUMBER_ROW: [(char, char); 11] = [
    ('&', '1'),
    ('é', '2'),
    ('"', '3'),
    ('\'', '4'),
    ('(', '5'),
    ('-', '6'),
    ('è', '7'),
    ('_', '8'),
    ('ç', '9'),
    ('à', '0'),
    (')', '°'),
];

const TOP_ROW: [(char, char); 12] = [
    ('a', 'A'),
    ('z', 'Z'),
    ('e', 'E'),
    ('r', 'R'),
    ('t', 'T'),
    ('y', 'Y'),
    ('u', 'U'),
    ('i', 'I'),
    ('o', 'O'),
    ('p', 'P'),
    ('^', '¨'),
    ('$', '£'),
];

const HOME_ROW: [(char, char); 11] = [
    ('q', 'Q'),
    ('s', 'S'),
    ('d', 'D'),
    ('f', 'F'),
    ('g', 'G'),
    ('h', 'H'),
    ('j', 'J'),
    ('k', 'K'),
    ('l', 'L'),
    ('m', 'M'),
    ('ù', '%'),
];

const BOTTOM_ROW: [(char, char); 10] = [
    ('w', 'W'),
    ('x', 'X'),
    ('c', 'C'),
    ('v', 'V'),
    ('b', 'B'),
    ('n', 'N'),
    (',', '?'),
    (';', '.'),
    (':', '/'),
    ('!', '§'),
];

fn accents_for(base: char) -> &'static [char] {
    match base {
        'a' => &['à', 'á', 'â', 'ä', 'ã', 'å'],
        'e' => &['è', 'é', 'ê', 'ë'],
        'i' => &['ì', 'í', 'î', 'ï'],
        'o' => &['ò', 'ó', 'ô', 'ö', 'õ', 'ø'],
        'u' => &['ù', 'ú', 'û', 'ü'],
        'c' => &['ç'],
        'n' => &['ñ'],
        'y' => &['ÿ'],
        _ => &[],
    }
}

fn keys(pairs: &[(char, char)]) -> impl Iterator<Item = KeyDefinition> + '_ {
    pairs.iter().map(|&(base, shifted)| {
        KeyDefinition::char(base)
            .with_shifted(shifted)
            .with_accents(accents_for(base))
    })
}

pub(super) fn table() -> Result<LayoutTable> {
    let rows = vec![
        keys(&NUMBER_ROW).chain([backspace()]).collect(),
        keys(&TOP_ROW).collect(),
        keys(&HOME_ROW).chain([enter("↵")]).collect(),
        [shift()].into_iter().chain(keys(&BOTTOM_ROW)).collect(),
        vec![space("Espace")],
    ];

    LayoutTable::new(
        LayoutId::Azerty,
        "Clavier Virtuel AZERTY",
        ShiftRelease::AfterLetter,
        rows,
    )
}
