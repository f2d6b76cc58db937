//! Layout tables: rows of keys plus the per-layout shift policy.

use crate::models::{KeyDefinition, KeyKind};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutId {
    /// Latin QWERTY
    #[default]
    Qwerty,
    /// French AZERTY with accented base glyphs and long-press accents
    Azerty,
}

impl LayoutId {
    /// All built-in layouts, in display order.
    pub const ALL: [LayoutId; 2] = [LayoutId::Qwerty, LayoutId::Azerty];

    /// Lowercase name used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qwerty => "qwerty",
            Self::Azerty => "azerty",
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "qwerty" => Ok(Self::Qwerty),
            "azerty" => Ok(Self::Azerty),
            other => Err(format!(
                "Unknown layout '{other}'. Must be 'qwerty' or 'azerty'"
            )),
        }
    }
}

/// When a pending shift clears itself after a character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftRelease {
    /// Any typed glyph consumes the shift.
    AfterAnyGlyph,
    /// Only letters (accented ones included) consume the shift; symbols
    /// reached through shift leave it pending.
    AfterLetter,
}

impl ShiftRelease {
    /// Returns true if typing `glyph` while shifted should clear the shift.
    ///
    /// Whitespace never clears it, under either policy.
    #[must_use]
    pub fn releases_after(self, glyph: char) -> bool {
        if glyph.is_whitespace() {
            return false;
        }
        match self {
            Self::AfterAnyGlyph => true,
            Self::AfterLetter => glyph.is_alphabetic(),
        }
    }
}

/// A static, read-only table of key rows.
///
/// # Validation
///
/// - At least one row, and no empty rows
/// - Key ids are unique across the whole table
/// - Accent variants contain no duplicates
/// - Exactly one shift key
#[derive(Debug, Clone, Serialize)]
pub struct LayoutTable {
    /// Which built-in layout this is
    pub id: LayoutId,
    /// Human-readable name (shown in the keyboard header)
    pub name: String,
    /// Shift auto-release policy
    pub shift_release: ShiftRelease,
    rows: Vec<Vec<KeyDefinition>>,
    #[serde(skip)]
    lookup: HashMap<String, (usize, usize)>,
}

impl LayoutTable {
    /// Builds a table, rejecting malformed key sets.
    pub fn new(
        id: LayoutId,
        name: impl Into<String>,
        shift_release: ShiftRelease,
        rows: Vec<Vec<KeyDefinition>>,
    ) -> Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Layout '{id}' has no rows");
        }

        let mut lookup = HashMap::new();
        let mut shift_keys = 0;

        for (row_idx, row) in rows.iter().enumerate() {
            if row.is_empty() {
                anyhow::bail!("Layout '{id}' row {row_idx} is empty");
            }

            for (col_idx, key) in row.iter().enumerate() {
                if key.id.is_empty() {
                    anyhow::bail!("Layout '{id}' has a key without an id at row {row_idx}");
                }

                if lookup.insert(key.id.clone(), (row_idx, col_idx)).is_some() {
                    anyhow::bail!("Layout '{id}' defines key '{}' more than once", key.id);
                }

                let variants = key.accent_variants();
                let unique: HashSet<&char> = variants.iter().collect();
                if unique.len() != variants.len() {
                    anyhow::bail!("Key '{}' repeats an accent variant", key.id);
                }

                if key.kind == KeyKind::Shift {
                    shift_keys += 1;
                }
            }
        }

        if shift_keys != 1 {
            anyhow::bail!("Layout '{id}' must have exactly one shift key, found {shift_keys}");
        }

        Ok(Self {
            id,
            name: name.into(),
            shift_release,
            rows,
            lookup,
        })
    }

    /// Looks up a key by logical id.
    #[must_use]
    pub fn key(&self, id: &str) -> Option<&KeyDefinition> {
        self.lookup.get(id).map(|&(row, col)| &self.rows[row][col])
    }

    /// Rows in top-to-bottom order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<KeyDefinition>] {
        &self.rows
    }

    /// Iterates over every key, row by row.
    pub fn keys(&self) -> impl Iterator<Item = &KeyDefinition> {
        self.rows.iter().flatten()
    }

    /// Number of keys in the table.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.lookup.len()
    }
}
