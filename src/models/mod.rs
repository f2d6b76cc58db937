//! Data models for keys, layouts, and page elements.
//!
//! Models are independent of the host page and of the keyboard session.

pub mod key;
pub mod layout_table;
pub mod target;

// Re-export all model types
pub use key::{KeyDefinition, KeyKind};
pub use layout_table::{LayoutId, LayoutTable, ShiftRelease};
pub use target::{ElementId, ElementInfo, ElementTag, Selection, TargetKind, TypingTarget};
