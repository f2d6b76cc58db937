//! CLI command handlers.
//!
//! Headless access to the keyboard core: inspect layouts, replay key
//! scripts against an in-memory page, and manage configuration.

pub mod common;
pub mod config;
pub mod layout;
pub mod script;
pub mod typing;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use typing::TypeArgs;
