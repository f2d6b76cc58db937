//! On-screen keyboard core.
//!
//! This library decides which page elements are typing targets, tracks the
//! one-shot shift and long-press accent menu, and splices key presses into
//! the focused element's text. Pages are reached through the [`host::Host`]
//! trait; [`host::MemoryDocument`] is a complete in-memory implementation.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod host;
pub mod layouts;
pub mod models;
