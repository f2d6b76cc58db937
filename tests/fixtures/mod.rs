//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::path::Path;
use std::process::{Command, Output};
use std::time::{Duration, Instant};
use vkbd::engine::{Keyboard, KeyboardSettings};
use vkbd::host::MemoryDocument;
use vkbd::layouts::builtin;
use vkbd::models::{ElementId, ElementInfo, LayoutId, Selection};

/// Path to the vkbd binary
pub fn vkbd_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vkbd")
}

/// Runs vkbd with an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(vkbd_bin())
        .env("VKBD_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs `vkbd type --json ...` in a fresh config directory and parses stdout.
pub fn type_json(args: &[&str]) -> serde_json::Value {
    let config = tempfile::TempDir::new().expect("Failed to create temp dir");
    let mut full = vec!["type", "--json"];
    full.extend_from_slice(args);

    let output = run_isolated(&full, config.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "type should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON")
}

/// A hidden keyboard with default settings.
pub fn keyboard(layout: LayoutId) -> Keyboard {
    Keyboard::new(
        builtin(layout).expect("built-in layouts are valid"),
        KeyboardSettings::default(),
    )
}

/// A page with one element holding `text` and caret `selection`.
pub fn page_with(
    info: ElementInfo,
    text: &str,
    selection: Selection,
) -> (MemoryDocument, ElementId) {
    let mut doc = MemoryDocument::new();
    let id = doc.insert(info, None);
    doc.set_text(id, text, selection);
    (doc, id)
}

/// A keyboard already shown for the single element of a fresh page.
pub fn focused(
    layout: LayoutId,
    info: ElementInfo,
    text: &str,
    selection: Selection,
) -> (Keyboard, MemoryDocument, ElementId) {
    let (doc, id) = page_with(info, text, selection);
    let mut kb = keyboard(layout);
    assert!(kb.show(&doc, id), "fixture element must be a typing target");
    (kb, doc, id)
}

/// `start + ms`.
pub fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}
