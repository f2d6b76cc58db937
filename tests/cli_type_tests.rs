//! End-to-end tests for `vkbd type`.

mod fixtures;

use fixtures::*;
use tempfile::TempDir;

#[test]
fn test_type_plain_word() {
    let out = type_json(&["h", "e", "l", "l", "o"]);
    assert_eq!(out["keyboard_opened"], true);
    assert_eq!(out["text"], "hello");
    assert_eq!(out["caret"]["start"], 5);
    assert_eq!(out["mode"], "normal");
}

#[test]
fn test_type_space_into_middle() {
    let out = type_json(&["--text", "helloworld", "--caret", "5", "space"]);
    assert_eq!(out["text"], "hello world");
    assert_eq!(out["caret"]["start"], 6);
    assert_eq!(out["caret"]["end"], 6);
}

#[test]
fn test_type_shift_is_one_shot() {
    let out = type_json(&["shift", "h", "i"]);
    assert_eq!(out["text"], "Hi");
    assert_eq!(out["mode"], "normal");
}

#[test]
fn test_type_qwerty_shift_releases_after_digit() {
    let out = type_json(&["shift", "1", "a"]);
    assert_eq!(out["text"], "1a");
}

#[test]
fn test_type_azerty_shift_survives_punctuation() {
    let out = type_json(&["--layout", "azerty", "shift", "é", "a"]);
    // Shifted number-row key types its digit; shift stays for the next letter.
    assert_eq!(out["text"], "2A");
    assert_eq!(out["mode"], "normal");
}

#[test]
fn test_type_long_press_opens_accent_menu() {
    let out = type_json(&["--layout", "azerty", "hold:e:600"]);
    assert_eq!(out["text"], "");
    assert_eq!(out["mode"], "accent_menu_open");
    assert_eq!(out["accent_menu"]["source_key"], "e");
    assert_eq!(
        out["accent_menu"]["variants"],
        serde_json::json!(["è", "é", "ê", "ë"])
    );
}

#[test]
fn test_type_short_hold_types_base_letter() {
    let out = type_json(&["--layout", "azerty", "hold:e:499"]);
    assert_eq!(out["text"], "e");
    assert_eq!(out["mode"], "normal");
    assert!(out.get("accent_menu").is_none());
}

#[test]
fn test_type_pick_accent() {
    let out = type_json(&["--layout", "azerty", "c", "a", "f", "hold:e:600", "pick:é"]);
    assert_eq!(out["text"], "café");
    assert_eq!(out["mode"], "normal");
}

#[test]
fn test_type_dismiss_menu_types_nothing() {
    let out = type_json(&["--layout", "azerty", "hold:u:800", "dismiss", "x"]);
    assert_eq!(out["text"], "x");
    assert_eq!(out["visible"], true);
}

#[test]
fn test_type_backspace_and_events() {
    let out = type_json(&["--text", "ab", "backspace", "backspace", "backspace"]);
    assert_eq!(out["text"], "");
    assert_eq!(out["caret"]["start"], 0);
    let events = out["events"].as_array().unwrap();
    assert_eq!(events.len(), 2, "no event once the field is empty");
    assert!(events.iter().all(|e| e["event"] == "input"));
}

#[test]
fn test_type_enter_in_form_submits() {
    let out = type_json(&["--in-form", "--text", "q", "enter"]);
    assert_eq!(out["text"], "q");
    assert_eq!(
        out["events"],
        serde_json::json!([{ "target": "form", "event": "submit" }])
    );
}

#[test]
fn test_type_enter_outside_form_does_nothing() {
    let out = type_json(&["--text", "q", "enter"]);
    assert_eq!(out["text"], "q");
    assert_eq!(out["events"], serde_json::json!([]));
}

#[test]
fn test_type_enter_in_textarea() {
    let out = type_json(&["--field", "textarea", "a", "enter", "b"]);
    assert_eq!(out["text"], "a\nb");
}

#[test]
fn test_type_replaces_selection() {
    let out = type_json(&["--text", "hello world", "--caret", "6..11", "x"]);
    assert_eq!(out["text"], "hello x");
    assert_eq!(out["caret"]["start"], 7);
}

#[test]
fn test_type_number_field_has_no_caret() {
    let out = type_json(&["--field", "number", "--text", "42", "7", "1"]);
    assert_eq!(out["text"], "4271");
    assert!(out.get("caret").is_none());
}

#[test]
fn test_type_non_target_field_never_opens() {
    let out = type_json(&["--field", "checkbox", "a"]);
    assert_eq!(out["keyboard_opened"], false);
    assert_eq!(out["visible"], false);
    assert_eq!(out["text"], "");
}

#[test]
fn test_type_close_and_outside_hide() {
    let out = type_json(&["a", "close", "b"]);
    assert_eq!(out["text"], "a");
    assert_eq!(out["visible"], false);

    let out = type_json(&["a", "outside", "b", "focus", "c"]);
    assert_eq!(out["text"], "ac");
    assert_eq!(out["visible"], true);
}

#[test]
fn test_type_uses_configured_layout() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.toml"),
        "[keyboard]\nlayout = \"azerty\"\n",
    )
    .unwrap();

    let output = run_isolated(&["type", "--json", "é"], config.path());
    assert_eq!(output.status.code(), Some(0));
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["layout"], "azerty");
    assert_eq!(out["text"], "é");
}

#[test]
fn test_type_configured_threshold() {
    let config = TempDir::new().unwrap();
    std::fs::write(
        config.path().join("config.toml"),
        "[keyboard]\nlayout = \"azerty\"\nlong_press_ms = 1000\n",
    )
    .unwrap();

    let output = run_isolated(&["type", "--json", "hold:a:600"], config.path());
    assert_eq!(output.status.code(), Some(0));
    let out: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(out["text"], "a");
}

#[test]
fn test_type_human_output() {
    let config = TempDir::new().unwrap();
    let output = run_isolated(&["type", "--text", "ab", "c"], config.path());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Text:      \"abc\""));
    assert!(stdout.contains("Caret:     3"));
    assert!(stdout.contains("Mode:      normal"));
    assert!(stdout.contains("Events:    input@field, change@field"));
}

#[test]
fn test_type_unknown_key_is_validation_error() {
    let config = TempDir::new().unwrap();
    let output = run_isolated(&["type", "é"], config.path());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Unknown key"));
}

#[test]
fn test_type_bad_caret_is_validation_error() {
    let config = TempDir::new().unwrap();
    let output = run_isolated(&["type", "--caret", "soon", "a"], config.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid caret"));
}

#[test]
fn test_type_broken_config_is_validation_error() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.toml"), "[keyboard\n").unwrap();
    let output = run_isolated(&["type", "a"], config.path());
    assert_eq!(output.status.code(), Some(1));
}
