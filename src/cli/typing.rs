//! `type` command: replay a key script into a one-field in-memory page.

use crate::cli::common::{CliError, CliResult};
use crate::cli::script::{parse_script, Player};
use crate::config::Config;
use crate::engine::{AccentMenu, InputMode, Keyboard, PageEvent};
use crate::host::{Host, MemoryDocument};
use crate::layouts::builtin;
use crate::models::{ElementInfo, LayoutId, Selection};
use clap::Args;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

/// Replay key presses into a simulated text field
#[derive(Args, Debug)]
pub struct TypeArgs {
    /// Layout to use (defaults to the configured layout)
    #[arg(short, long, value_name = "LAYOUT")]
    pub layout: Option<LayoutId>,

    /// Field kind: an input type (text, password, email, ...), textarea, or editable
    #[arg(short, long, value_name = "KIND", default_value = "text")]
    pub field: String,

    /// Place the field inside a form
    #[arg(long)]
    pub in_form: bool,

    /// Initial text of the field
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub text: String,

    /// Initial caret: a position (5) or a range (2..7); defaults to the end
    #[arg(short, long, value_name = "CARET")]
    pub caret: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Key script (e.g. shift h e l l o  hold:e:600 pick:é  backspace enter)
    #[arg(value_name = "STEP", allow_hyphen_values = true)]
    pub script: Vec<String>,
}

#[derive(Debug, Serialize)]
struct EventOutput {
    target: &'static str,
    event: &'static str,
}

#[derive(Debug, Serialize)]
struct TypeOutput {
    layout: LayoutId,
    field: String,
    keyboard_opened: bool,
    visible: bool,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    caret: Option<Selection>,
    mode: InputMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    accent_menu: Option<AccentMenu>,
    events: Vec<EventOutput>,
}

/// Builds the field element for a `--field` value.
fn field_element(kind: &str) -> ElementInfo {
    match kind.to_lowercase().as_str() {
        "textarea" => ElementInfo::textarea(),
        "editable" => ElementInfo::other("div", true),
        other => ElementInfo::input(other),
    }
}

/// Parses `5` or `2..7` into a selection.
fn parse_caret(raw: &str) -> CliResult<Selection> {
    let invalid = || CliError::validation(format!("Invalid caret '{raw}': expected N or A..B"));

    match raw.split_once("..") {
        Some((start, end)) => {
            let start = start.trim().parse().map_err(|_| invalid())?;
            let end = end.trim().parse().map_err(|_| invalid())?;
            Ok(Selection::new(start, end))
        }
        None => {
            let pos = raw.trim().parse().map_err(|_| invalid())?;
            Ok(Selection::caret(pos))
        }
    }
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let layout_id = self.layout.unwrap_or(config.keyboard.layout);
        let layout = builtin(layout_id)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let steps = parse_script(&self.script, &layout)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let caret = match &self.caret {
            Some(raw) => parse_caret(raw)?,
            None => Selection::caret(self.text.chars().count()),
        };

        let mut doc = MemoryDocument::new();
        let form = self.in_form.then(|| doc.insert_form());
        let field = doc.insert(field_element(&self.field), form);
        doc.set_text(field, &self.text, caret);

        let mut keyboard = Keyboard::new(layout, config.keyboard.settings());
        let mut player = Player::new(field, Instant::now());

        keyboard.handle_event(&mut doc, PageEvent::Focus { target: field });
        let keyboard_opened = keyboard.is_visible();
        if !keyboard_opened {
            debug!(field = %self.field, "field is not a typing target");
        }

        for step in &steps {
            for event in player.events(step) {
                keyboard.handle_event(&mut doc, event);
            }
        }

        let output = TypeOutput {
            layout: layout_id,
            field: self.field.clone(),
            keyboard_opened,
            visible: keyboard.is_visible(),
            text: doc.value(field),
            caret: doc.selection(field),
            mode: keyboard.mode(),
            accent_menu: keyboard.accent_menu().cloned(),
            events: doc
                .events()
                .iter()
                .map(|event| EventOutput {
                    target: if event.target == field { "field" } else { "form" },
                    event: event.notification.event_name(),
                })
                .collect(),
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{}", json);
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

fn output_human_readable(output: &TypeOutput) {
    if !output.keyboard_opened {
        println!(
            "Keyboard:  not opened ('{}' is not a typing target)",
            output.field
        );
    }
    println!("Text:      {:?}", output.text);
    match output.caret {
        Some(caret) => println!("Caret:     {}", caret),
        None => println!("Caret:     (none)"),
    }
    let mode = match output.mode {
        InputMode::Normal => "normal",
        InputMode::ShiftPending => "shift",
        InputMode::AccentMenuOpen => "accent menu",
    };
    println!("Mode:      {}", mode);
    if let Some(menu) = &output.accent_menu {
        let variants: Vec<String> = menu.variants.iter().map(char::to_string).collect();
        let variants = variants.join(" ");
        println!("Accents:   {} -> {}", menu.source_key, variants);
    }
    println!("Visible:   {}", if output.visible { "yes" } else { "no" });

    if output.events.is_empty() {
        println!("Events:    (none)");
    } else {
        let events: Vec<String> = output
            .events
            .iter()
            .map(|event| format!("{}@{}", event.event, event.target))
            .collect();
        println!("Events:    {}", events.join(", "));
    }
}
