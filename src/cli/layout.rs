//! Layout inspection commands.

use crate::cli::common::{CliError, CliResult};
use crate::layouts::builtin;
use crate::models::{KeyDefinition, KeyKind, LayoutId, LayoutTable, ShiftRelease};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect built-in layouts
#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(subcommand)]
    command: LayoutCommand,
}

#[derive(Subcommand, Debug)]
enum LayoutCommand {
    /// List built-in layouts
    List(LayoutListArgs),
    /// Show the rows, shifted glyphs and accent variants of a layout
    Show(LayoutShowArgs),
}

/// List built-in layouts
#[derive(Args, Debug)]
pub struct LayoutListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Show one layout
#[derive(Args, Debug)]
pub struct LayoutShowArgs {
    /// Layout name (qwerty or azerty)
    #[arg(value_name = "LAYOUT")]
    layout: LayoutId,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct LayoutSummary {
    id: LayoutId,
    name: String,
    keys: usize,
    shift_release: ShiftRelease,
}

impl LayoutArgs {
    /// Execute layout subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LayoutCommand::List(args) => args.execute(),
            LayoutCommand::Show(args) => args.execute(),
        }
    }
}

fn load(id: LayoutId) -> CliResult<LayoutTable> {
    builtin(id).map_err(|e| CliError::validation(format!("{e:#}")))
}

fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

impl LayoutListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let summaries = LayoutId::ALL
            .into_iter()
            .map(|id| {
                load(id).map(|table| LayoutSummary {
                    id,
                    name: table.name.clone(),
                    keys: table.key_count(),
                    shift_release: table.shift_release,
                })
            })
            .collect::<CliResult<Vec<_>>>()?;

        if self.json {
            println!("{}", to_json(&summaries)?);
        } else {
            for summary in &summaries {
                println!(
                    "{:<8} {} ({} keys)",
                    summary.id, summary.name, summary.keys
                );
            }
        }

        Ok(())
    }
}

impl LayoutShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let table = load(self.layout)?;

        if self.json {
            println!("{}", to_json(&table)?);
        } else {
            output_human_readable(&table);
        }

        Ok(())
    }
}

fn key_face(key: &KeyDefinition) -> String {
    match &key.kind {
        KeyKind::Char {
            shifted: Some(shifted),
            ..
        } => format!("{}/{}", key.label, shifted),
        _ => key.label.clone(),
    }
}

fn spaced(glyphs: &[char]) -> String {
    let parts: Vec<String> = glyphs.iter().map(char::to_string).collect();
    parts.join(" ")
}

fn output_human_readable(table: &LayoutTable) {
    let title = format!("{} ({})", table.name, table.id);
    println!("{}", title);
    println!("{}", "=".repeat(title.chars().count()));
    println!();

    for (idx, row) in table.rows().iter().enumerate() {
        let faces: Vec<String> = row.iter().map(key_face).collect();
        println!("Row {}: {}", idx + 1, faces.join(" "));
    }
    println!();

    let policy = match table.shift_release {
        ShiftRelease::AfterAnyGlyph => "after any character",
        ShiftRelease::AfterLetter => "after letters only",
    };
    println!("Shift releases: {}", policy);

    let accented: Vec<&KeyDefinition> = table.keys().filter(|key| key.has_accents()).collect();
    if accented.is_empty() {
        println!("Accents: (none)");
    } else {
        println!("Accents (long press):");
        for key in accented {
            println!("  {}: {}", key.id, spaced(key.accent_variants()));
        }
    }
}
