//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::LayoutId;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default layout (qwerty or azerty)
    #[arg(long, value_name = "LAYOUT")]
    layout: Option<String>,

    /// Hold time in milliseconds before the accent menu opens
    #[arg(long, value_name = "MS")]
    long_press_ms: Option<u64>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: String,
    keyboard: KeyboardOutput,
}

#[derive(Serialize, Debug)]
struct KeyboardOutput {
    layout: LayoutId,
    long_press_ms: u64,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?;

        let output = ConfigOutput {
            config_file: path.to_string_lossy().to_string(),
            keyboard: KeyboardOutput {
                layout: config.keyboard.layout,
                long_press_ms: config.keyboard.long_press_ms,
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {}", e))
            })?;
            println!("{}", json);
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.layout.is_none() && self.long_press_ms.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --layout or --long-press-ms",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(layout) = &self.layout {
            config.keyboard.layout = layout.parse().map_err(CliError::validation)?;
        }

        if let Some(millis) = self.long_press_ms {
            if millis == 0 {
                return Err(CliError::validation(
                    "Invalid long press threshold. Must be greater than 0",
                ));
            }
            config.keyboard.long_press_ms = millis;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    let title = format!("{APP_NAME} Configuration");
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();
    println!("File: {}", output.config_file);
    println!();
    println!("Keyboard:");
    println!("  Layout:           {}", output.keyboard.layout);
    println!("  Long Press (ms):  {}", output.keyboard.long_press_ms);
}
