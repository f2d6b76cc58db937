//! Virtual Keyboard - headless driver for the on-screen keyboard core
//!
//! Inspects the built-in layouts, replays key scripts against a simulated
//! page, and manages configuration.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vkbd::cli::{CliResult, ConfigArgs, LayoutArgs, TypeArgs};

/// Virtual Keyboard - on-screen keyboard core, driven from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect built-in layouts
    Layout(LayoutArgs),
    /// Replay key presses into a simulated text field
    Type(TypeArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Layout(args) => args.execute(),
            Self::Type(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {}", err);
        std::process::exit(err.exit_code());
    }
}
