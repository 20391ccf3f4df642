//! CLI argument parsing

use crate::commands::{self, RenderArgs, SplitArgs};
use crate::config::Settings;
use clap::{Parser, Subcommand};

/// fieldspeak - readable messages for validation failures
#[derive(Parser, Debug)]
#[command(name = "fieldspeak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split code identifiers into phrases
    Split(SplitArgs),

    /// Render failure descriptors into a field-to-message report
    Render(RenderArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self, settings: &Settings) -> anyhow::Result<()> {
        match self.command {
            Commands::Split(args) => commands::split(args),
            Commands::Render(args) => commands::render(args, settings),
        }
    }
}
