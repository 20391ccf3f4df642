//! Render command

use anyhow::Result;
use clap::Args;
use fieldspeak::{FailureDescriptor, Humanizer};
use std::io::Read;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::CliError;

/// Arguments for the `render` command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File holding failure descriptors (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Pretty-print the report
    #[arg(short, long)]
    pub pretty: bool,
}

/// Render failure descriptors into a JSON report on stdout
pub fn render(args: RenderArgs, settings: &Settings) -> Result<()> {
    let input = read_input(args.input.as_ref())?;
    let failures = parse_failures(&input)?;
    tracing::debug!(count = failures.len(), "decoded failure descriptors");

    let report = Humanizer::new().report(&failures);
    let json = if args.pretty || settings.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(CliError::Encode)?;

    println!("{json}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode either a JSON array of descriptors or one descriptor per line.
fn parse_failures(input: &str) -> Result<Vec<FailureDescriptor>, CliError> {
    if input.trim_start().starts_with('[') {
        return serde_json::from_str(input).map_err(|source| CliError::Decode {
            line: source.line(),
            source,
        });
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| CliError::Decode {
                line: index + 1,
                source,
            })
        })
        .collect()
}
