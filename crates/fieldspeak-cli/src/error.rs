//! CLI error types.

use thiserror::Error;

/// Errors raised by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A failure descriptor could not be decoded.
    #[error("invalid failure descriptor on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the report failed.
    #[error("failed to encode report: {0}")]
    Encode(#[source] serde_json::Error),

    /// Environment configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),
}
