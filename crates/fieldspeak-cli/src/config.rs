//! Configuration loaded from the environment.
//!
//! Settings are read from `FIELDSPEAK_`-prefixed environment variables after
//! an optional `.env` file has been loaded:
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `FIELDSPEAK_ENV` | environment profile | `development` |
//! | `FIELDSPEAK_PRETTY` | pretty-print JSON output | `false` |
//! | `FIELDSPEAK_LOG` | log filter directive | profile default |

use serde::Deserialize;
use std::fmt;

use crate::error::CliError;

/// Prefix of every environment variable read by [`Settings::from_env`].
pub const ENV_PREFIX: &str = "FIELDSPEAK_";

/// Environment profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Verbose logging.
    Development,
    /// Quiet logging.
    Production,
    /// Custom environment name.
    Custom(String),
}

impl Environment {
    /// Resolve a profile name. `None` means development.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("production") | Some("prod") => Self::Production,
            Some("development") | Some("dev") | None => Self::Development,
            Some(other) => Self::Custom(other.to_string()),
        }
    }

    /// Get the environment name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Get the default log level for this environment.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production | Self::Custom(_) => "info",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CLI settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Reads from `FIELDSPEAK_ENV`
    #[serde(default)]
    pub env: Option<String>,
    /// Reads from `FIELDSPEAK_PRETTY`
    #[serde(default)]
    pub pretty: bool,
    /// Reads from `FIELDSPEAK_LOG`
    #[serde(default)]
    pub log: Option<String>,
}

impl Settings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_vars(std::env::vars())
    }

    /// Load settings from explicit `(name, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(CliError::from)
    }

    /// The environment profile.
    pub fn environment(&self) -> Environment {
        Environment::from_name(self.env.as_deref())
    }

    /// Filter directive used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> String {
        match &self.log {
            Some(directive) => directive.clone(),
            None => format!(
                "warn,fieldspeak={level},fieldspeak_cli={level}",
                level = self.environment().default_log_level()
            ),
        }
    }
}

/// Load environment variables from a `.env` file.
///
/// A missing file is not an error and existing variables are not overridden.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
