//! Configuration for the schemac driver.
//!
//! Settings are layered: built-in defaults, then `schemac.toml`, then
//! environment variables and command-line flags (clap merges those two).
//!
//! ```toml
//! [lexer]
//! strict_identifiers = false
//!
//! [output]
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use schemac_lex::LexerConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{DrvError, Result};

/// Default configuration file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "schemac.toml";

/// How tokens are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `{ Location = 1:2 Token = Name(x) }`, one per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Output-specific configuration options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Token rendering.
    pub format: OutputFormat,
}

/// Application configuration structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lexer behaviour.
    pub lexer: LexerConfig,

    /// Output behaviour.
    pub output: OutputConfig,
}

impl Config {
    /// Loads the configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `schemac.toml` in the current directory is used when present and the
    /// defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                if path.is_file() {
                    Self::load_from_path(&path)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    /// Loads the configuration from a specific file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| DrvError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| DrvError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.message().to_string())
    }

    /// Applies flag and environment overrides on top of the file settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.strict_identifiers {
            self.lexer.strict_identifiers = true;
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
    }
}
