//! Error types for the schemac driver.

use std::io;
use std::path::PathBuf;

use schemac_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// Everything that can go wrong in the driver outside of lexing itself.
///
/// Lexical errors are not part of this enum: they are reported as
/// diagnostics and turn into a failing exit status, not an `Err`.
#[derive(Error, Debug)]
pub enum DrvError {
    /// The input file could not be read.
    #[error("cannot read `{}`: {}", .path.display(), .source)]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// A configuration file exists but could not be read or parsed.
    #[error("invalid configuration `{}`: {}", .path.display(), .message)]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// Writing tokens or diagnostics failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A token could not be serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DrvError {
    /// Converts the error into a diagnostic for the user.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.to_string(), Span::DUMMY);
        match self {
            DrvError::Read { .. } => diagnostic.with_code(DiagnosticCode::E_DRIVER_READ_FAILED),
            DrvError::ConfigNotFound(_) | DrvError::Config { .. } => {
                diagnostic.with_code(DiagnosticCode::E_DRIVER_BAD_CONFIG)
            },
            DrvError::Io(_) | DrvError::Json(_) => diagnostic,
        }
    }
}

/// Result type alias using DrvError.
pub type Result<T> = std::result::Result<T, DrvError>;
