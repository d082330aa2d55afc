//! Diagnostic module - Error reporting for the schemac toolchain.
//!
//! Every problem the toolchain reports is fatal, so a [`Diagnostic`] is
//! always an error: a message, an optional code, an optional location with
//! the offending source line, and help text.
//!
//! # Examples
//!
//! ```
//! use schemac_util::diagnostic::{Diagnostic, DiagnosticCode, Span};
//!
//! let diag = Diagnostic::error("unknown character `$` in source", Span::new(2, 4, 1))
//!     .with_code(DiagnosticCode::E_LEXER_UNKNOWN_CHAR)
//!     .with_source_line(b"<a:u8>\n<b:$>\n");
//!
//! assert_eq!(
//!     diag.to_string(),
//!     "error[E1001]: unknown character `$` in source\n  --> 2:4\n  2 | <b:$>\n    |    ^"
//! );
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

pub use crate::Span;
use std::fmt;

/// A fatal error with its location and context
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location, [`Span::DUMMY`] when there is none
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// The offending source line, once attached
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
            snippet: None,
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add an actionable help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Attach the line of `source` that `span` points into.
    ///
    /// Does nothing when the span is a dummy or its line is not in `source`.
    /// Bytes that are not valid UTF-8 are shown lossily.
    pub fn with_source_line(mut self, source: &[u8]) -> Self {
        if self.span.is_dummy() {
            return self;
        }
        let Some(line) = source.split(|&b| b == b'\n').nth(self.span.line as usize - 1) else {
            return self;
        };
        let line = String::from_utf8_lossy(line);
        self.snippet = Some(SourceSnippet::new(
            line.trim_end_matches('\r'),
            self.span.line as usize,
            self.span.column as usize,
            self.span.end_column() as usize,
        ));
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message)?,
            None => write!(f, "error: {}", self.message)?,
        }
        if !self.span.is_dummy() {
            write!(f, "\n  --> {}", self.span)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet.format())?;
        }
        for help in &self.helps {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}
