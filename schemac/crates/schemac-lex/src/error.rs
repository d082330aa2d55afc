//! Lexical errors.
//!
//! Every lexical error is terminal: once the lexer reports one it produces
//! nothing more. [`LexError`] records where the problem was detected and can
//! be turned into a [`Diagnostic`] for rendering.

use schemac_util::{Diagnostic, DiagnosticCode, Span};
use std::fmt;
use thiserror::Error;

use crate::chars::describe_byte;
use crate::lexer::Radix;

/// What went wrong.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A token buffer could not grow.
    #[error("out of memory")]
    OutOfMemory,

    /// The input ended in the middle of a token.
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,

    /// A constant started with `0` but was not followed by `b`, `x` or `X`.
    #[error("`{}` is not a digit or base specifier", describe_byte(*.0))]
    InvalidRadixSpecifier(u8),

    /// A byte that cannot appear in a constant of the given radix.
    #[error("`{}` cannot appear in {} constant", describe_byte(*.byte), .radix)]
    InvalidDigit {
        /// The offending byte.
        byte: u8,
        /// Radix of the constant being scanned.
        radix: Radix,
    },

    /// A byte that starts no token.
    #[error("unknown character `{}` in source", describe_byte(*.0))]
    UnknownCharacter(u8),

    /// The digits of a constant do not fit in 64 bits.
    #[error("{} constant does not fit in 64 bits", .radix)]
    ConstantOverflow {
        /// Radix of the constant.
        radix: Radix,
    },
}

impl LexErrorKind {
    /// Returns the stable diagnostic code for this kind.
    pub fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnknownCharacter(_) => DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            LexErrorKind::UnexpectedEndOfFile => DiagnosticCode::E_LEXER_UNEXPECTED_EOF,
            LexErrorKind::InvalidRadixSpecifier(_) => DiagnosticCode::E_LEXER_INVALID_RADIX,
            LexErrorKind::InvalidDigit { .. } => DiagnosticCode::E_LEXER_INVALID_DIGIT,
            LexErrorKind::ConstantOverflow { .. } => DiagnosticCode::E_LEXER_CONSTANT_OVERFLOW,
            LexErrorKind::OutOfMemory => DiagnosticCode::E_LEXER_OUT_OF_MEMORY,
        }
    }

    fn help(self) -> Option<String> {
        match self {
            LexErrorKind::InvalidRadixSpecifier(_) => {
                Some("use `0b` for binary or `0x` for hexadecimal constants".to_string())
            },
            LexErrorKind::InvalidDigit { radix, .. } => {
                Some(format!("{radix} constants may only contain {}", radix.digits()))
            },
            LexErrorKind::ConstantOverflow { .. } => {
                Some(format!("the largest constant is {}", u64::MAX))
            },
            LexErrorKind::UnknownCharacter(b'\t') => {
                Some("indent with spaces, tabs are not whitespace".to_string())
            },
            _ => None,
        }
    }
}

/// A lexical error and the position where it was detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl LexError {
    /// Creates an error at the given position.
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Returns the position as a one-column span.
    pub fn span(&self) -> Span {
        Span::new(self.line, self.column, 1)
    }

    /// Converts the error into a diagnostic with its code and location.
    ///
    /// # Example
    ///
    /// ```
    /// use schemac_lex::{LexError, LexErrorKind};
    ///
    /// let err = LexError::new(LexErrorKind::UnknownCharacter(b'$'), 2, 4);
    /// let diag = err.to_diagnostic().with_source_line(b"<a:u8>\n<b:$>\n");
    /// assert!(diag.to_string().starts_with("error[E1001]: unknown character `$`"));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic =
            Diagnostic::error(self.kind.to_string(), self.span()).with_code(self.kind.code());
        match self.kind.help() {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error at line {}, column {}: {}",
            self.line, self.column, self.kind
        )
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}
