//! schemac-util - Shared foundation types for the schemac toolchain
//!
//! This crate holds the pieces every phase of the schema compiler needs:
//! source locations and the diagnostic machinery used to report problems
//! back to the user.
//!
//! # Module Structure
//!
//! - [`span`] - line/column source locations
//! - [`diagnostic`] - error diagnostics, their codes and source excerpts
//!
//! # Example
//!
//! ```
//! use schemac_util::{Diagnostic, DiagnosticCode, Span};
//!
//! let diag = Diagnostic::error("unexpected end of file", Span::new(3, 1, 1))
//!     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_EOF);
//!
//! assert_eq!(diag.to_string(), "error[E1002]: unexpected end of file\n  --> 3:1");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, SourceSnippet};
pub use span::Span;
