//! Span module - Source location tracking.
//!
//! The schema language is lexed from a plain byte stream, so a location is
//! a line/column pair rather than a byte range into a loaded file.
//!
//! # Examples
//!
//! ```
//! use schemac_util::span::Span;
//!
//! let span = Span::new(3, 7, 2);
//! assert_eq!(span.line, 3);
//! assert_eq!(span.end_column(), 9);
//! ```

use std::fmt;

/// Source location span
///
/// A `Span` starts at a 1-based `line`/`column` and covers `len` bytes on
/// that line. A `len` of zero is a point location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// Number of bytes covered on the line
    pub len: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use schemac_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// assert!(Span::DUMMY.is_dummy());
    /// ```
    pub const DUMMY: Span = Span {
        line: 0,
        column: 0,
        len: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    /// * `len` - Number of bytes covered
    #[inline]
    pub const fn new(line: u32, column: u32, len: u32) -> Self {
        Self { line, column, len }
    }

    /// Column one past the last covered byte.
    #[inline]
    pub const fn end_column(&self) -> u32 {
        self.column + self.len
    }

    /// Returns true for [`Span::DUMMY`] and other spans with no real line.
    #[inline]
    pub const fn is_dummy(&self) -> bool {
        self.line == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
