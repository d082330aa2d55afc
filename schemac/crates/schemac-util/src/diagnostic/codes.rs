//! Diagnostic codes for categorizing schemac errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages so users can look them up and tooling can match them.
//!
//! # Examples
//!
//! ```
//! use schemac_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNKNOWN_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` with `number`
/// zero-padded to four digits. Driver codes sit below 1000, lexer codes in
/// the 1000s.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix, "E" for every code in use
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use schemac_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 7);
    /// assert_eq!(code.as_str(), "E0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // DRIVER ERRORS (E0001-E0999)
    // =========================================================================

    /// E0001: Source file could not be read
    pub const E_DRIVER_READ_FAILED: Self = Self::new("E", 1);
    /// E0002: Configuration file could not be loaded
    pub const E_DRIVER_BAD_CONFIG: Self = Self::new("E", 2);

    // =========================================================================
    // LEXER ERRORS (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Byte with no meaning in the language
    pub const E_LEXER_UNKNOWN_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Input ended inside a token
    pub const E_LEXER_UNEXPECTED_EOF: Self = Self::new("E", 1002);
    /// E1003: Lexer - Bad radix specifier after a leading `0`
    pub const E_LEXER_INVALID_RADIX: Self = Self::new("E", 1003);
    /// E1004: Lexer - Digit not valid for the literal's radix
    pub const E_LEXER_INVALID_DIGIT: Self = Self::new("E", 1004);
    /// E1005: Lexer - Constant does not fit in 64 bits
    pub const E_LEXER_CONSTANT_OVERFLOW: Self = Self::new("E", 1005);
    /// E1006: Lexer - Token buffer allocation failed
    pub const E_LEXER_OUT_OF_MEMORY: Self = Self::new("E", 1006);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::E_DRIVER_BAD_CONFIG.as_str(), "E0002");
        assert_eq!(DiagnosticCode::new("E", 1001).as_str(), "E1001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_INVALID_DIGIT;
        assert_eq!(format!("{}", code), "E1004");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1004)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            DiagnosticCode::E_LEXER_UNEXPECTED_EOF,
            DiagnosticCode::E_LEXER_INVALID_RADIX,
            DiagnosticCode::E_LEXER_INVALID_DIGIT,
            DiagnosticCode::E_LEXER_CONSTANT_OVERFLOW,
            DiagnosticCode::E_LEXER_OUT_OF_MEMORY,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
