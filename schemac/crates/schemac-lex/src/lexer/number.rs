//! Constant lexing.
//!
//! Constants are unsigned 64-bit integers written in one of three radixes:
//!
//! - Decimal: `42`, `18446744073709551615`
//! - Binary: `0b1010`
//! - Hexadecimal: `0xFF`, `0XcafE`
//!
//! A leading `0` always introduces a radix prefix, so `0` on its own and
//! `007` are errors.

use std::fmt;

use crate::chars::{is_binary_digit, is_digit, is_hex_digit};
use crate::error::{LexError, LexErrorKind};
use crate::source::ByteSource;
use crate::token::Token;

use super::core::Lexer;

/// Radix of a constant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2, `0b` prefix.
    Binary,
    /// Base 10, no prefix.
    Decimal,
    /// Base 16, `0x` or `0X` prefix.
    Hexadecimal,
}

impl Radix {
    /// Returns the numeric base.
    pub fn value(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Returns true if `byte` is a digit in this radix.
    pub fn accepts(self, byte: u8) -> bool {
        match self {
            Radix::Binary => is_binary_digit(byte),
            Radix::Decimal => is_digit(byte),
            Radix::Hexadecimal => is_hex_digit(byte),
        }
    }

    /// Describes the digits allowed in this radix.
    pub fn digits(self) -> &'static str {
        match self {
            Radix::Binary => "`0` and `1`",
            Radix::Decimal => "`0` to `9`",
            Radix::Hexadecimal => "`0` to `9` and `a` to `f`",
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radix::Binary => "binary",
            Radix::Decimal => "decimal",
            Radix::Hexadecimal => "hexadecimal",
        })
    }
}

impl<S: ByteSource> Lexer<S> {
    /// Lexes a constant whose first digit has already been consumed.
    ///
    /// `line` and `column` locate `first` and become the token position.
    pub(super) fn lex_constant(
        &mut self,
        first: u8,
        line: u32,
        column: u32,
    ) -> Result<Token, LexError> {
        let radix = if first == b'0' {
            let (at_line, at_column) = self.location();
            match self.bump() {
                Some(b'b') => Radix::Binary,
                Some(b'x' | b'X') => Radix::Hexadecimal,
                Some(other) => {
                    return Err(LexError::new(
                        LexErrorKind::InvalidRadixSpecifier(other),
                        at_line,
                        at_column,
                    ))
                },
                None => return Err(self.error_here(LexErrorKind::UnexpectedEndOfFile)),
            }
        } else {
            self.unbump();
            Radix::Decimal
        };

        let digits = self.scan_digits(radix)?;
        let value = u64::from_str_radix(&digits, radix.value()).map_err(|_| {
            LexError::new(LexErrorKind::ConstantOverflow { radix }, line, column)
        })?;
        Ok(Token::constant(value, line, column))
    }

    /// Collects the digits of a constant.
    ///
    /// Stops at the first byte that is not a digit of `radix` and pushes it
    /// back. A prefix followed directly by a non-digit yields `"0"`; the
    /// input has to continue after the prefix though.
    fn scan_digits(&mut self, radix: Radix) -> Result<String, LexError> {
        let mut digits = String::new();
        loop {
            let (line, column) = self.location();
            match self.bump() {
                Some(byte) if radix.accepts(byte) => self.push_ascii(&mut digits, byte)?,
                Some(byte) if radix == Radix::Binary && is_digit(byte) => {
                    return Err(LexError::new(
                        LexErrorKind::InvalidDigit { byte, radix },
                        line,
                        column,
                    ));
                },
                Some(_) if digits.is_empty() => {
                    self.unbump();
                    self.push_ascii(&mut digits, b'0')?;
                    return Ok(digits);
                },
                Some(_) => {
                    self.unbump();
                    return Ok(digits);
                },
                None if digits.is_empty() => {
                    return Err(LexError::new(
                        LexErrorKind::UnexpectedEndOfFile,
                        line,
                        column,
                    ));
                },
                None => return Ok(digits),
            }
        }
    }
}
