//! Byte classification for the schema lexer.
//!
//! The schema language is plain ASCII. These predicates work on raw bytes
//! and never consider anything outside the ASCII range.

/// Byte that starts a comment running to the end of the line.
pub const COMMENT_START: u8 = b';';

/// Checks if a byte is a decimal digit (`0`-`9`).
///
/// # Example
///
/// ```
/// use schemac_lex::chars::is_digit;
///
/// assert!(is_digit(b'0'));
/// assert!(is_digit(b'9'));
/// assert!(!is_digit(b'a'));
/// ```
#[inline]
pub const fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Checks if a byte is an ASCII letter (`a`-`z`, `A`-`Z`).
///
/// # Example
///
/// ```
/// use schemac_lex::chars::is_letter;
///
/// assert!(is_letter(b'q'));
/// assert!(is_letter(b'Q'));
/// assert!(!is_letter(b'_'));
/// assert!(!is_letter(0xCE));
/// ```
#[inline]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Checks if a byte may continue an identifier (letter or digit).
#[inline]
pub const fn is_alphanumeric(byte: u8) -> bool {
    is_letter(byte) || is_digit(byte)
}

/// Checks if a byte is a hexadecimal digit (`0`-`9`, `a`-`f`, `A`-`F`).
///
/// # Example
///
/// ```
/// use schemac_lex::chars::is_hex_digit;
///
/// assert!(is_hex_digit(b'7'));
/// assert!(is_hex_digit(b'f'));
/// assert!(is_hex_digit(b'F'));
/// assert!(!is_hex_digit(b'g'));
/// ```
#[inline]
pub const fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// Checks if a byte is a binary digit (`0` or `1`).
#[inline]
pub const fn is_binary_digit(byte: u8) -> bool {
    matches!(byte, b'0' | b'1')
}

/// Checks if a byte is whitespace the lexer skips.
///
/// Only space, carriage return and newline qualify. Tabs are not part of
/// the language.
///
/// # Example
///
/// ```
/// use schemac_lex::chars::is_skippable;
///
/// assert!(is_skippable(b' '));
/// assert!(is_skippable(b'\r'));
/// assert!(is_skippable(b'\n'));
/// assert!(!is_skippable(b'\t'));
/// ```
#[inline]
pub const fn is_skippable(byte: u8) -> bool {
    matches!(byte, b' ' | b'\r' | b'\n')
}

/// Renders a byte for use in error messages.
///
/// Printable ASCII is shown as itself, everything else as an escape.
pub fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        (byte as char).to_string()
    } else {
        byte.escape_ascii().to_string()
    }
}
