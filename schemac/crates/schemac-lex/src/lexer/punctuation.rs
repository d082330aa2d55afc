//! Punctuation lexing.

use crate::token::TokenKind;

/// Maps a byte to its single-character token.
///
/// `;` is listed for completeness, but the lexer treats it as the start of
/// a comment before this table is consulted.
///
/// # Example
///
/// ```
/// use schemac_lex::lexer::punctuation;
/// use schemac_lex::TokenKind;
///
/// assert_eq!(punctuation(b'<'), Some(TokenKind::OpenBracket));
/// assert_eq!(punctuation(b'+'), None);
/// ```
pub fn punctuation(byte: u8) -> Option<TokenKind> {
    let kind = match byte {
        b'<' => TokenKind::OpenBracket,
        b'>' => TokenKind::CloseBracket,
        b':' => TokenKind::Colon,
        b',' => TokenKind::Comma,
        b';' => TokenKind::SemiColon,
        b'(' => TokenKind::ParenOpen,
        b')' => TokenKind::ParenClose,
        b'-' => TokenKind::Minus,
        _ => return None,
    };
    Some(kind)
}
