//! Identifier and keyword lexing.

use crate::chars::is_alphanumeric;
use crate::error::{LexError, LexErrorKind};
use crate::source::ByteSource;
use crate::token::{keyword_from_ident, Token};

use super::core::Lexer;

impl<S: ByteSource> Lexer<S> {
    /// Lexes an identifier or keyword whose first letter has already been
    /// consumed.
    ///
    /// The identifier runs over letters and digits. An exact match in the
    /// keyword table produces the builtin kind, anything else a `Name`.
    /// End of input inside an identifier is an error only with
    /// `strict_identifiers` set.
    pub(super) fn lex_identifier(
        &mut self,
        first: u8,
        line: u32,
        column: u32,
    ) -> Result<Token, LexError> {
        let mut text = String::new();
        self.push_ascii(&mut text, first)?;

        loop {
            match self.bump() {
                Some(byte) if is_alphanumeric(byte) => self.push_ascii(&mut text, byte)?,
                Some(_) => {
                    self.unbump();
                    break;
                },
                None if self.config().strict_identifiers => {
                    return Err(self.error_here(LexErrorKind::UnexpectedEndOfFile));
                },
                None => break,
            }
        }

        Ok(match keyword_from_ident(&text) {
            Some(kind) => Token::new(kind, line, column),
            None => Token::name(text, line, column),
        })
    }
}
