//! Whitespace and comment skipping.
//!
//! A `;` starts a comment that runs up to, but not including, the next
//! newline. Comments do not nest.

use crate::chars::{is_skippable, COMMENT_START};
use crate::source::ByteSource;

use super::core::{LexState, Lexer};

impl<S: ByteSource> Lexer<S> {
    /// Consumes `byte` if it is whitespace or part of a comment.
    ///
    /// Returns false when the byte must be lexed as (the start of) a token.
    /// Line counting has already happened in `bump`, so newlines inside
    /// comments are accounted for.
    pub(super) fn skip_trivia(&mut self, byte: u8) -> bool {
        match self.state() {
            LexState::InComment => {
                if byte == b'\n' {
                    self.enter(LexState::Scanning);
                }
                true
            },
            _ if is_skippable(byte) => true,
            _ if byte == COMMENT_START => {
                self.enter(LexState::InComment);
                true
            },
            _ => false,
        }
    }
}
