//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct, its position bookkeeping and
//! the dispatch loop that hands bytes to the specialised scanners.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::chars::{is_digit, is_letter};
use crate::config::LexerConfig;
use crate::error::{LexError, LexErrorKind};
use crate::source::{ByteSource, SourceBuffer};
use crate::token::Token;

use super::punctuation::punctuation;

/// Where the lexer is in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexState {
    /// Between or inside tokens.
    Scanning,
    /// Inside a `;` comment, waiting for the end of the line.
    InComment,
    /// Finished, either at end of input or after an error. Terminal.
    Exhausted,
}

/// Outcome of one call to [`Lexer::next_token`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexed {
    /// An ordinary token.
    Token(Token),
    /// The end-of-file sentinel. Produced exactly once on clean exhaustion.
    EndOfStream(Token),
    /// A lexical error. Nothing follows it.
    Error(LexError),
}

/// Lexer for the schema language.
///
/// Pulls bytes from a [`ByteSource`] one at a time and turns them into
/// tokens. The lexer owns its source and closes it when dropped.
///
/// # Example
///
/// ```
/// use schemac_lex::{Lexed, Lexer, SourceBuffer, TokenKind};
///
/// let mut lexer = Lexer::new(SourceBuffer::from("<len:u8>"));
/// match lexer.next_token() {
///     Some(Lexed::Token(token)) => assert_eq!(token.kind(), TokenKind::OpenBracket),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub struct Lexer<S: ByteSource = SourceBuffer> {
    /// The byte supply, exclusively owned.
    source: S,

    /// Line of the next byte to read (1-based).
    line: u32,

    /// Column of the next byte to read (1-based).
    column: u32,

    /// Position before the last byte read, restored on pushback.
    previous: (u32, u32),

    state: LexState,

    config: LexerConfig,
}

impl<S: ByteSource> Lexer<S> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: S, config: LexerConfig) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            previous: (1, 1),
            state: LexState::Scanning,
            config,
        }
    }

    /// Returns the next token, the end-of-file sentinel, or an error.
    ///
    /// Returns `None` once the lexer is exhausted, which happens right after
    /// it has produced [`Lexed::EndOfStream`] or [`Lexed::Error`]. Calling it
    /// again after that has no effect.
    pub fn next_token(&mut self) -> Option<Lexed> {
        if self.state == LexState::Exhausted {
            return None;
        }

        let lexed = self.scan();
        match &lexed {
            Lexed::Token(token) => trace!(%token, "token"),
            Lexed::EndOfStream(token) => {
                debug!(line = token.line(), column = token.column(), "end of input");
                self.enter(LexState::Exhausted);
            },
            Lexed::Error(err) => {
                debug!(%err, "lexing stopped");
                self.enter(LexState::Exhausted);
            },
        }
        Some(lexed)
    }

    fn scan(&mut self) -> Lexed {
        loop {
            let (line, column) = self.location();
            let Some(byte) = self.bump() else {
                return Lexed::EndOfStream(Token::end_of_file(line, column));
            };

            if self.skip_trivia(byte) {
                continue;
            }

            if let Some(kind) = punctuation(byte) {
                return Lexed::Token(Token::new(kind, line, column));
            }

            let result = if is_letter(byte) {
                self.lex_identifier(byte, line, column)
            } else if is_digit(byte) {
                self.lex_constant(byte, line, column)
            } else {
                Err(LexError::new(LexErrorKind::UnknownCharacter(byte), line, column))
            };

            return match result {
                Ok(token) => Lexed::Token(token),
                Err(err) => Lexed::Error(err),
            };
        }
    }

    /// Reads one byte and advances the position past it.
    pub(super) fn bump(&mut self) -> Option<u8> {
        let byte = self.source.read_byte()?;
        self.previous = (self.line, self.column);
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Pushes back the byte returned by the last successful [`bump`].
    ///
    /// [`bump`]: Lexer::bump
    pub(super) fn unbump(&mut self) {
        self.source.push_back();
        (self.line, self.column) = self.previous;
    }

    pub(super) fn enter(&mut self, state: LexState) {
        if self.state != state {
            trace!(from = ?self.state, to = ?state, "state change");
            self.state = state;
        }
    }

    /// Builds an error at the current position.
    pub(super) fn error_here(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.line, self.column)
    }

    /// Appends an ASCII byte to a token buffer, reporting allocation failure
    /// instead of aborting.
    pub(super) fn push_ascii(&self, buffer: &mut String, byte: u8) -> Result<(), LexError> {
        buffer
            .try_reserve(1)
            .map_err(|_| self.error_here(LexErrorKind::OutOfMemory))?;
        buffer.push(char::from(byte));
        Ok(())
    }

    /// Returns the line and column of the next byte to read.
    pub fn location(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Returns the line of the next byte to read.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the column of the next byte to read.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current state.
    pub fn state(&self) -> LexState {
        self.state
    }

    /// Returns true once nothing more will be produced.
    pub fn is_exhausted(&self) -> bool {
        self.state == LexState::Exhausted
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the underlying byte source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: ByteSource> Drop for Lexer<S> {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Yields tokens until the end-of-file sentinel, which is not yielded.
/// An error is yielded once and ends the iteration.
impl<S: ByteSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token()? {
            Lexed::Token(token) => Some(Ok(token)),
            Lexed::EndOfStream(_) => None,
            Lexed::Error(err) => Some(Err(err)),
        }
    }
}

impl<S: ByteSource> FusedIterator for Lexer<S> {}

/// Lexes an in-memory buffer to completion with the default configuration.
///
/// The returned tokens end with the end-of-file sentinel.
///
/// # Example
///
/// ```
/// use schemac_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("vec<u8>").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Vec,
///         TokenKind::OpenBracket,
///         TokenKind::U8,
///         TokenKind::CloseBracket,
///         TokenKind::EndOfFile,
///     ]
/// );
/// ```
pub fn tokenize(bytes: impl Into<Vec<u8>>) -> Result<Vec<Token>, LexError> {
    tokenize_with(bytes, LexerConfig::default())
}

/// Like [`tokenize`], with an explicit configuration.
pub fn tokenize_with(
    bytes: impl Into<Vec<u8>>,
    config: LexerConfig,
) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::with_config(SourceBuffer::new(bytes), config);
    let mut tokens = Vec::new();
    while let Some(lexed) = lexer.next_token() {
        match lexed {
            Lexed::Token(token) | Lexed::EndOfStream(token) => tokens.push(token),
            Lexed::Error(err) => return Err(err),
        }
    }
    Ok(tokens)
}
