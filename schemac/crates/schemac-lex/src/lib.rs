//! schemac-lex - Lexical Analyzer for the schemac schema language
//!
//! This crate turns the bytes of a `.syntax` schema file into a stream of
//! tokens for the parser. Schemas describe binary wire layouts: fixed width
//! integers, LEB128 integers, vectors, optional fields, skipped fields and
//! composite type declarations.
//!
//! # Example Usage
//!
//! ```
//! use schemac_lex::{Lexed, Lexer, SourceBuffer, TokenKind};
//!
//! let source = "<len:uleb128>\n<body:vec(len:u8)>";
//! let mut lexer = Lexer::new(SourceBuffer::from(source));
//!
//! // Pull tokens one at a time
//! while let Some(lexed) = lexer.next_token() {
//!     match lexed {
//!         Lexed::Token(token) => println!("{token}"),
//!         Lexed::EndOfStream(token) => assert_eq!(token.kind(), TokenKind::EndOfFile),
//!         Lexed::Error(err) => panic!("{err}"),
//!     }
//! }
//!
//! // Or iterate, stopping before the end-of-file sentinel
//! let names: Vec<_> = Lexer::new(SourceBuffer::from(source))
//!     .filter_map(Result::ok)
//!     .filter_map(|t| t.name_text().map(str::to_owned))
//!     .collect();
//! assert_eq!(names, ["len", "body", "len"]);
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - the [`ByteSource`] trait and the in-memory [`SourceBuffer`]
//! - [`chars`] - byte classification
//! - [`token`] - token kinds, payloads and the keyword table
//! - [`lexer`] - the lexer and its scanners
//! - [`error`] - lexical errors
//! - [`config`] - lexer configuration
//!
//! # Token Categories
//!
//! ## Builtin types
//!
//! Reserved words (14 total): `u8`, `u16`, `u32`, `u64`, `uleb128`, `i8`,
//! `i16`, `i32`, `i64`, `ileb128`, `optional`, `vec`, `skip`, `type`
//!
//! ## Names
//!
//! Any other identifier. Pattern: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Constants
//!
//! Unsigned 64-bit integers: `42`, `0b1010`, `0xFF`
//!
//! ## Punctuation
//!
//! `<`, `>`, `:`, `,`, `(`, `)`, `-`
//!
//! ## Comments
//!
//! `;` to the end of the line

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod error;
pub mod lexer;
pub mod source;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use error::{LexError, LexErrorKind};
pub use lexer::{tokenize, tokenize_with, LexState, Lexed, Lexer, Radix};
pub use source::{ByteSource, SourceBuffer};
pub use token::{keyword_from_ident, Token, TokenKind, TokenValue, KEYWORDS};

#[cfg(test)]
mod tests {
    use super::*;

    /// Kinds of every token, sentinel excluded.
    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(SourceBuffer::from(source))
            .map(|t| t.unwrap().kind())
            .collect()
    }

    #[test]
    fn test_schema_file() {
        let source = "\
; packet header
<magic:u32>
<version:u8>
<len:uleb128>
<body:vec(len:u8)>
<flags:optional(1:u16, default:skip)>
<origin:type(x:i32, y:i32)>
";
        let tokens = tokenize(source).unwrap();

        assert_eq!(tokens[0], Token::new(TokenKind::OpenBracket, 2, 1));
        assert_eq!(tokens[1], Token::name("magic", 2, 2));
        assert_eq!(tokens[3], Token::new(TokenKind::U32, 2, 8));
        assert!(tokens.contains(&Token::new(TokenKind::ULeb128, 4, 6)));
        assert!(tokens.contains(&Token::new(TokenKind::Vec, 5, 7)));
        assert!(tokens.contains(&Token::constant(1, 6, 17)));
        assert!(tokens.contains(&Token::name("default", 6, 24)));
        assert!(tokens.contains(&Token::new(TokenKind::TypeDecl, 7, 9)));
        assert_eq!(tokens.last(), Some(&Token::end_of_file(8, 1)));
    }

    #[test]
    fn test_vector_declaration() {
        assert_eq!(
            kinds("<data:vec(4:i8)>"),
            vec![
                TokenKind::OpenBracket,
                TokenKind::Name,
                TokenKind::Colon,
                TokenKind::Vec,
                TokenKind::ParenOpen,
                TokenKind::Constant,
                TokenKind::Colon,
                TokenKind::I8,
                TokenKind::ParenClose,
                TokenKind::CloseBracket,
            ]
        );
    }

    #[test]
    fn test_negative_number_is_minus_then_constant() {
        let tokens = tokenize("-12").unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Minus, 1, 1));
        assert_eq!(tokens[1], Token::constant(12, 1, 2));
    }

    #[test]
    fn test_display_stream() {
        let rendered: Vec<_> = tokenize("<a:i64>")
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            rendered,
            [
                "{ Location = 1:1 Token = < }",
                "{ Location = 1:2 Token = Name(a) }",
                "{ Location = 1:3 Token = : }",
                "{ Location = 1:4 Token = Type(i64) }",
                "{ Location = 1:7 Token = > }",
                "{ Location = 1:8 Token = EOF }",
            ]
        );
    }
}
