//! Token definitions for the schema language.
//!
//! A [`Token`] is an owned, self-contained value: its kind, the line and
//! column of its first byte, and a payload for names and constants.

use serde::Serialize;
use std::fmt;

/// The closed set of token tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // ===== Punctuation =====
    /// `<`
    OpenBracket,
    /// `>`
    CloseBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`, reserved for the grammar. The lexer treats `;` as a comment.
    SemiColon,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `-`
    Minus,

    // ===== Builtin types =====
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `uleb128`
    ULeb128,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `ileb128`
    ILeb128,
    /// `optional`
    Optional,
    /// `vec`
    Vec,
    /// `skip`
    Skip,
    /// `type`
    TypeDecl,

    // ===== Payload carrying =====
    /// A user identifier.
    Name,
    /// An unsigned integer constant.
    Constant,

    /// Marks clean exhaustion of the input.
    EndOfFile,
}

impl TokenKind {
    /// Returns the source spelling of the token, or a descriptive word for
    /// kinds without a fixed spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use schemac_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::OpenBracket.as_str(), "<");
    /// assert_eq!(TokenKind::ULeb128.as_str(), "uleb128");
    /// assert_eq!(TokenKind::Name.as_str(), "name");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::OpenBracket => "<",
            TokenKind::CloseBracket => ">",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::SemiColon => ";",
            TokenKind::ParenOpen => "(",
            TokenKind::ParenClose => ")",
            TokenKind::Minus => "-",
            TokenKind::U8 => "u8",
            TokenKind::U16 => "u16",
            TokenKind::U32 => "u32",
            TokenKind::U64 => "u64",
            TokenKind::ULeb128 => "uleb128",
            TokenKind::I8 => "i8",
            TokenKind::I16 => "i16",
            TokenKind::I32 => "i32",
            TokenKind::I64 => "i64",
            TokenKind::ILeb128 => "ileb128",
            TokenKind::Optional => "optional",
            TokenKind::Vec => "vec",
            TokenKind::Skip => "skip",
            TokenKind::TypeDecl => "type",
            TokenKind::Name => "name",
            TokenKind::Constant => "constant",
            TokenKind::EndOfFile => "end of file",
        }
    }

    /// Returns true for the fourteen reserved words.
    pub fn is_builtin_type(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Returns true for single-character punctuation.
    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::OpenBracket
                | TokenKind::CloseBracket
                | TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::SemiColon
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Minus
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words, in lookup order.
pub const KEYWORDS: [(&str, TokenKind); 14] = [
    ("u8", TokenKind::U8),
    ("u16", TokenKind::U16),
    ("u32", TokenKind::U32),
    ("u64", TokenKind::U64),
    ("uleb128", TokenKind::ULeb128),
    ("i8", TokenKind::I8),
    ("i16", TokenKind::I16),
    ("i32", TokenKind::I32),
    ("i64", TokenKind::I64),
    ("ileb128", TokenKind::ILeb128),
    ("optional", TokenKind::Optional),
    ("vec", TokenKind::Vec),
    ("skip", TokenKind::Skip),
    ("type", TokenKind::TypeDecl),
];

/// Looks up an identifier in the keyword table.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use schemac_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("vec"), Some(TokenKind::Vec));
/// assert_eq!(keyword_from_ident("Vec"), None);
/// assert_eq!(keyword_from_ident("u8x"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == ident)
        .map(|(_, kind)| *kind)
}

/// Payload attached to a token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// No payload.
    #[default]
    None,
    /// Identifier text of a [`TokenKind::Name`].
    Name(String),
    /// Value of a [`TokenKind::Constant`].
    Constant(u64),
}

impl TokenValue {
    fn is_none(&self) -> bool {
        matches!(self, TokenValue::None)
    }
}

/// A lexical token.
///
/// The payload always agrees with the kind: only `Name` tokens carry text
/// and only `Constant` tokens carry a value. The constructors are the only
/// way to build one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    kind: TokenKind,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "TokenValue::is_none")]
    value: TokenValue,
}

impl Token {
    /// Creates a payload-free token.
    ///
    /// Passing [`TokenKind::Name`] or [`TokenKind::Constant`] is a logic
    /// error; use [`Token::name`] or [`Token::constant`] for those.
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        debug_assert!(!matches!(kind, TokenKind::Name | TokenKind::Constant));
        Self {
            kind,
            line,
            column,
            value: TokenValue::None,
        }
    }

    /// Creates a `Name` token.
    pub fn name(text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: TokenKind::Name,
            line,
            column,
            value: TokenValue::Name(text.into()),
        }
    }

    /// Creates a `Constant` token.
    pub fn constant(value: u64, line: u32, column: u32) -> Self {
        Self {
            kind: TokenKind::Constant,
            line,
            column,
            value: TokenValue::Constant(value),
        }
    }

    /// Creates the end-of-file sentinel.
    pub fn end_of_file(line: u32, column: u32) -> Self {
        Self::new(TokenKind::EndOfFile, line, column)
    }

    /// Returns the kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the 1-based line of the first byte.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column of the first byte.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the payload.
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Returns the identifier text of a `Name` token.
    pub fn name_text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Name(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the value of a `Constant` token.
    pub fn constant_value(&self) -> Option<u64> {
        match self.value {
            TokenValue::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true for the end-of-file sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

/// Renders the token the way the CLI dumps it:
/// `{ Location = 1:2 Token = Type(u8) }`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ Location = {}:{} Token = ", self.line, self.column)?;
        match (&self.kind, &self.value) {
            (TokenKind::Name, TokenValue::Name(text)) => write!(f, "Name({text})")?,
            (TokenKind::Constant, TokenValue::Constant(value)) => {
                write!(f, "Constant({value})")?
            },
            (TokenKind::TypeDecl, _) => f.write_str("TypeDecl(type)")?,
            (TokenKind::EndOfFile, _) => f.write_str("EOF")?,
            (kind, _) if kind.is_builtin_type() => write!(f, "Type({kind})")?,
            (kind, _) => f.write_str(kind.as_str())?,
        }
        f.write_str(" }")
    }
}
