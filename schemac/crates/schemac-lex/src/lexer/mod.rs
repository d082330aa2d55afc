//! Lexer module.
//!
//! The lexer is split into small components:
//! - `core` - the [`Lexer`] struct, position tracking and dispatch
//! - `comment` - whitespace and `;` comment skipping
//! - `punctuation` - single-character tokens
//! - `number` - radix-aware constant scanning
//! - `identifier` - identifier and keyword scanning

mod comment;
mod core;
mod identifier;
mod number;
mod punctuation;

pub use self::core::{tokenize, tokenize_with, LexState, Lexed, Lexer};
pub use number::Radix;
pub use punctuation::punctuation;
