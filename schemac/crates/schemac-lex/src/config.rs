//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Knobs that change how the lexer treats borderline input.
///
/// Deserializes from the `[lexer]` table of `schemac.toml`; missing keys
/// take their default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Treat end of input inside an identifier as an error instead of the
    /// end of the identifier.
    pub strict_identifiers: bool,
}
