//! Token rendering.

use std::io::Write;

use schemac_lex::Token;

use crate::config::OutputFormat;
use crate::error::Result;

/// Writes one token, followed by a newline, in the requested format.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{token}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, token)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
