//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

/// schemac - lexical front end for the schema description language
///
/// Reads a `.syntax` schema file and prints every token it contains, one
/// per line, ending with `EOF`. Lexical errors are reported with their line
/// and column and make the command fail.
#[derive(Parser, Debug)]
#[command(name = "schemac")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex a schema description file and dump its tokens", long_about = None)]
pub struct Cli {
    /// Schema file to lex
    #[arg(value_name = "FILENAME.syntax")]
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "SCHEMAC_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "SCHEMAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "SCHEMAC_NO_COLOR")]
    pub no_color: bool,

    /// Token output format (default: from config, else text)
    #[arg(long, value_enum, env = "SCHEMAC_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Treat end of input inside an identifier as an error
    #[arg(long)]
    pub strict_identifiers: bool,
}
