//! schemac-drv - Driver for the schemac toolchain
//!
//! Ties the pieces together for the `schemac` binary: argument parsing,
//! configuration, logging, and the token dump loop that pulls tokens from
//! the lexer and prints them.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use schemac_lex::{Lexed, Lexer, SourceBuffer};
use tracing::{debug, info};

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use error::{DrvError, Result};

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every token up to and including `EOF` was printed.
    Success,
    /// A lexical or driver error was reported and the run failed.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// One lexing job: an input file and the settings to lex it with.
#[derive(Debug, Clone)]
pub struct Session {
    /// The schema file.
    pub input: PathBuf,
    /// Effective configuration after all layers were applied.
    pub config: Config,
}

impl Session {
    /// Builds a session from parsed arguments, loading and layering the
    /// configuration.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::load(cli.config.as_deref())?;
        config.apply_cli(cli);
        debug!(?config, "effective configuration");
        Ok(Self::new(cli.file.clone(), config))
    }

    /// Creates a session directly.
    pub fn new(input: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            input: input.into(),
            config,
        }
    }

    /// Lexes the input and writes every token to `out`.
    ///
    /// A lexical error is written to `err` as a diagnostic with the
    /// offending source line, and yields [`Outcome::Failure`].
    pub fn dump_tokens<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<Outcome> {
        let source = open_source(&self.input)?;
        info!(path = %self.input.display(), bytes = source.as_bytes().len(), "lexing");

        let mut lexer = Lexer::with_config(source, self.config.lexer);
        let mut count = 0usize;
        while let Some(lexed) = lexer.next_token() {
            match lexed {
                Lexed::Token(token) | Lexed::EndOfStream(token) => {
                    render::write_token(out, &token, self.config.output.format)?;
                    count += 1;
                },
                Lexed::Error(error) => {
                    debug!(line = error.line, column = error.column, "lexing failed");
                    let diagnostic = error
                        .to_diagnostic()
                        .with_source_line(lexer.source().as_bytes());
                    out.flush()?;
                    writeln!(err, "{diagnostic}")?;
                    return Ok(Outcome::Failure);
                },
            }
        }

        debug!(tokens = count, "done");
        out.flush()?;
        Ok(Outcome::Success)
    }
}

fn open_source(path: &Path) -> Result<SourceBuffer> {
    SourceBuffer::open(path).map_err(|source| DrvError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs a parsed command line, reporting driver errors to `err`.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> io::Result<Outcome> {
    let result = Session::from_cli(cli).and_then(|session| session.dump_tokens(out, err));
    match result {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            writeln!(err, "{}", error.to_diagnostic())?;
            Ok(Outcome::Failure)
        },
    }
}

/// Entry point of the `schemac` binary.
pub fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.no_color)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let outcome = run(&cli, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(outcome.into())
}
