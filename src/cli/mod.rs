use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::ast::Program;
use crate::lexer;
use crate::parser::{self, format_parse_error};
use crate::token::LexError;

pub mod fmt;
pub mod parse;

#[derive(Parser, Debug)]
#[command(
    name = "corgi",
    version,
    about = "Parser and tooling for the Corgi calculator language",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a Corgi source file and dump its AST
    Parse {
        path: PathBuf,
        /// Emit the AST as JSON instead of the debug tree
        #[arg(long)]
        json: bool,
    },
    /// Reprint a Corgi source file from its parsed AST
    Fmt {
        path: PathBuf,
        /// Report instead of rewriting when the file is not formatted
        #[arg(long)]
        check: bool,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A lex or parse diagnostic, already rendered with its snippet.
    #[error("{0}")]
    Diagnostic(String),
    #[error("{} needs formatting", .0.display())]
    NeedsFormat(PathBuf),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Parse { path, json } => parse::handle_parse(&path, json),
        Command::Fmt { path, check } => fmt::handle_fmt(&path, check),
    }
}

/// Reads, lexes, and parses one source file. Any grammar violation
/// aborts here with a rendered diagnostic; no AST escapes a failed parse.
pub(crate) fn load_program(path: &Path) -> Result<(String, Program), CliError> {
    let src = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path.to_string_lossy();
    let tokens = lexer::lex(&src)
        .map_err(|err| CliError::Diagnostic(format_lex_error(&src, &err, &filename)))?;
    let program = parser::parse_program(tokens)
        .map_err(|err| CliError::Diagnostic(format_parse_error(&src, &err, &filename)))?;
    Ok((src, program))
}

fn format_lex_error(src: &str, err: &LexError, filename: &str) -> String {
    let mut out = format!(
        "Lex error: {}\n --> {}:{}:{}",
        err.message, filename, err.span.line, err.span.column
    );
    out.push_str(&crate::parser::error::render_snippet(src, &err.span));
    out
}
