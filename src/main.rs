//! `lox-scan`: reads a Lox source file and prints the tokens it consists of.
//!
//! Lexical errors are collected during the scan, printed to standard error once all
//! tokens have been printed, and make the process exit with `EX_DATAERR`.
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
)]

use clap::{Parser, ValueEnum};

use lox_scan::lox::diagnostics::Collector;
use lox_scan::lox::errors::EngineError;
use lox_scan::lox::token::lexer::Scanner;

use std::fs;
use std::process::{ExitCode, Termination};

/// How each token is printed.
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum TokenFormat {
    /// `KIND lexeme literal`, one token per line.
    #[default]
    Plain,
    /// Rust debug representation of each token.
    Debug,
}

/// Load a file, scan it, and print every token.
///
/// Tokens are printed even if errors were reported, so everything that
/// did scan is visible next to the errors.
fn run_file(file: &str, format: TokenFormat) -> Result<(), EngineError> {
    let source = fs::read_to_string(file)?;

    let mut diagnostics = Collector::default();
    let tokens = Scanner::new(&source, &mut diagnostics).scan();

    for token in &tokens {
        match format {
            TokenFormat::Plain => println!("{token}"),
            TokenFormat::Debug => println!("{token:?}"),
        }
    }

    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(EngineError::LexingErrors(diagnostics.into_diagnostics()))
    }
}

/// Isomorphic to `Result<(), EngineError>`,
/// this allows for overriding the [Termination]
/// trait impl and report custom exit codes instead.
#[derive(Debug)]
enum EngineResult {
    /// Ok variant.
    Ok,
    /// Error variant
    Err(EngineError),
}

impl Termination for EngineResult {
    fn report(self) -> ExitCode {
        if let EngineResult::Err(err) = self {
            eprintln!("{err}");
            err.into()
        } else {
            ExitCode::SUCCESS
        }
    }
}

impl<E> From<Result<(), E>> for EngineResult
where
    EngineError: From<E>,
{
    fn from(value: Result<(), E>) -> Self {
        match value {
            Ok(()) => EngineResult::Ok,
            Err(err) => EngineResult::Err(err.into()),
        }
    }
}

/// lox-scan runs the scanning phase of the Lox Programming Language over a
/// source file and prints the resulting tokens.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct LoxArgs {
    /// Source File for the program
    source_file: String,

    /// How to print tokens
    #[arg(long, value_enum, env = "LOX_TOKEN_FORMAT", default_value_t)]
    format: TokenFormat,
}

fn main() -> EngineResult {
    let LoxArgs {
        source_file,
        format,
    } = LoxArgs::parse();

    run_file(&source_file, format).into()
}
