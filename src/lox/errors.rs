//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::process::ExitCode;

use itertools::Itertools as _;
use thiserror::Error;

use crate::lox::diagnostics::Diagnostic;

/// Errors that can happen during lexing.
///
/// None of these stop the scanner; each is turned into a single
/// [report](crate::lox::diagnostics::Diagnostics::report) and scanning continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LexingError {
    /// A character no token starts with.
    #[error("Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Line it was found on.
        line: usize,
    },
    /// A string was started but not terminated until the end of input.
    #[error("Unterminated string.")]
    UnterminatedString {
        /// Line the input ran out on.
        line: usize,
    },
}

impl LexingError {
    /// The line this error is reported at.
    #[must_use]
    #[inline]
    pub const fn line(&self) -> usize {
        match *self {
            LexingError::UnexpectedCharacter { line, .. }
            | LexingError::UnterminatedString { line } => line,
        }
    }
}

/// An error that occurred inside the Lox engine.
/// This enum will be extended bit by bit as new phases
/// get added.
///
/// To support the [`std::process::Termination`] trait such that, just like
/// the Crafting Interpreters book, we can use exit codes as specified by
/// the [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Errors that happened when trying to load the file.
    #[error("Error reading source file: {0}")]
    FileError(#[from] IOError),
    /// Errors that happened during the lexing phase.
    #[error("Errors when scanning:\n{}", .0.iter().join("\n"))]
    LexingErrors(Vec<Diagnostic>),
}

impl EngineError {
    /// The `<sysexits.h>` code this error should terminate the process with.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            // Technically, 66 only specifies missing or unreadable files,
            // other I/O errors would be 74, EX_IOERR.
            EngineError::FileError(_) => 66,    // EX_NOINPUT
            EngineError::LexingErrors(_) => 65, // EX_DATAERR
        }
    }
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_code())
    }
}
