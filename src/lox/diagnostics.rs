//! Sinks that lexical errors are reported to.
//!
//! The scanner only knows the [`Diagnostics`] trait; what happens to a report
//! (collecting, printing, counting) is up to the sink handed to it.
use core::fmt::{Display, Formatter};

/// The error-reporting capability the scanner needs from its environment.
///
/// A sink must tolerate being called any number of times during a single scan.
/// Sinks shared between threads have to bring their own synchronization.
pub trait Diagnostics {
    /// Report an error found on the given (1-indexed) line.
    fn report(&mut self, line: usize, message: &str);
}

impl<T: Diagnostics + ?Sized> Diagnostics for &mut T {
    #[inline]
    fn report(&mut self, line: usize, message: &str) {
        (**self).report(line, message);
    }
}

/// A single reported error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "a report is a line and a message.")]
pub struct Diagnostic {
    /// Line the error was reported at.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

/// Keeps every report, in the order they arrived.
#[derive(Clone, Debug, Default)]
pub struct Collector {
    /// Reports so far.
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    /// All reports so far.
    #[must_use]
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether nothing was reported.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of reports so far.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Takes the reports out of the collector.
    #[must_use]
    #[inline]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Diagnostics for Collector {
    #[inline]
    fn report(&mut self, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            message: message.to_owned(),
        });
    }
}
