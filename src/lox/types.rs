//! Types used through multiple phases of the Lox project.

use core::fmt::{Display, Formatter};

/// The decoded value of a literal token.
///
/// Only string and number tokens carry one; every other token leaves
/// [`Token::literal`](crate::lox::token::tokens::Token::literal) empty, which
/// makes the three cases (absent, string, number) exhaustive for the parser.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum Literal {
    /// The contents of a string literal, without its quotes.
    /// No escape sequences are supported.
    String(String),
    /// A number, represented as a double-precision floating point number.
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            Literal::String(ref value) => f.write_str(value),
            // Debug formatting keeps the fractional part, so 123 prints as `123.0`.
            Literal::Number(value) => write!(f, "{value:?}"),
        }
    }
}
