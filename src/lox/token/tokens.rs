//! Data types representing tokens available in the Lox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::lox::types::Literal;
use crate::lox::util::map;

/// Keywords in the Lox language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "the set of reserved words is closed."
)]
pub enum Keyword {
    // Constants
    /// `"nil"`
    Nil,
    /// `"false"`
    False,
    /// `"true"`
    True,

    // Logical Operators
    /// `"and"`
    And,
    /// `"or"`
    Or,

    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"for"`
    For,
    /// `"while"`
    While,
    /// `"return"`
    Return,

    // Declarations
    /// `"class"`
    Class,
    /// `"fun"`
    Fun,
    /// `"var"`
    Var,

    // Others
    /// `"print"`
    Print,
    /// `"super"`
    Super,
    /// `"this"`
    This,
}

impl Keyword {
    /// Extract the raw representation as it occurs in the source code.
    #[must_use]
    #[inline]
    pub const fn to_raw(self) -> &'static str {
        match self {
            Keyword::Nil => "nil",
            Keyword::False => "false",
            Keyword::True => "true",
            Keyword::And => "and",
            Keyword::Or => "or",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::While => "while",
            Keyword::Return => "return",
            Keyword::Class => "class",
            Keyword::Fun => "fun",
            Keyword::Var => "var",
            Keyword::Print => "print",
            Keyword::Super => "super",
            Keyword::This => "this",
        }
    }
}

/// Lookup table for keywords to distinguish them from identifiers.
/// Matching is exact and case-sensitive.
pub static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
    map! {
        "nil"    => Keyword::Nil,
        "false"  => Keyword::False,
        "true"   => Keyword::True,

        "and"    => Keyword::And,
        "or"     => Keyword::Or,

        "if"     => Keyword::If,
        "else"   => Keyword::Else,
        "for"    => Keyword::For,
        "while"  => Keyword::While,
        "return" => Keyword::Return,

        "class"  => Keyword::Class,
        "fun"    => Keyword::Fun,
        "var"    => Keyword::Var,

        "print"  => Keyword::Print,
        "super"  => Keyword::Super,
        "this"   => Keyword::This,
    }
});

/// The closed set of lexical categories a token can fall into.
///
/// Literal kinds only name the category; their decoded value lives in
/// [`Token::literal`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenKind {
    // Grouping
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,

    // Arith Operators
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"/"`
    Slash,
    /// `"*"`
    Star,

    // Boolean Operators
    /// `"=="`
    DoubleEquals,
    /// `"!="`
    NotEquals,
    /// `">"`
    GreaterThan,
    /// `">="`
    GreaterThanEqual,
    /// `"<"`
    LessThan,
    /// `"<="`
    LessThanEqual,
    /// `"!"`
    Not,

    // Special Operators
    /// `","`
    Comma,
    /// `"."`
    Dot,
    /// `";"`
    Semi,
    /// `"="`
    Assign,

    // Literals
    /// A custom identifier
    Identifier,
    /// A string literal, quotes included in the lexeme.
    String,
    /// A number literal.
    Number,

    /// A specific keyword
    Keyword(Keyword),

    /// End of Input. Always the last token, and there is exactly one.
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let name = match *self {
            TokenKind::LeftParen        => "LEFT_PAREN",
            TokenKind::RightParen       => "RIGHT_PAREN",
            TokenKind::LeftBrace        => "LEFT_BRACE",
            TokenKind::RightBrace       => "RIGHT_BRACE",
            TokenKind::Plus             => "PLUS",
            TokenKind::Minus            => "MINUS",
            TokenKind::Slash            => "SLASH",
            TokenKind::Star             => "STAR",
            TokenKind::DoubleEquals     => "EQUAL_EQUAL",
            TokenKind::NotEquals        => "BANG_EQUAL",
            TokenKind::GreaterThan      => "GREATER",
            TokenKind::GreaterThanEqual => "GREATER_EQUAL",
            TokenKind::LessThan         => "LESS",
            TokenKind::LessThanEqual    => "LESS_EQUAL",
            TokenKind::Not              => "BANG",
            TokenKind::Comma            => "COMMA",
            TokenKind::Dot              => "DOT",
            TokenKind::Semi             => "SEMICOLON",
            TokenKind::Assign           => "EQUAL",
            TokenKind::Identifier       => "IDENTIFIER",
            TokenKind::String           => "STRING",
            TokenKind::Number           => "NUMBER",
            TokenKind::EndOfInput       => "EOF",
            TokenKind::Keyword(kw)      => return f.write_str(&kw.to_raw().to_uppercase()),
        };
        f.write_str(name)
    }
}

/// A single classified piece of source code.
#[derive(Clone, Debug, PartialEq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "a token is kind, lexeme, literal and line - nothing else."
)]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// The exact source text this token was made from.
    /// Empty only for [`TokenKind::EndOfInput`].
    pub lexeme: String,
    /// The decoded value, present for string and number tokens only.
    pub literal: Option<Literal>,
    /// Line the token started on, 1-indexed.
    pub line: usize,
}

impl Token {
    /// The sentinel closing every token sequence.
    #[must_use]
    #[inline]
    pub const fn end_of_input(line: usize) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            lexeme: String::new(),
            literal: None,
            line,
        }
    }

    /// Whether this is the end-of-input sentinel.
    #[must_use]
    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Renders as `KIND lexeme literal`, with `null` for a missing literal.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self.literal {
            Some(ref literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} null", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Keyword, Token, TokenKind, KEYWORDS};
    use crate::lox::types::Literal;

    #[test]
    fn every_keyword_is_in_the_table() {
        let all = [
            Keyword::Nil, Keyword::False, Keyword::True, Keyword::And,
            Keyword::Or, Keyword::If, Keyword::Else, Keyword::For,
            Keyword::While, Keyword::Return, Keyword::Class, Keyword::Fun,
            Keyword::Var, Keyword::Print, Keyword::Super, Keyword::This,
        ];
        assert_eq!(KEYWORDS.len(), all.len());
        for kw in all {
            assert_eq!(KEYWORDS.get(kw.to_raw()), Some(&kw));
        }
    }

    #[test]
    fn display_formats() {
        let number = Token {
            kind: TokenKind::Number,
            lexeme: "12".to_owned(),
            literal: Some(Literal::Number(12.0)),
            line: 1,
        };
        assert_eq!(number.to_string(), "NUMBER 12 12.0");

        let string = Token {
            kind: TokenKind::String,
            lexeme: "\"hi\"".to_owned(),
            literal: Some(Literal::String("hi".to_owned())),
            line: 1,
        };
        assert_eq!(string.to_string(), "STRING \"hi\" hi");

        let keyword = Token {
            kind: TokenKind::Keyword(Keyword::While),
            lexeme: "while".to_owned(),
            literal: None,
            line: 3,
        };
        assert_eq!(keyword.to_string(), "WHILE while null");

        assert_eq!(Token::end_of_input(1).to_string(), "EOF  null");
        assert_eq!(TokenKind::NotEquals.to_string(), "BANG_EQUAL");
    }
}
