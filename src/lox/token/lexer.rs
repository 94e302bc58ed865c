//! Encapsulates all behaviour necessary to properly lex Lox code.
//!
//! Note: Lexing is also commonly categorized as tokenizing. The term "lexing"
//! is used for the module in accordance with the Crafting Interpreters book,
//! and the type doing the work is named [Scanner] just like the book's class.
//!
//! ```rust
//! use lox_scan::lox::token::lexer::tokenize;
//!
//! let tokens = tokenize("var x = \"foo\" + 20;").expect("valid source");
//! assert_eq!(tokens.len(), 8);
//! ```

use core::str::FromStr;

use crate::lox::diagnostics::{Collector, Diagnostic, Diagnostics};
use crate::lox::errors::LexingError;
use crate::lox::token::tokens::{Token, TokenKind, KEYWORDS};
use crate::lox::types::Literal;

/// Where the scanner currently is in its source.
///
/// `start <= current <= source.len()` holds at all times, and both
/// are byte offsets that sit on `char` boundaries.
#[derive(Debug, Copy, Clone)]
struct Cursor {
    /// Beginning of the lexeme being recognized.
    start: usize,
    /// Next unread position.
    current: usize,
    /// Line the cursor is on, 1-indexed. Only ever increases.
    line: usize,
    /// Line the current lexeme started on.
    start_line: usize,
}

impl Cursor {
    /// A cursor at the very beginning of a source.
    const fn new() -> Self {
        Cursor {
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Marks the cursor position as the start of the next lexeme.
    const fn begin_lexeme(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
    }
}

/// Turns one complete source string into tokens.
///
/// A scanner is single-use: [`scan`](Scanner::scan) consumes it. Lexical errors are
/// handed to the [`Diagnostics`] sink and scanning carries on past them, so one pass
/// reports every problem in the source. Deciding whether the resulting tokens are fit
/// for parsing is left to the caller.
#[derive(Debug)]
pub struct Scanner<'src, D> {
    /// The full source text.
    source: &'src str,
    /// Scan position.
    cursor: Cursor,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Where lexical errors go.
    diagnostics: D,
}

impl<'src, D: Diagnostics> Scanner<'src, D> {
    /// Prepares a scan of `source`, reporting errors into `diagnostics`.
    ///
    /// Pass `&mut sink` to keep hold of the sink after the scan.
    #[must_use]
    #[inline]
    pub const fn new(source: &'src str, diagnostics: D) -> Self {
        Scanner {
            source,
            cursor: Cursor::new(),
            tokens: Vec::new(),
            diagnostics,
        }
    }

    /// Scans the whole source. The returned tokens are in source order and always
    /// end in exactly one [`TokenKind::EndOfInput`] token, even for empty input.
    #[must_use]
    #[inline]
    pub fn scan(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.cursor.begin_lexeme();
            self.scan_token();
        }

        self.tokens.push(Token::end_of_input(self.cursor.line));
        self.tokens
    }

    /// Lexes whatever starts at the cursor. Emits at most one token.
    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            // Grouping
            '(' => self.emit(TokenKind::LeftParen),
            ')' => self.emit(TokenKind::RightParen),
            '{' => self.emit(TokenKind::LeftBrace),
            '}' => self.emit(TokenKind::RightBrace),

            // Arith Operators
            '+' => self.emit(TokenKind::Plus),
            '-' => self.emit(TokenKind::Minus),
            '*' => self.emit(TokenKind::Star),

            // Comments
            '/' if self.next_char_is('/') => self.skip_while(|ch| ch != '\n'),
            '/' => self.emit(TokenKind::Slash),

            // Boolean Operators
            '=' if self.next_char_is('=') => self.emit(TokenKind::DoubleEquals),
            '!' if self.next_char_is('=') => self.emit(TokenKind::NotEquals),
            '!'                           => self.emit(TokenKind::Not),
            '>' if self.next_char_is('=') => self.emit(TokenKind::GreaterThanEqual),
            '>'                           => self.emit(TokenKind::GreaterThan),
            '<' if self.next_char_is('=') => self.emit(TokenKind::LessThanEqual),
            '<'                           => self.emit(TokenKind::LessThan),

            // Special Operators
            ',' => self.emit(TokenKind::Comma),
            '.' => self.emit(TokenKind::Dot),
            ';' => self.emit(TokenKind::Semi),
            '=' => self.emit(TokenKind::Assign),

            // Whitespace
            ' ' | '\t' | '\r' => {}
            '\n' => self.newline(),

            // Literals
            '"' => self.string(),
            ch if is_digit(ch) => self.number(),

            // Identifiers and Keywords
            ch if is_alpha(ch) => self.identifier(),

            // ERROR
            found => self.error(&LexingError::UnexpectedCharacter {
                found,
                line: self.cursor.line,
            }),
        }
    }

    /// Rest of a string literal, the opening quote already consumed.
    /// Strings may span lines; no escape sequences are recognized.
    fn string(&mut self) {
        while let Some(ch) = self.next_char_if(|ch| ch != '"') {
            if ch == '\n' {
                self.newline();
            }
        }

        if self.next_char_is('"') {
            let value = self
                .lexeme()
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
                .unwrap_or_default()
                .to_owned();
            self.emit_literal(TokenKind::String, Literal::String(value));
        } else {
            // Correctness: the loop above only stops at a quote or at the end,
            // so the input is exhausted here.
            self.error(&LexingError::UnterminatedString {
                line: self.cursor.line,
            });
        }
    }

    /// Rest of a number literal, the first digit already consumed.
    /// A `.` only belongs to the number if a digit follows it.
    fn number(&mut self) {
        self.skip_while(is_digit);

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            let _dot: Option<char> = self.advance();
            self.skip_while(is_digit);
        }

        let value = f64::from_str(self.lexeme())
            .expect("digits with an optional fractional part always parse");
        self.emit_literal(TokenKind::Number, Literal::Number(value));
    }

    /// Rest of an identifier or keyword, the first character already consumed.
    fn identifier(&mut self) {
        self.skip_while(is_alpha_num);

        let kind = KEYWORDS
            .get(self.lexeme())
            .map_or(TokenKind::Identifier, |kw| TokenKind::Keyword(*kw));
        self.emit(kind);
    }

    /// Whether all of the source has been consumed.
    fn is_at_end(&self) -> bool {
        self.cursor.current >= self.source.len()
    }

    /// The not-yet-consumed remainder of the source.
    fn rest(&self) -> &'src str {
        self.source.get(self.cursor.current..).unwrap_or_default()
    }

    /// The source text from the start of the current lexeme up to the cursor.
    fn lexeme(&self) -> &'src str {
        self.source
            .get(self.cursor.start..self.cursor.current)
            .unwrap_or_default()
    }

    /// Looks at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Looks one character beyond [`peek`](Self::peek).
    fn peek_next(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    /// Consumes the next character.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "a char never reaches past the end of the str it was read from."
    )]
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.cursor.current += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character only if it matches the predicate.
    fn next_char_if(&mut self, test: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if test(ch) => self.advance(),
            Some(_) | None => None,
        }
    }

    /// Consumes the next character only if it is exactly `expected`.
    fn next_char_is(&mut self, expected: char) -> bool {
        self.next_char_if(|ch| ch == expected).is_some()
    }

    /// Consumes characters as long as they match the predicate.
    fn skip_while(&mut self, test: impl Fn(char) -> bool) {
        while self.next_char_if(&test).is_some() {
            // do nothing...
        }
    }

    /// Moves the cursor to the next line.
    fn newline(&mut self) {
        self.cursor.line = self.cursor.line.saturating_add(1);
    }

    /// Emits a token without a literal value, spanning the current lexeme.
    fn emit(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    /// Emits a token carrying a literal value, spanning the current lexeme.
    fn emit_literal(&mut self, kind: TokenKind, literal: Literal) {
        self.push(kind, Some(literal));
    }

    /// Appends a token for the current lexeme, on the line the lexeme started.
    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_owned(),
            literal,
            line: self.cursor.start_line,
        });
    }

    /// Hands a lexical error to the diagnostics sink.
    fn error(&mut self, error: &LexingError) {
        self.diagnostics.report(error.line(), &error.to_string());
    }
}

/// Tokenizes the given source code of Lox into either a [Vec] of [`Tokens`](Token),
/// or returns all [`Diagnostics`](Diagnostic) if any were reported.
/// Thus, you cannot proceed with the list of tokens if lexing had any errors;
/// use a [Scanner] directly to get both.
///
/// # Errors
///
/// Every lexical error in the source, in the order they were found.
#[inline]
pub fn tokenize<S: AsRef<str>>(source: S) -> Result<Vec<Token>, Vec<Diagnostic>> {
    let mut diagnostics = Collector::default();
    let tokens = Scanner::new(source.as_ref(), &mut diagnostics).scan();

    if diagnostics.is_empty() {
        Ok(tokens)
    } else {
        Err(diagnostics.into_diagnostics())
    }
}

/// Is the character an ASCII digit?
#[inline]
const fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Is the character in the ASCII alphabet, or an underscore?
#[inline]
const fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || (ch == '_')
}

/// Is the character an alphanumeric ASCII character, or an underscore?
#[inline]
const fn is_alpha_num(ch: char) -> bool {
    is_alpha(ch) || is_digit(ch)
}

#[cfg(test)]
mod test {
    use crate::lox::diagnostics::{Collector, Diagnostic};
    use crate::lox::token::tokens::Keyword::*;
    use crate::lox::token::tokens::{Token, TokenKind::{self, *}};
    use crate::lox::types::Literal;

    use super::Scanner;

    /// Scans with a collecting sink, returning tokens and every report.
    fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut diagnostics = Collector::default();
        let tokens = Scanner::new(source, &mut diagnostics).scan();
        (tokens, diagnostics.into_diagnostics())
    }

    /// Kinds of a clean scan, without the trailing end-of-input.
    fn kinds(source: &str) -> Vec<TokenKind> {
        let tokens = super::tokenize(source).expect("Tokenizing failed");
        assert_eq!(tokens.last().map(|token| token.kind), Some(EndOfInput));
        tokens[..tokens.len() - 1].iter().map(|token| token.kind).collect()
    }

    #[test]
    fn simple_tokenizations() {
        assert_eq!(
            kinds("var foo = 20;"),
            vec![Keyword(Var), Identifier, Assign, Number, Semi]
        );
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, Comma,
                Dot, Minus, Plus, Semi, Star, Slash,
            ]
        );
    }

    #[test]
    fn empty_and_blank_sources() {
        for source in ["", "  \t\r ", "\n\n"] {
            let (tokens, diagnostics) = scan(source);
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].is_end_of_input());
            assert_eq!(tokens[0].lexeme, "");
            assert!(diagnostics.is_empty());
        }
        assert_eq!(scan("\n\n").0[0].line, 3);
    }

    #[test]
    fn maximal_munch() {
        let cases = [
            ("!", Not),
            ("!=", NotEquals),
            ("=", Assign),
            ("==", DoubleEquals),
            ("<", LessThan),
            ("<=", LessThanEqual),
            (">", GreaterThan),
            (">=", GreaterThanEqual),
        ];
        for (source, kind) in cases {
            assert_eq!(kinds(source), vec![kind], "scanning {source:?}");
        }
        assert_eq!(kinds("==="), vec![DoubleEquals, Assign]);
        assert_eq!(kinds("! ="), vec![Not, Assign]);
    }

    #[test]
    fn string_literals() {
        let (tokens, diagnostics) = scan("\"abc\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, String);
        assert_eq!(tokens[0].lexeme, "\"abc\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("abc".to_owned())));

        let empty = super::tokenize("\"\"").expect("Tokenizing failed");
        assert_eq!(empty[0].literal, Some(Literal::String(std::string::String::new())));
    }

    #[test]
    fn strings_are_not_unescaped() {
        let tokens = super::tokenize(r#""a\nb""#).expect("Tokenizing failed");
        assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb".to_owned())));
    }

    #[test]
    fn multi_line_strings_count_lines() {
        let (tokens, diagnostics) = scan("\"one\ntwo\" x");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_owned())));
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].kind, Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string() {
        let (tokens, diagnostics) = scan("\"abc");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end_of_input());
        assert_eq!(
            diagnostics,
            vec![Diagnostic { line: 1, message: "Unterminated string.".to_owned() }]
        );

        let (_, diagnostics) = scan("1 \"a\nb\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 3);
    }

    #[test]
    fn number_literals() {
        let tokens = super::tokenize("123 123.456").expect("Tokenizing failed");
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].literal, Some(Literal::Number(123.456)));
        assert_eq!(tokens[1].lexeme, "123.456");
    }

    #[test]
    fn trailing_dot_is_its_own_token() {
        let tokens = super::tokenize("123.").expect("Tokenizing failed");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, Number);
        assert_eq!(tokens[0].lexeme, "123");
        assert_eq!(tokens[1].kind, Dot);
        assert!(tokens[2].is_end_of_input());

        assert_eq!(kinds("1.foo"), vec![Number, Dot, Identifier]);
    }

    #[test]
    fn minus_is_not_part_of_a_number() {
        let tokens = super::tokenize("-5").expect("Tokenizing failed");
        assert_eq!(tokens[0].kind, Minus);
        assert_eq!(tokens[1].literal, Some(Literal::Number(5.0)));
    }

    #[test]
    fn keywords_match_exactly() {
        assert_eq!(kinds("and"), vec![Keyword(And)]);
        assert_eq!(kinds("classify"), vec![Identifier]);
        assert_eq!(kinds("or orchid"), vec![Keyword(Or), Identifier]);
        assert_eq!(kinds("While while"), vec![Identifier, Keyword(While)]);
        assert_eq!(kinds("_foo9 a_b"), vec![Identifier, Identifier]);
        assert_eq!(
            kinds("class else false for fun if nil print return super this true var"),
            vec![
                Keyword(Class), Keyword(Else), Keyword(False), Keyword(For),
                Keyword(Fun), Keyword(If), Keyword(Nil), Keyword(Print),
                Keyword(Return), Keyword(Super), Keyword(This), Keyword(True),
                Keyword(Var),
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        let tokens = super::tokenize("// comment\n123").expect("Tokenizing failed");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[0].line, 2);

        assert_eq!(kinds("1 // trailing"), vec![Number]);
        assert_eq!(kinds("4 / 2"), vec![Number, Slash, Number]);
    }

    #[test]
    fn unexpected_characters_are_reported_and_skipped() {
        let (tokens, diagnostics) = scan("@");
        assert_eq!(tokens.len(), 1);
        assert_eq!(
            diagnostics,
            vec![Diagnostic { line: 1, message: "Unexpected character '@'.".to_owned() }]
        );

        let (tokens, diagnostics) = scan("a\n# $ b");
        let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(kinds, vec![Identifier, Identifier, EndOfInput]);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|diagnostic| diagnostic.line == 2));
    }

    #[test]
    fn every_error_in_one_pass() {
        let (tokens, diagnostics) = scan("@ 1\n# 2\n\"open");
        let numbers = tokens.iter().filter(|token| token.kind == Number).count();
        assert_eq!(numbers, 2);
        assert_eq!(
            diagnostics.iter().map(|diagnostic| diagnostic.line).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(super::tokenize("@ 1\n# 2").is_err());
    }

    #[test]
    fn non_ascii_is_one_unexpected_character() {
        let (tokens, diagnostics) = scan("é1");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unexpected character 'é'.");
        assert_eq!(tokens[0].lexeme, "1");
    }

    #[test]
    fn lexemes_are_source_text_and_lines_never_decrease() {
        let source = "var greeting = \"hi\nthere\";\nif (a >= 1.5) { print greeting; } // done\n";
        let (tokens, diagnostics) = scan(source);
        assert!(diagnostics.is_empty());

        let (eof, rest) = tokens.split_last().expect("at least the end-of-input");
        assert!(eof.is_end_of_input());
        assert_eq!(eof.line, 4);
        for token in rest {
            assert!(!token.lexeme.is_empty());
            assert!(source.contains(&token.lexeme));
        }
        assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line));
    }
}
