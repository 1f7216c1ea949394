//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, token dispatch and
//! diagnostic reporting.

use goval_util::{DiagnosticBuilder, DiagnosticCode, Emitter, Span};
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::cursor::Cursor;
use crate::token::{Separator, Token, TokenKind};
use crate::unicode::{is_letter, is_whitespace};

/// Lexer for govaluate-style expressions.
///
/// The lexer transforms expression text into a stream of tokens. It skips
/// whitespace and reports malformed input to an optional [`Emitter`]
/// without ever stopping: every call to [`Lexer::next_token`] returns a token.
///
/// # Example
///
/// ```
/// use goval_lex::{Lexer, TokenKind};
/// use goval_util::Handler;
///
/// let mut handler = Handler::new();
/// let kinds: Vec<TokenKind> = Lexer::new("foo.bar > 1")
///     .with_emitter(&mut handler)
///     .map(|token| token.kind)
///     .collect();
///
/// assert_eq!(kinds.len(), 3);
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Lexer<'src, 'fns, 'sink> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Names that lex as [`TokenKind::Function`].
    functions: Option<&'fns FxHashSet<String>>,

    /// Diagnostic sink. Diagnostics are dropped when absent.
    emitter: Option<&'sink mut dyn Emitter>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,
}

impl<'src> Lexer<'src, 'static, 'static> {
    /// Creates a new lexer for the given source, with no function names and
    /// no diagnostic sink.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            functions: None,
            emitter: None,
            token_start: 0,
        }
    }
}

impl<'src, 'fns, 'sink> Lexer<'src, 'fns, 'sink> {
    /// Registers the set of recognized function names.
    ///
    /// The set is only borrowed for lookups; tokens borrow the source alone.
    pub fn with_functions<'f>(self, functions: &'f FxHashSet<String>) -> Lexer<'src, 'f, 'sink> {
        Lexer {
            cursor: self.cursor,
            functions: Some(functions),
            emitter: self.emitter,
            token_start: self.token_start,
        }
    }

    /// Attaches a diagnostic sink.
    pub fn with_emitter<'e>(self, emitter: &'e mut dyn Emitter) -> Lexer<'src, 'fns, 'e> {
        Lexer {
            cursor: self.cursor,
            functions: self.functions,
            emitter: Some(emitter),
            token_start: self.token_start,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the current character. Once the
    /// input is exhausted every call returns a zero-length
    /// [`TokenKind::Eof`] at the end offset.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.advance_while(is_whitespace);
        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return self.finish_token(TokenKind::Eof);
        }

        let kind = match self.cursor.current_char() {
            '0'..='9' | '.' => self.lex_number(),
            ',' => {
                self.cursor.advance();
                TokenKind::Separator(Separator::Comma)
            },
            '[' => self.lex_bracket_parameter(),
            c if is_letter(c) => self.lex_identifier(),
            '"' | '\'' => self.lex_string(),
            _ => self.lex_operator(),
        };

        let token = self.finish_token(kind);
        trace!(kind = %token.kind, offset = token.offset, len = token.len, "token");
        token
    }

    /// Builds the token spanning `token_start` to the cursor.
    fn finish_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_start)
    }

    /// Reports a lexical error.
    pub(crate) fn report(&mut self, diagnostic: DiagnosticBuilder) {
        let diagnostic = diagnostic.build();
        trace!(span = %diagnostic.span, code = ?diagnostic.code, message = %diagnostic.message, "lexical error");
        if let Some(emitter) = self.emitter.as_deref_mut() {
            emitter.emit(diagnostic);
        }
    }

    /// Reports a lexical error over the current token.
    pub(crate) fn report_token_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        self.report(DiagnosticBuilder::error(message).code(code).span(self.token_span()));
    }

    /// Source range of the token scanned so far.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position())
    }

    /// Returns true if `name` is a recognized function.
    pub(crate) fn is_function(&self, name: &str) -> bool {
        self.functions.is_some_and(|functions| functions.contains(name))
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the current token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Returns true if the lexer has consumed the whole source.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'src> Iterator for Lexer<'src, '_, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Delimiter, LiteralKind, Operator};
    use goval_util::{Diagnostic, Handler};

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_eof() {
        let mut lexer = Lexer::new("");
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!((token.offset, token.len, token.text), (0, 0, ""));
    }

    #[test]
    fn test_whitespace_only() {
        let mut lexer = Lexer::new(" \t\r\n\u{0B}\u{0C}");
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.offset, 6);
    }

    #[test]
    fn test_eof_is_repeated() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next_token().kind, TokenKind::Variable);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert!(token.is_eof());
            assert_eq!(token.offset, 1);
        }
    }

    #[test]
    fn test_dispatch_precedence() {
        assert_eq!(
            kinds("1 , [p] x 'y' +"),
            vec![
                TokenKind::Literal(LiteralKind::Numeric),
                TokenKind::Separator(Separator::Comma),
                TokenKind::Literal(LiteralKind::String),
                TokenKind::Variable,
                TokenKind::Literal(LiteralKind::String),
                TokenKind::Op(Operator::Plus),
            ]
        );
    }

    #[test]
    fn test_function_call() {
        let functions: FxHashSet<String> = ["max".to_string()].into_iter().collect();
        let tokens: Vec<_> = Lexer::new("max(a, 1)").with_functions(&functions).collect();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Function,
                TokenKind::Delim(Delimiter::LParen),
                TokenKind::Variable,
                TokenKind::Separator(Separator::Comma),
                TokenKind::Literal(LiteralKind::Numeric),
                TokenKind::Delim(Delimiter::RParen),
            ]
        );
        assert_eq!(tokens[2].text, "a");
        assert_eq!(tokens[2].offset, 4);
    }

    #[test]
    fn test_without_functions_name_is_variable() {
        assert_eq!(kinds("max"), vec![TokenKind::Variable]);
    }

    #[test]
    fn test_unknown_fallback() {
        let mut lexer = Lexer::new("#");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.len, 1);
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_unknown_multibyte_reserved_char() {
        let mut lexer = Lexer::new("\u{FEFF}a");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.text, "\u{FEFF}");
        assert_eq!(token.text.chars().count(), 1);
        assert_eq!(token.len, 3);
        assert_eq!(lexer.next_token().text, "a");
    }

    #[test]
    fn test_diagnostics_dropped_without_emitter() {
        let tokens: Vec<_> = Lexer::new("'open").collect();
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_diagnostics_reach_closure() {
        let mut messages = Vec::new();
        {
            let mut sink = |d: Diagnostic| messages.push(d.message);
            let mut lexer = Lexer::new("0x .").with_emitter(&mut sink);
            while !lexer.next_token().is_eof() {}
        }
        assert_eq!(messages, vec!["hexadecimal digit expected", "numeric literal expected"]);
    }

    #[test]
    fn test_next_token_on_temporary_lexer() {
        let token = Lexer::new("  foo").next_token();
        assert_eq!((token.kind, token.offset), (TokenKind::Variable, 2));

        let mut handler = Handler::new();
        let token = Lexer::new("0x").with_emitter(&mut handler).next_token();
        assert_eq!(token.len, 2);
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_tokens_outlive_function_set() {
        let source = String::from("max(x)");
        let tokens: Vec<Token<'_>> = {
            let functions: FxHashSet<String> = ["max".to_string()].into_iter().collect();
            Lexer::new(&source).with_functions(&functions).collect()
        };
        assert_eq!(tokens[0].kind, TokenKind::Function);
        assert_eq!(tokens[0].text, "max");
    }

    #[test]
    fn test_tokens_outlive_handler_borrow() {
        let mut handler = Handler::new();
        let tokens: Vec<Token<'_>> = Lexer::new("a.b").with_emitter(&mut handler).collect();
        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::E_LEXER_UNEXPORTED_FIELD));
        assert_eq!(tokens[0].kind, TokenKind::Accessor);
    }
}
