//! String literal lexing.
//!
//! This module handles quoted strings and bracket-escaped parameter names.
//! Neither form has escape sequences.

use goval_util::DiagnosticCode;

use crate::token::{LiteralKind, TokenKind};
use crate::Lexer;

impl<'src, 'fns, 'sink> Lexer<'src, 'fns, 'sink> {
    /// Lexes a quoted string literal.
    ///
    /// The opening quote (`"` or `'`) is matched only by the same quote. The
    /// token includes both quotes. An unterminated string runs to the end of
    /// input.
    pub fn lex_string(&mut self) -> TokenKind {
        let quote = self.cursor.next_char();
        self.cursor.advance_while(|c| c != quote);

        if !self.cursor.advance_if_char(quote) {
            self.report_token_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                "unclosed string literal",
            );
        }

        TokenKind::Literal(LiteralKind::String)
    }

    /// Lexes a bracket-escaped parameter name such as `[response time]`.
    ///
    /// The token includes both brackets and lexes as a string literal.
    pub fn lex_bracket_parameter(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.advance_while(|c| c != ']');

        if !self.cursor.advance_if_char(']') {
            self.report_token_error(
                DiagnosticCode::E_LEXER_UNCLOSED_BRACKET,
                "unclosed parameter bracket",
            );
        }

        TokenKind::Literal(LiteralKind::String)
    }
}
