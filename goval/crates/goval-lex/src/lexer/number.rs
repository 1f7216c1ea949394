//! Number literal lexing.
//!
//! This module handles lexing of decimal and hexadecimal literals.

use goval_util::DiagnosticCode;

use crate::token::{LiteralKind, TokenKind};
use crate::unicode::{is_digit, is_hex_digit};
use crate::Lexer;

impl<'src, 'fns, 'sink> Lexer<'src, 'fns, 'sink> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0x1F`, `0xff` (the `x` must be lower case)
    /// - Decimal: `42`, `007`
    /// - Fraction: `.5`
    ///
    /// A number never contains both an integer part and a fraction, so `1.5`
    /// lexes as `1` followed by `.5`. Malformed numbers are reported but
    /// still produce a numeric token over what was consumed.
    pub fn lex_number(&mut self) -> TokenKind {
        if self.cursor.current_char() == '0' && self.cursor.peek_char(1) == 'x' {
            self.cursor.advance_n(2);
            if self.cursor.advance_while(is_hex_digit) == 0 {
                self.report_token_error(
                    DiagnosticCode::E_LEXER_INVALID_HEX,
                    "hexadecimal digit expected",
                );
            }
        } else if self.cursor.advance_if_char('.') {
            if self.cursor.advance_while(is_digit) == 0 {
                self.report_token_error(
                    DiagnosticCode::E_LEXER_INVALID_NUMBER,
                    "numeric literal expected",
                );
            }
        } else {
            self.cursor.advance_while(is_digit);
        }

        TokenKind::Literal(LiteralKind::Numeric)
    }
}
