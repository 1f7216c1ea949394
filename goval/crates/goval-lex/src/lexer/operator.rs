//! Operator and punctuation lexing.
//!
//! This module handles lexing of operators and delimiters. Two-character
//! operators are matched by maximal munch: the second character is only
//! consumed on an exact match.

use crate::token::{Delimiter, Operator, TokenKind};
use crate::Lexer;

impl<'src, 'fns, 'sink> Lexer<'src, 'fns, 'sink> {
    /// Lexes an operator or delimiter at the cursor.
    ///
    /// Falls back to [`TokenKind::Unknown`] over exactly one character.
    pub fn lex_operator(&mut self) -> TokenKind {
        let c = self.cursor.next_char();
        match c {
            '(' => TokenKind::Delim(Delimiter::LParen),
            ')' => TokenKind::Delim(Delimiter::RParen),
            ']' => TokenKind::Delim(Delimiter::RBracket),
            '{' => TokenKind::Delim(Delimiter::LBrace),
            '}' => TokenKind::Delim(Delimiter::RBrace),
            ';' => TokenKind::Delim(Delimiter::Semicolon),
            '+' => self.lex_doubled('+', Operator::PlusPlus, Operator::Plus),
            '-' => self.lex_doubled('-', Operator::MinusMinus, Operator::Minus),
            '*' => self.lex_doubled('*', Operator::Pow, Operator::Star),
            '/' => self.lex_doubled('*', Operator::Pow, Operator::Slash),
            '&' => self.lex_doubled('&', Operator::AndAnd, Operator::Amp),
            '|' => self.lex_doubled('|', Operator::OrOr, Operator::Pipe),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '?' => self.lex_doubled('?', Operator::QuestionQuestion, Operator::Question),
            '%' => TokenKind::Op(Operator::Percent),
            '^' => TokenKind::Op(Operator::Caret),
            '~' => TokenKind::Op(Operator::Tilde),
            ':' => TokenKind::Op(Operator::Colon),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            _ => TokenKind::Unknown,
        }
    }

    /// Lexes `long` if the next character is `second`, else `short`.
    ///
    /// Handles: `++`, `--`, `**`, `/*`, `&&`, `||`, `??`
    fn lex_doubled(&mut self, second: char, long: Operator, short: Operator) -> TokenKind {
        if self.cursor.advance_if_char(second) {
            TokenKind::Op(long)
        } else {
            TokenKind::Op(short)
        }
    }

    /// Lexes less, less-equals, or left shift.
    ///
    /// Handles: `<`, `<=`, `<<`
    fn lex_less(&mut self) -> TokenKind {
        if self.cursor.advance_if_char('=') {
            TokenKind::Op(Operator::LtEq)
        } else if self.cursor.advance_if_char('<') {
            TokenKind::Op(Operator::Shl)
        } else {
            TokenKind::Op(Operator::Lt)
        }
    }

    /// Lexes greater, greater-equals, or right shift.
    ///
    /// Handles: `>`, `>=`, `>>`
    fn lex_greater(&mut self) -> TokenKind {
        if self.cursor.advance_if_char('=') {
            TokenKind::Op(Operator::GtEq)
        } else if self.cursor.advance_if_char('>') {
            TokenKind::Op(Operator::Shr)
        } else {
            TokenKind::Op(Operator::Gt)
        }
    }

    /// Lexes assignment, equality, or regex match.
    ///
    /// Handles: `=`, `==`, `=~`
    fn lex_equals(&mut self) -> TokenKind {
        if self.cursor.advance_if_char('=') {
            TokenKind::Op(Operator::EqEq)
        } else if self.cursor.advance_if_char('~') {
            TokenKind::Op(Operator::RegexMatch)
        } else {
            TokenKind::Op(Operator::Assign)
        }
    }

    /// Lexes bang, not-equals, or regex non-match.
    ///
    /// Handles: `!`, `!=`, `!~`
    fn lex_bang(&mut self) -> TokenKind {
        if self.cursor.advance_if_char('=') {
            TokenKind::Op(Operator::NotEq)
        } else if self.cursor.advance_if_char('~') {
            TokenKind::Op(Operator::RegexNotMatch)
        } else {
            TokenKind::Op(Operator::Bang)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_op(source: &str) -> (TokenKind, usize) {
        let mut lexer = Lexer::new(source);
        let kind = lexer.lex_operator();
        (kind, lexer.position())
    }

    fn ops(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_char_operators() {
        let cases = [
            ("+", Operator::Plus),
            ("-", Operator::Minus),
            ("*", Operator::Star),
            ("/", Operator::Slash),
            ("%", Operator::Percent),
            ("&", Operator::Amp),
            ("|", Operator::Pipe),
            ("^", Operator::Caret),
            ("~", Operator::Tilde),
            ("<", Operator::Lt),
            (">", Operator::Gt),
            ("=", Operator::Assign),
            ("!", Operator::Bang),
            ("?", Operator::Question),
            (":", Operator::Colon),
        ];
        for (source, op) in cases {
            assert_eq!(lex_op(source), (TokenKind::Op(op), 1), "{}", source);
        }
    }

    #[test]
    fn test_two_char_operators() {
        let cases = [
            ("++", Operator::PlusPlus),
            ("--", Operator::MinusMinus),
            ("**", Operator::Pow),
            ("/*", Operator::Pow),
            ("&&", Operator::AndAnd),
            ("||", Operator::OrOr),
            ("<=", Operator::LtEq),
            ("<<", Operator::Shl),
            (">=", Operator::GtEq),
            (">>", Operator::Shr),
            ("==", Operator::EqEq),
            ("=~", Operator::RegexMatch),
            ("!=", Operator::NotEq),
            ("!~", Operator::RegexNotMatch),
            ("??", Operator::QuestionQuestion),
        ];
        for (source, op) in cases {
            assert_eq!(lex_op(source), (TokenKind::Op(op), 2), "{}", source);
        }
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            ops("(){};]"),
            vec![
                TokenKind::Delim(Delimiter::LParen),
                TokenKind::Delim(Delimiter::RParen),
                TokenKind::Delim(Delimiter::LBrace),
                TokenKind::Delim(Delimiter::RBrace),
                TokenKind::Delim(Delimiter::Semicolon),
                TokenKind::Delim(Delimiter::RBracket),
            ]
        );
    }

    #[test]
    fn test_maximal_munch_takes_two_at_most() {
        assert_eq!(
            ops(">>="),
            vec![TokenKind::Op(Operator::Shr), TokenKind::Op(Operator::Assign)]
        );
        assert_eq!(
            ops("+++"),
            vec![TokenKind::Op(Operator::PlusPlus), TokenKind::Op(Operator::Plus)]
        );
    }

    #[test]
    fn test_slash_star_is_not_a_comment() {
        assert_eq!(
            ops("a /* b"),
            vec![TokenKind::Variable, TokenKind::Op(Operator::Pow), TokenKind::Variable]
        );
    }

    #[test]
    fn test_unknown_consumes_one_char() {
        assert_eq!(lex_op("#"), (TokenKind::Unknown, 1));
        assert_eq!(lex_op("@@"), (TokenKind::Unknown, 1));
        assert_eq!(lex_op("$"), (TokenKind::Unknown, 1));
    }

    #[test]
    fn test_unknown_multibyte() {
        assert_eq!(lex_op("\u{FFFD}"), (TokenKind::Unknown, 3));
    }
}
