//! Identifier, keyword and accessor lexing.
//!
//! This module handles identifiers and classifies them as keywords,
//! functions, accessors or plain variables.

use goval_util::{DiagnosticBuilder, DiagnosticCode, Span};

use crate::token::{LiteralKind, Separator, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

/// Maps a reserved word to its token kind.
///
/// Only `in` and `IN` are accepted as the membership keyword; other spellings
/// such as `In` are plain identifiers.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "true" | "false" => Some(TokenKind::Literal(LiteralKind::Boolean)),
        "in" | "IN" => Some(TokenKind::Separator(Separator::In)),
        _ => None,
    }
}

/// Returns true if an accessor segment names an exported field.
///
/// A segment is exported when its first character equals its own upper-case
/// form. Digits and `_` therefore count as exported.
fn is_exported(segment: &str) -> bool {
    segment
        .chars()
        .next()
        .map_or(true, |first| first.to_uppercase().eq(std::iter::once(first)))
}

impl<'src, 'fns, 'sink> Lexer<'src, 'fns, 'sink> {
    /// Lexes an identifier, keyword, function name or accessor.
    ///
    /// The cursor must be on a letter. The identifier then extends over
    /// letters, digits, `_` and `.`. Classification is, in order: boolean
    /// literal, `in` separator, recognized function, accessor (contains a
    /// `.`), variable.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance_while(is_ident_continue);
        let text = self.cursor.slice_from(self.token_start);

        if let Some(keyword) = keyword_from_ident(text) {
            return keyword;
        }
        if self.is_function(text) {
            return TokenKind::Function;
        }
        if text.contains('.') {
            self.check_accessor(text);
            return TokenKind::Accessor;
        }
        TokenKind::Variable
    }

    /// Validates the segments of an accessor such as `foo.Bar.Baz`.
    ///
    /// Reports a trailing `.` over the whole token, and every segment after
    /// the first that is not exported over that segment. Empty segments from
    /// consecutive dots are skipped.
    fn check_accessor(&mut self, text: &'src str) {
        if text.ends_with('.') {
            self.report(
                DiagnosticBuilder::error(format!("hanging accessor on token `{}`", text))
                    .code(DiagnosticCode::E_LEXER_HANGING_ACCESSOR)
                    .span(self.token_span())
                    .help("remove the trailing `.` or name a field after it"),
            );
        }

        let mut offset = self.token_start;
        for (index, segment) in text.split('.').enumerate() {
            if index > 0 && !is_exported(segment) {
                self.report(
                    DiagnosticBuilder::error(format!(
                        "unable to access unexported field '{}' in token '{}'",
                        segment, text
                    ))
                    .code(DiagnosticCode::E_LEXER_UNEXPORTED_FIELD)
                    .span(Span::new(offset, offset + segment.len()))
                    .help("exported fields start with an upper-case letter"),
                );
            }
            offset += segment.len() + 1;
        }
    }
}
