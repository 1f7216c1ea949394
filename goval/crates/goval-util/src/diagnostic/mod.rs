//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! lexical diagnostics. Producers report through the [`Emitter`] trait, so a
//! scan session can run with a collecting [`Handler`], an ad-hoc closure, or
//! no sink at all.
//!
//! # Examples
//!
//! ```
//! use goval_util::diagnostic::{Diagnostic, Emitter, Handler};
//! use goval_util::span::Span;
//!
//! let mut handler = Handler::new();
//! handler.emit(Diagnostic::error("unclosed string literal", Span::new(0, 3)));
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;

use serde::Serialize;

use crate::span::{SourceFile, Span};

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use goval_util::diagnostic::{Diagnostic, Level};
/// use goval_util::span::Span;
///
/// let diag = Diagnostic::error("hexadecimal digit expected", Span::new(0, 2));
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source range
    pub span: Span,
    /// Optional diagnostic code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with no code or helps.
    ///
    /// Use [`DiagnosticBuilder`] to attach those.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        DiagnosticBuilder::error(message).span(span).build()
    }

    /// Render the diagnostic against its source.
    ///
    /// Produces a header (`error[E1004]: message`), a `--> name:line:col`
    /// location, a caret snippet for the first line of the span and any
    /// helps.
    ///
    /// # Examples
    ///
    /// ```
    /// use goval_util::diagnostic::Diagnostic;
    /// use goval_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("<expr>", "a == 'b");
    /// let diag = Diagnostic::error("unclosed string literal", Span::new(5, 7));
    /// let text = diag.render(&file);
    /// assert!(text.starts_with("error: unclosed string literal\n  --> <expr>:1:6\n"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let (line, column) = file.offset_to_line_col(self.span.start);
        let header = match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        };

        let mut out = format!("{}\n  --> {}:{}:{}\n", header, file.name(), line, column);

        if let Some(text) = file.line_at(line) {
            let (end_line, end_column) = file.offset_to_line_col(self.span.end);
            let end_column = if end_line == line {
                end_column
            } else {
                text.chars().count() + 1
            };
            out.push_str(&SourceSnippet::new(text, line, column, end_column).format());
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("  = {}: {}\n", Level::Help, help));
        }

        out
    }
}

/// A sink for diagnostics.
///
/// Implemented by [`Handler`] and by any `FnMut(Diagnostic)` closure.
pub trait Emitter {
    /// Accept one diagnostic
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<F> Emitter for F
where
    F: FnMut(Diagnostic),
{
    fn emit(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying their counts.
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for Handler {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emit_diagnostic(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_error() {
        let diag = Diagnostic::error("test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert_eq!(diag.code, None);
        assert!(diag.helps.is_empty());
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_keeps_emission_order() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("first", Span::new(4, 5)));
        handler.emit_diagnostic(Diagnostic::error("second", Span::new(0, 1)));

        let messages: Vec<_> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
        assert_eq!(handler.error_count(), 2);
    }

    #[test]
    fn test_handler_take() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("a", Span::DUMMY));
        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 1);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_builder_emits_into_handler() {
        let mut handler = Handler::new();
        DiagnosticBuilder::error("hexadecimal digit expected")
            .span(Span::new(0, 2))
            .code(DiagnosticCode::E_LEXER_INVALID_HEX)
            .emit(&mut handler);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].span, Span::new(0, 2));
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_INVALID_HEX));
    }

    #[test]
    fn test_emitter_closure() {
        let mut messages = Vec::new();
        {
            let mut sink = |d: Diagnostic| messages.push(d.message);
            let emitter: &mut dyn Emitter = &mut sink;
            emitter.emit(Diagnostic::error("one", Span::DUMMY));
            emitter.emit(Diagnostic::error("two", Span::DUMMY));
        }
        assert_eq!(messages, vec!["one", "two"]);
    }

    #[test]
    fn test_render_with_code_and_help() {
        let file = SourceFile::new("rule.expr", "x > 1 &&\n  foo.bar");
        let diag = DiagnosticBuilder::error(
            "unable to access unexported field 'bar' in token 'foo.bar'",
        )
        .span(Span::new(15, 18))
        .code(DiagnosticCode::E_LEXER_UNEXPORTED_FIELD)
        .help("exported fields start with an upper-case letter")
        .build();

        let text = diag.render(&file);
        assert_eq!(
            text,
            "error[E1006]: unable to access unexported field 'bar' in token 'foo.bar'\n\
             \x20 --> rule.expr:2:7\n\
             \x20 2 |   foo.bar\n\
             \x20   |       ^^^\n\
             \x20 = help: exported fields start with an upper-case letter\n"
        );
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let diag = Diagnostic::error("numeric literal expected", Span::new(0, 1));
        let json = serde_json::to_string(&diag).unwrap();
        assert_eq!(
            json,
            r#"{"level":"error","message":"numeric literal expected","span":{"start":0,"end":1}}"#
        );
    }
}
