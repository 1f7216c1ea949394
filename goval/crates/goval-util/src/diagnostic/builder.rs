//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Emitter, Level};
use crate::span::Span;

/// A source line with a highlighted column range
///
/// # Examples
///
/// ```
/// use goval_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("foo.bar > 1", 1, 5, 8);
/// assert_eq!(
///     snippet.format(),
///     "  1 | foo.bar > 1\n    |     ^^^",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret line underlining the
    /// highlighted range. Empty ranges get a single caret.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use goval_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use goval_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unclosed string literal")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
///     .span(Span::new(0, 4))
///     .help("add a closing quote")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.span, Span::new(0, 4));
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: Level::Error,
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build and emit the diagnostic to the given sink
    ///
    /// # Examples
    ///
    /// ```
    /// use goval_util::diagnostic::{DiagnosticBuilder, Handler};
    /// use goval_util::span::Span;
    ///
    /// let mut handler = Handler::new();
    /// DiagnosticBuilder::error("something went wrong")
    ///     .span(Span::DUMMY)
    ///     .emit(&mut handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, emitter: &mut dyn Emitter) {
        emitter.emit(self.build());
    }
}
