//! Source files and offset-to-position conversion.

use std::sync::Arc;

use super::Span;
use crate::error::{SourceError, SourceResult};

/// An expression source with its name and precomputed line starts.
///
/// # Examples
///
/// ```
/// use goval_util::span::SourceFile;
///
/// let file = SourceFile::new("rule.expr", "a > 1 &&\nb < 2");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.offset_to_line_col(9), (2, 1));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates.
    ///
    /// Columns count characters, not bytes, so multi-byte identifiers
    /// report the column a reader sees.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let column = self
            .content
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());
        (line + 1, column + 1)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract the text covered by a span with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use goval_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("<expr>", "max(a, b)");
    /// assert_eq!(file.extract(Span::new(0, 3)).unwrap(), "max");
    /// assert!(file.extract(Span::new(5, 50)).is_err());
    /// ```
    pub fn extract(&self, span: Span) -> SourceResult<&str> {
        if span.start > span.end {
            return Err(SourceError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                len: self.content.len(),
                start: span.start,
                end: span.end,
            });
        }
        self.content
            .get(span.range())
            .ok_or(SourceError::NotCharBoundary {
                start: span.start,
                end: span.end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
