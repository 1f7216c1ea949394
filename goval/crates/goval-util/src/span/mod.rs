//! Span module - Source location tracking.
//!
//! This module provides byte-offset ranges into an expression source and the
//! [`SourceFile`] type used to turn those offsets into line/column positions
//! for display.
//!
//! # Examples
//!
//! ```
//! use goval_util::span::{SourceFile, Span};
//!
//! let span = Span::new(4, 7);
//! let file = SourceFile::new("<expr>", "a + foo.bar");
//! assert_eq!(file.offset_to_line_col(span.start), (1, 5));
//! ```

mod source_file;

pub use source_file::SourceFile;

use serde::Serialize;

/// A half-open byte range `[start, end)` into a source string.
///
/// Spans carry no line/column information; the document model
/// ([`SourceFile`]) resolves positions when a diagnostic is rendered.
///
/// # Examples
///
/// ```
/// use goval_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(15));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span from two offsets.
    ///
    /// `start` must not be greater than `end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self { start, end }
    }

    /// Create an empty span at a single offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use goval_util::span::Span;
    ///
    /// let point = Span::point(5);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Check if this span contains another span
    #[inline]
    pub fn contains_span(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// # Examples
    ///
    /// ```
    /// use goval_util::span::Span;
    ///
    /// let merged = Span::new(10, 20).merge(Span::new(25, 35));
    /// assert_eq!(merged, Span::new(10, 35));
    /// ```
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the span as a `Range<usize>` suitable for slicing.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
