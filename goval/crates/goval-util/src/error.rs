//! Core error types for goval-util crate
//!
//! Lexical problems are never errors here; they travel as
//! [`Diagnostic`](crate::Diagnostic)s. These types cover misuse of the
//! source/position helpers.

use thiserror::Error;

/// Error type for source text operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Span start offset
        start: usize,
        /// Span end offset
        end: usize,
    },

    /// Span out of bounds for the source
    #[error("Span out of bounds: source has {len} bytes, span is {start}..{end}")]
    SpanOutOfBounds {
        /// Source length in bytes
        len: usize,
        /// Span start offset
        start: usize,
        /// Span end offset
        end: usize,
    },

    /// Span splits a multi-byte character
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Span start offset
        start: usize,
        /// Span end offset
        end: usize,
    },
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
