//! goval-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the goval expression tooling:
//!
//! - [`span`] - byte ranges into an expression and the [`SourceFile`]
//!   document model that maps them to lines and columns
//! - [`diagnostic`] - positioned, non-fatal diagnostics, the [`Emitter`] sink
//!   trait and the collecting [`Handler`]
//! - [`error`] - `thiserror` error types for the helpers above
//!
//! # Example
//!
//! ```
//! use goval_util::{Diagnostic, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("<expr>", "foo.");
//! let handler = Handler::new();
//! handler.emit_diagnostic(Diagnostic::error("hanging accessor on token `foo.`", Span::new(0, 4)));
//!
//! for diag in handler.diagnostics() {
//!     eprintln!("{}", diag.render(&file));
//! }
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Emitter, Handler, Level, SourceSnippet,
};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
