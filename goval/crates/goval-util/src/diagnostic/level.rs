//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use goval_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert_eq!(format!("{}", Level::Help), "help");
//! ```

use std::fmt;

use serde::Serialize;

/// Diagnostic severity level
///
/// Every lexical problem the scanner reports is an [`Level::Error`].
/// [`Level::Help`] labels the fix-it lines attached to a rendered error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Malformed input
    Error,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, Level::Error)
    }

    /// Lowercase name used in rendered output
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
