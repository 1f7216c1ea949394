//! Diagnostic codes for categorizing lexical errors.
//!
//! # Examples
//!
//! ```
//! use goval_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_HEX;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to
/// four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix, "E" for lexical errors
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: `0x` prefix without hexadecimal digits
    pub const E_LEXER_INVALID_HEX: Self = Self::new("E", 1001);
    /// E1002: `.` without decimal digits
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1002);
    /// E1003: `[` parameter without closing `]`
    pub const E_LEXER_UNCLOSED_BRACKET: Self = Self::new("E", 1003);
    /// E1004: quoted string without closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1004);
    /// E1005: accessor ending in `.`
    pub const E_LEXER_HANGING_ACCESSOR: Self = Self::new("E", 1005);
    /// E1006: accessor segment that is not exported
    pub const E_LEXER_UNEXPORTED_FIELD: Self = Self::new("E", 1006);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
