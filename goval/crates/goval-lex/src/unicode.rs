//! Character classes for the expression lexer.
//!
//! The letter rule is deliberately simple: ASCII letters plus every
//! character at or above U+0080, minus the byte order mark and the
//! replacement character. Scripts with their own punctuation therefore lex
//! as identifier text.

/// Zero-width no-break space, also used as a byte order mark.
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Substitute emitted for undecodable input.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Checks if a character is insignificant whitespace.
///
/// Only tab, line feed, vertical tab, form feed, carriage return and space
/// are skipped between tokens. Other Unicode spaces fall into the letter
/// range.
///
/// # Example
///
/// ```
/// use goval_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{0B}'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ')
}

/// Checks if a character is a letter, i.e. may start an identifier.
///
/// # Example
///
/// ```
/// use goval_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('α'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('\u{FEFF}'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (c >= '\u{80}' && c != BYTE_ORDER_MARK && c != REPLACEMENT_CHARACTER)
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a hexadecimal digit in either case.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a character may continue an identifier.
///
/// Dots are identifier characters so that `foo.Bar` lexes as one accessor
/// token.
///
/// # Example
///
/// ```
/// use goval_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('.'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('('));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_' || c == '.'
}
