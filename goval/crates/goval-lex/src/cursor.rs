//! Character cursor for traversing expression source.
//!
//! This module provides the `Cursor` struct which owns the scan position
//! over an immutable source string. All movement is caller-directed; the
//! cursor knows nothing about tokens.
//!
//! Positions are byte offsets into the UTF-8 source and always sit on a
//! character boundary. Counts and look-ahead distances are in characters.
//! Running off either end never panics: reads return `'\0'` instead.

/// Sentinel returned by reads past either end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use goval_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a >= 1");
///
/// assert_eq!(cursor.next_char(), 'a');
/// assert_eq!(cursor.advance_while(|c| c == ' '), 1);
/// assert!(cursor.advance_if_chars(&['>', '=']));
/// assert_eq!(cursor.slice_from(2), ">=");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the source length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.advance();
    /// assert!(cursor.is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the text in `[from, to)`.
    ///
    /// Both offsets must lie on character boundaries with
    /// `from <= to <= len()`. Requesting anything else is a bug in the
    /// caller and panics.
    pub fn substring(&self, from: usize, to: usize) -> &'a str {
        debug_assert!(from <= to && to <= self.source.len());
        &self.source[from..to]
    }

    /// Returns the text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("foo.Bar");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(0), "foo");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.substring(start, self.position)
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Moves the cursor to an absolute byte position.
    ///
    /// Positions past the end are pinned to the end so the cursor invariant
    /// `position <= len()` always holds.
    pub fn seek(&mut self, position: usize) {
        let position = position.min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }

    /// Moves the cursor back by `count` characters, stopping at the start.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("αβγ");
    /// cursor.advance_n(3);
    /// cursor.rewind(2);
    /// assert_eq!(cursor.current_char(), 'β');
    /// ```
    pub fn rewind(&mut self, count: usize) {
        let consumed = &self.source[..self.position];
        self.position = consumed
            .char_indices()
            .rev()
            .take(count)
            .last()
            .map_or(self.position, |(index, _)| index);
    }

    /// Advances the cursor to the next character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances the cursor by `count` characters, stopping at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns the current character and advances past it.
    ///
    /// Returns [`EOF_CHAR`] without moving when at the end. A source may
    /// legitimately contain `'\0'`, so callers that care must check
    /// [`Cursor::is_at_end`].
    pub fn next_char(&mut self) -> char {
        match self.remaining().chars().next() {
            Some(c) => {
                self.position += c.len_utf8();
                c
            },
            None => EOF_CHAR,
        }
    }

    /// Returns the character at the cursor without consuming it.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead without consuming.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("0x");
    /// assert_eq!(cursor.peek_char(0), '0');
    /// assert_eq!(cursor.peek_char(1), 'x');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        if offset == 0 {
            // Fast path for ASCII (most common case)
            return match rest.as_bytes().first() {
                Some(&b) if b.is_ascii() => b as char,
                Some(_) => rest.chars().next().unwrap_or(EOF_CHAR),
                None => EOF_CHAR,
            };
        }
        rest.chars().nth(offset).unwrap_or(EOF_CHAR)
    }

    /// Returns an already-consumed character.
    ///
    /// `offset` 0 is the character just consumed, 1 the one before it, and
    /// so on. Returns [`EOF_CHAR`] before the start of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use goval_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab");
    /// assert_eq!(cursor.look_behind(0), '\0');
    /// cursor.advance_n(2);
    /// assert_eq!(cursor.look_behind(0), 'b');
    /// assert_eq!(cursor.look_behind(1), 'a');
    /// ```
    pub fn look_behind(&self, offset: usize) -> char {
        self.source[..self.position]
            .chars()
            .rev()
            .nth(offset)
            .unwrap_or(EOF_CHAR)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// Returns whether the character was consumed. Never matches at the end
    /// of the source, even for `'\0'`.
    pub fn advance_if_char(&mut self, expected: char) -> bool {
        match self.remaining().chars().next() {
            Some(c) if c == expected => {
                self.position += c.len_utf8();
                true
            },
            _ => false,
        }
    }

    /// Consumes the whole sequence `expected` if it is next in the source.
    ///
    /// Either every character is consumed or the position is unchanged.
    pub fn advance_if_chars(&mut self, expected: &[char]) -> bool {
        let start = self.position;
        for &c in expected {
            if !self.advance_if_char(c) {
                self.position = start;
                return false;
            }
        }
        true
    }

    /// Consumes characters while `predicate` holds.
    ///
    /// Returns the number of characters consumed.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        for c in self.remaining().chars() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
            count += 1;
        }
        count
    }
}
