//! Character-level scanning over a script buffer.
//!
//! [`Cursor`] is the lowest layer of the parser. It never fails: reading past the end
//! yields `None` and advancing past the end does nothing.

/// A position in a script buffer, with line and column tracking for diagnostics.
///
/// # Examples
///
/// ```rust
/// use pdx_script::Cursor;
///
/// let mut cursor = Cursor::new("  # note\n  key");
/// cursor.skip_whitespace_and_comments();
/// assert_eq!(cursor.current(), Some('k'));
/// assert_eq!(cursor.line(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The character at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// The character `offset` characters past the current one.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.input[self.position..].chars().nth(offset)
    }

    /// Moves forward one character. No-op at end of input.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes whitespace and `#` line comments until something else, or the end, is reached.
    ///
    /// A comment runs up to but not including the next line feed.
    pub fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.current() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => self.advance(),
                '#' => {
                    while let Some(c) = self.current() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Byte offset of the current position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// The input between byte offset `start` and the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }
}
