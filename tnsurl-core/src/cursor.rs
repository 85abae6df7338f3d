//! A forgiving cursor for picking fields out of flat connect strings.
//!
//! The cursor keeps a `[begin, end)` window over the input. Every operation
//! narrows or moves the window when its delimiter is found and leaves it
//! untouched otherwise, so a chain of calls over malformed input yields short
//! or empty strings instead of failing.
//!
//! ```rust
//! use tnsurl_core::Cursor;
//!
//! let mut cursor = Cursor::new("localhost:8629:tibero");
//! assert_eq!(cursor.before(&[':']).value(), "localhost");
//! assert_eq!(cursor.next().after(':').before(&[':', '/']).value(), "8629");
//! assert_eq!(cursor.next().after_last(&[':', '/']).value(), "tibero");
//! ```

/// Cursor over a borrowed string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    begin: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor whose window covers the whole input.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            begin: 0,
            end: text.len(),
        }
    }

    fn window(&self) -> &'a str {
        &self.text[self.begin..self.end]
    }

    /// Move the window start past the first `delimiter`.
    pub fn after(&mut self, delimiter: char) -> &mut Self {
        if let Some(index) = self.window().find(delimiter) {
            self.begin += index + delimiter.len_utf8();
        }
        self
    }

    /// Move the window start past the first occurrence of `literal`.
    pub fn after_literal(&mut self, literal: &str) -> &mut Self {
        if let Some(index) = self.window().find(literal) {
            self.begin += index + literal.len();
        }
        self
    }

    /// End the window at the first of any `delimiters`.
    pub fn before(&mut self, delimiters: &[char]) -> &mut Self {
        if let Some(index) = self.window().find(delimiters) {
            self.end = self.begin + index;
        }
        self
    }

    /// Move the window start past the last of any `delimiters`.
    pub fn after_last(&mut self, delimiters: &[char]) -> &mut Self {
        let window = self.window();
        if let Some(index) = window.rfind(delimiters) {
            let width = window[index..].chars().next().map_or(1, char::len_utf8);
            self.begin += index + width;
        }
        self
    }

    /// Move the window start past the last `delimiter` that precedes the
    /// first `stop`, or the end of the window when there is no `stop`.
    pub fn after_last_until(&mut self, delimiter: char, stop: char) -> &mut Self {
        let window = self.window();
        let head = window.find(stop).map_or(window, |index| &window[..index]);
        if let Some(index) = head.rfind(delimiter) {
            self.begin += index + delimiter.len_utf8();
        }
        self
    }

    /// Continue from the end of the current window to the end of the input.
    pub fn next(&mut self) -> &mut Self {
        self.begin = self.end;
        self.end = self.text.len();
        self
    }

    /// Text of the current window.
    pub fn value(&self) -> &'a str {
        self.window()
    }

    /// Byte offset of the window start.
    pub fn position(&self) -> usize {
        self.begin
    }
}
