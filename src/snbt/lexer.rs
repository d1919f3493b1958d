//! Character cursor over SNBT text.
//!
//! Positions are character indices, not byte offsets, so error positions
//! line up with what a user sees in an editor.

use crate::{Error, Result};

/// Returns `true` for characters allowed in an unquoted token.
#[inline]
pub fn is_simple_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-')
}

/// A cursor over an immutable character buffer.
///
/// # Examples
///
/// ```rust
/// use nbt_snbt::snbt::Lexer;
///
/// let mut lexer = Lexer::new("  'it\\'s' rest");
/// lexer.skip_whitespace();
/// assert_eq!(lexer.read_string().unwrap(), "it's");
/// lexer.skip_whitespace();
/// assert_eq!(lexer.read_string().unwrap(), "rest");
/// assert!(!lexer.can_read(1));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<char>,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            chars: source.chars().collect(),
            cursor: 0,
        }
    }

    /// Returns the full text being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the current character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor to `cursor`, which may equal the text length.
    pub fn set_cursor(&mut self, cursor: usize) -> Result<()> {
        if cursor > self.chars.len() {
            return Err(Error::InvalidArgument(format!(
                "cursor {} is past the end of input of length {}",
                cursor,
                self.chars.len()
            )));
        }
        self.cursor = cursor;
        Ok(())
    }

    /// Returns the unread part of the text.
    pub fn remaining(&self) -> String {
        self.chars[self.cursor..].iter().collect()
    }

    /// Returns `true` if at least `n` more characters can be read.
    #[inline]
    pub fn can_read(&self, n: usize) -> bool {
        self.chars.len() - self.cursor >= n
    }

    /// Returns the character `offset` places after the cursor.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.cursor + offset).copied()
    }

    /// Reads one character.
    pub fn read(&mut self) -> Result<char> {
        let c = self
            .peek(0)
            .ok_or_else(|| self.error("Unexpected end of input"))?;
        self.cursor += 1;
        Ok(c)
    }

    /// Advances past one character, if any.
    #[inline]
    pub fn skip(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    /// Reads `expected`, failing without advancing if the next character differs.
    pub fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek(0) != Some(expected) {
            return Err(self.error(&format!("Expected '{}'", expected)));
        }
        self.cursor += 1;
        Ok(())
    }

    pub fn skip_whitespace(&mut self) {
        self.read_while(char::is_whitespace);
    }

    /// Reads a quoted string, or else the longest run of unquoted-token
    /// characters.
    ///
    /// Inside quotes only `\\` and an escaped copy of the opening quote are
    /// recognised. The unquoted run may be empty, including at end of input.
    pub fn read_string(&mut self) -> Result<String> {
        match self.peek(0) {
            Some(quote @ ('"' | '\'')) => {
                self.cursor += 1;
                self.read_quoted(quote)
            }
            _ => Ok(self.read_while(is_simple_char)),
        }
    }

    fn read_quoted(&mut self, quote: char) -> Result<String> {
        let mut text = String::new();
        let mut escaped = false;
        while let Some(c) = self.peek(0) {
            if escaped {
                if c != quote && c != '\\' {
                    return Err(self.error(&format!("Expected '{}' or '\\'", quote)));
                }
                text.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                self.cursor += 1;
                return Ok(text);
            } else {
                text.push(c);
            }
            self.cursor += 1;
        }
        Err(self.error(&format!("Expected '{}'", quote)))
    }

    pub fn read_int(&mut self) -> Result<i32> {
        self.read_number("integer")
    }

    pub fn read_long(&mut self) -> Result<i64> {
        self.read_number("long")
    }

    pub fn read_float(&mut self) -> Result<f32> {
        self.read_number("float")
    }

    pub fn read_double(&mut self) -> Result<f64> {
        self.read_number("double")
    }

    /// Reads `true` or `false`, exact case.
    pub fn read_bool(&mut self) -> Result<bool> {
        let start = self.cursor;
        let text = self.read_string()?;
        match text.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            "" => Err(self.error_at(start, "Expected boolean")),
            other => Err(self.error_at(start, &format!("Invalid boolean '{}'", other))),
        }
    }

    fn read_number<T: std::str::FromStr>(&mut self, what: &str) -> Result<T> {
        let start = self.cursor;
        let text = self.read_while(is_number_char);
        if text.is_empty() {
            return Err(self.error_at(start, &format!("Expected {}", what)));
        }
        text.parse()
            .map_err(|_| self.error_at(start, &format!("Invalid {} '{}'", what, text)))
    }

    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.cursor;
        while self.peek(0).is_some_and(&predicate) {
            self.cursor += 1;
        }
        self.chars[start..self.cursor].iter().collect()
    }

    /// Creates a syntax error at the cursor.
    pub fn error(&self, msg: &str) -> Error {
        self.error_at(self.cursor, msg)
    }

    /// Creates a syntax error at `position`.
    pub fn error_at(&self, position: usize, msg: &str) -> Error {
        Error::syntax(self.source, position, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_run_stops_at_delimiters() {
        let mut lexer = Lexer::new("ab.c_+-9:rest");
        assert_eq!(lexer.read_string().unwrap(), "ab.c_+-9");
        assert_eq!(lexer.peek(0), Some(':'));
    }

    #[test]
    fn test_empty_run_is_not_an_error() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.read_string().unwrap(), "");
        let mut lexer = Lexer::new("{");
        assert_eq!(lexer.read_string().unwrap(), "");
        assert_eq!(lexer.cursor(), 0);
    }

    #[test]
    fn test_escapes() {
        let mut lexer = Lexer::new(r#""a\\b\"c'""#);
        assert_eq!(lexer.read_string().unwrap(), r#"a\b"c'"#);
        assert!(!lexer.can_read(1));
    }

    #[test]
    fn test_bad_escape_reports_position() {
        let mut lexer = Lexer::new(r#""ab\nc""#);
        let err = lexer.read_string().unwrap_err();
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_unterminated_quote() {
        let mut lexer = Lexer::new("'abc");
        let err = lexer.read_string().unwrap_err();
        assert_eq!(err.position(), Some(4));
        assert!(err.to_string().starts_with("Expected '''"));
    }

    #[test]
    fn test_expect_and_read() {
        let mut lexer = Lexer::new("x");
        assert!(lexer.expect('y').is_err());
        assert_eq!(lexer.cursor(), 0);
        lexer.expect('x').unwrap();
        assert!(lexer.read().is_err());
    }

    #[test]
    fn test_typed_readers() {
        let mut lexer = Lexer::new("-12 3.5 9000000000 true False");
        assert_eq!(lexer.read_int().unwrap(), -12);
        lexer.skip_whitespace();
        assert_eq!(lexer.read_double().unwrap(), 3.5);
        lexer.skip_whitespace();
        assert_eq!(lexer.read_long().unwrap(), 9_000_000_000);
        lexer.skip_whitespace();
        assert!(lexer.read_bool().unwrap());
        lexer.skip_whitespace();
        assert!(lexer.read_bool().is_err());
    }

    #[test]
    fn test_cursor_accessors() {
        let mut lexer = Lexer::new("héllo");
        lexer.set_cursor(2).unwrap();
        assert_eq!(lexer.remaining(), "llo");
        assert!(lexer.set_cursor(6).is_err());
        assert_eq!(lexer.source(), "héllo");
    }
}
