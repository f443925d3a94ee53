use std::borrow::Cow;

use crate::error::{Error, Result};

const SYNTAX_ESCAPE: char = '\\';

/// Cursor over the input string. The cursor is a byte offset, which is what
/// error positions report.
pub(crate) struct StrReader<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> StrReader<'a> {
    pub fn new(input: &'a str) -> Self {
        StrReader { input, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_read(&self) -> bool {
        self.cursor < self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.cursor..].chars().next()
    }

    /// Peek the nth character ahead of the cursor without advancing.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.input[self.cursor..].chars().nth(n)
    }

    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    pub fn skip(&mut self) {
        if let Some(c) = self.peek() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.skip();
        }
    }

    pub fn expect(&mut self, expected: char) -> Result<()> {
        if self.peek() != Some(expected) {
            return Err(Error::expected_char(expected, self.cursor));
        }
        self.skip();
        Ok(())
    }

    pub fn is_quote(c: char) -> bool {
        c == '"' || c == '\''
    }

    fn is_allowed_in_unquoted(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '+')
    }

    pub fn read_unquoted_string(&mut self) -> &'a str {
        let start = self.cursor;
        while matches!(self.peek(), Some(c) if Self::is_allowed_in_unquoted(c)) {
            self.skip();
        }
        &self.input[start..self.cursor]
    }

    /// Read a quoted string. The cursor must be on the opening quote.
    pub fn read_quoted_string(&mut self) -> Result<String> {
        match self.read() {
            Some(quote) if Self::is_quote(quote) => self.read_string_until(quote),
            _ => Err(Error::expected_char('"', self.cursor)),
        }
    }

    /// Read either form of string: quoted (owned, unescaped) or unquoted
    /// (borrowed from the input).
    pub fn read_string(&mut self) -> Result<Cow<'a, str>> {
        match self.peek() {
            Some(c) if Self::is_quote(c) => {
                self.skip();
                Ok(Cow::Owned(self.read_string_until(c)?))
            }
            _ => Ok(Cow::Borrowed(self.read_unquoted_string())),
        }
    }

    // Backslash escapes only the terminating quote and itself.
    fn read_string_until(&mut self, terminator: char) -> Result<String> {
        let mut result = String::new();
        let mut escaped = false;
        loop {
            let pos = self.cursor;
            match self.read() {
                None => return Err(Error::unclosed_quoted_string(self.cursor)),
                Some(c) if escaped => {
                    if c == terminator || c == SYNTAX_ESCAPE {
                        result.push(c);
                        escaped = false;
                    } else {
                        return Err(Error::invalid_escape(c, pos));
                    }
                }
                Some(SYNTAX_ESCAPE) => escaped = true,
                Some(c) if c == terminator => return Ok(result),
                Some(c) => result.push(c),
            }
        }
    }
}
