//! Parsing of Mojangson text into [`mcnbt::Value`] trees.
//!
//! The notation, informally:
//!
//! ```text
//! value      := struct | list | typedValue
//! struct     := '{' (key ':' value (',' key ':' value)*)? '}'
//! list       := arrayTag | listTag
//! arrayTag   := '[' ('B'|'I'|'L') ';' (typedValue (',' typedValue)*)? ']'
//! listTag    := '[' (value (',' value)*)? ']'
//! typedValue := quotedString | unquotedToken
//! key        := quotedString | unquotedToken
//! ```
//!
//! An unquoted token resolves to the first matching numeric form (`1b`, `2s`,
//! `3`, `4L`, `5.0f`, `6.0d`, `7.5`), then the `true`/`false` byte literals,
//! and finally falls back to a plain string, so a token itself never fails to
//! parse. Lists must be element-homogeneous; arrays must hold exactly the
//! element kind their letter declares.

use mcnbt::{Compound, List, Tag, Value};

use crate::error::{Error, Result};
use crate::input::StrReader;

/// Parse a whole document into a value of any kind. Trailing non-whitespace
/// input is an error.
pub fn from_str(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    let value = parser.read_value()?;
    parser.finish()?;
    Ok(value)
}

/// Parse a whole document that must be a compound at the top level. Trailing
/// non-whitespace input is an error.
pub fn from_str_compound(input: &str) -> Result<Compound> {
    let mut parser = Parser::new(input);
    let compound = parser.read_struct()?;
    parser.finish()?;
    Ok(compound)
}

struct Parser<'a> {
    reader: StrReader<'a>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            reader: StrReader::new(input),
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.reader.skip_whitespace();
        if self.reader.can_read() {
            return Err(Error::trailing_data(self.reader.cursor()));
        }
        Ok(())
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.reader.skip_whitespace();
        self.reader.expect(expected)
    }

    fn has_element_separator(&mut self) -> bool {
        self.reader.skip_whitespace();
        if self.reader.peek() == Some(',') {
            self.reader.skip();
            self.reader.skip_whitespace();
            true
        } else {
            false
        }
    }

    fn read_value(&mut self) -> Result<Value> {
        self.reader.skip_whitespace();
        match self.reader.peek() {
            None => Err(Error::expected_value(self.reader.cursor())),
            Some('{') => Ok(Value::Compound(self.read_struct()?)),
            Some('[') => self.read_list_or_array(),
            Some(_) => self.read_typed_value(),
        }
    }

    fn read_struct(&mut self) -> Result<Compound> {
        self.expect('{')?;
        let mut compound = Compound::new();
        self.reader.skip_whitespace();
        while matches!(self.reader.peek(), Some(c) if c != '}') {
            let start = self.reader.cursor();
            let key = self.reader.read_string()?;
            if key.is_empty() {
                return Err(Error::expected_key(start));
            }
            self.expect(':')?;
            let value = self.read_value()?;
            compound.insert(key.into_owned(), value);
            if !self.has_element_separator() {
                break;
            }
            // A separator must introduce another entry; `{a:1b,}` is not
            // valid.
            if !self.reader.can_read() || self.reader.peek() == Some('}') {
                return Err(Error::expected_key(self.reader.cursor()));
            }
        }
        self.expect('}')?;
        Ok(compound)
    }

    // `[` directly followed by a non-quote character and then `;` is an
    // array; anything else is a generic list.
    fn read_list_or_array(&mut self) -> Result<Value> {
        if self.reader.peek_nth(1).map_or(false, |c| c != '"')
            && self.reader.peek_nth(2) == Some(';')
        {
            self.read_array_tag()
        } else {
            self.read_list_tag()
        }
    }

    fn read_list_tag(&mut self) -> Result<Value> {
        let open = self.reader.cursor();
        self.expect('[')?;
        self.reader.skip_whitespace();
        if !self.reader.can_read() {
            return Err(Error::expected_value(self.reader.cursor()));
        }
        let mut elements = Vec::new();
        let mut element_tag = Tag::End;
        while self.reader.peek() != Some(']') {
            let start = self.reader.cursor();
            let element = self.read_value()?;
            if element_tag == Tag::End {
                element_tag = element.tag();
            } else if element.tag() != element_tag {
                return Err(Error::mismatched_list(element_tag, element.tag(), start));
            }
            elements.push(element);
            if !self.has_element_separator() {
                break;
            }
            if !self.reader.can_read() || self.reader.peek() == Some(']') {
                return Err(Error::expected_value(self.reader.cursor()));
            }
        }
        self.expect(']')?;
        List::with_tag(element_tag, elements)
            .map(Value::List)
            .map_err(|e| Error::at(e.to_string(), open))
    }

    fn read_array_tag(&mut self) -> Result<Value> {
        self.expect('[')?;
        let start = self.reader.cursor();
        let letter = self.reader.read();
        self.reader.skip(); // the ';'
        self.reader.skip_whitespace();
        if !self.reader.can_read() {
            return Err(Error::expected_value(self.reader.cursor()));
        }
        match letter {
            Some('B') => {
                let elements = self.read_array_elements(Tag::ByteArray, |v| match v {
                    Value::Byte(b) => Some(*b),
                    _ => None,
                })?;
                Ok(Value::ByteArray(elements))
            }
            Some('I') => {
                let elements = self.read_array_elements(Tag::IntArray, |v| match v {
                    Value::Int(i) => Some(*i),
                    _ => None,
                })?;
                Ok(Value::IntArray(elements))
            }
            Some('L') => {
                let elements = self.read_array_elements(Tag::LongArray, |v| match v {
                    Value::Long(l) => Some(*l),
                    _ => None,
                })?;
                Ok(Value::LongArray(elements))
            }
            other => Err(Error::invalid_array_type(other, start)),
        }
    }

    fn read_array_elements<T>(
        &mut self,
        array_tag: Tag,
        extract: fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>> {
        let mut elements = Vec::new();
        loop {
            if self.reader.peek() != Some(']') {
                let start = self.reader.cursor();
                let value = self.read_value()?;
                match extract(&value) {
                    Some(element) => elements.push(element),
                    None => return Err(Error::mismatched_array(array_tag, value.tag(), start)),
                }
                if self.has_element_separator() {
                    if !self.reader.can_read() || self.reader.peek() == Some(']') {
                        return Err(Error::expected_value(self.reader.cursor()));
                    }
                    continue;
                }
            }
            self.expect(']')?;
            return Ok(elements);
        }
    }

    fn read_typed_value(&mut self) -> Result<Value> {
        self.reader.skip_whitespace();
        let start = self.reader.cursor();
        if matches!(self.reader.peek(), Some(c) if StrReader::is_quote(c)) {
            return Ok(Value::String(self.reader.read_quoted_string()?));
        }
        let token = self.reader.read_unquoted_string();
        if token.is_empty() {
            return Err(Error::expected_value(start));
        }
        Ok(token_to_value(token))
    }
}

// Resolution order matters: suffixes first, then plain integers, then
// doubles, then the boolean byte literals. A token that matches a numeric
// shape but overflows its width falls through to the string fallback.
fn token_to_value(token: &str) -> Value {
    if let Some(v) = parse_suffixed_float(token) {
        return v;
    }
    if let Some(v) = parse_suffixed_int::<i8>(token, 'b', 'B').map(Value::Byte) {
        return v;
    }
    if let Some(v) = parse_suffixed_int::<i64>(token, 'l', 'L').map(Value::Long) {
        return v;
    }
    if let Some(v) = parse_suffixed_int::<i16>(token, 's', 'S').map(Value::Short) {
        return v;
    }
    if int_body(token) {
        if let Ok(v) = token.parse::<i32>() {
            return Value::Int(v);
        }
    }
    if let Some(v) = parse_suffixed_double(token) {
        return v;
    }
    if let Some(v) = parse_bare_double(token) {
        return v;
    }
    match token {
        "true" => Value::Byte(1),
        "false" => Value::Byte(0),
        _ => Value::String(token.to_owned()),
    }
}

fn strip_suffix_ci(token: &str, lower: char, upper: char) -> Option<&str> {
    token
        .strip_suffix(lower)
        .or_else(|| token.strip_suffix(upper))
}

fn parse_suffixed_int<T: std::str::FromStr>(token: &str, lower: char, upper: char) -> Option<T> {
    let body = strip_suffix_ci(token, lower, upper)?;
    if !int_body(body) {
        return None;
    }
    body.parse().ok()
}

fn parse_suffixed_float(token: &str) -> Option<Value> {
    let body = strip_suffix_ci(token, 'f', 'F')?;
    if !float_body(body) {
        return None;
    }
    body.parse().ok().map(Value::Float)
}

fn parse_suffixed_double(token: &str) -> Option<Value> {
    let body = strip_suffix_ci(token, 'd', 'D')?;
    if !float_body(body) {
        return None;
    }
    body.parse().ok().map(Value::Double)
}

// A plain double needs a decimal point to be distinguishable from the string
// fallback; suffixless exponent forms stay strings.
fn parse_bare_double(token: &str) -> Option<Value> {
    if !numeric_body(token, true) {
        return None;
    }
    token.parse().ok().map(Value::Double)
}

// Sign, then either `0` or a nonzero digit followed by more digits. Leading
// zeros disqualify, matching the command parser.
fn int_body(s: &str) -> bool {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    match s.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        digits => digits.iter().all(u8::is_ascii_digit),
    }
}

// Everything a printed float can look like: decimal, exponent, and the
// non-finite spellings.
fn float_body(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf")
        || unsigned.eq_ignore_ascii_case("infinity")
        || unsigned.eq_ignore_ascii_case("nan")
        || numeric_body(s, false)
}

fn numeric_body(s: &str, require_point: bool) -> bool {
    let s = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (mantissa, exponent) = match s.split_once(&['e', 'E'][..]) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (s, None),
    };
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(&['+', '-'][..]).unwrap_or(exponent);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };
    if require_point && frac_part.is_none() {
        return false;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return false;
    }
    int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.map_or(true, |f| f.bytes().all(|b| b.is_ascii_digit()))
}
