use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::qmap::Point;

/// A position over map or light text.
///
/// Tokens are either runs of non-whitespace bytes or quoted strings.  Quoted
/// strings have no escape sequences, so a value can never contain `"`.
/// Cursors are cheap to copy, which is how [`Cursor::peek`] looks ahead
/// without disturbing the caller's position.
///
/// The line number is tracked as bytes are consumed.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: NonZeroU64,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor::starting_at(text, NonZeroU64::MIN)
    }

    /// A cursor over `text` that sits on `line` of some enclosing text.
    pub fn starting_at(text: &'a str, line: NonZeroU64) -> Cursor<'a> {
        Cursor { text, pos: 0, line }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// True when nothing but whitespace is left.
    pub fn is_drained(&self) -> bool {
        let mut lookahead = *self;
        lookahead.skip_whitespace();
        lookahead.is_eof()
    }

    /// 1-based line of the current position.
    pub fn line_number(&self) -> NonZeroU64 {
        self.line
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.byte().filter(|&b| is_space(b)) {
            if byte == b'\n' {
                self.line = self.line.saturating_add(1);
            }
            self.pos += 1;
        }
    }

    /// Returns the next token, or an empty token at the end of the text.
    pub fn next_token(&mut self) -> Result<&'a str> {
        self.skip_whitespace();

        match self.byte() {
            None => Ok(""),
            Some(b'"') => {
                let line_number = self.line_number();
                let start = self.pos + 1;
                let len = self.text.as_bytes()[start..]
                    .iter()
                    .position(|&b| b == b'"')
                    .ok_or_else(|| {
                        Error::from_lexer(
                            String::from("Missing closing quote"),
                            line_number,
                        )
                    })?;

                let token = &self.text[start..start + len];
                self.count_lines(token);
                self.pos = start + len + 1;
                Ok(token)
            }
            Some(_) => {
                let start = self.pos;

                while self.byte().is_some_and(|b| !is_space(b)) {
                    self.pos += 1;
                }

                Ok(&self.text[start..self.pos])
            }
        }
    }

    pub fn next_number(&mut self) -> Result<f64> {
        self.skip_whitespace();
        let line_number = self.line_number();
        let token = self.next_token()?;

        if token.is_empty() {
            return Err(Error::eof(line_number));
        }

        f64::from_str(token).map_err(|_| {
            Error::from_parser(
                format!("Expected number, got `{}`", token),
                line_number,
            )
        })
    }

    pub fn next_point(&mut self) -> Result<Point> {
        self.expect("(")?;
        let x = self.next_number()?;
        let y = self.next_number()?;
        let z = self.next_number()?;
        self.expect(")")?;

        Ok([x, y, z])
    }

    pub fn peek(&self) -> Result<&'a str> {
        let mut lookahead = *self;
        lookahead.next_token()
    }

    /// Consumes `prefix` if the next token starts with it, leaving the rest
    /// of the token in place.
    pub fn skip(&mut self, prefix: &str) -> bool {
        let mut lookahead = *self;
        lookahead.skip_whitespace();

        if lookahead.text[lookahead.pos..].starts_with(prefix) {
            self.line = lookahead.line;
            self.pos = lookahead.pos + prefix.len();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, expected: &str) -> Result<()> {
        self.skip_whitespace();
        let line_number = self.line_number();
        let token = self.next_token()?;

        if token == expected {
            Ok(())
        } else if token.is_empty() && self.is_eof() {
            Err(Error::eof(line_number))
        } else {
            Err(Error::from_parser(
                format!("Expected `{}`, got `{}`", expected, token),
                line_number,
            ))
        }
    }

    /// Consumes the rest of the current line, including its newline, and
    /// returns it without the newline.
    pub fn next_line(&mut self) -> &'a str {
        let start = self.pos.min(self.text.len());
        let rest = &self.text[start..];

        match rest.find('\n') {
            Some(len) => {
                self.pos = start + len + 1;
                self.line = self.line.saturating_add(1);
                &rest[..len]
            }
            None => {
                self.pos = self.text.len();
                rest
            }
        }
    }

    fn count_lines(&mut self, consumed: &str) {
        let newlines = consumed.bytes().filter(|&b| b == b'\n').count();
        self.line = self.line.saturating_add(newlines as u64);
    }

    fn byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }
}

fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}
