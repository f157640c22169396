//! Character cursor over TSON input.
//!
//! [`Cursor`] is the only place that moves through the input. It tracks the
//! byte offset used for slicing together with the 1-based line and column
//! used in error positions. A fresh cursor is created for every decode call.

use crate::error::{Error, ErrorKind};

pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Cursor {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current character, or `None` at end of input.
    pub(crate) fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Character after the current one.
    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes and returns the current character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the current character only if it is `expected`.
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Unconsumed input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Input consumed since byte offset `start`.
    pub(crate) fn since(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }

    pub(crate) fn location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Builds an error of `kind` at the current position.
    pub(crate) fn error(&self, kind: ErrorKind) -> Error {
        Error::syntax(kind, self.line, self.column)
    }

    /// Skips spaces, tabs, line breaks, `//` line comments and `/* */` block
    /// comments. An unterminated block comment runs to end of input.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => {
                    // the newline is left for the whitespace arm
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                '/' if self.peek_next() == Some('*') => {
                    self.advance();
                    self.advance();
                    while !self.at_end() {
                        if self.peek() == Some('*') && self.peek_next() == Some('/') {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }
}
