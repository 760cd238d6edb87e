//! Helpers for the whitespace-delimited text encoding.
//!
//! Every record is written followed by a single [`SEPARATOR`], including the last one. Decoding
//! splits on any whitespace, so the trailing separator (or any other extra whitespace) is ignored.

use std::fmt::{Display, Write};
use std::str::{FromStr, SplitWhitespace};

use super::ParseError;

pub const SEPARATOR: char = ' ';

/// The token written in place of an absent tree node.
pub const NULL_TOKEN: &str = "null";

/// Splits the key from the value in hash table tokens.
pub const ENTRY_DELIMITER: char = ':';

/// Appends `token` and a separator to `out`.
pub fn write_token(out: &mut String, token: impl Display) {
    // Formatting into a String can't fail.
    let _ = write!(out, "{token}{SEPARATOR}");
}

/// Appends a `key:value` token and a separator to `out`.
pub fn write_entry(out: &mut String, key: impl Display, value: impl Display) {
    let _ = write!(out, "{key}{ENTRY_DELIMITER}{value}{SEPARATOR}");
}

/// Appends either the value or [`NULL_TOKEN`] to `out`.
pub fn write_optional(out: &mut String, value: Option<impl Display>) {
    match value {
        Some(value) => write_token(out, value),
        None => write_token(out, NULL_TOKEN),
    }
}

/// Returns an iterator over the tokens of `text`, left to right.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        inner: text.split_whitespace(),
        position: 0,
    }
}

pub struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        let token = Token {
            text,
            position: self.position,
        };
        self.position += 1;
        Some(token)
    }
}

/// A single token and its position (counted in tokens, not bytes) within the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn parse<T: FromStr>(&self) -> Result<T, ParseError> {
        self.text.parse().map_err(|_| ParseError {
            token: self.text.to_owned(),
            position: self.position,
        })
    }

    pub fn is_null(&self) -> bool {
        self.text == NULL_TOKEN
    }

    /// Parses the token as a value, or as None if it is [`NULL_TOKEN`].
    pub fn parse_optional<T: FromStr>(&self) -> Result<Option<T>, ParseError> {
        if self.is_null() {
            Ok(None)
        } else {
            self.parse().map(Some)
        }
    }

    /// Splits a `key:value` token at the first delimiter. Both halves keep the position of the
    /// whole token.
    pub fn split_entry(&self) -> Option<(Token<'a>, Token<'a>)> {
        let (key, value) = self.text.split_once(ENTRY_DELIMITER)?;
        Some((
            Token { text: key, position: self.position },
            Token { text: value, position: self.position },
        ))
    }
}
