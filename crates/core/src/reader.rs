//! Tolerant top-level form scanner for source files.
//!
//! This is not a full reader: it only understands enough structure to walk
//! top-level forms and recognize an `(ns name ...)` declaration. Everything
//! inside vectors, maps, strings, and dispatch forms is consumed as balanced
//! text and collapsed to [`Form::Other`]. Malformed input surfaces as an
//! error so callers can log it and move on to the next file.

use crate::error::{CljdexError, Result};
use tracing::warn;

/// The module-declaration keyword heading a namespace form.
const NS_KEYWORD: &str = "ns";

/// A top-level form, reduced to the shape namespace detection needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    /// A parenthesized list with its immediate elements.
    List(Vec<Form>),
    /// A bare token: symbol, keyword, or number.
    Symbol(String),
    /// Anything else (string, vector, map, set, char, ...), fully consumed
    /// but structurally irrelevant here.
    Other,
}

/// Cursor over source text, yielding one top-level form at a time.
pub struct FormReader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> FormReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace, commas, line comments, and `#_` discards.
    fn skip_trivia(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == ',' => {
                    self.bump();
                }
                Some(';') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('#') if self.src[self.pos..].starts_with("#_") => {
                    self.pos += 2;
                    if self.read_form()?.is_none() {
                        return Err(CljdexError::Read(
                            "unexpected end of input after discard".into(),
                        ));
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Reads the next form. `Ok(None)` signals end of input, so callers
    /// loop on the result instead of recursing on a sentinel.
    pub fn read_form(&mut self) -> Result<Option<Form>> {
        self.skip_trivia()?;
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        match c {
            '(' => {
                self.bump();
                Ok(Some(Form::List(self.read_until(')')?)))
            }
            '[' => {
                self.bump();
                self.read_until(']')?;
                Ok(Some(Form::Other))
            }
            '{' => {
                self.bump();
                self.read_until('}')?;
                Ok(Some(Form::Other))
            }
            ')' | ']' | '}' => Err(CljdexError::Read(format!("unmatched delimiter `{c}`"))),
            '"' => {
                self.bump();
                self.read_string()?;
                Ok(Some(Form::Other))
            }
            '\\' => {
                self.bump();
                self.read_char_literal();
                Ok(Some(Form::Other))
            }
            // Quote-like prefixes wrap their form as data: `'(ns x)` reads
            // as (quote (ns x)), whose head is `quote`, not `ns`.
            '\'' | '`' | '@' => {
                self.bump();
                self.expect_form()?;
                Ok(Some(Form::Other))
            }
            '~' => {
                self.bump();
                if self.peek() == Some('@') {
                    self.bump();
                }
                self.expect_form()?;
                Ok(Some(Form::Other))
            }
            '^' => {
                self.bump();
                self.expect_form()?;
                self.expect_form()
            }
            '#' => {
                self.bump();
                self.read_dispatch()
            }
            _ => Ok(Some(Form::Symbol(self.read_token()))),
        }
    }

    fn expect_form(&mut self) -> Result<Option<Form>> {
        match self.read_form()? {
            Some(form) => Ok(Some(form)),
            None => Err(CljdexError::Read("unexpected end of input".into())),
        }
    }

    /// Consumes forms up to the matching closer, collecting the elements.
    fn read_until(&mut self, closer: char) -> Result<Vec<Form>> {
        let mut items = Vec::new();
        loop {
            self.skip_trivia()?;
            match self.peek() {
                None => {
                    return Err(CljdexError::Read(format!(
                        "unterminated form, expected `{closer}`"
                    )));
                }
                Some(c) if c == closer => {
                    self.bump();
                    return Ok(items);
                }
                Some(c) if matches!(c, ')' | ']' | '}') => {
                    return Err(CljdexError::Read(format!("unmatched delimiter `{c}`")));
                }
                Some(_) => {
                    if let Some(form) = self.read_form()? {
                        items.push(form);
                    }
                }
            }
        }
    }

    /// Handles `#`-dispatch after the `#` has been consumed.
    fn read_dispatch(&mut self) -> Result<Option<Form>> {
        match self.peek() {
            Some('{') => {
                self.bump();
                self.read_until('}')?;
                Ok(Some(Form::Other))
            }
            Some('(') => {
                self.bump();
                self.read_until(')')?;
                Ok(Some(Form::Other))
            }
            Some('"') => {
                self.bump();
                self.read_string()?;
                Ok(Some(Form::Other))
            }
            // Var quote wraps its form as data like the other quotes.
            Some('\'') => {
                self.bump();
                self.expect_form()?;
                Ok(Some(Form::Other))
            }
            Some('^') => {
                self.bump();
                self.expect_form()?;
                self.expect_form()
            }
            // Reader conditional: consume the whole splice opaquely.
            Some('?') => {
                self.bump();
                if self.peek() == Some('@') {
                    self.bump();
                }
                self.expect_form()?;
                Ok(Some(Form::Other))
            }
            // Shebang line at the top of scripts.
            Some('!') => {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
                self.read_form()
            }
            // Tagged literals and anything else: swallow one form.
            Some(_) => {
                self.expect_form()?;
                Ok(Some(Form::Other))
            }
            None => Err(CljdexError::Read("unexpected end of input after `#`".into())),
        }
    }

    fn read_string(&mut self) -> Result<()> {
        while let Some(c) = self.bump() {
            match c {
                '\\' => {
                    self.bump();
                }
                '"' => return Ok(()),
                _ => {}
            }
        }
        Err(CljdexError::Read("unterminated string".into()))
    }

    fn read_char_literal(&mut self) {
        self.bump();
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '-' {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn read_token(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace()
                || matches!(c, ',' | ';' | '(' | ')' | '[' | ']' | '{' | '}' | '"')
            {
                break;
            }
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }
}

/// Scans top-level forms of `source` until an `(ns name ...)` declaration
/// turns up, returning the declared name.
///
/// A read failure is logged with `origin` (the file or archive entry being
/// scanned) and ends scanning of this source only; forms that are not
/// namespace declarations are discarded and scanning continues.
pub fn declared_namespace(source: &str, origin: &str) -> Option<String> {
    let mut forms = FormReader::new(source);
    loop {
        match forms.read_form() {
            Ok(Some(Form::List(items))) => {
                if let [Form::Symbol(head), Form::Symbol(name), ..] = items.as_slice() {
                    if head == NS_KEYWORD {
                        return Some(name.clone());
                    }
                }
            }
            Ok(Some(_)) => {}
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", origin, e);
                return None;
            }
        }
    }
}
