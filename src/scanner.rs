//! Character-level scanning: a single lookahead character over a byte stream.
//!
//! There are no tokens. Names and numerals are one character long, so the
//! parser looks at `look()` directly and the scanner only knows how to
//! classify and consume it.

use std::io::{self, Read};

use snafu::ResultExt;

use crate::error::{CompileError, CompileResult, ReadSnafu};

/// End-of-statement sentinel.
pub const CR: char = '\r';

/// Cursor over the character source holding the current lookahead.
pub struct Scanner<R> {
  source: io::Bytes<R>,
  look: char,
  /// Offset of `look` in the input.
  pos: usize,
  /// Number of bytes pulled from `source` so far.
  read: usize,
}

impl<R: Read> Scanner<R> {
  /// Wrap `source` and prime the lookahead with its first character.
  pub fn new(source: R) -> CompileResult<Self> {
    let mut scanner = Self {
      source: source.bytes(),
      look: CR,
      pos: 0,
      read: 0,
    };
    scanner.advance()?;
    Ok(scanner)
  }

  /// Pull the next character into the lookahead.
  ///
  /// End of stream is presented as the `CR` sentinel.
  pub fn advance(&mut self) -> CompileResult<()> {
    self.pos = self.read;
    self.look = match self.source.next() {
      Some(byte) => {
        let byte = byte.context(ReadSnafu)?;
        self.read += 1;
        char::from(byte)
      }
      None => CR,
    };
    tracing::trace!(look = ?self.look, pos = self.pos, "advance");
    Ok(())
  }

  pub fn look(&self) -> char {
    self.look
  }

  pub fn pos(&self) -> usize {
    self.pos
  }

  pub fn is_letter(&self) -> bool {
    self.look.is_ascii_alphabetic()
  }

  pub fn is_digit(&self) -> bool {
    self.look.is_ascii_digit()
  }

  pub fn is_addop(&self) -> bool {
    matches!(self.look, '+' | '-')
  }

  pub fn is_mulop(&self) -> bool {
    matches!(self.look, '*' | '/')
  }

  /// True when the lookahead terminates the statement. A bare line feed
  /// counts too, so Unix line endings are accepted.
  pub fn at_end_of_statement(&self) -> bool {
    matches!(self.look, CR | '\n')
  }

  /// Consume `c` or fail naming it.
  pub fn expect(&mut self, c: char) -> CompileResult<()> {
    if self.look == c {
      self.advance()
    } else {
      Err(CompileError::expected(format!("'{c}'"), self.pos))
    }
  }

  /// Consume a letter and return it uppercased.
  pub fn read_name(&mut self) -> CompileResult<char> {
    if !self.is_letter() {
      return Err(CompileError::expected("Name", self.pos));
    }
    let name = self.look.to_ascii_uppercase();
    self.advance()?;
    Ok(name)
  }

  /// Consume a single decimal digit.
  pub fn read_numeral(&mut self) -> CompileResult<char> {
    if !self.is_digit() {
      return Err(CompileError::expected("Integer", self.pos));
    }
    let digit = self.look;
    self.advance()?;
    Ok(digit)
  }
}
