//! Error taxonomy and the fault reporter.
//!
//! There is exactly one grammar fault: the lookahead did not match what the
//! active production needed. Input and output failures ride along on the
//! same `Result` path so the driver has a single place to stop.

use std::io::{self, Write};
use std::path::PathBuf;

use snafu::Snafu;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CompileError {
  /// The lookahead at `loc` did not satisfy the active production.
  #[snafu(display("{expected} Expected"))]
  Expected { expected: String, loc: usize },

  #[snafu(display("cannot open {}: {source}", path.display()))]
  Open { path: PathBuf, source: io::Error },

  #[snafu(display("failed to read input: {source}"))]
  Read { source: io::Error },

  #[snafu(display("failed to write output: {source}"))]
  Write { source: io::Error },
}

impl CompileError {
  /// Build a grammar fault naming the construct that was expected at `loc`.
  pub fn expected(expected: impl Into<String>, loc: usize) -> Self {
    let expected = expected.into();
    tracing::debug!(%expected, loc, "grammar fault");
    Self::Expected { expected, loc }
  }

  /// Offset of the offending character, for grammar faults.
  pub fn location(&self) -> Option<usize> {
    match self {
      Self::Expected { loc, .. } => Some(*loc),
      _ => None,
    }
  }

  pub fn is_grammar_fault(&self) -> bool {
    matches!(self, Self::Expected { .. })
  }
}

/// Write the one-line diagnostic for `err` to `sink`.
///
/// Terminating the process is left to the caller; the library never exits.
pub fn report(err: &CompileError, sink: &mut impl Write) -> io::Result<()> {
  writeln!(sink, "Error: {err}.")?;
  sink.flush()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn grammar_fault_names_the_expected_construct() {
    let err = CompileError::expected("Name", 3);
    assert_eq!(err.to_string(), "Name Expected");
    assert_eq!(err.location(), Some(3));
    assert!(err.is_grammar_fault());
  }

  #[test]
  fn report_writes_a_single_terminated_line() {
    let mut sink = Vec::new();
    report(&CompileError::expected("'='", 1), &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), "Error: '=' Expected.\n");
  }

  #[test]
  fn io_failures_are_not_grammar_faults() {
    let err = CompileError::Read {
      source: io::Error::new(io::ErrorKind::UnexpectedEof, "gone"),
    };
    assert!(!err.is_grammar_fault());
    assert_eq!(err.location(), None);
    assert_eq!(err.to_string(), "failed to read input: gone");
  }
}
