//! Crate root: wires together the translation pipeline.
//!
//! A statement such as `A=B*(C+1)` goes in, 68000-style stack code comes out.
//! The stages are small and talk to each other directly, with no tokens or
//! tree in between:
//! - `scanner` holds the single lookahead character over the input stream.
//! - `parser` recognises the grammar and drives emission as it goes.
//! - `emitter` formats instruction lines onto the output sink.
//! - `error` defines the fault type and the diagnostic line.

pub mod emitter;
pub mod error;
pub mod parser;
pub mod scanner;

use std::io::{Read, Write};

pub use emitter::{Emitter, Instruction};
pub use error::{CompileError, CompileResult};
pub use scanner::Scanner;

/// Translate the statement read from `input`, writing instructions to `output`.
///
/// On a fault the instructions for the valid prefix have already been written.
pub fn compile<R: Read, W: Write>(input: R, output: W) -> CompileResult<()> {
  tracing::debug!("translating statement");
  let mut scanner = Scanner::new(input)?;
  let mut out = Emitter::new(output);
  parser::translate(&mut scanner, &mut out)?;
  tracing::debug!(consumed = scanner.pos(), "statement translated");
  Ok(())
}

/// Translate an in-memory statement into assembly text.
pub fn generate_assembly(source: &str) -> CompileResult<String> {
  let mut asm = Vec::new();
  compile(source.as_bytes(), &mut asm)?;
  Ok(String::from_utf8_lossy(&asm).into_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generate_assembly_returns_the_listing() {
    let asm = generate_assembly("A=B+1").unwrap();
    assert_eq!(
      asm,
      "\tMOVE B(PC),D0\n\tMOVE D0,-(SP)\n\tMOVE #1,D0\n\tADD (SP)+,D0\n\tLEA A(PC),A0\n\tMOVE D0,(A0)\n"
    );
  }

  #[test]
  fn compile_leaves_partial_output_on_fault() {
    let mut out = Vec::new();
    let err = compile("A=B*".as_bytes(), &mut out).unwrap_err();
    assert!(err.is_grammar_fault());
    assert_eq!(out, b"\tMOVE B(PC),D0\n\tMOVE D0,-(SP)\n");
  }

  #[test]
  fn empty_input_wants_a_name() {
    let err = generate_assembly("").unwrap_err();
    assert_eq!(err.to_string(), "Name Expected");
  }
}
