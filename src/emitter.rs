//! Instruction output for the accumulator/stack target.
//!
//! The target has one accumulator (`D0`), a scratch register (`D1`), an
//! address register (`A0`) and a push-down stack addressed through `SP`.
//! Every line goes straight to the sink in call order; nothing is buffered
//! here, so a fault leaves the valid prefix on the sink.

use std::fmt;
use std::io::Write;

use snafu::ResultExt;

use crate::error::{CompileResult, WriteSnafu};

/// Leading indentation of every instruction line.
pub const TAB: &str = "\t";

/// Instructions the translator knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  /// `MOVE #n,D0`
  LoadImmediate(char),
  /// `MOVE X(PC),D0`
  LoadVar(char),
  /// `BSR F`
  Call(char),
  /// `MOVE D0,-(SP)`
  Push,
  /// `ADD (SP)+,D0`
  AddPop,
  /// `SUB (SP)+,D0`
  SubPop,
  /// `NEG D0`
  Negate,
  /// `MULS (SP)+,D0`
  MulPop,
  /// `MOVE (SP)+,D1`
  PopScratch,
  /// `DIVS D1,D0`
  DivScratch,
  /// `CLR D0`
  Clear,
  /// `LEA X(PC),A0`
  LoadAddress(char),
  /// `MOVE D0,(A0)`
  StoreIndirect,
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::LoadImmediate(n) => write!(f, "MOVE #{n},D0"),
      Self::LoadVar(name) => write!(f, "MOVE {name}(PC),D0"),
      Self::Call(name) => write!(f, "BSR {name}"),
      Self::Push => f.write_str("MOVE D0,-(SP)"),
      Self::AddPop => f.write_str("ADD (SP)+,D0"),
      Self::SubPop => f.write_str("SUB (SP)+,D0"),
      Self::Negate => f.write_str("NEG D0"),
      Self::MulPop => f.write_str("MULS (SP)+,D0"),
      Self::PopScratch => f.write_str("MOVE (SP)+,D1"),
      Self::DivScratch => f.write_str("DIVS D1,D0"),
      Self::Clear => f.write_str("CLR D0"),
      Self::LoadAddress(name) => write!(f, "LEA {name}(PC),A0"),
      Self::StoreIndirect => f.write_str("MOVE D0,(A0)"),
    }
  }
}

/// Writes indented instruction text to an output sink.
pub struct Emitter<W> {
  sink: W,
}

impl<W: Write> Emitter<W> {
  pub fn new(sink: W) -> Self {
    Self { sink }
  }

  /// Write `text` after one indentation unit, without a line terminator.
  pub fn emit(&mut self, text: &str) -> CompileResult<()> {
    write!(self.sink, "{TAB}{text}").context(WriteSnafu)?;
    self.sink.flush().context(WriteSnafu)
  }

  /// Write `text` after one indentation unit, followed by a newline.
  pub fn emit_line(&mut self, text: &str) -> CompileResult<()> {
    writeln!(self.sink, "{TAB}{text}").context(WriteSnafu)?;
    self.sink.flush().context(WriteSnafu)
  }

  pub fn instr(&mut self, instr: Instruction) -> CompileResult<()> {
    tracing::trace!(%instr, "emit");
    self.emit_line(&instr.to_string())
  }

  pub fn into_inner(self) -> W {
    self.sink
  }
}
