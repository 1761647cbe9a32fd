//! Recursive-descent translator for a single assignment statement.
//!
//! One function per production. Code is emitted as each construct is
//! recognised, so the call stack is the parse state and no tree is built:
//!
//! ```text
//! assignment := name '=' expression
//! expression := [addop] term {addop term}
//! term       := factor {mulop factor}
//! factor     := '(' expression ')' | ident | number
//! ident      := name ['(' ')']
//! ```
//!
//! The right operand of a binary operator always lands in `D0` while the left
//! one waits on the stack.

use std::io::{Read, Write};

use crate::emitter::{Emitter, Instruction};
use crate::error::{CompileError, CompileResult};
use crate::scanner::Scanner;

/// Binary operators recognised by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Div,
}

impl BinaryOp {
  fn symbol(self) -> char {
    match self {
      Self::Add => '+',
      Self::Sub => '-',
      Self::Mul => '*',
      Self::Div => '/',
    }
  }
}

/// Translate one statement and require the end-of-statement sentinel.
pub fn translate<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  parse_assignment(scanner, out)?;

  if !scanner.at_end_of_statement() {
    return Err(CompileError::expected("Newline", scanner.pos()));
  }

  Ok(())
}

fn parse_assignment<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  let name = scanner.read_name()?;
  tracing::trace!(%name, "assignment");
  scanner.expect('=')?;
  parse_expression(scanner, out)?;
  out.instr(Instruction::LoadAddress(name))?;
  out.instr(Instruction::StoreIndirect)
}

fn parse_expression<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  // A leading sign is read as `0 ± term`.
  if scanner.is_addop() {
    out.instr(Instruction::Clear)?;
  } else {
    parse_term(scanner, out)?;
  }

  loop {
    let op = match scanner.look() {
      '+' => BinaryOp::Add,
      '-' => BinaryOp::Sub,
      _ => break,
    };

    out.instr(Instruction::Push)?;
    scanner.expect(op.symbol())?;
    parse_term(scanner, out)?;

    match op {
      BinaryOp::Add => out.instr(Instruction::AddPop)?,
      BinaryOp::Sub => {
        // D0 holds the subtrahend, so the difference comes out negated.
        out.instr(Instruction::SubPop)?;
        out.instr(Instruction::Negate)?;
      }
      _ => unreachable!(),
    }
  }

  Ok(())
}

fn parse_term<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  parse_factor(scanner, out)?;

  loop {
    let op = match scanner.look() {
      '*' => BinaryOp::Mul,
      '/' => BinaryOp::Div,
      _ => break,
    };

    out.instr(Instruction::Push)?;
    scanner.expect(op.symbol())?;
    parse_factor(scanner, out)?;

    match op {
      BinaryOp::Mul => out.instr(Instruction::MulPop)?,
      BinaryOp::Div => {
        out.instr(Instruction::PopScratch)?;
        out.instr(Instruction::DivScratch)?;
      }
      _ => unreachable!(),
    }
  }

  Ok(())
}

fn parse_factor<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  if scanner.look() == '(' {
    scanner.expect('(')?;
    parse_expression(scanner, out)?;
    return scanner.expect(')');
  }

  if scanner.is_letter() {
    return parse_ident(scanner, out);
  }

  let digit = scanner.read_numeral()?;
  out.instr(Instruction::LoadImmediate(digit))
}

fn parse_ident<R: Read, W: Write>(
  scanner: &mut Scanner<R>,
  out: &mut Emitter<W>,
) -> CompileResult<()> {
  let name = scanner.read_name()?;

  if scanner.look() == '(' {
    scanner.expect('(')?;
    scanner.expect(')')?;
    return out.instr(Instruction::Call(name));
  }

  out.instr(Instruction::LoadVar(name))
}
