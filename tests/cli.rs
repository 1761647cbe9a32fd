use std::io::Write;
use std::process::{Command, Output, Stdio};

use anyhow::Result;

fn cradle() -> Command {
  Command::new(env!("CARGO_BIN_EXE_cradle"))
}

fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn translates_statement_argument() -> Result<()> {
  let output = cradle().arg("A=B").output()?;

  assert!(output.status.success());
  assert_eq!(stdout(&output), "\tMOVE B(PC),D0\n\tLEA A(PC),A0\n\tMOVE D0,(A0)\n");
  assert!(stderr(&output).is_empty());
  Ok(())
}

#[test]
fn reads_statement_from_stdin() -> Result<()> {
  let mut child = cradle()
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()?;
  if let Some(mut stdin) = child.stdin.take() {
    stdin.write_all(b"X=F()\r\n")?;
  }
  let output = child.wait_with_output()?;

  assert!(output.status.success());
  assert_eq!(stdout(&output), "\tBSR F\n\tLEA X(PC),A0\n\tMOVE D0,(A0)\n");
  Ok(())
}

#[test]
fn reads_statement_from_file() -> Result<()> {
  let path = std::env::temp_dir().join(format!("cradle-cli-{}.txt", std::process::id()));
  std::fs::write(&path, "Y=2*3\n")?;
  let output = cradle().arg("--input").arg(&path).output()?;
  std::fs::remove_file(&path)?;

  assert!(output.status.success());
  assert_eq!(
    stdout(&output),
    "\tMOVE #2,D0\n\tMOVE D0,-(SP)\n\tMOVE #3,D0\n\tMULS (SP)+,D0\n\tLEA Y(PC),A0\n\tMOVE D0,(A0)\n"
  );
  Ok(())
}

#[test]
fn fault_exits_nonzero_after_partial_output() -> Result<()> {
  let output = cradle().arg("A=1+").output()?;

  assert!(!output.status.success());
  assert_eq!(stdout(&output), "\tMOVE #1,D0\n\tMOVE D0,-(SP)\n");
  assert!(stderr(&output).contains("Error: Integer Expected."));
  Ok(())
}

#[test]
fn trailing_garbage_wants_newline() -> Result<()> {
  let output = cradle().arg("A=B)").output()?;

  assert!(!output.status.success());
  assert!(stderr(&output).contains("Error: Newline Expected."));
  Ok(())
}

#[test]
fn missing_input_file_is_reported() -> Result<()> {
  let output = cradle()
    .args(["--input", "/nonexistent/cradle/statement.txt"])
    .output()?;

  assert!(!output.status.success());
  assert!(stderr(&output).contains("Error: cannot open /nonexistent/cradle/statement.txt"));
  assert!(stdout(&output).is_empty());
  Ok(())
}

#[test]
fn statement_and_input_conflict() -> Result<()> {
  let output = cradle().args(["A=B", "--input", "x.txt"]).output()?;

  assert!(!output.status.success());
  Ok(())
}
