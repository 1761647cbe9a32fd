use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use cradle::error::{self, CompileResult, OpenSnafu};
use snafu::ResultExt;
use tracing_subscriber::EnvFilter;

/// Translate one assignment statement into 68000-style stack code.
#[derive(Debug, Parser)]
#[command(name = "cradle", version, about)]
struct Args {
  /// Statement to translate, e.g. `A=B*(C+1)`. Read from stdin when omitted.
  #[arg(conflicts_with = "input")]
  statement: Option<String>,

  /// Read the statement from a file.
  #[arg(short, long, value_name = "PATH")]
  input: Option<PathBuf>,
}

fn run(args: &Args) -> CompileResult<()> {
  let stdout = io::stdout().lock();
  match (&args.statement, &args.input) {
    (Some(statement), _) => cradle::compile(statement.as_bytes(), stdout),
    (None, Some(path)) => {
      let file = File::open(path).context(OpenSnafu { path })?;
      cradle::compile(BufReader::new(file), stdout)
    }
    (None, None) => cradle::compile(io::stdin().lock(), stdout),
  }
}

fn main() {
  tracing_subscriber::fmt()
    .with_ansi(false)
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .init();

  let args = Args::parse();

  if let Err(err) = run(&args) {
    // Keep the instructions for the valid prefix ahead of the diagnostic.
    let _ = io::stdout().flush();
    tracing::debug!(location = ?err.location(), "translation aborted");
    let _ = error::report(&err, &mut io::stderr().lock());
    process::exit(1);
  }
}
