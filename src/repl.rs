//! Interactive read loop: prompt, advise, render, repeat.
//!
//! Input and output are generic so the loop can be driven from tests; the binary
//! wires it to stdin/stdout and Ctrl-C.

use std::future::Future;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, instrument};

use crate::advisor::Advisor;
use crate::render::render_advice;

pub const PROMPT: &str = "Enter your math problem: ";
pub const FAREWELL: &str = "Thanks for using Math Helper! Keep learning!";
pub const EMPTY_INPUT: &str = "Please enter a problem.";

const EXIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// `quit` / `exit` / `q`, any case, surrounding whitespace ignored.
pub fn is_exit_command(line: &str) -> bool {
  let word = line.trim().to_lowercase();
  EXIT_WORDS.contains(&word.as_str())
}

/// Resolve when `signal` fires. If the handler could not be installed, log it
/// and never resolve, so the caller keeps running instead of exiting at once.
pub async fn interrupted<F>(signal: F)
where
  F: Future<Output = io::Result<()>>,
{
  if let Err(e) = signal.await {
    error!(target: "math_helper", error = %e, "Failed to listen for Ctrl-C; interrupt disabled");
    std::future::pending::<()>().await;
  }
}

fn write_welcome(out: &mut impl Write) -> io::Result<()> {
  writeln!(out, "Welcome to Math Helper!")?;
  writeln!(out, "This tool helps you learn how to solve math problems.")?;
  writeln!(out, "Type 'quit' or 'exit' to leave.")?;
  writeln!(out)
}

/// Run until an exit word, end of input, or `interrupt` resolves.
///
/// A failure while printing one answer is reported and the loop keeps going.
/// Read errors end the loop and are returned.
#[instrument(level = "info", skip_all)]
pub async fn run<R, W, F>(advisor: &Advisor, input: R, out: &mut W, interrupt: F) -> io::Result<()>
where
  R: AsyncBufRead + Unpin,
  W: Write,
  F: Future<Output = ()>,
{
  tokio::pin!(interrupt);
  let mut lines = input.lines();

  write_welcome(out)?;
  loop {
    write!(out, "{PROMPT}")?;
    out.flush()?;

    // next_line is cancel safe, so losing the race to Ctrl-C drops nothing.
    let line = tokio::select! {
      _ = &mut interrupt => {
        info!(target: "math_helper", "interrupted");
        writeln!(out, "\n\n{FAREWELL}")?;
        return Ok(());
      }
      line = lines.next_line() => line?,
    };

    let Some(line) = line else {
      writeln!(out)?;
      writeln!(out, "{FAREWELL}")?;
      return Ok(());
    };

    let problem = line.trim();
    if is_exit_command(problem) {
      writeln!(out, "{FAREWELL}")?;
      return Ok(());
    }
    if problem.is_empty() {
      writeln!(out, "{EMPTY_INPUT}")?;
      writeln!(out)?;
      continue;
    }

    let advice = advisor.advise(problem);
    if let Err(e) = render_advice(&advice, out).and_then(|_| writeln!(out)) {
      error!(target: "math_helper", error = %e, "failed to print advice");
      let _ = writeln!(out, "An error occurred: {e}");
      let _ = writeln!(out, "Please try again.");
      let _ = writeln!(out);
    }
  }
}
