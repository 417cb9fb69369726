//! Ticker prompt.

use std::io::{BufRead, IsTerminal, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub const PROMPT: &str = "Enter ETF ticker (SPY or QQQ): ";

/// Read one ticker line. Ctrl-C and Ctrl-D read as empty input, which the
/// dispatcher reports as an invalid ticker.
pub fn read_ticker() -> anyhow::Result<String> {
    if !std::io::stdin().is_terminal() {
        let stdin = std::io::stdin();
        return read_ticker_from(stdin.lock(), std::io::stdout());
    }

    let mut rl = DefaultEditor::new()?;
    match rl.readline(PROMPT) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

/// Piped input: rustyline skips the prompt there, so write it ourselves.
fn read_ticker_from(mut input: impl BufRead, mut out: impl Write) -> anyhow::Result<String> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
