use std::io::{self, BufRead, Write};

use crate::error::{ChecklistError, Result};

const YES: &str = "Y";
const NO: &str = "n";

/// Ask a yes/no question until the answer is exactly `Y` or `n`
pub fn confirm<R: BufRead, W: Write>(message: &str, input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "{} ({}/{}): ", message, YES, NO)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(ChecklistError::Aborted);
        }

        match line.trim_end_matches(&['\r', '\n'][..]) {
            YES => return Ok(true),
            NO => return Ok(false),
            other => log::debug!("ignoring confirmation answer {:?}", other),
        }
    }
}

/// Ask on the terminal
pub fn confirm_stdin(message: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    confirm(message, &mut input, &mut io::stdout())
}
