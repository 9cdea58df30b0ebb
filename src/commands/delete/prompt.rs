//! Interactive confirmation using dialoguer.
//!
//! On a terminal the answer is read with a dialoguer prompt. When stdin is
//! piped the prompt is printed and one line is read from stdin instead.

use crate::error::{Result, WebpError};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Ask the user to confirm; only `y` or `yes` (any case) proceeds.
pub fn confirm_on_terminal(prompt: &str) -> Result<bool> {
    if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
        return confirm_from_reader(prompt, &mut io::stdin().lock(), &mut io::stdout());
    }

    let answer: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| {
            WebpError::UserError(format!(
                "cannot ask for confirmation ({}); re-run with --yes to skip the prompt",
                e
            ))
        })?;

    Ok(is_affirmative(&answer))
}

/// Print `prompt` and read one answer line from `input`.
///
/// End of input before any answer declines.
pub fn confirm_from_reader<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let read_error =
        |e: io::Error| WebpError::UserError(format!("failed to read confirmation: {}", e));

    write!(output, "{} ", prompt).map_err(read_error)?;
    output.flush().map_err(read_error)?;

    let mut answer = String::new();
    if input.read_line(&mut answer).map_err(read_error)? == 0 {
        writeln!(output).map_err(read_error)?;
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

/// True for `y`/`yes`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes"
}
