//! Per-file confirmation prompt.

use std::io::{BufRead, Write};

use color_eyre::eyre::{bail, Result, WrapErr};

use crate::constants;
use crate::core::Candidate;
use crate::state::{Decision, Response};

/// Ask whether to treat `candidate`, repeating until the reply is recognized.
///
/// # Errors
///
/// Fails if the prompt cannot be written or the reply cannot be read,
/// including when input reaches end of file.
pub fn prompt<R, W>(candidate: &Candidate, input: &mut R, output: &mut W) -> Result<Decision>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "{}{}{}",
            constants::PROMPT_PREFIX,
            candidate.name,
            constants::PROMPT_SUFFIX
        )
        .and_then(|()| output.flush())
        .wrap_err(constants::ERR_PROMPT_WRITE_FAILED)?;

        let mut reply = String::new();
        let read = input
            .read_line(&mut reply)
            .wrap_err(constants::ERR_INPUT_READ_FAILED)?;
        if read == 0 {
            bail!(constants::ERR_INPUT_CLOSED);
        }

        let response = Response::parse(strip_terminator(&reply));
        tracing::debug!(file = %candidate.name, reply = %reply.trim_end(), ?response, "prompt reply");
        if let Some(decision) = response.decision() {
            return Ok(decision);
        }
    }
}

fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
