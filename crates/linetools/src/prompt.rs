//! Collecting missing command parameters from the user

use std::io::{BufRead, IsTerminal, Write};

use crate::prelude::*;

/// Ask for `label` on `writer` and read one answer from `reader`
///
/// The answer is trimmed. An empty answer, or end of input, aborts with
/// [`Error::MissingParameter`].
pub fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> Result<String> {
    write!(writer, "{label}: ")?;
    writer.flush()?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .with_context(|| format!("Failed to read {label}"))?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(Error::MissingParameter(label.to_string()).into());
    }

    Ok(answer.to_string())
}

/// Return `value` if present, otherwise prompt for it on an interactive terminal
///
/// Non-interactive sessions cannot be prompted, so a missing value is an error.
pub fn value_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(Error::MissingParameter(label.to_string()).into()),
        None if std::io::stdin().is_terminal() => {
            log::debug!("Prompting for {label}");
            ask(&mut std::io::stdin().lock(), &mut std::io::stderr(), label)
        }
        None => Err(Error::MissingParameter(label.to_string()).into()),
    }
}
