//! Expression input acquisition.
//!
//! Reads a single line from any buffered reader. The CLI passes locked
//! stdin; tests pass byte slices.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Prompt shown before reading from an interactive terminal.
pub const PROMPT: &str = "Enter expression: ";

/// Reads one line and strips the trailing line terminator.
///
/// End of input without any data yields an empty string, which the
/// tokenizer then rejects as a format error.
///
/// # Errors
///
/// Returns [`Error::Input`] if the reader fails or the line is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use romcalc::io::read_expression;
///
/// let line = read_expression(&b"V + X\nignored\n"[..]).unwrap();
/// assert_eq!(line, "V + X");
/// ```
pub fn read_expression<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| Error::Input(format!("failed to read expression: {e}")))?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Writes the prompt and flushes so it appears before input is typed.
///
/// # Errors
///
/// Returns [`Error::Input`] if writing fails.
pub fn write_prompt<W: Write>(mut writer: W) -> Result<()> {
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;
    Ok(())
}
