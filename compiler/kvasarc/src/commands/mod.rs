//! Command handlers for the Kvasar CLI.
//!
//! Each submodule implements one command. Argument parsing and rendering are
//! pure functions returning values, so they can be tested without touching
//! stdout; the `*_file` entry points do the I/O.

mod check;
mod lex;

pub use check::{check_file, parse_check_args, render_check};
pub use lex::{lex_file, parse_lex_args, render_tokens, LexCommandConfig};

use crate::CliError;

/// Read a source file, mapping I/O failures to user-facing errors.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::from_io(path, e))?;
    tracing::debug!(path, bytes = content.len(), "read source file");
    Ok(content)
}
