//! The `check` command: report every lexical error in a source file.

use std::fmt::Write;

use kvasar_lexer::{lex, LexOutput, SourceBuffer};

use super::read_file;
use crate::CliError;

/// Parse the arguments following `check`: exactly one path, no flags.
pub fn parse_check_args(args: &[String]) -> Result<&str, CliError> {
    if let Some(flag) = args.iter().find(|arg| arg.starts_with('-')) {
        return Err(CliError::UnknownOption {
            command: "check",
            option: flag.clone(),
        });
    }
    args.first()
        .map(String::as_str)
        .ok_or(CliError::MissingPath { command: "check" })
}

/// Render the check report: one `[line N] Error: ...` row per error, then
/// a summary.
pub fn render_check(path: &str, output: &LexOutput<'_>) -> String {
    let mut out = String::new();
    for err in &output.errors {
        let _ = writeln!(out, "{err}");
    }
    match output.error_count() {
        0 => {
            let _ = writeln!(out, "{path}: no lexical errors");
        }
        1 => {
            let _ = writeln!(out, "{path}: 1 lexical error");
        }
        n => {
            let _ = writeln!(out, "{path}: {n} lexical errors");
        }
    }
    out
}

/// Lex a file and report its errors.
///
/// Returns `Ok(true)` when the file is free of lexical errors. The report
/// goes to stdout for a clean file and to stderr otherwise.
pub fn check_file(path: &str) -> Result<bool, CliError> {
    let content = read_file(path)?;
    let buf = SourceBuffer::new(&content);
    let output = lex(&buf);
    let report = render_check(path, &output);

    if output.has_errors() {
        eprint!("{report}");
        Ok(false)
    } else {
        print!("{report}");
        Ok(true)
    }
}
