//! The `lex` command: dump the token stream of a source file.

use std::fmt::Write;

use kvasar_lexer::{lex_with, LexOptions, LexOutput, SourceBuffer};

use super::read_file;
use crate::CliError;

/// Options for `kvasar lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexCommandConfig {
    /// Show each token's byte range.
    pub offsets: bool,
    /// Stop scanning at the first lexical error.
    pub stop_at_first_error: bool,
}

impl LexCommandConfig {
    fn lex_options(self) -> LexOptions {
        LexOptions {
            stop_at_first_error: self.stop_at_first_error,
        }
    }
}

/// Parse the arguments following `lex`.
///
/// Flags may appear before or after the path. The first non-flag argument
/// is the path; later ones are ignored.
pub fn parse_lex_args(args: &[String]) -> Result<(&str, LexCommandConfig), CliError> {
    let mut config = LexCommandConfig::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--offsets" => config.offsets = true,
            "--stop-at-first-error" => config.stop_at_first_error = true,
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownOption {
                    command: "lex",
                    option: flag.to_owned(),
                });
            }
            file if path.is_none() => path = Some(file),
            _ => {}
        }
    }

    let path = path.ok_or(CliError::MissingPath { command: "lex" })?;
    Ok((path, config))
}

/// Render a token dump.
///
/// One token per row: line number (or `|` when unchanged from the previous
/// row), optional byte range, kind name and text. Error tokens show their
/// message in place of source text.
pub fn render_tokens(path: &str, output: &LexOutput<'_>, config: LexCommandConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Tokens for '{path}' ({} tokens, {} errors):",
        output.tokens.len(),
        output.error_count()
    );

    let mut prev_line = 0;
    for tok in &output.tokens {
        if tok.line == prev_line {
            out.push_str("     |");
        } else {
            let _ = write!(out, "  {:>4}", tok.line);
            prev_line = tok.line;
        }

        if config.offsets {
            let _ = write!(out, " {:>6}..{:<6}", tok.offset, tok.end());
        }

        if tok.is_eof() {
            let _ = writeln!(out, " {}", tok.kind.name());
        } else if tok.is_error() {
            let _ = writeln!(out, " {:<13} {}", tok.kind.name(), tok.text);
        } else {
            let _ = writeln!(out, " {:<13} '{}'", tok.kind.name(), tok.text);
        }
    }
    out
}

/// Lex a file and print its token stream.
pub fn lex_file(path: &str, config: LexCommandConfig) -> Result<(), CliError> {
    let content = read_file(path)?;
    let buf = SourceBuffer::new(&content);
    let output = lex_with(&buf, config.lex_options());
    print!("{}", render_tokens(path, &output, config));
    Ok(())
}
