//! Lexer for Kvasar.
//!
//! Drives the [`kvasar_lexer_core`] scanner over a whole source buffer and
//! collects its in-band error tokens into [`LexError`] values, so callers
//! can report every lexical error before parsing.

mod lex_error;
mod output;

pub use kvasar_lexer_core::{ScanError, SourceBuffer, Token, TokenKind};
pub use lex_error::LexError;
pub use output::LexOutput;

use kvasar_lexer_core::Scanner;

/// Options controlling a lexing pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Stop at the first error token instead of scanning to the end.
    ///
    /// The output still ends with an `Eof` token, placed at the line and
    /// offset where scanning stopped.
    pub stop_at_first_error: bool,
}

/// Lex a whole buffer, collecting every token and every error.
pub fn lex(source: &SourceBuffer) -> LexOutput<'_> {
    lex_with(source, LexOptions::default())
}

/// Lex a buffer with the given options.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with(source: &SourceBuffer, options: LexOptions) -> LexOutput<'_> {
    let mut scanner = Scanner::new(source);
    let mut output = LexOutput::default();

    loop {
        let tok = scanner.next_token();
        output.tokens.push(tok);

        if tok.is_eof() {
            break;
        }

        let Some(err) = LexError::from_token(&tok) else {
            continue;
        };
        tracing::trace!(line = err.line, offset = err.offset, "{}", err.kind);
        output.errors.push(err);

        if options.stop_at_first_error {
            output.tokens.push(Token {
                kind: TokenKind::Eof,
                text: "",
                line: scanner.line(),
                offset: scanner.pos(),
            });
            break;
        }
    }

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexing complete"
    );
    output
}
