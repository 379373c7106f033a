//! Lexical errors collected from the scanner's in-band error tokens.

use kvasar_lexer_core::{ScanError, Token};

/// A lexical error with its source location.
///
/// Displays in the classic report format: `[line N] Error: <message>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexError {
    /// What went wrong.
    pub kind: ScanError,
    /// Line the scanner was on when the error was detected (1-based).
    pub line: u32,
    /// Byte offset where the offending token started.
    pub offset: u32,
}

impl LexError {
    /// Recover the error carried by an error token.
    ///
    /// Returns `None` for every non-error token.
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        token.error().map(|kind| Self {
            kind,
            line: token.line,
            offset: token.offset,
        })
    }

    /// The human-readable message, without location.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
