//! Result of lexing a whole source buffer.

use kvasar_lexer_core::Token;

use crate::LexError;

/// Tokens and errors produced by [`lex`](crate::lex).
///
/// `tokens` keeps the scanner's full stream, error tokens included, and
/// always ends with exactly one `Eof`. `errors` holds one [`LexError`] per
/// error token, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput<'src> {
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    /// Returns `true` if any lexical error was found.
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// The first error in source order.
    pub fn first_error(&self) -> Option<&LexError> {
        self.errors.first()
    }

    /// Tokens a parser would consume: everything except error tokens and
    /// the trailing `Eof`.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token<'src>> + '_ {
        self.tokens
            .iter()
            .filter(|tok| !tok.is_error() && !tok.is_eof())
    }

    /// The final `Eof` token, if the stream is non-empty.
    pub fn eof(&self) -> Option<&Token<'src>> {
        self.tokens.last().filter(|tok| tok.is_eof())
    }
}
