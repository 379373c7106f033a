//! Scanned tokens and in-band scan errors.

use crate::TokenKind;

/// A classified fragment of source text.
///
/// `text` borrows from the [`SourceBuffer`](crate::SourceBuffer) the token
/// was scanned from, except for [`TokenKind::Error`] tokens, whose text is a
/// static diagnostic message (see [`ScanError::message`]). The `'src`
/// lifetime ties every token to its buffer: a token cannot outlive the
/// source it points into.
///
/// Tokens carry no parsed value. Converting numbers and stripping string
/// quotes is left to the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The lexeme, or the diagnostic message for error tokens.
    pub text: &'src str,
    /// 1-based line of the token's first character. For error tokens, the
    /// line the scanner was on when it gave up.
    pub line: u32,
    /// Byte offset of the token's first character in the source.
    pub offset: u32,
}

/// Size assertion: Token should be <= 32 bytes on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<Token<'static>>() <= 32);

impl Token<'_> {
    /// Returns `true` for the end-of-input sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns `true` for lexical error tokens.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// The scan error this token reports, if it is an error token.
    pub fn error(&self) -> Option<ScanError> {
        if self.is_error() {
            ScanError::from_message(self.text)
        } else {
            None
        }
    }

    /// Byte offset one past the end of the lexeme.
    ///
    /// Error tokens do not cover source text, so their end equals their
    /// offset.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "lexemes are slices of a source whose length fits in u32"
    )]
    pub fn end(&self) -> u32 {
        if self.is_error() {
            self.offset
        } else {
            self.offset + self.text.len() as u32
        }
    }
}

/// A lexical error reported through an error token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// End of input reached inside a `'...'` string literal.
    UnterminatedString,
    /// A lead character that starts no token.
    UnexpectedCharacter,
}

impl ScanError {
    /// The diagnostic message carried as the error token's text.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnterminatedString => "Unterminated string.",
            Self::UnexpectedCharacter => "Unexpected character.",
        }
    }

    /// Recover the error from an error token's text.
    pub fn from_message(message: &str) -> Option<Self> {
        match message {
            "Unterminated string." => Some(Self::UnterminatedString),
            "Unexpected character." => Some(Self::UnexpectedCharacter),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ScanError {}

#[cfg(test)]
mod tests;
