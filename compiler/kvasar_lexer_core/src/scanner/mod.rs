//! Hand-written scanner producing [`Token`]s one at a time.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! tokens with zero heap allocation: token text is a slice of the source
//! buffer, and error tokens point at static messages.
//!
//! # Design
//!
//! Each call first skips trivia (spaces, tabs, carriage returns, newlines
//! and `//` comments), then marks the token start and dispatches on the lead
//! byte. Each arm calls a focused method that consumes the token and returns
//! it. The sentinel byte (`0x00` at the end of the source) dispatches to
//! `eof()`, which never advances, so `Eof` is returned forever once reached.
//!
//! Lookahead is limited to `peek()`: a `.` joins a number only if a digit
//! follows it, and `!`, `<`, `>` take a following `=`. Nothing is ever
//! un-consumed.

use std::iter::FusedIterator;

use crate::cursor::Cursor;
use crate::{keywords, ScanError, SourceBuffer, Token, TokenKind};

/// Scanner state for one scan session.
///
/// Independent sessions need independent scanners; a scanner shares nothing
/// with any other instance.
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
    /// Offset of the first byte of the token being scanned.
    start: u32,
    /// Line the cursor is on (1-based).
    line: u32,
    /// Line the token being scanned started on.
    token_line: u32,
}

impl<'src> Scanner<'src> {
    /// Bind a new scanner to `source`, positioned at its first byte on line 1.
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self {
            cursor: source.cursor(),
            start: 0,
            line: 1,
            token_line: 1,
        }
    }

    /// Re-initialize the scanner over a (possibly different) source.
    ///
    /// Resets the cursor, the token start and the line counter.
    pub fn reset(&mut self, source: &'src SourceBuffer) {
        *self = Self::new(source);
    }

    /// Line the cursor is currently on (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current byte offset of the cursor.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next token.
    ///
    /// Returns `TokenKind::Eof` with empty text when the source is
    /// exhausted. Subsequent calls after `Eof` continue to return `Eof`.
    pub fn next_token(&mut self) -> Token<'src> {
        self.skip_trivia();

        self.start = self.cursor.pos();
        self.token_line = self.line;

        match self.cursor.current() {
            0 if self.cursor.is_eof() => self.eof(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'\'' => self.string(),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'{' => self.single(TokenKind::LeftBrace),
            b'}' => self.single(TokenKind::RightBrace),
            b':' => self.single(TokenKind::Colon),
            b',' => self.single(TokenKind::Comma),
            b'.' => self.single(TokenKind::Dot),
            b'-' => self.single(TokenKind::Minus),
            b'+' => self.single(TokenKind::Plus),
            b'/' => self.single(TokenKind::Slash),
            b'*' => self.single(TokenKind::Star),
            b'=' => self.single(TokenKind::Equal),
            b'!' => self.with_equal(TokenKind::Bang, TokenKind::BangEqual),
            b'<' => self.with_equal(TokenKind::Less, TokenKind::LessEqual),
            b'>' => self.with_equal(TokenKind::Greater, TokenKind::GreaterEqual),
            // Interior nulls, other ASCII, and every non-ASCII lead byte
            _ => self.unexpected_character(),
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\r' | b'\t' => {
                    self.cursor.eat_while(|b| matches!(b, b' ' | b'\r' | b'\t'));
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                b'/' if self.cursor.peek() == b'/' => {
                    // The newline is left for the next iteration to count.
                    self.cursor.eat_until_newline_or_eof();
                }
                _ => return,
            }
        }
    }

    // ─── Token construction ─────────────────────────────────────────

    /// Finish a token covering `start..current`.
    fn make(&self, kind: TokenKind) -> Token<'src> {
        Token {
            kind,
            text: self.cursor.slice_from(self.start),
            line: self.token_line,
            offset: self.start,
        }
    }

    #[cold]
    fn error(&self, err: ScanError) -> Token<'src> {
        Token {
            kind: TokenKind::Error,
            text: err.message(),
            line: self.line,
            offset: self.start,
        }
    }

    fn eof(&self) -> Token<'src> {
        self.make(TokenKind::Eof)
    }

    // ─── Identifiers ────────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self) -> Token<'src> {
        // The lead byte is itself an identifier-continue byte.
        self.cursor.eat_while(is_ident_continue);
        let kind = keywords::classify(self.cursor.slice_from(self.start));
        self.make(kind)
    }

    // ─── Numbers ────────────────────────────────────────────────────

    fn number(&mut self) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // Fraction only when a digit follows the dot: `5.foo` stays `5` `.` `foo`.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        self.make(TokenKind::Number)
    }

    // ─── Strings ────────────────────────────────────────────────────

    fn string(&mut self) -> Token<'src> {
        self.cursor.advance(); // consume opening '\''
        loop {
            match self.cursor.skip_to_string_delim() {
                b'\'' => {
                    self.cursor.advance(); // consume closing '\''
                    return self.make(TokenKind::String);
                }
                b'\n' => {
                    self.line += 1;
                    self.cursor.advance();
                }
                _ => return self.error(ScanError::UnterminatedString),
            }
        }
    }

    // ─── Operators & punctuation ────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given kind.
    fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.make(kind)
    }

    /// `!`, `<`, `>`: take a following `=` for the two-byte kind.
    fn with_equal(&mut self, one: TokenKind, two: TokenKind) -> Token<'src> {
        self.cursor.advance(); // consume lead byte
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.make(two)
        } else {
            self.make(one)
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn unexpected_character(&mut self) -> Token<'src> {
        // Whole scalar, so the next token starts on a char boundary.
        self.cursor.advance_char();
        self.error(ScanError::UnexpectedCharacter)
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: scan a whole buffer and collect its tokens.
///
/// Returns every token except the final `Eof`, error tokens included.
/// For streaming access, construct a [`Scanner`] directly.
pub fn tokenize(source: &SourceBuffer) -> Vec<Token<'_>> {
    Scanner::new(source).collect()
}
