//! Forward-only byte cursor for the scanner.
//!
//! Reads are unchecked against the source length: the buffer behind the
//! cursor always has a `0x00` sentinel and zero padding after the source, so
//! `current()`, `peek()` and `peek2()` never leave the allocation. A zero
//! byte is only end-of-input when `pos` has reached the source length;
//! before that it is a literal NUL in the script.

/// Position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// Obtained from [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
/// `Copy`, so a scanner can save a position and slice back to it later.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source, sentinel and padding. `buf[source_len..]` is all `'\0'`.
    buf: &'a str,
    pos: u32,
    source_len: u32,
}

// &str (16) + two u32 (8)
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// `buf` must hold at least three zero bytes from `source_len` on.
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "buffer too short for sentinel and lookahead"
        );
        debug_assert_eq!(buf.as_bytes()[source_len as usize], 0, "missing sentinel");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.buf.as_bytes()[pos as usize]
    }

    /// Byte under the cursor; `0` at end-of-input and at interior NULs.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Step one byte forward. Stops on the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Byte length of the UTF-8 scalar introduced by `byte`.
    ///
    /// Continuation bytes and bytes that can never start a scalar count as
    /// one, so callers always make progress.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole character, keeping `pos` on a char boundary.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text in `start..end`.
    ///
    /// Both ends must be char boundaries inside the source. Positions the
    /// scanner records always are: it only stops on ASCII bytes or after a
    /// whole character.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end && end <= self.source_len, "bad slice {start}..{end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Consume bytes while `pred` holds.
    ///
    /// `pred(0)` must be `false`; the sentinel is what ends the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Jump to the next `\n` (left unconsumed) or to end-of-input.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the jump stays within the source, whose length is a u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest()) {
            Some(n) => self.pos += n as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Jump over string content to the next `'` or `\n` and return it.
    ///
    /// Returns `0` when the source ends first. There are no escapes, so
    /// every other byte (NULs included) is content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "the jump stays within the source, whose length is a u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        match memchr::memchr2(b'\'', b'\n', self.rest()) {
            Some(n) => {
                self.pos += n as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Unscanned source bytes, sentinel excluded.
    fn rest(&self) -> &'a [u8] {
        &self.buf.as_bytes()[self.pos as usize..self.source_len as usize]
    }
}
