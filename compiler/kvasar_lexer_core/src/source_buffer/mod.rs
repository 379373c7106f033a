//! Owned script text with a zero sentinel.
//!
//! The scanner never compares its position against the source length in
//! hot loops. Instead the text is followed by `'\0'` bytes, at least three
//! and up to the next 64-byte boundary, and every classification loop stops
//! on a zero byte by construction.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Script text prepared for scanning.
///
/// ```text
/// | source ... | 0 | 0 0 0 ... |
/// 0        len ^   ^ padding up to a multiple of 64
///         sentinel
/// ```
///
/// Tokens borrow from the buffer, so it must outlive every token scanned
/// from it; the borrow checker enforces that through [`Token`]'s lifetime.
///
/// [`Token`]: crate::Token
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: String,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a fresh sentinel-terminated buffer.
    ///
    /// Positions are `u32`; a source too long for that is cut at the last
    /// char boundary that fits.
    pub fn new(source: &str) -> Self {
        let source = truncate_to_u32(source);
        let len = source.len();
        // Sentinel plus two bytes of lookahead, so `peek2()` on the sentinel
        // is in bounds.
        let padded_len = (len + 3 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat_n('\0', padded_len - len));

        Self {
            buf,
            source_len: u32::try_from(len).unwrap_or(u32::MAX),
        }
    }

    /// The script text, without sentinel or padding.
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Script text plus sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// A cursor at the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Script length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// Cut `source` so that it, its sentinel and padding stay addressable by
/// `u32` positions.
fn truncate_to_u32(source: &str) -> &str {
    let max = u32::MAX as usize - CACHE_LINE;
    if source.len() <= max {
        return source;
    }
    let mut end = max;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}
