//! Low-level scanner for Kvasar source text.
//!
//! Converts a [`SourceBuffer`] into [`Token`]s on demand. Tokens borrow
//! their text from the buffer, so no token text is ever allocated.
//!
//! ```
//! use kvasar_lexer_core::{Scanner, SourceBuffer, TokenKind};
//!
//! let buf = SourceBuffer::new("echo 1 + 2");
//! let mut scanner = Scanner::new(&buf);
//! assert_eq!(scanner.next_token().kind, TokenKind::Echo);
//! assert_eq!(scanner.next_token().text, "1");
//! ```
//!
//! Lexical errors never abort the scan. They are reported in-band as
//! [`TokenKind::Error`] tokens whose text is the diagnostic message.

mod cursor;
mod keywords;
mod scanner;
mod source_buffer;
mod tag;
mod token;

pub use cursor::Cursor;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use tag::TokenKind;
pub use token::{ScanError, Token};
