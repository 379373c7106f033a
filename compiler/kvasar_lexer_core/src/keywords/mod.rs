//! Reserved word resolution.
//!
//! The lookup uses the identifier's length as a first-pass filter (reserved
//! words are 2-5 bytes), then matches against the words of that length.
//! Because the whole scanned text is compared, prefixes (`d`, `de`) and
//! extensions (`doer`, `definitely`) of a reserved word never match it.

use crate::TokenKind;

/// Look up a reserved word by its exact, case-sensitive spelling.
///
/// Returns `None` for plain identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "def" => Some(TokenKind::Def),
            "end" => Some(TokenKind::End),
            "ret" => Some(TokenKind::Ret),
            _ => None,
        },
        4 => match text {
            "case" => Some(TokenKind::Case),
            "echo" => Some(TokenKind::Echo),
            "else" => Some(TokenKind::Else),
            "null" => Some(TokenKind::Null),
            "true" => Some(TokenKind::True),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "false" => Some(TokenKind::False),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        _ => None,
    }
}

/// Classify scanned identifier text as a reserved word or a plain identifier.
#[inline]
pub(crate) fn classify(text: &str) -> TokenKind {
    lookup(text).unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests;
