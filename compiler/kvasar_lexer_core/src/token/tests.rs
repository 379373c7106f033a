use super::*;

fn token(kind: TokenKind, text: &str, offset: u32) -> Token<'_> {
    Token {
        kind,
        text,
        line: 1,
        offset,
    }
}

#[test]
fn end_covers_lexeme() {
    let tok = token(TokenKind::Identifier, "count", 4);
    assert_eq!(tok.end(), 9);
}

#[test]
fn eof_is_zero_width() {
    let tok = token(TokenKind::Eof, "", 12);
    assert!(tok.is_eof());
    assert_eq!(tok.end(), 12);
}

#[test]
fn error_token_does_not_cover_source() {
    let tok = token(
        TokenKind::Error,
        ScanError::UnterminatedString.message(),
        3,
    );
    assert!(tok.is_error());
    assert_eq!(tok.end(), 3);
    assert_eq!(tok.error(), Some(ScanError::UnterminatedString));
}

#[test]
fn non_error_token_has_no_scan_error() {
    // A string literal whose text happens to look like a message.
    let tok = token(TokenKind::String, "Unexpected character.", 0);
    assert_eq!(tok.error(), None);
}

#[test]
fn scan_error_messages() {
    assert_eq!(
        ScanError::UnterminatedString.message(),
        "Unterminated string."
    );
    assert_eq!(
        ScanError::UnexpectedCharacter.message(),
        "Unexpected character."
    );
    assert_eq!(
        ScanError::UnexpectedCharacter.to_string(),
        "Unexpected character."
    );
}

#[test]
fn scan_error_message_round_trip() {
    for err in [ScanError::UnterminatedString, ScanError::UnexpectedCharacter] {
        assert_eq!(ScanError::from_message(err.message()), Some(err));
    }
    assert_eq!(ScanError::from_message("Unexpected character. "), None);
}
