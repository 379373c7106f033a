use super::*;

// === Discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    // Delimiters & punctuation: 0-15
    assert_eq!(TokenKind::LeftParen as u8, 0);
    assert_eq!(TokenKind::Star as u8, 10);

    // Relational & assignment: 16-31
    assert_eq!(TokenKind::Equal as u8, 16);
    assert_eq!(TokenKind::GreaterEqual as u8, 22);

    // Literals: 32-47
    assert_eq!(TokenKind::Identifier as u8, 32);
    assert_eq!(TokenKind::False as u8, 37);

    // Keywords: 48-63
    assert_eq!(TokenKind::Do as u8, 48);
    assert_eq!(TokenKind::Echo as u8, 57);

    // Control
    assert_eq!(TokenKind::Error as u8, 240);
    assert_eq!(TokenKind::Eof as u8, 255);
}

#[test]
fn kind_is_one_byte() {
    assert_eq!(std::mem::size_of::<TokenKind>(), 1);
}

// === Lexeme ===

#[test]
fn fixed_lexeme_punctuation() {
    assert_eq!(TokenKind::LeftParen.lexeme(), Some("("));
    assert_eq!(TokenKind::RightParen.lexeme(), Some(")"));
    assert_eq!(TokenKind::LeftBrace.lexeme(), Some("{"));
    assert_eq!(TokenKind::RightBrace.lexeme(), Some("}"));
    assert_eq!(TokenKind::Colon.lexeme(), Some(":"));
    assert_eq!(TokenKind::Comma.lexeme(), Some(","));
    assert_eq!(TokenKind::Dot.lexeme(), Some("."));
    assert_eq!(TokenKind::Minus.lexeme(), Some("-"));
    assert_eq!(TokenKind::Plus.lexeme(), Some("+"));
    assert_eq!(TokenKind::Slash.lexeme(), Some("/"));
    assert_eq!(TokenKind::Star.lexeme(), Some("*"));
}

#[test]
fn fixed_lexeme_operators() {
    assert_eq!(TokenKind::Equal.lexeme(), Some("="));
    assert_eq!(TokenKind::Bang.lexeme(), Some("!"));
    assert_eq!(TokenKind::BangEqual.lexeme(), Some("!="));
    assert_eq!(TokenKind::Less.lexeme(), Some("<"));
    assert_eq!(TokenKind::LessEqual.lexeme(), Some("<="));
    assert_eq!(TokenKind::Greater.lexeme(), Some(">"));
    assert_eq!(TokenKind::GreaterEqual.lexeme(), Some(">="));
}

#[test]
fn fixed_lexeme_keywords() {
    assert_eq!(TokenKind::While.lexeme(), Some("while"));
    assert_eq!(TokenKind::Echo.lexeme(), Some("echo"));
    assert_eq!(TokenKind::Null.lexeme(), Some("null"));
}

#[test]
fn variable_kinds_have_no_lexeme() {
    assert_eq!(TokenKind::Identifier.lexeme(), None);
    assert_eq!(TokenKind::String.lexeme(), None);
    assert_eq!(TokenKind::Number.lexeme(), None);
    assert_eq!(TokenKind::Error.lexeme(), None);
    assert_eq!(TokenKind::Eof.lexeme(), None);
}

// === Categories ===

#[test]
fn category_predicates() {
    assert!(TokenKind::Comma.is_punctuation());
    assert!(!TokenKind::Comma.is_operator());

    assert!(TokenKind::LessEqual.is_operator());
    assert!(!TokenKind::LessEqual.is_punctuation());

    assert!(TokenKind::Number.is_literal());
    assert!(TokenKind::True.is_literal());
    assert!(!TokenKind::Do.is_literal());

    assert!(TokenKind::Ret.is_keyword());
    assert!(TokenKind::Null.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
    assert!(!TokenKind::Eof.is_keyword());
}

// === Names ===

#[test]
fn display_uses_name() {
    assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
    assert_eq!(TokenKind::Identifier.name(), "IDENTIFIER");
}
