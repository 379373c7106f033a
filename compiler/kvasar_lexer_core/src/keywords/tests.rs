use super::*;

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("case"), Some(TokenKind::Case));
    assert_eq!(lookup("break"), Some(TokenKind::Break));
    assert_eq!(lookup("do"), Some(TokenKind::Do));
    assert_eq!(lookup("end"), Some(TokenKind::End));
}

#[test]
fn declaration_keywords() {
    assert_eq!(lookup("def"), Some(TokenKind::Def));
    assert_eq!(lookup("ret"), Some(TokenKind::Ret));
}

#[test]
fn literal_keywords() {
    assert_eq!(lookup("null"), Some(TokenKind::Null));
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
}

#[test]
fn statement_keywords() {
    assert_eq!(lookup("echo"), Some(TokenKind::Echo));
}

#[test]
fn every_fixed_keyword_lexeme_resolves_to_itself() {
    let kinds = [
        TokenKind::Do,
        TokenKind::End,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Case,
        TokenKind::Break,
        TokenKind::Ret,
        TokenKind::Def,
        TokenKind::Echo,
        TokenKind::Null,
        TokenKind::True,
        TokenKind::False,
    ];
    for kind in kinds {
        let Some(text) = kind.lexeme() else {
            panic!("{kind:?} should have a fixed lexeme");
        };
        assert_eq!(lookup(text), Some(kind), "{text:?}");
    }
}

#[test]
fn prefixes_are_identifiers() {
    for text in ["d", "de", "e", "en", "ec", "ech", "wh", "whil", "fals", "nul"] {
        assert_eq!(lookup(text), None, "{text:?}");
        assert_eq!(classify(text), TokenKind::Identifier);
    }
}

#[test]
fn extensions_are_identifiers() {
    for text in ["doer", "definitely", "ends", "iff", "returned", "echoes", "nullable", "breaker"] {
        assert_eq!(lookup(text), None, "{text:?}");
        assert_eq!(classify(text), TokenKind::Identifier);
    }
}

#[test]
fn matching_is_case_sensitive() {
    for text in ["If", "ELSE", "True", "Null", "DEF", "Echo"] {
        assert_eq!(lookup(text), None, "{text:?}");
    }
}

#[test]
fn other_languages_keywords_are_identifiers() {
    for text in ["let", "fn", "return", "for", "print", "nil", "elif"] {
        assert_eq!(classify(text), TokenKind::Identifier, "{text:?}");
    }
}

#[test]
fn empty_text_is_not_a_keyword() {
    assert_eq!(lookup(""), None);
}
