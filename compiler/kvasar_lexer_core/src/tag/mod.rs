//! Token kind vocabulary.
//!
//! `TokenKind` is a one-byte tag. Discriminants are grouped into semantic
//! ranges so that category checks are range comparisons:
//!
//! | range   | category                      |
//! |---------|-------------------------------|
//! | 0-15    | delimiters and punctuation    |
//! | 16-31   | relational and assignment ops |
//! | 32-47   | literals                      |
//! | 48-63   | keywords                      |
//! | 240     | error                         |
//! | 255     | end-of-input                  |

/// Kind of a scanned token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // === Delimiters & Punctuation (0-15) ===
    /// `(`
    LeftParen = 0,
    /// `)`
    RightParen = 1,
    /// `{`
    LeftBrace = 2,
    /// `}`
    RightBrace = 3,
    /// `:`
    Colon = 4,
    /// `,`
    Comma = 5,
    /// `.`
    Dot = 6,
    /// `-`
    Minus = 7,
    /// `+`
    Plus = 8,
    /// `/`
    Slash = 9,
    /// `*`
    Star = 10,

    // === Relational & Assignment (16-31) ===
    /// `=`
    Equal = 16,
    /// `!`
    Bang = 17,
    /// `!=`
    BangEqual = 18,
    /// `<`
    Less = 19,
    /// `<=`
    LessEqual = 20,
    /// `>`
    Greater = 21,
    /// `>=`
    GreaterEqual = 22,

    // === Literals (32-47) ===
    /// Identifier (`foo`, `_tmp1`).
    Identifier = 32,
    /// Single-quoted string, delimiters included in the lexeme.
    String = 33,
    /// Decimal integer or decimal fraction (`42`, `3.14`).
    Number = 34,
    /// `null`
    Null = 35,
    /// `true`
    True = 36,
    /// `false`
    False = 37,

    // === Keywords (48-63) ===
    /// `do`
    Do = 48,
    /// `end`
    End = 49,
    /// `if`
    If = 50,
    /// `else`
    Else = 51,
    /// `while`
    While = 52,
    /// `case`
    Case = 53,
    /// `break`
    Break = 54,
    /// `ret`
    Ret = 55,
    /// `def`
    Def = 56,
    /// `echo`
    Echo = 57,

    // === Control ===
    /// Lexical error. The token text is the diagnostic message.
    Error = 240,
    /// End of input. Returned forever once the source is exhausted.
    Eof = 255,
}

impl TokenKind {
    /// Stable uppercase name used in token dumps (`LEFT_PAREN`, `BANG_EQUAL`).
    pub fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Colon => "COLON",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Equal => "EQUAL",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Do => "DO",
            Self::End => "END",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::While => "WHILE",
            Self::Case => "CASE",
            Self::Break => "BREAK",
            Self::Ret => "RET",
            Self::Def => "DEF",
            Self::Echo => "ECHO",
            Self::Error => "ERROR",
            Self::Eof => "EOF",
        }
    }

    /// The fixed source spelling of this kind, if it has one.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, strings,
    /// numbers) and for the control kinds.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Slash => "/",
            Self::Star => "*",
            Self::Equal => "=",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Do => "do",
            Self::End => "end",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Case => "case",
            Self::Break => "break",
            Self::Ret => "ret",
            Self::Def => "def",
            Self::Echo => "echo",
            Self::Identifier | Self::String | Self::Number | Self::Error | Self::Eof => {
                return None
            }
        };
        Some(text)
    }

    /// Delimiters and punctuation (`(`, `,`, `+`, ...).
    #[inline]
    pub fn is_punctuation(self) -> bool {
        (self as u8) < 16
    }

    /// Relational and assignment operators (`=`, `!=`, `<=`, ...).
    #[inline]
    pub fn is_operator(self) -> bool {
        (16..32).contains(&(self as u8))
    }

    /// Literal kinds, including the `null`/`true`/`false` literal keywords.
    #[inline]
    pub fn is_literal(self) -> bool {
        (32..48).contains(&(self as u8))
    }

    /// Reserved words: the keyword range plus the literal keywords.
    #[inline]
    pub fn is_keyword(self) -> bool {
        (48..64).contains(&(self as u8)) || matches!(self, Self::Null | Self::True | Self::False)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
