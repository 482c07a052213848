use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Terminal symbols of the Corgi grammar.
///
/// Reserved words (`def`, `if`, `else`, `end`, `return`) come through as
/// `Var` tokens; keyword-ness is decided by comparing the text. Built-in
/// functions are classified by arity at lex time.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric literal, text preserved exactly as written.
    Num(String),
    /// Identifier or reserved word.
    Var(String),
    /// Double-quoted string literal (content, unescaped).
    Str(String),
    /// One of `( ) , = + - * /`.
    Single(char),
    /// Zero-argument built-in (`nl`, `input`).
    Bif0(String),
    /// One-argument built-in (`print`, `sqrt`, ...).
    Bif1(String),
    /// Two-argument built-in (`pow`, `lt`, ...).
    Bif2(String),
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_single(&self, ch: char) -> bool {
        matches!(&self.kind, TokenKind::Single(c) if *c == ch)
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(&self.kind, TokenKind::Var(name) if name == word)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Num(text) => write!(f, "number `{}`", text),
            TokenKind::Var(name) => write!(f, "`{}`", name),
            TokenKind::Str(_) => write!(f, "string literal"),
            TokenKind::Single(ch) => write!(f, "`{}`", ch),
            TokenKind::Bif0(name) | TokenKind::Bif1(name) | TokenKind::Bif2(name) => {
                write!(f, "built-in `{}`", name)
            }
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}
