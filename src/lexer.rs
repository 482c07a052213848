use crate::token::{LexError, Span, Token, TokenKind};

const SINGLES: &[char] = &['(', ')', ',', '=', '+', '-', '*', '/'];

const BIF0: &[&str] = &["nl", "input"];
const BIF1: &[&str] = &["print", "sqrt", "cos", "sin", "atan", "round", "trunc", "not"];
const BIF2: &[&str] = &["pow", "lt", "le", "eq", "ne", "and", "or"];

pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line: usize = 1;
    let mut col: usize = 1;

    while let Some(ch) = chars.next() {
        if ch == '\n' {
            line += 1;
            col = 1;
            continue;
        }

        if ch.is_whitespace() {
            col += 1;
            continue;
        }

        // Line comment
        if ch == '#' {
            while let Some(&nxt) = chars.peek() {
                if nxt == '\n' {
                    break;
                }
                chars.next();
            }
            continue;
        }

        let span = Span { line, column: col };

        if SINGLES.contains(&ch) {
            tokens.push(Token {
                kind: TokenKind::Single(ch),
                span,
            });
            col += 1;
            continue;
        }

        // String literal
        if ch == '"' {
            let mut content = String::new();
            let mut esc = false;
            let mut cur_col = col + 1;
            let mut closed = false;
            while let Some(ch2) = chars.next() {
                if esc {
                    match ch2 {
                        'n' => content.push('\n'),
                        't' => content.push('\t'),
                        '"' => content.push('"'),
                        '\\' => content.push('\\'),
                        other => content.push(other),
                    }
                    esc = false;
                } else if ch2 == '\\' {
                    esc = true;
                } else if ch2 == '"' {
                    closed = true;
                    break;
                } else {
                    content.push(ch2);
                }
                if ch2 == '\n' {
                    line += 1;
                    cur_col = 1;
                } else {
                    cur_col += 1;
                }
            }
            if !closed {
                return Err(LexError::new("Unterminated string literal", span));
            }
            tokens.push(Token {
                kind: TokenKind::Str(content),
                span,
            });
            col = cur_col + 1;
            continue;
        }

        // Number literal, text kept as written
        if ch.is_ascii_digit() {
            let mut text = String::new();
            text.push(ch);
            let mut cur_col = col + 1;
            let mut seen_dot = false;
            while let Some(&nxt) = chars.peek() {
                if nxt.is_ascii_digit() || (nxt == '.' && !seen_dot) {
                    if nxt == '.' {
                        seen_dot = true;
                    }
                    text.push(nxt);
                    chars.next();
                    cur_col += 1;
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: TokenKind::Num(text),
                span,
            });
            col = cur_col;
            continue;
        }

        // Identifier, reserved word, or built-in
        if is_ident_start(ch) {
            let mut ident = String::new();
            ident.push(ch);
            let mut cur_col = col + 1;
            while let Some(&nxt) = chars.peek() {
                if is_ident_part(nxt) {
                    ident.push(nxt);
                    chars.next();
                    cur_col += 1;
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: classify_ident(ident),
                span,
            });
            col = cur_col;
            continue;
        }

        return Err(LexError::new(format!("Unexpected character '{}'", ch), span));
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { line, column: col },
    });
    Ok(tokens)
}

/// Built-ins get arity-tagged kinds; everything else (including the
/// reserved words) stays a `Var` token.
fn classify_ident(ident: String) -> TokenKind {
    if BIF0.contains(&ident.as_str()) {
        TokenKind::Bif0(ident)
    } else if BIF1.contains(&ident.as_str()) {
        TokenKind::Bif1(ident)
    } else if BIF2.contains(&ident.as_str()) {
        TokenKind::Bif2(ident)
    } else {
        TokenKind::Var(ident)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
