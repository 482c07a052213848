use crate::token::{Span, TokenKind};

#[derive(Debug, Clone)]
pub enum ParseErrorKind {
    /// No production matches the token at this point.
    UnexpectedToken(TokenKind),
    /// A specific terminal was required and something else showed up.
    ExpectedToken(&'static str),
    UnexpectedEof,
}

/// A fatal grammar violation. Parsing stops at the first one; there is
/// no recovery and no partial tree.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
        }
    }
}

pub fn format_parse_error(src: &str, err: &ParseError, filename: &str) -> String {
    let mut out = format!(
        "Parse error: {}\n --> {}:{}:{}",
        err.message, filename, err.span.line, err.span.column
    );
    out.push_str(&render_snippet(src, &err.span));
    out
}

/// The offending source line with a caret under the token.
pub(crate) fn render_snippet(src: &str, span: &Span) -> String {
    let line_idx = span.line.saturating_sub(1);
    match src.lines().nth(line_idx) {
        Some(line_text) => {
            let gutter = span.line.to_string();
            format!(
                "\n{} | {}\n{}   {}^",
                gutter,
                line_text,
                " ".repeat(gutter.len()),
                " ".repeat(span.column.saturating_sub(1))
            )
        }
        None => String::new(),
    }
}
