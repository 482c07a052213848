use crate::token::{Span, Token, TokenKind};

/// Sequential token supply with one-token pushback.
///
/// The parser peeks by taking a token with `next` and, when it turns out
/// not to be wanted, returning it with `push_back`. It never holds more
/// than one returned token at a time, so a single slot suffices.
pub trait TokenSource {
    /// Next token in sequence. Once the stream is exhausted this keeps
    /// returning an `Eof` token rather than failing.
    fn next(&mut self) -> Token;

    /// Return the token most recently obtained from `next`, to be
    /// re-delivered by the following `next` call.
    fn push_back(&mut self, token: Token);
}

pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    pushback: Option<Token>,
    end_span: Span,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end_span = tokens
            .last()
            .map(|t| t.span.clone())
            .unwrap_or(Span { line: 1, column: 1 });
        Self {
            tokens,
            pos: 0,
            pushback: None,
            end_span,
        }
    }
}

impl TokenSource for TokenStream {
    fn next(&mut self) -> Token {
        if let Some(token) = self.pushback.take() {
            return token;
        }
        match self.tokens.get(self.pos) {
            Some(token) => {
                self.pos += 1;
                token.clone()
            }
            None => Token {
                kind: TokenKind::Eof,
                span: self.end_span.clone(),
            },
        }
    }

    fn push_back(&mut self, token: Token) {
        // Lookahead depth is one: the previous pushback must have been
        // consumed before another token can be returned.
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind) -> Token {
        Token {
            kind,
            span: Span { line: 1, column: 1 },
        }
    }

    #[test]
    fn redelivers_pushed_back_token() {
        let mut stream = TokenStream::new(vec![
            tok(TokenKind::Var("a".into())),
            tok(TokenKind::Eof),
        ]);
        let first = stream.next();
        stream.push_back(first.clone());
        assert_eq!(stream.next(), first);
        assert!(stream.next().is_eof());
    }

    #[test]
    fn exhausted_stream_keeps_yielding_eof() {
        let mut stream = TokenStream::new(vec![tok(TokenKind::Eof)]);
        assert!(stream.next().is_eof());
        assert!(stream.next().is_eof());
        assert!(stream.next().is_eof());
    }
}
