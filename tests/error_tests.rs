use corgi::lexer::lex;
use corgi::parser::{format_parse_error, parse_program, ParseErrorKind};
use corgi::parser::parser::Parser;
use corgi::stream::TokenStream;
use corgi::token::{Span, Token, TokenKind};

fn parse_err(src: &str) -> corgi::parser::ParseError {
    parse_program(lex(src).unwrap()).unwrap_err()
}

#[test]
fn program_must_start_with_a_call() {
    let err = parse_err(") main()");
    assert!(matches!(err.kind, ParseErrorKind::ExpectedToken("identifier")));
}

#[test]
fn statement_cannot_start_with_punctuation() {
    // A bare `)` where a statement should begin aborts the parse.
    let tokens = vec![
        Token {
            kind: TokenKind::Single(')'),
            span: Span { line: 1, column: 1 },
        },
        Token {
            kind: TokenKind::Eof,
            span: Span { line: 1, column: 2 },
        },
    ];
    let err = Parser::new(TokenStream::new(tokens))
        .parse_statement()
        .unwrap_err();
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken(TokenKind::Single(')'))
    ));
    assert!(err.message.contains("cannot begin a statement"));
}

#[test]
fn identifier_statement_needs_assign_or_call() {
    let err = parse_err("main()\ndef main()\nx + 1\nend");
    assert!(matches!(
        err.kind,
        ParseErrorKind::ExpectedToken("`=` or `(`")
    ));
}

#[test]
fn missing_end_is_an_eof_error() {
    let err = parse_err("main()\ndef main()\nx = 1\n");
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof));
}

#[test]
fn unbalanced_parenthesis_in_expression() {
    let err = parse_err("main()\ndef main()\nx = (1 + 2\nend");
    assert!(matches!(err.kind, ParseErrorKind::ExpectedToken(")")));
    assert_eq!(err.span.line, 4);
}

#[test]
fn factor_cannot_start_with_an_operator() {
    let err = parse_err("main()\ndef main()\nx = * 2\nend");
    assert!(err.message.contains("cannot start a factor"));
}

#[test]
fn two_argument_builtin_requires_a_comma() {
    let err = parse_err("main()\ndef main()\nx = pow(2 3)\nend");
    assert!(matches!(err.kind, ParseErrorKind::ExpectedToken(",")));
}

#[test]
fn rendered_diagnostic_points_at_the_token() {
    let src = "main()\ndef main()\nx = (1 + 2\nend";
    let err = parse_err(src);
    let rendered = format_parse_error(src, &err, "bad.corgi");
    assert!(rendered.contains("Expected `)`"));
    assert!(rendered.contains("bad.corgi:4:"));
    assert!(rendered.contains('^'));
}
