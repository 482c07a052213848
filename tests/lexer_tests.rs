use corgi::lexer::lex;
use corgi::token::TokenKind;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_singles_and_numbers() {
    assert_eq!(
        kinds("(3 + 4.5) * x"),
        vec![
            TokenKind::Single('('),
            TokenKind::Num("3".into()),
            TokenKind::Single('+'),
            TokenKind::Num("4.5".into()),
            TokenKind::Single(')'),
            TokenKind::Single('*'),
            TokenKind::Var("x".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn classifies_builtins_by_arity() {
    assert_eq!(
        kinds("nl print pow"),
        vec![
            TokenKind::Bif0("nl".into()),
            TokenKind::Bif1("print".into()),
            TokenKind::Bif2("pow".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn reserved_words_stay_var_tokens() {
    assert_eq!(
        kinds("def if else end return total"),
        vec![
            TokenKind::Var("def".into()),
            TokenKind::Var("if".into()),
            TokenKind::Var("else".into()),
            TokenKind::Var("end".into()),
            TokenKind::Var("return".into()),
            TokenKind::Var("total".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn string_literals_unescape() {
    assert_eq!(
        kinds(r#""a\nb\"c""#),
        vec![TokenKind::Str("a\nb\"c".into()), TokenKind::Eof]
    );
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(
        kinds("x # the rest is ignored\ny"),
        vec![
            TokenKind::Var("x".into()),
            TokenKind::Var("y".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn unterminated_string_is_an_error() {
    let err = lex("\"still open").unwrap_err();
    assert!(err.message.contains("Unterminated"));
}

#[test]
fn unexpected_character_reports_position() {
    let err = lex("x = @").unwrap_err();
    assert_eq!(err.span.line, 1);
    assert_eq!(err.span.column, 5);
}
