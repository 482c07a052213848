use corgi::fmt::{format_expr, format_program};
use corgi::lexer::lex;
use corgi::parser::parse_program;
use corgi::parser::parser::Parser;
use corgi::stream::TokenStream;

fn parse_source(src: &str) -> corgi::ast::Program {
    parse_program(lex(src).unwrap()).unwrap()
}

fn reformat_expr(src: &str) -> String {
    let tokens = lex(src).unwrap();
    let expr = Parser::new(TokenStream::new(tokens)).parse_expr().unwrap();
    format_expr(&expr)
}

#[test]
fn reparsing_the_reconstruction_is_identity() {
    let program = parse_source(
        r#"
main(3, 4)

def main(a, b)
    "result:\n"
    x = a - b - 2
    y = (a - b) * pow(a, 2)
    if lt(x, y)
        print(-x)
    else
        print(sqrt(y))
    end
    nl()
    return f(x, g())
end

def g()
end
"#,
    );
    let reconstructed = format_program(&program);
    let reparsed = parse_source(&reconstructed);
    assert_eq!(program, reparsed);
}

#[test]
fn formatting_is_idempotent() {
    let program = parse_source("main()\ndef main()\nif x else end\nx = 1 + 2 * 3\nend");
    let first = format_program(&program);
    let second = format_program(&parse_source(&first));
    assert_eq!(first, second);
}

#[test]
fn right_associative_chains_print_without_parentheses() {
    assert_eq!(reformat_expr("a - b - c"), "a - b - c");
    assert_eq!(reformat_expr("a / b / c"), "a / b / c");
}

#[test]
fn grouping_that_fights_the_grammar_keeps_its_parentheses() {
    assert_eq!(reformat_expr("(a - b) - c"), "(a - b) - c");
    assert_eq!(reformat_expr("(a + b) * c"), "(a + b) * c");
    // Redundant parentheses agree with the default grouping and vanish.
    assert_eq!(reformat_expr("a - (b - c)"), "a - b - c");
    assert_eq!(reformat_expr("(a * b) + c"), "a * b + c");
}

#[test]
fn negation_and_calls_print_compactly() {
    assert_eq!(reformat_expr("--x"), "--x");
    assert_eq!(reformat_expr("-(a + b)"), "-(a + b)");
    assert_eq!(reformat_expr("f(g(1), 2)"), "f(g(1), 2)");
    assert_eq!(reformat_expr("pow(x, 2)"), "pow(x, 2)");
}

#[test]
fn program_layout_matches_the_formatter_shape() {
    let program = parse_source("main()\ndef main()\nprint(1)\nend");
    assert_eq!(
        format_program(&program),
        "main()\n\ndef main()\n    print(1)\nend\n"
    );
}

#[test]
fn branchless_if_round_trips() {
    let src = "check()\ndef check()\nif x else end\nend";
    let program = parse_source(src);
    assert_eq!(program, parse_source(&format_program(&program)));
}
