pub mod error;
pub mod parser;

pub use error::{format_parse_error, ParseError, ParseErrorKind};
pub use parser::Parser;

use crate::ast::Program;
use crate::token::Token;

pub fn parse_program(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::from_tokens(tokens)
}
