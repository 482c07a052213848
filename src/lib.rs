pub mod ast;
pub mod cli;
pub mod fmt;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod token;
