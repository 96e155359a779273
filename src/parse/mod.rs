pub mod lexer;
mod parser;

pub use lexer::Lexer;
pub use parser::{ParseResult, Parser};
