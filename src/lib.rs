#[macro_use]
extern crate lazy_static;

pub mod ast;
pub mod cfg;
pub mod cli;
pub mod driver;
pub mod errors;
pub mod output;
pub mod parse;
pub mod pathlib;
pub mod sema;
pub mod span;
