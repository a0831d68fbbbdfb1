//! Compiler frontend. Parses source code into an expression arena.

pub mod ast;
#[path="parser/parser.rs"]
pub mod parser;

pub use parser::parse;
