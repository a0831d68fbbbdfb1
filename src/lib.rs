//! Clear, a tiny expression language compiled to bytecode and run on a stack machine.
//!
//! Source code is [parsed](parser::parse) into an expression arena, [compiled](compiler::compile) into a [Chunk]
//! and executed by a [VM](runtime::VM). The [disassembler] renders chunks for inspection.
//!
//! ```
//! let result = clear::run("1 + 2 * 3").unwrap();
//! assert_eq!(result, clear::Value::new(7.0));
//! ```

mod config;
#[path="shared/shared.rs"]
mod shared;
#[cfg(feature="compiler")]
#[path="frontend/frontend.rs"]
pub mod frontend;
#[macro_use]
#[path="bytecode/bytecode.rs"]
pub mod bytecode;
mod interface;

pub use config::*;
pub use interface::*;

/// One stop shop to `parse` and `compile` given Clear source code.
#[cfg(feature="compiler")]
pub fn build(source: &str) -> Result<Chunk, Error> {
    let program = parser::parse(source)?;
    Ok(compiler::compile(&program)?)
}

/// One stop shop to `parse`, `compile` and `run` given Clear source code on a fresh VM.
#[cfg(all(feature="compiler", feature="runtime"))]
pub fn run(source: &str) -> Result<Value, Error> {
    let chunk = build(source)?;
    Ok(runtime::VM::new().interpret(&chunk)?)
}
