//! Bytecode execution.

pub mod error;
pub mod stack;
pub mod vm;
