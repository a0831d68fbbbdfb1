//! Shared code for frontend and bytecode

pub mod error;
pub mod value;
