pub use crate::shared::error::Error;
pub use crate::shared::value::Value;
pub use crate::bytecode::Chunk;

#[cfg(feature="compiler")]
pub mod parser {
    //! Sourcecode parsing.
    pub use crate::frontend::parser::{parse, error::{ParseError, ParseErrorKind, ParseResult}};
}

#[cfg(feature="compiler")]
pub mod ast {
    //! Abstract syntax tree representation.
    pub use crate::frontend::ast::*;
}

#[cfg(feature="compiler")]
pub mod compiler {
    //! Bytecode generation.
    pub use crate::bytecode::Chunk;
    pub use crate::bytecode::compiler::{compile, error::{CompileError, CompileErrorKind, CompileResult}};
    pub use crate::bytecode::opcodes::OpCode;
}

#[cfg(feature="runtime")]
pub mod runtime {
    //! Bytecode execution.
    pub use crate::bytecode::runtime::vm::{VM, VMState, VMConfig};
    pub use crate::bytecode::runtime::error::{RuntimeError, RuntimeErrorKind, RuntimeResult};
    pub mod stack {
        //! Virtual machine stack.
        pub use crate::bytecode::runtime::stack::Stack;
    }
}

pub mod disassembler {
    //! Human readable chunk listings.
    pub use crate::bytecode::disassembler::{disassemble, disassemble_instruction, write_disassembly};
}
