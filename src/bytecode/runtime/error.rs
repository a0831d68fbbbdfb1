use thiserror::Error;
use crate::{CodeAddress, ConstIndex};

/// Represents the various possible runtime error-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    /// The instruction byte does not name a known opcode.
    #[error("Unknown opcode {0}")]
    UnknownOpcode(u8),
    /// A value was popped from an empty stack.
    #[error("Stack underflow")]
    StackUnderflow,
    /// A value was pushed onto a full stack.
    #[error("Stack overflow")]
    StackOverflow,
    /// Execution ran past the end of the instruction stream or an operand was truncated.
    #[error("Unexpected end of bytecode")]
    UnexpectedEnd,
    /// A constant index outside of the constant pool. Only reachable with hand-written bytecode.
    #[error("Invalid constant index {0}")]
    InvalidConstant(ConstIndex),
    /// The VM was stepped while halted.
    #[error("VM is not running")]
    NotRunning,
}

/// An error reported by the runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct RuntimeError {
    kind: RuntimeErrorKind,
    offset: CodeAddress,
}

impl RuntimeError {
    pub(crate) fn new(kind: RuntimeErrorKind, offset: CodeAddress) -> RuntimeError {
        Self { kind, offset }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &RuntimeErrorKind {
        &self.kind
    }
    /// Offset of the faulting instruction. Use [Chunk::line](crate::Chunk::line) to map it to a source line.
    pub fn offset(self: &Self) -> CodeAddress {
        self.offset
    }
}

pub type RuntimeResult<T = ()> = Result<T, RuntimeError>;

/// Result of a single instruction handler, located by the dispatcher.
pub type StepResult<T = ()> = Result<T, RuntimeErrorKind>;
