use thiserror::Error;
use crate::Line;
use crate::frontend::ast::ExprId;

/// Represents the various possible compiler error-kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompileErrorKind {
    /// A numeric literal that does not denote a finite value, e.g. `1e999`.
    #[error("Malformed numeric literal")]
    MalformedLiteral,
    /// More literals than a constant index can address.
    #[error("Too many constants in one chunk")]
    ConstantPoolOverflow,
    /// A construct the front end accepts but which has no runtime representation.
    #[error("Unsupported {0}")]
    Unsupported(&'static str),
    /// A node references a child that is not in the arena or does not precede it.
    #[error("Invalid node reference {0:?}")]
    InvalidNode(ExprId),
}

/// An error reported by the compiler.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} on line {line}")]
pub struct CompileError {
    kind: CompileErrorKind,
    line: Line,
}

impl CompileError {
    pub(crate) fn new(kind: CompileErrorKind, line: Line) -> CompileError {
        Self { kind, line }
    }
    /// The kind of the error.
    pub fn kind(self: &Self) -> &CompileErrorKind {
        &self.kind
    }
    /// Source line of the offending node. 0 if a statement root itself could not be resolved.
    pub fn line(self: &Self) -> Line {
        self.line
    }
}

pub type CompileResult<T = ()> = Result<T, CompileError>;
