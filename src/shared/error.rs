use thiserror::Error;
#[cfg(feature="compiler")]
use crate::frontend::parser::error::ParseError;
#[cfg(feature="compiler")]
use crate::bytecode::compiler::error::CompileError;
#[cfg(feature="runtime")]
use crate::bytecode::runtime::error::RuntimeError;

/// An error generated during program compilation or execution.
#[derive(Clone, Debug, Error)]
pub enum Error {
    #[cfg(feature="compiler")]
    #[error(transparent)]
    ParseError(#[from] ParseError),
    #[cfg(feature="compiler")]
    #[error(transparent)]
    CompileError(#[from] CompileError),
    #[cfg(feature="runtime")]
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

impl Error {
    /// Source line the error was reported for, if known. Runtime errors carry a bytecode offset instead.
    pub fn line(self: &Self) -> Option<crate::Line> {
        #[allow(unreachable_patterns)]
        match self {
            #[cfg(feature="compiler")]
            Self::ParseError(e) => Some(e.line()),
            #[cfg(feature="compiler")]
            Self::CompileError(e) => Some(e.line()),
            _ => None,
        }
    }
}
